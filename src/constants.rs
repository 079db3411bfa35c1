/// Measurement table every point is written to and read from.
pub const DEFAULT_MEASUREMENT: &str = "feature_data";

/// Length of the trailing query window, in days. Every read query is scoped
/// to [now - WINDOW_DAYS, now]; callers cannot widen or narrow it.
pub const WINDOW_DAYS: u32 = 30;

/// Bucket width used for the windowed mean series when none is requested.
pub const DEFAULT_BUCKET_WIDTH: &str = "1h";
