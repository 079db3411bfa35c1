use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Width of one time slice when the trailing window is partitioned for the
/// windowed mean series. Only these four widths are accepted; anything else
/// is rejected at the request boundary before a query is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketWidth {
    FiveMinutes,
    Hour,
    Day,
    Week,
}

impl BucketWidth {
    /// SQL INTERVAL fragment for the bucketing clause. The width reaches the
    /// query text only through this closed mapping, never as caller input.
    pub fn as_sql_interval(&self) -> &'static str {
        match self {
            BucketWidth::FiveMinutes => "INTERVAL 5 MINUTE",
            BucketWidth::Hour => "INTERVAL 1 HOUR",
            BucketWidth::Day => "INTERVAL 1 DAY",
            BucketWidth::Week => "INTERVAL 1 WEEK",
        }
    }
}

impl fmt::Display for BucketWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketWidth::FiveMinutes => write!(f, "5m"),
            BucketWidth::Hour => write!(f, "1h"),
            BucketWidth::Day => write!(f, "1d"),
            BucketWidth::Week => write!(f, "1w"),
        }
    }
}

impl FromStr for BucketWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5m" => Ok(BucketWidth::FiveMinutes),
            "1h" => Ok(BucketWidth::Hour),
            "1d" => Ok(BucketWidth::Day),
            "1w" => Ok(BucketWidth::Week),
            other => Err(Error::Validation(format!(
                "Unsupported interval '{}'. Expected one of: 5m, 1h, 1d, 1w",
                other
            ))),
        }
    }
}

/// Spread summary over a windowed mean series.
///
/// `midrange` is half the spread, (max - min) / 2, not the arithmetic
/// midpoint. The formula is part of the served contract and must not be
/// renamed or corrected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MidrangeSummary {
    pub min: f64,
    pub max: f64,
    pub midrange: f64,
}

impl MidrangeSummary {
    /// Collapses a series of bucket means into its spread summary.
    /// An empty series has no summary; empty buckets never reach this point
    /// because they produce no mean at all.
    pub fn from_series(means: &[f64]) -> Option<Self> {
        if means.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &mean in means {
            if mean < min {
                min = mean;
            }
            if mean > max {
                max = mean;
            }
        }

        Some(Self {
            min,
            max,
            midrange: (max - min) / 2.0,
        })
    }
}
