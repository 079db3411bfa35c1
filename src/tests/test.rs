pub use crate::*;

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::api::{error_code, status_for};
    use axum::http::StatusCode;
    use rand::prelude::*;

    fn generate_series(size: usize) -> Vec<f64> {
        let mut rng = thread_rng();
        (0..size).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
    }

    // --- Bucket width parsing ---

    #[test]
    fn test_bucket_width_accepts_recognized_values() {
        assert_eq!("5m".parse::<BucketWidth>().unwrap(), BucketWidth::FiveMinutes);
        assert_eq!("1h".parse::<BucketWidth>().unwrap(), BucketWidth::Hour);
        assert_eq!("1d".parse::<BucketWidth>().unwrap(), BucketWidth::Day);
        assert_eq!("1w".parse::<BucketWidth>().unwrap(), BucketWidth::Week);
    }

    #[test]
    fn test_bucket_width_rejects_everything_else() {
        for bad in ["2h", "30s", "1m", "1H", "", "1h; DROP TABLE feature_data"] {
            match bad.parse::<BucketWidth>() {
                Err(Error::Validation(_)) => {}
                other => panic!("Expected validation error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_bucket_width_display_round_trips() {
        for width in [
            BucketWidth::FiveMinutes,
            BucketWidth::Hour,
            BucketWidth::Day,
            BucketWidth::Week,
        ] {
            assert_eq!(width.to_string().parse::<BucketWidth>().unwrap(), width);
        }
    }

    #[test]
    fn test_default_bucket_width_is_recognized() {
        assert_eq!(
            DEFAULT_BUCKET_WIDTH.parse::<BucketWidth>().unwrap(),
            BucketWidth::Hour
        );
    }

    // --- Midrange math ---

    #[test]
    fn test_midrange_of_empty_series_is_absent() {
        assert_eq!(MidrangeSummary::from_series(&[]), None);
    }

    #[test]
    fn test_midrange_of_singleton_series() {
        let summary = MidrangeSummary::from_series(&[42.5]).unwrap();
        assert_eq!(summary.min, 42.5);
        assert_eq!(summary.max, 42.5);
        assert_eq!(summary.midrange, 0.0);
    }

    #[test]
    fn test_midrange_is_half_the_spread() {
        let summary = MidrangeSummary::from_series(&[1.0, 5.0, 3.0]).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        // Half-range, not the arithmetic midpoint (which would be 3.0).
        assert_eq!(summary.midrange, 2.0);
    }

    #[test]
    fn test_midrange_properties_on_generated_series() {
        for size in [1, 2, 10, 1000] {
            let series = generate_series(size);
            let summary = MidrangeSummary::from_series(&series).unwrap();

            let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            assert_eq!(summary.min, min);
            assert_eq!(summary.max, max);
            assert!((summary.midrange - (max - min) / 2.0).abs() < 1e-12);
            assert!(summary.midrange >= 0.0);
            assert!(summary.min <= summary.max);
        }
    }

    // --- Query construction ---

    #[test]
    fn test_median_query_scopes_to_window_and_tag_pair() {
        let sql = median_sql();
        assert!(sql.contains(DEFAULT_MEASUREMENT));
        assert!(sql.contains("quantile(0.5)(value)"));
        assert!(sql.contains("feature_id = ?"));
        assert!(sql.contains("customer_id = ?"));
        assert!(sql.contains("INTERVAL 30 DAY"));
        assert!(sql.contains("ts <= now64(3)"));
        // Grouping by the tag pair makes an empty window produce zero rows.
        assert!(sql.contains("GROUP BY feature_id, customer_id"));
        // Both identifiers arrive as bound parameters, nothing else.
        assert_eq!(sql.matches('?').count(), 2);
    }

    #[test]
    fn test_bucket_means_query_carries_selected_width() {
        for (width, fragment) in [
            (BucketWidth::FiveMinutes, "INTERVAL 5 MINUTE"),
            (BucketWidth::Hour, "INTERVAL 1 HOUR"),
            (BucketWidth::Day, "INTERVAL 1 DAY"),
            (BucketWidth::Week, "INTERVAL 1 WEEK"),
        ] {
            let sql = bucket_means_sql(width);
            assert!(sql.contains(fragment));
            assert!(sql.contains("toStartOfInterval"));
            assert!(sql.contains("avg(value)"));
            assert!(sql.contains("INTERVAL 30 DAY"));
            assert_eq!(sql.matches('?').count(), 2);
        }
    }

    #[test]
    fn test_delete_query_spans_epoch_zero_to_exclusive_cutoff() {
        let sql = delete_before_sql();
        assert!(sql.contains(DEFAULT_MEASUREMENT));
        // Fixed epoch-zero lower bound, strict upper bound.
        assert!(sql.contains("ts >= toDateTime64(0, 3)"));
        assert!(sql.contains("ts < parseDateTime64BestEffort(?)"));
        assert!(sql.contains("feature_id = ?"));
        assert!(sql.contains("customer_id = ?"));
        // Tag pair plus cutoff, all bound.
        assert_eq!(sql.matches('?').count(), 3);
    }

    // --- Result extraction ---

    #[test]
    fn test_first_scalar_takes_first_row_only() {
        assert_eq!(first_scalar(&[]), None);
        assert_eq!(first_scalar(&[7.25]), Some(7.25));
        // If the reduction produces several rows, only the first is consulted.
        assert_eq!(first_scalar(&[1.5, 9.0, -3.0]), Some(1.5));
    }

    // --- Error mapping ---

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&Error::Validation("bad interval".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Error::Connection("refused".to_string())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&Error::Store("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&Error::Config("missing".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_empty_window_is_served_as_failure() {
        // Absence is deliberately conflated with a store fault: same 500 the
        // caller would see for a real error. Regression-pinned here.
        assert_eq!(status_for(&Error::NoData), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_code(&Error::NoData), "NO_DATA");
    }

    #[test]
    fn test_error_codes_distinguish_taxonomy() {
        assert_eq!(
            error_code(&Error::Validation("x".to_string())),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            error_code(&Error::Connection("x".to_string())),
            "STORE_UNAVAILABLE"
        );
        assert_eq!(error_code(&Error::Store("x".to_string())), "STORE_ERROR");
    }

    // --- Response shapes ---

    #[test]
    fn test_ingest_response_echoes_submitted_value() {
        let response = IngestResponse {
            status: "success",
            message: "Data received",
            feature_id: "f1".to_string(),
            customer_id: "c1".to_string(),
            data: FeatureData { value: 42.5 },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["feature_id"], "f1");
        assert_eq!(json["customer_id"], "c1");
        assert_eq!(json["data"]["value"], 42.5);
    }

    #[test]
    fn test_midrange_response_shape() {
        let response = MidrangeResponse {
            status: "success",
            message: "Midrange computed",
            feature_id: "f1".to_string(),
            customer_id: "c1".to_string(),
            midrange: MidrangeSummary {
                min: 1.0,
                max: 5.0,
                midrange: 2.0,
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["midrange"]["min"], 1.0);
        assert_eq!(json["midrange"]["max"], 5.0);
        assert_eq!(json["midrange"]["midrange"], 2.0);
    }

    #[test]
    fn test_measurement_point_carries_both_tags_and_value() {
        let point = MeasurementPoint {
            feature_id: "f1".to_string(),
            customer_id: "c1".to_string(),
            value: 42.5,
            ts: time::OffsetDateTime::now_utc(),
        };

        assert_eq!(point.feature_id, "f1");
        assert_eq!(point.customer_id, "c1");
        assert_eq!(point.value, 42.5);
    }
}
