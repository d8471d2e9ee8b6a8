#[cfg(test)]
mod tests {
    use elec_watch_dashboard::hooks::DataState;
    use elec_watch_dashboard::models::{
        error::{classify, AppError, RawFailure},
        records::{BalanceRecord, InfoType, PeriodUnit},
        settings::{Settings, SettingsField, SettingsStore},
        usage::{usage_series, UsageOptions},
    };
    use elec_watch_dashboard::services::api::ApiConfig;
    use serde_json::json;
    use std::rc::Rc;

    // Helper function to create balance snapshots one hour apart
    fn create_test_records() -> Vec<BalanceRecord> {
        vec![
            BalanceRecord {
                timestamp: 0,
                light_balance: 20.0,
                ac_balance: 50.0,
            },
            BalanceRecord {
                timestamp: 3600,
                light_balance: 19.0,
                ac_balance: 49.5,
            },
            BalanceRecord {
                timestamp: 7200,
                light_balance: 18.5,
                ac_balance: 48.0,
            },
        ]
    }

    fn test_config() -> ApiConfig {
        ApiConfig::builder().base_url("http://backend.test").build()
    }

    // ===== Settings Store Tests =====

    #[test]
    fn test_update_field_changes_only_that_field() {
        let mut store = SettingsStore::default();
        let before = store.get().clone();

        store.update_field(SettingsField::DiagramDays(7));

        let after = store.get().clone();
        assert_eq!(after.diagram_days, 7);
        assert_eq!(after.diagram_type, before.diagram_type);
        assert_eq!(after.chart_time_range, before.chart_time_range);
        assert_eq!(after.chart_items_count, before.chart_items_count);
        assert_eq!(after.usage_smoothing, before.usage_smoothing);
        assert_eq!(after.usage_spreading, before.usage_spreading);
        assert_eq!(after.usage_pre_hour_unit, before.usage_pre_hour_unit);
        assert_eq!(after.usage_smart_merge, before.usage_smart_merge);
    }

    #[test]
    fn test_reset_yields_default_record_regardless_of_prior_state() {
        let mut store = SettingsStore::new(Settings {
            diagram_days: 30,
            diagram_type: InfoType::Balance,
            chart_time_range: PeriodUnit::Month,
            chart_items_count: 14,
            usage_smoothing: false,
            usage_spreading: false,
            usage_pre_hour_unit: false,
            usage_smart_merge: false,
        });

        assert_eq!(store.reset(), Settings::default());
    }

    #[test]
    fn test_partial_import_never_leaves_missing_fields() {
        let mut store = SettingsStore::default();

        let imported = Settings::parse(r#"{"diagramDays": 3, "usageSmoothing": false}"#).unwrap();
        let replaced = store.replace(imported);

        assert_eq!(replaced.diagram_days, 3);
        assert!(!replaced.usage_smoothing);
        // Every other field is backfilled from defaults.
        assert_eq!(replaced.chart_items_count, 7);
        assert_eq!(replaced.chart_time_range, PeriodUnit::Day);
        assert!(replaced.usage_smart_merge);
    }

    #[test]
    fn test_malformed_import_is_parse_error_and_leaves_store_unchanged() {
        let mut store = SettingsStore::default();
        store.update_field(SettingsField::ChartItemsCount(30));
        let before = store.get().clone();

        let error = Settings::parse("{definitely not json").unwrap_err();
        assert_eq!(error.kind(), "parse_error");
        // The store is only touched on a successful parse.
        assert_eq!(store.get(), &before);
    }

    #[test]
    fn test_update_then_reset_end_to_end() {
        let mut store = SettingsStore::default();

        store.update_field(SettingsField::ChartItemsCount(14));
        assert_eq!(store.get().chart_items_count, 14);

        store.reset();
        assert_eq!(store.get().chart_items_count, 7);
    }

    // ===== Error Classification Tests =====

    #[test]
    fn test_classification_status_without_body() {
        let error = classify(RawFailure::Response {
            status: 500,
            body: None,
        });
        assert_eq!(error.kind(), "request_error");
    }

    #[test]
    fn test_classification_server_declared_error_passes_through() {
        let error = classify(RawFailure::Response {
            status: 401,
            body: Some(json!({
                "detail": {"name": "token_required", "message": "Login required"}
            })),
        });
        assert_eq!(error.kind(), "token_required");
        assert_eq!(error.to_string(), "Login required (token_required)");
    }

    #[test]
    fn test_classification_unreachable_network() {
        assert_eq!(classify(RawFailure::Unreachable), AppError::Network);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let failure = RawFailure::Response {
            status: 400,
            body: Some(json!({"detail": {"name": "half"}})),
        };
        assert_eq!(classify(failure.clone()), classify(failure));
    }

    // ===== Parameter Precondition Tests =====

    #[test]
    fn test_zero_days_fails_before_any_network_call() {
        let error = test_config()
            .recent_records_url(0, InfoType::Usage)
            .unwrap_err();
        assert_eq!(error.kind(), "invalid_parameter");
    }

    #[test]
    fn test_zero_period_count_fails_before_any_network_call() {
        let error = test_config()
            .period_usage_url(PeriodUnit::Day, 0, true)
            .unwrap_err();
        assert_eq!(error.kind(), "invalid_parameter");
    }

    #[test]
    fn test_inverted_time_range_fails_before_any_network_call() {
        let error = test_config()
            .records_by_range_url(1_000, 500, InfoType::Balance)
            .unwrap_err();
        assert_eq!(error.kind(), "invalid_parameter");
    }

    #[test]
    fn test_valid_parameters_produce_urls() {
        let config = test_config();
        assert!(config.recent_records_url(1, InfoType::Usage).is_ok());
        assert!(config.period_usage_url(PeriodUnit::Week, 7, true).is_ok());
        assert!(config.records_by_range_url(0, 1, InfoType::Usage).is_ok());
    }

    // ===== Usage Conversion Tests =====

    #[test]
    fn test_usage_series_from_snapshots() {
        let options = UsageOptions {
            smoothing: false,
            spreading: false,
            per_hour_unit: false,
            smart_merge: false,
        };
        let points = usage_series(&create_test_records(), options);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp, 3600);
        assert!((points[0].light - 1.0).abs() < 1e-9);
        assert!((points[0].ac - 0.5).abs() < 1e-9);
        assert!((points[1].light - 0.5).abs() < 1e-9);
        assert!((points[1].ac - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_usage_series_with_default_settings() {
        // Default toggles: spreading, smoothing, per-hour unit and smart
        // merge all on. Hourly snapshots stay one point per hour.
        let options = UsageOptions::from(&Settings::default());
        let points = usage_series(&create_test_records(), options);

        assert_eq!(points.len(), 2);
        for point in &points {
            assert!(point.light >= 0.0);
            assert!(point.ac >= 0.0);
        }
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_extraction() {
        let records = Rc::new(create_test_records());
        let loaded = DataState::Loaded(records.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &records);
        assert!(loaded.error().is_none());

        let loading: DataState<Vec<BalanceRecord>> = DataState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error: DataState<Vec<BalanceRecord>> = DataState::Error(AppError::Network);
        assert_eq!(error.error(), Some(&AppError::Network));
        assert!(error.data().is_none());
    }

    #[test]
    fn test_data_state_equality() {
        let state1: DataState<Vec<BalanceRecord>> = DataState::Loading;
        let state2: DataState<Vec<BalanceRecord>> = DataState::Loading;
        assert_eq!(state1, state2);

        let state3: DataState<Vec<BalanceRecord>> = DataState::Error(AppError::Network);
        let state4: DataState<Vec<BalanceRecord>> = DataState::Error(AppError::Network);
        assert_eq!(state3, state4);
    }

    // ===== Clipboard Form Tests =====

    #[test]
    fn test_clipboard_round_trip_preserves_the_record() {
        let mut store = SettingsStore::default();
        store.update_field(SettingsField::DiagramDays(30));
        store.update_field(SettingsField::UsageSpreading(false));

        let exported = store.get().to_json();
        let imported = Settings::parse(&exported).unwrap();

        assert_eq!(&imported, store.get());
    }

    #[test]
    fn test_clipboard_form_uses_camel_case_keys() {
        let json = Settings::default().to_json();
        assert!(json.contains("\"diagramDays\""));
        assert!(json.contains("\"chartItemsCount\""));
        assert!(json.contains("\"usagePreHourUnit\""));
    }
}
