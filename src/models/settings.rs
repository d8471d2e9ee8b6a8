use super::error::AppError;
use super::records::{InfoType, PeriodUnit};
use serde::{Deserialize, Serialize};

/// Version of the persisted settings envelope.
pub const SETTINGS_VERSION: u32 = 0;

/// User display preferences. A single record, always fully populated: parsing
/// backfills missing fields from defaults and ignores unknown ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Line chart window length in days.
    pub diagram_days: u32,
    pub diagram_type: InfoType,
    pub chart_time_range: PeriodUnit,
    pub chart_items_count: u32,
    pub usage_smoothing: bool,
    pub usage_spreading: bool,
    pub usage_pre_hour_unit: bool,
    pub usage_smart_merge: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            diagram_days: 1,
            diagram_type: InfoType::Usage,
            chart_time_range: PeriodUnit::Day,
            chart_items_count: 7,
            usage_smoothing: true,
            usage_spreading: true,
            usage_pre_hour_unit: true,
            usage_smart_merge: true,
        }
    }
}

impl Settings {
    /// Parses the clipboard JSON form. Missing fields fall back to defaults,
    /// unknown fields are ignored.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text).map_err(|_| {
            AppError::Parse("Could not parse settings data from clipboard".to_string())
        })
    }

    /// Compact JSON form written to the clipboard.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Indented JSON form for the settings page preview block.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Typed single-field update applied through `SettingsStore::update_field`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingsField {
    DiagramDays(u32),
    DiagramType(InfoType),
    ChartTimeRange(PeriodUnit),
    ChartItemsCount(u32),
    UsageSmoothing(bool),
    UsageSpreading(bool),
    UsagePreHourUnit(bool),
    UsageSmartMerge(bool),
}

/// Single source of truth for display preferences. All mutations go through
/// `update_field`, `replace` or `reset`; this layer validates nothing, the UI
/// constrains legal values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsStore {
    settings: Settings,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Current settings; never empty.
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Sets a single named field, leaving every other field untouched.
    pub fn update_field(&mut self, field: SettingsField) {
        match field {
            SettingsField::DiagramDays(value) => self.settings.diagram_days = value,
            SettingsField::DiagramType(value) => self.settings.diagram_type = value,
            SettingsField::ChartTimeRange(value) => self.settings.chart_time_range = value,
            SettingsField::ChartItemsCount(value) => self.settings.chart_items_count = value,
            SettingsField::UsageSmoothing(value) => self.settings.usage_smoothing = value,
            SettingsField::UsageSpreading(value) => self.settings.usage_spreading = value,
            SettingsField::UsagePreHourUnit(value) => self.settings.usage_pre_hour_unit = value,
            SettingsField::UsageSmartMerge(value) => self.settings.usage_smart_merge = value,
        }
    }

    /// Overwrites the whole record and returns the resulting one.
    pub fn replace(&mut self, new_settings: Settings) -> Settings {
        self.settings = new_settings;
        self.settings.clone()
    }

    /// Back to the default record; returns the resulting one.
    pub fn reset(&mut self) -> Settings {
        self.replace(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let settings = Settings::default();
        assert_eq!(settings.diagram_days, 1);
        assert_eq!(settings.diagram_type, InfoType::Usage);
        assert_eq!(settings.chart_time_range, PeriodUnit::Day);
        assert_eq!(settings.chart_items_count, 7);
        assert!(settings.usage_smoothing);
        assert!(settings.usage_spreading);
        assert!(settings.usage_pre_hour_unit);
        assert!(settings.usage_smart_merge);
    }

    #[test]
    fn test_update_field_touches_only_that_field() {
        let mut store = SettingsStore::default();
        let before = store.get().clone();

        store.update_field(SettingsField::ChartItemsCount(14));

        let after = store.get();
        assert_eq!(after.chart_items_count, 14);
        assert_eq!(
            Settings {
                chart_items_count: before.chart_items_count,
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = SettingsStore::default();
        store.update_field(SettingsField::ChartItemsCount(14));
        store.update_field(SettingsField::DiagramType(InfoType::Balance));
        store.update_field(SettingsField::UsageSmoothing(false));

        let result = store.reset();
        assert_eq!(result, Settings::default());
        assert_eq!(store.get(), &Settings::default());
    }

    #[test]
    fn test_replace_returns_resulting_record() {
        let mut store = SettingsStore::default();
        let mut target = Settings::default();
        target.diagram_days = 30;

        let result = store.replace(target.clone());
        assert_eq!(result, target);
        assert_eq!(store.get(), &target);
    }

    #[test]
    fn test_parse_backfills_missing_fields() {
        let settings = Settings::parse(r#"{"chartItemsCount": 30}"#).unwrap();
        assert_eq!(settings.chart_items_count, 30);
        assert_eq!(settings.diagram_days, 1);
        assert!(settings.usage_smart_merge);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let settings =
            Settings::parse(r#"{"diagramDays": 7, "someFutureField": "whatever"}"#).unwrap();
        assert_eq!(settings.diagram_days, 7);
    }

    #[test]
    fn test_parse_failure_is_parse_kind() {
        let error = Settings::parse("not json at all").unwrap_err();
        assert_eq!(error.kind(), "parse_error");
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.diagram_type = InfoType::Balance;
        settings.chart_time_range = PeriodUnit::Month;

        let json = settings.to_json();
        assert!(json.contains("\"diagramType\":\"balance\""));
        assert_eq!(Settings::parse(&json).unwrap(), settings);
    }

    #[test]
    fn test_update_then_reset_scenario() {
        let mut store = SettingsStore::default();
        store.update_field(SettingsField::ChartItemsCount(14));
        assert_eq!(store.get().chart_items_count, 14);

        store.reset();
        assert_eq!(store.get().chart_items_count, 7);
    }
}
