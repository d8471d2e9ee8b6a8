use super::error::AppError;
use serde::{Deserialize, Serialize};

/// The two metered utilities of a room account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    Light,
    Ac,
}

impl Utility {
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Light => "ILLUMI",
            Self::Ac => "AIR COND",
        }
    }

    pub fn long_label(&self) -> &'static str {
        match self {
            Self::Light => "ILLUMINATION",
            Self::Ac => "AIR CONDITIONER",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Ac => "ac",
        }
    }
}

/// Which shape of series a diagram shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoType {
    Balance,
    #[default]
    Usage,
}

impl InfoType {
    /// Returns the code used in API URLs and the settings record.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Usage => "usage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Balance => "Balance",
            Self::Usage => "Usage",
        }
    }

    /// All selectable info types.
    pub fn all() -> &'static [Self] {
        &[Self::Balance, Self::Usage]
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for InfoType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balance" => Ok(Self::Balance),
            "usage" => Ok(Self::Usage),
            _ => Err(AppError::InvalidParameter(format!(
                "Invalid info type: {s}"
            ))),
        }
    }
}

/// Aggregation unit for the period usage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    #[default]
    Day,
    Week,
    Month,
}

impl PeriodUnit {
    /// Returns the code used in API URLs and the settings record.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Daily",
            Self::Week => "Weekly",
            Self::Month => "Monthly",
        }
    }

    /// Nominal length of the period in days, used for per-day averages.
    pub fn days(&self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    /// All selectable period units.
    pub fn all() -> &'static [Self] {
        &[Self::Day, Self::Week, Self::Month]
    }
}

impl std::fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for PeriodUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(AppError::InvalidParameter(format!(
                "Invalid period unit: {s}"
            ))),
        }
    }
}

/// A point-in-time balance snapshot scraped from the campus topup platform.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BalanceRecord {
    /// Epoch seconds.
    pub timestamp: i64,
    pub ac_balance: f64,
    pub light_balance: f64,
}

/// An aggregated usage interval produced by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PeriodUsage {
    pub start_time: i64,
    pub end_time: i64,
    pub light_usage: f64,
    pub ac_usage: f64,
}

impl PeriodUsage {
    /// Per-day average for one utility, used by the table tooltips.
    pub fn daily_average(&self, utility: Utility, unit: PeriodUnit) -> f64 {
        let usage = match utility {
            Utility::Light => self.light_usage,
            Utility::Ac => self.ac_usage,
        };
        usage / f64::from(unit.days())
    }
}

/// Aggregate usage statistics for the dashboard summary block.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Statistics {
    pub timestamp: i64,
    pub light_total_last_day: f64,
    pub ac_total_last_day: f64,
    pub light_total_last_week: f64,
    pub ac_total_last_week: f64,
}

impl Statistics {
    /// Totals trimmed to two decimals for display.
    pub fn rounded(mut self) -> Self {
        self.light_total_last_day = round2(self.light_total_last_day);
        self.ac_total_last_day = round2(self.ac_total_last_day);
        self.light_total_last_week = round2(self.light_total_last_week);
        self.ac_total_last_week = round2(self.ac_total_last_week);
        self
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stored-record counters shown in the dashboard footer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecordCount {
    pub total: i64,
    pub last_7_days: i64,
}

/// Header values the scraping integration presents to the campus platform.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CredentialInfo {
    pub authorization: String,
    pub collector_auth: String,
}

/// Session identity payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeInfo {
    pub has_role: bool,
    pub role_name: String,
}

/// Count of records removed by a range deletion.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DeletedCount {
    pub deleted: i64,
}

/// Builds (labels, light, ac) series for the balance chart, sorted by time.
pub fn balance_series(records: &[BalanceRecord]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.timestamp);

    let labels = sorted
        .iter()
        .map(|r| crate::utils::format::format_chart_label(r.timestamp))
        .collect();
    let light = sorted.iter().map(|r| r.light_balance).collect();
    let ac = sorted.iter().map(|r| r.ac_balance).collect();
    (labels, light, ac)
}
