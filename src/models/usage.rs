use super::records::BalanceRecord;
use super::settings::Settings;

/// A single usage sample derived from the delta between two balance snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct UsagePoint {
    /// Epoch seconds of the interval end.
    pub timestamp: i64,
    pub light: f64,
    pub ac: f64,
}

/// Conversion switches for turning balance snapshots into a usage series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsageOptions {
    /// Three-point moving average over the final series.
    pub smoothing: bool,
    /// Spread a multi-hour delta into hourly points of equal share.
    pub spreading: bool,
    /// Express values per hour instead of per interval.
    pub per_hour_unit: bool,
    /// Collapse bursts of closely spaced snapshots into one point.
    pub smart_merge: bool,
}

impl Default for UsageOptions {
    fn default() -> Self {
        Self {
            smoothing: true,
            spreading: true,
            per_hour_unit: true,
            smart_merge: true,
        }
    }
}

impl From<&Settings> for UsageOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            smoothing: settings.usage_smoothing,
            spreading: settings.usage_spreading,
            per_hour_unit: settings.usage_pre_hour_unit,
            smart_merge: settings.usage_smart_merge,
        }
    }
}

/// Snapshots closer together than this are treated as one reading.
pub const MERGE_WINDOW_SECS: i64 = 45 * 60;

const SPREAD_STEP_SECS: i64 = 3600;

/// Converts balance snapshots into per-utility usage points.
///
/// Usage between two snapshots is the positive balance delta; top-ups raise
/// the balance and therefore contribute zero. Pipeline order: merge -> delta
/// -> spread -> per-hour -> smooth.
pub fn usage_series(records: &[BalanceRecord], options: UsageOptions) -> Vec<UsagePoint> {
    let mut snapshots = records.to_vec();
    snapshots.sort_by_key(|r| r.timestamp);

    if options.smart_merge {
        snapshots = merge_close_snapshots(snapshots);
    }

    let mut points = deltas(&snapshots, options);
    if options.smoothing {
        points = smooth(&points);
    }
    points
}

/// Drops snapshots closer than `MERGE_WINDOW_SECS` to the previously kept
/// one; the first reading of a burst anchors the series. Balances are
/// absolute, so deltas between kept anchors lose no usage.
fn merge_close_snapshots(snapshots: Vec<BalanceRecord>) -> Vec<BalanceRecord> {
    let mut merged: Vec<BalanceRecord> = Vec::with_capacity(snapshots.len());
    for record in snapshots {
        let close = merged
            .last()
            .is_some_and(|last| record.timestamp - last.timestamp < MERGE_WINDOW_SECS);
        if !close {
            merged.push(record);
        }
    }
    merged
}

fn deltas(snapshots: &[BalanceRecord], options: UsageOptions) -> Vec<UsagePoint> {
    let mut points = Vec::new();

    for pair in snapshots.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let gap = next.timestamp - prev.timestamp;
        if gap <= 0 {
            continue;
        }

        let light = (prev.light_balance - next.light_balance).max(0.0);
        let ac = (prev.ac_balance - next.ac_balance).max(0.0);

        let slices = if options.spreading {
            ((gap as u64).div_ceil(SPREAD_STEP_SECS as u64) as i64).max(1)
        } else {
            1
        };
        let slice_gap = gap as f64 / slices as f64;

        for i in 0..slices {
            let end = prev.timestamp + ((i + 1) as f64 * slice_gap).round() as i64;
            let mut slice_light = light / slices as f64;
            let mut slice_ac = ac / slices as f64;

            if options.per_hour_unit {
                let hours = slice_gap / 3600.0;
                if hours > 0.0 {
                    slice_light /= hours;
                    slice_ac /= hours;
                }
            }

            points.push(UsagePoint {
                timestamp: end.min(next.timestamp),
                light: slice_light,
                ac: slice_ac,
            });
        }
    }

    points
}

fn smooth(points: &[UsagePoint]) -> Vec<UsagePoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    (0..points.len())
        .map(|i| {
            let lo = i.saturating_sub(1);
            let hi = (i + 1).min(points.len() - 1);
            let window = &points[lo..=hi];
            let n = window.len() as f64;
            UsagePoint {
                timestamp: points[i].timestamp,
                light: window.iter().map(|p| p.light).sum::<f64>() / n,
                ac: window.iter().map(|p| p.ac).sum::<f64>() / n,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: UsageOptions = UsageOptions {
        smoothing: false,
        spreading: false,
        per_hour_unit: false,
        smart_merge: false,
    };

    fn snapshot(timestamp: i64, light: f64, ac: f64) -> BalanceRecord {
        BalanceRecord {
            timestamp,
            light_balance: light,
            ac_balance: ac,
        }
    }

    #[test]
    fn test_raw_deltas() {
        let records = vec![snapshot(0, 20.0, 50.0), snapshot(3600, 18.5, 49.0)];
        let points = usage_series(&records, RAW);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].timestamp, 3600);
        assert!((points[0].light - 1.5).abs() < 1e-9);
        assert!((points[0].ac - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_topup_contributes_zero() {
        // Balance raised mid-series by a recharge.
        let records = vec![
            snapshot(0, 5.0, 5.0),
            snapshot(3600, 55.0, 4.0),
            snapshot(7200, 54.0, 3.0),
        ];
        let points = usage_series(&records, RAW);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].light, 0.0);
        assert_eq!(points[0].ac, 1.0);
        assert_eq!(points[1].light, 1.0);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let records = vec![snapshot(3600, 18.0, 49.0), snapshot(0, 20.0, 50.0)];
        let points = usage_series(&records, RAW);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].light, 2.0);
    }

    #[test]
    fn test_spreading_preserves_totals() {
        let options = UsageOptions {
            spreading: true,
            ..RAW
        };
        // One three-hour gap spread into three hourly points.
        let records = vec![snapshot(0, 20.0, 50.0), snapshot(3 * 3600, 14.0, 47.0)];
        let points = usage_series(&records, options);

        assert_eq!(points.len(), 3);
        let light_total: f64 = points.iter().map(|p| p.light).sum();
        let ac_total: f64 = points.iter().map(|p| p.ac).sum();
        assert!((light_total - 6.0).abs() < 1e-9);
        assert!((ac_total - 3.0).abs() < 1e-9);
        assert_eq!(points.last().unwrap().timestamp, 3 * 3600);
    }

    #[test]
    fn test_per_hour_unit_divides_by_gap_hours() {
        let options = UsageOptions {
            per_hour_unit: true,
            ..RAW
        };
        let records = vec![snapshot(0, 20.0, 50.0), snapshot(2 * 3600, 16.0, 50.0)];
        let points = usage_series(&records, options);

        assert_eq!(points.len(), 1);
        // 4 kW over two hours -> 2 kW per hour.
        assert!((points[0].light - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_spreading_with_per_hour_unit_is_constant_rate() {
        let options = UsageOptions {
            spreading: true,
            per_hour_unit: true,
            ..RAW
        };
        let records = vec![snapshot(0, 20.0, 50.0), snapshot(4 * 3600, 12.0, 50.0)];
        let points = usage_series(&records, options);

        assert_eq!(points.len(), 4);
        for point in &points {
            assert!((point.light - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_smart_merge_collapses_bursts() {
        let options = UsageOptions {
            smart_merge: true,
            ..RAW
        };
        // Two readings 10 minutes apart, then a regular one an hour later.
        let records = vec![
            snapshot(0, 20.0, 50.0),
            snapshot(600, 19.8, 50.0),
            snapshot(4200, 19.0, 50.0),
        ];
        let points = usage_series(&records, options);

        // The burst collapses into its first reading; total usage is kept.
        assert_eq!(points.len(), 1);
        assert!((points[0].light - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_smoothing_preserves_length_and_timestamps() {
        let options = UsageOptions {
            smoothing: true,
            ..RAW
        };
        let records = vec![
            snapshot(0, 20.0, 50.0),
            snapshot(3600, 19.0, 50.0),
            snapshot(7200, 15.0, 50.0),
            snapshot(10800, 14.0, 50.0),
        ];
        let points = usage_series(&records, options);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].timestamp, 3600);
        assert_eq!(points[2].timestamp, 10800);
        // Middle point averages its neighbours: (1 + 4 + 1) / 3.
        assert!((points[1].light - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_options_follow_settings() {
        let mut settings = Settings::default();
        settings.usage_smoothing = false;
        settings.usage_smart_merge = false;

        let options = UsageOptions::from(&settings);
        assert!(!options.smoothing);
        assert!(!options.smart_merge);
        assert!(options.spreading);
        assert!(options.per_hour_unit);
    }
}
