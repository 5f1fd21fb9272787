//! Metric records served by the data provider

use crate::widget::{DataSourceId, VisualizationType};

/// Auxiliary presentation data attached to a metric
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricMetadata {
    pub goal: Option<f64>,
    /// Progress toward `goal` as a percentage (0..=100)
    pub progress: Option<u8>,
    pub footnote: Option<&'static str>,
}

/// Immutable snapshot of one metric
///
/// `value` is pre-formatted display text. `history` is ordered
/// most-recent-last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRecord {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    /// Signed percentage change versus the previous period
    pub delta: Option<i32>,
    pub history: &'static [f64],
    pub metadata: MetricMetadata,
}

/// Direction of a metric's delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Flat => "•",
        }
    }
}

impl MetricRecord {
    pub fn trend(&self) -> Option<Trend> {
        self.delta.map(|d| match d.signum() {
            1 => Trend::Up,
            -1 => Trend::Down,
            _ => Trend::Flat,
        })
    }

    /// Arrow badge text, e.g. `↑ 6%` or `↓ 12%`
    pub fn delta_badge(&self) -> Option<String> {
        let trend = self.trend()?;
        let delta = self.delta?;
        Some(format!("{} {}%", trend.arrow(), delta.unsigned_abs()))
    }

    /// Signed delta text, e.g. `+6%` or `-12%`
    pub fn signed_delta(&self) -> Option<String> {
        self.delta.map(|d| {
            if d > 0 {
                format!("+{d}%")
            } else {
                format!("{d}%")
            }
        })
    }

    /// Value followed by unit when the unit is non-empty
    pub fn value_with_unit(&self) -> String {
        if self.unit.is_empty() {
            self.value.to_string()
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }

    pub fn history_max(&self) -> f64 {
        self.history.iter().copied().fold(0.0, f64::max)
    }

    /// History scaled to `0.0..=1.0` against its maximum
    ///
    /// An all-zero history scales to all zeros.
    pub fn normalized_history(&self) -> Vec<f64> {
        let max = self.history_max();
        if max <= 0.0 {
            return vec![0.0; self.history.len()];
        }
        self.history.iter().map(|v| (v / max).max(0.0)).collect()
    }
}

/// Entry in the data source picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceOption {
    pub id: DataSourceId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Entry in the visualization type picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationOption {
    pub kind: VisualizationType,
    pub label: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(delta: Option<i32>, history: &'static [f64]) -> MetricRecord {
        MetricRecord {
            label: "Test",
            icon: "🧪",
            value: "1",
            unit: "",
            delta,
            history,
            metadata: MetricMetadata::default(),
        }
    }

    #[test]
    fn test_delta_badge_uses_absolute_value() {
        assert_eq!(record(Some(6), &[]).delta_badge().as_deref(), Some("↑ 6%"));
        assert_eq!(record(Some(-12), &[]).delta_badge().as_deref(), Some("↓ 12%"));
        assert_eq!(record(Some(0), &[]).delta_badge().as_deref(), Some("• 0%"));
        assert_eq!(record(None, &[]).delta_badge(), None);
    }

    #[test]
    fn test_signed_delta() {
        assert_eq!(record(Some(18), &[]).signed_delta().as_deref(), Some("+18%"));
        assert_eq!(record(Some(-8), &[]).signed_delta().as_deref(), Some("-8%"));
        assert_eq!(record(Some(0), &[]).signed_delta().as_deref(), Some("0%"));
    }

    #[test]
    fn test_value_with_unit_omits_empty_unit() {
        assert_eq!(record(None, &[]).value_with_unit(), "1");
    }

    #[test]
    fn test_normalized_history() {
        let r = record(None, &[1.0, 2.0, 4.0]);
        assert_eq!(r.normalized_history(), vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_normalized_history_all_zero() {
        let r = record(None, &[0.0, 0.0]);
        assert_eq!(r.normalized_history(), vec![0.0, 0.0]);
    }
}
