//! Static registry of mock metric records
//!
//! Every lookup is a pure read of process-lifetime data. Unknown sources
//! resolve to a well-formed placeholder so renderers never need a null
//! check.

use tracing::debug;

use crate::metric::{
    DataSourceOption, MetricMetadata, MetricRecord, VisualizationOption,
};
use crate::widget::{DataSourceId, VisualizationType};

static RUNNING: MetricRecord = MetricRecord {
    label: "Running",
    icon: "🏃",
    value: "18.4",
    unit: "mi",
    delta: Some(6),
    history: &[2.0, 3.0, 4.0, 3.0, 5.0, 6.0, 7.0],
    metadata: MetricMetadata {
        goal: Some(20.0),
        progress: Some(92),
        footnote: Some("This week • Goal 20 mi"),
    },
};

static READING: MetricRecord = MetricRecord {
    label: "Reading",
    icon: "📚",
    value: "3",
    unit: "books",
    delta: Some(50),
    history: &[0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("This month"),
    },
};

static GAMING: MetricRecord = MetricRecord {
    label: "Gaming",
    icon: "🎮",
    value: "12.6",
    unit: "hrs",
    delta: Some(-12),
    history: &[5.0, 6.0, 7.0, 6.0, 5.0, 4.0, 3.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("This week"),
    },
};

static CAFFEINE: MetricRecord = MetricRecord {
    label: "Caffeine",
    icon: "☕",
    value: "210",
    unit: "mg",
    delta: Some(-8),
    history: &[280.0, 260.0, 240.0, 230.0, 220.0, 210.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("Daily avg"),
    },
};

static ALCOHOL: MetricRecord = MetricRecord {
    label: "Alcohol",
    icon: "🍺",
    value: "2",
    unit: "drinks",
    delta: Some(-25),
    history: &[3.0, 2.0, 4.0, 2.0, 1.0, 2.0, 2.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("This week"),
    },
};

static ACTIVE_DAYS: MetricRecord = MetricRecord {
    label: "Active Days",
    icon: "📅",
    value: "5",
    unit: "days",
    delta: Some(8),
    history: &[3.0, 4.0, 5.0, 5.0, 6.0, 6.0, 7.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("This week"),
    },
};

static STUDYING: MetricRecord = MetricRecord {
    label: "Studying",
    icon: "📖",
    value: "9",
    unit: "hrs",
    delta: Some(18),
    history: &[1.0, 1.0, 0.0, 2.0, 1.0, 2.0, 2.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("This week"),
    },
};

static WALKING: MetricRecord = MetricRecord {
    label: "Walking",
    icon: "🚶",
    value: "8,500",
    unit: "steps",
    delta: Some(12),
    history: &[7000.0, 7500.0, 8000.0, 8200.0, 8300.0, 8400.0, 8500.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("Daily average"),
    },
};

static CUSTOM: MetricRecord = MetricRecord {
    label: "Custom Metric",
    icon: "✏️",
    value: "0",
    unit: "",
    delta: Some(0),
    history: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: Some("Custom data"),
    },
};

/// Record returned for unrecognized sources
pub static PLACEHOLDER: MetricRecord = MetricRecord {
    label: "Unknown",
    icon: "❓",
    value: "0",
    unit: "",
    delta: None,
    history: &[],
    metadata: MetricMetadata {
        goal: None,
        progress: None,
        footnote: None,
    },
};

/// Look up the record for a data source
///
/// Unrecognized sources yield [`PLACEHOLDER`].
pub fn get_data_source(id: &DataSourceId) -> &'static MetricRecord {
    match id {
        DataSourceId::Running => &RUNNING,
        DataSourceId::Reading => &READING,
        DataSourceId::Gaming => &GAMING,
        DataSourceId::Caffeine => &CAFFEINE,
        DataSourceId::Alcohol => &ALCOHOL,
        DataSourceId::ActiveDays => &ACTIVE_DAYS,
        DataSourceId::Studying => &STUDYING,
        DataSourceId::Walking => &WALKING,
        DataSourceId::Custom => &CUSTOM,
        DataSourceId::Other(tag) => {
            debug!("Data source \"{}\" not found", tag);
            &PLACEHOLDER
        }
    }
}

/// Look up a record by its persisted tag
pub fn get_data_source_by_tag(tag: &str) -> &'static MetricRecord {
    get_data_source(&DataSourceId::from_tag(tag))
}

/// Picker entries for every known data source, in registry order
pub fn list_data_source_options() -> Vec<DataSourceOption> {
    DataSourceId::KNOWN
        .into_iter()
        .map(|id| {
            let record = get_data_source(&id);
            DataSourceOption {
                id,
                label: record.label,
                icon: record.icon,
            }
        })
        .collect()
}

/// Picker entries for the six visualization types, in fixed order
pub fn visualization_options() -> Vec<VisualizationOption> {
    VisualizationType::KNOWN
        .into_iter()
        .map(|kind| {
            let (label, description, preview) = match kind {
                VisualizationType::Pill => (
                    "Pill",
                    "Compact card with icon, value, and sparkline",
                    "📊",
                ),
                VisualizationType::LineGraph => {
                    ("Line Graph", "Time series chart with trend line", "📈")
                }
                VisualizationType::BarChart => {
                    ("Bar Chart", "Vertical bars comparing values", "📊")
                }
                VisualizationType::Calendar => (
                    "Calendar",
                    "Monthly calendar showing daily completion",
                    "📅",
                ),
                VisualizationType::StatChip => {
                    ("Stat Chip", "Minimal stat with small sparkline", "🔢")
                }
                VisualizationType::BigNumber => {
                    ("Big Number", "Large, prominent number display", "💯")
                }
                VisualizationType::Unknown(_) => ("Unknown", "", "❓"),
            };
            VisualizationOption {
                kind,
                label,
                description,
                preview,
            }
        })
        .collect()
}
