//! Widget descriptor model
//!
//! A widget descriptor is one dashboard tile: which visualization it draws,
//! which metric feeds it, and its grid span. The persisted layout is an
//! ordered `Vec<WidgetDescriptor>`; order in the vector is display order.
//!
//! Tag enums keep an explicit fallback variant holding the unrecognized tag
//! so that data written by a newer build survives a load/save round-trip
//! and renders as a visible placeholder instead of vanishing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of horizontal units in the dashboard grid
pub const GRID_COLUMNS: u16 = 12;

/// Width used for newly added widgets
pub const DEFAULT_WIDGET_WIDTH: u16 = 4;

/// Row-span used for newly added widgets
pub const DEFAULT_WIDGET_HEIGHT: u16 = 1;

/// Icon used when a custom widget has a label but no icon
pub const DEFAULT_CUSTOM_ICON: &str = "📊";

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Stable identifier of a widget within a layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Visualization Type
// ─────────────────────────────────────────────────────────────────────────────

/// Rendering shape of a widget
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisualizationType {
    /// Compact card with icon, value, delta badge and sparkline
    Pill,
    /// Time series chart with trend line
    LineGraph,
    /// Vertical bars comparing values
    BarChart,
    /// Monthly calendar showing daily completion
    Calendar,
    /// Minimal stat with small sparkline
    StatChip,
    /// Large, prominent number display
    BigNumber,
    /// Tag not recognized by this build
    Unknown(String),
}

impl VisualizationType {
    /// All known visualization types in selection order
    pub const KNOWN: [VisualizationType; 6] = [
        VisualizationType::Pill,
        VisualizationType::LineGraph,
        VisualizationType::BarChart,
        VisualizationType::Calendar,
        VisualizationType::StatChip,
        VisualizationType::BigNumber,
    ];

    /// Parse a persisted tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pill" => Self::Pill,
            "lineGraph" => Self::LineGraph,
            "barChart" => Self::BarChart,
            "calendar" => Self::Calendar,
            "statChip" => Self::StatChip,
            "bigNumber" => Self::BigNumber,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Persisted tag for this type
    pub fn tag(&self) -> &str {
        match self {
            Self::Pill => "pill",
            Self::LineGraph => "lineGraph",
            Self::BarChart => "barChart",
            Self::Calendar => "calendar",
            Self::StatChip => "statChip",
            Self::BigNumber => "bigNumber",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for VisualizationType {
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

impl From<VisualizationType> for String {
    fn from(value: VisualizationType) -> Self {
        match value {
            VisualizationType::Unknown(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Data Source
// ─────────────────────────────────────────────────────────────────────────────

/// Metric feeding a widget
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataSourceId {
    Running,
    Reading,
    Gaming,
    Caffeine,
    Alcohol,
    ActiveDays,
    Studying,
    Walking,
    /// User-labelled metric; carries `custom_label`/`custom_icon`
    Custom,
    /// Tag not recognized by this build
    Other(String),
}

impl DataSourceId {
    /// All known data sources in registry order
    pub const KNOWN: [DataSourceId; 9] = [
        DataSourceId::Running,
        DataSourceId::Reading,
        DataSourceId::Gaming,
        DataSourceId::Caffeine,
        DataSourceId::Alcohol,
        DataSourceId::ActiveDays,
        DataSourceId::Studying,
        DataSourceId::Walking,
        DataSourceId::Custom,
    ];

    /// Parse a persisted tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "running" => Self::Running,
            "reading" => Self::Reading,
            "gaming" => Self::Gaming,
            "caffeine" => Self::Caffeine,
            "alcohol" => Self::Alcohol,
            "activeDays" => Self::ActiveDays,
            "studying" => Self::Studying,
            "walking" => Self::Walking,
            "custom" => Self::Custom,
            other => Self::Other(other.to_string()),
        }
    }

    /// Persisted tag for this source
    pub fn tag(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Reading => "reading",
            Self::Gaming => "gaming",
            Self::Caffeine => "caffeine",
            Self::Alcohol => "alcohol",
            Self::ActiveDays => "activeDays",
            Self::Studying => "studying",
            Self::Walking => "walking",
            Self::Custom => "custom",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl From<String> for DataSourceId {
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

impl From<DataSourceId> for String {
    fn from(value: DataSourceId) -> Self {
        match value {
            DataSourceId::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for DataSourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Descriptor
// ─────────────────────────────────────────────────────────────────────────────

/// One dashboard tile as stored in the persisted layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDescriptor {
    pub id: WidgetId,
    pub visualization_type: VisualizationType,
    pub data_source: DataSourceId,
    /// Span on the 12-unit grid (caller-supplied, not validated here)
    #[serde(rename = "w")]
    pub width: u16,
    /// Row-span hint
    #[serde(rename = "h")]
    pub height: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<String>,
}

impl WidgetDescriptor {
    /// Build a descriptor from a draft and an already-allocated id
    pub fn from_draft(id: WidgetId, draft: WidgetDraft) -> Self {
        Self {
            id,
            visualization_type: draft.visualization_type,
            data_source: draft.data_source,
            width: draft.width,
            height: draft.height,
            custom_label: draft.custom_label,
            custom_icon: draft.custom_icon,
        }
    }

    /// Return a merged copy with every field set in `patch` replaced
    pub fn merged(&self, patch: &WidgetPatch) -> Self {
        let mut next = self.clone();
        if let Some(ref kind) = patch.visualization_type {
            next.visualization_type = kind.clone();
        }
        if let Some(ref source) = patch.data_source {
            next.data_source = source.clone();
        }
        if let Some(width) = patch.width {
            next.width = width;
        }
        if let Some(height) = patch.height {
            next.height = height;
        }
        if let Some(ref label) = patch.custom_label {
            next.custom_label = label.clone();
        }
        if let Some(ref icon) = patch.custom_icon {
            next.custom_icon = icon.clone();
        }
        next
    }
}

/// Descriptor fields for a widget that has not been given an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDraft {
    pub visualization_type: VisualizationType,
    pub data_source: DataSourceId,
    pub width: u16,
    pub height: u16,
    pub custom_label: Option<String>,
    pub custom_icon: Option<String>,
}

impl Default for WidgetDraft {
    fn default() -> Self {
        Self {
            visualization_type: VisualizationType::Pill,
            data_source: DataSourceId::Running,
            width: DEFAULT_WIDGET_WIDTH,
            height: DEFAULT_WIDGET_HEIGHT,
            custom_label: None,
            custom_icon: None,
        }
    }
}

impl WidgetDraft {
    pub fn new(visualization_type: VisualizationType, data_source: DataSourceId) -> Self {
        Self {
            visualization_type,
            data_source,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_custom(mut self, label: impl Into<String>, icon: impl Into<String>) -> Self {
        self.custom_label = Some(label.into());
        self.custom_icon = Some(icon.into());
        self
    }
}

/// Partial update for a descriptor
///
/// `None` leaves a field untouched. The custom fields are doubly optional so
/// a patch can clear them (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetPatch {
    pub visualization_type: Option<VisualizationType>,
    pub data_source: Option<DataSourceId>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub custom_label: Option<Option<String>>,
    pub custom_icon: Option<Option<String>>,
}

impl WidgetPatch {
    /// Patch that overwrites every mutable field with the values of `desc`
    pub fn replace_with(desc: &WidgetDescriptor) -> Self {
        Self {
            visualization_type: Some(desc.visualization_type.clone()),
            data_source: Some(desc.data_source.clone()),
            width: Some(desc.width),
            height: Some(desc.height),
            custom_label: Some(desc.custom_label.clone()),
            custom_icon: Some(desc.custom_icon.clone()),
        }
    }

    pub fn visualization(kind: VisualizationType) -> Self {
        Self {
            visualization_type: Some(kind),
            ..Self::default()
        }
    }

    pub fn data_source(source: DataSourceId) -> Self {
        Self {
            data_source: Some(source),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
