//! # opnpage-core - Core Domain Types
//!
//! Foundation crate for the opnpage dashboard. Provides the widget model,
//! the mock metric registry, session annotations, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Widget Model (`widget`)
//! - [`WidgetDescriptor`] - One dashboard tile as persisted in the layout
//! - [`VisualizationType`], [`DataSourceId`] - Tag enums with fallback variants
//! - [`WidgetDraft`], [`WidgetPatch`] - Creation and partial-update payloads
//!
//! ### Data Provider (`data_provider`)
//! - [`get_data_source()`] - Metric record for a source, or the placeholder
//! - [`list_data_source_options()`] - Picker entries in registry order
//! - [`visualization_options()`] - Picker entries for the six visualizations
//!
//! ### Annotations (`annotation`)
//! - [`Annotations`] - Session-only reading list and per-metric notes
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use opnpage_core::prelude::*;
//! ```

pub mod annotation;
pub mod data_provider;
pub mod error;
pub mod logging;
pub mod metric;
pub mod widget;

/// Prelude for common imports used throughout all opnpage crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use annotation::{
    AnnotationRef, Annotations, MetricNotes, ReadingNotes, MAX_BOOKS, MAX_FAVORITES, MAX_NOTES,
};
pub use data_provider::{
    get_data_source, get_data_source_by_tag, list_data_source_options, visualization_options,
};
pub use error::{Error, Result, ResultExt};
pub use metric::{DataSourceOption, MetricMetadata, MetricRecord, Trend, VisualizationOption};
pub use widget::{
    DataSourceId, VisualizationType, WidgetDescriptor, WidgetDraft, WidgetId, WidgetPatch,
    DEFAULT_CUSTOM_ICON, DEFAULT_WIDGET_HEIGHT, DEFAULT_WIDGET_WIDTH, GRID_COLUMNS,
};
