//! Widget resolution - descriptor to render-ready view
//!
//! Resolves a descriptor's data source, applies the custom label/icon
//! override and routes the matching session annotation. Renderers only ever
//! see a [`WidgetView`], never raw tags.

use opnpage_core::{
    get_data_source, AnnotationRef, Annotations, MetricRecord, VisualizationType,
    WidgetDescriptor, DEFAULT_CUSTOM_ICON,
};

/// One of the six visualization renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Pill,
    LineGraph,
    BarChart,
    Calendar,
    StatChip,
    BigNumber,
}

impl Renderer {
    pub fn for_type(kind: &VisualizationType) -> Option<Self> {
        match kind {
            VisualizationType::Pill => Some(Renderer::Pill),
            VisualizationType::LineGraph => Some(Renderer::LineGraph),
            VisualizationType::BarChart => Some(Renderer::BarChart),
            VisualizationType::Calendar => Some(Renderer::Calendar),
            VisualizationType::StatChip => Some(Renderer::StatChip),
            VisualizationType::BigNumber => Some(Renderer::BigNumber),
            VisualizationType::Unknown(_) => None,
        }
    }
}

/// Data handed to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWidget<'a> {
    pub renderer: Renderer,
    /// Display label after the custom override
    pub label: String,
    /// Display icon after the custom override
    pub icon: String,
    pub metric: &'static MetricRecord,
    pub annotation: Option<AnnotationRef<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView<'a> {
    Visualization(ResolvedWidget<'a>),
    /// Visualization tag this build cannot draw
    UnknownVisualization { tag: String },
}

/// Resolve `widget` for rendering
pub fn resolve_widget<'a>(widget: &WidgetDescriptor, annotations: &'a Annotations) -> WidgetView<'a> {
    let Some(renderer) = Renderer::for_type(&widget.visualization_type) else {
        return WidgetView::UnknownVisualization {
            tag: widget.visualization_type.tag().to_string(),
        };
    };

    let metric = get_data_source(&widget.data_source);
    let (label, icon) = identity(widget, metric);

    WidgetView::Visualization(ResolvedWidget {
        renderer,
        label,
        icon,
        metric,
        annotation: annotations.for_source(&widget.data_source),
    })
}

/// Label and icon a widget is shown with
///
/// A `custom` widget with a non-empty label uses its own label and icon
/// (icon defaults to 📊); everything else uses the metric record.
pub fn display_identity(widget: &WidgetDescriptor) -> (String, String) {
    identity(widget, get_data_source(&widget.data_source))
}

fn identity(widget: &WidgetDescriptor, metric: &MetricRecord) -> (String, String) {
    match (&widget.custom_label, widget.data_source.is_custom()) {
        (Some(label), true) if !label.is_empty() => (
            label.clone(),
            widget
                .custom_icon
                .clone()
                .filter(|icon| !icon.is_empty())
                .unwrap_or_else(|| DEFAULT_CUSTOM_ICON.to_string()),
        ),
        _ => (metric.label.to_string(), metric.icon.to_string()),
    }
}
