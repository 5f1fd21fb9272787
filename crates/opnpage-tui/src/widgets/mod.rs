//! Custom widget components

mod annotation_popup;
mod config_modal;
mod confirm_dialog;
pub mod dashboard_grid;
mod header;
pub mod modal_overlay;
mod status_bar;
pub mod visualizations;
pub mod widget_card;
mod welcome;

pub use annotation_popup::AnnotationPopup;
pub use config_modal::ConfigModal;
pub use confirm_dialog::ConfirmDialog;
pub use dashboard_grid::DashboardGrid;
pub use header::MainHeader;
pub use status_bar::StatusBar;
pub use welcome::WelcomePopup;
pub use widget_card::WidgetCard;
