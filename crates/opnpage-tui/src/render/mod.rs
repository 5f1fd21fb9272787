//! Main render/view function (View in TEA pattern)


use chrono::{Local, NaiveDate};
use opnpage_app::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this records the grid's hit boxes in `state` so the
/// next pointer event resolves against what is on screen.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    view_at(frame, state, Local::now().date_naive());
}

/// [`view`] with a fixed calendar date
pub fn view_at(frame: &mut Frame, state: &mut AppState, today: NaiveDate) {
    let area = frame.area();
    let p = palette::for_mode(state.dark_mode);

    // Fill entire terminal with deepest background color
    frame.render_widget(Block::default().style(Style::default().bg(p.deepest_bg)), area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(p, state.edit_mode, state.dark_mode),
        areas.header,
    );

    let mut hit_boxes = std::mem::take(&mut state.hit_boxes);
    frame.render_stateful_widget(
        widgets::DashboardGrid::new(state, p, today),
        areas.grid,
        &mut hit_boxes,
    );
    state.hit_boxes = hit_boxes;

    frame.render_widget(widgets::StatusBar::new(state, p), areas.status);

    // Overlays cover the whole screen
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Welcome => frame.render_widget(widgets::WelcomePopup::new(p), area),
        UiMode::ConfigModal => {
            if let Some(modal) = &state.config_modal {
                frame.render_widget(widgets::ConfigModal::new(modal, p), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog, p), area);
            }
        }
        UiMode::Annotation => {
            if let Some(popup) = &state.annotation_popup {
                frame.render_widget(widgets::AnnotationPopup::new(popup, p), area);
            }
        }
    }
}
