//! Widget grid - places cards on the 12-column grid and records hit boxes

use chrono::NaiveDate;
use opnpage_app::grid::{place_widgets, CellRect, GridSlot, HitBox};
use opnpage_app::AppState;
use opnpage_core::GRID_COLUMNS;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, StatefulWidget, Widget};

use super::widget_card::{CardEmphasis, WidgetCard};
use crate::theme::{styles, Palette};

/// Terminal rows per grid row unit
pub const ROW_HEIGHT: u16 = 8;

/// Renders every widget in display order
///
/// The render state receives one [`HitBox`] per visible card.
pub struct DashboardGrid<'a> {
    state: &'a AppState,
    palette: &'a Palette,
    today: NaiveDate,
}

impl<'a> DashboardGrid<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette, today: NaiveDate) -> Self {
        Self {
            state,
            palette,
            today,
        }
    }

    fn emphasis(&self, index: usize) -> CardEmphasis {
        let state = self.state;
        if state.dragged_index() == Some(index) {
            CardEmphasis::Dragging
        } else if state.drop_target() == Some(index) {
            CardEmphasis::DropTarget
        } else if index == state.selected {
            CardEmphasis::Selected
        } else {
            CardEmphasis::None
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut lines = vec![Line::styled("No widgets on this dashboard", styles::text_secondary(p))];
        lines.push(if self.state.edit_mode {
            Line::styled("Press a to add a widget", styles::text_muted(p))
        } else {
            Line::styled("Press e to edit the layout", styles::text_muted(p))
        });
        let top = area.y + area.height.saturating_sub(2) / 2;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, top, area.width, area.bottom() - top), buf);
    }
}

/// Unscrolled rectangle of `slot`, relative to the grid origin
pub fn slot_rect(slot: &GridSlot, width: u16) -> Rect {
    let column_x = |column: u16| (u32::from(width) * u32::from(column) / u32::from(GRID_COLUMNS)) as u16;
    let x = column_x(slot.column);
    Rect::new(
        x,
        slot.row.saturating_mul(ROW_HEIGHT),
        column_x(slot.column + slot.columns) - x,
        slot.rows.saturating_mul(ROW_HEIGHT),
    )
}

/// Rows to scroll so that rows `top..bottom` fit in a `viewport`-row window
pub fn scroll_offset(top: u16, bottom: u16, viewport: u16) -> u16 {
    if bottom <= viewport {
        0
    } else {
        (bottom - viewport).min(top)
    }
}

impl StatefulWidget for DashboardGrid<'_> {
    type State = Vec<HitBox>;

    fn render(self, area: Rect, buf: &mut Buffer, hit_boxes: &mut Vec<HitBox>) {
        hit_boxes.clear();
        let widgets = self.state.widgets();
        if area.is_empty() {
            return;
        }
        if widgets.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let slots = place_widgets(widgets);
        let focus = self
            .state
            .drop_target()
            .unwrap_or(self.state.selected)
            .min(slots.len() - 1);
        let focus_rect = slot_rect(&slots[focus], area.width);
        let scroll = scroll_offset(focus_rect.top(), focus_rect.bottom(), area.height);

        let window_bottom = scroll.saturating_add(area.height);
        for (index, (widget, slot)) in widgets.iter().zip(&slots).enumerate() {
            let local = slot_rect(slot, area.width);
            if local.bottom() <= scroll || local.top() >= window_bottom {
                continue;
            }
            let top = local.y.max(scroll);
            let bottom = local.bottom().min(window_bottom);
            let rect = Rect::new(area.x + local.x, area.y + top - scroll, local.width, bottom - top);
            if rect.is_empty() {
                continue;
            }

            WidgetCard::new(widget, &self.state.annotations, self.palette, self.today)
                .edit_mode(self.state.edit_mode)
                .emphasis(self.emphasis(index))
                .render(rect, buf);

            hit_boxes.push(HitBox {
                id: widget.id.clone(),
                rect: CellRect::new(rect.x, rect.y, rect.width, rect.height),
            });
        }
    }
}
