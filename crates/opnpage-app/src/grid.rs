//! Grid placement - row-major flow of widgets onto the 12-column grid
//!
//! Placement is computed at render time from each descriptor's `width` and
//! `height` hints; stored values are never modified. Widths are clamped to
//! `1..=12` and heights to `1..=MAX_ROW_SPAN` for placement only.

use opnpage_core::{WidgetDescriptor, WidgetId, GRID_COLUMNS};

/// Tallest row-span honoured by placement
pub const MAX_ROW_SPAN: u16 = 4;

/// Grid position of one widget, in column and row units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    pub column: u16,
    pub row: u16,
    pub columns: u16,
    pub rows: u16,
}

impl GridSlot {
    fn overlaps(&self, other: &GridSlot) -> bool {
        self.column < other.column + other.columns
            && other.column < self.column + self.columns
            && self.row < other.row.saturating_add(other.rows)
            && other.row < self.row.saturating_add(self.rows)
    }
}

/// Flow widgets left to right, wrapping at [`GRID_COLUMNS`]
///
/// A row band is as tall as its tallest widget, so slots never overlap.
pub fn place_widgets(widgets: &[WidgetDescriptor]) -> Vec<GridSlot> {
    let mut slots = Vec::with_capacity(widgets.len());
    let mut column = 0;
    let mut row: u16 = 0;
    let mut band_height = 0;

    for widget in widgets {
        let columns = widget.width.clamp(1, GRID_COLUMNS);
        let rows = widget.height.clamp(1, MAX_ROW_SPAN);

        if column + columns > GRID_COLUMNS {
            row = row.saturating_add(band_height);
            column = 0;
            band_height = 0;
        }

        slots.push(GridSlot {
            column,
            row,
            columns,
            rows,
        });
        column += columns;
        band_height = band_height.max(rows);
    }

    slots
}

/// Total row units occupied by `slots`
pub fn total_rows(slots: &[GridSlot]) -> u16 {
    slots.iter().map(|s| s.row.saturating_add(s.rows)).max().unwrap_or(0)
}

/// True when no two slots share a cell
pub fn is_non_overlapping(slots: &[GridSlot]) -> bool {
    slots
        .iter()
        .enumerate()
        .all(|(i, a)| slots[i + 1..].iter().all(|b| !a.overlaps(b)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Hit Boxes
// ─────────────────────────────────────────────────────────────────────────────

/// Screen rectangle in terminal cells
///
/// Kept independent of the terminal library so pointer logic stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }

    pub fn center(&self) -> (i32, i32) {
        (
            i32::from(self.x) + i32::from(self.width) / 2,
            i32::from(self.y) + i32::from(self.height) / 2,
        )
    }
}

/// Where a widget was drawn in the last frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitBox {
    pub id: WidgetId,
    pub rect: CellRect,
}

/// Widget under a pointer position, if any
pub fn hit_test(hit_boxes: &[HitBox], column: u16, row: u16) -> Option<&WidgetId> {
    hit_boxes
        .iter()
        .find(|hb| hb.rect.contains(column, row))
        .map(|hb| &hb.id)
}

/// Arrow-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Index of the widget reached from `current` by an arrow key
///
/// Left and right step through display order. Up and down pick the nearest
/// widget above or below on screen, falling back to display order when the
/// current widget has no hit box. Stays put at the edges.
pub fn neighbor(
    hit_boxes: &[HitBox],
    ids: &[WidgetId],
    current: usize,
    direction: Direction,
) -> usize {
    if ids.is_empty() {
        return 0;
    }
    let current = current.min(ids.len() - 1);
    let last = ids.len() - 1;

    let vertical_step = |up: bool| {
        if up {
            current.saturating_sub(1)
        } else {
            (current + 1).min(last)
        }
    };

    match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(last),
        Direction::Up | Direction::Down => {
            let up = direction == Direction::Up;
            let rect_of =
                |id: &WidgetId| hit_boxes.iter().find(|hb| &hb.id == id).map(|hb| hb.rect);

            let Some(origin) = rect_of(&ids[current]) else {
                return vertical_step(up);
            };
            let (ox, oy) = origin.center();

            ids.iter()
                .enumerate()
                .filter_map(|(i, id)| rect_of(id).map(|r| (i, r.center())))
                .filter(|(_, (_, y))| if up { *y < oy } else { *y > oy })
                .min_by_key(|(_, (x, y))| ((y - oy).abs(), (x - ox).abs()))
                .map(|(i, _)| i)
                .unwrap_or(current)
        }
    }
}
