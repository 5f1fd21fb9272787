//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widgets and whole frames can be rendered
//! and inspected as plain text.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(StatusBar::new(&state, &LIGHT), term.area());
//! assert!(term.buffer_contains("[e] Edit Layout"));
//! ```
//!
//! Wide glyphs (emoji) occupy two cells; the trailing cell reads as a space
//! in [`TestTerminal::content`].

use opnpage_app::config::Settings;
use opnpage_app::layout_store::IdGenerator;
use opnpage_app::widget_view::{resolve_widget, ResolvedWidget, WidgetView};
use opnpage_app::{AppState, LayoutStore, MemoryStore};
use opnpage_core::{
    Annotations, DataSourceId, VisualizationType, WidgetDescriptor, WidgetDraft, WidgetId,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for narrow layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// All content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }

    pub fn clear(&mut self) {
        self.terminal.clear().expect("Failed to clear terminal");
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Resolve a throwaway widget of `kind` showing `source`
pub fn resolved(
    kind: VisualizationType,
    source: DataSourceId,
    annotations: &Annotations,
) -> ResolvedWidget<'_> {
    let widget = WidgetDescriptor::from_draft(WidgetId::new("test"), WidgetDraft::new(kind, source));
    match resolve_widget(&widget, annotations) {
        WidgetView::Visualization(resolved) => resolved,
        other => panic!("expected a known visualization, got {:?}", other),
    }
}

/// Default six-pill dashboard, welcome dismissed, in-memory storage
pub fn test_state() -> AppState {
    let mut settings = Settings::default();
    settings.behavior.show_welcome = false;
    let layout =
        LayoutStore::load_with_ids(Box::new(MemoryStore::new()), IdGenerator::starting_at(100));
    AppState::new(layout, settings)
}
