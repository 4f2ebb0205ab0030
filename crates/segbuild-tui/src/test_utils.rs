//! Rendering helpers for widget and full-screen tests

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// In-memory terminal whose buffer can be searched for text
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Draw a whole frame, e.g. with `render::view`
    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("drawing to test backend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Whether any single row contains `text`
    pub fn buffer_contains(&self, text: &str) -> bool {
        let area = self.buffer().area;
        (area.top()..area.bottom()).any(|y| self.line_contains(y, text))
    }

    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        row_text(self.buffer(), y).contains(text)
    }
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    if y >= buffer.area.bottom() {
        return String::new();
    }
    (buffer.area.left()..buffer.area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_search_by_row() {
        let mut term = TestTerminal::with_size(30, 4);
        let area = term.area();
        term.render_widget(Paragraph::new("first\nsecond row"), area);

        assert!(term.buffer_contains("second row"));
        assert!(term.line_contains(0, "first"));
        assert!(!term.line_contains(0, "second"));
        assert!(!term.line_contains(9, "first"));
        assert!(!term.buffer_contains("first second"));
    }
}
