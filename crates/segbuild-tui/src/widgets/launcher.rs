//! Host screen with the "Save segment" launcher button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, render_shadow};
use crate::theme::styles;

pub const LAUNCH_BUTTON: &str = "[ Save segment ]";
const TITLE: &str = " Segment Builder ";
const DESCRIPTION: &str = "Build an audience segment from user and group traits.";
const HINTS: &str = "[Enter/s] Open  [q] Quit";

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 10;

pub struct Launcher<'a> {
    endpoint: &'a str,
}

impl<'a> Launcher<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }
}

impl Widget for Launcher<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        render_shadow(buf, card);

        let block = styles::glass_block(true)
            .title(TITLE)
            .title_style(styles::accent_bold());
        let inner = block.inner(card);
        block.render(card, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Button
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Endpoint
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

        Paragraph::new(DESCRIPTION)
            .style(styles::text_secondary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(LAUNCH_BUTTON, styles::focused_selected()))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Posts to ", styles::text_muted()),
            Span::styled(self.endpoint, styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

        Paragraph::new(HINTS)
            .style(styles::text_muted())
            .alignment(Alignment::Center)
            .render(chunks[6], buf);
    }
}
