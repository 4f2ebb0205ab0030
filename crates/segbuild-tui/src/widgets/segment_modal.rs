//! "Saving Segment" side panel
//!
//! Renders one [`SegmentBuilderState`]: the name input, the selected schema
//! rows, the add-schema chooser and the footer buttons. Focus comes from the
//! builder; this widget never mutates state.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use segbuild_app::{BuilderFocus, SegmentBuilderState};
use segbuild_core::{SchemaField, TraitCategory};

use crate::theme::{palette, styles};

pub const HEADER_TITLE: &str = "Saving Segment";
pub const NAME_LABEL: &str = "Enter the Name of the Segment";
pub const NAME_PLACEHOLDER: &str = "Name of the segment";
pub const INFO_TEXT: &str = "To save your segment, you need to add the schemas to build the query";
pub const ADD_PLACEHOLDER: &str = "Add schema to segment";
pub const ADD_LINK: &str = "+ Add new schema";
pub const SAVE_LABEL: &str = "Save the Segment";
pub const CANCEL_LABEL: &str = "Cancel";
pub const INCOMPLETE_HINT: &str = "Segment name and at least one schema are required.";
pub const SUBMITTING_HINT: &str = "Saving segment...";

const DOT: &str = "●";
const REMOVE: &str = "[-]";

/// Side panel widget for the segment builder
pub struct SegmentModal<'a> {
    builder: &'a SegmentBuilderState,
}

impl<'a> SegmentModal<'a> {
    pub fn new(builder: &'a SegmentBuilderState) -> Self {
        Self { builder }
    }

    fn focus(&self) -> BuilderFocus {
        self.builder.focus
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![Span::raw(" ← "), Span::raw(HEADER_TITLE)]);
        Paragraph::new(title)
            .style(styles::header_bar())
            .render(area, buf);
    }

    fn render_name_input(&self, area: Rect, buf: &mut Buffer) {
        let active = self.focus() == BuilderFocus::Name;
        let name = self.builder.name();

        let line = if name.is_empty() && !active {
            Line::from(Span::styled(
                format!(" {}", NAME_PLACEHOLDER),
                styles::text_muted(),
            ))
        } else {
            let cursor = if active { "|" } else { "" };
            // Keep the end of long names (and the cursor) visible
            let room = (area.width as usize).saturating_sub(1 + cursor.len());
            Line::from(format!(" {}{}", visible_tail(name, room), cursor))
        };

        Paragraph::new(line)
            .style(styles::input(active))
            .render(area, buf);
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let legend = Line::from(vec![
            Span::styled(DOT, styles::trait_dot(Some(TraitCategory::User))),
            Span::styled(
                format!(" - {}   ", TraitCategory::User.legend()),
                styles::text_secondary(),
            ),
            Span::styled(DOT, styles::trait_dot(Some(TraitCategory::Group))),
            Span::styled(
                format!(" - {}", TraitCategory::Group.legend()),
                styles::text_secondary(),
            ),
        ]);
        Paragraph::new(legend)
            .alignment(Alignment::Right)
            .render(area, buf);
    }

    /// One schema line: dot, label (with arrows when focused) and `[-]`
    fn render_schema_line(
        &self,
        area: Rect,
        buf: &mut Buffer,
        category: Option<TraitCategory>,
        label: Span<'_>,
        focused: bool,
        removable: bool,
    ) {
        // Rows squeezed out by a short panel get an empty rect at its bottom
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let label = if focused {
            Span::styled(format!("◂ {} ▸", label.content), styles::focused_selected())
        } else {
            label
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", DOT), styles::trait_dot(category)),
            label,
        ]);
        Paragraph::new(line).render(area, buf);

        if area.width > REMOVE.len() as u16 {
            let remove_style = if removable {
                Style::default().fg(palette::STATUS_RED)
            } else {
                styles::text_muted().add_modifier(Modifier::DIM)
            };
            let x = area.x + area.width - REMOVE.len() as u16;
            buf.set_string(x, area.y, REMOVE, remove_style);
        }
    }

    fn render_schema_box(&self, area: Rect, buf: &mut Buffer) {
        let focus = self.focus();
        let box_focused = matches!(focus, BuilderFocus::Row(_) | BuilderFocus::AddChooser);
        let block = styles::glass_block(box_focused);
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        let selection = self.builder.selection();
        let mut constraints = vec![Constraint::Length(1); selection.len() + 1];
        constraints.push(Constraint::Min(0));
        let lines = Layout::vertical(constraints).split(inner);

        for (index, field) in selection.iter().enumerate() {
            self.render_schema_line(
                lines[index],
                buf,
                Some(field.category),
                Span::styled(field.label, styles::text_primary()),
                focus == BuilderFocus::Row(index),
                true,
            );
        }

        let pending = self
            .builder
            .pending()
            .map(|field: &SchemaField| Span::styled(field.label, styles::text_primary()))
            .unwrap_or_else(|| Span::styled(ADD_PLACEHOLDER, styles::text_muted()));
        self.render_schema_line(
            lines[selection.len()],
            buf,
            None,
            pending,
            focus == BuilderFocus::AddChooser,
            false,
        );
    }

    fn render_add_link(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.focus() == BuilderFocus::AddLink {
            styles::focused_selected()
        } else {
            styles::accent().add_modifier(Modifier::UNDERLINED)
        };
        Paragraph::new(Span::styled(ADD_LINK, style)).render(area, buf);
    }

    fn render_hint(&self, area: Rect, buf: &mut Buffer) {
        let hint = if self.builder.is_submitting() {
            SUBMITTING_HINT
        } else if !self.builder.can_submit() {
            INCOMPLETE_HINT
        } else {
            return;
        };
        Paragraph::new(hint).style(styles::warning()).render(area, buf);
    }

    fn render_button(
        &self,
        area: Rect,
        buf: &mut Buffer,
        label: &str,
        focused: bool,
        enabled: bool,
    ) {
        let padded = format!("{:^width$}", label, width = area.width as usize);
        Paragraph::new(padded)
            .style(styles::button(focused, enabled))
            .render(area, buf);
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([
            Constraint::Length(SAVE_LABEL.len() as u16 + 4),
            Constraint::Length(2),
            Constraint::Length(CANCEL_LABEL.len() as u16 + 4),
            Constraint::Min(0),
        ])
        .split(area);

        let save_enabled = self.builder.can_submit() && !self.builder.is_submitting();
        self.render_button(
            chunks[0],
            buf,
            SAVE_LABEL,
            self.focus() == BuilderFocus::Save,
            save_enabled,
        );
        self.render_button(
            chunks[2],
            buf,
            CANCEL_LABEL,
            self.focus() == BuilderFocus::Cancel,
            true,
        );
    }

    fn render_key_hints(&self, area: Rect, buf: &mut Buffer) {
        let hints = match self.focus() {
            BuilderFocus::Name => "[Tab] Next  [Esc] Close",
            BuilderFocus::Row(_) => "[←→] Change  [-] Remove  [Tab] Next  [Esc] Close",
            BuilderFocus::AddChooser => "[←→] Choose  [Enter] Add  [Tab] Next  [Esc] Close",
            BuilderFocus::AddLink | BuilderFocus::Save | BuilderFocus::Cancel => {
                "[Enter] Activate  [Tab] Next  [Esc] Close"
            }
        };
        Paragraph::new(hints)
            .style(styles::text_muted())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for SegmentModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::PANEL_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.builder.selection().len() as u16;
        let chunks = Layout::vertical([
            Constraint::Length(1),        // Header
            Constraint::Length(1),        // Spacing
            Constraint::Length(1),        // Name label
            Constraint::Length(1),        // Name input
            Constraint::Length(1),        // Spacing
            Constraint::Length(2),        // Info text
            Constraint::Length(1),        // Legend
            Constraint::Length(rows + 3), // Schema box
            Constraint::Length(1),        // Add link
            Constraint::Min(0),           // Rest
            Constraint::Length(1),        // Validation hint
            Constraint::Length(1),        // Buttons
            Constraint::Length(1),        // Key hints
        ])
        .split(inner);

        self.render_header(chunks[0], buf);

        let body = |rect: Rect| rect.inner(Margin::new(1, 0));

        Paragraph::new(NAME_LABEL)
            .style(styles::text_primary())
            .render(body(chunks[2]), buf);
        self.render_name_input(body(chunks[3]), buf);

        Paragraph::new(INFO_TEXT)
            .style(styles::text_secondary())
            .wrap(Wrap { trim: true })
            .render(body(chunks[5]), buf);

        self.render_legend(body(chunks[6]), buf);
        self.render_schema_box(body(chunks[7]), buf);
        self.render_add_link(body(chunks[8]), buf);
        self.render_hint(body(chunks[10]), buf);
        self.render_buttons(body(chunks[11]), buf);
        self.render_key_hints(body(chunks[12]), buf);
    }
}

/// Longest suffix of `text` that fits in `width` terminal columns
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use segbuild_app::BuilderId;

    fn builder_with(name: &str, keys: &[&str]) -> SegmentBuilderState {
        let mut builder = SegmentBuilderState::new(BuilderId(1));
        builder.set_name(name);
        for key in keys {
            builder.select_pending(key).unwrap();
            builder.commit_pending();
        }
        builder
    }

    fn render(builder: &SegmentBuilderState) -> TestTerminal {
        let mut term = TestTerminal::with_size(70, 28);
        let area = term.area();
        term.render_widget(SegmentModal::new(builder), area);
        term
    }

    #[test]
    fn test_renders_static_text() {
        let builder = builder_with("", &[]);
        let term = render(&builder);

        assert!(term.buffer_contains(HEADER_TITLE));
        assert!(term.buffer_contains(NAME_LABEL));
        assert!(term.buffer_contains("User Traits"));
        assert!(term.buffer_contains("Group Traits"));
        assert!(term.buffer_contains(ADD_LINK));
        assert!(term.buffer_contains(SAVE_LABEL));
        assert!(term.buffer_contains(CANCEL_LABEL));
    }

    #[test]
    fn test_empty_name_shows_cursor_when_focused() {
        let builder = builder_with("", &[]);
        let term = render(&builder);
        // Name is focused by default, so the placeholder gives way to the cursor
        assert!(!term.buffer_contains(NAME_PLACEHOLDER));
        assert!(term.buffer_contains("|"));
    }

    #[test]
    fn test_placeholder_when_unfocused() {
        let mut builder = builder_with("", &[]);
        builder.focus = BuilderFocus::Save;
        let term = render(&builder);
        assert!(term.buffer_contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_selected_rows_and_add_placeholder() {
        let mut builder = builder_with("VIP Users", &["first_name", "city"]);
        builder.focus = BuilderFocus::Save;
        let term = render(&builder);

        assert!(term.buffer_contains("VIP Users"));
        assert!(term.buffer_contains("First Name"));
        assert!(term.buffer_contains("City"));
        assert!(term.buffer_contains(ADD_PLACEHOLDER));
        assert!(!term.buffer_contains(INCOMPLETE_HINT));
    }

    #[test]
    fn test_pending_choice_replaces_placeholder() {
        let mut builder = builder_with("Pending", &[]);
        builder.select_pending("gender").unwrap();
        builder.focus = BuilderFocus::AddChooser;
        let term = render(&builder);

        assert!(term.buffer_contains("◂ Gender ▸"));
        assert!(!term.buffer_contains(ADD_PLACEHOLDER));
    }

    #[test]
    fn test_focused_row_shows_arrows() {
        let mut builder = builder_with("Rows", &["age", "state"]);
        builder.focus = BuilderFocus::Row(1);
        let term = render(&builder);
        assert!(term.buffer_contains("◂ State ▸"));
        assert!(!term.buffer_contains("◂ Age ▸"));
    }

    #[test]
    fn test_incomplete_hint() {
        let builder = builder_with("Only a name", &[]);
        let term = render(&builder);
        assert!(term.buffer_contains(INCOMPLETE_HINT));

        let builder = builder_with("   ", &["age"]);
        let term = render(&builder);
        assert!(term.buffer_contains(INCOMPLETE_HINT));
    }

    #[test]
    fn test_submitting_hint() {
        let mut builder = builder_with("Busy", &["age"]);
        builder.begin_submit();
        let term = render(&builder);
        assert!(term.buffer_contains(SUBMITTING_HINT));
        assert!(!term.buffer_contains(INCOMPLETE_HINT));
    }

    #[test]
    fn test_row_dots_use_trait_colors() {
        let mut builder = builder_with("Dots", &["first_name", "account_name"]);
        builder.focus = BuilderFocus::Save;
        let term = render(&builder);

        let dot_colors: Vec<_> = term
            .buffer()
            .content
            .iter()
            .filter(|cell| cell.symbol() == DOT)
            .map(|cell| cell.fg)
            .collect();

        // Legend (user, group), two rows, then the neutral add row
        assert_eq!(
            dot_colors,
            vec![
                palette::USER_TRAIT,
                palette::GROUP_TRAIT,
                palette::USER_TRAIT,
                palette::GROUP_TRAIT,
                palette::NEUTRAL_TRAIT,
            ]
        );
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("segment", 20), "segment");
        assert_eq!(visible_tail("segment", 4), "ment");
        assert_eq!(visible_tail("segment", 0), "");
        // Wide characters take two columns
        assert_eq!(visible_tail("ab日本", 4), "日本");
        assert_eq!(visible_tail("ab日本", 3), "本");
    }
}
