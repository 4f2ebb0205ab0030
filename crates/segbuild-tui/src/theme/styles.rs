//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use segbuild_app::NotificationKind;
use segbuild_core::TraitCategory;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Header bar of the side panel
pub fn header_bar() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for focused controls
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Form controls ---
pub fn input(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::INPUT_ACTIVE_BG)
    } else {
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::INPUT_INACTIVE_BG)
    }
}

pub fn button(focused: bool, enabled: bool) -> Style {
    match (focused, enabled) {
        (_, false) => Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::BUTTON_INACTIVE_BG)
            .add_modifier(Modifier::DIM),
        (true, true) => focused_selected(),
        (false, true) => Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::BUTTON_INACTIVE_BG),
    }
}

/// Dot color for a trait category; `None` is the neutral "add" row
pub fn trait_dot(category: Option<TraitCategory>) -> Style {
    let color = match category {
        Some(TraitCategory::User) => palette::USER_TRAIT,
        Some(TraitCategory::Group) => palette::GROUP_TRAIT,
        None => palette::NEUTRAL_TRAIT,
    };
    Style::default().fg(color)
}

pub fn notification(kind: NotificationKind) -> Style {
    match kind {
        NotificationKind::Success => Style::default().fg(palette::STATUS_GREEN),
        NotificationKind::Error => Style::default().fg(palette::STATUS_RED),
    }
}

pub fn warning() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::ITALIC)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
