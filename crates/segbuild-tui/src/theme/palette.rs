//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const PANEL_BG: Color = Color::Rgb(24, 26, 34); // Side panel background
pub const HEADER_BG: Color = Color::Rgb(57, 174, 169); // Panel header bar

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

/// Foreground on accent-colored backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Trait dots ---
pub const USER_TRAIT: Color = Color::Green;
pub const GROUP_TRAIT: Color = Color::LightMagenta;
pub const NEUTRAL_TRAIT: Color = Color::DarkGray;

// --- Form controls ---
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);
pub const INPUT_INACTIVE_BG: Color = Color::Rgb(40, 40, 50);
pub const BUTTON_INACTIVE_BG: Color = Color::Rgb(50, 50, 60);

// --- Effects ---
pub const SHADOW: Color = Color::Black;
