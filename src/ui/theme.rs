//! Color palette.

use ratatui::style::Color;

/// Borders of unfocused panes.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Borders of the focused pane and highlighted rows.
pub const COLOR_ACCENT: Color = Color::White;

pub const COLOR_HEADER: Color = Color::White;

/// Chosen values and successful results.
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Hints, placeholders and other secondary text.
pub const COLOR_DIM: Color = Color::DarkGray;

/// In-flight generation.
pub const COLOR_PENDING: Color = Color::Cyan;

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_INFO: Color = Color::Yellow;

/// Background behind overlays.
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
