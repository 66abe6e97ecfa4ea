//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;
use serde::{Deserialize, Serialize};

/// Theme preference from config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

/// Distinct colors for players, assigned in standings order
const PLAYER_PALETTE: [Color; 10] = [
    Color::Rgb(0x1f, 0x77, 0xb4), // blue
    Color::Rgb(0xff, 0x7f, 0x0e), // orange
    Color::Rgb(0x2c, 0xa0, 0x2c), // green
    Color::Rgb(0xd6, 0x27, 0x28), // red
    Color::Rgb(0x94, 0x67, 0xbd), // purple
    Color::Rgb(0x8c, 0x56, 0x4b), // brown
    Color::Rgb(0xe3, 0x77, 0xc2), // pink
    Color::Rgb(0x7f, 0x7f, 0x7f), // gray
    Color::Rgb(0xbc, 0xbd, 0x22), // olive
    Color::Rgb(0x17, 0xbe, 0xcf), // cyan
];

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Distribution bars
    pub bar: Color,
    pub bar_value: Style,
    pub bar_label: Style,

    // Chart axes and grid text
    pub axis: Color,

    // Styles
    pub title_style: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,

    pub players: [Color; 10],
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            bar: Color::Rgb(0x46, 0x82, 0xb4), // steel blue
            bar_value: Style::new().fg(Color::White).bg(Color::Rgb(0x46, 0x82, 0xb4)),
            bar_label: Style::new().fg(Color::Gray),
            axis: Color::Gray,
            title_style: Style::new().bold(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            tab_active_style: Style::new().fg(Color::Cyan).bold(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
            players: PLAYER_PALETTE,
        }
    }

    pub fn light() -> Self {
        Self {
            bar: Color::Rgb(0x46, 0x82, 0xb4),
            bar_value: Style::new().fg(Color::White).bg(Color::Rgb(0x46, 0x82, 0xb4)),
            bar_label: Style::new().fg(Color::Black),
            axis: Color::DarkGray,
            title_style: Style::new().bold(),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            tab_active_style: Style::new().fg(Color::Blue).bold(),
            tab_inactive_style: Style::new().fg(Color::Gray),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
            players: PLAYER_PALETTE,
        }
    }

    /// Color for the player at `index` in standings order (wraps around)
    pub fn player_color(&self, index: usize) -> Color {
        self.players[index % self.players.len()]
    }
}

/// Pick concrete colors for a theme preference.
///
/// `Auto` asks the terminal for its background luma; if the terminal doesn't
/// answer, dark is assumed.
pub fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
        Theme::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_color_wraps() {
        let colors = ThemeColors::dark();
        assert_eq!(colors.player_color(0), colors.player_color(10));
        assert_ne!(colors.player_color(0), colors.player_color(1));
    }

    #[test]
    fn test_explicit_themes() {
        assert_eq!(resolve_theme(Theme::Light).title_color, Color::Blue);
        assert_eq!(resolve_theme(Theme::Dark).title_color, Color::Cyan);
    }

    #[test]
    fn test_theme_parse() {
        let theme: Theme = serde_saphyr::from_str("light").unwrap();
        assert_eq!(theme, Theme::Light);
        assert!(serde_saphyr::from_str::<Theme>("neon").is_err());
    }
}
