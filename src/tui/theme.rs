//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;
use tracing::debug;

use crate::config::ThemeMode;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Checkbox and criteria table colors
    pub checked: Color,
    pub unchecked: Color,
    pub points: Color,
    pub group: Color,
    pub hint: Color,
    pub row_alt_bg: Color,
    pub row_selected: Style,
    pub header_style: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub heading: Style,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,
    pub tab_visited_style: Style,

    // Notes panel
    pub note_title: Style,
    pub note_border: Color,

    // Result page
    pub result_pass: Color,
    pub result_fail: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            checked: Color::Green,
            unchecked: Color::DarkGray,
            points: Color::Yellow,
            group: Color::Magenta,
            hint: Color::Gray,
            row_alt_bg: Color::Indexed(235),
            row_selected: Style::new().reversed(),
            header_style: Style::new().bold(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            heading: Style::new().fg(Color::White).bold(),
            tab_active_style: Style::new().fg(Color::Cyan).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            tab_visited_style: Style::new().fg(Color::Gray),
            note_title: Style::new().fg(Color::Cyan).bold(),
            note_border: Color::Indexed(238),
            result_pass: Color::Green,
            result_fail: Color::Red,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    /// Light theme palette, tuned for white or pale terminal backgrounds
    pub fn light() -> Self {
        Self {
            checked: Color::Rgb(0, 120, 0),
            unchecked: Color::Gray,
            points: Color::Rgb(150, 90, 0),
            group: Color::Rgb(130, 0, 130),
            hint: Color::DarkGray,
            row_alt_bg: Color::Indexed(254),
            row_selected: Style::new().reversed(),
            header_style: Style::new().bold(),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            heading: Style::new().fg(Color::Black).bold(),
            tab_active_style: Style::new().fg(Color::Blue).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::Gray),
            tab_visited_style: Style::new().fg(Color::DarkGray),
            note_title: Style::new().fg(Color::Blue).bold(),
            note_border: Color::Indexed(250),
            result_pass: Color::Rgb(0, 120, 0),
            result_fail: Color::Rgb(180, 0, 0),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 120, 0),
            flash_error: Color::Rgb(180, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    pub fn checkbox_color(&self, checked: bool) -> Color {
        if checked {
            self.checked
        } else {
            self.unchecked
        }
    }

    pub fn verdict_color(&self, classified: bool) -> Color {
        if classified {
            self.result_pass
        } else {
            self.result_fail
        }
    }
}

/// Pick the palette for a configured mode. `Auto` asks the terminal for its
/// background luminance and falls back to dark when it cannot tell.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            Ok(_) => ThemeColors::dark(),
            Err(e) => {
                debug!("could not detect terminal background: {}", e);
                ThemeColors::dark()
            }
        },
    }
}
