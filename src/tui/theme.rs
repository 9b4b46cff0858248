use ratatui::style::{Color, Modifier, Style};

use crate::model::UiConfig;
use crate::model::task::TaskStatus;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub border: Color,
    pub green: Color,
    pub red: Color,
    /// Foreground of the selected table row
    pub highlight: Color,
    /// Background of the selected table row
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Reset,
            text_bright: Color::White,
            dim: Color::DarkGray,
            border: Color::Gray,
            green: Color::Green,
            red: Color::Red,
            highlight: Color::Blue,
            selection_bg: Color::Black,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "border" => theme.border = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "highlight" => theme.highlight = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Style for the selected task row
    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the color for a task status
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Todo => self.text,
            TaskStatus::Done => self.green,
        }
    }
}
