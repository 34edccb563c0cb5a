use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Light or dark palette, switchable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Moon in dark mode, sun in light mode
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☾",
            ThemeMode::Light => "☀",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub foreground: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                primary: Color::Yellow,
                secondary: Color::Cyan,
                background: Color::Reset,
                foreground: Color::White,
                error: Color::LightRed,
                success: Color::Green,
                border: Color::DarkGray,
                muted: Color::DarkGray,
            },
            ThemeMode::Light => Self {
                mode,
                primary: Color::Blue,
                secondary: Color::Magenta,
                background: Color::White,
                foreground: Color::Black,
                error: Color::Red,
                success: Color::Green,
                border: Color::Gray,
                muted: Color::Gray,
            },
        }
    }

    pub fn toggle(&mut self) {
        *self = Self::for_mode(self.mode.toggled());
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn secondary_style(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn mode_style(&self, mode: &str) -> Style {
        let color = match mode {
            "NORMAL" => self.secondary,
            "INSERT" => self.success,
            "COMMAND" => self.primary,
            _ => self.foreground,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_palette() {
        let mut theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Dark);
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.foreground, Color::Black);
        theme.toggle();
        assert_eq!(theme.foreground, Color::White);
    }
}
