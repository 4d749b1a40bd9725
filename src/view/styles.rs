//! Color configuration and the view's style palette.
//!
//! Colors can be disabled with the `--no-color` flag or the `NO_COLOR`
//! environment variable; the palette then falls back to text attributes
//! (bold, dim, reversed) only.

use ratatui::style::{Color, Modifier, Style};

/// Whether color output is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ColorConfig {
    /// Resolve from CLI args and environment. First match wins:
    /// the `--no-color` flag, then a set `NO_COLOR` env var (any value),
    /// then the default (colors on).
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Whether colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ViewStyles =====

/// The styles the view renders with.
#[derive(Debug, Clone, Copy)]
pub struct ViewStyles {
    title: Style,
    detail: Style,
    doi: Style,
    error: Style,
    hint: Style,
    current_page: Style,
    border_focused: Style,
    border_unfocused: Style,
}

impl Default for ViewStyles {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

impl ViewStyles {
    /// Palette for the given color configuration.
    pub fn new(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                detail: Style::default().fg(Color::DarkGray),
                doi: Style::default().fg(Color::Blue),
                error: Style::default().fg(Color::Red),
                hint: Style::default().add_modifier(Modifier::DIM),
                current_page: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                border_focused: Style::default().fg(Color::Cyan),
                border_unfocused: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                detail: Style::default().add_modifier(Modifier::DIM),
                doi: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                hint: Style::default().add_modifier(Modifier::DIM),
                current_page: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                border_focused: Style::default().add_modifier(Modifier::BOLD),
                border_unfocused: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }

    /// Record title.
    pub fn title(&self) -> Style {
        self.title
    }

    /// Secondary record detail (affiliations, journal line).
    pub fn detail(&self) -> Style {
        self.detail
    }

    /// DOI line.
    pub fn doi(&self) -> Style {
        self.doi
    }

    /// Status-line error message.
    pub fn error(&self) -> Style {
        self.error
    }

    /// Dimmed hints and empty-state text.
    pub fn hint(&self) -> Style {
        self.hint
    }

    /// The current page's pager button.
    pub fn current_page(&self) -> Style {
        self.current_page
    }

    /// Search input border.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color_env)]
    fn colors_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    #[serial(no_color_env)]
    fn flag_disables_colors() {
        std::env::remove_var("NO_COLOR");
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    #[serial(no_color_env)]
    fn env_var_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!ColorConfig::from_env_and_args(false).colors_enabled());
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn monochrome_palette_carries_no_foreground_colors() {
        let styles = ViewStyles::new(ColorConfig { enabled: false });
        for style in [
            styles.title(),
            styles.detail(),
            styles.doi(),
            styles.error(),
            styles.hint(),
            styles.current_page(),
            styles.border(true),
            styles.border(false),
        ] {
            assert_eq!(style.fg, None);
        }
    }

    #[test]
    fn colored_palette_distinguishes_error_text() {
        let styles = ViewStyles::default();
        assert_eq!(styles.error().fg, Some(Color::Red));
    }
}
