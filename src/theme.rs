//! Theme colors loaded from Omarchy/Hyprland system theme
//! Reads colors from ~/.config/omarchy/current/theme/kitty.conf

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;
use std::fs;

use crate::message::Kind;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub success: Color,      // "success" messages (color2/green)
    pub error: Color,        // "error" messages (color1/red)
    pub info: Color,         // "info" messages (color4/blue)
    pub warning: Color,      // "warning" messages (color3/yellow)
    pub accent: Color,       // Active borders, key hints (color2 - often amber in Omarchy)
    pub text: Color,         // Primary text (foreground)
    pub text_dim: Color,     // Dimmed text (color8/bright black)
    pub inactive: Color,     // Inactive borders
    pub bg_selected: Color,  // Selection background in the compose popup
}

impl Default for Theme {
    fn default() -> Self {
        // Fallback to Catppuccin-inspired colors if theme can't be loaded
        Self {
            success: Color::Rgb(166, 227, 161),
            error: Color::Rgb(243, 139, 168),
            info: Color::Rgb(137, 180, 250),
            warning: Color::Rgb(249, 226, 175),
            accent: Color::Rgb(250, 179, 135),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
            bg_selected: Color::Rgb(69, 71, 90),
        }
    }
}

impl Theme {
    /// Load theme from Omarchy system theme
    pub fn load() -> Self {
        if let Some(theme) = Self::load_omarchy_theme() {
            return theme;
        }

        Self::default()
    }

    /// Style for a message of this kind.
    ///
    /// Unknown kinds deliberately get the plain text style: the class
    /// token is still carried on the element, there is just no styling
    /// rule attached to it here.
    pub fn kind_style(&self, kind: &Kind) -> Style {
        match kind {
            Kind::Success => Style::default().fg(self.success),
            Kind::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
            Kind::Info => Style::default().fg(self.info),
            Kind::Warning => Style::default().fg(self.warning),
            Kind::Other(_) => Style::default().fg(self.text),
        }
    }

    /// Load colors from Omarchy kitty.conf theme file
    fn load_omarchy_theme() -> Option<Self> {
        let home = dirs::home_dir()?;
        let theme_path = home.join(".config/omarchy/current/theme/kitty.conf");

        let content = fs::read_to_string(&theme_path).ok()?;
        let colors = Self::parse_kitty_conf(&content);

        if colors.is_empty() {
            return None;
        }

        let fallback = Self::default();

        let success = colors.get("color2").or(colors.get("color10"))
            .copied().unwrap_or(fallback.success);

        let error = colors.get("color1").or(colors.get("color9"))
            .copied().unwrap_or(fallback.error);

        let info = colors.get("color4").or(colors.get("color12"))
            .copied().unwrap_or(fallback.info);

        let warning = colors.get("color3").or(colors.get("color11"))
            .copied().unwrap_or(fallback.warning);

        let accent = colors.get("color2").or(colors.get("color10"))
            .copied().unwrap_or(fallback.accent);

        let text = colors.get("foreground")
            .copied().unwrap_or(fallback.text);

        let text_dim = colors.get("color8")
            .copied().unwrap_or(fallback.text_dim);

        let inactive = colors.get("inactive_border_color").or(colors.get("color8"))
            .copied().unwrap_or(fallback.inactive);

        let bg_selected = colors.get("selection_background").or(colors.get("color0"))
            .copied().unwrap_or(fallback.bg_selected);

        Some(Self {
            success,
            error,
            info,
            warning,
            accent,
            text,
            text_dim,
            inactive,
            bg_selected,
        })
    }

    /// Parse kitty.conf format: `key value` or `key #hexcolor`
    fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
        let mut colors = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
            if parts.len() == 2 {
                let key = parts[0].trim();
                let value = parts[1].trim();

                if let Some(color) = Self::parse_hex_color(value) {
                    colors.insert(key.to_string(), color);
                }
            }
        }

        colors
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_in_both_lengths() {
        assert_eq!(
            Theme::parse_hex_color("#a6e3a1"),
            Some(Color::Rgb(166, 227, 161))
        );
        assert_eq!(Theme::parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Theme::parse_hex_color("not-a-color"), None);
        assert_eq!(Theme::parse_hex_color("#12345"), None);
    }

    #[test]
    fn kitty_conf_parsing_skips_comments() {
        let conf = "# a comment\n\nforeground #cdd6f4\ncolor1 #f38ba8\nfont_family JetBrains\n";
        let colors = Theme::parse_kitty_conf(conf);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get("foreground"), Some(&Color::Rgb(205, 214, 244)));
        assert_eq!(colors.get("color1"), Some(&Color::Rgb(243, 139, 168)));
    }

    #[test]
    fn known_kinds_style_distinctly() {
        let theme = Theme::default();
        let success = theme.kind_style(&Kind::Success);
        let error = theme.kind_style(&Kind::Error);
        let info = theme.kind_style(&Kind::Info);
        let warning = theme.kind_style(&Kind::Warning);

        assert_ne!(success.fg, error.fg);
        assert_ne!(success.fg, info.fg);
        assert_ne!(success.fg, warning.fg);
        assert_ne!(info.fg, warning.fg);
    }

    #[test]
    fn unknown_kind_gets_the_plain_text_style() {
        let theme = Theme::default();
        let style = theme.kind_style(&Kind::from_token("celebration"));
        assert_eq!(style.fg, Some(theme.text));
        assert!(style.add_modifier.is_empty());
    }
}
