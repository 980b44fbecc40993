//! Theme and Colors
//!
//! The page palette: neon green accent on near-black, the signature look
//! of the portfolio. Semantic roles can be overridden from the content
//! document's `theme.colors` map; a malformed hex value logs a warning and
//! keeps the default - theme problems are cosmetic, never fatal.

use folio_core::Theme;
use ratatui::style::Color;

/// Accent - neon green
pub const ACCENT: Color = Color::Rgb(0, 255, 149);

/// Primary text - near white
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);

/// Secondary text - pale mint
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 236, 206);

/// Section background
pub const DARK_BG: Color = Color::Rgb(17, 17, 17);

/// Page / terminal-block background
pub const DARKER_BG: Color = Color::Rgb(10, 10, 10);

/// Dim/system text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Semantic color roles resolved for the session.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub dark_bg: Color,
    pub darker_bg: Color,
    pub dim: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            text_primary: TEXT_PRIMARY,
            text_secondary: TEXT_SECONDARY,
            dark_bg: DARK_BG,
            darker_bg: DARKER_BG,
            dim: DIM_GRAY,
        }
    }
}

impl Palette {
    /// Resolve the palette from the content theme, falling back to the
    /// defaults per role.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut palette = Self::default();
        for (role, value) in &theme.colors {
            let Some(color) = parse_hex(value) else {
                tracing::warn!(role, value, "unparseable theme color, keeping default");
                continue;
            };
            match role.as_str() {
                "accent" => palette.accent = color,
                "text-primary" => palette.text_primary = color,
                "text-secondary" => palette.text_secondary = color,
                "dark-bg" => palette.dark_bg = color,
                "darker-bg" => palette.darker_bg = color,
                _ => tracing::debug!(role, "unknown theme color role ignored"),
            }
        }
        palette
    }

    /// Fade a foreground color toward the background by `opacity`
    /// (0.0 = invisible, 1.0 = full color). The terminal has no alpha
    /// channel, so fades are emulated by mixing toward the page background.
    pub fn faded(&self, color: Color, opacity: f32) -> Color {
        mix(self.darker_bg, color, opacity.clamp(0.0, 1.0))
    }
}

/// Linear mix between two RGB colors; non-RGB colors snap at t >= 0.5.
fn mix(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Parse `#rrggbb` (or `#rgb`) into a Color.
fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn theme(pairs: &[(&str, &str)]) -> Theme {
        let mut colors = BTreeMap::new();
        for (role, value) in pairs {
            colors.insert(role.to_string(), value.to_string());
        }
        Theme { colors }
    }

    #[test]
    fn resolves_roles_from_theme() {
        let palette = Palette::from_theme(&theme(&[("accent", "#ff0000")]));
        assert_eq!(palette.accent, Color::Rgb(255, 0, 0));
        // Untouched roles keep their defaults
        assert_eq!(palette.text_primary, TEXT_PRIMARY);
    }

    #[test]
    fn bad_hex_keeps_default() {
        let palette = Palette::from_theme(&theme(&[("accent", "not-a-color")]));
        assert_eq!(palette.accent, ACCENT);
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!(parse_hex("#0f0"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn faded_interpolates_toward_background() {
        let palette = Palette::default();
        assert_eq!(palette.faded(ACCENT, 1.0), ACCENT);
        assert_eq!(palette.faded(ACCENT, 0.0), DARKER_BG);
        let Color::Rgb(_, g, _) = palette.faded(ACCENT, 0.5) else {
            panic!("expected rgb");
        };
        assert!(g > 10 && g < 255);
    }
}
