// Copyright (c) 2026 rezky_nightky

use crossterm::style::{Attribute, Color, ContentStyle};

/// Brightness tier of a glyph within its streak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Head,
    Bright,
    Normal,
    Dim,
}

impl Shade {
    /// Tier for the glyph at `index` of a streak of `length` glyphs.
    pub fn for_index(index: usize, length: usize) -> Self {
        if index == 0 {
            Shade::Head
        } else if index < length / 3 {
            Shade::Bright
        } else if index < length / 2 {
            Shade::Normal
        } else {
            Shade::Dim
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Green,
    Red,
    Blue,
    Cyan,
    Yellow,
    Purple,
    Gray,
}

impl Theme {
    fn accent(self) -> Color {
        match self {
            Theme::Green => Color::DarkGreen,
            Theme::Red => Color::DarkRed,
            Theme::Blue => Color::DarkBlue,
            Theme::Cyan => Color::DarkCyan,
            Theme::Yellow => Color::DarkYellow,
            Theme::Purple => Color::DarkMagenta,
            Theme::Gray => Color::Grey,
        }
    }

    pub fn style(self, shade: Shade) -> ContentStyle {
        let mut style = ContentStyle::new();
        match shade {
            Shade::Head => {
                style.foreground_color = Some(Color::White);
                style.attributes.set(Attribute::Bold);
            }
            Shade::Bright => {
                style.foreground_color = Some(self.accent());
                style.attributes.set(Attribute::Bold);
            }
            Shade::Normal => {
                style.foreground_color = Some(self.accent());
            }
            Shade::Dim => {
                style.foreground_color = Some(self.accent());
                style.attributes.set(Attribute::Dim);
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thirds_and_halves() {
        let tiers: Vec<Shade> = (0..12).map(|i| Shade::for_index(i, 12)).collect();
        assert_eq!(tiers[0], Shade::Head);
        assert!(tiers[1..4].iter().all(|s| *s == Shade::Bright));
        assert!(tiers[4..6].iter().all(|s| *s == Shade::Normal));
        assert!(tiers[6..].iter().all(|s| *s == Shade::Dim));
    }

    #[test]
    fn short_streaks_skip_the_bright_band() {
        assert_eq!(Shade::for_index(0, 2), Shade::Head);
        assert_eq!(Shade::for_index(1, 2), Shade::Dim);
        assert_eq!(Shade::for_index(0, 1), Shade::Head);
    }

    #[test]
    fn head_is_bold_white_regardless_of_theme() {
        let s = Theme::Red.style(Shade::Head);
        assert_eq!(s.foreground_color, Some(Color::White));
        assert!(s.attributes.has(Attribute::Bold));
    }

    #[test]
    fn dim_tier_uses_the_accent() {
        let s = Theme::Cyan.style(Shade::Dim);
        assert_eq!(s.foreground_color, Some(Color::DarkCyan));
        assert!(s.attributes.has(Attribute::Dim));
    }
}
