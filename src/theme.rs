//! Colors for the portfolio page in day and night mode.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

/// Text and accent colors layered on top of the built-in iced theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
}

impl From<ThemeMode> for Palette {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Day => Palette {
                text: Color::from_rgb8(0x1A, 0x1A, 0x1A),
                muted: Color::from_rgb8(0x5F, 0x63, 0x68),
                accent: Color::from_rgb8(0x25, 0x63, 0xEB),
            },
            ThemeMode::Night => Palette {
                text: Color::from_rgb8(0xF5, 0xF5, 0xF5),
                muted: Color::from_rgb8(0x9C, 0xA3, 0xAF),
                accent: Color::from_rgb8(0x60, 0xA5, 0xFA),
            },
        }
    }
}

impl Palette {
    /// Same palette with every color faded to `alpha` of its opacity.
    pub fn faded(self, alpha: f32) -> Self {
        let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };
        let fade = |color: Color| Color {
            a: color.a * alpha,
            ..color
        };
        Palette {
            text: fade(self.text),
            muted: fade(self.muted),
            accent: fade(self.accent),
        }
    }
}

pub fn iced_theme(mode: ThemeMode) -> IcedTheme {
    match mode {
        ThemeMode::Night => IcedTheme::Dark,
        ThemeMode::Day => IcedTheme::Light,
    }
}

/// `0xRRGGBB` to an opaque color.
pub fn brand_color(rgb: u32) -> Color {
    Color::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}
