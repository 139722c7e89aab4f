use ratatui::style::Color;
use serde::Serialize;

/// Badge color token, one per whole magnitude step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MagnitudeColor {
    Magnitude1,
    Magnitude2,
    Magnitude3,
    Magnitude4,
    Magnitude5,
    Magnitude6,
    Magnitude7,
    Magnitude8,
    Magnitude9,
    Magnitude10Plus,
}

impl MagnitudeColor {
    /// Picks the badge for a magnitude by truncating it toward zero.
    ///
    /// 0 and 1 share a token; anything at or above 10, or truncating to a
    /// negative value, gets `Magnitude10Plus`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn for_magnitude(magnitude: f64) -> Self {
        match magnitude.trunc() as i64 {
            0 | 1 => Self::Magnitude1,
            2 => Self::Magnitude2,
            3 => Self::Magnitude3,
            4 => Self::Magnitude4,
            5 => Self::Magnitude5,
            6 => Self::Magnitude6,
            7 => Self::Magnitude7,
            8 => Self::Magnitude8,
            9 => Self::Magnitude9,
            _ => Self::Magnitude10Plus,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Magnitude1 => Color::Rgb(0x4A, 0x7B, 0xA7),
            Self::Magnitude2 => Color::Rgb(0x04, 0xB4, 0xB3),
            Self::Magnitude3 => Color::Rgb(0x10, 0xCA, 0xC9),
            Self::Magnitude4 => Color::Rgb(0xF5, 0xA6, 0x23),
            Self::Magnitude5 => Color::Rgb(0xFF, 0x7D, 0x50),
            Self::Magnitude6 => Color::Rgb(0xFC, 0x66, 0x44),
            Self::Magnitude7 => Color::Rgb(0xE7, 0x5F, 0x40),
            Self::Magnitude8 => Color::Rgb(0xE1, 0x3A, 0x20),
            Self::Magnitude9 => Color::Rgb(0xD9, 0x32, 0x18),
            Self::Magnitude10Plus => Color::Rgb(0xC0, 0x38, 0x23),
        }
    }
}
