//! Colour values carried by SGR attribute snapshots.

use std::fmt;

/// One of the eight base ANSI colours (SGR 30–37 / 40–47 and their bright
/// counterparts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BaseColor {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red = 1,
    /// Green (index 2).
    Green = 2,
    /// Yellow (index 3).
    Yellow = 3,
    /// Blue (index 4).
    Blue = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Cyan (index 6).
    Cyan = 6,
    /// White (index 7).
    White = 7,
}

impl BaseColor {
    /// Return the raw ANSI index (0–7).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Convert an ANSI index to a `BaseColor`, returning `None` if out of range.
    #[must_use]
    pub const fn from_index(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            _ => None,
        }
    }
}

impl fmt::Display for BaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

/// A colour value at one of the fidelity levels a terminal can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Standard-intensity base colour (SGR 30–37 / 40–47).
    Standard(BaseColor),
    /// Bright base colour (SGR 90–97 / 100–107).
    Bright(BaseColor),
    /// 256-colour palette index (SGR 38;5;n / 48;5;n).
    Palette(u8),
    /// True-colour RGB value (SGR 38;2;r;g;b / 48;2;r;g;b).
    Rgb(u8, u8, u8),
}

impl Color {
    /// Standard base colour from an ANSI index, `None` if out of range.
    #[must_use]
    pub const fn standard(index: u8) -> Option<Self> {
        match BaseColor::from_index(index) {
            Some(base) => Some(Self::Standard(base)),
            None => None,
        }
    }

    /// Bright base colour from an ANSI index, `None` if out of range.
    #[must_use]
    pub const fn bright(index: u8) -> Option<Self> {
        match BaseColor::from_index(index) {
            Some(base) => Some(Self::Bright(base)),
            None => None,
        }
    }

    /// True-colour RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(base) => write!(f, "{base}"),
            Self::Bright(base) => write!(f, "bright {base}"),
            Self::Palette(index) => write!(f, "palette({index})"),
            Self::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
        }
    }
}
