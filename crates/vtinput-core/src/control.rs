#![forbid(unsafe_code)]

//! C0 control characters and DEL.

use std::fmt;

/// A C0 control character (0x00–0x1F, excluding ESC) or DEL (0x7F).
///
/// ESC is deliberately absent: 0x1B introduces escape sequences and never
/// tokenizes on its own through this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// NUL (0x00).
    Null,
    /// Start of heading (0x01, Ctrl+A).
    Soh,
    /// Start of text (0x02, Ctrl+B).
    Stx,
    /// End of text (0x03, Ctrl+C).
    Etx,
    /// End of transmission (0x04, Ctrl+D).
    Eot,
    /// Enquiry (0x05, Ctrl+E).
    Enq,
    /// Acknowledge (0x06, Ctrl+F).
    Ack,
    /// Bell (0x07, Ctrl+G).
    Bel,
    /// Backspace (0x08, Ctrl+H).
    Backspace,
    /// Horizontal tab (0x09, Ctrl+I).
    Tab,
    /// Line feed (0x0A, Ctrl+J).
    LineFeed,
    /// Vertical tab (0x0B, Ctrl+K).
    VerticalTab,
    /// Form feed (0x0C, Ctrl+L).
    FormFeed,
    /// Carriage return (0x0D, Ctrl+M).
    CarriageReturn,
    /// Shift out (0x0E, Ctrl+N).
    ShiftOut,
    /// Shift in (0x0F, Ctrl+O).
    ShiftIn,
    /// Data link escape (0x10, Ctrl+P).
    Dle,
    /// Device control 1 / XON (0x11, Ctrl+Q).
    Dc1,
    /// Device control 2 (0x12, Ctrl+R).
    Dc2,
    /// Device control 3 / XOFF (0x13, Ctrl+S).
    Dc3,
    /// Device control 4 (0x14, Ctrl+T).
    Dc4,
    /// Negative acknowledge (0x15, Ctrl+U).
    Nak,
    /// Synchronous idle (0x16, Ctrl+V).
    Syn,
    /// End of transmission block (0x17, Ctrl+W).
    Etb,
    /// Cancel (0x18, Ctrl+X).
    Can,
    /// End of medium (0x19, Ctrl+Y).
    Em,
    /// Substitute (0x1A, Ctrl+Z).
    Sub,
    /// File separator (0x1C).
    Fs,
    /// Group separator (0x1D).
    Gs,
    /// Record separator (0x1E).
    Rs,
    /// Unit separator (0x1F).
    Us,
    /// Delete (0x7F).
    Delete,
}

impl ControlKey {
    /// Map a byte to its control key, `None` for ESC and all non-control bytes.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Null),
            0x01 => Some(Self::Soh),
            0x02 => Some(Self::Stx),
            0x03 => Some(Self::Etx),
            0x04 => Some(Self::Eot),
            0x05 => Some(Self::Enq),
            0x06 => Some(Self::Ack),
            0x07 => Some(Self::Bel),
            0x08 => Some(Self::Backspace),
            0x09 => Some(Self::Tab),
            0x0A => Some(Self::LineFeed),
            0x0B => Some(Self::VerticalTab),
            0x0C => Some(Self::FormFeed),
            0x0D => Some(Self::CarriageReturn),
            0x0E => Some(Self::ShiftOut),
            0x0F => Some(Self::ShiftIn),
            0x10 => Some(Self::Dle),
            0x11 => Some(Self::Dc1),
            0x12 => Some(Self::Dc2),
            0x13 => Some(Self::Dc3),
            0x14 => Some(Self::Dc4),
            0x15 => Some(Self::Nak),
            0x16 => Some(Self::Syn),
            0x17 => Some(Self::Etb),
            0x18 => Some(Self::Can),
            0x19 => Some(Self::Em),
            0x1A => Some(Self::Sub),
            0x1C => Some(Self::Fs),
            0x1D => Some(Self::Gs),
            0x1E => Some(Self::Rs),
            0x1F => Some(Self::Us),
            0x7F => Some(Self::Delete),
            _ => None,
        }
    }

    /// The wire byte for this key.
    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Null => 0x00,
            Self::Soh => 0x01,
            Self::Stx => 0x02,
            Self::Etx => 0x03,
            Self::Eot => 0x04,
            Self::Enq => 0x05,
            Self::Ack => 0x06,
            Self::Bel => 0x07,
            Self::Backspace => 0x08,
            Self::Tab => 0x09,
            Self::LineFeed => 0x0A,
            Self::VerticalTab => 0x0B,
            Self::FormFeed => 0x0C,
            Self::CarriageReturn => 0x0D,
            Self::ShiftOut => 0x0E,
            Self::ShiftIn => 0x0F,
            Self::Dle => 0x10,
            Self::Dc1 => 0x11,
            Self::Dc2 => 0x12,
            Self::Dc3 => 0x13,
            Self::Dc4 => 0x14,
            Self::Nak => 0x15,
            Self::Syn => 0x16,
            Self::Etb => 0x17,
            Self::Can => 0x18,
            Self::Em => 0x19,
            Self::Sub => 0x1A,
            Self::Fs => 0x1C,
            Self::Gs => 0x1D,
            Self::Rs => 0x1E,
            Self::Us => 0x1F,
            Self::Delete => 0x7F,
        }
    }
}

impl fmt::Display for ControlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "NUL",
            Self::Soh => "SOH",
            Self::Stx => "STX",
            Self::Etx => "ETX",
            Self::Eot => "EOT",
            Self::Enq => "ENQ",
            Self::Ack => "ACK",
            Self::Bel => "BEL",
            Self::Backspace => "BS",
            Self::Tab => "TAB",
            Self::LineFeed => "LF",
            Self::VerticalTab => "VT",
            Self::FormFeed => "FF",
            Self::CarriageReturn => "CR",
            Self::ShiftOut => "SO",
            Self::ShiftIn => "SI",
            Self::Dle => "DLE",
            Self::Dc1 => "DC1",
            Self::Dc2 => "DC2",
            Self::Dc3 => "DC3",
            Self::Dc4 => "DC4",
            Self::Nak => "NAK",
            Self::Syn => "SYN",
            Self::Etb => "ETB",
            Self::Can => "CAN",
            Self::Em => "EM",
            Self::Sub => "SUB",
            Self::Fs => "FS",
            Self::Gs => "GS",
            Self::Rs => "RS",
            Self::Us => "US",
            Self::Delete => "DEL",
        };
        f.write_str(name)
    }
}
