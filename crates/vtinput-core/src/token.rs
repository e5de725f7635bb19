#![forbid(unsafe_code)]

//! Canonical token types.
//!
//! Every value the tokenizer emits is one of these shapes. All of them derive
//! `Clone`, `PartialEq`, and `Eq` for use in tests and pattern matching;
//! equality is structural throughout.
//!
//! # Design Notes
//!
//! - Mouse coordinates are passed through 1-based, exactly as the terminal
//!   reports them.
//! - `Modifiers` use bitflags for easy combination.
//! - `AnsiFormat` keeps the consumed byte sequence verbatim so an SGR token
//!   can be replayed.

use bitflags::bitflags;
use std::fmt;

use vtinput_style::AttributeSnapshot;

use crate::control::ControlKey;
use crate::error::ParseError;

/// One item of the output stream: a token or a recoverable error.
pub type TokenResult = Result<Token, ParseError>;

/// A decoded unit of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of printable text, decoded as UTF-8.
    Text(String),

    /// A C0 control character or DEL.
    Control(ControlKey),

    /// A cursor-movement key.
    Cursor(CursorKey),

    /// A function key or editing key.
    Function(FunctionKey),

    /// An ESC-prefixed key chord.
    Meta(MetaKey),

    /// A terminal-to-host report.
    Response(TerminalResponse),

    /// An SGR sequence with its decoded attribute snapshot.
    Ansi(AnsiFormat),

    /// A mouse report.
    Mouse(MouseEvent),
}

/// Cursor-movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKey {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Right arrow.
    Right,
    /// Left arrow.
    Left,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
}

impl fmt::Display for CursorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
            Self::Home => "home",
            Self::End => "end",
            Self::PageUp => "page-up",
            Self::PageDown => "page-down",
        };
        f.write_str(name)
    }
}

/// Function and editing keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionKey {
    /// Function key F1–F12.
    F(u8),

    /// Insert key.
    Insert,

    /// Delete key.
    Delete,

    /// A well-framed key sequence with no known mapping; carries the raw
    /// sequence text.
    Unknown(String),
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F(n) => write!(f, "F{n}"),
            Self::Insert => f.write_str("insert"),
            Self::Delete => f.write_str("delete"),
            Self::Unknown(raw) => write!(f, "unknown({raw:?})"),
        }
    }
}

/// ESC-prefixed chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
    /// Alt/Option held with a character (`ESC` followed by a byte ≥ 0x20).
    Alt(char),

    /// A bare Escape press (lone `ESC`, or `ESC` before a control byte).
    Escape,
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alt(c) => write!(f, "alt+{c}"),
            Self::Escape => f.write_str("escape"),
        }
    }
}

/// Reports sent from the terminal back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalResponse {
    /// CPR (`CSI row ; col R`): cursor position, 1-based.
    CursorPosition {
        /// Reported row.
        row: u16,
        /// Reported column.
        col: u16,
    },

    /// DA (`CSI … c`): device attributes.
    DeviceAttributes {
        /// The reported parameter values.
        values: Vec<u16>,
        /// True when the response carried the `>` private marker.
        private: bool,
    },

    /// DSR (`CSI code n`): device status report.
    StatusReport(u16),

    /// OSC (`ESC ] code ; data`): operating system command, code and payload
    /// split on the first `;`.
    OperatingSystemCommand {
        /// Numeric OSC code.
        code: u16,
        /// Payload after the first `;`, empty when absent.
        data: String,
    },

    /// A well-framed CSI sequence with no dedicated decoding; carries the
    /// raw sequence text.
    Text(String),
}

/// An SGR sequence paired with the snapshot it reduces to.
///
/// `sequence` is the exact bytes consumed from the stream, decoded as UTF-8,
/// so the token can be written back out verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiFormat {
    /// The raw sequence, ESC through final byte.
    pub sequence: String,

    /// The attribute changes the sequence requests.
    pub attributes: AttributeSnapshot,
}

impl AnsiFormat {
    /// Pair a raw sequence with its decoded snapshot.
    #[must_use]
    pub fn new(sequence: impl Into<String>, attributes: AttributeSnapshot) -> Self {
        Self {
            sequence: sequence.into(),
            attributes,
        }
    }
}

bitflags! {
    /// Modifier keys reported with a mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b000;
        /// Shift key.
        const SHIFT = 0b001;
        /// Alt/Option key.
        const ALT   = 0b010;
        /// Control key.
        const CTRL  = 0b100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A mouse report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The button the event concerns.
    pub button: MouseButton,

    /// What happened to it.
    pub action: MouseAction,

    /// Column, 1-based as reported.
    pub column: u16,

    /// Row, 1-based as reported.
    pub row: u16,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a mouse event with no modifiers.
    #[must_use]
    pub const fn new(button: MouseButton, action: MouseAction, column: u16, row: u16) -> Self {
        Self {
            button,
            action,
            column,
            row,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The position as a `(column, row)` pair.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.column, self.row)
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    Left,

    /// Middle button (wheel click).
    Middle,

    /// Right button.
    Right,

    /// Wheel scrolled up.
    ScrollUp,

    /// Wheel scrolled down.
    ScrollDown,

    /// Wheel scrolled left.
    ScrollLeft,

    /// Wheel scrolled right.
    ScrollRight,

    /// Any other button id reported by the terminal.
    Other(u16),
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Middle => f.write_str("middle"),
            Self::Right => f.write_str("right"),
            Self::ScrollUp => f.write_str("scroll-up"),
            Self::ScrollDown => f.write_str("scroll-down"),
            Self::ScrollLeft => f.write_str("scroll-left"),
            Self::ScrollRight => f.write_str("scroll-right"),
            Self::Other(id) => write!(f, "button({id})"),
        }
    }
}

/// What a mouse report says happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Button pressed.
    Press,

    /// Button released.
    Release,

    /// Pointer moved with a button held.
    Drag,

    /// Wheel scrolled.
    Scroll,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::Drag => "drag",
            Self::Scroll => "scroll",
        };
        f.write_str(name)
    }
}
