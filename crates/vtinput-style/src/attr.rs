//! SGR attribute snapshots and their projection into ordered changes.
//!
//! A snapshot records what one SGR sequence *explicitly asked for*. The
//! distinction between an attribute that was never mentioned and one that was
//! explicitly set to its default (SGR 39/49, 22, 24, …) is load-bearing:
//! replaying a snapshot must emit `bold off` or `default foreground` for the
//! latter and nothing at all for the former. The specified set is the
//! authoritative record; the colour slots are a cache of the requested value.

use std::fmt;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::color::Color;

bitflags! {
    /// Tags an SGR sequence can mention.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrMask: u8 {
        /// Full reset (SGR 0, or an empty parameter list).
        const RESET      = 1 << 0;
        /// Bold / increased intensity (SGR 1, off via 22).
        const BOLD       = 1 << 1;
        /// Faint / decreased intensity (SGR 2, off via 22).
        const FAINT      = 1 << 2;
        /// Italic (SGR 3, off via 23).
        const ITALIC     = 1 << 3;
        /// Underline (SGR 4, off via 24).
        const UNDERLINED = 1 << 4;
        /// Reverse video (SGR 7, off via 27).
        const INVERSE    = 1 << 5;
        /// Foreground colour (SGR 30–38/90–97, default via 39).
        const FOREGROUND = 1 << 6;
        /// Background colour (SGR 40–48/100–107, default via 49).
        const BACKGROUND = 1 << 7;
    }
}

/// The explicit requests made by one SGR sequence.
///
/// Equality is structural over the colour slots and the specified map, so two
/// snapshots compare equal exactly when they request the same changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttributeSnapshot {
    foreground: Option<Color>,
    background: Option<Color>,
    /// Tags the sequence mentioned.
    mentioned: AttrMask,
    /// Requested value for mentioned tags. Invariant: `enabled ⊆ mentioned`,
    /// which keeps the derived equality honest.
    enabled: AttrMask,
}

impl AttributeSnapshot {
    /// Snapshot with nothing specified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot produced by SGR 0: both colours cleared, only the reset tag
    /// specified.
    #[must_use]
    pub fn reset() -> Self {
        Self {
            foreground: None,
            background: None,
            mentioned: AttrMask::RESET,
            enabled: AttrMask::RESET,
        }
    }

    /// The requested foreground colour, if one was specified and non-default.
    #[must_use]
    pub const fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    /// The requested background colour, if one was specified and non-default.
    #[must_use]
    pub const fn background(&self) -> Option<Color> {
        self.background
    }

    /// Whether `tag` was mentioned, and with which value.
    ///
    /// Returns `None` for an unmentioned tag, `Some(true)` for an explicit
    /// enable and `Some(false)` for an explicit disable. Meaningful for a
    /// single tag; a multi-bit mask reports `Some` only when every bit is
    /// mentioned.
    #[must_use]
    pub fn is_specified(&self, tag: AttrMask) -> Option<bool> {
        if self.mentioned.contains(tag) {
            Some(self.enabled.contains(tag))
        } else {
            None
        }
    }

    /// True when the sequence mentioned nothing at all.
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.mentioned.is_empty()
    }

    /// Record an explicit enable (`true`) or disable (`false`) for `tags`.
    pub fn specify(&mut self, tags: AttrMask, enable: bool) {
        self.mentioned.insert(tags);
        if enable {
            self.enabled.insert(tags);
        } else {
            self.enabled.remove(tags);
        }
    }

    /// Drop the reset mark, leaving all other specifications intact.
    pub fn clear_reset_mark(&mut self) {
        self.mentioned.remove(AttrMask::RESET);
        self.enabled.remove(AttrMask::RESET);
    }

    /// Record an explicit foreground colour.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = Some(color);
        self.specify(AttrMask::FOREGROUND, true);
    }

    /// Record an explicit return to the default foreground (SGR 39).
    pub fn default_foreground(&mut self) {
        self.foreground = None;
        self.specify(AttrMask::FOREGROUND, false);
    }

    /// Record an explicit background colour.
    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
        self.specify(AttrMask::BACKGROUND, true);
    }

    /// Record an explicit return to the default background (SGR 49).
    pub fn default_background(&mut self) {
        self.background = None;
        self.specify(AttrMask::BACKGROUND, false);
    }

    /// Project the snapshot into its ordered list of changes.
    ///
    /// The order is fixed: reset, bold, faint, italic, underlined, inverse,
    /// foreground, background. A tag appears iff it was specified; colour
    /// tags that were specified as default project to
    /// [`Attribute::ForegroundDefault`] / [`Attribute::BackgroundDefault`].
    /// The projection is deterministic and depends only on the snapshot.
    #[must_use]
    pub fn changes(&self) -> AttributeChanges {
        const BOOL_TAGS: [(AttrMask, fn(bool) -> Attribute); 5] = [
            (AttrMask::BOLD, Attribute::Bold),
            (AttrMask::FAINT, Attribute::Faint),
            (AttrMask::ITALIC, Attribute::Italic),
            (AttrMask::UNDERLINED, Attribute::Underlined),
            (AttrMask::INVERSE, Attribute::Inverse),
        ];

        let mut out = AttributeChanges::new();
        if self.mentioned.contains(AttrMask::RESET) {
            out.push(Attribute::Reset);
        }
        for (tag, make) in BOOL_TAGS {
            if let Some(on) = self.is_specified(tag) {
                out.push(make(on));
            }
        }
        if self.mentioned.contains(AttrMask::FOREGROUND) {
            out.push(match self.foreground {
                Some(color) => Attribute::Foreground(color),
                None => Attribute::ForegroundDefault,
            });
        }
        if self.mentioned.contains(AttrMask::BACKGROUND) {
            out.push(match self.background {
                Some(color) => Attribute::Background(color),
                None => Attribute::BackgroundDefault,
            });
        }
        out
    }
}

/// Projected change list. Inline capacity covers the maximum possible
/// projection (all eight tags specified).
pub type AttributeChanges = SmallVec<[Attribute; 8]>;

/// One semantic change requested by an SGR sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Reset all attributes to defaults.
    Reset,
    /// Bold on or off.
    Bold(bool),
    /// Faint on or off.
    Faint(bool),
    /// Italic on or off.
    Italic(bool),
    /// Underline on or off.
    Underlined(bool),
    /// Reverse video on or off.
    Inverse(bool),
    /// Switch to the given foreground colour.
    Foreground(Color),
    /// Return to the default foreground colour.
    ForegroundDefault,
    /// Switch to the given background colour.
    Background(Color),
    /// Return to the default background colour.
    BackgroundDefault,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => f.write_str("reset"),
            Self::Bold(on) => write!(f, "bold {}", onoff(*on)),
            Self::Faint(on) => write!(f, "faint {}", onoff(*on)),
            Self::Italic(on) => write!(f, "italic {}", onoff(*on)),
            Self::Underlined(on) => write!(f, "underlined {}", onoff(*on)),
            Self::Inverse(on) => write!(f, "inverse {}", onoff(*on)),
            Self::Foreground(color) => write!(f, "foreground {color}"),
            Self::ForegroundDefault => f.write_str("foreground default"),
            Self::Background(color) => write!(f, "background {color}"),
            Self::BackgroundDefault => f.write_str("background default"),
        }
    }
}

fn onoff(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
