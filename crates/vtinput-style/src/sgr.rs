//! Reduction of SGR parameter lists into [`AttributeSnapshot`] values.
//!
//! The input is the parameter body of a `CSI … m` sequence. Splitting keeps
//! empty components and maps each to `0` (so `CSI m` and `CSI ; 31 m` behave
//! as xterm does); components that are not base-10 integers are skipped.

use smallvec::SmallVec;

use crate::attr::{AttrMask, AttributeSnapshot};
use crate::color::Color;

/// Parsed SGR parameter list. Inline capacity covers common sequences
/// (a truecolour set plus a couple of flags) without a heap allocation.
pub type SgrParams = SmallVec<[u16; 8]>;

/// Split a raw SGR parameter body into numeric parameters.
///
/// Empty components become `0`; non-numeric components are dropped.
#[must_use]
pub fn split_params(body: &str) -> SgrParams {
    body.split(';')
        .filter_map(|part| {
            if part.is_empty() {
                Some(0)
            } else {
                part.parse::<u16>().ok()
            }
        })
        .collect()
}

/// Reduce a raw SGR parameter body into a snapshot.
#[must_use]
pub fn parse(body: &str) -> AttributeSnapshot {
    fold(&split_params(body))
}

/// Fold an ordered parameter list into a snapshot.
///
/// An empty list reduces to the reset snapshot, as if a single `0` had been
/// supplied. Parameters following an explicit `0` layer their specifications
/// on top of the reset without clearing its mark.
#[must_use]
pub fn fold(params: &[u16]) -> AttributeSnapshot {
    if params.is_empty() {
        return AttributeSnapshot::reset();
    }

    let mut snap = AttributeSnapshot::new();
    let mut saw_reset = false;
    let mut i = 0;
    while i < params.len() {
        let code = params[i];
        let mut advance = 1;
        match code {
            0 => {
                snap = AttributeSnapshot::reset();
                saw_reset = true;
                i += 1;
                continue;
            }
            1 => specify(&mut snap, saw_reset, AttrMask::BOLD, true),
            2 => specify(&mut snap, saw_reset, AttrMask::FAINT, true),
            3 => specify(&mut snap, saw_reset, AttrMask::ITALIC, true),
            4 => specify(&mut snap, saw_reset, AttrMask::UNDERLINED, true),
            7 => specify(&mut snap, saw_reset, AttrMask::INVERSE, true),
            22 => specify(&mut snap, saw_reset, AttrMask::BOLD | AttrMask::FAINT, false),
            23 => specify(&mut snap, saw_reset, AttrMask::ITALIC, false),
            24 => specify(&mut snap, saw_reset, AttrMask::UNDERLINED, false),
            27 => specify(&mut snap, saw_reset, AttrMask::INVERSE, false),
            30..=37 => {
                if let Some(color) = Color::standard((code - 30) as u8) {
                    keep_or_clear_reset(&mut snap, saw_reset);
                    snap.set_foreground(color);
                }
            }
            39 => {
                keep_or_clear_reset(&mut snap, saw_reset);
                snap.default_foreground();
            }
            40..=47 => {
                if let Some(color) = Color::standard((code - 40) as u8) {
                    keep_or_clear_reset(&mut snap, saw_reset);
                    snap.set_background(color);
                }
            }
            49 => {
                keep_or_clear_reset(&mut snap, saw_reset);
                snap.default_background();
            }
            90..=97 => {
                if let Some(color) = Color::bright((code - 90) as u8) {
                    keep_or_clear_reset(&mut snap, saw_reset);
                    snap.set_foreground(color);
                }
            }
            100..=107 => {
                if let Some(color) = Color::bright((code - 100) as u8) {
                    keep_or_clear_reset(&mut snap, saw_reset);
                    snap.set_background(color);
                }
            }
            38 => {
                if let Some((color, consumed)) = extended_color(params, i) {
                    keep_or_clear_reset(&mut snap, saw_reset);
                    snap.set_foreground(color);
                    advance = consumed;
                }
            }
            48 => {
                if let Some((color, consumed)) = extended_color(params, i) {
                    keep_or_clear_reset(&mut snap, saw_reset);
                    snap.set_background(color);
                    advance = consumed;
                }
            }
            _ => {}
        }
        i += advance;
    }
    snap
}

fn specify(snap: &mut AttributeSnapshot, saw_reset: bool, tags: AttrMask, enable: bool) {
    keep_or_clear_reset(snap, saw_reset);
    snap.specify(tags, enable);
}

/// An explicit enable/disable supersedes a reset mark that did not come from
/// a `0` earlier in the same sequence.
fn keep_or_clear_reset(snap: &mut AttributeSnapshot, saw_reset: bool) {
    if !saw_reset {
        snap.clear_reset_mark();
    }
}

/// Decode the extended-colour form following a 38/48 at `params[i]`.
///
/// `38;2;r;g;b` selects truecolour, `38;5;n` a palette index; channel values
/// are clamped to `0..=255`. Returns the colour and the total number of
/// parameters consumed, or `None` when the introducer is malformed or
/// truncated (the caller then skips only the 38/48 itself).
fn extended_color(params: &[u16], i: usize) -> Option<(Color, usize)> {
    match params.get(i + 1) {
        Some(2) if i + 4 < params.len() => {
            let r = channel(params[i + 2]);
            let g = channel(params[i + 3]);
            let b = channel(params[i + 4]);
            Some((Color::rgb(r, g, b), 5))
        }
        Some(5) if i + 2 < params.len() => Some((Color::Palette(channel(params[i + 2])), 3)),
        _ => None,
    }
}

fn channel(value: u16) -> u8 {
    value.min(255) as u8
}
