#![forbid(unsafe_code)]

//! Mouse packet decoding.
//!
//! Two wire encodings reduce to the same [`MouseEvent`] shape: SGR mode 1006
//! (`CSI < Cb ; Cx ; Cy M/m`, decimal fields, `m` marks release) and the
//! legacy X10/normal encoding (`CSI M Cb Cx Cy`, three raw bytes offset by
//! 32). Coordinates pass through 1-based, exactly as reported.

use crate::error::ParseError;
use crate::token::{Modifiers, MouseAction, MouseButton, MouseEvent};

/// Decode the SGR-1006 form. `parameter` is the CSI parameter text including
/// the leading `<`; `release` is true when the final byte was `m`.
pub(crate) fn decode_sgr(parameter: &str, release: bool) -> Result<MouseEvent, ParseError> {
    let fields = parameter.strip_prefix('<').unwrap_or(parameter);
    let mut parts = fields.split(';');
    let mut next = || -> Option<u16> { parts.next()?.parse().ok() };

    match (next(), next(), next()) {
        (Some(cb), Some(column), Some(row)) => Ok(decode(cb, column, row, release)),
        _ => Err(ParseError::InvalidSequence(format!(
            "SGR mouse report with malformed fields: {fields:?}"
        ))),
    }
}

/// Decode the legacy X10/normal form: the three metadata bytes after `CSI M`,
/// each offset by 32 on the wire.
pub(crate) fn decode_legacy(raw: [u8; 3]) -> Result<MouseEvent, ParseError> {
    let [cb, cx, cy] = raw;
    match (
        cb.checked_sub(32),
        cx.checked_sub(32),
        cy.checked_sub(32),
    ) {
        (Some(cb), Some(column), Some(row)) => {
            Ok(decode(cb.into(), column.into(), row.into(), false))
        }
        _ => Err(ParseError::InvalidSequence(format!(
            "legacy mouse report with byte below offset: {raw:02x?}"
        ))),
    }
}

/// Shared decode of the button/modifier bit field.
///
/// Bit 6 marks scroll, bit 5 drag; bits 0–1 select the button (or the scroll
/// direction); bits 2–4 carry shift/option/control. Button id 3 without the
/// scroll bit reports a release in both encodings.
fn decode(cb: u16, column: u16, row: u16, release: bool) -> MouseEvent {
    let mut modifiers = Modifiers::NONE;
    if cb & 0x04 != 0 {
        modifiers |= Modifiers::SHIFT;
    }
    if cb & 0x08 != 0 {
        modifiers |= Modifiers::ALT;
    }
    if cb & 0x10 != 0 {
        modifiers |= Modifiers::CTRL;
    }

    let id = cb & 0x03;
    let (button, action) = if cb & 0x40 != 0 {
        let direction = match id {
            0 => MouseButton::ScrollUp,
            1 => MouseButton::ScrollDown,
            2 => MouseButton::ScrollLeft,
            _ => MouseButton::ScrollRight,
        };
        (direction, MouseAction::Scroll)
    } else {
        let button = match id {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => MouseButton::Other(3),
        };
        let action = if release || id == 3 {
            MouseAction::Release
        } else if cb & 0x20 != 0 {
            MouseAction::Drag
        } else {
            MouseAction::Press
        };
        (button, action)
    };

    MouseEvent::new(button, action, column, row).with_modifiers(modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_left_press() {
        let event = decode_sgr("<0;10;5", false).unwrap();
        assert_eq!(
            event,
            MouseEvent::new(MouseButton::Left, MouseAction::Press, 10, 5)
        );
    }

    #[test]
    fn sgr_left_release() {
        let event = decode_sgr("<0;10;5", true).unwrap();
        assert_eq!(event.action, MouseAction::Release);
    }

    #[test]
    fn sgr_drag_with_modifiers() {
        // 44 = drag bit (32) + option (8) + shift (4), button 0.
        let event = decode_sgr("<44;12;8", false).unwrap();
        assert_eq!(event.button, MouseButton::Left);
        assert_eq!(event.action, MouseAction::Drag);
        assert_eq!(event.modifiers, Modifiers::SHIFT | Modifiers::ALT);
        assert_eq!(event.position(), (12, 8));
    }

    #[test]
    fn sgr_scroll_directions() {
        for (cb, direction) in [
            (64, MouseButton::ScrollUp),
            (65, MouseButton::ScrollDown),
            (66, MouseButton::ScrollLeft),
            (67, MouseButton::ScrollRight),
        ] {
            let event = decode_sgr(&format!("<{cb};1;1"), false).unwrap();
            assert_eq!(event.button, direction);
            assert_eq!(event.action, MouseAction::Scroll);
        }
    }

    #[test]
    fn sgr_button_three_is_release() {
        let event = decode_sgr("<3;4;4", false).unwrap();
        assert_eq!(event.button, MouseButton::Other(3));
        assert_eq!(event.action, MouseAction::Release);
    }

    #[test]
    fn sgr_control_modifier() {
        let event = decode_sgr("<16;1;1", false).unwrap();
        assert_eq!(event.modifiers, Modifiers::CTRL);
    }

    #[test]
    fn sgr_malformed_fields() {
        assert!(decode_sgr("<0;10", false).is_err());
        assert!(decode_sgr("<a;b;c", false).is_err());
        assert!(decode_sgr("<", false).is_err());
    }

    #[test]
    fn legacy_press() {
        // 0x20 0x2A 0x25: button 0 at column 10, row 5.
        let event = decode_legacy([0x20, 0x2A, 0x25]).unwrap();
        assert_eq!(
            event,
            MouseEvent::new(MouseButton::Left, MouseAction::Press, 10, 5)
        );
    }

    #[test]
    fn legacy_release_via_button_three() {
        let event = decode_legacy([0x23, 0x21, 0x21]).unwrap();
        assert_eq!(event.action, MouseAction::Release);
    }

    #[test]
    fn legacy_byte_below_offset() {
        assert!(decode_legacy([0x1F, 0x21, 0x21]).is_err());
        assert!(decode_legacy([0x20, 0x00, 0x21]).is_err());
    }

    #[test]
    fn legacy_final_never_marks_release_for_real_buttons() {
        // Drag bit with button 1.
        let event = decode_legacy([0x20 + 0x20 + 1, 0x21, 0x21]).unwrap();
        assert_eq!(event.button, MouseButton::Middle);
        assert_eq!(event.action, MouseAction::Drag);
    }
}
