#![forbid(unsafe_code)]

//! Tokenizer state machine.
//!
//! Decodes a terminal input byte stream into [`Token`]/[`ParseError`] items.
//!
//! # Design
//!
//! Bytes accumulate in a [`ByteBuffer`]; each step inspects the unread
//! suffix from its head and either emits one item and drops its bytes, or
//! reports that the suffix is an incomplete sequence and stops until more
//! bytes arrive. Because steps always start from the buffer head, a sequence
//! split across any number of chunks tokenizes exactly as if it had arrived
//! whole — the buffer is the resumption substrate, and the sub-parsers are
//! pure functions over the suffix.
//!
//! The grammars covered:
//!
//! - C0 controls and DEL
//! - printable runs, decoded as UTF-8 (invalid runs are reported, consumed,
//!   and skipped)
//! - CSI sequences: cursor keys, tilde-terminated function keys, SGR with a
//!   full attribute reduction, cursor-position / device-attribute / status
//!   reports, with a raw-text fallback for unrecognised final bytes
//! - SS3 function and arrow keys
//! - OSC, BEL- or ST-terminated
//! - SGR-1006 and legacy X10 mouse packets
//! - ESC-prefixed alt chords and bare escapes
//!
//! A lone ESC tokenizes as `Meta(Escape)` immediately; callers that want to
//! join it with a later chunk must withhold the ESC until more data is
//! available.

use tracing::{debug, trace};

use vtinput_style::sgr;

use crate::buffer::ByteBuffer;
use crate::control::ControlKey;
use crate::error::ParseError;
use crate::mouse;
use crate::token::{
    AnsiFormat, CursorKey, FunctionKey, MetaKey, TerminalResponse, Token, TokenResult,
};

/// Outcome of one parsing step over the buffered suffix.
enum Step {
    /// Emit the token and drop the leading `n` bytes.
    Emit(Token, usize),
    /// Report the error and drop the leading `n` bytes.
    Fail(ParseError, usize),
    /// The suffix is an incomplete sequence; wait for more bytes.
    NeedMore,
}

/// Incremental terminal input tokenizer.
///
/// Feed byte chunks as they arrive; chunk boundaries may fall anywhere,
/// including inside escape sequences and multi-byte characters:
///
/// ```
/// use vtinput_core::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// assert!(tokenizer.feed(b"\x1b[1;").is_empty());
/// let items = tokenizer.feed(b"31m");
/// assert!(matches!(items.as_slice(), [Ok(Token::Ansi(_))]));
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    buffer: ByteBuffer,
}

impl Tokenizer {
    /// Create a tokenizer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: ByteBuffer::new(),
        }
    }

    /// Append a chunk and collect every item it completes.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<TokenResult> {
        let mut out = Vec::new();
        self.feed_with(bytes, |item| out.push(item));
        out
    }

    /// Append a chunk, invoking `sink` once per completed item in stream
    /// order.
    ///
    /// The sink runs synchronously on the caller's thread. It cannot re-feed
    /// this tokenizer: `feed_with` holds the only mutable borrow for the
    /// duration of the call.
    pub fn feed_with<F: FnMut(TokenResult)>(&mut self, bytes: &[u8], mut sink: F) {
        self.buffer.extend(bytes);
        loop {
            match parse_next(self.buffer.as_slice()) {
                Step::NeedMore => break,
                Step::Emit(token, len) => {
                    trace!(len, ?token, "token");
                    self.buffer.consume(len);
                    sink(Ok(token));
                }
                Step::Fail(err, len) => {
                    debug!(len, %err, "malformed input");
                    self.buffer.consume(len);
                    sink(Err(err));
                }
            }
        }
    }

    /// Number of buffered bytes belonging to an incomplete sequence.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// True when an incomplete sequence is buffered.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.buffer.is_empty()
    }
}

/// Parse one item from the head of the buffered suffix.
fn parse_next(buf: &[u8]) -> Step {
    let Some(&first) = buf.first() else {
        return Step::NeedMore;
    };
    if let Some(key) = ControlKey::from_byte(first) {
        return Step::Emit(Token::Control(key), 1);
    }
    if first == 0x1B {
        return parse_escape(buf);
    }
    parse_text(buf)
}

/// True for bytes that belong to a printable text run.
const fn is_text_byte(byte: u8) -> bool {
    byte >= 0x20 && byte != 0x7F
}

/// A run of printable bytes, decoded as UTF-8.
fn parse_text(buf: &[u8]) -> Step {
    let span = buf
        .iter()
        .position(|&b| !is_text_byte(b))
        .unwrap_or(buf.len());
    if span == 0 {
        // Unreachable: control and escape bytes dispatch before text.
        return Step::NeedMore;
    }
    match std::str::from_utf8(&buf[..span]) {
        Ok(text) => Step::Emit(Token::Text(text.to_owned()), span),
        // The run reaches the end of the buffer, so the decode may have
        // failed on a code point split across chunks.
        Err(_) if span == buf.len() => Step::NeedMore,
        Err(_) => Step::Fail(ParseError::InvalidUtf8(buf[..span].to_vec()), span),
    }
}

/// Dispatch on the byte after ESC.
fn parse_escape(buf: &[u8]) -> Step {
    let Some(&second) = buf.get(1) else {
        // Lone trailing ESC: emit immediately rather than waiting for a
        // continuation that may never come.
        return Step::Emit(Token::Meta(MetaKey::Escape), 1);
    };
    match second {
        b'[' => parse_csi(buf),
        b'O' => parse_ss3(buf),
        b']' => parse_osc(buf),
        _ => parse_meta(second),
    }
}

/// `ESC <byte>` for bytes that do not introduce a sequence.
fn parse_meta(second: u8) -> Step {
    if second < 0x20 {
        // ESC before a control byte: a bare escape, then the control
        // tokenizes on its own.
        return Step::Emit(Token::Meta(MetaKey::Escape), 1);
    }
    Step::Emit(Token::Meta(MetaKey::Alt(second as char)), 2)
}

/// `ESC [ <parameters> <final>` — CSI.
fn parse_csi(buf: &[u8]) -> Step {
    let Some(offset) = buf[2..].iter().position(|&b| (0x40..=0x7E).contains(&b)) else {
        return Step::NeedMore;
    };
    let final_idx = 2 + offset;
    let final_byte = buf[final_idx];
    let parameter = String::from_utf8_lossy(&buf[2..final_idx]);
    let consumed = final_idx + 1;

    // Mouse packets reuse CSI framing and are checked before the final-byte
    // table.
    if (final_byte == b'M' || final_byte == b'm') && parameter.starts_with('<') {
        return finish(
            mouse::decode_sgr(&parameter, final_byte == b'm').map(Token::Mouse),
            consumed,
        );
    }
    if final_byte == b'M' && parameter.is_empty() {
        // Legacy packet: three metadata bytes follow the final.
        let Some(raw) = buf.get(consumed..consumed + 3) else {
            return Step::NeedMore;
        };
        return finish(
            mouse::decode_legacy([raw[0], raw[1], raw[2]]).map(Token::Mouse),
            consumed + 3,
        );
    }

    let sequence = || String::from_utf8_lossy(&buf[..consumed]).into_owned();
    let token = match final_byte {
        b'A' => Ok(Token::Cursor(CursorKey::Up)),
        b'B' => Ok(Token::Cursor(CursorKey::Down)),
        b'C' => Ok(Token::Cursor(CursorKey::Right)),
        b'D' => Ok(Token::Cursor(CursorKey::Left)),
        b'H' => Ok(Token::Cursor(CursorKey::Home)),
        b'F' => Ok(Token::Cursor(CursorKey::End)),
        b'm' => Ok(Token::Ansi(AnsiFormat::new(
            sequence(),
            sgr::parse(&parameter),
        ))),
        b'R' => cursor_position(&parameter).map(Token::Response),
        b'c' => device_attributes(&parameter).map(Token::Response),
        b'n' => status_report(&parameter).map(Token::Response),
        b'~' => tilde_terminated(&parameter),
        _ => Ok(Token::Response(TerminalResponse::Text(sequence()))),
    };
    finish(token, consumed)
}

fn finish(result: Result<Token, ParseError>, consumed: usize) -> Step {
    match result {
        Ok(token) => Step::Emit(token, consumed),
        Err(err) => Step::Fail(err, consumed),
    }
}

/// CPR: `CSI row ; col R`.
fn cursor_position(parameter: &str) -> Result<TerminalResponse, ParseError> {
    let mut parts = parameter.split(';');
    let row = parts.next().and_then(|p| p.parse::<u16>().ok());
    let col = parts.next().and_then(|p| p.parse::<u16>().ok());
    match (row, col, parts.next()) {
        (Some(row), Some(col), None) => Ok(TerminalResponse::CursorPosition { row, col }),
        _ => Err(ParseError::InvalidSequence(format!(
            "cursor position report with malformed fields: {parameter:?}"
        ))),
    }
}

/// DA: `CSI [>] v1 ; v2 ; … c`.
fn device_attributes(parameter: &str) -> Result<TerminalResponse, ParseError> {
    let (private, rest) = match parameter.strip_prefix('>') {
        Some(rest) => (true, rest),
        None => (false, parameter),
    };
    let values = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(';')
            .map(|p| p.parse::<u16>().ok())
            .collect::<Option<Vec<u16>>>()
            .ok_or_else(|| {
                ParseError::InvalidSequence(format!(
                    "device attributes with non numeric values: {parameter:?}"
                ))
            })?
    };
    Ok(TerminalResponse::DeviceAttributes { values, private })
}

/// DSR: `CSI code n`.
fn status_report(parameter: &str) -> Result<TerminalResponse, ParseError> {
    parameter
        .parse::<u16>()
        .map(TerminalResponse::StatusReport)
        .map_err(|_| {
            ParseError::InvalidSequence(format!(
                "status report with non numeric code: {parameter:?}"
            ))
        })
}

/// `CSI code ~` — editing keys, paging keys, and F5–F12.
fn tilde_terminated(parameter: &str) -> Result<Token, ParseError> {
    let code: u16 = parameter
        .parse()
        .map_err(|_| ParseError::InvalidSequence("CSI ~ with non numeric parameter".to_owned()))?;
    let token = match code {
        2 => Token::Function(FunctionKey::Insert),
        3 => Token::Function(FunctionKey::Delete),
        5 => Token::Cursor(CursorKey::PageUp),
        6 => Token::Cursor(CursorKey::PageDown),
        15 => Token::Function(FunctionKey::F(5)),
        17 => Token::Function(FunctionKey::F(6)),
        18 => Token::Function(FunctionKey::F(7)),
        19 => Token::Function(FunctionKey::F(8)),
        20 => Token::Function(FunctionKey::F(9)),
        21 => Token::Function(FunctionKey::F(10)),
        23 => Token::Function(FunctionKey::F(11)),
        24 => Token::Function(FunctionKey::F(12)),
        _ => Token::Function(FunctionKey::Unknown(format!("CSI {code}~"))),
    };
    Ok(token)
}

/// `ESC O <byte>` — SS3 function and arrow keys. Always three bytes.
fn parse_ss3(buf: &[u8]) -> Step {
    let Some(&third) = buf.get(2) else {
        return Step::NeedMore;
    };
    let token = match third {
        b'P' => Token::Function(FunctionKey::F(1)),
        b'Q' => Token::Function(FunctionKey::F(2)),
        b'R' => Token::Function(FunctionKey::F(3)),
        b'S' => Token::Function(FunctionKey::F(4)),
        b'A' => Token::Cursor(CursorKey::Up),
        b'B' => Token::Cursor(CursorKey::Down),
        b'C' => Token::Cursor(CursorKey::Right),
        b'D' => Token::Cursor(CursorKey::Left),
        b'H' => Token::Cursor(CursorKey::Home),
        b'F' => Token::Cursor(CursorKey::End),
        _ => Token::Function(FunctionKey::Unknown(
            String::from_utf8_lossy(&buf[..3]).into_owned(),
        )),
    };
    Step::Emit(token, 3)
}

/// `ESC ] <body> (BEL | ESC \)` — OSC.
fn parse_osc(buf: &[u8]) -> Step {
    let mut i = 2;
    let (body_end, consumed) = loop {
        match buf.get(i).copied() {
            None => return Step::NeedMore,
            Some(0x07) => break (i, i + 1),
            Some(0x1B) => match buf.get(i + 1).copied() {
                None => return Step::NeedMore,
                Some(b'\\') => break (i, i + 2),
                // Not an ST terminator; the ESC is body content.
                Some(_) => i += 1,
            },
            Some(_) => i += 1,
        }
    };

    let body = String::from_utf8_lossy(&buf[2..body_end]);
    let (code_text, data) = match body.split_once(';') {
        Some((code, data)) => (code, data),
        None => (body.as_ref(), ""),
    };
    let token = code_text
        .parse::<u16>()
        .map(|code| {
            Token::Response(TerminalResponse::OperatingSystemCommand {
                code,
                data: data.to_owned(),
            })
        })
        .map_err(|_| {
            ParseError::InvalidSequence(format!("OSC with non numeric code: {code_text:?}"))
        });
    finish(token, consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Modifiers, MouseAction, MouseButton, MouseEvent};
    use vtinput_style::{Attribute, BaseColor, Color};

    fn tokens(bytes: &[u8]) -> Vec<TokenResult> {
        Tokenizer::new().feed(bytes)
    }

    fn single(bytes: &[u8]) -> Token {
        let mut items = tokens(bytes);
        assert_eq!(items.len(), 1, "expected one item from {bytes:02x?}");
        items.remove(0).expect("expected a token")
    }

    #[test]
    fn plain_text() {
        assert_eq!(single(b"hello"), Token::Text("hello".into()));
    }

    #[test]
    fn utf8_text() {
        assert_eq!(single("héllo🎉".as_bytes()), Token::Text("héllo🎉".into()));
    }

    #[test]
    fn control_characters() {
        assert_eq!(single(b"\x07"), Token::Control(ControlKey::Bel));
        assert_eq!(single(b"\x7f"), Token::Control(ControlKey::Delete));
        assert_eq!(
            tokens(b"\x03\x04"),
            vec![
                Ok(Token::Control(ControlKey::Etx)),
                Ok(Token::Control(ControlKey::Eot)),
            ]
        );
    }

    #[test]
    fn lone_escape() {
        assert_eq!(single(b"\x1b"), Token::Meta(MetaKey::Escape));
    }

    #[test]
    fn escape_before_control_byte() {
        assert_eq!(
            tokens(b"\x1b\x01"),
            vec![
                Ok(Token::Meta(MetaKey::Escape)),
                Ok(Token::Control(ControlKey::Soh)),
            ]
        );
    }

    #[test]
    fn alt_chord() {
        assert_eq!(single(b"\x1bx"), Token::Meta(MetaKey::Alt('x')));
    }

    #[test]
    fn alt_chord_high_byte() {
        assert_eq!(single(&[0x1B, 0x80]), Token::Meta(MetaKey::Alt('\u{80}')));
    }

    #[test]
    fn csi_cursor_keys() {
        assert_eq!(single(b"\x1b[A"), Token::Cursor(CursorKey::Up));
        assert_eq!(single(b"\x1b[B"), Token::Cursor(CursorKey::Down));
        assert_eq!(single(b"\x1b[C"), Token::Cursor(CursorKey::Right));
        assert_eq!(single(b"\x1b[D"), Token::Cursor(CursorKey::Left));
        assert_eq!(single(b"\x1b[H"), Token::Cursor(CursorKey::Home));
        assert_eq!(single(b"\x1b[F"), Token::Cursor(CursorKey::End));
    }

    #[test]
    fn tilde_function_keys() {
        assert_eq!(single(b"\x1b[15~"), Token::Function(FunctionKey::F(5)));
        assert_eq!(single(b"\x1b[24~"), Token::Function(FunctionKey::F(12)));
        assert_eq!(single(b"\x1b[2~"), Token::Function(FunctionKey::Insert));
        assert_eq!(single(b"\x1b[3~"), Token::Function(FunctionKey::Delete));
        assert_eq!(single(b"\x1b[5~"), Token::Cursor(CursorKey::PageUp));
        assert_eq!(single(b"\x1b[6~"), Token::Cursor(CursorKey::PageDown));
    }

    #[test]
    fn tilde_unknown_code() {
        assert_eq!(
            single(b"\x1b[29~"),
            Token::Function(FunctionKey::Unknown("CSI 29~".into()))
        );
    }

    #[test]
    fn tilde_non_numeric_parameter() {
        assert_eq!(
            tokens(b"\x1b[1;5~"),
            vec![Err(ParseError::InvalidSequence(
                "CSI ~ with non numeric parameter".into()
            ))]
        );
    }

    #[test]
    fn ss3_keys() {
        assert_eq!(single(b"\x1bOP"), Token::Function(FunctionKey::F(1)));
        assert_eq!(single(b"\x1bOS"), Token::Function(FunctionKey::F(4)));
        assert_eq!(single(b"\x1bOA"), Token::Cursor(CursorKey::Up));
        assert_eq!(single(b"\x1bOH"), Token::Cursor(CursorKey::Home));
        assert_eq!(
            single(b"\x1bOZ"),
            Token::Function(FunctionKey::Unknown("\x1bOZ".into()))
        );
    }

    #[test]
    fn sgr_sequence_keeps_raw_bytes() {
        let Token::Ansi(format) = single(b"\x1b[1;31m") else {
            panic!("expected Ansi token");
        };
        assert_eq!(format.sequence, "\x1b[1;31m");
        assert_eq!(
            format.attributes.foreground(),
            Some(Color::Standard(BaseColor::Red))
        );
        assert_eq!(
            format.attributes.changes().as_slice(),
            &[
                Attribute::Bold(true),
                Attribute::Foreground(Color::Standard(BaseColor::Red)),
            ]
        );
    }

    #[test]
    fn sgr_leading_empty_parameter_resets() {
        let Token::Ansi(format) = single(b"\x1b[;31m") else {
            panic!("expected Ansi token");
        };
        assert_eq!(
            format.attributes.changes().as_slice(),
            &[
                Attribute::Reset,
                Attribute::Foreground(Color::Standard(BaseColor::Red)),
            ]
        );
    }

    #[test]
    fn sgr_palette_foreground() {
        let Token::Ansi(format) = single(b"\x1b[1;38;5;12m") else {
            panic!("expected Ansi token");
        };
        assert_eq!(
            format.attributes.changes().as_slice(),
            &[
                Attribute::Bold(true),
                Attribute::Foreground(Color::Palette(12)),
            ]
        );
    }

    #[test]
    fn sgr_bold_faint_off() {
        let Token::Ansi(format) = single(b"\x1b[22m") else {
            panic!("expected Ansi token");
        };
        assert_eq!(
            format.attributes.changes().as_slice(),
            &[Attribute::Bold(false), Attribute::Faint(false)]
        );
    }

    #[test]
    fn sgr_default_foreground() {
        let Token::Ansi(format) = single(b"\x1b[39m") else {
            panic!("expected Ansi token");
        };
        assert_eq!(format.attributes.foreground(), None);
        assert_eq!(
            format.attributes.changes().as_slice(),
            &[Attribute::ForegroundDefault]
        );
    }

    #[test]
    fn sgr_default_background() {
        let Token::Ansi(format) = single(b"\x1b[49m") else {
            panic!("expected Ansi token");
        };
        assert_eq!(format.attributes.background(), None);
        assert_eq!(
            format.attributes.changes().as_slice(),
            &[Attribute::BackgroundDefault]
        );
    }

    #[test]
    fn sgr_split_across_chunks() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(b"\x1b[1;").is_empty());
        assert_eq!(tokenizer.pending_len(), 4);
        let items = tokenizer.feed(b"31m");
        let [Ok(Token::Ansi(format))] = items.as_slice() else {
            panic!("expected one Ansi token, got {items:?}");
        };
        assert_eq!(format.sequence, "\x1b[1;31m");
        assert!(!tokenizer.has_pending());
    }

    #[test]
    fn cursor_position_report() {
        assert_eq!(
            single(b"\x1b[12;45R"),
            Token::Response(TerminalResponse::CursorPosition { row: 12, col: 45 })
        );
    }

    #[test]
    fn cursor_position_report_malformed() {
        assert!(matches!(
            tokens(b"\x1b[12R").as_slice(),
            [Err(ParseError::InvalidSequence(_))]
        ));
        assert!(matches!(
            tokens(b"\x1b[1;2;3R").as_slice(),
            [Err(ParseError::InvalidSequence(_))]
        ));
    }

    #[test]
    fn device_attributes_private() {
        assert_eq!(
            single(b"\x1b[>0;95;0c"),
            Token::Response(TerminalResponse::DeviceAttributes {
                values: vec![0, 95, 0],
                private: true,
            })
        );
    }

    #[test]
    fn device_attributes_plain_and_empty() {
        assert_eq!(
            single(b"\x1b[1;2c"),
            Token::Response(TerminalResponse::DeviceAttributes {
                values: vec![1, 2],
                private: false,
            })
        );
        assert_eq!(
            single(b"\x1b[c"),
            Token::Response(TerminalResponse::DeviceAttributes {
                values: vec![],
                private: false,
            })
        );
    }

    #[test]
    fn status_report() {
        assert_eq!(
            single(b"\x1b[0n"),
            Token::Response(TerminalResponse::StatusReport(0))
        );
        assert!(matches!(
            tokens(b"\x1b[n").as_slice(),
            [Err(ParseError::InvalidSequence(_))]
        ));
    }

    #[test]
    fn unrecognised_csi_final_falls_back_to_text() {
        assert_eq!(
            single(b"\x1b[?25h"),
            Token::Response(TerminalResponse::Text("\x1b[?25h".into()))
        );
        assert_eq!(
            single(b"\x1b[200~"),
            Token::Function(FunctionKey::Unknown("CSI 200~".into()))
        );
    }

    #[test]
    fn osc_bel_terminated() {
        assert_eq!(
            single(b"\x1b]0;Title\x07"),
            Token::Response(TerminalResponse::OperatingSystemCommand {
                code: 0,
                data: "Title".into(),
            })
        );
    }

    #[test]
    fn osc_st_terminated() {
        assert_eq!(
            single(b"\x1b]2;hi\x1b\\"),
            Token::Response(TerminalResponse::OperatingSystemCommand {
                code: 2,
                data: "hi".into(),
            })
        );
    }

    #[test]
    fn osc_splits_on_first_semicolon_only() {
        assert_eq!(
            single(b"\x1b]8;;http://example\x07"),
            Token::Response(TerminalResponse::OperatingSystemCommand {
                code: 8,
                data: ";http://example".into(),
            })
        );
    }

    #[test]
    fn osc_without_semicolon_has_empty_data() {
        assert_eq!(
            single(b"\x1b]112\x07"),
            Token::Response(TerminalResponse::OperatingSystemCommand {
                code: 112,
                data: String::new(),
            })
        );
    }

    #[test]
    fn osc_non_numeric_code() {
        assert!(matches!(
            tokens(b"\x1b]title\x07").as_slice(),
            [Err(ParseError::InvalidSequence(_))]
        ));
    }

    #[test]
    fn osc_waits_for_terminator() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(b"\x1b]0;Tit").is_empty());
        assert!(tokenizer.feed(b"le").is_empty());
        assert_eq!(tokenizer.feed(b"\x07").len(), 1);
    }

    #[test]
    fn osc_pending_esc_may_become_st() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(b"\x1b]2;x\x1b").is_empty());
        assert_eq!(
            tokenizer.feed(b"\\"),
            vec![Ok(Token::Response(
                TerminalResponse::OperatingSystemCommand {
                    code: 2,
                    data: "x".into(),
                }
            ))]
        );
    }

    #[test]
    fn sgr_mouse_press_and_release() {
        assert_eq!(
            single(b"\x1b[<0;10;5M"),
            Token::Mouse(MouseEvent::new(
                MouseButton::Left,
                MouseAction::Press,
                10,
                5
            ))
        );
        assert_eq!(
            single(b"\x1b[<0;10;5m"),
            Token::Mouse(MouseEvent::new(
                MouseButton::Left,
                MouseAction::Release,
                10,
                5
            ))
        );
    }

    #[test]
    fn sgr_mouse_drag_with_modifiers() {
        assert_eq!(
            single(b"\x1b[<44;12;8M"),
            Token::Mouse(
                MouseEvent::new(MouseButton::Left, MouseAction::Drag, 12, 8)
                    .with_modifiers(Modifiers::SHIFT | Modifiers::ALT)
            )
        );
    }

    #[test]
    fn sgr_mouse_scroll() {
        assert_eq!(
            single(b"\x1b[<64;22;18M"),
            Token::Mouse(MouseEvent::new(
                MouseButton::ScrollUp,
                MouseAction::Scroll,
                22,
                18
            ))
        );
    }

    #[test]
    fn legacy_mouse_press() {
        assert_eq!(
            single(b"\x1b[M\x20\x2a\x25"),
            Token::Mouse(MouseEvent::new(
                MouseButton::Left,
                MouseAction::Press,
                10,
                5
            ))
        );
    }

    #[test]
    fn legacy_mouse_waits_for_metadata_bytes() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(b"\x1b[M\x20").is_empty());
        assert!(tokenizer.feed(b"\x2a").is_empty());
        assert_eq!(tokenizer.feed(b"\x25").len(), 1);
    }

    #[test]
    fn legacy_mouse_invalid_byte_is_consumed() {
        let mut tokenizer = Tokenizer::new();
        let items = tokenizer.feed(b"\x1b[M\x00\x2a\x25x");
        assert!(matches!(
            items.as_slice(),
            [Err(ParseError::InvalidSequence(_)), Ok(Token::Text(_))]
        ));
        assert!(!tokenizer.has_pending());
    }

    #[test]
    fn invalid_utf8_terminated_run_is_reported() {
        assert_eq!(
            tokens(b"\xff\xfe\x07"),
            vec![
                Err(ParseError::InvalidUtf8(vec![0xFF, 0xFE])),
                Ok(Token::Control(ControlKey::Bel)),
            ]
        );
    }

    #[test]
    fn invalid_utf8_at_end_of_buffer_stays_pending() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(b"\xff").is_empty());
        assert_eq!(tokenizer.pending_len(), 1);
    }

    #[test]
    fn split_code_point_joins_across_chunks() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(&[0xC3]).is_empty());
        assert_eq!(tokenizer.feed(&[0xA9]), vec![Ok(Token::Text("é".into()))]);
    }

    #[test]
    fn empty_feed_produces_nothing() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(b"").is_empty());
        tokenizer.feed(b"\x1b[");
        assert!(tokenizer.feed(b"").is_empty());
    }

    #[test]
    fn escape_consumed_immediately_is_not_joined_later() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.feed(b"\x1b"),
            vec![Ok(Token::Meta(MetaKey::Escape))]
        );
        // The bracket arrives too late to form a CSI.
        assert_eq!(tokenizer.feed(b"[A"), vec![Ok(Token::Text("[A".into()))]);
    }

    #[test]
    fn mixed_stream_in_order() {
        let items = tokens(b"ls\r\x1b[A\x1bq\x1b[<1;3;4M");
        assert_eq!(
            items,
            vec![
                Ok(Token::Text("ls".into())),
                Ok(Token::Control(ControlKey::CarriageReturn)),
                Ok(Token::Cursor(CursorKey::Up)),
                Ok(Token::Meta(MetaKey::Alt('q'))),
                Ok(Token::Mouse(MouseEvent::new(
                    MouseButton::Middle,
                    MouseAction::Press,
                    3,
                    4
                ))),
            ]
        );
    }

    #[test]
    fn feed_with_dispatches_in_stream_order() {
        let mut tokenizer = Tokenizer::new();
        let mut seen = Vec::new();
        tokenizer.feed_with(b"a\x07b", |item| seen.push(item));
        assert_eq!(
            seen,
            vec![
                Ok(Token::Text("a".into())),
                Ok(Token::Control(ControlKey::Bel)),
                Ok(Token::Text("b".into())),
            ]
        );
    }

    #[test]
    fn maximal_splitting_matches_whole_feed() {
        let script: &[u8] = b"\x1b[1;31m\x1b[<0;10;5M\x1b[12;45R\x1b]0;T\x07\x1bOP\x1b[5~";
        let whole = tokens(script);

        // Cut at every position except directly after an ESC, where the
        // lone-ESC rule would tokenize the escape on its own.
        let mut tokenizer = Tokenizer::new();
        let mut split = Vec::new();
        let mut start = 0;
        for i in 1..script.len() {
            if script[i - 1] != 0x1B {
                split.extend(tokenizer.feed(&script[start..i]));
                start = i;
            }
        }
        split.extend(tokenizer.feed(&script[start..]));

        assert_eq!(whole, split);
        assert!(!tokenizer.has_pending());
    }
}
