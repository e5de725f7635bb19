#![forbid(unsafe_code)]

//! Core: byte buffering, token types, and the incremental input tokenizer.
//!
//! Feed raw terminal input bytes to a [`Tokenizer`] as they arrive — chunk
//! boundaries may fall anywhere — and receive tokens and recoverable errors
//! in stream order, either collected ([`Tokenizer::feed`]) or pushed to a
//! callback ([`Tokenizer::feed_with`]).

pub mod buffer;
pub mod control;
pub mod error;
mod mouse;
pub mod token;
pub mod tokenizer;

pub use buffer::ByteBuffer;
pub use control::ControlKey;
pub use error::ParseError;
pub use token::{
    AnsiFormat, CursorKey, FunctionKey, MetaKey, Modifiers, MouseAction, MouseButton, MouseEvent,
    TerminalResponse, Token, TokenResult,
};
pub use tokenizer::Tokenizer;
