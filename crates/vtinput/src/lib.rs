#![forbid(unsafe_code)]

//! vtinput public facade crate.
//!
//! # Role in vtinput
//! This crate is the user-facing entry point. It re-exports the commonly
//! used types from the member crates so application code does not need to
//! wire each crate individually.
//!
//! - Tokenizer, tokens, and errors: provided by `vtinput-core`
//! - SGR attribute snapshots, colours, and projection: provided by
//!   `vtinput-style`
//!
//! If you only depend on one crate in your application, it should be
//! `vtinput`:
//!
//! ```
//! use vtinput::{Token, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! for item in tokenizer.feed(b"ls -l\r") {
//!     match item {
//!         Ok(Token::Text(text)) => print!("{text}"),
//!         Ok(other) => println!("{other:?}"),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

// --- Core re-exports -------------------------------------------------------

pub use vtinput_core::{
    AnsiFormat, ByteBuffer, ControlKey, CursorKey, FunctionKey, MetaKey, Modifiers, MouseAction,
    MouseButton, MouseEvent, ParseError, TerminalResponse, Token, TokenResult, Tokenizer,
};

// --- Style re-exports ------------------------------------------------------

pub use vtinput_style::{
    AttrMask, Attribute, AttributeChanges, AttributeSnapshot, BaseColor, Color,
};
