#![forbid(unsafe_code)]

//! SGR attribute model: colours, per-sequence attribute snapshots, and the
//! parameter reducer that builds them.
//!
//! An [`AttributeSnapshot`] records exactly what one SGR sequence asked for,
//! keeping "never mentioned" distinct from "explicitly set to default" so a
//! snapshot can be replayed faithfully via [`AttributeSnapshot::changes`].

pub mod attr;
pub mod color;
pub mod sgr;

pub use attr::{AttrMask, Attribute, AttributeChanges, AttributeSnapshot};
pub use color::{BaseColor, Color};
pub use sgr::{fold, parse, split_params, SgrParams};
