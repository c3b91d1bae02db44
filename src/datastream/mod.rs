//! QDataStream decoding: primitives, text, calendar values and variants.
//!
//! Every multi-byte field honors the reader's [`ByteOrder`]. Length-prefixed
//! fields use `0xFFFF_FFFF` ([`NULL_LENGTH`]) to mark a null value, which is
//! distinct from a zero length.

mod builder;
mod calendar;
mod reader;
mod text;
mod variant;

pub use builder::{
    ByteOrder, FloatingPointPrecision, ReaderBuilder, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH,
};
pub use reader::StreamReader;
pub use text::NULL_LENGTH;
