//! cutestream — a pure-Rust reader for the Qt `QDataStream` binary format.
//!
//! Decodes the values Qt writes with `QDataStream`, including self-describing
//! `QVariant`s, without linking against Qt. Only reading is supported.
//!
//! # Architecture
//!
//! - **`datastream`** — `StreamReader`: primitives, strings, calendar values,
//!   variant dispatch
//! - **`types`** — decoded values (`Variant`, `Value`, `Date`, ...) and the
//!   `MetaType` registry
//! - **`version`** — stream version gate
//! - **`error`** — `StreamError`
//!
//! ```
//! use cutestream::datastream::ReaderBuilder;
//! use cutestream::types::{MetaType, Value};
//!
//! // QVariant(int 42), big-endian.
//! let data: [u8; 9] = [0, 0, 0, 2, 0, 0, 0, 0, 42];
//! let mut reader = ReaderBuilder::new().build(&data[..])?;
//! let variant = reader.read_variant()?;
//! assert_eq!(variant.meta_type, MetaType::INT);
//! assert_eq!(variant.value, Some(Value::Int32(42)));
//! # Ok::<(), cutestream::error::StreamError>(())
//! ```

pub mod datastream;
pub mod error;
pub mod types;
pub mod version;

pub use datastream::{ByteOrder, FloatingPointPrecision, ReaderBuilder, StreamReader};
pub use error::{Result, StreamError};
pub use types::{MetaType, Value, Variant};
