//! Stream settings and the reader builder.

use std::io::Read;

use bytes::{Buf, Bytes};

use super::reader::StreamReader;
use crate::error::Result;
use crate::version::{check_version, DEFAULT_VERSION};

/// Default cap on variant nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default cap on any declared byte length or element count (256 MiB).
pub const DEFAULT_MAX_LENGTH: u32 = 256 * 1024 * 1024;

/// Byte order of every multi-byte field in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    BigEndian,
    LittleEndian,
}

/// Width used for `double` fields, mirroring
/// `QDataStream::FloatingPointPrecision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatingPointPrecision {
    #[default]
    Single,
    Double,
}

/// Builder for configuring a [`StreamReader`].
#[derive(Debug, Clone)]
pub struct ReaderBuilder {
    byte_order: ByteOrder,
    precision: FloatingPointPrecision,
    version: u32,
    max_depth: usize,
    max_length: u32,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderBuilder {
    /// Creates a builder with big-endian byte order, single precision and
    /// stream version 19.
    pub fn new() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            precision: FloatingPointPrecision::default(),
            version: DEFAULT_VERSION,
            max_depth: DEFAULT_MAX_DEPTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Sets the byte order.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Sets the floating-point precision mode.
    pub fn floating_point_precision(mut self, precision: FloatingPointPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the stream version. Checked when the reader is built.
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Sets the maximum variant nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the maximum accepted length prefix or element count.
    pub fn max_length(mut self, limit: u32) -> Self {
        self.max_length = limit;
        self
    }

    /// Builds a reader over any byte source.
    pub fn build<R: Read>(self, reader: R) -> Result<StreamReader<R>> {
        let version = check_version(self.version)?;
        Ok(StreamReader::with_settings(
            reader,
            self.byte_order,
            self.precision,
            version,
            self.max_depth,
            self.max_length,
        ))
    }

    /// Builds a reader over an in-memory buffer.
    pub fn build_from_bytes(
        self,
        data: impl Into<Bytes>,
    ) -> Result<StreamReader<bytes::buf::Reader<Bytes>>> {
        self.build(data.into().reader())
    }
}
