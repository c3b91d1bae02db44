//! The stream reader and its fixed-width primitive reads.

use std::io::{self, Read};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use super::builder::{
    ByteOrder, FloatingPointPrecision, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH,
};
use crate::error::Result;
use crate::version::{check_version, DEFAULT_VERSION};

/// Upper bound on bytes reserved up front for a raw read.
const RAW_PREALLOC_LIMIT: usize = 64 * 1024;

/// Dispatches a `byteorder` read on the configured byte order.
macro_rules! read_ordered {
    ($self:ident, $method:ident $(, $arg:expr)?) => {
        match $self.byte_order {
            ByteOrder::BigEndian => $self.reader.$method::<BigEndian>($($arg)?)?,
            ByteOrder::LittleEndian => $self.reader.$method::<LittleEndian>($($arg)?)?,
        }
    };
}

/// Reads QDataStream-encoded values from a blocking byte source.
///
/// A reader is bound to one source and one set of settings. Each read either
/// consumes exactly the bytes of its field or fails. A failed read leaves the
/// source wherever the last successful low-level read stopped.
///
/// Not meant to be shared: every read advances the source.
#[derive(Debug)]
pub struct StreamReader<R> {
    pub(super) reader: R,
    pub(super) byte_order: ByteOrder,
    precision: FloatingPointPrecision,
    version: u32,
    pub(super) max_depth: usize,
    pub(super) max_length: u32,
    pub(super) depth: usize,
}

impl<R: Read> StreamReader<R> {
    /// Creates a reader with default settings. See [`ReaderBuilder`](super::ReaderBuilder).
    pub fn new(reader: R) -> Self {
        Self::with_settings(
            reader,
            ByteOrder::default(),
            FloatingPointPrecision::default(),
            DEFAULT_VERSION,
            DEFAULT_MAX_DEPTH,
            DEFAULT_MAX_LENGTH,
        )
    }

    pub(super) fn with_settings(
        reader: R,
        byte_order: ByteOrder,
        precision: FloatingPointPrecision,
        version: u32,
        max_depth: usize,
        max_length: u32,
    ) -> Self {
        Self {
            reader,
            byte_order,
            precision,
            version,
            max_depth,
            max_length,
            depth: 0,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn floating_point_precision(&self) -> FloatingPointPrecision {
        self.precision
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Changes the stream version. An unsupported version is rejected and
    /// the current one is kept.
    pub fn set_version(&mut self, version: u32) -> Result<()> {
        self.version = check_version(version)?;
        tracing::debug!(version, "stream version set");
        Ok(())
    }

    /// Returns the underlying source.
    pub fn into_inner(self) -> R {
        self.reader
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    // -- Primitives --

    /// Reads one byte; any nonzero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.reader.read_u8()? != 0)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.reader.read_i8()?)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.reader.read_u8()?)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(read_ordered!(self, read_i16))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(read_ordered!(self, read_u16))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(read_ordered!(self, read_i32))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(read_ordered!(self, read_u32))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(read_ordered!(self, read_i64))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(read_ordered!(self, read_u64))
    }

    /// Reads a 4-byte IEEE-754 single.
    pub fn read_float(&mut self) -> Result<f32> {
        Ok(read_ordered!(self, read_f32))
    }

    /// Reads a `double` field: 8 bytes in double precision mode, or a 4-byte
    /// single widened to `f64` in single precision mode.
    pub fn read_double(&mut self) -> Result<f64> {
        match self.precision {
            FloatingPointPrecision::Double => Ok(read_ordered!(self, read_f64)),
            FloatingPointPrecision::Single => Ok(f64::from(read_ordered!(self, read_f32))),
        }
    }

    /// Fills `dst` with UTF-16 code units in the configured byte order.
    pub(super) fn read_u16_into(&mut self, dst: &mut [u16]) -> Result<()> {
        read_ordered!(self, read_u16_into, dst);
        Ok(())
    }

    /// Reads exactly `len` raw bytes. The buffer grows with the input, so a
    /// large declared length over a short source fails without allocating it.
    pub(super) fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(len.min(RAW_PREALLOC_LIMIT));
        (&mut self.reader).take(len as u64).read_to_end(&mut data)?;
        if data.len() != len {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(data)
    }
}
