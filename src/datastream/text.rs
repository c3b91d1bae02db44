//! Length-prefixed strings, byte arrays and bit arrays.

use std::io::Read;

use super::reader::StreamReader;
use crate::error::{Result, StreamError};

/// Length prefix marking a null `QString` or `QByteArray`.
pub const NULL_LENGTH: u32 = 0xFFFF_FFFF;

/// Upper bound on capacity reserved from an untrusted count.
const PREALLOC_LIMIT: usize = 1024;

/// Capacity to reserve for `count` elements read from the stream.
pub(super) fn prealloc(count: u32) -> usize {
    (count as usize).min(PREALLOC_LIMIT)
}

impl<R: Read> StreamReader<R> {
    /// Rejects a declared length or count above the configured limit.
    pub(super) fn check_length(&self, kind: &'static str, len: u32) -> Result<()> {
        if len > self.max_length {
            return Err(StreamError::LengthLimit {
                kind,
                len,
                limit: self.max_length,
            });
        }
        Ok(())
    }

    /// Reads a length prefix, mapping the null sentinel to `None`.
    fn read_nullable_length(&mut self, kind: &'static str) -> Result<Option<u32>> {
        let len = self.read_u32()?;
        if len == NULL_LENGTH {
            return Ok(None);
        }
        self.check_length(kind, len)?;
        Ok(Some(len))
    }

    /// Reads a `QByteArray`. Returns `None` for a null array and `Some` (maybe
    /// empty) otherwise.
    pub fn read_byte_array(&mut self) -> Result<Option<Vec<u8>>> {
        match self.read_nullable_length("byte array")? {
            Some(len) => Ok(Some(self.read_raw(len as usize)?)),
            None => Ok(None),
        }
    }

    /// Reads a `const char*` as written by `QDataStream`: a length, then that
    /// many raw bytes. The terminating NUL Qt counts in the length is kept.
    pub fn read_c_string(&mut self) -> Result<Vec<u8>> {
        let len = self.read_u32()?;
        self.check_length("c string", len)?;
        self.read_raw(len as usize)
    }

    /// Reads a `QString` stored as UTF-16 code units.
    ///
    /// Returns `None` for a null string. Unpaired surrogates are an error.
    pub fn read_string(&mut self) -> Result<Option<String>> {
        let Some(len) = self.read_nullable_length("string")? else {
            return Ok(None);
        };
        if len % 2 != 0 {
            return Err(StreamError::OddStringLength(len));
        }
        let mut units = vec![0u16; (len / 2) as usize];
        self.read_u16_into(&mut units)?;
        Ok(Some(String::from_utf16(&units)?))
    }

    /// Reads a `QStringList`. Null entries become empty strings.
    pub fn read_string_list(&mut self) -> Result<Vec<String>> {
        let count = self.read_u32()?;
        self.check_length("string list", count)?;
        let mut items = Vec::with_capacity(prealloc(count));
        for _ in 0..count {
            items.push(self.read_string()?.unwrap_or_default());
        }
        Ok(items)
    }

    /// Reads a `QBitArray`: a bit count, then the bits packed MSB-first.
    pub fn read_bit_array(&mut self) -> Result<Vec<bool>> {
        let count = self.read_u32()?;
        self.check_length("bit array", count)?;
        let packed = self.read_raw((count as usize).div_ceil(8))?;
        Ok((0..count as usize)
            .map(|i| (packed[i / 8] >> (7 - i % 8)) & 1 == 1)
            .collect())
    }
}
