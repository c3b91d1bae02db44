//! `QVariant` decoding: tag dispatch and the recursive list and map types.

use std::io::Read;

use url::Url;
use uuid::Uuid;

use super::reader::StreamReader;
use super::text::prealloc;
use crate::error::{Result, StreamError};
use crate::types::{MetaType, Value, Variant, VariantMap};

impl<R: Read> StreamReader<R> {
    /// Reads a `QVariant`: a type code, a null flag and, unless null, the
    /// payload for that type.
    ///
    /// A null variant consumes nothing after the flag. An unsupported type
    /// fails with [`StreamError::UnsupportedType`] right after the flag.
    pub fn read_variant(&mut self) -> Result<Variant> {
        let meta_type = MetaType(self.read_u32()?);
        let is_null = self.read_bool()?;
        tracing::trace!(code = meta_type.code(), is_null, depth = self.depth, "decoding variant");

        if is_null {
            return Ok(Variant::null(meta_type));
        }
        let value = self.read_payload(meta_type)?;
        Ok(Variant::new(meta_type, value))
    }

    fn read_payload(&mut self, meta_type: MetaType) -> Result<Value> {
        let value = match meta_type {
            MetaType::BOOL => Value::Bool(self.read_bool()?),
            MetaType::INT => Value::Int32(self.read_i32()?),
            MetaType::UINT => Value::UInt32(self.read_u32()?),
            MetaType::LONG_LONG => Value::Int64(self.read_i64()?),
            MetaType::ULONG_LONG => Value::UInt64(self.read_u64()?),
            MetaType::DOUBLE => Value::Double(self.read_double()?),
            MetaType::FLOAT => Value::Float(self.read_float()?),
            MetaType::QCHAR | MetaType::CHAR | MetaType::UCHAR => Value::UInt8(self.read_u8()?),
            MetaType::SCHAR => Value::Int8(self.read_i8()?),
            MetaType::SHORT => Value::Int16(self.read_i16()?),
            MetaType::USHORT => Value::UInt16(self.read_u16()?),
            MetaType::BIT_ARRAY => Value::BitArray(self.read_bit_array()?),
            MetaType::BYTE_ARRAY => Value::ByteArray(self.read_byte_array()?),
            MetaType::STRING => Value::String(self.read_string()?),
            MetaType::STRING_LIST => Value::StringList(self.read_string_list()?),
            MetaType::DATE => Value::Date(self.read_date()?),
            MetaType::TIME => Value::Time(self.read_time()?),
            MetaType::DATE_TIME => Value::DateTime(self.read_date_time()?),
            MetaType::URL => Value::Url(self.read_url()?),
            MetaType::UUID => Value::Uuid(self.read_uuid()?),
            MetaType::VARIANT_LIST => Value::List(self.read_variant_list()?),
            MetaType::VARIANT_MAP | MetaType::VARIANT_HASH => {
                Value::Map(self.read_variant_map()?)
            }
            other => return Err(StreamError::UnsupportedType(other.code())),
        };
        Ok(value)
    }

    /// Reads a `QVariantList`: a count followed by that many variants.
    pub fn read_variant_list(&mut self) -> Result<Vec<Variant>> {
        self.nested(|r| {
            let count = r.read_u32()?;
            r.check_length("variant list", count)?;
            let mut items = Vec::with_capacity(prealloc(count));
            for _ in 0..count {
                items.push(r.read_variant()?);
            }
            Ok(items)
        })
    }

    /// Reads a `QVariantMap` or `QVariantHash`: a count followed by that many
    /// (string key, variant) pairs.
    ///
    /// A repeated key keeps its first position and takes the later value.
    /// Null keys are stored as empty strings.
    pub fn read_variant_map(&mut self) -> Result<VariantMap> {
        self.nested(|r| {
            let count = r.read_u32()?;
            r.check_length("variant map", count)?;
            let mut map = VariantMap::with_capacity(prealloc(count));
            for _ in 0..count {
                let key = r.read_string()?.unwrap_or_default();
                let value = r.read_variant()?;
                map.insert(key, value);
            }
            Ok(map)
        })
    }

    /// Reads a `QUrl` stored as its string form. An empty or null string is
    /// a null URL.
    pub fn read_url(&mut self) -> Result<Option<Url>> {
        match self.read_string()? {
            Some(s) if !s.is_empty() => Ok(Some(Url::parse(&s)?)),
            _ => Ok(None),
        }
    }

    /// Reads a `QUuid` as the hex digits of its 16 bytes, in stream order.
    pub fn read_uuid(&mut self) -> Result<String> {
        let mut raw = [0u8; 16];
        self.reader.read_exact(&mut raw)?;
        Ok(Uuid::from_bytes(raw).simple().to_string())
    }

    /// Runs `f` one nesting level deeper, failing past the configured depth.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.max_depth {
            return Err(StreamError::DepthLimit(self.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
