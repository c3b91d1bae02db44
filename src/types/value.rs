//! Decoded variant values.

use std::fmt;

use indexmap::IndexMap;
use url::Url;

use super::calendar::{Date, DateTime, Time};
use super::meta_type::MetaType;

/// `QVariantMap` / `QVariantHash` contents, in stream order.
pub type VariantMap = IndexMap<String, Variant>;

/// A self-describing value: a type tag plus an optional payload.
///
/// `value` is `None` when the stream marked the variant as null. Any type can
/// be null, so the tag is kept either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub meta_type: MetaType,
    pub value: Option<Value>,
}

impl Variant {
    pub fn new(meta_type: MetaType, value: Value) -> Self {
        Self {
            meta_type,
            value: Some(value),
        }
    }

    pub fn null(meta_type: MetaType) -> Self {
        Self {
            meta_type,
            value: None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

/// A decoded variant payload.
///
/// `String`, `ByteArray` and `Url` carry an `Option` because the wire format
/// distinguishes a null value from an empty one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(Option<String>),
    StringList(Vec<String>),
    ByteArray(Option<Vec<u8>>),
    BitArray(Vec<bool>),
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    Url(Option<Url>),
    /// 32 lowercase hex digits, bytes in stream order.
    Uuid(String),
    List(Vec<Variant>),
    Map(VariantMap),
}

impl Value {
    /// Returns the value as a string slice, if it is a non-null `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(Some(s)) => Some(s),
            _ => None,
        }
    }

    /// Widens any integer variant to `i128`.
    pub fn as_int(&self) -> Option<i128> {
        match *self {
            Self::Int8(v) => Some(v.into()),
            Self::UInt8(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::UInt16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::UInt32(v) => Some(v.into()),
            Self::Int64(v) => Some(v.into()),
            Self::UInt64(v) => Some(v.into()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Variant]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&VariantMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int8(i) => write!(f, "{i}"),
            Self::UInt8(i) => write!(f, "{i}"),
            Self::Int16(i) => write!(f, "{i}"),
            Self::UInt16(i) => write!(f, "{i}"),
            Self::Int32(i) => write!(f, "{i}"),
            Self::UInt32(i) => write!(f, "{i}"),
            Self::Int64(i) => write!(f, "{i}"),
            Self::UInt64(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::String(Some(s)) => write!(f, "\"{s}\""),
            Self::String(None) => write!(f, "<null string>"),
            Self::StringList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{item}\"")?;
                }
                write!(f, "]")
            }
            Self::ByteArray(Some(b)) => write!(f, "<{} bytes>", b.len()),
            Self::ByteArray(None) => write!(f, "<null bytes>"),
            Self::BitArray(bits) => {
                for bit in bits {
                    f.write_str(if *bit { "1" } else { "0" })?;
                }
                Ok(())
            }
            Self::Date(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Url(Some(u)) => write!(f, "{u}"),
            Self::Url(None) => write!(f, "<null url>"),
            Self::Uuid(u) => write!(f, "{{{u}}}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "null"),
        }
    }
}

// -- Convenience conversions --

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int32(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int64(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Some(s.to_owned()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Some(s))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::ByteArray(Some(b))
    }
}

impl From<Vec<Variant>> for Value {
    fn from(v: Vec<Variant>) -> Self {
        Self::List(v)
    }
}

impl From<VariantMap> for Value {
    fn from(m: VariantMap) -> Self {
        Self::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_variant_keeps_type() {
        let v = Variant::null(MetaType::STRING);
        assert!(v.is_null());
        assert_eq!(v.meta_type, MetaType::STRING);
        assert_eq!(v.to_string(), "null");
    }

    #[test]
    fn null_and_empty_string_differ() {
        assert_ne!(Value::String(None), Value::from(""));
        assert_ne!(Value::ByteArray(None), Value::from(Vec::<u8>::new()));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::String(None).as_str(), None);
        assert_eq!(Value::UInt64(u64::MAX).as_int(), Some(i128::from(u64::MAX)));
        assert_eq!(Value::Int8(-3).as_int(), Some(-3));
        assert_eq!(Value::Bool(true).as_int(), None);
    }

    #[test]
    fn display_nested() {
        let mut map = VariantMap::new();
        map.insert("a".into(), Variant::new(MetaType::INT, Value::Int32(1)));
        map.insert("b".into(), Variant::null(MetaType::STRING));
        let list = Value::List(vec![
            Variant::new(MetaType::BOOL, Value::Bool(false)),
            Variant::new(MetaType::VARIANT_MAP, Value::Map(map)),
        ]);
        assert_eq!(list.to_string(), "[false, {a: 1, b: null}]");
        assert_eq!(Value::BitArray(vec![true, false, true]).to_string(), "101");
    }
}
