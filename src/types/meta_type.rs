//! QMetaType codes used as variant type tags.

use std::fmt;

/// A variant's type tag, as written on the wire.
///
/// The numbering comes from `qmetatype.h` and is sparse. Codes for GUI,
/// geometry and object types are listed in [`REGISTRY`] so they can be named
/// in diagnostics, but they are not decodable and must never be reused for
/// another payload kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetaType(pub u32);

impl MetaType {
    pub const BOOL: Self = Self(1);
    pub const INT: Self = Self(2);
    pub const UINT: Self = Self(3);
    pub const LONG_LONG: Self = Self(4);
    pub const ULONG_LONG: Self = Self(5);
    pub const DOUBLE: Self = Self(6);
    pub const QCHAR: Self = Self(7);
    pub const VARIANT_MAP: Self = Self(8);
    pub const VARIANT_LIST: Self = Self(9);
    pub const STRING: Self = Self(10);
    pub const STRING_LIST: Self = Self(11);
    pub const BYTE_ARRAY: Self = Self(12);
    pub const BIT_ARRAY: Self = Self(13);
    pub const DATE: Self = Self(14);
    pub const TIME: Self = Self(15);
    pub const DATE_TIME: Self = Self(16);
    pub const URL: Self = Self(17);
    pub const VARIANT_HASH: Self = Self(28);
    pub const UUID: Self = Self(30);
    pub const SHORT: Self = Self(33);
    pub const CHAR: Self = Self(34);
    pub const USHORT: Self = Self(36);
    pub const UCHAR: Self = Self(37);
    pub const FLOAT: Self = Self(38);
    pub const SCHAR: Self = Self(40);

    /// Returns the raw wire code.
    pub fn code(self) -> u32 {
        self.0
    }

    /// Returns the Qt name of this type, if the code is a known one.
    pub fn name(self) -> Option<&'static str> {
        REGISTRY
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }

    /// Returns `true` if [`read_variant`](crate::datastream::StreamReader::read_variant)
    /// can decode a payload of this type.
    pub fn is_supported(self) -> bool {
        SUPPORTED.contains(&self)
    }
}

impl From<u32> for MetaType {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "type({})", self.0),
        }
    }
}

/// Types with a payload decoder.
pub static SUPPORTED: &[MetaType] = &[
    MetaType::BOOL,
    MetaType::INT,
    MetaType::UINT,
    MetaType::LONG_LONG,
    MetaType::ULONG_LONG,
    MetaType::DOUBLE,
    MetaType::QCHAR,
    MetaType::VARIANT_MAP,
    MetaType::VARIANT_LIST,
    MetaType::STRING,
    MetaType::STRING_LIST,
    MetaType::BYTE_ARRAY,
    MetaType::BIT_ARRAY,
    MetaType::DATE,
    MetaType::TIME,
    MetaType::DATE_TIME,
    MetaType::URL,
    MetaType::VARIANT_HASH,
    MetaType::UUID,
    MetaType::SHORT,
    MetaType::CHAR,
    MetaType::USHORT,
    MetaType::UCHAR,
    MetaType::FLOAT,
    MetaType::SCHAR,
];

/// Every code known from `qmetatype.h`, decodable or not.
pub static REGISTRY: &[(u32, &str)] = &[
    (1, "Bool"),
    (2, "Int"),
    (3, "UInt"),
    (4, "LongLong"),
    (5, "ULongLong"),
    (6, "Double"),
    (7, "QChar"),
    (8, "QVariantMap"),
    (9, "QVariantList"),
    (10, "QString"),
    (11, "QStringList"),
    (12, "QByteArray"),
    (13, "QBitArray"),
    (14, "QDate"),
    (15, "QTime"),
    (16, "QDateTime"),
    (17, "QUrl"),
    (18, "QLocale"),
    (19, "QRect"),
    (20, "QRectF"),
    (21, "QSize"),
    (22, "QSizeF"),
    (23, "QLine"),
    (24, "QLineF"),
    (25, "QPoint"),
    (26, "QPointF"),
    (27, "QRegExp"),
    (28, "QVariantHash"),
    (29, "QEasingCurve"),
    (30, "QUuid"),
    (31, "VoidStar"),
    (32, "Long"),
    (33, "Short"),
    (34, "Char"),
    (35, "ULong"),
    (36, "UShort"),
    (37, "UChar"),
    (38, "Float"),
    (39, "QObjectStar"),
    (40, "SChar"),
    (41, "QVariant"),
    (42, "QModelIndex"),
    (43, "Void"),
    (44, "QRegularExpression"),
    (45, "QJsonValue"),
    (46, "QJsonObject"),
    (47, "QJsonArray"),
    (48, "QJsonDocument"),
    (64, "QFont"),
    (65, "QPixmap"),
    (66, "QBrush"),
    (67, "QColor"),
    (68, "QPalette"),
    (69, "QIcon"),
    (70, "QImage"),
    (71, "QPolygon"),
    (72, "QRegion"),
    (73, "QBitmap"),
    (74, "QCursor"),
    (75, "QKeySequence"),
    (76, "QPen"),
    (77, "QTextLength"),
    (78, "QTextFormat"),
    (79, "QMatrix"),
    (80, "QTransform"),
    (81, "QMatrix4x4"),
    (82, "QVector2D"),
    (83, "QVector3D"),
    (84, "QVector4D"),
    (85, "QQuaternion"),
    (86, "QPolygonF"),
    (121, "QSizePolicy"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_known_codes() {
        assert_eq!(MetaType::STRING.name(), Some("QString"));
        assert_eq!(MetaType(19).name(), Some("QRect"));
        assert_eq!(MetaType(1000).name(), None);
    }

    #[test]
    fn gaps_are_not_supported() {
        assert!(MetaType::UUID.is_supported());
        assert!(MetaType::VARIANT_HASH.is_supported());
        for code in [0, 18, 19, 27, 29, 31, 32, 35, 39, 41, 64, 121] {
            assert!(!MetaType(code).is_supported(), "code {code}");
        }
    }

    #[test]
    fn registry_is_sorted_and_unique() {
        for pair in REGISTRY.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
        for t in SUPPORTED {
            assert!(t.name().is_some(), "{t:?} missing from registry");
        }
    }

    #[test]
    fn display_includes_code() {
        assert_eq!(MetaType::BOOL.to_string(), "Bool(1)");
        assert_eq!(MetaType(500).to_string(), "type(500)");
    }
}
