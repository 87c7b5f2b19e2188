//! Error kinds

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The class of an error, such as a permission failure.
///
/// The discriminants are shared between clients and servers: they travel on
/// the wire as the `code` field. Do not reorder or remove variants. New kinds
/// are only ever appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    /// Unclassified error
    #[default]
    Unknown = 0,

    /// Invalid operation for this type of item
    Invalid = 1,

    /// Permission denied
    Permission = 2,

    /// External I/O error such as a network failure
    Io = 3,

    /// Duplicated item
    Duplicated = 4,

    /// Item does not exist
    NotExist = 5,

    /// Information withheld
    Private = 6,

    /// Internal error or inconsistency
    Internal = 7,

    /// Invalid encryption info
    Decrypt = 8,

    /// Invalid input data
    Unmarshal = 9,

    /// A transient error
    Transient = 10,

    /// An unsupported media type
    Unsupported = 11,

    /// None of the provided media types can be accepted
    NotAcceptable = 12,
}

/// A wire code that does not name any [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error kind code {0}")]
pub struct UnknownKindCode(pub u8);

impl Kind {
    /// Every kind, in code order.
    pub const ALL: [Kind; 13] = [
        Kind::Unknown,
        Kind::Invalid,
        Kind::Permission,
        Kind::Io,
        Kind::Duplicated,
        Kind::NotExist,
        Kind::Private,
        Kind::Internal,
        Kind::Decrypt,
        Kind::Unmarshal,
        Kind::Transient,
        Kind::Unsupported,
        Kind::NotAcceptable,
    ];

    /// Returns the user-visible label of this kind.
    ///
    /// Downstream consumers match on these strings; they must not change.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Unknown => "Unknown error",
            Kind::Invalid => "invalid operation",
            Kind::Permission => "permission denied",
            Kind::Io => "I/O error",
            Kind::Duplicated => "item already exists",
            Kind::NotExist => "item does not exist",
            Kind::Private => "information withheld",
            Kind::Internal => "internal error",
            Kind::Decrypt => "invalid encryption",
            Kind::Unmarshal => "invalid data",
            Kind::Transient => "transient error",
            Kind::Unsupported => "unsupported",
            Kind::NotAcceptable => "not accepted",
        }
    }

    /// Returns the wire code of this kind
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Kind {
    type Error = UnknownKindCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Kind::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(UnknownKindCode(code))
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind.code()
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Kind::try_from(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Io.to_string(), "I/O error");
        assert_eq!(Kind::Duplicated.to_string(), "item already exists");
        assert_eq!(Kind::Decrypt.to_string(), "invalid encryption");
        assert_eq!(Kind::Unknown.to_string(), "Unknown error");
    }

    #[test]
    fn test_label_table() {
        let expected = [
            (0, "Unknown error"),
            (1, "invalid operation"),
            (2, "permission denied"),
            (3, "I/O error"),
            (4, "item already exists"),
            (5, "item does not exist"),
            (6, "information withheld"),
            (7, "internal error"),
            (8, "invalid encryption"),
            (9, "invalid data"),
            (10, "transient error"),
            (11, "unsupported"),
            (12, "not accepted"),
        ];

        assert_eq!(Kind::ALL.len(), expected.len());
        for (kind, (code, label)) in Kind::ALL.iter().zip(expected) {
            assert_eq!(kind.code(), code, "{:?}", kind);
            assert_eq!(kind.as_str(), label, "{:?}", kind);
            assert_eq!(kind.to_string(), label, "{:?}", kind);
        }
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Kind::Unknown.code(), 0);
        assert_eq!(Kind::Io.code(), 3);
        assert_eq!(Kind::Unmarshal.code(), 9);
        assert_eq!(Kind::NotAcceptable.code(), 12);

        for (i, kind) in Kind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.code()), i);
        }
    }

    #[test]
    fn test_try_from_code() {
        for kind in Kind::ALL {
            assert_eq!(Kind::try_from(kind.code()), Ok(kind));
        }
        assert_eq!(Kind::try_from(13), Err(UnknownKindCode(13)));
        assert_eq!(
            UnknownKindCode(200).to_string(),
            "unknown error kind code 200"
        );
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Kind::default(), Kind::Unknown);
    }

    #[test]
    fn test_serde_as_code() {
        assert_eq!(serde_json::to_string(&Kind::Transient).unwrap(), "10");
        let kind: Kind = serde_json::from_str("5").unwrap();
        assert_eq!(kind, Kind::NotExist);
        assert!(serde_json::from_str::<Kind>("42").is_err());
    }
}
