use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Closed set of API error categories
///
/// The discriminant is the stable numeric code exposed to clients, the slug
/// returned by [`ErrorKind::as_str`] is the stable machine-readable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, Deserialize)]
#[repr(u32)]
pub enum ErrorKind {
    /// Fallback for anything without a dedicated mapping
    #[serde(rename = "unknown_error")]
    Unknown = 0,
    #[serde(rename = "internal_error")]
    Internal = 1,
    #[serde(rename = "access_denied")]
    AccessDenied = 2,
    #[serde(rename = "not_found")]
    NotFound = 3,
    #[serde(rename = "invalid_json")]
    InvalidJson = 4,
}

impl ErrorKind {
    /// Stable numeric code
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Resolve a numeric code, `None` when it is out of range
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::Internal),
            2 => Some(Self::AccessDenied),
            3 => Some(Self::NotFound),
            4 => Some(Self::InvalidJson),
            _ => None,
        }
    }

    /// Stable machine-readable slug
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown_error",
            Self::Internal => "internal_error",
            Self::AccessDenied => "access_denied",
            Self::NotFound => "not_found",
            Self::InvalidJson => "invalid_json",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a slug does not name any [`ErrorKind`]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown error kind: {0}")]
pub struct ParseErrorKindError(pub String);

impl FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseErrorKindError(s.to_owned()))
    }
}
