use http::StatusCode;
use strum::{EnumIter, EnumString};

use crate::{ApiError, ErrorKind, HttpError, Registry};

/// Internal failure conditions raised below the API layer
///
/// Each variant carries its [`ErrorKind`] tag, so translating it into an
/// [`ApiError`] is a match on the tag rather than a comparison against
/// known values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum InternalError {
    #[error("internal error")]
    Internal,

    #[error("access denied")]
    #[strum(serialize = "access-denied", serialize = "access_denied")]
    AccessDenied,

    #[error("resource not found")]
    #[strum(serialize = "resource-not-found", serialize = "resource_not_found")]
    ResourceNotFound,

    #[error("invalid json document")]
    #[strum(serialize = "invalid-json", serialize = "invalid_json")]
    InvalidJson,
}

impl InternalError {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::Internal => ErrorKind::Internal,
            Self::AccessDenied => ErrorKind::AccessDenied,
            Self::ResourceNotFound => ErrorKind::NotFound,
            Self::InvalidJson => ErrorKind::InvalidJson,
        }
    }

    /// Descriptor from the process-wide registry
    pub fn descriptor(self) -> ApiError {
        Registry::global().lookup(self.kind())
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        err.descriptor()
    }
}

impl From<&InternalError> for ApiError {
    fn from(err: &InternalError) -> Self {
        err.descriptor()
    }
}

impl HttpError for InternalError {
    fn status_code(&self) -> StatusCode {
        self.descriptor().status()
    }

    fn error_type(&self) -> &str {
        self.kind().as_str()
    }

    fn client_message(&self) -> String {
        self.descriptor().message().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_sentinel_has_a_distinct_kind() {
        let kinds: std::collections::HashSet<_> = InternalError::iter().map(InternalError::kind).collect();
        assert_eq!(kinds.len(), InternalError::iter().count());
        assert!(!kinds.contains(&ErrorKind::Unknown));
    }

    #[test]
    fn parse_names() {
        assert_eq!("access-denied".parse::<InternalError>(), Ok(InternalError::AccessDenied));
        assert_eq!("Invalid-Json".parse::<InternalError>(), Ok(InternalError::InvalidJson));
        assert_eq!(
            "resource-not-found".parse::<InternalError>(),
            Ok(InternalError::ResourceNotFound)
        );
        assert!("disk-full".parse::<InternalError>().is_err());
    }

    #[test]
    fn parse_snake_case_names() {
        assert_eq!(
            "resource_not_found".parse::<InternalError>(),
            Ok(InternalError::ResourceNotFound)
        );
        assert_eq!("access_denied".parse::<InternalError>(), Ok(InternalError::AccessDenied));
        assert_eq!("INVALID_JSON".parse::<InternalError>(), Ok(InternalError::InvalidJson));
        assert_eq!("internal".parse::<InternalError>(), Ok(InternalError::Internal));
    }

    #[test]
    fn display_texts() {
        let texts: Vec<_> = InternalError::iter().map(|e| e.to_string()).collect();
        assert_eq!(
            texts,
            ["internal error", "access denied", "resource not found", "invalid json document"]
        );
    }

    #[test]
    fn http_error_follows_descriptor() {
        let err = InternalError::ResourceNotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "not_found");
        assert_eq!(err.client_message(), "resource not found");
    }
}
