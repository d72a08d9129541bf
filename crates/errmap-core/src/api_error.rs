use std::borrow::Cow;

use http::StatusCode;

use crate::{ErrorKind, HttpError};

/// API-facing error descriptor
///
/// Values handed out by the registry are owned copies. Modifying one through
/// [`ApiError::with_message`] or [`ApiError::with_explanation`] never touches
/// the registry entry it came from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    code: &'static str,
    message: Cow<'static, str>,
    explanation: Option<Cow<'static, str>>,
    status: StatusCode,
}

impl ApiError {
    /// Create a descriptor with the kind's slug as its code and no explanation
    pub const fn new(kind: ErrorKind, message: &'static str, status: StatusCode) -> Self {
        Self {
            kind,
            code: kind.as_str(),
            message: Cow::Borrowed(message),
            explanation: None,
            status,
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable machine-readable code (e.g. `access_denied`)
    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extra detail, `None` when the registry carries none for this kind
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Replace the human-readable message, keeping code, status and explanation
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach an explanation; an empty string clears it
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<Cow<'static, str>>) -> Self {
        let explanation = explanation.into();
        self.explanation = (!explanation.is_empty()).then_some(explanation);
        self
    }
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_type(&self) -> &str {
        self.code
    }

    fn client_message(&self) -> String {
        self.message.clone().into_owned()
    }
}
