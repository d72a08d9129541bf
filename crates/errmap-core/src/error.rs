use http::StatusCode;

/// Trait for errors that can be rendered as API error responses
///
/// Implemented by the descriptor type and by the internal sentinels so a
/// transport layer can map either one without knowing the registry.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `access_denied`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Errors raised while installing the process-wide registry
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// `Registry::install` was called after a registry was already set
    /// or after the builtin one was lazily initialized by a lookup
    #[error("error registry already installed")]
    AlreadyInstalled,
}
