use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::OnceLock;

use http::StatusCode;
use strum::IntoEnumIterator;

use crate::{ApiError, ErrorKind, InternalError, RegistryError};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Builtin descriptor for a kind
const fn builtin(kind: ErrorKind) -> ApiError {
    match kind {
        ErrorKind::Unknown => ApiError::new(kind, "unknown error", StatusCode::INTERNAL_SERVER_ERROR),
        ErrorKind::Internal => ApiError::new(
            kind,
            "internal error. Please, try again later",
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        ErrorKind::AccessDenied => ApiError::new(kind, "access denied", StatusCode::FORBIDDEN),
        ErrorKind::NotFound => ApiError::new(kind, "resource not found", StatusCode::NOT_FOUND),
        ErrorKind::InvalidJson => ApiError::new(kind, "invalid json document", StatusCode::UNPROCESSABLE_ENTITY),
    }
}

/// Read-only table of one [`ApiError`] per [`ErrorKind`]
///
/// Built once at startup. Every accessor hands out an owned copy, so a
/// shared `&Registry` can be read from any thread without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<ErrorKind, ApiError>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Registry holding the builtin descriptors
    pub fn builtin() -> Self {
        Self {
            entries: ErrorKind::iter().map(|kind| (kind, builtin(kind))).collect(),
        }
    }

    /// Builtin descriptors with per-kind explanations attached
    pub fn with_explanations<I, S>(explanations: I) -> Self
    where
        I: IntoIterator<Item = (ErrorKind, S)>,
        S: Into<Cow<'static, str>>,
    {
        let mut registry = Self::builtin();

        for (kind, explanation) in explanations {
            let entry = builtin(kind).with_explanation(explanation);
            registry.entries.insert(kind, entry);
        }

        registry
    }

    /// Install this registry as the process-wide one
    ///
    /// Must run before the first call to [`Registry::global`]; once a lookup
    /// has lazily initialized the builtin table it can no longer be replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyInstalled`] if a registry is already set
    pub fn install(self) -> Result<(), RegistryError> {
        GLOBAL.set(self).map_err(|_| RegistryError::AlreadyInstalled)?;
        tracing::debug!("error registry installed");
        Ok(())
    }

    /// The process-wide registry, the builtin one unless another was installed
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::builtin)
    }

    /// Descriptor for `kind`, falling back to the `Unknown` entry
    pub fn lookup(&self, kind: ErrorKind) -> ApiError {
        self.entries
            .get(&kind)
            .or_else(|| self.entries.get(&ErrorKind::Unknown))
            .map_or_else(|| builtin(ErrorKind::Unknown), Clone::clone)
    }

    /// Same as [`Registry::lookup`] with the message replaced
    pub fn lookup_with_message(&self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> ApiError {
        self.lookup(kind).with_message(message)
    }

    /// Descriptor for a numeric code; out-of-range codes resolve to `Unknown`
    pub fn lookup_code(&self, code: u32) -> ApiError {
        self.lookup(ErrorKind::from_code(code).unwrap_or(ErrorKind::Unknown))
    }

    /// Translate an internal error into its descriptor
    ///
    /// Walks `err` and its `source()` chain; the first [`InternalError`]
    /// resolves through its kind tag. Anything else, including an
    /// [`ApiError`], is logged and resolves to the `Unknown` descriptor.
    pub fn convert(&self, err: &(dyn Error + 'static)) -> ApiError {
        let resolved = std::iter::successors(Some(err), |&e| e.source())
            .find_map(|e| e.downcast_ref::<InternalError>())
            .map(|internal| self.lookup(internal.kind()));

        resolved.unwrap_or_else(|| {
            tracing::warn!(error = %err, "unrecognized internal error, falling back to unknown_error");
            self.lookup(ErrorKind::Unknown)
        })
    }

    /// Iterate over all entries in kind order
    pub fn iter(&self) -> impl Iterator<Item = &ApiError> {
        self.entries.values()
    }
}
