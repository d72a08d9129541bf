//! Mapping from internal error sentinels to API error descriptors
//!
//! A [`Registry`] holds one [`ApiError`] per [`ErrorKind`]. Lookups and
//! conversions are total: anything without a mapping resolves to the
//! `unknown_error` descriptor.

#![allow(clippy::must_use_candidate)]

mod api_error;
mod error;
mod kind;
mod registry;
mod sentinel;

use std::borrow::Cow;

pub use api_error::ApiError;
pub use error::{HttpError, RegistryError};
pub use kind::{ErrorKind, ParseErrorKindError};
pub use registry::Registry;
pub use sentinel::InternalError;

/// Descriptor for `kind` from the process-wide registry
pub fn lookup(kind: ErrorKind) -> ApiError {
    Registry::global().lookup(kind)
}

/// Descriptor for `kind` from the process-wide registry, with `message`
pub fn lookup_with_message(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> ApiError {
    Registry::global().lookup_with_message(kind, message)
}

/// Descriptor for a numeric code; out-of-range codes resolve to `Unknown`
pub fn lookup_code(code: u32) -> ApiError {
    Registry::global().lookup_code(code)
}

/// Translate an internal error using the process-wide registry
///
/// See [`Registry::convert`].
pub fn convert(err: &(dyn std::error::Error + 'static)) -> ApiError {
    Registry::global().convert(err)
}
