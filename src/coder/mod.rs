//! Business error codes and their metadata.
//!
//! A [`Coder`] describes one business code: the HTTP status to answer with, a message
//! that is safe to show to users, and a documentation reference. Coders are registered
//! in a [`CodeRegistry`] and resolved from coded errors with
//! [`CodeRegistry::parse_coder`].
//!
//! Code `0` is reserved for the built-in [`UNKNOWN_CODER`], which every lookup falls
//! back to.
//!
//! # Examples
//!
//! ```
//! use error_coder::{CodeRegistry, Coder, DefaultCoder, Error};
//!
//! let registry = CodeRegistry::new();
//! registry.must_register(DefaultCoder::new(
//!     100_101,
//!     404,
//!     "User not found",
//!     "https://docs.example.com/errors#100101",
//! ));
//!
//! let err = Error::with_code(100_101, "no row for user 42");
//! let coder = registry.parse_coder(&err);
//! assert_eq!(coder.http_status(), 404);
//! assert_eq!(coder.message(), "User not found");
//! ```
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod registry;

pub use registry::{CodeRegistry, RegistryError};

/// Code reserved for [`UNKNOWN_CODER`].
pub const UNKNOWN_CODE: i32 = 0;

/// Fallback coder returned for unregistered codes and uncoded errors.
pub static UNKNOWN_CODER: DefaultCoder = DefaultCoder::from_static(
    UNKNOWN_CODE,
    500,
    "An internal server error occurred",
    "http://github.com/chsir-zy/errors/README.md",
);

/// Metadata describing a business error code.
pub trait Coder: fmt::Debug + Send + Sync + 'static {
    /// The business code.
    fn code(&self) -> i32;

    /// HTTP status to report for this code.
    fn http_status(&self) -> u16;

    /// Message that can be shown to the end user.
    fn message(&self) -> &str;

    /// Link to documentation for this code.
    fn reference(&self) -> &str;
}

/// Plain data implementation of [`Coder`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultCoder {
    code: i32,
    http_status: u16,
    message: Cow<'static, str>,
    reference: Cow<'static, str>,
}

impl DefaultCoder {
    pub fn new(
        code: i32,
        http_status: u16,
        message: impl Into<Cow<'static, str>>,
        reference: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { code, http_status, message: message.into(), reference: reference.into() }
    }

    /// Const constructor for coders declared as statics.
    pub const fn from_static(
        code: i32,
        http_status: u16,
        message: &'static str,
        reference: &'static str,
    ) -> Self {
        Self {
            code,
            http_status,
            message: Cow::Borrowed(message),
            reference: Cow::Borrowed(reference),
        }
    }
}

impl Coder for DefaultCoder {
    #[inline]
    fn code(&self) -> i32 {
        self.code
    }

    /// An unset (`0`) status reports as `500`.
    #[inline]
    fn http_status(&self) -> u16 {
        if self.http_status == 0 {
            return 500;
        }
        self.http_status
    }

    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn reference(&self) -> &str {
        &self.reference
    }
}

impl fmt::Display for DefaultCoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Registers `coder` in the global registry, replacing any previous entry.
///
/// # Panics
///
/// Panics if `coder.code()` is [`UNKNOWN_CODE`].
#[track_caller]
pub fn register<C: Coder>(coder: C) {
    CodeRegistry::global().register(coder);
}

/// Registers `coder` in the global registry.
///
/// # Panics
///
/// Panics if `coder.code()` is [`UNKNOWN_CODE`] or is already registered.
#[track_caller]
pub fn must_register<C: Coder>(coder: C) {
    CodeRegistry::global().must_register(coder);
}

/// Looks `code` up in the global registry, falling back to [`UNKNOWN_CODER`].
pub fn lookup(code: i32) -> Arc<dyn Coder> {
    CodeRegistry::global().lookup(code)
}
