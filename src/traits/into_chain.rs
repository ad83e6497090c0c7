//! Trait for converting values into chained errors.
//!
//! [`IntoChain`] is what lets the [`ResultExt`](crate::traits::ResultExt) methods accept
//! results that fail with something other than [`Error`].
//!
//! # Implementations
//!
//! - [`Error`] - identity conversion
//! - `String`, `&'static str` - become a new root with a captured stack
//! - `std::io::Error`, `std::fmt::Error`, `Box<dyn Error + Send + Sync>` - adopted as a
//!   foreign root with a captured stack
//!
//! # Examples
//!
//! ```
//! use error_coder::{traits::IntoChain, Error, NodeKind};
//!
//! let from_text = "socket closed".into_chain();
//! assert_eq!(from_text.kind(), NodeKind::Fundamental);
//!
//! let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
//! let adopted = io.into_chain();
//! assert_eq!(adopted.kind(), NodeKind::Foreign);
//! assert_eq!(adopted.to_string(), "read timed out");
//! ```
use std::error::Error as StdError;

use crate::types::Error;

/// Converts a value into the root (or the whole chain) of an [`Error`].
///
/// For your own error types use the [`impl_into_chain!`](crate::impl_into_chain) macro,
/// which adopts the value through [`Error::from_std`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into an error chain",
    label = "this type does not implement `IntoChain`",
    note = "use `impl_into_chain!({Self})` for types implementing `std::error::Error`"
)]
pub trait IntoChain {
    fn into_chain(self) -> Error;
}

impl IntoChain for Error {
    #[inline]
    fn into_chain(self) -> Error {
        self
    }
}

impl IntoChain for String {
    #[track_caller]
    #[inline]
    fn into_chain(self) -> Error {
        Error::new(self)
    }
}

impl IntoChain for &'static str {
    #[track_caller]
    #[inline]
    fn into_chain(self) -> Error {
        Error::new(self)
    }
}

impl IntoChain for std::io::Error {
    #[track_caller]
    #[inline]
    fn into_chain(self) -> Error {
        Error::from_std(self)
    }
}

impl IntoChain for std::fmt::Error {
    #[track_caller]
    #[inline]
    fn into_chain(self) -> Error {
        Error::from_std(self)
    }
}

impl IntoChain for Box<dyn StdError + Send + Sync + 'static> {
    #[track_caller]
    #[inline]
    fn into_chain(self) -> Error {
        Error::from_boxed(self)
    }
}
