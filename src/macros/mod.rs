//! Formatting shorthands for the chain constructors.
//!
//! Each macro takes `format!`-style arguments and forwards to the matching [`Error`]
//! method, so the recorded location is the macro's call site.
//!
//! - [`macro@crate::errorf`] - [`Error::new`](crate::Error::new) with a formatted message
//! - [`macro@crate::wrapf`] - [`Error::wrap`](crate::Error::wrap) with a formatted message
//! - [`macro@crate::with_messagef`] - [`Error::with_message`](crate::Error::with_message)
//!   with a formatted message
//! - [`macro@crate::with_code`] - [`Error::with_code`](crate::Error::with_code) with a
//!   formatted message
//! - [`macro@crate::wrap_c`] - [`Error::wrap_c`](crate::Error::wrap_c) with a formatted
//!   message
//! - [`macro@crate::impl_into_chain`] - implements [`IntoChain`](crate::traits::IntoChain)
//!   for an error type
//!
//! # Examples
//!
//! ```
//! use error_coder::{errorf, with_code, wrap_c, wrapf};
//!
//! let path = "/var/lib/app/state.db";
//! let err = errorf!("cannot open {}", path);
//! let err = wrapf!(err, "restoring state (attempt {})", 2);
//! assert_eq!(err.to_string(), "restoring state (attempt 2)");
//!
//! let coded = wrap_c!(err, 110_001, "state unavailable for {path}");
//! assert_eq!(coded.code(), Some(110_001));
//!
//! let root = with_code!(110_002, "quota {} exceeded", "disk");
//! assert_eq!(root.to_string(), "quota disk exceeded");
//! ```

/// Creates a root [`Error`](crate::Error) from a formatted message.
///
/// # Examples
///
/// ```
/// use error_coder::errorf;
///
/// let err = errorf!("user {} not found", 42);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::Error::new(format!($($arg)*))
    };
}

/// Wraps an error with a formatted message and a fresh stack.
///
/// # Examples
///
/// ```
/// use error_coder::{wrapf, Error};
///
/// let err = wrapf!(Error::new("timeout"), "calling {}", "billing");
/// assert_eq!(err.to_string(), "calling billing");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::Error::wrap(&$err, format!($($arg)*))
    };
}

/// Annotates an error with a formatted message without capturing a stack.
///
/// # Examples
///
/// ```
/// use error_coder::{with_messagef, Error, NodeKind};
///
/// let err = with_messagef!(Error::new("timeout"), "retry {} of {}", 1, 3);
/// assert_eq!(err.to_string(), "retry 1 of 3");
/// assert_eq!(err.kind(), NodeKind::WithMessage);
/// ```
#[macro_export]
macro_rules! with_messagef {
    ($err:expr, $($arg:tt)*) => {
        $crate::Error::with_message(&$err, format!($($arg)*))
    };
}

/// Creates a root coded error from a code and a formatted message.
///
/// # Examples
///
/// ```
/// use error_coder::with_code;
///
/// let err = with_code!(100_201, "token for {} expired", "alice");
/// assert_eq!(err.code(), Some(100_201));
/// assert_eq!(err.to_string(), "token for alice expired");
/// ```
#[macro_export]
macro_rules! with_code {
    ($code:expr, $($arg:tt)*) => {
        $crate::Error::with_code($code, format!($($arg)*))
    };
}

/// Wraps an error in a coded node with a new code and a formatted message.
///
/// # Examples
///
/// ```
/// use error_coder::{wrap_c, Error};
///
/// let err = wrap_c!(Error::new("dial tcp: refused"), 100_301, "db {} unreachable", "primary");
/// assert_eq!(err.code(), Some(100_301));
/// assert_eq!(err.cause().to_string(), "dial tcp: refused");
/// ```
#[macro_export]
macro_rules! wrap_c {
    ($err:expr, $code:expr, $($arg:tt)*) => {
        $crate::Error::wrap_c(&$err, $code, format!($($arg)*))
    };
}

/// Implements [`IntoChain`](crate::traits::IntoChain) for an error type by adopting it
/// through [`Error::from_std`](crate::Error::from_std).
///
/// # Examples
///
/// ```
/// use error_coder::{impl_into_chain, traits::ResultExt};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct ParseError {
///     line: u32,
/// }
///
/// impl fmt::Display for ParseError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "syntax error on line {}", self.line)
///     }
/// }
///
/// impl std::error::Error for ParseError {}
///
/// impl_into_chain!(ParseError);
///
/// let result: Result<(), ParseError> = Err(ParseError { line: 7 });
/// let err = result.wrap_err("loading manifest").unwrap_err();
/// assert_eq!(err.downcast_ref::<ParseError>().map(|e| e.line), Some(7));
/// ```
#[macro_export]
macro_rules! impl_into_chain {
    ($type:ty) => {
        impl $crate::traits::IntoChain for $type {
            #[track_caller]
            fn into_chain(self) -> $crate::Error {
                $crate::Error::from_std(self)
            }
        }
    };
}
