//! Extension trait for wrapping the error side of a `Result`.
//!
//! [`ResultExt`] applies the chain operations of [`Error`] to `Err` values and leaves
//! `Ok` values untouched, which makes it the `Result` counterpart of the
//! [`convert`](crate::convert) functions.
//!
//! # Examples
//!
//! ```
//! use error_coder::traits::ResultExt;
//! use error_coder::Error;
//!
//! fn load_config() -> Result<String, Error> {
//!     std::fs::read_to_string("/definitely/missing/config.toml")
//!         .wrap_err("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.to_string(), "loading configuration file");
//! assert!(err.downcast_ref::<std::io::Error>().is_some());
//! ```

use crate::traits::IntoChain;
use crate::types::Error;

/// Chain operations on the error side of a `Result`.
///
/// All methods record the caller's location, not a location inside this crate.
///
/// # Examples
///
/// ```
/// use error_coder::traits::ResultExt;
///
/// let result: Result<(), &str> = Err("row missing");
/// let err = result.wrap_code(404, "user not found").unwrap_err();
///
/// assert_eq!(err.code(), Some(404));
/// assert_eq!(err.cause().to_string(), "row missing");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error with a message and a fresh stack. See [`Error::wrap`].
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, Error>;

    /// Like [`wrap_err`](Self::wrap_err), evaluating the message only on `Err`.
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Records a fresh stack on the error. See [`Error::with_stack`].
    fn with_stack(self) -> Result<T, Error>;

    /// Annotates the error without capturing a stack. See [`Error::with_message`].
    fn with_message<M: Into<String>>(self, message: M) -> Result<T, Error>;

    /// Wraps the error in a coded node. See [`Error::wrap_c`].
    fn wrap_code<M: Into<String>>(self, code: i32, message: M) -> Result<T, Error>;
}

impl<T, E: IntoChain> ResultExt<T> for Result<T, E> {
    #[track_caller]
    #[inline]
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into_chain().wrap(message)),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into_chain().wrap(f())),
        }
    }

    #[track_caller]
    #[inline]
    fn with_stack(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into_chain().with_stack()),
        }
    }

    #[track_caller]
    #[inline]
    fn with_message<M: Into<String>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into_chain().with_message(message)),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_code<M: Into<String>>(self, code: i32, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into_chain().wrap_c(code, message)),
        }
    }
}
