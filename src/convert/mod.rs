//! `Option`-based entry points for code that carries "maybe an error" values.
//!
//! Each wrapping function returns `None` when given `None`, and each query degrades to a
//! neutral answer instead of failing, so they can be applied to an optional error
//! without checking it first.
//!
//! # Examples
//!
//! ```
//! use error_coder::convert::*;
//! use error_coder::Error;
//!
//! assert!(wrap(None, "never shown").is_none());
//!
//! let root = Error::new("disk full");
//! let coded = wrap_c(Some(&root), 100, "save failed");
//! let outer = with_stack(coded.as_ref());
//!
//! assert!(is_code(outer.as_ref(), 100));
//! assert!(cause(outer.as_ref()).is_some_and(|c| c.ptr_eq(&root)));
//! ```

// A closure passed to `Option::map` would be recorded as the caller of the capturing
// constructors, hence the explicit matches.
#![allow(clippy::manual_map)]

use std::sync::Arc;

use crate::coder::Coder;
use crate::types::Error;

/// Records a fresh stack on `err`. See [`Error::with_stack`].
#[track_caller]
#[inline]
pub fn with_stack(err: Option<&Error>) -> Option<Error> {
    match err {
        Some(err) => Some(err.with_stack()),
        None => None,
    }
}

/// Annotates `err` with a message and a fresh stack. See [`Error::wrap`].
#[track_caller]
#[inline]
pub fn wrap<M: Into<String>>(err: Option<&Error>, message: M) -> Option<Error> {
    match err {
        Some(err) => Some(err.wrap(message)),
        None => None,
    }
}

/// Annotates `err` with a message only. See [`Error::with_message`].
#[inline]
pub fn with_message<M: Into<String>>(err: Option<&Error>, message: M) -> Option<Error> {
    err.map(|err| err.with_message(message))
}

/// Wraps `err` in a coded node with a new code. See [`Error::wrap_c`].
#[track_caller]
#[inline]
pub fn wrap_c<M: Into<String>>(err: Option<&Error>, code: i32, message: M) -> Option<Error> {
    match err {
        Some(err) => Some(err.wrap_c(code, message)),
        None => None,
    }
}

/// Returns the deepest error reachable through the cause relation. See [`Error::cause`].
#[inline]
pub fn cause(err: Option<&Error>) -> Option<&Error> {
    err.map(Error::cause)
}

/// Reports whether `code` matches `err`. See [`Error::is_code`].
///
/// `None` is not a coded node, so it matches every code.
#[inline]
pub fn is_code(err: Option<&Error>, code: i32) -> bool {
    err.map_or(true, |err| err.is_code(code))
}

/// Resolves the coder of `err` against the global registry. See [`Error::parse_coder`].
#[inline]
pub fn parse_coder(err: Option<&Error>) -> Option<Arc<dyn Coder>> {
    err.map(Error::parse_coder)
}

/// Renders the verbose report of `err`, or an empty string for `None`.
pub fn format_report(err: Option<&Error>) -> String {
    err.map(|err| err.report().to_string()).unwrap_or_default()
}
