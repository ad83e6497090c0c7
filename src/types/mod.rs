//! Error chain types and utilities.
//!
//! This module provides [`Error`], the chain node handle, together with the stack
//! snapshot it records and the verbose report renderer.
//!
//! # Examples
//!
//! ```
//! use error_coder::Error;
//!
//! let err = Error::new("connection refused")
//!     .wrap("loading user profile")
//!     .with_message("handling GET /users/42");
//!
//! assert_eq!(err.to_string(), "handling GET /users/42");
//! assert_eq!(err.cause().to_string(), "connection refused");
//! println!("{:#}", err);
//! ```
use smallvec::SmallVec;

pub mod chain_error;
pub mod error_formatter;
pub mod stack;

pub use chain_error::*;
pub use error_formatter::*;
pub use stack::*;

/// SmallVec-backed collection used for values gathered from a chain.
///
/// Uses inline storage for up to 4 elements, enough for the codes of most chains.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Result alias that fails with a chained [`Error`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type ChainResult<T> = Result<T, Error>;
