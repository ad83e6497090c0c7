//! Conversion and extension traits.
//!
//! - [`IntoChain`]: Conversion of foreign errors and messages into an [`Error`](crate::Error)
//! - [`ResultExt`]: Chain operations on the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use error_coder::traits::ResultExt;
//!
//! let parsed: Result<u16, _> = "70000".parse::<u16>().map_err(|e| e.to_string());
//! let err = parsed.wrap_err("reading port").unwrap_err();
//! assert_eq!(err.to_string(), "reading port");
//! ```

pub mod into_chain;
pub mod result_ext;

pub use into_chain::IntoChain;
pub use result_ext::ResultExt;
