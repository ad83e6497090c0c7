//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_coder::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errorf!`], [`wrapf!`], [`with_messagef!`], [`with_code!`], [`wrap_c!`]
//! - **Types**: [`Error`], [`ChainResult`], [`CodeRegistry`], [`DefaultCoder`]
//! - **Traits**: [`Coder`], [`ResultExt`], [`IntoChain`]
//!
//! # Examples
//!
//! ```
//! use error_coder::prelude::*;
//!
//! fn find_user(id: u64) -> ChainResult<String> {
//!     Err(with_code!(100_101, "user {} not found", id))
//! }
//!
//! let err = find_user(7).wrap_err("rendering profile page").unwrap_err();
//! assert_eq!(err.code(), Some(100_101));
//! assert_eq!(err.to_string(), "rendering profile page");
//! ```

// Macros
pub use crate::{errorf, with_code, with_messagef, wrap_c, wrapf};

// Core types
pub use crate::coder::{CodeRegistry, Coder, DefaultCoder};
pub use crate::types::{ChainResult, Error};

// Traits
pub use crate::traits::{IntoChain, ResultExt};
