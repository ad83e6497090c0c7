//! Chained errors with call-site stacks and registered business codes.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_coder::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping with Stacks
//!
//! ```
//! use error_coder::Error;
//!
//! let err = Error::new("connection reset")
//!     .wrap("fetching invoice 17")
//!     .with_message("GET /invoices/17");
//!
//! assert_eq!(err.to_string(), "GET /invoices/17");
//! assert_eq!(err.cause().to_string(), "connection reset");
//!
//! // `{:#}` renders every node from the root outward, with call sites.
//! let report = format!("{:#}", err);
//! assert!(report.starts_with("connection reset\n"));
//! assert!(report.ends_with("GET /invoices/17"));
//! ```
//!
//! ## Business Codes
//!
//! ```
//! use error_coder::{CodeRegistry, Coder, DefaultCoder, Error};
//!
//! let registry = CodeRegistry::new();
//! registry.must_register(DefaultCoder::new(100_401, 403, "Permission denied", ""));
//!
//! let err = Error::new("role `viewer` cannot write").wrap_c(100_401, "update rejected");
//! let outer = err.wrap("PATCH /documents/9");
//!
//! // Wrapping a coded error keeps its code.
//! assert_eq!(outer.code(), Some(100_401));
//! assert_eq!(registry.parse_coder(&outer).http_status(), 403);
//! ```
//!
//! ## Results
//!
//! ```
//! use error_coder::prelude::*;
//!
//! fn read_settings() -> ChainResult<String> {
//!     std::fs::read_to_string("/definitely/missing/settings.toml")
//!         .wrap_code(100_501, "settings unavailable")
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert!(err.is_code(100_501));
//! ```

/// Business codes, coder metadata and the code registry
pub mod coder;
/// `Option`-based entry points mirroring the chain operations
pub mod convert;
/// Formatting macros for chain construction
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and `Result` extension traits
pub mod traits;
/// Error chain, stack snapshots and report rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use coder::{
    lookup, must_register, register, CodeRegistry, Coder, DefaultCoder, RegistryError,
    UNKNOWN_CODE, UNKNOWN_CODER,
};
pub use traits::*;
pub use types::{
    capture_mode, set_capture_mode, CaptureMode, Chain, ChainResult, Error, ErrorVec, NodeKind,
    Quoted, ReportBuilder, ReportConfig, Stack,
};
