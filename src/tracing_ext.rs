//! Tracing integration for error-coder.
//!
//! This module attaches the active `tracing` span to error chains and emits chains as
//! `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-coder = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::traits::IntoChain;
use crate::types::Error;

/// Message attached for `span`: `in span '<name>'`.
fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{name}'")
}

/// Extension trait for `Result` types to add span context to errors.
pub trait ResultSpanExt<T> {
    /// Annotates the error with the current span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_coder::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> Result<Data, error_coder::Error> {
    ///     do_work().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Result<T, Error>;

    /// Annotates the error with a specific span.
    fn with_span(self, span: &Span) -> Result<T, Error>;
}

impl<T, E: IntoChain> ResultSpanExt<T> for Result<T, E> {
    #[track_caller]
    fn with_current_span(self) -> Result<T, Error> {
        self.with_span(&Span::current())
    }

    #[track_caller]
    fn with_span(self, span: &Span) -> Result<T, Error> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into_chain().with_message(span_message(span))),
        }
    }
}

/// Annotates an error with the current span, without capturing a stack.
#[track_caller]
pub fn instrument_error<E: IntoChain>(error: E) -> Error {
    error.into_chain().with_message(span_message(&Span::current()))
}

/// Emits `err` as an `ERROR` event carrying its code and verbose report.
pub fn trace_error(err: &Error) {
    tracing::error!(
        code = err.code(),
        report = %err.report().show_backtrace(false),
        "{err}"
    );
}
