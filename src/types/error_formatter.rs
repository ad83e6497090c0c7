//! Verbose, multi-line rendering of error chains.
//!
//! A report walks the chain from the root cause outward. Each node contributes its own
//! message on a new line, coded nodes append ` (code: N)`, and nodes that captured a
//! stack append an indented `at file:line:col` line followed by backtrace frames when
//! one was recorded. Stack-only wrappers contribute only their stack lines.
//!
//! # Examples
//!
//! ```
//! use error_coder::Error;
//!
//! let err = Error::new("disk full").wrap_c(100, "save failed");
//!
//! let compact = err.report().compact().to_string();
//! assert_eq!(compact, "disk full -> save failed (code: 100)");
//!
//! let verbose = format!("{:#}", err);
//! assert!(verbose.starts_with("disk full\n"));
//! assert!(verbose.contains("save failed (code: 100)"));
//! ```
use core::fmt::{self, Display};

use crate::types::chain_error::{Error, Kind};
use crate::types::stack::Stack;

/// Switches controlling a verbose report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Written between the lines of consecutive message-bearing nodes.
    pub separator: String,
    /// Prefix of `at` lines; backtrace frames get it twice.
    pub indent: String,
    /// Render the `at file:line:col` line of nodes that captured a stack.
    pub show_stack: bool,
    /// Render backtrace frames below each `at` line, when captured.
    pub show_backtrace: bool,
    /// Append ` (code: N)` to coded nodes.
    pub show_code: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            indent: "    ".into(),
            show_stack: true,
            show_backtrace: true,
            show_code: true,
        }
    }
}

impl ReportConfig {
    /// Single-line report without stacks.
    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: " -> ".into(),
            show_stack: false,
            show_backtrace: false,
            ..Default::default()
        }
    }

    /// Multi-line report with call-site lines but no backtrace frames.
    #[inline]
    pub fn locations_only() -> Self {
        Self { show_backtrace: false, ..Default::default() }
    }
}

/// Builder for customizing the verbose rendering of an [`Error`].
///
/// Created by [`Error::report`].
pub struct ReportBuilder<'a> {
    error: &'a Error,
    config: ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    /// Creates a builder with the default multi-line configuration.
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ReportConfig::default() }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the separator written between node messages.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Toggles the `at file:line:col` lines.
    pub fn show_stack(mut self, show: bool) -> Self {
        self.config.show_stack = show;
        self
    }

    /// Toggles backtrace frames below `at` lines.
    pub fn show_backtrace(mut self, show: bool) -> Self {
        self.config.show_backtrace = show;
        self
    }

    /// Toggles the ` (code: N)` suffix on coded nodes.
    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    /// Switches to [`ReportConfig::compact`].
    pub fn compact(mut self) -> Self {
        self.config = ReportConfig::compact();
        self
    }

    fn write_stack(&self, f: &mut fmt::Formatter<'_>, stack: &Stack) -> fmt::Result {
        if !self.config.show_stack {
            return Ok(());
        }
        stack.write_trace(f, &self.config.indent, self.config.show_backtrace)
    }
}

impl Display for ReportBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<&Error> = self.error.chain().collect();

        for (i, node) in nodes.iter().rev().enumerate() {
            if let Kind::WithStack { stack } = &node.inner.kind {
                self.write_stack(f, stack)?;
                continue;
            }

            if i > 0 {
                f.write_str(&self.config.separator)?;
            }

            match &node.inner.kind {
                Kind::Fundamental { message, stack } => {
                    f.write_str(message)?;
                    self.write_stack(f, stack)?;
                },
                Kind::WithMessage { message } => f.write_str(message)?,
                Kind::WithCode { code, text, stack } => {
                    f.write_str(text)?;
                    if self.config.show_code {
                        write!(f, " (code: {code})")?;
                    }
                    self.write_stack(f, stack)?;
                },
                Kind::Foreign { error, stack } => {
                    write!(f, "{error}")?;
                    self.write_stack(f, stack)?;
                },
                Kind::WithStack { .. } => {},
            }
        }

        Ok(())
    }
}
