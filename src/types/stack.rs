//! Call-site snapshots attached to capturing chain nodes.
//!
//! Every [`Stack`] records the source location of the call that created it (through
//! `#[track_caller]`), and optionally a [`Backtrace`] depending on the active [`CaptureMode`].
//!
//! # Examples
//!
//! ```
//! use error_coder::{CaptureMode, Stack};
//!
//! let stack = Stack::capture_with(CaptureMode::Location);
//! assert_eq!(stack.line(), line!() - 1);
//! assert!(stack.backtrace().is_none());
//! ```
use core::fmt;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};

/// Controls how much of the call stack a capturing node records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CaptureMode {
    /// Only the call-site location.
    Location = 0,
    /// Call-site location plus [`Backtrace::capture`], which honors `RUST_BACKTRACE` and
    /// `RUST_LIB_BACKTRACE`.
    #[default]
    Env = 1,
    /// Call-site location plus [`Backtrace::force_capture`].
    Force = 2,
}

static CAPTURE_MODE: AtomicU8 = AtomicU8::new(CaptureMode::Env as u8);

/// Sets the process-wide capture mode used by every capturing constructor.
#[inline]
pub fn set_capture_mode(mode: CaptureMode) {
    CAPTURE_MODE.store(mode as u8, Ordering::Relaxed);
}

/// Returns the process-wide capture mode.
#[inline]
pub fn capture_mode() -> CaptureMode {
    match CAPTURE_MODE.load(Ordering::Relaxed) {
        0 => CaptureMode::Location,
        2 => CaptureMode::Force,
        _ => CaptureMode::Env,
    }
}

/// Snapshot of the call stack taken when a capturing node was built.
#[derive(Debug)]
pub struct Stack {
    location: &'static Location<'static>,
    backtrace: Option<Backtrace>,
}

impl Stack {
    /// Captures the caller's location using the process-wide [`CaptureMode`].
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::capture_with(capture_mode())
    }

    /// Captures the caller's location using an explicit [`CaptureMode`].
    ///
    /// A backtrace that the runtime reports as disabled or unsupported is dropped, so
    /// [`backtrace`](Self::backtrace) only ever returns real frames.
    #[track_caller]
    pub fn capture_with(mode: CaptureMode) -> Self {
        let backtrace = match mode {
            CaptureMode::Location => None,
            CaptureMode::Env => Some(Backtrace::capture()),
            CaptureMode::Force => Some(Backtrace::force_capture()),
        }
        .filter(|bt| bt.status() == BacktraceStatus::Captured);

        Self { location: Location::caller(), backtrace }
    }

    /// Returns the location of the call that created this snapshot.
    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Source file of the recording call site.
    #[inline]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Line of the recording call site.
    #[inline]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Returns the captured backtrace, if one was recorded.
    #[inline]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    /// Writes the trace section of a verbose report: one `at` line, then the
    /// backtrace frames when requested and available. Every line starts with a newline.
    pub(crate) fn write_trace(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: &str,
        with_backtrace: bool,
    ) -> fmt::Result {
        write!(f, "\n{indent}at {}", self.location)?;

        if with_backtrace {
            if let Some(bt) = &self.backtrace {
                for line in bt.to_string().lines() {
                    write!(f, "\n{indent}{indent}{line}")?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}", self.location)?;
        if let Some(bt) = &self.backtrace {
            write!(f, "\n{bt}")?;
        }
        Ok(())
    }
}
