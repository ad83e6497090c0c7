use core::fmt;
use std::error::Error as StdError;

use super::{Error, Kind};

impl Error {
    /// Writes the plain rendering: the outermost node's own message only.
    pub(crate) fn write_plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Fundamental { message, .. } | Kind::WithMessage { message } => {
                f.write_str(message)
            },
            Kind::WithCode { text, .. } => f.write_str(text),
            Kind::Foreign { error, .. } => write!(f, "{error}"),
            Kind::WithStack { .. } => match self.source_error() {
                Some(cause) => cause.write_plain(f),
                None => Ok(()),
            },
        }
    }

    /// Returns the plain rendering as an escaped, double-quoted string literal.
    ///
    /// ```
    /// use error_coder::Error;
    ///
    /// let err = Error::new("bad \"name\"\nline two");
    /// assert_eq!(err.quoted().to_string(), r#""bad \"name\"\nline two""#);
    /// ```
    #[inline]
    pub fn quoted(&self) -> Quoted<'_> {
        Quoted(self)
    }
}

/// Quoted plain rendering of an [`Error`], created by [`Error::quoted`].
pub struct Quoted<'a>(&'a Error);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.0.to_string();
        write!(f, "{plain:?}")
    }
}

/// `{}` renders the outermost message, `{:#}` renders the full verbose report.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return self.write_plain(f);
        }
        fmt::Display::fmt(&self.report(), f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(), f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.inner.kind {
            Kind::Foreign { error, .. } => error.source(),
            _ => self.source_error().map(|cause| cause as &(dyn StdError + 'static)),
        }
    }
}
