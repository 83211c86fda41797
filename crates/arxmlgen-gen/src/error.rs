//! Error types for the arxmlgen-gen crate.

use std::backtrace::Backtrace;
use std::fmt;

use arxmlgen_model::RenderError;

/// Error type for fixture generation operations.
///
/// Covers the two ways a generation run can fail: a file or directory
/// operation, or serializing a document tree. Generation itself (the random
/// tree builder) has no failure modes, so there is no variant for it.
#[derive(Debug)]
pub struct GenError {
    kind: GenErrorKind,
    backtrace: Backtrace,
}

/// Internal error variants. Not exposed publicly; use `is_xxx()` methods instead.
#[derive(Debug)]
pub(crate) enum GenErrorKind {
    /// A file or directory operation failed.
    Io(std::io::Error),
    /// Serializing a document tree to XML text failed.
    Render(RenderError),
}

impl GenError {
    /// Returns true if this error is due to a file or directory failure.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, GenErrorKind::Io(_))
    }

    /// Returns true if this error is due to a rendering failure.
    pub fn is_render(&self) -> bool {
        matches!(self.kind, GenErrorKind::Render(_))
    }

    /// Returns the backtrace captured when this error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for GenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenErrorKind::Io(err) => write!(f, "I/O error: {err}"),
            GenErrorKind::Render(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summary of what happened.
        writeln!(f, "{}", self.kind)?;

        // Backtrace (will be empty unless RUST_BACKTRACE is set).
        write!(f, "{}", self.backtrace)
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GenErrorKind::Io(err) => Some(err),
            GenErrorKind::Render(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: GenErrorKind::Io(err),
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<RenderError> for GenError {
    fn from(err: RenderError) -> Self {
        Self {
            kind: GenErrorKind::Render(err),
            backtrace: Backtrace::capture(),
        }
    }
}
