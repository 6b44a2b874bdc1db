use alloc::boxed::Box;

/// An error that can occur when expanding a format string.
///
/// Rewriting itself cannot fail: unknown specifiers and a dangling `%` are
/// dropped rather than rejected. An error therefore always means that the
/// underlying `jiff` formatter refused the rewritten format string (or one of
/// the datetime fields it needed). The rewritten string is attached so the
/// error message points at what the formatter actually saw, which may differ
/// from what the caller wrote.
#[derive(Clone, Debug)]
pub struct Error {
    rewritten: Box<str>,
    cause: jiff::Error,
}

impl Error {
    pub(crate) fn strftime(rewritten: &str, cause: jiff::Error) -> Error {
        Error { rewritten: Box::from(rewritten), cause }
    }

    /// Returns the rewritten format string that was handed to the underlying
    /// formatter.
    pub fn rewritten(&self) -> &str {
        &self.rewritten
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to format rewritten format string {rewritten:?}: {cause}",
            rewritten = self.rewritten,
            cause = self.cause,
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
