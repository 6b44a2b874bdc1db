use alloc::string::String;

use jiff::Zoned;

use crate::{
    error::Error,
    table::{self, Subst},
};

/// Expand `format` for the datetime `zdt`.
///
/// This rewrites `format` with [`rewrite`] and then runs the result through
/// [`jiff::fmt::strtime::format`]. See the [crate documentation](crate) for
/// the full rewriting policy and the table of extended specifiers.
///
/// # Errors
///
/// This returns an error when the underlying formatter rejects the rewritten
/// format string. Rewriting itself never fails: unknown specifiers and a
/// dangling `%` are dropped.
///
/// # Example
///
/// ```
/// use jiff::{civil::date, tz::TimeZone};
///
/// let zdt = date(2024, 7, 15).at(16, 24, 59, 0).to_zoned(TimeZone::UTC)?;
/// assert_eq!(
///     gdate::expand("%a, %d %b %Y %T %z", &zdt)?,
///     "Mon, 15 Jul 2024 16:24:59 +0000",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn expand(format: &str, zdt: &Zoned) -> Result<String, Error> {
    let rewritten = rewrite(format, zdt);
    trace!("rewrote format string {format:?} to {rewritten:?}");
    jiff::fmt::strtime::format(&rewritten, zdt)
        .map_err(|err| Error::strftime(&rewritten, err))
}

/// Rewrite `format` into a format string containing only specifiers the
/// underlying formatter understands.
///
/// Extended specifiers are substituted using `zdt` where their replacement
/// text depends on the datetime (e.g., `%q`), and unknown specifiers are
/// dropped. The result is what [`expand`] hands to the underlying formatter.
///
/// # Example
///
/// ```
/// use jiff::{civil::date, tz::TimeZone};
///
/// let zdt = date(2024, 7, 15).at(16, 24, 59, 123_000_000).to_zoned(TimeZone::UTC)?;
/// assert_eq!(gdate::rewrite("%T.%N", &zdt), "%H:%M:%S.123000000");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn rewrite(format: &str, zdt: &Zoned) -> String {
    let out = String::with_capacity(format.len());
    Rewriter { fmt: format, zdt, out }.rewrite()
}

struct Rewriter<'f, 't> {
    fmt: &'f str,
    zdt: &'t Zoned,
    out: String,
}

impl<'f, 't> Rewriter<'f, 't> {
    fn rewrite(mut self) -> String {
        while let Some(at) = self.fmt.find('%') {
            self.out.push_str(&self.fmt[..at]);
            self.fmt = &self.fmt[at + 1..];
            let Some(specifier) = self.fmt.chars().next() else {
                // A `%` at the very end of the format string has no
                // specifier to resolve and is dropped.
                return self.out;
            };
            self.fmt = &self.fmt[specifier.len_utf8()..];
            self.rewrite_one(specifier);
        }
        self.out.push_str(self.fmt);
        self.out
    }

    fn rewrite_one(&mut self, specifier: char) {
        if table::is_native(specifier) {
            // Leave the pair untouched for the underlying formatter. This
            // covers `%%`, which it interprets as a literal `%`.
            self.out.push('%');
            self.out.push(specifier);
        } else if let Some(sub) = table::lookup(specifier) {
            match *sub {
                Subst::Literal(text) => self.out.push_str(text),
                Subst::Computed(substitute) => {
                    self.out.push_str(&substitute(self.zdt));
                }
            }
        }
        // An unrecognized specifier produces nothing: both the `%` and the
        // character following it vanish from the output.
    }
}
