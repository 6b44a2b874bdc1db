use alloc::{
    format,
    string::{String, ToString},
};

use jiff::Zoned;

/// Conversion specifiers the underlying formatter is trusted to handle on
/// its own, the escape `%%` included.
///
/// Everything after a `%` that isn't in this set is either substituted via
/// [`EXTENDED`] or dropped.
pub(crate) const NATIVE: &[u8] = b"AaBbcdfGHIjMmpSUuVWwXxYyZz%";

/// A substitution for one extended conversion specifier.
///
/// `Literal` text is spliced into the rewritten format string as-is, which
/// means it may itself contain native specifiers for the underlying
/// formatter to expand (e.g., `%D` becomes `%m/%d/%y`). A `Computed`
/// substitution produces finished text from the datetime being formatted.
pub(crate) enum Subst {
    Literal(&'static str),
    Computed(fn(&Zoned) -> String),
}

/// The extended conversion specifiers and their substitutions.
///
/// Invariants: every specifier is a single ASCII alphabetic character, and
/// none of them appear in [`NATIVE`].
pub(crate) const EXTENDED: &[(u8, Subst)] = &[
    (b'C', Subst::Computed(century)),
    (b'D', Subst::Literal("%m/%d/%y")),
    (b'e', Subst::Literal(" %d")),
    (b'F', Subst::Literal("%Y-%m-%d")),
    (b'g', Subst::Computed(iso_week_year2)),
    (b'h', Subst::Literal("%b")),
    (b'k', Subst::Literal(" %H")),
    (b'l', Subst::Literal(" %I")),
    (b'N', Subst::Computed(nanoseconds)),
    (b'n', Subst::Literal("\n")),
    (b'P', Subst::Computed(meridiem_lower)),
    (b'q', Subst::Computed(quarter)),
    (b'R', Subst::Literal("%H:%M")),
    (b'r', Subst::Literal("%I:%M:%S %p")),
    (b's', Subst::Computed(epoch_seconds)),
    (b'T', Subst::Literal("%H:%M:%S")),
    (b't', Subst::Literal("\t")),
];

pub(crate) fn is_native(ch: char) -> bool {
    u8::try_from(ch).map_or(false, |byte| NATIVE.contains(&byte))
}

pub(crate) fn lookup(ch: char) -> Option<&'static Subst> {
    let byte = u8::try_from(ch).ok()?;
    let (_, sub) = EXTENDED.iter().find(|&&(code, _)| code == byte)?;
    Some(sub)
}

/// %C
fn century(zdt: &Zoned) -> String {
    format!("{:02}", zdt.year().div_euclid(100))
}

/// %g
fn iso_week_year2(zdt: &Zoned) -> String {
    format!("{:02}", zdt.date().iso_week_date().year().rem_euclid(100))
}

/// %N
fn nanoseconds(zdt: &Zoned) -> String {
    format!("{:09}", zdt.subsec_nanosecond())
}

/// %P
fn meridiem_lower(zdt: &Zoned) -> String {
    if zdt.hour() < 12 { "am" } else { "pm" }.to_string()
}

/// %q
fn quarter(zdt: &Zoned) -> String {
    ((zdt.month() - 1) / 3 + 1).to_string()
}

/// %s
///
/// The fractional part is always present: trailing zeros are trimmed, and a
/// whole second renders as `.0`.
fn epoch_seconds(zdt: &Zoned) -> String {
    let ts = zdt.timestamp();
    let (second, nanos) = (ts.as_second(), ts.subsec_nanosecond());
    if nanos == 0 {
        return format!("{second}.0");
    }
    let mut frac = format!("{:09}", nanos.unsigned_abs());
    while frac.ends_with('0') {
        frac.pop();
    }
    let sign = if second < 0 || nanos < 0 { "-" } else { "" };
    format!("{sign}{second}.{frac}", second = second.unsigned_abs())
}
