/*!
A forgiving, GNU `date`-flavored front end for [`jiff`]'s `strftime`
formatting.

[`jiff::fmt::strtime`] is strict: an unrecognized conversion specifier is an
error, and so is a `%` dangling at the end of a format string. Classic Unix
`date` implementations are looser. This crate provides that looser surface.
[`expand`] rewrites a `date`-flavored format string into one containing only
conversion specifiers the underlying formatter understands, substituting a
fixed set of extended specifiers itself, and then hands the result to
[`jiff::fmt::strtime::format`]. [`rewrite`] exposes the intermediate format
string without running the underlying formatter.

The rewriting policy is a single left-to-right scan:

* A specifier in the passthrough set below is left untouched for the
  underlying formatter to interpret, the escape `%%` included.
* An extended specifier is replaced with its substitution from the table
  below. A substitution may itself contain passthrough specifiers, which the
  underlying formatter then expands.
* Any other specifier is dropped from the output entirely, along with its
  `%`. The same goes for a lone `%` at the very end of the format string.
* Everything between specifiers is literal text and is preserved verbatim,
  embedded newlines and tabs included.

Flag and width modifiers (for example `%-d` or `%03H`) are not recognized.
The `-` in `%-d` is an unknown specifier, so it is dropped and the `d` that
follows becomes literal text.

# Passthrough specifiers

`%A %a %B %b %c %d %f %G %H %I %j %M %m %p %S %U %u %V %W %w %X %x %Y %y %Z
%z` and the escape `%%`.

# Extended specifiers

| Specifier | Substitution |
| --------- | ------------ |
| `%C` | First two digits of the zero-padded 4-digit year. |
| `%D` | `%m/%d/%y` |
| `%e` | A space, then the zero-padded day of the month (`%d`). |
| `%F` | `%Y-%m-%d` |
| `%g` | Last two digits of the ISO 8601 week-based year. |
| `%h` | `%b` |
| `%k` | A space, then the zero-padded 24-hour hour (`%H`). |
| `%l` | A space, then the zero-padded 12-hour hour (`%I`). |
| `%N` | The sub-second fraction as nanoseconds, zero-padded to 9 digits. |
| `%n` | A newline. |
| `%P` | `am` or `pm`, lowercase. |
| `%q` | Quarter of the year, `1` through `4`. |
| `%R` | `%H:%M` |
| `%r` | `%I:%M:%S %p` |
| `%s` | Seconds since the Unix epoch, fractional seconds included. |
| `%T` | `%H:%M:%S` |
| `%t` | A tab. |

# Example

```
use jiff::{civil::date, tz::TimeZone};

let zdt = date(2024, 7, 15).at(16, 24, 59, 0).to_zoned(TimeZone::UTC)?;
assert_eq!(gdate::expand("%F %T", &zdt)?, "2024-07-15 16:24:59");
assert_eq!(gdate::expand("quarter %q, %P", &zdt)?, "quarter 3, pm");
// Unknown specifiers vanish instead of failing:
assert_eq!(gdate::expand("%J", &zdt)?, "");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

#![no_std]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use self::{
    error::Error,
    expand::{expand, rewrite},
};

#[macro_use]
mod logging;

mod error;
mod expand;
mod table;
