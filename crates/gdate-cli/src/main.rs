use jiff::{tz::TimeZone, Timestamp};
use lexopt::{Arg, Parser, ValueExt};

const USAGE: &'static str = "\
Print the current date and time in UTC.

USAGE:
    gdate-cli [-I | -R | --rfc-3339] [FORMAT]

FORMAT is a strftime-style format string as understood by the gdate crate.
When it is omitted (or empty) and no preset is selected, the ISO 8601 format
is used.

OPTIONS:
    -h, --help        Print this help message
    -I, --iso-8601    Output in ISO 8601 format (the default)
    -R, --rfc-2822    Output in RFC 2822 format
        --rfc-3339    Output in RFC 3339 format
";

const ISO_8601: &'static str = "%Y-%m-%dT%H:%M:%S%z";
const RFC_2822: &'static str = "%a, %d %b %Y %H:%M:%S %z";
const RFC_3339: &'static str = "%Y-%m-%d %H:%M:%S%z";

fn main() -> anyhow::Result<()> {
    let mut selection = Selection::default();
    let mut p = Parser::from_env();
    while let Some(arg) = p.next()? {
        match arg {
            Arg::Short('h') | Arg::Long("help") => {
                anyhow::bail!("{}", USAGE)
            }
            Arg::Short('I') | Arg::Long("iso-8601") => {
                selection.iso_8601 = true;
            }
            Arg::Short('R') | Arg::Long("rfc-2822") => {
                selection.rfc_2822 = true;
            }
            Arg::Long("rfc-3339") => {
                selection.rfc_3339 = true;
            }
            Arg::Value(value) => {
                anyhow::ensure!(
                    selection.format.is_none(),
                    "expected at most one positional format string",
                );
                selection.format = Some(value.string()?);
            }
            arg => return Err(arg.unexpected().into()),
        }
    }

    let now = Timestamp::now().to_zoned(TimeZone::UTC);
    println!("{}", gdate::expand(selection.format_string(), &now)?);
    Ok(())
}

#[derive(Debug, Default)]
struct Selection {
    iso_8601: bool,
    rfc_2822: bool,
    rfc_3339: bool,
    format: Option<String>,
}

impl Selection {
    /// ISO 8601 wins, then RFC 2822, then RFC 3339, then a non-empty
    /// free-form format.
    fn format_string(&self) -> &str {
        if self.iso_8601 {
            ISO_8601
        } else if self.rfc_2822 {
            RFC_2822
        } else if self.rfc_3339 {
            RFC_3339
        } else {
            match self.format.as_deref() {
                Some(format) if !format.is_empty() => format,
                _ => ISO_8601,
            }
        }
    }
}
