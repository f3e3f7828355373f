use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::gregorian::DateTime;
use crate::instant::compose;
use crate::iso8601::{write_fraction, write_offset, Scanner};
use crate::time_zone::TimeZone;

impl DateTime {
    /// Parse the [`Display`](fmt::Display) form, `2024-07-04T12:00:00-04:00 New_York`. The
    /// offset in the text decides the instant; the zone only decides how it is viewed.
    pub fn parse(s: &str) -> Result<Self> {
        parse(s, false).ok_or_else(|| Error::parse("DateTime", s))
    }

    /// Parse ISO 8601 text without a zone name, such as `2024-07-04T12:00:00-04:00`. The
    /// result is in the fixed `Etc/GMT±N` zone of the offset, so the offset must be a whole
    /// number of hours.
    pub fn from_iso(s: &str) -> Result<Self> {
        parse(s, true).ok_or_else(|| Error::parse("DateTime", s))
    }

    /// ISO 8601 text without the zone name.
    pub fn to_iso(&self) -> String {
        IsoFormat(self).to_string()
    }
}

fn parse(s: &str, iso: bool) -> Option<DateTime> {
    let mut scanner = Scanner::new(s);
    let date = scanner.date()?;
    scanner.expect(b'T')?;
    let time = scanner.time()?;
    let offset = scanner.offset()?;
    let zone: Arc<TimeZone> = if iso {
        if !scanner.at_end() {
            return None;
        }
        TimeZone::from_gmt_offset(offset).ok()?
    } else {
        scanner.expect(b' ')?;
        TimeZone::find(scanner.rest())?
    };
    let (ticks, _) = compose(&date, &time, &zone, Some(offset)).ok()?;
    DateTime::from_ticks(ticks, zone).ok()
}

fn write_iso(f: &mut fmt::Formatter<'_>, dt: &DateTime) -> fmt::Result {
    write!(
        f,
        "{}T{:02}:{:02}:{:02}",
        dt.date(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )?;
    write_fraction(f, dt.nanosecond())?;
    write_offset(f, dt.offset_secs())
}

struct IsoFormat<'a>(&'a DateTime);

impl fmt::Display for IsoFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iso(f, self.0)
    }
}

impl fmt::Display for DateTime {
    /// `YYYY-MM-DDThh:mm:ss[.FFFFFFFFF]±hh:mm Zone`, with `Z` in place of a zero offset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iso(f, self)?;
        write!(f, " {}", self.zone().name())
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DateTime::parse(s)
    }
}
