use std::sync::Arc;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::gregorian::{check_year, Date, DateTime, Time};
use crate::instant::compose;
use crate::locale::{English, Locale};
use crate::pattern::{format, parse, Fields, Parsed};
use crate::time_zone::TimeZone;

const HTTP_PATTERNS: [&str; 3] = [
    // RFC 1123
    "WWW, DD MMM YYYY hh:mm:ss zzz",
    // RFC 850
    "WWWW, DD-MMM-YY hh:mm:ss zzz",
    // asctime, once its padding space is removed
    "WWW MMM D hh:mm:ss YYYY",
];

impl Date {
    /// Format with `pattern`, or with the locale's `date` pattern (`D-MMM-YYYY` by default).
    pub fn to_locale(&self, pattern: Option<&str>, locale: &dyn Locale) -> Result<String> {
        let pattern = pattern.unwrap_or_else(|| locale.get_or("date", "D-MMM-YYYY"));
        let fields = Fields {
            date: Some(*self),
            time: Time::MIDNIGHT,
            zone: None,
        };
        format(pattern, &fields, locale)
    }

    pub fn from_locale(s: &str, pattern: &str, locale: &dyn Locale) -> Result<Self> {
        parse(s, pattern, locale)
            .and_then(|parsed| parsed.date())
            .ok_or_else(|| Error::parse("Date", s))
    }

    pub fn yesterday(zone: Arc<TimeZone>) -> Result<Self> {
        Date::today(zone)?.minus(Duration::ONE_DAY)
    }

    pub fn tomorrow(zone: Arc<TimeZone>) -> Result<Self> {
        Date::today(zone)?.plus(Duration::ONE_DAY)
    }
}

impl Time {
    /// Format with `pattern`, or with the locale's `time` pattern (`hh:mm:ss` by default).
    pub fn to_locale(&self, pattern: Option<&str>, locale: &dyn Locale) -> Result<String> {
        let pattern = pattern.unwrap_or_else(|| locale.get_or("time", "hh:mm:ss"));
        let fields = Fields {
            date: None,
            time: *self,
            zone: None,
        };
        format(pattern, &fields, locale)
    }

    pub fn from_locale(s: &str, pattern: &str, locale: &dyn Locale) -> Result<Self> {
        parse(s, pattern, locale)
            .and_then(|parsed| parsed.time())
            .ok_or_else(|| Error::parse("Time", s))
    }

    /// The current time of day in `zone`.
    pub fn now(zone: Arc<TimeZone>) -> Result<Self> {
        Ok(DateTime::now(zone)?.time())
    }
}

impl DateTime {
    /// Format with `pattern`, or with the locale's `dateTime` pattern
    /// (`D-MMM-YYYY WWW hh:mm:ss zzz` by default).
    pub fn to_locale(&self, pattern: Option<&str>, locale: &dyn Locale) -> Result<String> {
        let pattern =
            pattern.unwrap_or_else(|| locale.get_or("dateTime", "D-MMM-YYYY WWW hh:mm:ss zzz"));
        let fields = Fields {
            date: Some(self.date()),
            time: self.time(),
            zone: Some((self.zone().as_ref(), self.is_dst())),
        };
        format(pattern, &fields, locale)
    }

    /// Parse with `pattern`. A zone named in the text is used when known, and an offset picks
    /// `zone` when it matches `zone`'s offset at that time, or a fixed `GMT±N` zone otherwise.
    /// Without either the text is read in `zone`.
    pub fn from_locale(
        s: &str,
        pattern: &str,
        zone: Arc<TimeZone>,
        locale: &dyn Locale,
    ) -> Result<Self> {
        parse(s, pattern, locale)
            .and_then(|parsed| resolve(&parsed, zone))
            .ok_or_else(|| Error::parse("DateTime", s))
    }

    /// RFC 1123 form in GMT, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
    pub fn to_http_str(&self) -> Result<String> {
        let utc = self.to_utc()?;
        let text = utc.to_locale(Some("WWW, DD MMM YYYY hh:mm:ss"), &English)?;
        Ok(format!("{text} GMT"))
    }

    /// Parse any of the three date forms HTTP allows: RFC 1123, RFC 850 and asctime.
    pub fn from_http_str(s: &str) -> Result<Self> {
        let collapsed;
        let text = match s.get(..9) {
            // asctime pads one digit days with a second space
            Some(head) if head.ends_with("  ") => {
                collapsed = format!("{}{}", &s[..8], &s[9..]);
                collapsed.as_str()
            }
            _ => s,
        };
        HTTP_PATTERNS
            .iter()
            .find_map(|pattern| Self::from_locale(text, pattern, TimeZone::utc(), &English).ok())
            .ok_or_else(|| Error::parse("HTTP DateTime", s))
    }
}

fn resolve(parsed: &Parsed, default_zone: Arc<TimeZone>) -> Option<DateTime> {
    let date = parsed.date()?;
    let time = parsed.time()?;
    check_year(date.year()).ok()?;
    let rule = default_zone.rule(date.year());

    let zone = if let Some(name) = &parsed.zone_name {
        if name == default_zone.name()
            || name == rule.std_abbr()
            || Some(name.as_str()) == rule.dst_abbr()
        {
            default_zone
        } else {
            TimeZone::find(name).unwrap_or(default_zone)
        }
    } else if let Some(offset) = parsed.offset {
        let expected = rule.offset()
            + rule.dst_offset_at(
                date.year(),
                date.month().ordinal(),
                date.day(),
                time.seconds_of_day(),
            );
        if offset == expected {
            default_zone
        } else {
            TimeZone::from_gmt_offset(offset).ok()?
        }
    } else {
        default_zone
    };

    let (ticks, _) = compose(&date, &time, &zone, parsed.offset).ok()?;
    DateTime::from_ticks(ticks, zone).ok()
}
