//! Pattern driven text for dates and times, such as `D-MMM-YYYY` or
//! `WWW, DD MMM YYYY hh:mm:ss zzz`.
//!
//! | Letters | Meaning |
//! |---|---|
//! | `YY`, `YYYY` | two or four digit year |
//! | `M`, `MM`, `MMM`, `MMMM` | month number, zero padded number, abbreviation, full name |
//! | `D`, `DD`, `DDD` | day, zero padded day, day with suffix (`1st`) |
//! | `WWW`, `WWWW` | weekday abbreviation, full weekday name |
//! | `Q`, `QQQ`, `QQQQ` | quarter (`3`, `3rd`, `3rd Quarter`) |
//! | `V`, `VV`, `VVV` | week of the year, from the locale's first day of the week |
//! | `h`, `hh` | 24 hour clock |
//! | `k`, `kk` | 12 hour clock |
//! | `m`, `mm` | minute |
//! | `s`, `ss` | second |
//! | `S`, `SS` | second, omitted with the preceding symbol when zero |
//! | `a`, `aa`, `A`, `AA` | `a`/`p`, `am`/`pm` and their upper case forms |
//! | `f`.., `F`.. | required and optional fraction digits |
//! | `z`, `zzz`, `zzzz` | UTC offset (`Z` or `±hh:mm`), zone abbreviation, zone name |
//! | `'text'` | literal text; `''` is a single quote |
//!
//! Any other non-letter is copied as is. A symbol directly before `F` or `S` is left out
//! along with a zero fraction or second.

use crate::error::{Error, Result};
use crate::gregorian::{Date, Month, Time, Weekday};
use crate::iso8601::offset_text;
use crate::locale::Locale;
use crate::time_zone::TimeZone;

mod date_time;

/// What a value offers to a pattern. Dates have no zone and a midnight time; times have no
/// date.
pub(crate) struct Fields<'a> {
    pub(crate) date: Option<Date>,
    pub(crate) time: Time,
    /// The zone, and whether daylight time is in effect.
    pub(crate) zone: Option<(&'a TimeZone, bool)>,
}

impl Fields<'_> {
    fn date(&self, letter: char) -> Result<Date> {
        self.date
            .ok_or_else(|| Error::invalid_pattern(format!("'{letter}' needs a date")))
    }
}

fn count_error(letter: char, n: usize) -> Error {
    Error::invalid_pattern(format!("unsupported num of '{letter}' (x{n})"))
}

/// `1` or `01` style numbers.
fn push_num(out: &mut String, letter: char, n: usize, value: u32) -> Result<()> {
    match n {
        1 => out.push_str(&value.to_string()),
        2 => out.push_str(&format!("{value:02}")),
        _ => return Err(count_error(letter, n)),
    }
    Ok(())
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

pub(crate) fn format(pattern: &str, fields: &Fields<'_>, locale: &dyn Locale) -> Result<String> {
    let pattern: Vec<char> = pattern.chars().collect();
    let time = fields.time;
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;
    while i < pattern.len() {
        let c = pattern[i];
        if c == '\'' {
            let start = i + 1;
            let len = pattern[start..]
                .iter()
                .position(|&ch| ch == '\'')
                .ok_or_else(|| Error::invalid_pattern("unterminated literal"))?;
            if len == 0 {
                out.push('\'');
            } else {
                out.extend(&pattern[start..start + len]);
            }
            i = start + len + 1;
            continue;
        }

        let n = pattern[i..].iter().take_while(|&&ch| ch == c).count();
        i += n;
        match c {
            'Y' => {
                let year = fields.date(c)?.year();
                match n {
                    2 => out.push_str(&format!("{:02}", year % 100)),
                    4 => out.push_str(&format!("{year:04}")),
                    _ => return Err(count_error(c, n)),
                }
            }
            'M' => {
                let month = fields.date(c)?.month();
                match n {
                    4 => out.push_str(month.locale_full(locale)),
                    3 => out.push_str(month.locale_abbr(locale)),
                    _ => push_num(&mut out, c, n, month.ordinal() as u32 + 1)?,
                }
            }
            'D' => {
                let day = fields.date(c)?.day() as u32;
                if n == 3 {
                    out.push_str(&format!("{day}{}", ordinal_suffix(day)));
                } else {
                    push_num(&mut out, c, n, day)?;
                }
            }
            'W' => {
                let weekday = fields.date(c)?.weekday();
                match n {
                    4 => out.push_str(weekday.locale_full(locale)),
                    3 => out.push_str(weekday.locale_abbr(locale)),
                    _ => return Err(count_error(c, n)),
                }
            }
            'Q' => {
                let quarter = fields.date(c)?.month().quarter() as u32;
                let suffix = ordinal_suffix(quarter);
                match n {
                    4 => out.push_str(&format!(
                        "{quarter}{suffix} {}",
                        locale.get_or("quarter", "Quarter")
                    )),
                    3 => out.push_str(&format!("{quarter}{suffix}")),
                    1 => out.push_str(&quarter.to_string()),
                    _ => return Err(count_error(c, n)),
                }
            }
            'V' => {
                let start = Weekday::locale_start_of_week(locale);
                let week = fields.date(c)?.week_of_year(start) as u32;
                if n == 3 {
                    out.push_str(&format!("{week}{}", ordinal_suffix(week)));
                } else {
                    push_num(&mut out, c, n, week)?;
                }
            }
            'h' => push_num(&mut out, c, n, time.hour() as u32)?,
            'k' => {
                let hour = match time.hour() {
                    0 => 12,
                    h if h > 12 => h - 12,
                    h => h,
                };
                push_num(&mut out, c, n, hour as u32)?;
            }
            'm' => push_num(&mut out, c, n, time.minute() as u32)?,
            's' => push_num(&mut out, c, n, time.second() as u32)?,
            'S' => {
                if n > 2 {
                    return Err(count_error(c, n));
                }
                if time.second() != 0 || time.nanosecond() != 0 {
                    push_num(&mut out, c, n, time.second() as u32)?;
                }
            }
            'a' | 'A' => {
                let text = match (n, time.hour() < 12) {
                    (1, true) => "a",
                    (1, false) => "p",
                    (2, true) => "am",
                    (2, false) => "pm",
                    _ => return Err(count_error(c, n)),
                };
                if c == 'A' {
                    out.push_str(&text.to_uppercase());
                } else {
                    out.push_str(text);
                }
            }
            'f' | 'F' => {
                let (mut required, mut optional) = if c == 'F' { (0, n) } else { (n, 0) };
                if c == 'f' {
                    let extra = pattern[i..].iter().take_while(|&&ch| ch == 'F').count();
                    optional = extra;
                    i += extra;
                }
                let mut frac = time.nanosecond();
                let mut tenth = 100_000_000;
                for _ in 0..9 {
                    if required > 0 {
                        required -= 1;
                    } else {
                        if frac == 0 || optional == 0 {
                            break;
                        }
                        optional -= 1;
                    }
                    out.push_str(&(frac / tenth).to_string());
                    frac %= tenth;
                    tenth /= 10;
                }
            }
            'z' => {
                let (zone, dst) = fields
                    .zone
                    .ok_or_else(|| Error::invalid_pattern("'z' needs a time zone"))?;
                let rule = zone.rule(fields.date(c)?.year());
                match n {
                    1 => {
                        let dst_offset = if dst { rule.dst_offset() } else { 0 };
                        out.push_str(&offset_text(rule.offset() + dst_offset));
                    }
                    3 => match rule.dst_abbr() {
                        Some(abbr) if dst => out.push_str(abbr),
                        _ => out.push_str(rule.std_abbr()),
                    },
                    4 => out.push_str(zone.name()),
                    _ => return Err(count_error(c, n)),
                }
            }
            _ => {
                if c.is_alphabetic() {
                    return Err(Error::invalid_pattern(format!("unsupported char '{c}'")));
                }
                let skip = match pattern.get(i) {
                    Some('F') => time.nanosecond() == 0,
                    Some('S') => time.second() == 0 && time.nanosecond() == 0,
                    _ => false,
                };
                if !skip {
                    out.extend(std::iter::repeat(c).take(n));
                }
            }
        }
    }
    Ok(out)
}

/// Fields read from text. Whatever the pattern does not mention keeps its zero default.
#[derive(Debug, Default)]
pub(crate) struct Parsed {
    pub(crate) year: i32,
    pub(crate) month: Option<Month>,
    pub(crate) day: u32,
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    pub(crate) nanosecond: u32,
    pub(crate) zone_name: Option<String>,
    /// Seconds east of UTC.
    pub(crate) offset: Option<i32>,
}

impl Parsed {
    pub(crate) fn date(&self) -> Option<Date> {
        Date::new(self.year, self.month?, u8::try_from(self.day).ok()?).ok()
    }

    pub(crate) fn time(&self) -> Option<Time> {
        Time::new(
            u8::try_from(self.hour).ok()?,
            u8::try_from(self.minute).ok()?,
            u8::try_from(self.second).ok()?,
            self.nanosecond,
        )
        .ok()
    }
}

struct Reader {
    text: Vec<char>,
    pos: usize,
}

impl Reader {
    fn peek(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn expect(&mut self, expected: char) -> Option<()> {
        (self.next()? == expected).then_some(())
    }

    fn opt_digit(&mut self) -> Option<u32> {
        let digit = self.peek()?.to_digit(10)?;
        self.pos += 1;
        Some(digit)
    }

    /// `n` digits, or one or two digits when `n` is 1.
    fn int(&mut self, n: usize) -> Option<u32> {
        let mut num: u32 = 0;
        for _ in 0..n {
            let digit = self.next()?.to_digit(10)?;
            num = num.checked_mul(10)?.checked_add(digit)?;
        }
        if n == 1 {
            if let Some(digit) = self.opt_digit() {
                num = num * 10 + digit;
            }
        }
        Some(num)
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while self.peek().map_or(false, char::is_alphabetic) {
            self.pos += 1;
        }
        self.text[start..self.pos].iter().collect()
    }

    fn fraction(&mut self) -> u32 {
        let mut nanos = 0;
        let mut tenth = 100_000_000;
        while let Some(digit) = self.opt_digit() {
            nanos += tenth * digit;
            tenth /= 10;
        }
        nanos
    }

    /// `Z`, or a sign, hours and optional minutes with or without a colon.
    fn offset(&mut self) -> Option<i32> {
        let negative = match self.next()? {
            'Z' => return Some(0),
            '-' => true,
            '+' => false,
            _ => return None,
        };
        let hours = self.int(1)? as i32;
        let minutes = match self.peek() {
            Some(':') => {
                self.pos += 1;
                self.int(1)? as i32
            }
            Some(ch) if ch.is_ascii_digit() => self.int(1)? as i32,
            _ => 0,
        };
        let offset = hours * 3600 + minutes * 60;
        Some(if negative { -offset } else { offset })
    }

    fn zone_name(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .map_or(false, |ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '_'))
        {
            self.pos += 1;
        }
        self.text[start..self.pos].iter().collect()
    }
}

/// Read `text` against `pattern`, consuming all of it. Two digit years below 30 land in the
/// 2000s and the rest in the 1900s.
pub(crate) fn parse(text: &str, pattern: &str, locale: &dyn Locale) -> Option<Parsed> {
    let pattern: Vec<char> = pattern.chars().collect();
    let mut reader = Reader {
        text: text.chars().collect(),
        pos: 0,
    };
    let mut parsed = Parsed::default();
    // Set when an optional symbol was missing, so the field after it is absent too.
    let mut skipped_last = false;
    let mut i = 0;
    while i < pattern.len() {
        let c = pattern[i];
        let n = pattern[i..].iter().take_while(|&&ch| ch == c).count();
        i += n;
        match c {
            'Y' => {
                let year = reader.int(n)? as i32;
                parsed.year = match year {
                    0..=29 if n <= 2 => year + 2000,
                    30..=99 if n <= 2 => year + 1900,
                    _ => year,
                };
            }
            'M' => {
                let month = if n >= 3 {
                    Month::from_locale_name(&reader.word(), locale)?
                } else {
                    let number = reader.int(n)?.checked_sub(1)?;
                    Month::from_ordinal(u8::try_from(number).ok()?)?
                };
                parsed.month = Some(month);
            }
            'D' => {
                if n == 3 {
                    parsed.day = reader.int(1)?;
                    reader.word();
                } else {
                    parsed.day = reader.int(n)?;
                }
            }
            'W' => {
                reader.word();
            }
            'h' | 'k' => parsed.hour = reader.int(n)?,
            'm' => parsed.minute = reader.int(n)?,
            's' => parsed.second = reader.int(n)?,
            'S' => {
                if !skipped_last {
                    parsed.second = reader.int(n)?;
                }
            }
            'a' | 'A' => {
                let marker = reader.peek()?;
                for _ in 0..n {
                    reader.next()?;
                }
                if marker.eq_ignore_ascii_case(&'p') {
                    if parsed.hour < 12 {
                        parsed.hour += 12;
                    }
                } else if parsed.hour == 12 {
                    parsed.hour = 0;
                }
            }
            'F' if skipped_last => {}
            'f' | 'F' => parsed.nanosecond = reader.fraction(),
            'z' => {
                if n == 1 {
                    parsed.offset = Some(reader.offset()?);
                } else {
                    parsed.zone_name = Some(reader.zone_name());
                }
            }
            '\'' => {
                if n == 2 {
                    reader.expect('\'')?;
                } else {
                    loop {
                        let expected = *pattern.get(i)?;
                        i += 1;
                        if expected == '\'' {
                            break;
                        }
                        reader.expect(expected)?;
                    }
                }
            }
            _ => {
                let optional = matches!(pattern.get(i), Some('F') | Some('S'));
                for _ in 0..n {
                    if reader.peek() == Some(c) {
                        reader.pos += 1;
                        skipped_last = false;
                    } else if optional {
                        skipped_last = true;
                        break;
                    } else {
                        return None;
                    }
                }
            }
        }
    }
    (reader.pos == reader.text.len()).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::locale::English;

    fn date_fields(year: i32, month: Month, day: u8) -> Fields<'static> {
        Fields {
            date: Some(Date::new(year, month, day).unwrap()),
            time: Time::MIDNIGHT,
            zone: None,
        }
    }

    fn time_fields(h: u8, m: u8, s: u8, ns: u32) -> Fields<'static> {
        Fields {
            date: None,
            time: Time::new(h, m, s, ns).unwrap(),
            zone: None,
        }
    }

    #[test]
    fn date_letters() {
        let fields = date_fields(2024, Month::Jul, 4);
        let fmt = |pattern: &str| format(pattern, &fields, &English).unwrap();
        assert_eq!(fmt("D-MMM-YYYY"), "4-Jul-2024");
        assert_eq!(fmt("YY/MM/DD"), "24/07/04");
        assert_eq!(fmt("WWWW, MMMM DDD"), "Thursday, July 4th");
        assert_eq!(fmt("WWW M/D"), "Thu 7/4");
        assert_eq!(fmt("Q QQQ QQQQ"), "3 3rd 3rd Quarter");
        assert_eq!(fmt("V VV VVV"), "27 27 27th");
        assert_eq!(fmt("'Day' D 'of' MMMM"), "Day 4 of July");
        assert_eq!(fmt("''YY"), "'24");
    }

    #[test]
    fn day_suffixes() {
        let suffixes: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(|day| format("DDD", &date_fields(2024, Month::Jan, day), &English).unwrap())
            .collect();
        assert_eq!(
            suffixes,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "31st"]
        );
    }

    #[test]
    fn time_letters() {
        let fmt = |fields: &Fields, pattern: &str| format(pattern, fields, &English).unwrap();
        let afternoon = time_fields(13, 5, 9, 120_000_000);
        assert_eq!(fmt(&afternoon, "hh:mm:ss"), "13:05:09");
        assert_eq!(fmt(&afternoon, "k:mm a"), "1:05 p");
        assert_eq!(fmt(&afternoon, "kk:mm AA"), "01:05 PM");
        assert_eq!(fmt(&afternoon, "hh:mm:ss.FFFFFFFFF"), "13:05:09.12");
        assert_eq!(fmt(&afternoon, "hh:mm:ss.fff"), "13:05:09.120");
        assert_eq!(fmt(&afternoon, "hh:mm:ss.fFF"), "13:05:09.12");

        let midnight = time_fields(0, 30, 0, 0);
        assert_eq!(fmt(&midnight, "k:mm aa"), "12:30 am");
        assert_eq!(fmt(&midnight, "hh:mm:SS.FFF"), "00:30");
        assert_eq!(fmt(&midnight, "hh:mm:ss.FFF"), "00:30:00");
        assert_eq!(fmt(&midnight, "hh:mm:ss.f"), "00:30:00.0");
        assert_eq!(fmt(&time_fields(0, 30, 7, 0), "hh:mm:SS"), "00:30:07");
    }

    #[test]
    fn localized_names() {
        let mut de = HashMap::new();
        de.insert("julFull".to_string(), "Juli".to_string());
        de.insert("thuAbbr".to_string(), "Do".to_string());
        de.insert("quarter".to_string(), "Quartal".to_string());
        let fields = date_fields(2024, Month::Jul, 4);
        assert_eq!(
            format("WWW, D. MMMM YYYY, QQQQ", &fields, &de).unwrap(),
            "Do, 4. Juli 2024, 3rd Quartal"
        );
    }

    #[test]
    fn invalid_patterns() {
        let date = date_fields(2024, Month::Jul, 4);
        for pattern in ["YYY", "MMMMM", "DDDD", "WW", "hhh", "x", "'open", "z"] {
            assert!(
                matches!(format(pattern, &date, &English), Err(Error::InvalidPattern(_))),
                "{pattern}"
            );
        }
        let time = time_fields(1, 2, 3, 0);
        assert_eq!(
            format("YYYY", &time, &English),
            Err(Error::invalid_pattern("'Y' needs a date"))
        );
    }

    #[test]
    fn parses_dates() {
        let parse = |text: &str, pattern: &str| parse(text, pattern, &English)?.date();
        let july_4 = Date::new(2024, Month::Jul, 4).ok();
        assert_eq!(parse("4-Jul-2024", "D-MMM-YYYY"), july_4);
        assert_eq!(parse("04-JULY-2024", "DD-MMMM-YYYY"), july_4);
        assert_eq!(parse("Thursday, July 4th 2024", "WWWW, MMMM DDD YYYY"), july_4);
        assert_eq!(parse("7/4/24", "M/D/YY"), july_4);
        assert_eq!(parse("7/4/94", "M/D/YY"), Date::new(1994, Month::Jul, 4).ok());
        assert_eq!(parse("0024-07-04", "YYYY-MM-DD"), Date::new(24, Month::Jul, 4).ok());
        assert_eq!(parse("4-Jly-2024", "D-MMM-YYYY"), None);
        assert_eq!(parse("4-Jul-2024!", "D-MMM-YYYY"), None);
        assert_eq!(parse("31-Jun-2024", "D-MMM-YYYY"), None);
        assert_eq!(parse("2024-00-01", "YYYY-MM-DD"), None);
    }

    #[test]
    fn parses_times() {
        let parse = |text: &str, pattern: &str| parse(text, pattern, &English)?.time();
        assert_eq!(parse("13:05:09", "hh:mm:ss"), Time::new(13, 5, 9, 0).ok());
        assert_eq!(parse("1:05 PM", "k:mm AA"), Time::new(13, 5, 0, 0).ok());
        assert_eq!(parse("12:05 am", "k:mm aa"), Time::new(0, 5, 0, 0).ok());
        assert_eq!(parse("13:05", "hh:mm:SS"), Time::new(13, 5, 0, 0).ok());
        assert_eq!(parse("13:05:09", "hh:mm:SS"), Time::new(13, 5, 9, 0).ok());
        assert_eq!(
            parse("13:05:09.125", "hh:mm:ss.FFF"),
            Time::new(13, 5, 9, 125_000_000).ok()
        );
        assert_eq!(parse("13:05:09", "hh:mm:ss.FFF"), Time::new(13, 5, 9, 0).ok());
        assert_eq!(parse("25:00:00", "hh:mm:ss"), None);
        assert_eq!(parse("13-05-09", "hh:mm:ss"), None);
    }

    #[test]
    fn parses_zones() {
        let parsed = parse("12:00+05:30", "hh:mmz", &English).unwrap();
        assert_eq!(parsed.offset, Some(19_800));
        let parsed = parse("12:00-0400", "hh:mmz", &English).unwrap();
        assert_eq!(parsed.offset, Some(-14_400));
        let parsed = parse("12:00Z", "hh:mmz", &English).unwrap();
        assert_eq!(parsed.offset, Some(0));
        let parsed = parse("12:00 New_York", "hh:mm zzzz", &English).unwrap();
        assert_eq!(parsed.zone_name.as_deref(), Some("New_York"));
        assert!(parse("12:00 05:00", "hh:mm z", &English).is_none());
    }

    #[test]
    fn quoted_literals_must_match() {
        assert!(parse("2024-07-04T12", "YYYY-MM-DD'T'hh", &English).is_some());
        assert!(parse("2024-07-04X12", "YYYY-MM-DD'T'hh", &English).is_none());
        assert!(parse("'24", "''YY", &English).is_some());
    }
}
