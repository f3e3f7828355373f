//! Text forms: `YYYY-MM-DD` dates, `hh:mm:ss.FFFFFFFFF` times, ISO 8601 date times and
//! durations.

use std::fmt;

use crate::gregorian::{Date, Month, Time};

mod date_time;
mod duration;

/// Cursor over ASCII text for the fixed-width date and time grammars. Every method returns
/// `None` without a usable value; callers turn that into a parse error carrying the whole
/// input.
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Scanner { text, pos: 0 }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.text.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// The unread remainder.
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn expect(&mut self, b: u8) -> Option<()> {
        if self.peek() == Some(b) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    /// Exactly `n` decimal digits.
    pub(crate) fn digits(&mut self, n: usize) -> Option<u32> {
        let mut value = 0u32;
        for _ in 0..n {
            let b = self.peek().filter(u8::is_ascii_digit)?;
            value = value * 10 + (b - b'0') as u32;
            self.pos += 1;
        }
        Some(value)
    }

    /// `.` followed by 1 to 9 digits, as nanoseconds.
    fn fraction(&mut self) -> Option<u32> {
        self.expect(b'.')?;
        let mut nanos = 0u32;
        let mut count = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            if count == 9 {
                return None;
            }
            nanos = nanos * 10 + (b - b'0') as u32;
            count += 1;
            self.pos += 1;
        }
        if count == 0 {
            return None;
        }
        Some(nanos * 10u32.pow(9 - count))
    }

    /// `YYYY-MM-DD`
    pub(crate) fn date(&mut self) -> Option<Date> {
        let year = self.digits(4)?;
        self.expect(b'-')?;
        let month = self.digits(2)?;
        self.expect(b'-')?;
        let day = self.digits(2)?;
        let month = Month::from_ordinal((month as u8).checked_sub(1)?)?;
        Date::new(year as i32, month, day as u8).ok()
    }

    /// `hh:mm:ss` with an optional fraction.
    pub(crate) fn time(&mut self) -> Option<Time> {
        let hour = self.digits(2)?;
        self.expect(b':')?;
        let minute = self.digits(2)?;
        self.expect(b':')?;
        let second = self.digits(2)?;
        let nanos = if self.peek() == Some(b'.') {
            self.fraction()?
        } else {
            0
        };
        Time::new(hour as u8, minute as u8, second as u8, nanos).ok()
    }

    /// `Z` or `±hh:mm`, as seconds east of UTC.
    pub(crate) fn offset(&mut self) -> Option<i32> {
        let sign = match self.peek()? {
            b'Z' => {
                self.pos += 1;
                return Some(0);
            }
            b'+' => 1,
            b'-' => -1,
            _ => return None,
        };
        self.pos += 1;
        let hours = self.digits(2)?;
        self.expect(b':')?;
        let minutes = self.digits(2)?;
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(sign * (hours * 3600 + minutes * 60) as i32)
    }
}

/// `.` and the fraction of a second without trailing zeros, or nothing for a whole second.
pub(crate) fn write_fraction(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    if nanos == 0 {
        return Ok(());
    }
    let digits = format!("{nanos:09}");
    write!(f, ".{}", digits.trim_end_matches('0'))
}

pub(crate) fn write_offset(f: &mut fmt::Formatter<'_>, offset: i32) -> fmt::Result {
    f.write_str(&offset_text(offset))
}

/// `Z` for UTC, otherwise `±hh:mm`.
pub(crate) fn offset_text(offset: i32) -> String {
    if offset == 0 {
        return "Z".to_string();
    }
    let sign = if offset < 0 { '-' } else { '+' };
    let offset = offset.unsigned_abs();
    format!("{}{:02}:{:02}", sign, offset / 3600, offset / 60 % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_offsets() {
        assert_eq!(Scanner::new("Z").offset(), Some(0));
        assert_eq!(Scanner::new("+05:30").offset(), Some(19_800));
        assert_eq!(Scanner::new("-04:00").offset(), Some(-14_400));
        assert_eq!(Scanner::new("-0400").offset(), None);
        assert_eq!(Scanner::new("+05:60").offset(), None);
        assert_eq!(Scanner::new("").offset(), None);
    }

    #[test]
    fn scans_fractions() {
        assert_eq!(Scanner::new(".5").fraction(), Some(500_000_000));
        assert_eq!(Scanner::new(".000000001").fraction(), Some(1));
        assert_eq!(Scanner::new(".1234567891").fraction(), None);
        assert_eq!(Scanner::new(".").fraction(), None);
    }

    #[test]
    fn leaves_the_rest() {
        let mut scanner = Scanner::new("2024-01-02T03");
        assert!(scanner.date().is_some());
        assert_eq!(scanner.rest(), "T03");
        assert!(!scanner.at_end());
    }
}
