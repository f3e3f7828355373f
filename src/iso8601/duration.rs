use std::fmt;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::scale::{NS_PER_DAY, NS_PER_HR, NS_PER_MIN, NS_PER_SEC, SEC_PER_DAY, SEC_PER_HR, SEC_PER_MIN};

impl Duration {
    /// ISO 8601 form using days, hours, minutes and seconds, e.g. `P1DT1H1M1S` or `-PT0.5S`.
    pub fn to_iso(&self) -> String {
        IsoDuration(*self).to_string()
    }

    /// Parse `[+-]P[nD][T[nH][nM][n[.f]S]]`. A `T` must be followed by at least one
    /// component. Fractions of a second are read to nanosecond precision and any further
    /// digits are ignored.
    pub fn from_iso(s: &str) -> Result<Self> {
        parse_iso(s).ok_or_else(|| Error::parse("ISO 8601 Duration", s))
    }
}

struct IsoDuration(Duration);

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ticks = self.0.ticks();
        if ticks == 0 {
            return f.write_str("PT0S");
        }
        if ticks < 0 {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        let abs = ticks.unsigned_abs();
        let mut sec = abs / NS_PER_SEC as u64;
        let frac = abs % NS_PER_SEC as u64;
        if sec >= SEC_PER_DAY as u64 {
            write!(f, "{}D", sec / SEC_PER_DAY as u64)?;
            sec %= SEC_PER_DAY as u64;
        }
        if sec == 0 && frac == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if sec >= SEC_PER_HR as u64 {
            write!(f, "{}H", sec / SEC_PER_HR as u64)?;
            sec %= SEC_PER_HR as u64;
        }
        if sec >= SEC_PER_MIN as u64 {
            write!(f, "{}M", sec / SEC_PER_MIN as u64)?;
            sec %= SEC_PER_MIN as u64;
        }
        if sec == 0 && frac == 0 {
            return Ok(());
        }
        write!(f, "{sec}")?;
        if frac != 0 {
            let digits = format!("{frac:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        f.write_str("S")
    }
}

/// Single pass over the text, one byte of lookahead.
struct IsoParser<'a> {
    bytes: &'a [u8],
    off: usize,
    cur: Option<u8>,
    cur_is_digit: bool,
}

impl<'a> IsoParser<'a> {
    fn new(s: &'a str) -> Self {
        let bytes = s.as_bytes();
        let cur = bytes.first().copied();
        IsoParser {
            bytes,
            off: 0,
            cur,
            cur_is_digit: cur.map_or(false, |b| b.is_ascii_digit()),
        }
    }

    fn consume(&mut self) {
        self.off += 1;
        self.cur = self.bytes.get(self.off).copied();
        self.cur_is_digit = self.cur.map_or(false, |b| b.is_ascii_digit());
    }

    fn consume_char(&mut self, ch: u8) -> Option<()> {
        if self.cur != Some(ch) {
            return None;
        }
        self.consume();
        Some(())
    }

    fn digit(&self) -> i64 {
        self.cur.map_or(0, |b| (b - b'0') as i64)
    }

    /// One or more digits.
    fn num(&mut self) -> Option<i64> {
        if !self.cur_is_digit {
            return None;
        }
        let mut num: i64 = 0;
        while self.cur_is_digit {
            num = num.checked_mul(10)?.checked_add(self.digit())?;
            self.consume();
        }
        Some(num)
    }

    /// Fraction digits as nanoseconds. Digits past the ninth are consumed but carry no weight.
    fn frac(&mut self) -> i64 {
        let mut ticks = 0;
        let mut weight = 100_000_000;
        while self.cur_is_digit {
            ticks += self.digit() * weight;
            weight /= 10;
            self.consume();
        }
        ticks
    }
}

// Magnitudes are summed wider than a tick count so that `Duration::MIN`, whose magnitude has no
// positive `i64`, still parses.
fn accumulate(ticks: i128, num: i64, unit: i64) -> Option<i128> {
    ticks.checked_add(num as i128 * unit as i128)
}

fn parse_iso(s: &str) -> Option<Duration> {
    let mut p = IsoParser::new(s);
    let neg = match p.cur {
        Some(b'-') => {
            p.consume();
            true
        }
        Some(b'+') => {
            p.consume();
            false
        }
        _ => false,
    };
    let signed = |ticks: i128| {
        let ticks = if neg { -ticks } else { ticks };
        i64::try_from(ticks).ok().map(Duration::new)
    };

    p.consume_char(b'P')?;
    p.cur?;

    let mut ticks = 0;
    if p.cur != Some(b'T') {
        ticks = accumulate(ticks, p.num()?, NS_PER_DAY)?;
        p.consume_char(b'D')?;
        if p.cur.is_none() {
            return signed(ticks);
        }
    }

    p.consume_char(b'T')?;
    let mut num = p.num()?;
    for (unit, scale) in [(b'H', NS_PER_HR), (b'M', NS_PER_MIN)] {
        if p.cur == Some(unit) {
            p.consume();
            ticks = accumulate(ticks, num, scale)?;
            if p.cur.is_none() {
                return signed(ticks);
            }
            num = p.num()?;
        }
    }

    ticks = accumulate(ticks, num, NS_PER_SEC)?;
    if p.cur == Some(b'.') {
        p.consume();
        if !p.cur_is_digit {
            return None;
        }
        ticks = ticks.checked_add(p.frac() as i128)?;
    }
    p.consume_char(b'S')?;
    if p.cur.is_some() {
        return None;
    }
    signed(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_hour_minute_second_round_trip() {
        let d = Duration::new(90_061_000_000_000);
        assert_eq!(d.to_iso(), "P1DT1H1M1S");
        assert_eq!(Duration::from_iso(&d.to_iso()), Ok(d));
    }

    #[test]
    fn extremes_round_trip() {
        for d in [Duration::MIN, Duration::MAX, Duration::MIN + Duration::new(1)] {
            assert_eq!(Duration::from_iso(&d.to_iso()), Ok(d));
        }
        assert!(Duration::from_iso("PT9223372036.854775808S").is_err());
        assert!(Duration::from_iso("-PT9223372036.854775809S").is_err());
    }

    #[test]
    fn formats() {
        assert_eq!(Duration::ZERO.to_iso(), "PT0S");
        assert_eq!(Duration::ONE_DAY.to_iso(), "P1D");
        assert_eq!(Duration::from_secs(3600).to_iso(), "PT1H");
        assert_eq!(Duration::ONE_MIN.to_iso(), "PT1M");
        assert_eq!(Duration::from_secs(61).to_iso(), "PT1M1S");
        assert_eq!(Duration::from_millis(-500).to_iso(), "-PT0.5S");
        assert_eq!(Duration::new(1).to_iso(), "PT0.000000001S");
        assert_eq!((Duration::ONE_DAY * 3 + Duration::new(10)).to_iso(), "P3DT0.00000001S");
        assert_eq!(Duration::MIN.to_iso(), "-P106751DT23H47M16.854775808S");
    }

    #[test]
    fn parses() {
        assert_eq!(Duration::from_iso("P2D"), Ok(Duration::ONE_DAY * 2));
        assert_eq!(Duration::from_iso("PT36H"), Ok(Duration::from_secs(36 * 3600)));
        assert_eq!(Duration::from_iso("+PT5M"), Ok(Duration::from_secs(300)));
        assert_eq!(Duration::from_iso("-P1DT12H"), Ok(-Duration::from_secs(36 * 3600)));
        assert_eq!(Duration::from_iso("PT0.25S"), Ok(Duration::from_millis(250)));
        assert_eq!(Duration::from_iso("PT1H30S"), Ok(Duration::from_secs(3630)));
        assert_eq!(
            Duration::from_iso("PT1.1234567899S"),
            Ok(Duration::new(1_123_456_789))
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for s in [
            "", "P", "PT", "5D", "P5", "PT5", "P1DT", "PT1S5M", "PT1M2H", "PT.5S", "P-1D",
            "PT1.S", "PT1S ", "p1d", "P1D2", "P99999999999999999999D",
        ] {
            assert_eq!(
                Duration::from_iso(s),
                Err(Error::parse("ISO 8601 Duration", s)),
                "{s}"
            );
        }
    }
}
