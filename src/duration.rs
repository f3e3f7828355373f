use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_integer::Integer;

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::scale::{Scale, NS_PER_DAY, NS_PER_HR, NS_PER_MILLI, NS_PER_MIN, NS_PER_SEC};

/// An elapsed amount of time as a signed count of nanoseconds. It carries no calendar meaning.
#[derive(Debug, Clone, Copy, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Duration {
    ticks: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration::new(0);
    pub const MIN: Duration = Duration::new(i64::MIN);
    pub const MAX: Duration = Duration::new(i64::MAX);
    pub const ONE_SEC: Duration = Duration::new(NS_PER_SEC);
    pub const ONE_MIN: Duration = Duration::new(NS_PER_MIN);
    pub const ONE_DAY: Duration = Duration::new(NS_PER_DAY);
    pub const NEG_ONE_DAY: Duration = Duration::new(-NS_PER_DAY);

    pub const fn new(ticks: i64) -> Self {
        Self { ticks }
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self::new(millis * NS_PER_MILLI)
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self::new(secs * NS_PER_SEC)
    }

    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Parse the suffix form, e.g. `250ms`, `-3min` or `1.5day`. Fractional values are
    /// floored to a whole nanosecond after multiplying by the unit.
    pub fn parse(s: &str) -> Result<Self> {
        parse_suffixed(s).ok_or_else(|| Error::parse("Duration", s))
    }

    /// Panics for [`Duration::MIN`], which has no positive counterpart.
    pub fn abs(self) -> Self {
        if self.ticks >= 0 {
            self
        } else {
            -self
        }
    }

    // The operators panic on overflow like integer arithmetic in debug builds; these return
    // `None` instead.

    pub fn checked_add(self, rhs: Duration) -> Option<Self> {
        self.ticks.checked_add(rhs.ticks).map(Self::new)
    }

    pub fn checked_sub(self, rhs: Duration) -> Option<Self> {
        self.ticks.checked_sub(rhs.ticks).map(Self::new)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.ticks.checked_neg().map(Self::new)
    }

    pub fn checked_mul(self, rhs: i64) -> Option<Self> {
        self.ticks.checked_mul(rhs).map(Self::new)
    }

    pub fn min(self, other: Self) -> Self {
        if self.ticks <= other.ticks {
            self
        } else {
            other
        }
    }

    pub fn max(self, other: Self) -> Self {
        if self.ticks >= other.ticks {
            self
        } else {
            other
        }
    }

    pub fn clamp(self, min: Self, max: Self) -> Self {
        if self.ticks < min.ticks {
            min
        } else if self.ticks > max.ticks {
            max
        } else {
            self
        }
    }

    /// Round towards zero to a multiple of `accuracy`.
    pub fn floor(self, accuracy: Duration) -> Self {
        let rem = self.ticks % accuracy.ticks;
        if rem == 0 {
            self
        } else {
            Self::new(self.ticks - rem)
        }
    }

    pub fn mul_f64(self, factor: f64) -> Self {
        Self::new((self.ticks as f64 * factor) as i64)
    }

    pub fn div_f64(self, divisor: f64) -> Self {
        Self::new((self.ticks as f64 / divisor) as i64)
    }

    pub fn to_millis(&self) -> i64 {
        self.ticks.div_floor(&NS_PER_MILLI)
    }

    pub fn to_secs(&self) -> i64 {
        self.ticks.div_floor(&NS_PER_SEC)
    }

    pub fn to_mins(&self) -> i64 {
        self.ticks.div_floor(&NS_PER_MIN)
    }

    pub fn to_hours(&self) -> i64 {
        self.ticks.div_floor(&NS_PER_HR)
    }

    pub fn to_days(&self) -> i64 {
        self.ticks.div_floor(&NS_PER_DAY)
    }

    /// Human readable rendering with unit abbreviations looked up in `locale`.
    pub fn to_locale(&self, locale: &dyn Locale) -> String {
        let sign = if self.ticks < 0 { "-" } else { "" };
        format!("{}{}", sign, locale_magnitude(self.ticks.unsigned_abs(), locale))
    }
}

fn locale_magnitude(ticks: u64, locale: &dyn Locale) -> String {
    const NS_PER_MILLI: u64 = crate::scale::NS_PER_MILLI as u64;
    const NS_PER_SEC: u64 = crate::scale::NS_PER_SEC as u64;
    const NS_PER_MIN: u64 = crate::scale::NS_PER_MIN as u64;
    const NS_PER_HR: u64 = crate::scale::NS_PER_HR as u64;
    const NS_PER_DAY: u64 = crate::scale::NS_PER_DAY as u64;

    if ticks < 1000 {
        return format!("{}{}", ticks, locale.get_or("nsAbbr", "ns"));
    }

    // X.XXXms, dropping up to two trailing zeros
    if ticks < 2 * NS_PER_MILLI {
        let ms = ticks / NS_PER_MILLI;
        let us = (ticks - ms * NS_PER_MILLI) / 1000;
        let mut s = format!("{}.{:03}", ms, us);
        for _ in 0..2 {
            if s.ends_with('0') {
                s.pop();
            }
        }
        s.push_str(locale.get_or("msAbbr", "ms"));
        return s;
    }

    if ticks < 2 * NS_PER_SEC {
        return format!("{}{}", ticks / NS_PER_MILLI, locale.get_or("msAbbr", "ms"));
    }

    if ticks < NS_PER_MIN {
        return format!("{}{}", ticks / NS_PER_SEC, locale.get_or("secAbbr", "sec"));
    }

    let days = ticks / NS_PER_DAY;
    let hr = ticks % NS_PER_DAY / NS_PER_HR;
    let min = ticks % NS_PER_HR / NS_PER_MIN;
    let sec = ticks % NS_PER_MIN / NS_PER_SEC;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        let unit = if days == 1 {
            locale.get_or("dayAbbr", "day")
        } else {
            locale.get_or("daysAbbr", "days")
        };
        parts.push(format!("{}{}", days, unit));
    }
    if hr > 0 {
        parts.push(format!("{}{}", hr, locale.get_or("hourAbbr", "hr")));
    }
    if min > 0 {
        parts.push(format!("{}{}", min, locale.get_or("minAbbr", "min")));
    }
    if sec > 0 {
        parts.push(format!("{}{}", sec, locale.get_or("secAbbr", "sec")));
    }
    parts.join(" ")
}

fn parse_suffixed(s: &str) -> Option<Duration> {
    let scale = Scale::from_suffix(s)?;
    let number = &s[..s.len() - scale.suffix().len()];
    let (negative, number) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number),
    };
    let (whole, frac) = match number.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (number, None),
    };
    if !is_digits(whole) {
        return None;
    }

    let mult = scale.ticks() as i128;
    let mut ticks = whole.parse::<i128>().ok()?.checked_mul(mult)?;
    if let Some(frac) = frac {
        if !is_digits(frac) {
            return None;
        }
        // Digits past the 20th cannot move the result by a whole nanosecond.
        let frac = &frac[..frac.len().min(20)];
        let denominator = 10i128.pow(frac.len() as u32);
        let numerator = frac.parse::<i128>().ok()? * mult;
        // Floor of the signed value: round the magnitude up when negative.
        ticks += if negative {
            (numerator + denominator - 1) / denominator
        } else {
            numerator / denominator
        };
    }
    if negative {
        ticks = -ticks;
    }
    i64::try_from(ticks).ok().map(Duration::new)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Duration::parse(s)
    }
}

impl fmt::Display for Duration {
    /// Canonical short form: the largest unit that divides a whole-millisecond value, or
    /// raw nanoseconds otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ticks = self.ticks;
        if ticks == 0 {
            return f.write_str("0ns");
        }
        if ticks % NS_PER_MILLI == 0 {
            for scale in Scale::DESCENDING {
                if ticks % scale.ticks() == 0 {
                    return write!(f, "{}{}", ticks / scale.ticks(), scale.suffix());
                }
            }
        }
        write!(f, "{}ns", ticks)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("duration addition overflow")
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("duration subtraction overflow")
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().expect("duration negation overflow")
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs).expect("duration multiplication overflow")
    }
}

impl Div<i64> for Duration {
    type Output = Self;

    fn div(self, rhs: i64) -> Self::Output {
        Self::new(self.ticks / rhs)
    }
}
