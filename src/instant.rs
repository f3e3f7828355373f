//! Conversion between instants and civil fields in a zone.
//!
//! An instant is a count of nanosecond ticks since 2000-01-01T00:00:00Z. Going from civil
//! fields to an instant is direct once the offset is known. Going the other way is harder
//! because the daylight offset depends on the civil time being computed, so
//! [`decompose`] refines its answer in up to three passes.

use tracing::trace;

use crate::error::{Error, Result};
use crate::gregorian::{check_year, tables, Date, Time};
use crate::scale::{NS_PER_DAY, NS_PER_SEC};
use crate::time_zone::TimeZone;
use crate::zoneinfo::rule::Rule;

/// Ticks of 1901-01-01T00:00:00Z, the earliest valid instant.
pub(crate) const MIN_TICKS: i64 = -3_124_137_600_000_000_000;
/// Ticks of 2100-01-01T00:00:00Z, the first instant past the valid range.
pub(crate) const MAX_TICKS: i64 = 3_155_760_000_000_000_000;

pub(crate) fn check_ticks(ticks: i64) -> Result<()> {
    if !(MIN_TICKS..MAX_TICKS).contains(&ticks) {
        return Err(Error::out_of_range(format!(
            "Ticks out of range 1901 to 2099: {ticks}"
        )));
    }
    Ok(())
}

/// Everything a [`DateTime`](crate::DateTime) caches about its instant in its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CivilFields {
    pub(crate) year: i32,
    /// 0-11
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) min: u8,
    pub(crate) sec: u8,
    pub(crate) nanos: u32,
    /// 0 = Sunday
    pub(crate) weekday: u8,
    pub(crate) dst: bool,
}

/// A tick count split into UTC-style calendar fields, before any zone logic.
struct Split {
    year: i32,
    month: u8,
    day: u8,
    /// Nanoseconds since midnight.
    time_of_day: i64,
}

impl Split {
    fn of(ticks: i64) -> Split {
        let year = tables::ticks_to_year(ticks);
        let into_year = ticks - tables::year_ticks(year);
        let (month, day) = tables::month_and_day(year, (into_year / NS_PER_DAY) as u16);
        Split {
            year,
            month,
            day,
            time_of_day: into_year % NS_PER_DAY,
        }
    }

    fn seconds_of_day(&self) -> i32 {
        (self.time_of_day / NS_PER_SEC) as i32
    }

    fn dst_offset(&self, rule: &Rule) -> i32 {
        rule.dst_offset_at(self.year, self.month, self.day, self.seconds_of_day())
    }

    fn into_fields(self, dst: bool) -> CivilFields {
        let secs = self.seconds_of_day();
        CivilFields {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: (secs / 3600) as u8,
            min: (secs / 60 % 60) as u8,
            sec: (secs % 60) as u8,
            nanos: (self.time_of_day % NS_PER_SEC) as u32,
            weekday: (tables::first_weekday(self.year, self.month) + self.day - 1) % 7,
            dst,
        }
    }
}

/// Civil fields of `ticks` in `zone`. `ticks` must be within the valid range.
pub(crate) fn decompose(ticks: i64, zone: &TimeZone) -> CivilFields {
    let rule = zone.rule(tables::ticks_to_year(ticks));

    // Assume standard time first.
    let mut working = ticks + rule.offset() as i64 * NS_PER_SEC;
    let mut split = Split::of(working);
    let dst_offset = split.dst_offset(rule);
    if dst_offset == 0 {
        return split.into_fields(false);
    }

    working += dst_offset as i64 * NS_PER_SEC;
    split = Split::of(working);
    if rule.is_wall_time() && split.dst_offset(rule) == 0 {
        // Moving to daylight time crossed the wall-clock end of daylight time, so this is
        // the second pass through the repeated hour.
        trace!(ticks, zone = zone.name(), "instant is past the end of daylight time");
        working -= dst_offset as i64 * NS_PER_SEC;
        return Split::of(working).into_fields(false);
    }
    split.into_fields(true)
}

/// Ticks of a civil date and time in `zone`, and whether daylight time applies.
///
/// `known_offset` is the total offset from UTC in seconds when the caller already knows it,
/// for example from a parsed `-04:00`. Otherwise the zone's rules decide: a time in the hour
/// repeated when daylight time ends resolves to the daylight reading, and a time skipped when
/// daylight time starts is taken as a daylight time.
pub(crate) fn compose(
    date: &Date,
    time: &Time,
    zone: &TimeZone,
    known_offset: Option<i32>,
) -> Result<(i64, bool)> {
    let year = date.year();
    check_year(year)?;
    let month = date.month().ordinal();
    let day = date.day();
    let time_of_day = time.seconds_of_day();

    let local = tables::year_ticks(year)
        + tables::day_of_year(year, month, day) as i64 * NS_PER_DAY
        + time_of_day as i64 * NS_PER_SEC
        + time.nanosecond() as i64;
    let rule = zone.rule(year);

    let (ticks, dst) = match known_offset {
        Some(offset) => (local - offset as i64 * NS_PER_SEC, offset != rule.offset()),
        None => {
            let standard = local - rule.offset() as i64 * NS_PER_SEC;
            let dst_offset = rule.dst_offset_at(year, month, day, time_of_day);
            if dst_offset != 0 {
                (standard - dst_offset as i64 * NS_PER_SEC, true)
            } else {
                match repeated_daylight_reading(rule, zone, standard, date, time) {
                    Some(ticks) => (ticks, true),
                    None => (standard, false),
                }
            }
        }
    };
    check_ticks(ticks)?;
    Ok((ticks, dst))
}

/// On the day daylight time ends, the standard-time instant of a civil time may have an
/// earlier daylight-time twin showing the same fields. Returns that twin.
fn repeated_daylight_reading(
    rule: &Rule,
    zone: &TimeZone,
    standard: i64,
    date: &Date,
    time: &Time,
) -> Option<i64> {
    let end = rule.dst_end()?;
    let (year, month, day) = (date.year(), date.month().ordinal(), date.day());
    if !rule.is_transition_date(end, year, month, day) {
        return None;
    }
    let candidate = standard - rule.dst_offset() as i64 * NS_PER_SEC;
    check_ticks(candidate).ok()?;
    let fields = decompose(candidate, zone);
    let same = fields.dst
        && fields.year == year
        && fields.month == month
        && fields.day == day
        && fields.hour == time.hour()
        && fields.min == time.minute()
        && fields.sec == time.second();
    same.then_some(candidate)
}
