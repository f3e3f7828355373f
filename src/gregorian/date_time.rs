use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use num_integer::Integer;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::gregorian::{tables, week_number, Date, DateTimeBuilder, Month, Time, Weekday};
use crate::instant::{check_ticks, compose, decompose, CivilFields};
use crate::scale::NS_PER_MILLI;
use crate::time_zone::TimeZone;

/// Milliseconds from the Unix epoch to 2000-01-01T00:00:00Z.
const UNIX_EPOCH_MILLIS_TO_2000: i64 = 946_684_800_000;

/// An instant together with the zone it is viewed in.
///
/// The civil fields are worked out once, when the value is created. Two date times are equal
/// when they denote the same instant, whatever their zones.
#[derive(Debug, Clone)]
pub struct DateTime {
    ticks: i64,
    zone: Arc<TimeZone>,
    fields: CivilFields,
}

impl DateTime {
    pub fn builder() -> DateTimeBuilder {
        DateTimeBuilder::new()
    }

    /// The instant showing `date` and `time` in `zone`.
    pub fn from_civil(date: &Date, time: &Time, zone: Arc<TimeZone>) -> Result<Self> {
        let (ticks, _) = compose(date, time, &zone, None)?;
        Self::from_ticks(ticks, zone)
    }

    /// The instant `ticks` nanoseconds after 2000-01-01T00:00:00Z.
    pub fn from_ticks(ticks: i64, zone: Arc<TimeZone>) -> Result<Self> {
        check_ticks(ticks)?;
        let fields = decompose(ticks, &zone);
        Ok(DateTime {
            ticks,
            zone,
            fields,
        })
    }

    pub fn now(zone: Arc<TimeZone>) -> Result<Self> {
        let since_unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|err| Error::out_of_range(format!("system clock before 1970: {err}")))?;
        let unix_nanos = i64::try_from(since_unix.as_nanos())
            .map_err(|_| Error::out_of_range("system clock out of range"))?;
        Self::from_ticks(unix_nanos - UNIX_EPOCH_MILLIS_TO_2000 * NS_PER_MILLI, zone)
    }

    pub fn now_utc() -> Result<Self> {
        Self::now(TimeZone::utc())
    }

    pub fn from_unix_millis(millis: i64, zone: Arc<TimeZone>) -> Result<Self> {
        let ticks = millis
            .checked_sub(UNIX_EPOCH_MILLIS_TO_2000)
            .and_then(|millis| millis.checked_mul(NS_PER_MILLI))
            .ok_or_else(|| Error::out_of_range(format!("millis {millis}")))?;
        Self::from_ticks(ticks, zone)
    }

    pub fn to_unix_millis(&self) -> i64 {
        self.ticks.div_floor(&NS_PER_MILLI) + UNIX_EPOCH_MILLIS_TO_2000
    }

    /// Nanoseconds since 2000-01-01T00:00:00Z.
    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    pub fn zone(&self) -> &Arc<TimeZone> {
        &self.zone
    }

    pub fn date(&self) -> Date {
        Date::from_parts(self.fields.year, self.month(), self.fields.day)
    }

    pub fn time(&self) -> Time {
        Time::from_parts(
            self.fields.hour,
            self.fields.min,
            self.fields.sec,
            self.fields.nanos,
        )
    }

    pub fn year(&self) -> i32 {
        self.fields.year
    }

    pub fn month(&self) -> Month {
        Month::ALL[self.fields.month as usize]
    }

    pub fn day(&self) -> u8 {
        self.fields.day
    }

    pub fn hour(&self) -> u8 {
        self.fields.hour
    }

    pub fn minute(&self) -> u8 {
        self.fields.min
    }

    pub fn second(&self) -> u8 {
        self.fields.sec
    }

    pub fn nanosecond(&self) -> u32 {
        self.fields.nanos
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::ALL[self.fields.weekday as usize]
    }

    pub fn is_dst(&self) -> bool {
        self.fields.dst
    }

    /// The zone abbreviation in effect, such as `EST` or `EDT`.
    pub fn tz_abbr(&self) -> &str {
        self.zone.abbr(self.fields.year, self.fields.dst)
    }

    /// Total offset from UTC, including any daylight saving.
    pub fn offset(&self) -> Duration {
        Duration::from_secs(self.offset_secs() as i64)
    }

    pub(crate) fn offset_secs(&self) -> i32 {
        let rule = self.zone.rule(self.fields.year);
        if self.fields.dst {
            rule.offset() + rule.dst_offset()
        } else {
            rule.offset()
        }
    }

    /// 1-based day of the year.
    pub fn day_of_year(&self) -> u16 {
        tables::day_of_year(self.fields.year, self.fields.month, self.fields.day) + 1
    }

    pub fn week_of_year(&self, start_of_week: Weekday) -> u8 {
        week_number(self.fields.year, self.month(), self.fields.day, start_of_week)
    }

    /// Hours on the civil date of this instant: 23 when daylight time starts that day, 25 when
    /// it ends and 24 otherwise.
    pub fn hours_in_day(&self) -> u8 {
        let CivilFields {
            year, month, day, ..
        } = self.fields;
        let rule = self.zone.rule(year);
        if let (Some(start), Some(end)) = (rule.dst_start(), rule.dst_end()) {
            if rule.is_transition_date(start, year, month, day) {
                return 23;
            }
            if rule.is_transition_date(end, year, month, day) {
                return 25;
            }
        }
        24
    }

    pub fn is_midnight(&self) -> bool {
        self.time().is_midnight()
    }

    pub fn plus(&self, d: Duration) -> Result<Self> {
        let ticks = self
            .ticks
            .checked_add(d.ticks())
            .ok_or_else(|| Error::out_of_range(format!("{self} + {d}")))?;
        Self::from_ticks(ticks, self.zone.clone())
    }

    pub fn minus(&self, d: Duration) -> Result<Self> {
        let neg = d
            .checked_neg()
            .ok_or_else(|| Error::out_of_range(format!("{self} - {d}")))?;
        self.plus(neg)
    }

    /// Elapsed time from `other` to `self`.
    pub fn minus_date_time(&self, other: &DateTime) -> Duration {
        Duration::new(self.ticks - other.ticks)
    }

    /// The same instant viewed in `zone`. When either side is the relative zone the civil
    /// fields are kept instead, so the instant changes.
    pub fn to_time_zone(&self, zone: Arc<TimeZone>) -> Result<Self> {
        if *zone == *self.zone {
            return Ok(self.clone());
        }
        if zone.is_rel() || self.zone.is_rel() {
            return Self::from_civil(&self.date(), &self.time(), zone);
        }
        Self::from_ticks(self.ticks, zone)
    }

    pub fn to_utc(&self) -> Result<Self> {
        self.to_time_zone(TimeZone::utc())
    }

    /// The same civil fields in the relative zone.
    pub fn to_rel(&self) -> Result<Self> {
        self.to_time_zone(TimeZone::rel())
    }

    /// Round down to a multiple of `accuracy` counted from 2000-01-01T00:00:00Z. Use
    /// [`midnight`](Self::midnight) for the start of the local day.
    pub fn floor(&self, accuracy: Duration) -> Result<Self> {
        if accuracy.ticks() <= 0 {
            return Err(Error::out_of_range(format!("accuracy {accuracy}")));
        }
        let rem = self.ticks.mod_floor(&accuracy.ticks());
        if rem == 0 {
            return Ok(self.clone());
        }
        Self::from_ticks(self.ticks - rem, self.zone.clone())
    }

    /// The start of this date in this zone.
    pub fn midnight(&self) -> Result<Self> {
        Self::from_civil(&self.date(), &Time::MIDNIGHT, self.zone.clone())
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.ticks == other.ticks
    }
}

impl Eq for DateTime {}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticks.cmp(&other.ticks)
    }
}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticks.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::{MAX_TICKS, MIN_TICKS};
    use crate::scale::{NS_PER_DAY, NS_PER_HR, NS_PER_SEC};

    fn zone(name: &str) -> Arc<TimeZone> {
        TimeZone::from_name(name).unwrap()
    }

    fn at(zone: Arc<TimeZone>, year: i32, month: Month, day: u8, h: u8, m: u8) -> DateTime {
        let date = Date::new(year, month, day).unwrap();
        let time = Time::new(h, m, 0, 0).unwrap();
        DateTime::from_civil(&date, &time, zone).unwrap()
    }

    #[test]
    fn civil_fields() {
        let dt = at(zone("New_York"), 2024, Month::Jul, 4, 12, 30);
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), Month::Jul);
        assert_eq!(dt.day(), 4);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 0);
        assert_eq!(dt.weekday(), Weekday::Thu);
        assert!(dt.is_dst());
        assert_eq!(dt.tz_abbr(), "EDT");
        assert_eq!(dt.offset(), Duration::from_secs(-4 * 3600));
        assert_eq!(dt.day_of_year(), 186);
        assert_eq!(dt.week_of_year(Weekday::Sun), 27);
        assert_eq!(dt.date(), Date::new(2024, Month::Jul, 4).unwrap());
        assert_eq!(dt.time(), Time::new(12, 30, 0, 0).unwrap());

        let winter = at(zone("New_York"), 2024, Month::Jan, 4, 12, 30);
        assert!(!winter.is_dst());
        assert_eq!(winter.tz_abbr(), "EST");
    }

    #[test]
    fn ticks_range() {
        assert!(DateTime::from_ticks(MIN_TICKS, TimeZone::utc()).is_ok());
        assert!(DateTime::from_ticks(MIN_TICKS - 1, TimeZone::utc()).is_err());
        assert!(DateTime::from_ticks(MAX_TICKS, TimeZone::utc()).is_err());
        let last = DateTime::from_ticks(MAX_TICKS - 1, TimeZone::utc()).unwrap();
        assert_eq!(last.year(), 2099);
        assert!(last.plus(Duration::new(1)).is_err());
    }

    #[test]
    fn equality_ignores_zone() {
        let ny = at(zone("New_York"), 2024, Month::Jul, 4, 12, 0);
        let london = ny.to_time_zone(zone("London")).unwrap();
        assert_eq!(london.hour(), 17);
        assert_eq!(london.tz_abbr(), "BST");
        assert_eq!(ny, london);
        assert!(ny < ny.plus(Duration::new(1)).unwrap());
    }

    #[test]
    fn relative_zone_keeps_civil_fields() {
        let ny = at(zone("New_York"), 2024, Month::Jul, 4, 12, 0);
        let rel = ny.to_rel().unwrap();
        assert_eq!((rel.hour(), rel.day()), (12, 4));
        assert_ne!(rel, ny);
        let tokyo = rel.to_time_zone(zone("Tokyo")).unwrap();
        assert_eq!((tokyo.hour(), tokyo.day()), (12, 4));
        assert_eq!(ny.to_utc().unwrap().hour(), 16);
    }

    #[test]
    fn hours_in_day() {
        let ny = zone("New_York");
        assert_eq!(at(ny.clone(), 2024, Month::Mar, 10, 12, 0).hours_in_day(), 23);
        assert_eq!(at(ny.clone(), 2024, Month::Nov, 3, 12, 0).hours_in_day(), 25);
        assert_eq!(at(ny.clone(), 2024, Month::Nov, 4, 12, 0).hours_in_day(), 24);
        assert_eq!(at(TimeZone::utc(), 2024, Month::Mar, 10, 12, 0).hours_in_day(), 24);

        // The day really is that long.
        let start = at(ny.clone(), 2024, Month::Nov, 3, 0, 0);
        let end = at(ny, 2024, Month::Nov, 4, 0, 0);
        assert_eq!(end.minus_date_time(&start), Duration::new(25 * NS_PER_HR));
    }

    #[test]
    fn arithmetic_crosses_transitions() {
        let before = at(zone("New_York"), 2024, Month::Mar, 10, 1, 30);
        let after = before.plus(Duration::from_secs(3600)).unwrap();
        assert_eq!((after.hour(), after.minute()), (3, 30));
        assert!(after.is_dst());
        assert_eq!(after.minus(Duration::from_secs(3600)).unwrap(), before);
    }

    #[test]
    fn floor_and_midnight() {
        let dt = at(zone("New_York"), 2024, Month::Jul, 4, 12, 34);
        let floored = dt.floor(Duration::from_secs(3600)).unwrap();
        assert_eq!((floored.hour(), floored.minute()), (12, 0));
        let utc_day = dt.floor(Duration::ONE_DAY).unwrap();
        assert_eq!(utc_day.to_utc().unwrap().hour(), 0);
        assert!(dt.floor(Duration::ZERO).is_err());

        let midnight = dt.midnight().unwrap();
        assert!(midnight.is_midnight());
        assert_eq!(midnight.day(), 4);
        assert_eq!(dt.minus_date_time(&midnight), Duration::new(12 * NS_PER_HR + 34 * 60 * NS_PER_SEC));

        let before_epoch = DateTime::from_ticks(-NS_PER_DAY - 1, TimeZone::utc()).unwrap();
        assert_eq!(before_epoch.floor(Duration::ONE_DAY).unwrap().ticks(), -2 * NS_PER_DAY);
    }

    #[test]
    fn unix_millis() {
        let epoch = DateTime::from_unix_millis(0, TimeZone::utc()).unwrap();
        assert_eq!((epoch.year(), epoch.month(), epoch.day()), (1970, Month::Jan, 1));
        assert_eq!(epoch.to_unix_millis(), 0);
        let y2k = DateTime::from_ticks(0, TimeZone::utc()).unwrap();
        assert_eq!(y2k.to_unix_millis(), 946_684_800_000);
        let dt = DateTime::from_ticks(-1, TimeZone::utc()).unwrap();
        assert_eq!(dt.to_unix_millis(), 946_684_799_999);
    }

    #[test]
    fn extreme_inputs_are_range_errors() {
        for millis in [i64::MIN, i64::MAX] {
            assert!(matches!(
                DateTime::from_unix_millis(millis, TimeZone::utc()),
                Err(Error::OutOfRange(_))
            ));
        }
        let dt = at(TimeZone::utc(), 2024, Month::Jul, 4, 12, 0);
        assert!(matches!(dt.minus(Duration::MIN), Err(Error::OutOfRange(_))));
        assert!(matches!(dt.plus(Duration::MAX), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn now_is_in_range() {
        let now = DateTime::now_utc().unwrap();
        assert!(now.year() >= 2024);
        let today = Date::today(zone("Tokyo")).unwrap();
        assert!(today.year() >= 2024);
    }
}
