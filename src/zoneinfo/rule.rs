use std::cmp::Ordering;

use crate::gregorian::{tables, Month, Weekday};
use crate::scale::SEC_PER_DAY;

/// How a [`DstTime`] picks its day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMode {
    /// The fixed day `on_day`.
    ExactDay,
    /// The last `on_weekday` of the month.
    LastWeekday,
    /// The first `on_weekday` on or after `on_day`.
    OnOrAfter,
    /// The last `on_weekday` on or before `on_day`.
    OnOrBefore,
}

impl OnMode {
    pub(crate) fn from_code(code: u8) -> Option<OnMode> {
        match code {
            b'd' => Some(OnMode::ExactDay),
            b'l' => Some(OnMode::LastWeekday),
            b'>' => Some(OnMode::OnOrAfter),
            b'<' => Some(OnMode::OnOrBefore),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            OnMode::ExactDay => 'd',
            OnMode::LastWeekday => 'l',
            OnMode::OnOrAfter => '>',
            OnMode::OnOrBefore => '<',
        }
    }
}

/// Which clock a [`DstTime`]'s time of day is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtMode {
    Wall,
    Standard,
    Universal,
}

impl AtMode {
    pub(crate) fn from_code(code: u8) -> Option<AtMode> {
        match code {
            b'w' => Some(AtMode::Wall),
            b's' => Some(AtMode::Standard),
            b'u' => Some(AtMode::Universal),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            AtMode::Wall => 'w',
            AtMode::Standard => 's',
            AtMode::Universal => 'u',
        }
    }
}

/// The moment in a year when daylight saving time starts or ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DstTime {
    pub(crate) month: Month,
    pub(crate) on_mode: OnMode,
    pub(crate) on_weekday: Weekday,
    pub(crate) on_day: u8,
    pub(crate) at_time: i32,
    pub(crate) at_mode: AtMode,
}

impl DstTime {
    pub fn month(&self) -> Month {
        self.month
    }

    pub fn on_mode(&self) -> OnMode {
        self.on_mode
    }

    pub fn on_weekday(&self) -> Weekday {
        self.on_weekday
    }

    pub fn on_day(&self) -> u8 {
        self.on_day
    }

    /// Seconds after midnight.
    pub fn at_time(&self) -> i32 {
        self.at_time
    }

    pub fn at_mode(&self) -> AtMode {
        self.at_mode
    }

    /// Where this transition falls relative to the given civil time in the same year:
    /// `Less` if it happens before, `Greater` if after.
    fn compare(&self, std_offset: i32, year: i32, month: u8, day: u8, time: i32) -> Ordering {
        self.month
            .ordinal()
            .cmp(&month)
            .then_with(|| self.compare_on_day(std_offset, year, month, day))
            .then_with(|| self.compare_at_time(std_offset, time))
    }

    fn compare_on_day(&self, std_offset: i32, year: i32, month: u8, day: u8) -> Ordering {
        let mut day = day as i32;
        // A universal transition time can land on the previous local day.
        if self.at_mode == AtMode::Universal && std_offset + self.at_time < 0 {
            day += 1;
        }
        let weekday = self.on_weekday.ordinal();
        let transition_day = match self.on_mode {
            OnMode::ExactDay => self.on_day as i32,
            OnMode::LastWeekday => tables::weekday_in_month(year, month, weekday, -1),
            OnMode::OnOrAfter => {
                let mut first = tables::weekday_in_month(year, month, weekday, 1);
                while first < self.on_day as i32 {
                    first += 7;
                }
                first
            }
            OnMode::OnOrBefore => {
                let mut last = tables::weekday_in_month(year, month, weekday, -1);
                while last > self.on_day as i32 {
                    last -= 7;
                }
                last
            }
        };
        transition_day.cmp(&day)
    }

    fn compare_at_time(&self, std_offset: i32, time: i32) -> Ordering {
        let mut at_time = self.at_time;
        if self.at_mode == AtMode::Universal {
            at_time += std_offset;
            if at_time < 0 {
                at_time += SEC_PER_DAY as i32;
            }
        }
        at_time.cmp(&time)
    }
}

/// Daylight saving time observed under a [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Daylight {
    pub(crate) offset: i32,
    pub(crate) abbr: String,
    pub(crate) start: DstTime,
    pub(crate) end: DstTime,
}

/// A zone's offsets from one year onwards, until the next rule takes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub(crate) start_year: i16,
    pub(crate) offset: i32,
    pub(crate) std_abbr: String,
    pub(crate) daylight: Option<Daylight>,
}

impl Rule {
    pub fn start_year(&self) -> i16 {
        self.start_year
    }

    /// Standard time offset from UTC in seconds.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn std_abbr(&self) -> &str {
        &self.std_abbr
    }

    /// Seconds added to the standard offset while daylight time is in effect, 0 when the
    /// rule has no daylight time.
    pub fn dst_offset(&self) -> i32 {
        self.daylight.as_ref().map_or(0, |d| d.offset)
    }

    pub fn dst_abbr(&self) -> Option<&str> {
        self.daylight.as_ref().map(|d| d.abbr.as_str())
    }

    pub fn dst_start(&self) -> Option<&DstTime> {
        self.daylight.as_ref().map(|d| &d.start)
    }

    pub fn dst_end(&self) -> Option<&DstTime> {
        self.daylight.as_ref().map(|d| &d.end)
    }

    /// Whether daylight time starts at a wall-clock time.
    pub(crate) fn is_wall_time(&self) -> bool {
        self.dst_start()
            .map_or(false, |start| start.at_mode == AtMode::Wall)
    }

    /// The daylight offset in effect at a civil date and time (seconds after midnight), or 0
    /// during standard time.
    pub(crate) fn dst_offset_at(&self, year: i32, month: u8, day: u8, time: i32) -> i32 {
        let daylight = match &self.daylight {
            Some(daylight) => daylight,
            None => return 0,
        };
        let start = daylight.start.compare(self.offset, year, month, day, time);
        let end = daylight.end.compare(self.offset, year, month, day, time);
        let in_dst = if daylight.end.month < daylight.start.month {
            // Southern hemisphere: daylight time spans the new year.
            end == Ordering::Greater || start != Ordering::Greater
        } else {
            start != Ordering::Greater && end == Ordering::Greater
        };
        if in_dst {
            daylight.offset
        } else {
            0
        }
    }

    /// Whether the given date is the day of the transition `x`.
    pub(crate) fn is_transition_date(&self, x: &DstTime, year: i32, month: u8, day: u8) -> bool {
        x.month.ordinal() == month && x.compare_on_day(self.offset, year, month, day).is_eq()
    }
}
