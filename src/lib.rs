//! Civil calendar, time zone and duration engine.
//!
//! Instants are [`DateTime`]s: signed nanosecond ticks since 2000-01-01T00:00:00Z viewed in a
//! [`TimeZone`], valid for the years 1901 to 2099. Zones come from an embedded table and are
//! decoded the first time they are looked up.
//!
//! ```
//! use tempora::{Date, DateTime, Month, Time, TimeZone};
//!
//! let ny = TimeZone::from_name("New_York").unwrap();
//! let date = Date::new(2024, Month::Jul, 4).unwrap();
//! let time = Time::new(12, 0, 0, 0).unwrap();
//! let dt = DateTime::from_civil(&date, &time, ny).unwrap();
//! assert!(dt.is_dst());
//! assert_eq!(dt.to_string(), "2024-07-04T12:00:00-04:00 New_York");
//! ```

pub use duration::Duration;
pub use error::{DecodeError, Error, Result};
pub use gregorian::{
    day_of_year, days_in_month, is_leap_year, week_of_year, weekday_in_month, Date, DateTime,
    DateTimeBuilder, Month, Time, Weekday, MAX_DATE_YEAR, MAX_YEAR, MIN_DATE_YEAR, MIN_YEAR,
};
pub use locale::{English, Locale};
pub use scale::Scale;
pub use time_zone::{TimeZone, TIMEZONE_ENV_VAR};
pub use zoneinfo::rule::{AtMode, DstTime, OnMode, Rule};

mod cursor;
mod div_rem;
mod duration;
mod error;
mod gregorian;
mod gregorian_normalized_date;
mod instant;
mod iso8601;
mod locale;
mod pattern;
mod scale;
mod slice_cursor;
mod time_zone;
mod zoneinfo;
