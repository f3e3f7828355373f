use std::fmt;

use crate::error::Error;
use crate::locale::Locale;

/// Day of the week. The ordinal is 0-based, starting from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    pub fn from_ordinal(ordinal: u8) -> Option<Weekday> {
        Self::ALL.get(ordinal as usize).copied()
    }

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn increment(self) -> Weekday {
        Self::ALL[(self.ordinal() as usize + 1) % 7]
    }

    pub fn decrement(self) -> Weekday {
        Self::ALL[(self.ordinal() as usize + 6) % 7]
    }

    pub fn abbr(self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    pub fn full(self) -> &'static str {
        match self {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }

    pub fn locale_abbr<'a>(self, locale: &'a dyn Locale) -> &'a str {
        locale.get_or(&format!("{}Abbr", self.abbr().to_lowercase()), self.abbr())
    }

    pub fn locale_full<'a>(self, locale: &'a dyn Locale) -> &'a str {
        locale.get_or(&format!("{}Full", self.abbr().to_lowercase()), self.full())
    }

    /// First day of the week per the `weekdayStart` locale key, Sunday by default.
    pub fn locale_start_of_week(locale: &dyn Locale) -> Weekday {
        let start = locale.get_or("weekdayStart", "sun");
        Self::ALL
            .into_iter()
            .find(|day| day.abbr().eq_ignore_ascii_case(start))
            .unwrap_or(Weekday::Sun)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Weekday::from_ordinal(ordinal)
            .ok_or_else(|| Error::out_of_range(format!("weekday {ordinal}")))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around_the_week() {
        assert_eq!(Weekday::Sat.increment(), Weekday::Sun);
        assert_eq!(Weekday::Sun.decrement(), Weekday::Sat);
        assert_eq!(Weekday::try_from(4), Ok(Weekday::Thu));
        assert!(Weekday::try_from(7).is_err());
    }

    #[test]
    fn localized_names() {
        use crate::locale::English;
        use std::collections::HashMap;

        assert_eq!(Weekday::Wed.locale_full(&English), "Wednesday");
        assert_eq!(Weekday::locale_start_of_week(&English), Weekday::Sun);

        let mut de = HashMap::new();
        de.insert("monAbbr".to_string(), "Mo".to_string());
        de.insert("weekdayStart".to_string(), "mon".to_string());
        assert_eq!(Weekday::Mon.locale_abbr(&de), "Mo");
        assert_eq!(Weekday::locale_start_of_week(&de), Weekday::Mon);
    }
}
