use std::fmt;

use crate::error::Error;
use crate::gregorian::tables;
use crate::locale::Locale;

/// Month of the year. The ordinal is 0-based, so January is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn from_ordinal(ordinal: u8) -> Option<Month> {
        Self::ALL.get(ordinal as usize).copied()
    }

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn num_days(self, year: i32) -> u8 {
        tables::days_in_month(year, self.ordinal())
    }

    /// The following month, wrapping from December to January.
    pub fn increment(self) -> Month {
        Self::ALL[(self.ordinal() as usize + 1) % 12]
    }

    /// The preceding month, wrapping from January to December.
    pub fn decrement(self) -> Month {
        Self::ALL[(self.ordinal() as usize + 11) % 12]
    }

    pub fn abbr(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    pub fn full(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    /// 1 to 4.
    pub fn quarter(self) -> u8 {
        self.ordinal() / 3 + 1
    }

    /// Abbreviation from the `janAbbr`..`decAbbr` locale keys.
    pub fn locale_abbr<'a>(self, locale: &'a dyn Locale) -> &'a str {
        locale.get_or(&format!("{}Abbr", self.abbr().to_lowercase()), self.abbr())
    }

    /// Full name from the `janFull`..`decFull` locale keys.
    pub fn locale_full<'a>(self, locale: &'a dyn Locale) -> &'a str {
        locale.get_or(&format!("{}Full", self.abbr().to_lowercase()), self.full())
    }

    /// The month whose localized abbreviation or full name is `name`, ignoring case.
    pub fn from_locale_name(name: &str, locale: &dyn Locale) -> Option<Month> {
        Self::ALL.into_iter().find(|month| {
            month.locale_abbr(locale).eq_ignore_ascii_case(name)
                || month.locale_full(locale).eq_ignore_ascii_case(name)
        })
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Month::from_ordinal(ordinal).ok_or_else(|| Error::out_of_range(format!("month {ordinal}")))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around_the_year() {
        assert_eq!(Month::Dec.increment(), Month::Jan);
        assert_eq!(Month::Jan.decrement(), Month::Dec);
        assert_eq!(Month::Jun.increment(), Month::Jul);
    }

    #[test]
    fn ordinals() {
        assert_eq!(Month::Jan.ordinal(), 0);
        assert_eq!(Month::Dec.ordinal(), 11);
        assert_eq!(Month::try_from(1), Ok(Month::Feb));
        assert!(Month::try_from(12).is_err());
    }

    #[test]
    fn february_length() {
        assert_eq!(Month::Feb.num_days(2023), 28);
        assert_eq!(Month::Feb.num_days(2024), 29);
        assert_eq!(Month::Feb.num_days(1900), 28);
        assert_eq!(Month::Feb.num_days(2000), 29);
    }

    #[test]
    fn localized_names() {
        use crate::locale::English;
        use std::collections::HashMap;

        assert_eq!(Month::Sep.locale_full(&English), "September");
        assert_eq!(Month::Sep.locale_abbr(&English), "Sep");
        assert_eq!(Month::from_locale_name("SEPTEMBER", &English), Some(Month::Sep));
        assert_eq!(Month::from_locale_name("sep", &English), Some(Month::Sep));
        assert_eq!(Month::from_locale_name("Sept", &English), None);

        let mut fr = HashMap::new();
        fr.insert("febFull".to_string(), "février".to_string());
        fr.insert("febAbbr".to_string(), "févr".to_string());
        assert_eq!(Month::Feb.locale_full(&fr), "février");
        assert_eq!(Month::from_locale_name("févr", &fr), Some(Month::Feb));
        assert_eq!(Month::Mar.locale_abbr(&fr), "Mar");
    }

    #[test]
    fn quarters() {
        assert_eq!(Month::Jan.quarter(), 1);
        assert_eq!(Month::Mar.quarter(), 1);
        assert_eq!(Month::Apr.quarter(), 2);
        assert_eq!(Month::Dec.quarter(), 4);
    }
}
