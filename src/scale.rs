/// Units a [`Duration`](crate::Duration) can be written in, from finest to coarsest.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Scale {
    Nanoseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

pub(crate) const NS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NS_PER_SEC: i64 = 1_000_000_000;
pub(crate) const NS_PER_MIN: i64 = 60 * NS_PER_SEC;
pub(crate) const NS_PER_HR: i64 = 60 * NS_PER_MIN;
pub(crate) const NS_PER_DAY: i64 = 24 * NS_PER_HR;
pub(crate) const NS_PER_YEAR: i64 = 365 * NS_PER_DAY;

pub(crate) const SEC_PER_MIN: i64 = 60;
pub(crate) const SEC_PER_HR: i64 = 3_600;
pub(crate) const SEC_PER_DAY: i64 = 86_400;

impl Scale {
    /// Coarsest first, which is the order the canonical formatter tries them in.
    pub(crate) const DESCENDING: [Scale; 5] = [
        Scale::Days,
        Scale::Hours,
        Scale::Minutes,
        Scale::Seconds,
        Scale::Milliseconds,
    ];

    pub const fn ticks(self) -> i64 {
        match self {
            Scale::Nanoseconds => 1,
            Scale::Milliseconds => NS_PER_MILLI,
            Scale::Seconds => NS_PER_SEC,
            Scale::Minutes => NS_PER_MIN,
            Scale::Hours => NS_PER_HR,
            Scale::Days => NS_PER_DAY,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Scale::Nanoseconds => "ns",
            Scale::Milliseconds => "ms",
            Scale::Seconds => "sec",
            Scale::Minutes => "min",
            Scale::Hours => "hr",
            Scale::Days => "day",
        }
    }

    /// Find the unit suffix `s` ends with, if any.
    pub(crate) fn from_suffix(s: &str) -> Option<Scale> {
        [
            Scale::Nanoseconds,
            Scale::Milliseconds,
            Scale::Seconds,
            Scale::Minutes,
            Scale::Hours,
            Scale::Days,
        ]
        .into_iter()
        .find(|scale| s.ends_with(scale.suffix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_lookup() {
        assert_eq!(Scale::from_suffix("5ns"), Some(Scale::Nanoseconds));
        assert_eq!(Scale::from_suffix("5ms"), Some(Scale::Milliseconds));
        assert_eq!(Scale::from_suffix("1.5sec"), Some(Scale::Seconds));
        assert_eq!(Scale::from_suffix("-3min"), Some(Scale::Minutes));
        assert_eq!(Scale::from_suffix("2hr"), Some(Scale::Hours));
        assert_eq!(Scale::from_suffix("7day"), Some(Scale::Days));
        assert_eq!(Scale::from_suffix("7days"), None);
        assert_eq!(Scale::from_suffix("s"), None);
    }

    #[test]
    fn tick_multipliers() {
        assert_eq!(Scale::Days.ticks(), 86_400_000_000_000);
        assert_eq!(Scale::Hours.ticks(), 3_600_000_000_000);
        assert_eq!(NS_PER_YEAR, 31_536_000_000_000_000);
    }
}
