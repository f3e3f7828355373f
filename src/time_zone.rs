use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use tracing::warn;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::zoneinfo::rule::Rule;
use crate::zoneinfo::{city_name, registry};

/// Environment variable naming the zone returned by [`TimeZone::cur`].
pub const TIMEZONE_ENV_VAR: &str = "TEMPORA_TIMEZONE";

/// A named zone and its offset history.
///
/// Zones are shared: every lookup of the same name returns the same `Arc`.
#[derive(Debug)]
pub struct TimeZone {
    name: String,
    full_name: String,
    // Newest start year first; the last rule also covers every earlier year.
    rules: Vec<Rule>,
}

lazy_static! {
    static ref UTC: Arc<TimeZone> = embedded("UTC");
    static ref REL: Arc<TimeZone> = embedded("Rel");
    static ref CUR: Arc<TimeZone> = configured_zone();
}

fn embedded(name: &str) -> Arc<TimeZone> {
    registry()
        .find(name)
        .unwrap_or_else(|| panic!("time zone {name} is missing from the embedded table"))
}

fn configured_zone() -> Arc<TimeZone> {
    zone_setting(std::env::var(TIMEZONE_ENV_VAR).ok().as_deref())
}

fn zone_setting(setting: Option<&str>) -> Arc<TimeZone> {
    let Some(name) = setting else {
        return TimeZone::utc();
    };
    match TimeZone::find(name) {
        Some(zone) => zone,
        None => {
            warn!(zone = %name, "unknown time zone in {TIMEZONE_ENV_VAR}, using UTC");
            TimeZone::utc()
        }
    }
}

impl TimeZone {
    pub(crate) fn new(full_name: String, rules: Vec<Rule>) -> Self {
        TimeZone {
            name: city_name(&full_name).to_string(),
            full_name,
            rules,
        }
    }

    /// Look up a zone by city name (`New_York`), full name (`America/New_York`) or alias
    /// (`US/Eastern`).
    pub fn from_name(name: &str) -> Result<Arc<TimeZone>> {
        Self::find(name).ok_or_else(|| Error::parse("TimeZone", name))
    }

    /// Like [`from_name`](Self::from_name) but returns `None` for unknown names.
    pub fn find(name: &str) -> Option<Arc<TimeZone>> {
        registry().find(name)
    }

    pub fn utc() -> Arc<TimeZone> {
        UTC.clone()
    }

    /// The zone with no offset, used to carry civil fields unchanged between zones.
    pub fn rel() -> Arc<TimeZone> {
        REL.clone()
    }

    /// The default zone, read once from `TEMPORA_TIMEZONE`. Falls back to UTC when the
    /// variable is unset or names an unknown zone.
    pub fn cur() -> Arc<TimeZone> {
        CUR.clone()
    }

    /// The fixed `Etc/GMT±N` zone for a whole-hour offset in seconds east of UTC. Note the
    /// inverted sign of those names: UTC+5 is `GMT-5`.
    pub fn from_gmt_offset(offset: i32) -> Result<Arc<TimeZone>> {
        if offset == 0 {
            return Ok(Self::utc());
        }
        let name = format!(
            "GMT{}{}",
            if offset < 0 { "+" } else { "-" },
            offset.unsigned_abs() / 3600
        );
        if offset % 3600 != 0 {
            return Err(Error::parse("TimeZone", &name));
        }
        Self::from_name(&name)
    }

    /// City names of all embedded zones.
    pub fn list_names() -> Vec<&'static str> {
        registry().names().to_vec()
    }

    pub fn list_full_names() -> Vec<&'static str> {
        registry().full_names().to_vec()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule in force during `year`.
    pub fn rule(&self, year: i32) -> &Rule {
        // Most lookups hit the newest rule.
        self.rules
            .iter()
            .find(|rule| year >= rule.start_year() as i32)
            .unwrap_or_else(|| &self.rules[self.rules.len() - 1])
    }

    /// Standard offset from UTC during `year`.
    pub fn offset(&self, year: i32) -> Duration {
        Duration::from_secs(self.rule(year).offset() as i64)
    }

    /// Daylight saving adjustment during `year`, if the zone observes it.
    pub fn dst_offset(&self, year: i32) -> Option<Duration> {
        match self.rule(year).dst_offset() {
            0 => None,
            secs => Some(Duration::from_secs(secs as i64)),
        }
    }

    pub fn std_abbr(&self, year: i32) -> &str {
        self.rule(year).std_abbr()
    }

    pub fn dst_abbr(&self, year: i32) -> Option<&str> {
        self.rule(year).dst_abbr()
    }

    pub fn abbr(&self, year: i32, in_dst: bool) -> &str {
        let rule = self.rule(year);
        match rule.dst_abbr() {
            Some(abbr) if in_dst => abbr,
            _ => rule.std_abbr(),
        }
    }

    pub(crate) fn is_rel(&self) -> bool {
        self.full_name == REL.full_name
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for TimeZone {}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_any_name() {
        let ny = TimeZone::from_name("America/New_York").unwrap();
        assert_eq!(ny.name(), "New_York");
        assert_eq!(ny.full_name(), "America/New_York");
        assert_eq!(ny.to_string(), "New_York");
        assert!(Arc::ptr_eq(&ny, &TimeZone::from_name("New_York").unwrap()));
        assert!(Arc::ptr_eq(&ny, &TimeZone::from_name("US/Eastern").unwrap()));
    }

    #[test]
    fn unknown_zone_is_a_parse_error() {
        let err = TimeZone::from_name("Nowhere").unwrap_err();
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "Invalid TimeZone: 'Nowhere'");
        assert!(TimeZone::find("Nowhere").is_none());
    }

    #[test]
    fn rules_by_year() {
        let ny = TimeZone::from_name("New_York").unwrap();
        assert_eq!(ny.rule(2024).start_year(), 2007);
        assert_eq!(ny.rule(2007).start_year(), 2007);
        assert_eq!(ny.rule(2006).start_year(), 1987);
        assert_eq!(ny.rule(1986).start_year(), 1967);
        // Years before the oldest rule fall back to it.
        assert_eq!(ny.rule(1920).start_year(), 1967);

        let moscow = TimeZone::from_name("Moscow").unwrap();
        assert_eq!(moscow.offset(2013), Duration::from_secs(4 * 3600));
        assert_eq!(moscow.offset(2015), Duration::from_secs(3 * 3600));
    }

    #[test]
    fn offsets_and_abbreviations() {
        let ny = TimeZone::from_name("New_York").unwrap();
        assert_eq!(ny.offset(2024), Duration::from_secs(-5 * 3600));
        assert_eq!(ny.dst_offset(2024), Some(Duration::from_secs(3600)));
        assert_eq!(ny.std_abbr(2024), "EST");
        assert_eq!(ny.dst_abbr(2024), Some("EDT"));
        assert_eq!(ny.abbr(2024, true), "EDT");
        assert_eq!(ny.abbr(2024, false), "EST");

        let tokyo = TimeZone::from_name("Tokyo").unwrap();
        assert_eq!(tokyo.dst_offset(2024), None);
        assert_eq!(tokyo.abbr(2024, true), "JST");
    }

    #[test]
    fn fixed_offset_zones() {
        assert!(Arc::ptr_eq(&TimeZone::from_gmt_offset(0).unwrap(), &TimeZone::utc()));
        let east = TimeZone::from_gmt_offset(5 * 3600).unwrap();
        assert_eq!(east.full_name(), "Etc/GMT-5");
        assert_eq!(east.offset(2024), Duration::from_secs(5 * 3600));
        assert_eq!(east.std_abbr(2024), "+05");
        let west = TimeZone::from_gmt_offset(-8 * 3600).unwrap();
        assert_eq!(west.name(), "GMT+8");
        assert!(TimeZone::from_gmt_offset(19_800).is_err());
        assert!(TimeZone::from_gmt_offset(20 * 3600).is_err());
    }

    #[test]
    fn configured_zone_falls_back_to_utc() {
        let tokyo = TimeZone::from_name("Tokyo").unwrap();
        assert!(Arc::ptr_eq(&zone_setting(Some("Asia/Tokyo")), &tokyo));
        assert!(Arc::ptr_eq(&zone_setting(Some("Tokyo")), &tokyo));
        assert!(Arc::ptr_eq(&zone_setting(Some("Nowhere")), &TimeZone::utc()));
        assert!(Arc::ptr_eq(&zone_setting(Some("")), &TimeZone::utc()));
        assert!(Arc::ptr_eq(&zone_setting(None), &TimeZone::utc()));
        // Whatever the environment holds, the current zone is one of the embedded zones.
        assert!(TimeZone::find(TimeZone::cur().full_name()).is_some());
    }

    #[test]
    fn well_known_zones() {
        assert_eq!(TimeZone::utc().name(), "UTC");
        assert_eq!(TimeZone::rel().name(), "Rel");
        assert!(TimeZone::rel().is_rel());
        assert!(!TimeZone::utc().is_rel());
        let names = TimeZone::list_names();
        assert!(names.contains(&"New_York"));
        assert!(names.contains(&"GMT+12"));
        assert!(TimeZone::list_full_names().contains(&"Australia/Sydney"));
    }
}
