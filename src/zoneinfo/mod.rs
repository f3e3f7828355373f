use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::time_zone::TimeZone;

mod data;
pub(crate) mod decode;
pub(crate) mod rule;

/// Returns the last `/`-separated segment of a zone name, which is also a lookup key.
pub(crate) fn city_name(full_name: &str) -> &str {
    full_name.rsplit('/').next().unwrap_or(full_name)
}

enum ZoneSlot {
    Encoded {
        full_name: &'static str,
        record: &'static str,
    },
    Decoded(Arc<TimeZone>),
}

/// Zone lookup by city or full name. Records are decoded the first time they are looked up
/// and the decoded zone replaces the record. Each zone has its own lock, shared by its city
/// and full name keys.
pub(crate) struct ZoneRegistry {
    slots: HashMap<&'static str, Arc<Mutex<ZoneSlot>>>,
    aliases: HashMap<&'static str, &'static str>,
    names: Vec<&'static str>,
    full_names: Vec<&'static str>,
    decodes: AtomicUsize,
}

lazy_static! {
    static ref REGISTRY: ZoneRegistry = ZoneRegistry::new(data::ZONES, data::ALIASES);
}

pub(crate) fn registry() -> &'static ZoneRegistry {
    &REGISTRY
}

impl ZoneRegistry {
    pub(crate) fn new(
        zones: &[(&'static str, &'static str)],
        aliases: &[(&'static str, &'static str)],
    ) -> Self {
        let mut slots = HashMap::with_capacity(zones.len() * 2);
        let mut names = Vec::with_capacity(zones.len());
        let mut full_names = Vec::with_capacity(zones.len());
        for &(full_name, record) in zones {
            let slot = Arc::new(Mutex::new(ZoneSlot::Encoded { full_name, record }));
            let city = city_name(full_name);
            slots.insert(city, slot.clone());
            slots.insert(full_name, slot);
            names.push(city);
            full_names.push(full_name);
        }

        let mut alias_map = HashMap::with_capacity(aliases.len() * 2);
        for &(alias, target) in aliases {
            alias_map.insert(alias, target);
            alias_map.entry(city_name(alias)).or_insert(target);
        }

        ZoneRegistry {
            slots,
            aliases: alias_map,
            names,
            full_names,
            decodes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn find(&self, name: &str) -> Option<Arc<TimeZone>> {
        if let Some(slot) = self.slots.get(name) {
            return Some(self.resolve(slot));
        }
        let target = self.aliases.get(name)?;
        trace!(alias = name, zone = *target, "resolved time zone alias");
        self.slots.get(target).map(|slot| self.resolve(slot))
    }

    fn resolve(&self, slot: &Mutex<ZoneSlot>) -> Arc<TimeZone> {
        let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
        let (full_name, record) = match &*slot {
            ZoneSlot::Decoded(zone) => return zone.clone(),
            ZoneSlot::Encoded { full_name, record } => (*full_name, *record),
        };
        // The embedded records are trusted data; a corrupt one is a build defect.
        let zone = match decode::decode_base64(record) {
            Ok(zone) => Arc::new(zone),
            Err(err) => panic!("embedded time zone {full_name} is corrupt: {err}"),
        };
        self.decodes.fetch_add(1, Ordering::Relaxed);
        debug!(
            zone = full_name,
            rules = zone.rules().len(),
            "decoded time zone"
        );
        *slot = ZoneSlot::Decoded(zone.clone());
        zone
    }

    /// City names in table order.
    pub(crate) fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub(crate) fn full_names(&self) -> &[&'static str] {
        &self.full_names
    }

    #[cfg(test)]
    pub(crate) fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ZoneRegistry {
        ZoneRegistry::new(data::ZONES, data::ALIASES)
    }

    #[test]
    fn decodes_each_zone_once() {
        let registry = registry();
        assert_eq!(registry.decode_count(), 0);
        let first = registry.find("America/New_York").unwrap();
        let second = registry.find("America/New_York").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.decode_count(), 1);

        // The city name shares the decoded zone.
        let by_city = registry.find("New_York").unwrap();
        assert!(Arc::ptr_eq(&first, &by_city));
        assert_eq!(registry.decode_count(), 1);

        registry.find("London").unwrap();
        assert_eq!(registry.decode_count(), 2);
    }

    #[test]
    fn resolves_aliases() {
        let registry = registry();
        let eastern = registry.find("US/Eastern").unwrap();
        assert_eq!(eastern.full_name(), "America/New_York");
        assert!(Arc::ptr_eq(&eastern, &registry.find("Eastern").unwrap()));
        assert_eq!(registry.find("GMT").unwrap().name(), "UTC");
        assert_eq!(registry.find("Asia/Calcutta").unwrap().name(), "Kolkata");
        assert_eq!(registry.decode_count(), 3);
    }

    #[test]
    fn unknown_names() {
        let registry = registry();
        assert!(registry.find("Mars/Olympus_Mons").is_none());
        assert!(registry.find("").is_none());
        assert!(registry.find("new_york").is_none());
    }

    #[test]
    fn every_embedded_zone_decodes() {
        let registry = registry();
        for &full_name in registry.full_names() {
            let zone = registry.find(full_name).unwrap();
            assert_eq!(zone.full_name(), full_name);
            assert!(!zone.rules().is_empty());
            for pair in zone.rules().windows(2) {
                assert!(pair[0].start_year() > pair[1].start_year());
            }
        }
        assert_eq!(registry.decode_count(), registry.full_names().len());
        assert_eq!(registry.names().len(), registry.full_names().len());
    }

    #[test]
    fn city_names() {
        assert_eq!(city_name("America/Argentina/Buenos_Aires"), "Buenos_Aires");
        assert_eq!(city_name("UTC"), "UTC");
    }

    #[test]
    fn aliases_point_at_embedded_zones() {
        let registry = registry();
        for &(alias, target) in data::ALIASES {
            assert!(registry.slots.contains_key(target), "{alias} -> {target}");
        }
    }
}
