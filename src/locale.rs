use std::collections::HashMap;

/// Key/value lookup of localized strings, such as unit abbreviations.
pub trait Locale {
    fn get(&self, key: &str) -> Option<&str>;

    fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }
}

/// The built-in locale. It defines no keys, so every lookup yields the English default.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Locale for English {
    fn get(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl Locale for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_overrides_defaults() {
        let mut map = HashMap::new();
        map.insert("secAbbr".to_string(), "s".to_string());
        assert_eq!(map.get_or("secAbbr", "sec"), "s");
        assert_eq!(map.get_or("minAbbr", "min"), "min");
        assert_eq!(English.get_or("secAbbr", "sec"), "sec");
    }
}
