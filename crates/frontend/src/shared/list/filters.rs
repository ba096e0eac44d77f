use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search/filter terms of a list page, keyed by the backend query parameter
/// they map to (`name`, `versionName`, `categoryId`, ...).
///
/// Blank values are kept so inputs can be bound to them, but they never make
/// the set "active" and are never sent or mirrored into the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(BTreeMap<String, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    /// True when at least one term is non-blank, i.e. the search endpoint must be used.
    pub fn is_active(&self) -> bool {
        self.0.values().any(|v| !v.trim().is_empty())
    }

    /// Non-blank terms, trimmed.
    pub fn active_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
    }

    /// Query string (without `?`) of the active terms, for the address bar.
    pub fn to_query(&self) -> String {
        let active: BTreeMap<&str, &str> = self.active_pairs().collect();
        serde_qs::to_string(&active).unwrap_or_else(|e| {
            log::warn!("cannot encode filters {:?}: {}", active, e);
            String::new()
        })
    }

    /// Parses an address-bar query string, keeping only `keys`.
    ///
    /// Malformed input yields an empty set; the URL is only a convenience mirror.
    pub fn from_query(keys: &[&str], query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let parsed: BTreeMap<String, String> = serde_qs::from_str(query).unwrap_or_default();
        let inner = parsed
            .into_iter()
            .filter(|(k, v)| keys.contains(&k.as_str()) && !v.trim().is_empty())
            .collect();
        Self(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_inactive() {
        let f = FilterSet::new().with("name", "   ").with("categoryId", "");
        assert!(!f.is_active());
        assert_eq!(f.active_pairs().count(), 0);
        assert_eq!(f.to_query(), "");
    }

    #[test]
    fn test_active_pairs_are_trimmed() {
        let f = FilterSet::new().with("name", "  shirt ").with("categoryId", "");
        assert!(f.is_active());
        assert_eq!(f.active_pairs().collect::<Vec<_>>(), vec![("name", "shirt")]);
        assert_eq!(f.get("categoryId"), "");
        assert_eq!(f.get("missing"), "");
    }

    #[test]
    fn test_to_query() {
        let f = FilterSet::new().with("name", "shirt").with("categoryId", "3");
        assert_eq!(f.to_query(), "categoryId=3&name=shirt");
    }

    #[test]
    fn test_from_query_keeps_known_keys() {
        let f = FilterSet::from_query(&["name", "categoryId"], "?name=shirt&active=a002&categoryId=");
        assert_eq!(f, FilterSet::new().with("name", "shirt"));
    }

    #[test]
    fn test_query_mirror_survives_spaces() {
        let f = FilterSet::new().with("full_name", "Nguyen Van A");
        let back = FilterSet::from_query(&["full_name"], &f.to_query());
        assert_eq!(back.get("full_name"), "Nguyen Van A");
    }
}
