//! Keeps the address bar in sync with the applied filters.
//!
//! The URL is written on every filter change and read once when a list page
//! mounts. It is never the source of truth.

use super::filters::FilterSet;
use web_sys::window;

/// Filters found in the current query string, restricted to `keys`.
pub fn read_location(keys: &[&str]) -> FilterSet {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    FilterSet::from_query(keys, &search)
}

/// Replaces the query string with `filters`, without adding a history entry.
pub fn mirror_to_location(filters: &FilterSet) {
    let Some(w) = window() else { return };
    let location = w.location();
    let path = location.pathname().unwrap_or_default();
    let new_url = target_url(&path, &filters.to_query());

    let current = format!(
        "{}{}",
        path,
        location.search().unwrap_or_default()
    );
    if current == new_url {
        return;
    }
    if let Ok(history) = w.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url)) {
            log::warn!("cannot mirror filters into the URL: {:?}", e);
        }
    }
}

fn target_url(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url() {
        assert_eq!(target_url("/products", ""), "/products");
        assert_eq!(target_url("/products", "name=shirt"), "/products?name=shirt");
    }
}
