use crate::shared::list::ListResource;
use contracts::domain::a005_inventory::Inventory;

pub const SEARCH_VERSION_NAME: &str = "versionName";

pub struct InventoryResource;

impl ListResource for InventoryResource {
    type Item = Inventory;
    const PATH: &'static str = "inventories";
    const SEARCH_PATH: Option<&'static str> = Some("inventories/search/version_name");
    const SEARCH_KEYS: &'static [&'static str] = &[SEARCH_VERSION_NAME];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filters::FilterSet;
    use crate::shared::list::resource::request_path;
    use crate::shared::list::ListState;

    #[test]
    fn test_inventory_paths() {
        let mut state = ListState::<Inventory>::new();
        let req = state.apply_filters(FilterSet::new().with(SEARCH_VERSION_NAME, "Xanh"));
        assert_eq!(
            request_path::<InventoryResource>(&req),
            "inventories/search/version_name?versionName=Xanh&page=1&limit=5"
        );
        let req = state.clear_filters();
        assert_eq!(request_path::<InventoryResource>(&req), "inventories?page=1&limit=5");
    }
}
