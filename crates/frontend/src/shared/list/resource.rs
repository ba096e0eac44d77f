//! Binding between an entity DTO and its REST endpoints.

use super::filters::FilterSet;
use super::mutation::Mutation;
use super::state::{Endpoint, ListRequest};
use crate::shared::config::ListConfig;
use crate::shared::http::HttpMethod;
use contracts::shared::paging::{Entity, EntityId};
use serde::de::DeserializeOwned;

/// Method and path (relative to the API base) of a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
}

impl Route {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

/// A search endpoint and the query keys it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRoute {
    pub path: &'static str,
    pub keys: &'static [&'static str],
}

/// A list page backed by one REST resource.
pub trait ListResource: 'static {
    type Item: Entity + Clone + DeserializeOwned + PartialEq + Send + Sync + 'static;

    /// Listing endpoint, e.g. `products`.
    const PATH: &'static str;
    /// Search endpoint; resources without one always hit [`Self::PATH`].
    const SEARCH_PATH: Option<&'static str> = None;
    /// Every filter key of the page, in the order they are sent. Also the keys
    /// read back from the address bar.
    const SEARCH_KEYS: &'static [&'static str] = &[];

    fn config() -> ListConfig {
        ListConfig::default()
    }

    /// Endpoint serving `filters`. Resources with several search endpoints
    /// pick one from the active keys.
    fn search_route(filters: &FilterSet) -> Option<SearchRoute> {
        let _ = filters;
        Self::SEARCH_PATH.map(|path| SearchRoute {
            path,
            keys: Self::SEARCH_KEYS,
        })
    }

    fn mutation_route(id: &EntityId, mutation: &Mutation) -> Route {
        default_route(Self::PATH, id, mutation)
    }
}

/// Conventional routes under `path`: `delete/<id>`, `update/<id>`, and the
/// bare `<id>` for lock (DELETE) and unlock (PUT).
pub fn default_route(path: &str, id: &EntityId, mutation: &Mutation) -> Route {
    match mutation {
        Mutation::Delete => Route::new(HttpMethod::Delete, format!("{}/delete/{}", path, id)),
        Mutation::Update(_) | Mutation::SetStatus(_) => {
            Route::new(HttpMethod::Put, format!("{}/update/{}", path, id))
        }
        Mutation::Lock => Route::new(HttpMethod::Delete, format!("{}/{}", path, id)),
        Mutation::Unlock => Route::new(HttpMethod::Put, format!("{}/{}", path, id)),
    }
}

/// Path and query string for `request`, relative to the API base.
pub fn request_path<R: ListResource>(request: &ListRequest) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    let search = match request.endpoint {
        Endpoint::Search => R::search_route(&request.filters),
        Endpoint::Listing => None,
    };
    let path = match search {
        Some(route) => {
            for &key in route.keys {
                let value = request.filters.get(key).trim();
                if !value.is_empty() {
                    params.push((key, urlencoding::encode(value).into_owned()));
                }
            }
            route.path
        }
        None => R::PATH,
    };
    params.push(("page", request.page.to_string()));
    params.push(("limit", request.limit.to_string()));

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filters::FilterSet;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    impl Entity for Row {
        fn entity_id(&self) -> EntityId {
            EntityId::Int(self.id)
        }
    }

    struct Rows;

    impl ListResource for Rows {
        type Item = Row;
        const PATH: &'static str = "products";
        const SEARCH_PATH: Option<&'static str> = Some("products/search");
        const SEARCH_KEYS: &'static [&'static str] = &["name", "categoryId"];
    }

    struct Plain;

    impl ListResource for Plain {
        type Item = Row;
        const PATH: &'static str = "categories";
    }

    fn request(endpoint: Endpoint, filters: FilterSet) -> ListRequest {
        ListRequest {
            seq: 1,
            endpoint,
            page: 2,
            limit: 5,
            filters,
        }
    }

    #[test]
    fn test_listing_path() {
        let req = request(Endpoint::Listing, FilterSet::new());
        assert_eq!(request_path::<Rows>(&req), "products?page=2&limit=5");
    }

    #[test]
    fn test_search_path_orders_and_encodes_keys() {
        let filters = FilterSet::new()
            .with("categoryId", "3")
            .with("name", " áo thun ")
            .with("ignored", "x");
        let req = request(Endpoint::Search, filters);
        assert_eq!(
            request_path::<Rows>(&req),
            "products/search?name=%C3%A1o%20thun&categoryId=3&page=2&limit=5"
        );
    }

    #[test]
    fn test_search_skips_blank_keys() {
        let req = request(Endpoint::Search, FilterSet::new().with("categoryId", "7").with("name", ""));
        assert_eq!(
            request_path::<Rows>(&req),
            "products/search?categoryId=7&page=2&limit=5"
        );
    }

    #[test]
    fn test_resource_without_search_lists() {
        let req = request(Endpoint::Search, FilterSet::new().with("name", "x"));
        assert_eq!(request_path::<Plain>(&req), "categories?page=2&limit=5");
    }

    #[test]
    fn test_default_mutation_routes() {
        let id = EntityId::Int(9);
        assert_eq!(
            Rows::mutation_route(&id, &Mutation::Delete),
            Route::new(HttpMethod::Delete, "products/delete/9")
        );
        assert_eq!(
            Rows::mutation_route(&id, &Mutation::SetStatus("DELIVERED".into())),
            Route::new(HttpMethod::Put, "products/update/9")
        );
        assert_eq!(
            Rows::mutation_route(&id, &Mutation::Lock),
            Route::new(HttpMethod::Delete, "products/9")
        );
        assert_eq!(
            Rows::mutation_route(&id, &Mutation::Unlock),
            Route::new(HttpMethod::Put, "products/9")
        );
    }
}
