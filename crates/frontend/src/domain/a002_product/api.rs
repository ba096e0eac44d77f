use crate::shared::http::{self, ApiError, HttpMethod};
use crate::shared::list::resource::default_route;
use crate::shared::list::{ListResource, Mutation, Route};
use contracts::domain::a002_product::{Product, ProductDto};
use contracts::shared::api::MessageResponse;
use contracts::shared::paging::EntityId;

pub const SEARCH_NAME: &str = "name";
pub const SEARCH_CATEGORY: &str = "categoryId";

pub struct ProductResource;

impl ListResource for ProductResource {
    type Item = Product;
    const PATH: &'static str = "products";
    const SEARCH_PATH: Option<&'static str> = Some("products/search");
    const SEARCH_KEYS: &'static [&'static str] = &[SEARCH_NAME, SEARCH_CATEGORY];

    fn mutation_route(id: &EntityId, mutation: &Mutation) -> Route {
        match mutation {
            Mutation::Update(_) => Route::new(HttpMethod::Put, format!("products/{}", id)),
            _ => default_route(Self::PATH, id, mutation),
        }
    }
}

pub async fn fetch_by_id(id: i64) -> Result<Product, ApiError> {
    http::get_data(&format!("products/{}", id)).await
}

pub async fn create(dto: &ProductDto) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Post, "products", dto).await
}

pub async fn update(id: i64, dto: &ProductDto) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Put, &format!("products/{}", id), dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filters::FilterSet;
    use crate::shared::list::resource::request_path;
    use crate::shared::list::ListState;

    #[test]
    fn test_listing_and_search_paths() {
        let mut state = ListState::<Product>::new();
        let req = state.load(1, FilterSet::new());
        assert_eq!(request_path::<ProductResource>(&req), "products?page=1&limit=5");

        let req = state.apply_filters(FilterSet::new().with(SEARCH_CATEGORY, "2"));
        assert_eq!(
            request_path::<ProductResource>(&req),
            "products/search?categoryId=2&page=1&limit=5"
        );

        let req = state.apply_filters(
            FilterSet::new()
                .with(SEARCH_NAME, "quần jean")
                .with(SEARCH_CATEGORY, "2"),
        );
        assert_eq!(
            request_path::<ProductResource>(&req),
            "products/search?name=qu%E1%BA%A7n%20jean&categoryId=2&page=1&limit=5"
        );
    }

    #[test]
    fn test_delete_route() {
        assert_eq!(
            ProductResource::mutation_route(&EntityId::Int(7), &Mutation::Delete),
            Route::new(HttpMethod::Delete, "products/delete/7")
        );
    }
}
