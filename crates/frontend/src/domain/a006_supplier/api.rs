use crate::shared::http::{self, ApiError, HttpMethod};
use crate::shared::list::resource::default_route;
use crate::shared::list::{ListResource, Mutation, Route};
use contracts::domain::a006_supplier::{Supplier, SupplierDto};
use contracts::shared::api::MessageResponse;
use contracts::shared::paging::EntityId;

pub const SEARCH_NAME: &str = "name";

pub struct SupplierResource;

impl ListResource for SupplierResource {
    type Item = Supplier;
    const PATH: &'static str = "suppliers";
    const SEARCH_PATH: Option<&'static str> = Some("suppliers/search");
    const SEARCH_KEYS: &'static [&'static str] = &[SEARCH_NAME];

    fn mutation_route(id: &EntityId, mutation: &Mutation) -> Route {
        match mutation {
            Mutation::Update(_) => Route::new(HttpMethod::Put, format!("suppliers/{}", id)),
            _ => default_route(Self::PATH, id, mutation),
        }
    }
}

pub async fn fetch_by_id(id: i64) -> Result<Supplier, ApiError> {
    http::get_data(&format!("suppliers/{}", id)).await
}

pub async fn create(dto: &SupplierDto) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Post, "suppliers", dto).await
}

pub async fn update(id: i64, dto: &SupplierDto) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Put, &format!("suppliers/{}", id), dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filters::FilterSet;
    use crate::shared::list::resource::request_path;
    use crate::shared::list::ListState;

    #[test]
    fn test_supplier_search_path() {
        let mut state = ListState::<Supplier>::new();
        let req = state.apply_filters(FilterSet::new().with(SEARCH_NAME, "Minh Anh"));
        assert_eq!(
            request_path::<SupplierResource>(&req),
            "suppliers/search?name=Minh%20Anh&page=1&limit=5"
        );
    }

    #[test]
    fn test_update_uses_bare_id() {
        let id = EntityId::Int(3);
        assert_eq!(
            SupplierResource::mutation_route(&id, &Mutation::Update(serde_json::json!({}))),
            Route::new(HttpMethod::Put, "suppliers/3")
        );
        assert_eq!(
            SupplierResource::mutation_route(&id, &Mutation::Delete),
            Route::new(HttpMethod::Delete, "suppliers/delete/3")
        );
    }
}
