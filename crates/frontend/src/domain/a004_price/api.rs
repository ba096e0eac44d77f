use crate::shared::config::ListConfig;
use crate::shared::http::{self, ApiError, HttpMethod};
use crate::shared::list::resource::default_route;
use crate::shared::list::{ListResource, Mutation, Route};
use contracts::domain::a004_price::{Price, PriceUpdate};
use contracts::shared::api::MessageResponse;
use contracts::shared::paging::EntityId;

pub const SEARCH_VERSION_NAME: &str = "versionName";

/// Current price per variant; the full history lives under `prices`.
pub struct PriceResource;

impl ListResource for PriceResource {
    type Item = Price;
    const PATH: &'static str = "prices/price_distinct";
    const SEARCH_PATH: Option<&'static str> = Some("prices/search");
    const SEARCH_KEYS: &'static [&'static str] = &[SEARCH_VERSION_NAME];

    fn config() -> ListConfig {
        ListConfig::default().with_max_pages_to_show(4)
    }

    fn mutation_route(id: &EntityId, mutation: &Mutation) -> Route {
        default_route("prices", id, mutation)
    }
}

pub async fn fetch_by_id(id: i64) -> Result<Price, ApiError> {
    http::get_data(&format!("prices/{}", id)).await
}

pub async fn update(id: i64, body: &PriceUpdate) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Put, &format!("prices/update/{}", id), body).await
}
