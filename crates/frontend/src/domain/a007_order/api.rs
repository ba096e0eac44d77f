use crate::shared::config::ListConfig;
use crate::shared::list::ListResource;
use contracts::domain::a007_order::Order;

pub const SEARCH_ORDER_CODE: &str = "orderCode";

pub struct OrderResource;

impl ListResource for OrderResource {
    type Item = Order;
    const PATH: &'static str = "orders";
    const SEARCH_PATH: Option<&'static str> = Some("orders/search");
    const SEARCH_KEYS: &'static [&'static str] = &[SEARCH_ORDER_CODE];

    fn config() -> ListConfig {
        ListConfig::default()
            .with_page_size(8)
            .with_max_pages_to_show(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::HttpMethod;
    use crate::shared::list::filters::FilterSet;
    use crate::shared::list::resource::request_path;
    use crate::shared::list::{ListState, Mutation, Route};
    use contracts::domain::a007_order::OrderStatus;
    use contracts::shared::paging::EntityId;

    #[test]
    fn test_order_paths() {
        let mut state = ListState::<Order>::from_config(OrderResource::config());
        let req = state.load(1, FilterSet::new());
        assert_eq!(request_path::<OrderResource>(&req), "orders?page=1&limit=8");

        let req = state.apply_filters(FilterSet::new().with(SEARCH_ORDER_CODE, "DH-0012"));
        assert_eq!(
            request_path::<OrderResource>(&req),
            "orders/search?orderCode=DH-0012&page=1&limit=8"
        );
    }

    #[test]
    fn test_status_change_route_and_body() {
        let mutation = Mutation::SetStatus(OrderStatus::Shipping.as_str().to_string());
        assert_eq!(
            OrderResource::mutation_route(&EntityId::Int(9), &mutation),
            Route::new(HttpMethod::Put, "orders/update/9")
        );
        assert_eq!(
            mutation.body(),
            Some(serde_json::json!({ "status": "SHIPPING" }))
        );
    }
}
