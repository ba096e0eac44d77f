use crate::shared::config::ListConfig;
use crate::shared::list::{FilterSet, ListResource, SearchRoute};
use contracts::domain::a008_purchase_order::{parse_order_date, PurchaseOrder};

pub const SEARCH_CODE: &str = "code";
pub const SEARCH_ORDER_DATE: &str = "orderDate";

const BY_CODE: SearchRoute = SearchRoute {
    path: "purchase_orders/search",
    keys: &[SEARCH_CODE],
};
const BY_ORDER_DATE: SearchRoute = SearchRoute {
    path: "purchase_orders/order_date",
    keys: &[SEARCH_ORDER_DATE],
};

pub struct PurchaseOrderResource;

impl ListResource for PurchaseOrderResource {
    type Item = PurchaseOrder;
    const PATH: &'static str = "purchase_orders";
    const SEARCH_PATH: Option<&'static str> = Some(BY_CODE.path);
    const SEARCH_KEYS: &'static [&'static str] = &[SEARCH_CODE, SEARCH_ORDER_DATE];

    fn config() -> ListConfig {
        ListConfig::default().with_page_size(10)
    }

    /// Code search and the order-date filter are separate endpoints; a code,
    /// when present, wins.
    fn search_route(filters: &FilterSet) -> Option<SearchRoute> {
        let by_date = filters.get(SEARCH_CODE).trim().is_empty()
            && !filters.get(SEARCH_ORDER_DATE).trim().is_empty();
        Some(if by_date { BY_ORDER_DATE } else { BY_CODE })
    }
}

pub fn code_filters(code: &str) -> FilterSet {
    FilterSet::new().with(SEARCH_CODE, code)
}

/// Filter set for one order date. A date that is not `YYYY-MM-DD` is
/// rejected before anything is sent.
pub fn date_filters(order_date: &str) -> Result<FilterSet, &'static str> {
    let order_date = order_date.trim();
    if !order_date.is_empty() && parse_order_date(order_date).is_none() {
        return Err("Ngày đặt hàng không hợp lệ");
    }
    Ok(FilterSet::new().with(SEARCH_ORDER_DATE, order_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::HttpMethod;
    use crate::shared::list::resource::request_path;
    use crate::shared::list::{ListState, Mutation, Route};
    use contracts::domain::a008_purchase_order::STATUS_DELIVERED;
    use contracts::shared::paging::EntityId;

    fn state() -> ListState<PurchaseOrder> {
        ListState::from_config(PurchaseOrderResource::config())
    }

    #[test]
    fn test_code_search() {
        let req = state().apply_filters(code_filters(" PO-7 "));
        assert_eq!(
            request_path::<PurchaseOrderResource>(&req),
            "purchase_orders/search?code=PO-7&page=1&limit=10"
        );
    }

    #[test]
    fn test_date_only_filter_uses_order_date_endpoint() {
        let req = state().apply_filters(date_filters("2024-03-15").unwrap());
        assert_eq!(
            request_path::<PurchaseOrderResource>(&req),
            "purchase_orders/order_date?orderDate=2024-03-15&page=1&limit=10"
        );
    }

    #[test]
    fn test_code_wins_over_date() {
        let filters = code_filters("PO-7").with(SEARCH_ORDER_DATE, "2024-03-15");
        let req = state().apply_filters(filters);
        assert_eq!(
            request_path::<PurchaseOrderResource>(&req),
            "purchase_orders/search?code=PO-7&page=1&limit=10"
        );
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(date_filters("15/03/2024").is_err());
        assert!(!date_filters("").unwrap().is_active());
        let req = state().apply_filters(date_filters(" ").unwrap());
        assert_eq!(
            request_path::<PurchaseOrderResource>(&req),
            "purchase_orders?page=1&limit=10"
        );
    }

    #[test]
    fn test_mark_delivered_route() {
        assert_eq!(
            PurchaseOrderResource::mutation_route(
                &EntityId::Int(5),
                &Mutation::SetStatus(STATUS_DELIVERED.to_string())
            ),
            Route::new(HttpMethod::Put, "purchase_orders/update/5")
        );
    }
}
