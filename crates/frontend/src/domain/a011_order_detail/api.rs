use crate::shared::http::{self, ApiError};
use contracts::domain::a011_order_detail::OrderDetail;
use contracts::shared::paging::{PageData, PagePayload};

pub fn order_lines_path(order_id: i64) -> String {
    format!("order_details/order/{}", order_id)
}

/// Lines of one order.
pub async fn fetch_by_order(order_id: i64) -> Result<Vec<OrderDetail>, ApiError> {
    let payload: PagePayload<OrderDetail> = http::get_data(&order_lines_path(order_id)).await?;
    Ok(PageData::from(payload).content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_lines_path() {
        assert_eq!(order_lines_path(31), "order_details/order/31");
    }
}
