use crate::shared::http::{self, ApiError, HttpMethod};
use contracts::domain::a012_purchase_order_detail::{PurchaseOrderDetail, PurchaseOrderDetailUpdate};
use contracts::shared::api::MessageResponse;
use contracts::shared::paging::{PageData, PagePayload};

pub fn order_lines_path(purchase_order_id: i64) -> String {
    format!("purchase_order_details/purchase_order/{}", purchase_order_id)
}

pub fn update_path(id: i64) -> String {
    format!("purchase_order_details/update/{}", id)
}

/// Lines of one purchase order.
pub async fn fetch_by_purchase_order(purchase_order_id: i64) -> Result<Vec<PurchaseOrderDetail>, ApiError> {
    let payload: PagePayload<PurchaseOrderDetail> =
        http::get_data(&order_lines_path(purchase_order_id)).await?;
    Ok(PageData::from(payload).content)
}

pub async fn update(id: i64, body: &PurchaseOrderDetailUpdate) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Put, &update_path(id), body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_order_line_paths() {
        assert_eq!(order_lines_path(8), "purchase_order_details/purchase_order/8");
        assert_eq!(update_path(81), "purchase_order_details/update/81");
    }
}
