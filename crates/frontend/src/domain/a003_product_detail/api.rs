use crate::shared::http::{self, ApiError, HttpMethod};
use contracts::domain::a003_product_detail::ProductDetail;
use contracts::shared::api::MessageResponse;
use contracts::shared::paging::{PageData, PagePayload};

pub fn variants_path(product_id: i64) -> String {
    format!("product_details/product/{}", product_id)
}

pub fn delete_path(id: i64) -> String {
    format!("product_details/delete/{}", id)
}

/// Every variant of a product, unpaginated.
pub async fn fetch_by_product(product_id: i64) -> Result<Vec<ProductDetail>, ApiError> {
    let payload: PagePayload<ProductDetail> = http::get_data(&variants_path(product_id)).await?;
    Ok(PageData::from(payload).content)
}

pub async fn delete(id: i64) -> Result<MessageResponse, ApiError> {
    http::send_empty(HttpMethod::Delete, &delete_path(id)).await
}

/// Deletes `ids` one by one. Returns the ids that could not be deleted.
pub async fn delete_many(ids: &[i64]) -> Vec<i64> {
    let mut failed = Vec::new();
    for &id in ids {
        if let Err(e) = delete(id).await {
            log::warn!("delete variant {}: {}", id, e);
            failed.push(id);
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_paths() {
        assert_eq!(variants_path(12), "product_details/product/12");
        assert_eq!(delete_path(40), "product_details/delete/40");
    }
}
