use crate::domain::a003_product_detail::ProductDetail;
use crate::shared::paging::{Entity, EntityId};
use crate::shared::validation::{FieldError, Validator};
use serde::{Deserialize, Serialize};

/// One line of a purchase order. Price and quantity stay editable until
/// the goods arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDetail {
    pub id: i64,
    #[serde(rename = "productDetail", alias = "product_detail_id", default)]
    pub product_detail: Option<ProductDetail>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub note: Option<String>,
}

impl PurchaseOrderDetail {
    pub fn version_name(&self) -> &str {
        self.product_detail
            .as_ref()
            .map(|d| d.version_name.as_str())
            .unwrap_or("-")
    }

    pub fn version_sku(&self) -> &str {
        self.product_detail
            .as_ref()
            .and_then(|d| d.version_sku.as_deref())
            .unwrap_or("-")
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.product_detail.as_ref().and_then(|d| d.cover_image())
    }

    pub fn to_update(&self) -> PurchaseOrderDetailUpdate {
        PurchaseOrderDetailUpdate {
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl Entity for PurchaseOrderDetail {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

/// Body of `PUT purchase_order_details/update/<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDetailUpdate {
    pub quantity: i64,
    pub price: f64,
}

impl PurchaseOrderDetailUpdate {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .check("quantity", self.quantity > 0, "Số lượng phải lớn hơn 0")
            .check(
                "price",
                self.price.is_finite() && self.price >= 0.0,
                "Giá không hợp lệ",
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::error_for;

    #[test]
    fn test_decodes_line() {
        let raw = r#"{
            "id": 11,
            "price": 95000,
            "quantity": 20,
            "note": "Giao trước 10h",
            "productDetail": {"id": 4, "version_name": "Áo / Trắng / S", "version_sku": "AT-S"}
        }"#;
        let line: PurchaseOrderDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(line.version_name(), "Áo / Trắng / S");
        assert_eq!(line.version_sku(), "AT-S");
        assert_eq!(
            line.to_update(),
            PurchaseOrderDetailUpdate {
                quantity: 20,
                price: 95000.0
            }
        );
    }

    #[test]
    fn test_update_validation() {
        let errors = PurchaseOrderDetailUpdate {
            quantity: 0,
            price: -1.0,
        }
        .validate()
        .unwrap_err();
        assert_eq!(error_for(&errors, "quantity"), Some("Số lượng phải lớn hơn 0"));
        assert_eq!(error_for(&errors, "price"), Some("Giá không hợp lệ"));
        assert!(PurchaseOrderDetailUpdate {
            quantity: 5,
            price: 0.0
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_update_body() {
        let body = serde_json::to_value(PurchaseOrderDetailUpdate {
            quantity: 2,
            price: 1500.0,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"quantity": 2, "price": 1500.0}));
    }
}
