use crate::domain::a003_product_detail::ProductDetail;
use crate::shared::paging::{Entity, EntityId};
use crate::shared::validation::{FieldError, Validator};
use serde::{Deserialize, Serialize};

/// Selling price of a variant for a validity period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: i64,
    #[serde(rename = "product_detail_id", default)]
    pub product_detail: Option<ProductDetail>,
    #[serde(default)]
    pub price_selling: f64,
    #[serde(default)]
    pub promotion_price: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Price {
    pub fn version_name(&self) -> &str {
        self.product_detail
            .as_ref()
            .map(|d| d.version_name.as_str())
            .unwrap_or("-")
    }

    pub fn to_update(&self) -> PriceUpdate {
        PriceUpdate {
            price_selling: Some(self.price_selling),
            promotion_price: self.promotion_price,
        }
    }
}

impl Entity for Price {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

/// Body of `PUT prices/update/<id>`. Absent fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_selling: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_price: Option<f64>,
}

impl PriceUpdate {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let selling = self.price_selling.filter(|p| p.is_finite() && *p > 0.0);
        let promotion_ok = match (self.promotion_price, selling) {
            (None, _) => true,
            (Some(p), Some(s)) => p.is_finite() && p >= 0.0 && p < s,
            (Some(p), None) => p.is_finite() && p >= 0.0,
        };
        Validator::new()
            .check("price_selling", selling.is_some(), "Giá bán phải lớn hơn 0")
            .check(
                "promotion_price",
                promotion_ok,
                "Giá khuyến mãi phải nhỏ hơn giá bán",
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::error_for;

    #[test]
    fn test_promotion_must_be_below_selling() {
        let errors = PriceUpdate {
            price_selling: Some(100000.0),
            promotion_price: Some(120000.0),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            error_for(&errors, "promotion_price"),
            Some("Giá khuyến mãi phải nhỏ hơn giá bán")
        );
        assert_eq!(error_for(&errors, "price_selling"), None);
    }

    #[test]
    fn test_selling_price_required() {
        let errors = PriceUpdate::default().validate().unwrap_err();
        assert_eq!(error_for(&errors, "price_selling"), Some("Giá bán phải lớn hơn 0"));
        assert!(PriceUpdate {
            price_selling: Some(50000.0),
            promotion_price: None,
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_absent_promotion_is_not_sent() {
        let body = serde_json::to_value(PriceUpdate {
            price_selling: Some(50000.0),
            promotion_price: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"price_selling": 50000.0}));
    }
}
