use crate::shared::paging::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Product variant (a concrete size/colour version of a product).
///
/// The backend is inconsistent about casing for the nested copies embedded in
/// prices and inventories, hence the aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: i64,
    #[serde(alias = "versionName", default)]
    pub version_name: String,
    #[serde(alias = "versionSku", default)]
    pub version_sku: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Uploaded file names, first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub price: Option<VariantPrice>,
}

impl ProductDetail {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Current price of a variant, embedded in the per-product variant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPrice {
    #[serde(default)]
    pub price_selling: f64,
    #[serde(default)]
    pub promotion_price: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    /// `None` means the price has no end date.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Entity for ProductDetail {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_casings() {
        let a: ProductDetail =
            serde_json::from_str(r#"{"id":1,"versionName":"Red / M","version_sku":"SKU-1"}"#).unwrap();
        let b: ProductDetail = serde_json::from_str(r#"{"id":2,"version_name":"Blue / L"}"#).unwrap();
        assert_eq!(a.version_name, "Red / M");
        assert_eq!(a.version_sku.as_deref(), Some("SKU-1"));
        assert_eq!(b.version_name, "Blue / L");
        assert_eq!(b.version_sku, None);
        assert_eq!(b.cover_image(), None);
    }

    #[test]
    fn test_variant_with_price_and_images() {
        let raw = r#"{
            "id": 7,
            "version_name": "Áo thun / Đỏ / M",
            "images": ["a.png", "b.png"],
            "price": {"price_selling": 150000, "promotion_price": 120000, "start_date": "2024-05-01", "end_date": null}
        }"#;
        let v: ProductDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(v.cover_image(), Some("a.png"));
        let price = v.price.unwrap();
        assert_eq!(price.price_selling, 150000.0);
        assert_eq!(price.promotion_price, Some(120000.0));
        assert_eq!(price.end_date, None);
    }
}
