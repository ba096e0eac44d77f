use crate::domain::a003_product_detail::ProductDetail;
use crate::shared::paging::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// One line of a customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    #[serde(rename = "product_detail_id", alias = "productDetail", default)]
    pub product_detail: Option<ProductDetail>,
    #[serde(default)]
    pub quantity: i64,
}

impl OrderDetail {
    pub fn version_name(&self) -> &str {
        self.product_detail
            .as_ref()
            .map(|d| d.version_name.as_str())
            .unwrap_or("-")
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.product_detail.as_ref().and_then(|d| d.cover_image())
    }
}

impl Entity for OrderDetail {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_nested_variant() {
        let raw = r#"{"id":2,"quantity":3,"product_detail_id":{"id":9,"version_name":"Quần / Xanh / L","images":["q.png"]}}"#;
        let line: OrderDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(line.version_name(), "Quần / Xanh / L");
        assert_eq!(line.cover_image(), Some("q.png"));
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_missing_variant() {
        let line: OrderDetail = serde_json::from_str(r#"{"id":2}"#).unwrap();
        assert_eq!(line.version_name(), "-");
        assert_eq!(line.cover_image(), None);
    }
}
