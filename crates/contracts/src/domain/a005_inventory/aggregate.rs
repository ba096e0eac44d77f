use crate::domain::a003_product_detail::ProductDetail;
use crate::shared::paging::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Stock record of a variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,
    #[serde(rename = "productDetail", default)]
    pub product_detail: Option<ProductDetail>,
    #[serde(rename = "inventoryQuantity", default)]
    pub inventory_quantity: i64,
    #[serde(default)]
    pub quantity: i64,
}

impl Inventory {
    pub fn version_name(&self) -> &str {
        self.product_detail
            .as_ref()
            .map(|d| d.version_name.as_str())
            .unwrap_or("-")
    }
}

impl Entity for Inventory {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}
