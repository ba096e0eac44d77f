use crate::domain::a001_category::Category;
use crate::shared::paging::{Entity, EntityId};
use crate::shared::validation::{FieldError, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Product as returned by listing/search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "categoryId", default)]
    pub category: Option<Category>,
    #[serde(rename = "productImages", default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|i| i.image_url.as_str())
    }
}

impl Entity for Product {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

/// Create/update request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: String,
    /// Kept as text because it comes straight from a `<select>`.
    pub category_id: String,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("name", &self.name, "Tên sản phẩm là bắt buộc")
            .min_chars("name", &self.name, 3, "Tên sản phẩm phải có ít nhất 3 ký tự")
            .required("category_id", &self.category_id, "Danh mục là bắt buộc")
            .required("sku", &self.sku, "Mã SKU là bắt buộc")
            .finish()
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            category_id: p
                .category
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::error_for;

    #[test]
    fn test_product_decodes_nested_category() {
        let raw = r#"{
            "id": 3,
            "name": "Linen shirt",
            "sku": "LS-01",
            "categoryId": {"id": 9, "name": "Shirts"},
            "productImages": [{"id": 1, "imageUrl": "a.png"}]
        }"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.category_name(), "Shirts");
        assert_eq!(p.cover_image(), Some("a.png"));
        assert_eq!(p.entity_id(), EntityId::Int(3));
    }

    #[test]
    fn test_validate_reports_each_field() {
        let dto = ProductDto {
            name: "ab".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            error_for(&errors, "name"),
            Some("Tên sản phẩm phải có ít nhất 3 ký tự")
        );
        assert_eq!(error_for(&errors, "category_id"), Some("Danh mục là bắt buộc"));
        assert_eq!(error_for(&errors, "sku"), Some("Mã SKU là bắt buộc"));
    }

    #[test]
    fn test_validate_ok() {
        let dto = ProductDto {
            name: "Linen shirt".into(),
            sku: "LS-01".into(),
            description: String::new(),
            category_id: "9".into(),
        };
        assert!(dto.validate().is_ok());
    }
}
