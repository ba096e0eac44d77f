use crate::shared::paging::{Entity, EntityId};
use crate::shared::validation::{FieldError, Validator};
use serde::{Deserialize, Serialize};

/// Поставщик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Entity for Supplier {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierDto {
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub address: String,
    pub email: Option<String>,
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("name", &self.name, "Tên nhà cung cấp là bắt buộc")
            .required("phoneNumber", &self.phone_number, "Số điện thoại là bắt buộc")
            .required("address", &self.address, "Địa chỉ là bắt buộc")
            .finish()
    }
}
