use crate::shared::validation::{FieldError, Validator};
use serde::{Deserialize, Serialize};

/// Create/update body of resources that only carry a name: categories,
/// colors and sizes. Also decodes their `GET <resource>/<id>` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameDto {
    #[serde(default)]
    pub name: String,
}

impl NameDto {
    /// `required_message` is shown under the name input.
    pub fn validate(&self, required_message: &str) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("name", &self.name, required_message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::error_for;

    #[test]
    fn test_blank_name_is_rejected() {
        let errors = NameDto { name: "  ".into() }
            .validate("Tên màu là bắt buộc")
            .unwrap_err();
        assert_eq!(error_for(&errors, "name"), Some("Tên màu là bắt buộc"));
        assert!(NameDto { name: "Đỏ".into() }.validate("x").is_ok());
    }

    #[test]
    fn test_decodes_entity_payload() {
        let dto: NameDto = serde_json::from_str(r#"{"id":4,"name":"XL"}"#).unwrap();
        assert_eq!(dto.name, "XL");
    }
}
