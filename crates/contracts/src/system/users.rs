use crate::shared::paging::{Entity, EntityId};
use crate::shared::validation::{FieldError, Validator};
use serde::{Deserialize, Serialize};

pub const STATUS_LOCKED: &str = "LOCKED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub role_id: Option<i64>,
}

impl User {
    pub fn is_locked(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_LOCKED)
    }
}

impl Entity for User {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

/// Body of `POST users/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub fullname: String,
    pub phone_number: String,
    pub password: String,
    pub retype_password: String,
    pub role_id: String,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("fullname", &self.fullname, "Họ tên là bắt buộc")
            .required("phone_number", &self.phone_number, "Số điện thoại là bắt buộc")
            .check(
                "phone_number",
                is_valid_phone(&self.phone_number),
                "Số điện thoại phải có 10 chữ số và không bắt đầu bằng 00, 01 hoặc 02",
            )
            .check(
                "phone_number",
                !has_five_identical_in_a_row(&self.phone_number),
                "Số điện thoại không được có 5 số trùng lặp liên tục",
            )
            .required("password", &self.password, "Mật khẩu là bắt buộc")
            .min_chars("password", &self.password, 6, "Mật khẩu phải có ít nhất 6 ký tự")
            .required("retype_password", &self.retype_password, "Vui lòng nhập lại mật khẩu")
            .check(
                "retype_password",
                self.retype_password == self.password,
                "Mật khẩu không khớp",
            )
            .required("role_id", &self.role_id, "Vai trò là bắt buộc")
            .finish()
    }
}

fn is_valid_phone(value: &str) -> bool {
    value.len() == 10
        && value.chars().all(|c| c.is_ascii_digit())
        && !["00", "01", "02"].iter().any(|p| value.starts_with(p))
}

fn has_five_identical_in_a_row(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.windows(5).any(|w| w.iter().all(|c| *c == w[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::error_for;

    fn valid() -> CreateUserDto {
        CreateUserDto {
            fullname: "Nguyen Van A".into(),
            phone_number: "0912345678".into(),
            password: "secret1".into(),
            retype_password: "secret1".into(),
            role_id: "1".into(),
        }
    }

    #[test]
    fn test_valid_user() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_phone_rules() {
        let mut dto = valid();
        dto.phone_number = "0212345678".into();
        let errors = dto.validate().unwrap_err();
        assert!(error_for(&errors, "phone_number").unwrap().contains("10 chữ số"));

        dto.phone_number = "0977777123".into();
        let errors = dto.validate().unwrap_err();
        assert!(error_for(&errors, "phone_number").unwrap().contains("5 số trùng lặp"));
    }

    #[test]
    fn test_password_mismatch() {
        let mut dto = valid();
        dto.retype_password = "secret2".into();
        let errors = dto.validate().unwrap_err();
        assert_eq!(error_for(&errors, "retype_password"), Some("Mật khẩu không khớp"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_locked_status() {
        let u: User = serde_json::from_str(r#"{"id":1,"full_name":"A","status":"locked"}"#).unwrap();
        assert!(u.is_locked());
    }
}
