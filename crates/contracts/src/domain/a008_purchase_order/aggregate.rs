use crate::shared::paging::{Entity, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const STATUS_DELIVERED: &str = "DELIVERED";

/// Purchase order placed with a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(rename = "orderDate", default)]
    pub order_date: Option<String>,
    #[serde(rename = "shippingDate", default)]
    pub shipping_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub supplier_name: Option<String>,
}

impl PurchaseOrder {
    pub fn is_delivered(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_DELIVERED)
    }
}

impl Entity for PurchaseOrder {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

/// Order-date filter values must be ISO dates (`YYYY-MM-DD`), as sent by `<input type="date">`.
pub fn parse_order_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_date() {
        assert_eq!(
            parse_order_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_order_date("15.03.2024"), None);
        assert_eq!(parse_order_date(""), None);
    }

    #[test]
    fn test_delivered_case_insensitive() {
        let po: PurchaseOrder =
            serde_json::from_str(r#"{"id":5,"code":"PO-5","status":"delivered"}"#).unwrap();
        assert!(po.is_delivered());
    }
}
