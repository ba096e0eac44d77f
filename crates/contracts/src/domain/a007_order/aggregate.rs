use crate::shared::paging::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub order_code: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub total_money: f64,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub shipping_date: Option<String>,
    /// Raw status code; see [`OrderStatus`]. Kept as text so an unknown code
    /// from the backend does not fail the whole page.
    #[serde(default)]
    pub status: String,
}

impl Order {
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.status)
    }
}

impl Entity for Order {
    fn entity_id(&self) -> EntityId {
        EntityId::Int(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipping,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipping => "SHIPPING",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Chờ xử lý",
            OrderStatus::Processing => "Xác nhận",
            OrderStatus::Shipping => "Đang giao hàng",
            OrderStatus::Delivered => "Đã giao hàng",
            OrderStatus::Cancelled => "Hủy",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pending",
            OrderStatus::Processing => "status-processing",
            OrderStatus::Shipping => "status-shipping",
            OrderStatus::Delivered => "status-delivered",
            OrderStatus::Cancelled => "status-cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
    }
}
