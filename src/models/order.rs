use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// One `{ itemId, quantity }` pair in an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub item_id: String,
    pub quantity: u32,
}

/// Body for `POST /order`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub restaurant_id: String,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Ongoing,
    Completed,
    Cancelled,
    /// Statuses this client version doesn't know about.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Ongoing => "ongoing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }
}

/// Restaurant summary embedded in a past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRestaurant {
    #[serde(rename = "r_name")]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
}

/// One line of a past order. The embedded item can be missing when the
/// restaurant has since deleted it from the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    #[serde(default)]
    pub item: Option<MenuItem>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// A past order as returned by `GET /order/user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub restaurant: Option<OrderRestaurant>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(
        rename = "deliveryAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery_address: Option<String>,
}
