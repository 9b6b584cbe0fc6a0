use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct OrderLine {
    #[serde(rename = "yemek_id")]
    pub item_id: i64,
    pub qty: i64,
}

/// Order as submitted by the kiosk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Order {
    pub items: Vec<OrderLine>,
    pub amount: f64,
    pub payment_type: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostOrderResponse {
    pub status: &'static str,
    pub received: Order,
}

/// What the kitchen screen shows for a pending order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct KitchenOrder {
    pub order_id: i64,
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct OrderSummary {
    pub order_id: i64,
    pub amount: f64,
}
