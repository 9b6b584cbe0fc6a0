use serde::Serialize;

/// One entry of the kiosk menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MenuItem {
    pub id: i64,
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "qiymet")]
    pub price: f64,
}
