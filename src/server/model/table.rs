use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Table {
    pub id: i64,
    #[serde(rename = "ad")]
    pub name: String,
    pub status: String, // "free" | "busy", not enforced
}

#[derive(Debug, Serialize)]
pub(crate) struct FreeTableResponse {
    pub status: &'static str,
    pub table_id: i64,
}
