use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Build a page from up to `per_page + 1` fetched rows; the surplus row
    /// only signals that another page exists.
    pub fn from_overfetch(mut items: Vec<T>, page: u32, per_page: u32) -> Self {
        let limit = per_page as usize;
        let has_more = items.len() > limit;
        items.truncate(limit);
        Self {
            items,
            page,
            per_page,
            has_more,
        }
    }
}
