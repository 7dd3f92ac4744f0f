//! Category Records

use serde::Deserialize;

use crate::{ids::TypedId, platform::null_as_default};

/// Category ID
pub type CategoryId = TypedId<CategoryRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "category_id")]
    pub id: CategoryId,

    #[serde(rename = "category", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,
}
