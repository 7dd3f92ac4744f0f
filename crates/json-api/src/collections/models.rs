//! Collection Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopdesk_app::domain::collections::records::CollectionEntry;

use crate::products::models::ProductResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CollectionResponse {
    /// "featured" or "popular"
    pub collection: String,

    pub products: Vec<ProductResponse>,
}

impl CollectionResponse {
    pub(crate) fn new(collection: &str, entries: Vec<CollectionEntry>) -> Self {
        Self {
            collection: collection.to_string(),
            products: entries.into_iter().map(|entry| entry.product.into()).collect(),
        }
    }
}

/// Membership after a toggle.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MembershipResponse {
    pub product_id: i64,

    pub collection: String,

    /// Whether the product is in the collection now
    pub member: bool,
}
