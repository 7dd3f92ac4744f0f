//! User Records

use serde::Deserialize;

use crate::{domain::orders::records::OrderRecord, ids::TypedId};

/// User ID
pub type UserId = TypedId<UserRecord>;

/// A storefront customer. Every contact column is nullable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "user_id")]
    pub id: UserId,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

impl UserRecord {
    /// First and last name joined by a space, skipping missing parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A user and every order placed under their id.
#[derive(Debug, Clone, PartialEq)]
pub struct UserOrders {
    pub user: UserRecord,
    pub orders: Vec<OrderRecord>,
}
