//! Order Records

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    domain::{
        orders::status::{OrderStatus, PaymentStatus},
        users::records::UserId,
    },
    ids::TypedId,
    platform::null_as_default,
};

/// Order ID
pub type OrderId = TypedId<OrderRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "order_id")]
    pub id: OrderId,

    /// Not a foreign key: orders outlive the user that placed them.
    #[serde(default)]
    pub user_id: Option<UserId>,

    #[serde(alias = "total_price", default, deserialize_with = "null_as_default")]
    pub total_amount: Decimal,

    #[serde(default, deserialize_with = "null_as_default")]
    pub order_status: OrderStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub tracking_number: Option<String>,
}

impl OrderRecord {
    /// Substring match on the order id or the tracking number. An empty term matches everything.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        self.id.to_string().contains(term)
            || self
                .tracking_number
                .as_deref()
                .is_some_and(|tracking| tracking.contains(term))
    }
}
