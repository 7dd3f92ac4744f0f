//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopdesk_app::domain::orders::records::OrderRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub id: i64,

    pub user_id: Option<i64>,

    /// Decimal order total
    pub total_amount: String,

    pub order_status: String,

    pub payment_status: String,

    pub tracking_number: Option<String>,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            id: order.id.get(),
            user_id: order.user_id.map(i64::from),
            total_amount: order.total_amount.to_string(),
            order_status: order.order_status.to_string(),
            payment_status: order.payment_status.to_string(),
            tracking_number: order.tracking_number,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

/// New value for a status column.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusRequest {
    /// Status label, matched without regard to case
    pub status: String,
}
