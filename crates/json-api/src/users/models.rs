//! User Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopdesk_app::domain::users::records::{UserOrders, UserRecord};

use crate::orders::models::OrderResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub id: i64,

    /// First and last name, empty when neither is set
    pub full_name: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.get(),
            full_name: user.full_name(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserOrdersResponse {
    pub user: UserResponse,

    pub orders: Vec<OrderResponse>,
}

impl From<UserOrders> for UserOrdersResponse {
    fn from(history: UserOrders) -> Self {
        Self {
            user: history.user.into(),
            orders: history.orders.into_iter().map(Into::into).collect(),
        }
    }
}
