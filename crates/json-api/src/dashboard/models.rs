//! Dashboard Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopdesk_app::domain::dashboard::metrics::{DashboardMetrics, SeriesPoint};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SeriesPointResponse {
    pub label: String,

    pub value: String,
}

impl From<SeriesPoint> for SeriesPointResponse {
    fn from(point: SeriesPoint) -> Self {
        Self {
            label: point.label.to_string(),
            value: point.value.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    pub products: u64,

    pub users: u64,

    pub orders: u64,

    /// Exact sum of every order total
    pub sales: String,

    /// Chart series: Products, Users, Orders, Sales
    pub series: Vec<SeriesPointResponse>,
}

impl From<DashboardMetrics> for DashboardResponse {
    fn from(metrics: DashboardMetrics) -> Self {
        Self {
            products: metrics.products,
            users: metrics.users,
            orders: metrics.orders,
            sales: metrics.sales.to_string(),
            series: metrics.series().into_iter().map(Into::into).collect(),
        }
    }
}
