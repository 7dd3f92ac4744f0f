//! Dashboard Metrics

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub products: u64,
    pub users: u64,
    pub orders: u64,
    /// Sum of every order's total.
    pub sales: Decimal,
}

/// One labelled point of the dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: Decimal,
}

impl DashboardMetrics {
    /// Chart series in display order: products, users, orders, sales.
    #[must_use]
    pub fn series(&self) -> [SeriesPoint; 4] {
        [
            SeriesPoint {
                label: "Products",
                value: Decimal::from(self.products),
            },
            SeriesPoint {
                label: "Users",
                value: Decimal::from(self.users),
            },
            SeriesPoint {
                label: "Orders",
                value: Decimal::from(self.orders),
            },
            SeriesPoint {
                label: "Sales",
                value: self.sales,
            },
        ]
    }
}
