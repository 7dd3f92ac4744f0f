//! Dashboard Repository

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::platform::{PlatformError, Select, Table, TableStore, decode_rows, null_as_default};

#[derive(Debug, Deserialize)]
struct OrderTotal {
    #[serde(alias = "total_price", default, deserialize_with = "null_as_default")]
    total_amount: Decimal,
}

#[derive(Clone)]
pub(crate) struct DashboardRepository {
    tables: Arc<dyn TableStore>,
}

impl DashboardRepository {
    pub(crate) fn new(tables: Arc<dyn TableStore>) -> Self {
        Self { tables }
    }

    pub(crate) async fn count(&self, token: &str, table: Table) -> Result<u64, PlatformError> {
        self.tables.count(token, table).await
    }

    /// Every order's total.
    pub(crate) async fn order_totals(&self, token: &str) -> Result<Vec<Decimal>, PlatformError> {
        let rows = self.tables.select(token, &Select::table(Table::Orders)).await?;

        let totals: Vec<OrderTotal> = decode_rows(rows)?;

        Ok(totals.into_iter().map(|order| order.total_amount).collect())
    }
}
