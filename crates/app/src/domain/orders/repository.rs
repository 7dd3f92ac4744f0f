//! Orders Repository

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{
    domain::orders::records::{OrderId, OrderRecord},
    platform::{Filter, PlatformError, Select, Table, TableStore, decode_row, decode_rows},
};

#[derive(Clone)]
pub(crate) struct OrdersRepository {
    tables: Arc<dyn TableStore>,
}

impl OrdersRepository {
    pub(crate) fn new(tables: Arc<dyn TableStore>) -> Self {
        Self { tables }
    }

    fn key(order: OrderId) -> Filter {
        Filter::eq(Table::Orders.primary_key(), order.get())
    }

    pub(crate) async fn list_orders(&self, token: &str) -> Result<Vec<OrderRecord>, PlatformError> {
        let rows = self.tables.select(token, &Select::table(Table::Orders)).await?;

        decode_rows(rows)
    }

    /// Set exactly one column on one order.
    pub(crate) async fn set_column(
        &self,
        token: &str,
        order: OrderId,
        column: &'static str,
        value: Value,
    ) -> Result<Option<OrderRecord>, PlatformError> {
        let patch = Map::from_iter([(column.to_string(), value)]);

        let rows = self
            .tables
            .update(token, Table::Orders, &[Self::key(order)], Value::Object(patch))
            .await?;

        rows.into_iter().next().map(decode_row).transpose()
    }

    pub(crate) async fn delete_order(&self, token: &str, order: OrderId) -> Result<u64, PlatformError> {
        self.tables
            .delete(token, Table::Orders, &[Self::key(order)])
            .await
    }
}
