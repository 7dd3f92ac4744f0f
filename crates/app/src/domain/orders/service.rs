//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

use crate::{
    cache::EntityCache,
    domain::orders::{
        errors::OrdersServiceError,
        records::{OrderId, OrderRecord},
        repository::OrdersRepository,
        status::{OrderStatus, PaymentStatus},
    },
    platform::{Table, TableStore},
    session::SessionContext,
};

#[derive(Clone)]
pub struct PlatformOrdersService {
    repository: OrdersRepository,
    cache: Arc<EntityCache>,
}

impl PlatformOrdersService {
    #[must_use]
    pub fn new(tables: Arc<dyn TableStore>, cache: Arc<EntityCache>) -> Self {
        Self {
            repository: OrdersRepository::new(tables),
            cache,
        }
    }

    async fn set_column(
        &self,
        session: &SessionContext,
        order: OrderId,
        column: &'static str,
        value: &'static str,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let updated = self
            .repository
            .set_column(session.token(), order, column, Value::from(value))
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        self.cache.invalidate(Table::Orders).await;

        Ok(updated)
    }
}

#[async_trait]
impl OrdersService for PlatformOrdersService {
    async fn list_orders(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        if let Some(cached) = self.cache.get::<Vec<OrderRecord>>(Table::Orders).await {
            return Ok(cached.as_ref().clone());
        }

        let orders = self.repository.list_orders(session.token()).await?;

        self.cache.put(Table::Orders, orders.clone()).await;

        Ok(orders)
    }

    async fn search_orders(
        &self,
        session: &SessionContext,
        term: &str,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut orders = self.list_orders(session).await?;

        orders.retain(|order| order.matches_search(term));

        Ok(orders)
    }

    async fn set_order_status(
        &self,
        session: &SessionContext,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        self.set_column(session, order, "order_status", status.as_str())
            .await
    }

    async fn set_payment_status(
        &self,
        session: &SessionContext,
        order: OrderId,
        status: PaymentStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        self.set_column(session, order, "payment_status", status.as_str())
            .await
    }

    async fn delete_order(
        &self,
        session: &SessionContext,
        order: OrderId,
    ) -> Result<(), OrdersServiceError> {
        let rows_affected = self.repository.delete_order(session.token(), order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        self.cache.invalidate(Table::Orders).await;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    async fn list_orders(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Orders whose id or tracking number contains `term`.
    async fn search_orders(
        &self,
        session: &SessionContext,
        term: &str,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Update `order_status` and nothing else.
    async fn set_order_status(
        &self,
        session: &SessionContext,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Update `payment_status` and nothing else.
    async fn set_payment_status(
        &self,
        session: &SessionContext,
        order: OrderId,
        status: PaymentStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    async fn delete_order(
        &self,
        session: &SessionContext,
        order: OrderId,
    ) -> Result<(), OrdersServiceError>;
}
