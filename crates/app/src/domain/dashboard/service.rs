//! Dashboard service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    domain::dashboard::{
        errors::DashboardServiceError, metrics::DashboardMetrics, repository::DashboardRepository,
    },
    platform::{Table, TableStore},
    session::SessionContext,
};

#[derive(Clone)]
pub struct PlatformDashboardService {
    repository: DashboardRepository,
}

impl PlatformDashboardService {
    #[must_use]
    pub fn new(tables: Arc<dyn TableStore>) -> Self {
        Self {
            repository: DashboardRepository::new(tables),
        }
    }
}

#[async_trait]
impl DashboardService for PlatformDashboardService {
    async fn metrics(
        &self,
        session: &SessionContext,
    ) -> Result<DashboardMetrics, DashboardServiceError> {
        let token = session.token();

        let products = self.repository.count(token, Table::Products).await?;
        let users = self.repository.count(token, Table::Users).await?;
        let orders = self.repository.count(token, Table::Orders).await?;

        let sales = self
            .repository
            .order_totals(token)
            .await?
            .into_iter()
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .ok_or(DashboardServiceError::Overflow)?;

        Ok(DashboardMetrics {
            products,
            users,
            orders,
            sales,
        })
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Row counts and total sales. Always read fresh.
    async fn metrics(
        &self,
        session: &SessionContext,
    ) -> Result<DashboardMetrics, DashboardServiceError>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        platform::{MockTableStore, PlatformError},
        test::{TestContext, helpers},
    };

    use super::*;

    #[tokio::test]
    async fn sales_is_exact_sum_of_order_totals() -> TestResult {
        let ctx = TestContext::new().await;

        helpers::create_product(&ctx, "Canvas Shoe", 12).await?;
        helpers::create_user(&ctx, "Ada", "Lovelace").await?;
        helpers::create_order(&ctx, None, "0.10", "TRK-1").await?;
        helpers::create_order(&ctx, None, "0.20", "TRK-2").await?;
        helpers::create_order(&ctx, None, "1999.99", "TRK-3").await?;

        let metrics = ctx.dashboard.metrics(&ctx.session).await?;

        assert_eq!(
            metrics,
            DashboardMetrics {
                products: 1,
                users: 1,
                orders: 3,
                sales: Decimal::from_str("2000.29")?,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_store_reports_zeroes() -> TestResult {
        let ctx = TestContext::new().await;

        let metrics = ctx.dashboard.metrics(&ctx.session).await?;

        assert_eq!(metrics, DashboardMetrics::default());

        Ok(())
    }

    #[tokio::test]
    async fn null_totals_count_as_zero() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.tables
            .seed(
                Table::Orders,
                [
                    json!({ "order_id": 1, "total_amount": null }),
                    json!({ "order_id": 2, "total_price": "5.25" }),
                ],
            )
            .await?;

        let metrics = ctx.dashboard.metrics(&ctx.session).await?;

        assert_eq!(metrics.sales, Decimal::from_str("5.25")?);

        Ok(())
    }

    #[tokio::test]
    async fn rejected_token_is_unauthorized() {
        let ctx = TestContext::new().await;
        let mut tables = MockTableStore::new();

        tables
            .expect_count()
            .once()
            .return_once(|_, _| Err(PlatformError::api(401, "PGRST301", "JWT expired")));
        tables.expect_select().never();

        let service = PlatformDashboardService::new(Arc::new(tables));

        let result = service.metrics(&ctx.session).await;

        assert!(
            matches!(result, Err(DashboardServiceError::Unauthorized)),
            "expected Unauthorized, got {result:?}"
        );
    }
}
