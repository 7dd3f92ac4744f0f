//! Users Repository

use std::sync::Arc;

use crate::{
    domain::{
        orders::records::OrderRecord,
        users::records::{UserId, UserRecord},
    },
    platform::{Filter, PlatformError, Select, Table, TableStore, decode_row, decode_rows},
};

#[derive(Clone)]
pub(crate) struct UsersRepository {
    tables: Arc<dyn TableStore>,
}

impl UsersRepository {
    pub(crate) fn new(tables: Arc<dyn TableStore>) -> Self {
        Self { tables }
    }

    pub(crate) async fn list_users(&self, token: &str) -> Result<Vec<UserRecord>, PlatformError> {
        let rows = self.tables.select(token, &Select::table(Table::Users)).await?;

        decode_rows(rows)
    }

    pub(crate) async fn get_user(
        &self,
        token: &str,
        user: UserId,
    ) -> Result<Option<UserRecord>, PlatformError> {
        let rows = self
            .tables
            .select(
                token,
                &Select::table(Table::Users).eq(Table::Users.primary_key(), user.get()),
            )
            .await?;

        rows.into_iter().next().map(decode_row).transpose()
    }

    /// Orders whose `user_id` is `user`.
    pub(crate) async fn list_user_orders(
        &self,
        token: &str,
        user: UserId,
    ) -> Result<Vec<OrderRecord>, PlatformError> {
        let rows = self
            .tables
            .select(token, &Select::table(Table::Orders).eq("user_id", user.get()))
            .await?;

        decode_rows(rows)
    }

    pub(crate) async fn delete_user(&self, token: &str, user: UserId) -> Result<u64, PlatformError> {
        self.tables
            .delete(
                token,
                Table::Users,
                &[Filter::eq(Table::Users.primary_key(), user.get())],
            )
            .await
    }
}
