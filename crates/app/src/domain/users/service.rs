//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    cache::EntityCache,
    domain::users::{
        errors::UsersServiceError,
        records::{UserId, UserOrders, UserRecord},
        repository::UsersRepository,
    },
    platform::{Table, TableStore},
    session::SessionContext,
};

#[derive(Clone)]
pub struct PlatformUsersService {
    repository: UsersRepository,
    cache: Arc<EntityCache>,
}

impl PlatformUsersService {
    #[must_use]
    pub fn new(tables: Arc<dyn TableStore>, cache: Arc<EntityCache>) -> Self {
        Self {
            repository: UsersRepository::new(tables),
            cache,
        }
    }
}

#[async_trait]
impl UsersService for PlatformUsersService {
    async fn list_users(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<UserRecord>, UsersServiceError> {
        if let Some(cached) = self.cache.get::<Vec<UserRecord>>(Table::Users).await {
            return Ok(cached.as_ref().clone());
        }

        let users = self.repository.list_users(session.token()).await?;

        self.cache.put(Table::Users, users.clone()).await;

        Ok(users)
    }

    async fn get_user(
        &self,
        session: &SessionContext,
        user: UserId,
    ) -> Result<UserRecord, UsersServiceError> {
        self.repository
            .get_user(session.token(), user)
            .await?
            .ok_or(UsersServiceError::NotFound)
    }

    async fn user_orders(
        &self,
        session: &SessionContext,
        user: UserId,
    ) -> Result<UserOrders, UsersServiceError> {
        let user = self.get_user(session, user).await?;

        let orders = self
            .repository
            .list_user_orders(session.token(), user.id)
            .await?;

        Ok(UserOrders { user, orders })
    }

    async fn delete_user(
        &self,
        session: &SessionContext,
        user: UserId,
    ) -> Result<(), UsersServiceError> {
        let rows_affected = self.repository.delete_user(session.token(), user).await?;

        if rows_affected == 0 {
            return Err(UsersServiceError::NotFound);
        }

        self.cache.invalidate(Table::Users).await;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    async fn list_users(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<UserRecord>, UsersServiceError>;

    async fn get_user(
        &self,
        session: &SessionContext,
        user: UserId,
    ) -> Result<UserRecord, UsersServiceError>;

    /// The user together with their order history.
    async fn user_orders(
        &self,
        session: &SessionContext,
        user: UserId,
    ) -> Result<UserOrders, UsersServiceError>;

    /// Delete the user row only. Their orders are left in place.
    async fn delete_user(
        &self,
        session: &SessionContext,
        user: UserId,
    ) -> Result<(), UsersServiceError>;
}
