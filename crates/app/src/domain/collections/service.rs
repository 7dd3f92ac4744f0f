//! Collections service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    cache::EntityCache,
    domain::{
        collections::{
            errors::CollectionsServiceError,
            records::{Collection, CollectionEntry, Membership},
            repository::CollectionsRepository,
        },
        products::records::ProductId,
    },
    platform::TableStore,
    session::SessionContext,
};

#[derive(Clone)]
pub struct PlatformCollectionsService {
    repository: CollectionsRepository,
    cache: Arc<EntityCache>,
}

impl PlatformCollectionsService {
    #[must_use]
    pub fn new(tables: Arc<dyn TableStore>, cache: Arc<EntityCache>) -> Self {
        Self {
            repository: CollectionsRepository::new(tables),
            cache,
        }
    }
}

#[async_trait]
impl CollectionsService for PlatformCollectionsService {
    async fn list_entries(
        &self,
        session: &SessionContext,
        collection: Collection,
    ) -> Result<Vec<CollectionEntry>, CollectionsServiceError> {
        if let Some(cached) = self
            .cache
            .get::<Vec<CollectionEntry>>(collection.table())
            .await
        {
            return Ok(cached.as_ref().clone());
        }

        let entries = self
            .repository
            .list_entries(session.token(), collection)
            .await?;

        self.cache.put(collection.table(), entries.clone()).await;

        Ok(entries)
    }

    async fn member_ids(
        &self,
        session: &SessionContext,
        collection: Collection,
    ) -> Result<FxHashSet<ProductId>, CollectionsServiceError> {
        let entries = self.list_entries(session, collection).await?;

        Ok(entries.iter().map(|entry| entry.product_id).collect())
    }

    async fn add_product(
        &self,
        session: &SessionContext,
        collection: Collection,
        product: ProductId,
    ) -> Result<(), CollectionsServiceError> {
        self.repository
            .add_product(session.token(), collection, product)
            .await?;

        self.cache.invalidate(collection.table()).await;

        Ok(())
    }

    async fn remove_product(
        &self,
        session: &SessionContext,
        collection: Collection,
        product: ProductId,
    ) -> Result<(), CollectionsServiceError> {
        let rows_affected = self
            .repository
            .remove_product(session.token(), collection, product)
            .await?;

        if rows_affected == 0 {
            return Err(CollectionsServiceError::NotMember);
        }

        self.cache.invalidate(collection.table()).await;

        Ok(())
    }

    async fn toggle_product(
        &self,
        session: &SessionContext,
        collection: Collection,
        product: ProductId,
    ) -> Result<Membership, CollectionsServiceError> {
        let is_member = self
            .repository
            .list_entries(session.token(), collection)
            .await?
            .iter()
            .any(|entry| entry.product_id == product);

        let membership = if is_member {
            self.remove_product(session, collection, product).await?;

            Membership::Removed
        } else {
            self.add_product(session, collection, product).await?;

            Membership::Added
        };

        debug!(%collection, %product, ?membership, "collection membership toggled");

        Ok(membership)
    }
}

#[automock]
#[async_trait]
pub trait CollectionsService: Send + Sync {
    /// Members of `collection` with their products embedded.
    async fn list_entries(
        &self,
        session: &SessionContext,
        collection: Collection,
    ) -> Result<Vec<CollectionEntry>, CollectionsServiceError>;

    async fn member_ids(
        &self,
        session: &SessionContext,
        collection: Collection,
    ) -> Result<FxHashSet<ProductId>, CollectionsServiceError>;

    async fn add_product(
        &self,
        session: &SessionContext,
        collection: Collection,
        product: ProductId,
    ) -> Result<(), CollectionsServiceError>;

    async fn remove_product(
        &self,
        session: &SessionContext,
        collection: Collection,
        product: ProductId,
    ) -> Result<(), CollectionsServiceError>;

    /// Add the product when absent, remove it when present. Membership is read
    /// from the table, never from the cache.
    async fn toggle_product(
        &self,
        session: &SessionContext,
        collection: Collection,
        product: ProductId,
    ) -> Result<Membership, CollectionsServiceError>;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use crate::{
        domain::products::{ProductsService, data::ProductForm},
        platform::Table,
        test::{TestContext, helpers},
    };

    use super::*;

    #[tokio::test]
    async fn toggle_adds_exactly_once_then_removes() -> TestResult {
        let ctx = TestContext::new().await;
        let shoe = helpers::create_product(&ctx, "Canvas Shoe", 12).await?;

        let first = ctx
            .collections
            .toggle_product(&ctx.session, Collection::Featured, shoe.id)
            .await?;

        assert_eq!(first, Membership::Added);

        let entries = ctx
            .collections
            .list_entries(&ctx.session, Collection::Featured)
            .await?;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].product, shoe);

        let second = ctx
            .collections
            .toggle_product(&ctx.session, Collection::Featured, shoe.id)
            .await?;

        assert_eq!(second, Membership::Removed);
        assert!(
            ctx.collections
                .list_entries(&ctx.session, Collection::Featured)
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn toggle_sees_members_added_by_another_client() -> TestResult {
        let ctx = TestContext::new().await;
        let shoe = helpers::create_product(&ctx, "Canvas Shoe", 12).await?;

        let other = PlatformCollectionsService::new(
            ctx.tables.clone(),
            Arc::new(EntityCache::new(Duration::from_secs(30))),
        );

        assert!(
            other
                .list_entries(&ctx.session, Collection::Featured)
                .await?
                .is_empty()
        );

        ctx.collections
            .add_product(&ctx.session, Collection::Featured, shoe.id)
            .await?;

        let membership = other
            .toggle_product(&ctx.session, Collection::Featured, shoe.id)
            .await?;

        assert_eq!(membership, Membership::Removed);
        assert!(ctx.tables.rows(Table::FeaturedProducts).await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn collections_are_independent() -> TestResult {
        let ctx = TestContext::new().await;
        let shoe = helpers::create_product(&ctx, "Canvas Shoe", 12).await?;

        ctx.collections
            .add_product(&ctx.session, Collection::Popular, shoe.id)
            .await?;

        let featured = ctx
            .collections
            .member_ids(&ctx.session, Collection::Featured)
            .await?;
        let popular = ctx
            .collections
            .member_ids(&ctx.session, Collection::Popular)
            .await?;

        assert!(featured.is_empty());
        assert!(popular.contains(&shoe.id));

        Ok(())
    }

    #[tokio::test]
    async fn adding_twice_is_already_member() -> TestResult {
        let ctx = TestContext::new().await;
        let shoe = helpers::create_product(&ctx, "Canvas Shoe", 12).await?;

        ctx.collections
            .add_product(&ctx.session, Collection::Featured, shoe.id)
            .await?;

        let result = ctx
            .collections
            .add_product(&ctx.session, Collection::Featured, shoe.id)
            .await;

        assert!(
            matches!(result, Err(CollectionsServiceError::AlreadyMember)),
            "expected AlreadyMember, got {result:?}"
        );
        assert_eq!(ctx.tables.rows(Table::FeaturedProducts).await.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn adding_unknown_product_is_product_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .collections
            .add_product(&ctx.session, Collection::Featured, ProductId::new(404))
            .await;

        assert!(
            matches!(result, Err(CollectionsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn removing_non_member_is_not_member() -> TestResult {
        let ctx = TestContext::new().await;
        let shoe = helpers::create_product(&ctx, "Canvas Shoe", 12).await?;

        let result = ctx
            .collections
            .remove_product(&ctx.session, Collection::Popular, shoe.id)
            .await;

        assert!(
            matches!(result, Err(CollectionsServiceError::NotMember)),
            "expected NotMember, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn renaming_a_product_refreshes_collection_listing() -> TestResult {
        let ctx = TestContext::new().await;
        let shoe = helpers::create_product(&ctx, "Canvas Shoe", 12).await?;

        ctx.collections
            .add_product(&ctx.session, Collection::Featured, shoe.id)
            .await?;

        let before = ctx
            .collections
            .list_entries(&ctx.session, Collection::Featured)
            .await?;

        assert_eq!(before[0].product.name, "Canvas Shoe");

        let draft = ProductForm {
            name: "Leather Shoe".to_string(),
            selling_price: "10".to_string(),
            ..Default::default()
        }
        .parse()?;

        ctx.products
            .update_product(&ctx.session, shoe.id, draft, None)
            .await?;

        let after = ctx
            .collections
            .list_entries(&ctx.session, Collection::Featured)
            .await?;

        assert_eq!(after[0].product.name, "Leather Shoe");

        Ok(())
    }
}
