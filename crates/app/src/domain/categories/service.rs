//! Categories service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    cache::EntityCache,
    domain::{
        assets::{AssetStore, CATEGORY_ICONS, warn_orphaned},
        categories::{
            data::CategoryDraft,
            errors::CategoriesServiceError,
            records::{CategoryId, CategoryRecord},
            repository::CategoriesRepository,
        },
    },
    platform::{FileUpload, ObjectStore, Table, TableStore},
    session::SessionContext,
};

#[derive(Clone)]
pub struct PlatformCategoriesService {
    repository: CategoriesRepository,
    assets: AssetStore,
    cache: Arc<EntityCache>,
}

impl PlatformCategoriesService {
    #[must_use]
    pub fn new(
        tables: Arc<dyn TableStore>,
        objects: Arc<dyn ObjectStore>,
        cache: Arc<EntityCache>,
    ) -> Self {
        Self {
            repository: CategoriesRepository::new(tables),
            assets: AssetStore::new(objects),
            cache,
        }
    }
}

#[async_trait]
impl CategoriesService for PlatformCategoriesService {
    async fn list_categories(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        if let Some(cached) = self
            .cache
            .get::<Vec<CategoryRecord>>(Table::Categories)
            .await
        {
            return Ok(cached.as_ref().clone());
        }

        let categories = self.repository.list_categories(session.token()).await?;

        self.cache.put(Table::Categories, categories.clone()).await;

        Ok(categories)
    }

    async fn create_category(
        &self,
        session: &SessionContext,
        mut draft: CategoryDraft,
        icon: Option<FileUpload>,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let asset = self
            .assets
            .store_optional(session.token(), CATEGORY_ICONS, icon)
            .await
            .map_err(CategoriesServiceError::Upload)?;

        if let Some(asset) = &asset {
            draft.icon_url = Some(asset.public_url.clone());
        }

        let created = self
            .repository
            .create_category(session.token(), &draft)
            .await
            .inspect_err(|error| warn_orphaned(asset.as_ref(), error))?;

        self.cache.invalidate(Table::Categories).await;

        Ok(created)
    }

    async fn update_category(
        &self,
        session: &SessionContext,
        category: CategoryId,
        mut draft: CategoryDraft,
        icon: Option<FileUpload>,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let asset = self
            .assets
            .store_optional(session.token(), CATEGORY_ICONS, icon)
            .await
            .map_err(CategoriesServiceError::Upload)?;

        draft.icon_url = asset.as_ref().map(|asset| asset.public_url.clone());

        let updated = self
            .repository
            .update_category(session.token(), category, &draft)
            .await
            .inspect_err(|error| warn_orphaned(asset.as_ref(), error))?;

        self.cache.invalidate(Table::Categories).await;

        updated.ok_or(CategoriesServiceError::NotFound)
    }

    async fn delete_category(
        &self,
        session: &SessionContext,
        category: CategoryId,
    ) -> Result<(), CategoriesServiceError> {
        let rows_affected = self
            .repository
            .delete_category(session.token(), category)
            .await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        self.cache.invalidate(Table::Categories).await;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    async fn list_categories(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Uploads the optional icon, then inserts the category.
    async fn create_category(
        &self,
        session: &SessionContext,
        draft: CategoryDraft,
        icon: Option<FileUpload>,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Rename a category and optionally replace its icon.
    async fn update_category(
        &self,
        session: &SessionContext,
        category: CategoryId,
        draft: CategoryDraft,
        icon: Option<FileUpload>,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    async fn delete_category(
        &self,
        session: &SessionContext,
        category: CategoryId,
    ) -> Result<(), CategoriesServiceError>;
}
