//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    cache::EntityCache,
    domain::{
        assets::{AssetStore, PRODUCT_IMAGES, warn_orphaned},
        products::{
            data::ProductDraft,
            errors::ProductsServiceError,
            listing,
            records::{ProductId, ProductRecord},
            repository::ProductsRepository,
        },
    },
    platform::{FileUpload, ObjectStore, Table, TableStore},
    session::SessionContext,
};

#[derive(Clone)]
pub struct PlatformProductsService {
    repository: ProductsRepository,
    assets: AssetStore,
    cache: Arc<EntityCache>,
}

impl PlatformProductsService {
    #[must_use]
    pub fn new(
        tables: Arc<dyn TableStore>,
        objects: Arc<dyn ObjectStore>,
        cache: Arc<EntityCache>,
    ) -> Self {
        Self {
            repository: ProductsRepository::new(tables),
            assets: AssetStore::new(objects),
            cache,
        }
    }
}

#[async_trait]
impl ProductsService for PlatformProductsService {
    async fn list_products(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        if let Some(cached) = self
            .cache
            .get::<Vec<ProductRecord>>(Table::Products)
            .await
        {
            return Ok(cached.as_ref().clone());
        }

        let products = self.repository.list_products(session.token()).await?;

        self.cache.put(Table::Products, products.clone()).await;

        Ok(products)
    }

    async fn search_products(
        &self,
        session: &SessionContext,
        term: &str,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.list_products(session).await?;

        Ok(listing::search_products(products, term))
    }

    async fn get_product(
        &self,
        session: &SessionContext,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .get_product(session.token(), product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        session: &SessionContext,
        mut draft: ProductDraft,
        image: Option<FileUpload>,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let asset = self
            .assets
            .store_optional(session.token(), PRODUCT_IMAGES, image)
            .await
            .map_err(ProductsServiceError::Upload)?;

        if let Some(asset) = &asset {
            draft.image_url = Some(asset.public_url.clone());
        }

        let created = self
            .repository
            .create_product(session.token(), &draft)
            .await
            .inspect_err(|error| warn_orphaned(asset.as_ref(), error))?;

        self.cache.invalidate(Table::Products).await;

        Ok(created)
    }

    async fn update_product(
        &self,
        session: &SessionContext,
        product: ProductId,
        mut draft: ProductDraft,
        image: Option<FileUpload>,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let asset = self
            .assets
            .store_optional(session.token(), PRODUCT_IMAGES, image)
            .await
            .map_err(ProductsServiceError::Upload)?;

        draft.image_url = asset.as_ref().map(|asset| asset.public_url.clone());

        let updated = self
            .repository
            .update_product(session.token(), product, &draft)
            .await
            .inspect_err(|error| warn_orphaned(asset.as_ref(), error))?;

        self.cache.invalidate(Table::Products).await;

        updated.ok_or(ProductsServiceError::NotFound)
    }

    async fn delete_product(
        &self,
        session: &SessionContext,
        product: ProductId,
    ) -> Result<(), ProductsServiceError> {
        let rows_affected = self
            .repository
            .delete_product(session.token(), product)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        self.cache.invalidate(Table::Products).await;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Products whose name contains `term`, ignoring case.
    async fn search_products(
        &self,
        session: &SessionContext,
        term: &str,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        session: &SessionContext,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Uploads the optional image, then inserts the product.
    async fn create_product(
        &self,
        session: &SessionContext,
        draft: ProductDraft,
        image: Option<FileUpload>,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Uploads the optional image, then updates the product. Without an image
    /// the stored image URL is kept.
    async fn update_product(
        &self,
        session: &SessionContext,
        product: ProductId,
        draft: ProductDraft,
        image: Option<FileUpload>,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given ID.
    async fn delete_product(
        &self,
        session: &SessionContext,
        product: ProductId,
    ) -> Result<(), ProductsServiceError>;
}
