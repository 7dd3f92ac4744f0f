//! Products Repository

use std::sync::Arc;

use crate::{
    domain::products::{
        data::ProductDraft,
        records::{ProductId, ProductRecord},
    },
    platform::{Filter, PlatformError, Select, Table, TableStore, decode_row, decode_rows},
};

#[derive(Clone)]
pub(crate) struct ProductsRepository {
    tables: Arc<dyn TableStore>,
}

impl ProductsRepository {
    pub(crate) fn new(tables: Arc<dyn TableStore>) -> Self {
        Self { tables }
    }

    fn key(product: ProductId) -> Filter {
        Filter::eq(Table::Products.primary_key(), product.get())
    }

    pub(crate) async fn list_products(
        &self,
        token: &str,
    ) -> Result<Vec<ProductRecord>, PlatformError> {
        let rows = self
            .tables
            .select(token, &Select::table(Table::Products))
            .await?;

        decode_rows(rows)
    }

    pub(crate) async fn get_product(
        &self,
        token: &str,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, PlatformError> {
        let rows = self
            .tables
            .select(
                token,
                &Select::table(Table::Products).eq(Table::Products.primary_key(), product.get()),
            )
            .await?;

        rows.into_iter().next().map(decode_row).transpose()
    }

    pub(crate) async fn create_product(
        &self,
        token: &str,
        draft: &ProductDraft,
    ) -> Result<ProductRecord, PlatformError> {
        let row = self
            .tables
            .insert(token, Table::Products, serde_json::to_value(draft)?)
            .await?;

        decode_row(row)
    }

    pub(crate) async fn update_product(
        &self,
        token: &str,
        product: ProductId,
        draft: &ProductDraft,
    ) -> Result<Option<ProductRecord>, PlatformError> {
        let rows = self
            .tables
            .update(
                token,
                Table::Products,
                &[Self::key(product)],
                serde_json::to_value(draft)?,
            )
            .await?;

        rows.into_iter().next().map(decode_row).transpose()
    }

    pub(crate) async fn delete_product(
        &self,
        token: &str,
        product: ProductId,
    ) -> Result<u64, PlatformError> {
        self.tables
            .delete(token, Table::Products, &[Self::key(product)])
            .await
    }
}
