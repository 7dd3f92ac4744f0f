//! Collections Repository

use std::sync::Arc;

use serde_json::json;

use crate::{
    domain::{
        collections::records::{Collection, CollectionEntry},
        products::records::ProductId,
    },
    platform::{Filter, PlatformError, Select, Table, TableStore, decode_rows},
};

#[derive(Clone)]
pub(crate) struct CollectionsRepository {
    tables: Arc<dyn TableStore>,
}

impl CollectionsRepository {
    pub(crate) fn new(tables: Arc<dyn TableStore>) -> Self {
        Self { tables }
    }

    /// Join rows whose product still exists, each with the product embedded.
    pub(crate) async fn list_entries(
        &self,
        token: &str,
        collection: Collection,
    ) -> Result<Vec<CollectionEntry>, PlatformError> {
        let query = Select::table(collection.table())
            .columns(&["product_id"])
            .inner_join(Table::Products);

        let rows = self.tables.select(token, &query).await?;

        decode_rows(rows)
    }

    pub(crate) async fn add_product(
        &self,
        token: &str,
        collection: Collection,
        product: ProductId,
    ) -> Result<(), PlatformError> {
        self.tables
            .insert(token, collection.table(), json!({ "product_id": product }))
            .await?;

        Ok(())
    }

    pub(crate) async fn remove_product(
        &self,
        token: &str,
        collection: Collection,
        product: ProductId,
    ) -> Result<u64, PlatformError> {
        self.tables
            .delete(
                token,
                collection.table(),
                &[Filter::eq("product_id", product.get())],
            )
            .await
    }
}
