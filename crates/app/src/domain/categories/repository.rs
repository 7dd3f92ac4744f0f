//! Categories Repository

use std::sync::Arc;

use crate::{
    domain::categories::{
        data::CategoryDraft,
        records::{CategoryId, CategoryRecord},
    },
    platform::{Filter, PlatformError, Select, Table, TableStore, decode_row, decode_rows},
};

#[derive(Clone)]
pub(crate) struct CategoriesRepository {
    tables: Arc<dyn TableStore>,
}

impl CategoriesRepository {
    pub(crate) fn new(tables: Arc<dyn TableStore>) -> Self {
        Self { tables }
    }

    fn key(category: CategoryId) -> Filter {
        Filter::eq(Table::Categories.primary_key(), category.get())
    }

    pub(crate) async fn list_categories(
        &self,
        token: &str,
    ) -> Result<Vec<CategoryRecord>, PlatformError> {
        let rows = self
            .tables
            .select(token, &Select::table(Table::Categories))
            .await?;

        decode_rows(rows)
    }

    pub(crate) async fn create_category(
        &self,
        token: &str,
        draft: &CategoryDraft,
    ) -> Result<CategoryRecord, PlatformError> {
        let row = self
            .tables
            .insert(token, Table::Categories, serde_json::to_value(draft)?)
            .await?;

        decode_row(row)
    }

    pub(crate) async fn update_category(
        &self,
        token: &str,
        category: CategoryId,
        draft: &CategoryDraft,
    ) -> Result<Option<CategoryRecord>, PlatformError> {
        let rows = self
            .tables
            .update(
                token,
                Table::Categories,
                &[Self::key(category)],
                serde_json::to_value(draft)?,
            )
            .await?;

        rows.into_iter().next().map(decode_row).transpose()
    }

    pub(crate) async fn delete_category(
        &self,
        token: &str,
        category: CategoryId,
    ) -> Result<u64, PlatformError> {
        self.tables
            .delete(token, Table::Categories, &[Self::key(category)])
            .await
    }
}
