//! In-memory table store.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::platform::{Filter, PlatformError, Select, Table, TableStore};

type Rows = FxHashMap<Table, Vec<Value>>;

#[derive(Debug, Default)]
pub struct MemoryTableStore {
    tables: Mutex<Rows>,
}

impl MemoryTableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every row currently in `table`.
    pub async fn rows(&self, table: Table) -> Vec<Value> {
        self.tables
            .lock()
            .await
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }

    /// Insert rows with the same checks as [`TableStore::insert`].
    ///
    /// # Errors
    ///
    /// Returns the first constraint violation encountered.
    pub async fn seed(
        &self,
        table: Table,
        rows: impl IntoIterator<Item = Value> + Send,
    ) -> Result<(), PlatformError> {
        let mut tables = self.tables.lock().await;

        for row in rows {
            insert_row(&mut tables, table, row)?;
        }

        Ok(())
    }
}

#[async_trait]
impl TableStore for MemoryTableStore {
    async fn select(&self, _token: &str, query: &Select) -> Result<Vec<Value>, PlatformError> {
        let tables = self.tables.lock().await;

        let rows = tables.get(&query.table).map_or(&[][..], Vec::as_slice);

        let mut selected = Vec::new();

        for row in rows
            .iter()
            .filter(|row| query.filters.iter().all(|filter| filter.matches(row)))
        {
            let embedded = match query.embed {
                Some(embed) => match find_by_key(&tables, embed, row.get(embed.primary_key())) {
                    Some(related) => Some((embed, related.clone())),
                    None => continue,
                },
                None => None,
            };

            let mut projected = project(row, &query.columns);

            if let (Some((embed, related)), Value::Object(fields)) = (embedded, &mut projected) {
                fields.insert(embed.name().to_string(), related);
            }

            selected.push(projected);
        }

        Ok(selected)
    }

    async fn count(&self, _token: &str, table: Table) -> Result<u64, PlatformError> {
        Ok(self.tables.lock().await.get(&table).map_or(0, Vec::len) as u64)
    }

    async fn insert(&self, _token: &str, table: Table, row: Value) -> Result<Value, PlatformError> {
        insert_row(&mut *self.tables.lock().await, table, row)
    }

    async fn update(
        &self,
        _token: &str,
        table: Table,
        filters: &[Filter],
        patch: Value,
    ) -> Result<Vec<Value>, PlatformError> {
        let Value::Object(patch) = patch else {
            return Err(not_an_object());
        };

        let mut tables = self.tables.lock().await;

        if let Some((column, target)) = table.reference() {
            check_reference(&tables, column, target, patch.get(column))?;
        }

        let mut updated = Vec::new();

        for row in tables.entry(table).or_default().iter_mut() {
            if !filters.iter().all(|filter| filter.matches(row)) {
                continue;
            }

            if let Value::Object(fields) = row {
                for (column, value) in &patch {
                    fields.insert(column.clone(), value.clone());
                }
            }

            updated.push(row.clone());
        }

        Ok(updated)
    }

    async fn delete(
        &self,
        _token: &str,
        table: Table,
        filters: &[Filter],
    ) -> Result<u64, PlatformError> {
        let mut tables = self.tables.lock().await;
        let rows = tables.entry(table).or_default();
        let before = rows.len();

        rows.retain(|row| !filters.iter().all(|filter| filter.matches(row)));

        Ok((before - rows.len()) as u64)
    }
}

fn insert_row(tables: &mut Rows, table: Table, row: Value) -> Result<Value, PlatformError> {
    let Value::Object(mut fields) = row else {
        return Err(not_an_object());
    };

    let key = table.primary_key();

    match fields.get(key) {
        None | Some(Value::Null) => {
            let next = tables
                .get(&table)
                .into_iter()
                .flatten()
                .filter_map(|row| row.get(key).and_then(Value::as_i64))
                .max()
                .unwrap_or(0)
                + 1;

            fields.insert(key.to_string(), Value::from(next));
        }
        Some(value) => {
            if find_by_key(tables, table, Some(value)).is_some() {
                return Err(PlatformError::api(
                    409,
                    "23505",
                    format!("duplicate key value violates unique constraint \"{table}_pkey\""),
                ));
            }
        }
    }

    if let Some((column, target)) = table.reference() {
        check_reference(tables, column, target, fields.get(column))?;
    }

    let row = Value::Object(fields);

    tables.entry(table).or_default().push(row.clone());

    Ok(row)
}

fn find_by_key<'a>(tables: &'a Rows, table: Table, key: Option<&Value>) -> Option<&'a Value> {
    let key = key.filter(|key| !key.is_null())?;

    tables
        .get(&table)?
        .iter()
        .find(|row| row.get(table.primary_key()) == Some(key))
}

fn check_reference(
    tables: &Rows,
    column: &str,
    target: Table,
    value: Option<&Value>,
) -> Result<(), PlatformError> {
    match value {
        None | Some(Value::Null) => Ok(()),
        Some(value) if find_by_key(tables, target, Some(value)).is_some() => Ok(()),
        Some(value) => Err(PlatformError::api(
            409,
            "23503",
            format!("key ({column})=({value}) is not present in table \"{target}\""),
        )),
    }
}

fn project(row: &Value, columns: &[&'static str]) -> Value {
    if columns.is_empty() {
        return row.clone();
    }

    let fields: Map<String, Value> = columns
        .iter()
        .filter_map(|column| {
            row.get(*column)
                .map(|value| ((*column).to_string(), value.clone()))
        })
        .collect();

    Value::Object(fields)
}

fn not_an_object() -> PlatformError {
    PlatformError::api(400, "PGRST102", "row must be a JSON object")
}
