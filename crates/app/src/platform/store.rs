//! Table API store.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Method,
    header::{CONTENT_RANGE, HeaderMap},
};
use serde_json::Value;

use crate::platform::{
    Filter, PlatformClient, PlatformError, Select, Table, client::ensure_success,
};

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Row-level access to the remote tables.
///
/// Rows travel as raw JSON; callers decode them into typed records.
#[automock]
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Fetch every row matching the selection.
    async fn select(&self, token: &str, query: &Select) -> Result<Vec<Value>, PlatformError>;

    /// Exact number of rows in a table.
    async fn count(&self, token: &str, table: Table) -> Result<u64, PlatformError>;

    /// Insert one row and return it as stored.
    async fn insert(&self, token: &str, table: Table, row: Value) -> Result<Value, PlatformError>;

    /// Apply `patch` to every row matching `filters`, returning the updated rows.
    async fn update(
        &self,
        token: &str,
        table: Table,
        filters: &[Filter],
        patch: Value,
    ) -> Result<Vec<Value>, PlatformError>;

    /// Delete every row matching `filters`, returning how many were removed.
    async fn delete(
        &self,
        token: &str,
        table: Table,
        filters: &[Filter],
    ) -> Result<u64, PlatformError>;
}

/// [`TableStore`] backed by the platform's REST table API.
#[derive(Debug, Clone)]
pub struct RestTableStore {
    client: PlatformClient,
}

impl RestTableStore {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    fn path(table: Table) -> String {
        format!("/rest/v1/{}", table.name())
    }
}

#[async_trait]
impl TableStore for RestTableStore {
    async fn select(&self, token: &str, query: &Select) -> Result<Vec<Value>, PlatformError> {
        let response = self
            .client
            .authorized(Method::GET, &Self::path(query.table), token)
            .query(&query.query_pairs())
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn count(&self, token: &str, table: Table) -> Result<u64, PlatformError> {
        let response = self
            .client
            .authorized(Method::HEAD, &Self::path(table), token)
            .query(&[("select", "*")])
            .header(PREFER, "count=exact")
            .send()
            .await?;

        let response = ensure_success(response).await?;

        parse_content_range_total(response.headers())
    }

    async fn insert(&self, token: &str, table: Table, row: Value) -> Result<Value, PlatformError> {
        let response = self
            .client
            .authorized(Method::POST, &Self::path(table), token)
            .header(PREFER, RETURN_REPRESENTATION)
            .json(&row)
            .send()
            .await?;

        let rows: Vec<Value> = ensure_success(response).await?.json().await?;

        rows.into_iter().next().ok_or_else(|| {
            PlatformError::UnexpectedResponse(format!("insert into {table} returned no rows"))
        })
    }

    async fn update(
        &self,
        token: &str,
        table: Table,
        filters: &[Filter],
        patch: Value,
    ) -> Result<Vec<Value>, PlatformError> {
        let pairs: Vec<(String, String)> = filters.iter().map(Filter::query_pair).collect();

        let response = self
            .client
            .authorized(Method::PATCH, &Self::path(table), token)
            .query(&pairs)
            .header(PREFER, RETURN_REPRESENTATION)
            .json(&patch)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn delete(
        &self,
        token: &str,
        table: Table,
        filters: &[Filter],
    ) -> Result<u64, PlatformError> {
        let pairs: Vec<(String, String)> = filters.iter().map(Filter::query_pair).collect();

        let response = self
            .client
            .authorized(Method::DELETE, &Self::path(table), token)
            .query(&pairs)
            .header(PREFER, RETURN_REPRESENTATION)
            .send()
            .await?;

        let rows: Vec<Value> = ensure_success(response).await?.json().await?;

        Ok(rows.len() as u64)
    }
}

/// Read the total from a `Content-Range` header such as `0-24/310` or `*/0`.
fn parse_content_range_total(headers: &HeaderMap) -> Result<u64, PlatformError> {
    let range = headers
        .get(CONTENT_RANGE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| PlatformError::UnexpectedResponse("missing content-range".to_string()))?;

    range
        .rsplit_once('/')
        .and_then(|(_, total)| total.parse::<u64>().ok())
        .ok_or_else(|| PlatformError::UnexpectedResponse(format!("unreadable content-range {range}")))
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers(range: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_RANGE, HeaderValue::from_str(range).expect("valid header"));

        headers
    }

    #[test]
    fn content_range_total_reads_exact_count() {
        assert_eq!(parse_content_range_total(&headers("0-24/310")).ok(), Some(310));
        assert_eq!(parse_content_range_total(&headers("*/0")).ok(), Some(0));
    }

    #[test]
    fn content_range_without_total_is_rejected() {
        assert!(parse_content_range_total(&headers("0-24/*")).is_err());
        assert!(parse_content_range_total(&HeaderMap::new()).is_err());
    }
}
