//! Entity Cache
//!
//! List results are cached per table and dropped explicitly whenever a
//! mutation touches that table. Entries also expire after a fixed TTL so that
//! writes made by other clients of the platform eventually show up.

use std::{
    any::Any,
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::trace;

use crate::platform::Table;

struct Entry {
    stored_at: Instant,
    value: Arc<dyn Any + Send + Sync>,
}

pub struct EntityCache {
    ttl: Duration,
    entries: RwLock<FxHashMap<Table, Entry>>,
}

impl EntityCache {
    /// Create a cache whose entries live for `ttl`. A zero TTL disables caching.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Cached value for `table`, if present, fresh, and of type `T`.
    pub async fn get<T: Any + Send + Sync>(&self, table: Table) -> Option<Arc<T>> {
        let entries = self.entries.read().await;
        let entry = entries.get(&table)?;

        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }

        trace!(%table, "entity cache hit");

        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    pub async fn put<T: Any + Send + Sync>(&self, table: Table, value: T) {
        if self.ttl.is_zero() {
            return;
        }

        self.entries.write().await.insert(
            table,
            Entry {
                stored_at: Instant::now(),
                value: Arc::new(value),
            },
        );
    }

    /// Drop the cached value for `table` and for every table that embeds it.
    pub async fn invalidate(&self, table: Table) {
        let mut entries = self.entries.write().await;

        entries.remove(&table);

        for dependent in table.dependents() {
            entries.remove(dependent);
        }

        trace!(%table, "entity cache invalidated");
    }
}

impl fmt::Debug for EntityCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn returns_stored_value() {
        let cache = EntityCache::new(MINUTE);

        cache.put(Table::Users, vec![1_u32, 2, 3]).await;

        let cached = cache.get::<Vec<u32>>(Table::Users).await;

        assert_eq!(cached.as_deref(), Some(&vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn wrong_type_is_a_miss() {
        let cache = EntityCache::new(MINUTE);

        cache.put(Table::Users, vec![1_u32]).await;

        assert!(cache.get::<String>(Table::Users).await.is_none());
    }

    #[tokio::test]
    async fn zero_ttl_never_caches() {
        let cache = EntityCache::new(Duration::ZERO);

        cache.put(Table::Orders, 5_u64).await;

        assert!(cache.get::<u64>(Table::Orders).await.is_none());
    }

    #[tokio::test]
    async fn invalidating_products_drops_collection_listings() {
        let cache = EntityCache::new(MINUTE);

        cache.put(Table::Products, 1_u8).await;
        cache.put(Table::FeaturedProducts, 2_u8).await;
        cache.put(Table::PopularProducts, 3_u8).await;
        cache.put(Table::Orders, 4_u8).await;

        cache.invalidate(Table::Products).await;

        assert!(cache.get::<u8>(Table::Products).await.is_none());
        assert!(cache.get::<u8>(Table::FeaturedProducts).await.is_none());
        assert!(cache.get::<u8>(Table::PopularProducts).await.is_none());
        assert_eq!(cache.get::<u8>(Table::Orders).await.as_deref(), Some(&4));
    }

    #[tokio::test]
    async fn invalidating_featured_keeps_products() {
        let cache = EntityCache::new(MINUTE);

        cache.put(Table::Products, 1_u8).await;
        cache.put(Table::FeaturedProducts, 2_u8).await;

        cache.invalidate(Table::FeaturedProducts).await;

        assert_eq!(cache.get::<u8>(Table::Products).await.as_deref(), Some(&1));
        assert!(cache.get::<u8>(Table::FeaturedProducts).await.is_none());
    }
}
