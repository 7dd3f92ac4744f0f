//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    cache::EntityCache,
    domain::{
        categories::{CategoriesService, PlatformCategoriesService},
        collections::{CollectionsService, PlatformCollectionsService},
        dashboard::{DashboardService, PlatformDashboardService},
        orders::{OrdersService, PlatformOrdersService},
        products::{PlatformProductsService, ProductsService},
        users::{PlatformUsersService, UsersService},
    },
    platform::{
        IdentityProvider, ObjectStore, PlatformClient, PlatformConfig, PlatformError,
        RestIdentityProvider, RestObjectStore, RestTableStore, TableStore,
    },
    session::{PlatformSessionService, SessionService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build platform client")]
    Platform(#[source] PlatformError),
}

#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<dyn SessionService>,
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub users: Arc<dyn UsersService>,
    pub orders: Arc<dyn OrdersService>,
    pub collections: Arc<dyn CollectionsService>,
    pub dashboard: Arc<dyn DashboardService>,
}

impl AppContext {
    /// Build application context against the remote platform.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_platform_config(
        config: PlatformConfig,
        cache_ttl: Duration,
    ) -> Result<Self, AppInitError> {
        let client = PlatformClient::new(config).map_err(AppInitError::Platform)?;

        Ok(Self::with_stores(
            Arc::new(RestTableStore::new(client.clone())),
            Arc::new(RestObjectStore::new(client.clone())),
            Arc::new(RestIdentityProvider::new(client)),
            cache_ttl,
        ))
    }

    /// Wire every service over the given platform stores, sharing one entity cache.
    #[must_use]
    pub fn with_stores(
        tables: Arc<dyn TableStore>,
        objects: Arc<dyn ObjectStore>,
        identity: Arc<dyn IdentityProvider>,
        cache_ttl: Duration,
    ) -> Self {
        let cache = Arc::new(EntityCache::new(cache_ttl));

        Self {
            session: Arc::new(PlatformSessionService::new(identity)),
            products: Arc::new(PlatformProductsService::new(
                Arc::clone(&tables),
                Arc::clone(&objects),
                Arc::clone(&cache),
            )),
            categories: Arc::new(PlatformCategoriesService::new(
                Arc::clone(&tables),
                objects,
                Arc::clone(&cache),
            )),
            users: Arc::new(PlatformUsersService::new(
                Arc::clone(&tables),
                Arc::clone(&cache),
            )),
            orders: Arc::new(PlatformOrdersService::new(
                Arc::clone(&tables),
                Arc::clone(&cache),
            )),
            collections: Arc::new(PlatformCollectionsService::new(
                Arc::clone(&tables),
                cache,
            )),
            dashboard: Arc::new(PlatformDashboardService::new(tables)),
        }
    }
}
