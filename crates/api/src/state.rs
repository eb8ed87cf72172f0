use std::sync::Arc;

use storefront_db::repositories::ProductRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by health and diagnostics routes.
    pub pool: storefront_db::DbPool,
    /// Data access for the `products` table.
    pub products: ProductRepo,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: storefront_db::DbPool, config: ServerConfig) -> Self {
        Self {
            products: ProductRepo::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
