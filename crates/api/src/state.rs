use std::sync::Arc;

use skillconnect_storage::ObjectStore;

use crate::config::ServerConfig;
use crate::geocoding::ReverseGeocoder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: skillconnect_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image bucket.
    pub objects: Arc<dyn ObjectStore>,
    /// Coordinates-to-address lookup used to backfill empty addresses.
    pub geocoder: Arc<dyn ReverseGeocoder>,
}
