use std::sync::Arc;

use crate::listing::ApartmentService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: estate_db::DbPool,
    /// Apartment resource service (validation, uploads, persistence).
    pub apartments: Arc<ApartmentService>,
}
