use std::sync::Arc;

use hamo_db::ExhibitStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Exhibit store. `MySqlStore` in production, an in-memory double in tests.
    pub store: Arc<dyn ExhibitStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ExhibitStore>) -> Self {
        Self { store }
    }
}
