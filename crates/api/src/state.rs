/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (a single SQLite connection).
    pub pool: knitnote_db::DbPool,
}
