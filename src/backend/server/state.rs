/**
 * Application State Management
 *
 * `AppState` is the state shared by every handler. It only holds the
 * todo service, which in turn holds the item store connection pool; both
 * are cheap to clone and safe to share across tasks.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers extract `State<TodoService>`
 * directly instead of the whole `AppState`.
 *
 * ```rust,ignore
 * async fn handler(State(service): State<TodoService>) {
 *     let items = service.list("demo").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::store::ItemStore;
use crate::backend::todos::TodoService;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Owner-scoped access to the item store
    pub todos: TodoService,
}

impl AppState {
    /// Build the state around an item store
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            todos: TodoService::new(store),
        }
    }
}

impl FromRef<AppState> for TodoService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.todos.clone()
    }
}
