//! egui Native Desktop App Module
//!
//! A native todo list client built on egui/eframe that talks to the
//! `/todos` REST API.
//!
//! # Architecture
//!
//! - **`config`** - Server URL and identity (`CLIENT_API_URL`, `CLIENT_USER_ID`)
//! - **`api`** - Async HTTP client for the `/todos` endpoints
//! - **`state`** - `TodoStore`, the optimistic client state, and its ledger
//! - **`sync`** - Runs store requests on tokio and feeds outcomes back
//! - **`types`** - View-local state and the actions views emit
//! - **`views`** - Add form, filter bar, list and row components
//! - **`theme`** - Colors and frames
//! - **`app`** - `eframe::App` implementation
//! - **`main`** - Binary entry point
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Main application entry point
//! ├── app.rs      - Frame loop and action handling
//! ├── config.rs   - Configuration
//! ├── api.rs      - REST client
//! ├── sync.rs     - Background request driver
//! ├── types.rs    - UI state and actions
//! ├── state/      - TodoStore, Observable, OptimisticLedger
//! ├── views/      - egui components
//! └── theme/      - Colors and frames
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin todo_app
//! ```

pub mod config;
pub mod api;
pub mod state;
pub mod sync;
pub mod types;
pub mod views;
pub mod theme;
pub mod app;

// Re-export commonly used types
pub use config::Config;
pub use api::{ApiError, ApiRequest, ApiResponse, TodoApiClient};
pub use state::{ClientError, Dispatch, TodoStore};
pub use sync::SyncDriver;
pub use types::{TodoAction, UiState};
pub use app::TodoApp;
