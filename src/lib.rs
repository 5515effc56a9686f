//! Todolist - Main Library
//!
//! A per-user todo list: an Axum REST backend over a SQLite item store and a
//! native egui client that applies every change optimistically and rolls it
//! back when the server disagrees.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - `Item`, the completion `Filter`
//!   - Validation and serialization errors
//!   - Client connection configuration
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - `/todos` CRUD handlers and request identity
//!   - `TodoService` business rules
//!   - `ItemStore` trait and its SQLite implementation
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - `TodoStore` optimistic client state
//!   - REST client and background sync driver
//!   - Views
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (Axum, sqlx). On by default.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use todolist::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::default()).await?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```rust,no_run
//! use todolist::egui_app::{Config, TodoApp};
//!
//! let options = eframe::NativeOptions::default();
//! eframe::run_native(
//!     "Todos",
//!     options,
//!     Box::new(|cc| Ok(Box::new(TodoApp::new(Config::new(), &cc.egui_ctx)?))),
//! )
//! .ok();
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation and serialization
//! - `backend::BackendError`, mapped to HTTP statuses
//! - `egui_app::ApiError` and `egui_app::ClientError` on the client

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
