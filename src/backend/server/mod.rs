//! Server Module
//!
//! Initialization and configuration of the axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports and documentation
//! ├── state.rs    - AppState and FromRef implementations
//! ├── config.rs   - Environment configuration and store loading
//! └── init.rs     - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Opening**: SQLite pool + migrations
//! 3. **State Creation**: `AppState` around the todo service
//! 4. **Router Creation**: routes, CORS and tracing layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::AppState;
pub use config::ServerConfig;
pub use init::create_app;
