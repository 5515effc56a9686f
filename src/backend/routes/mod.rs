//! Route Configuration Module
//!
//! HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly and layers
//! └── api_routes.rs   - `/todos` and `/health` routes
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let router = create_router(app_state, &[]);
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
