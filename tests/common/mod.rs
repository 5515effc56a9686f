//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Item store fixtures
//! - Mock HTTP server helpers for the client
//! - Assertion helpers

#[cfg(feature = "ssr")]
pub mod database;
pub mod mock_server;

// Re-export commonly used utilities
pub use assertions::*;
#[cfg(feature = "ssr")]
pub use database::*;
pub use mock_server::*;
