//! Theme Module
//!
//! Color scheme and frame builders for the todo list.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::styles;
//!
//! styles::apply_global_theme(ctx);
//! styles::row_frame().show(ui, |ui| {
//!     // Row content
//! });
//! ```

pub mod colors;
pub mod styles;

pub use styles::*;
