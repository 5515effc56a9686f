//! Color constants for the todo list

use eframe::egui::Color32;

/// Page background
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);

/// Header bar background
pub const HEADER_BG: Color32 = Color32::from_rgb(0x2B, 0x57, 0x9A);

/// Row background
pub const ROW_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Row border
pub const ROW_BORDER: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);

/// Highlighted filter button
pub const FILTER_ACTIVE: Color32 = Color32::from_rgb(0x2B, 0x57, 0x9A);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Regular text
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x21, 0x21, 0x21);

/// Completed items and hints
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Error banner background
pub const ERROR_BG: Color32 = Color32::from_rgb(0xF8, 0xD7, 0xDA);

/// Error banner text
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0x72, 0x1C, 0x24);

/// Marker for rows with a request in flight
pub const SYNCING: Color32 = Color32::from_rgb(0xFF, 0xC1, 0x07);
