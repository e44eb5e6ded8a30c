/// State management module
///
/// This module handles all application state, including:
/// - The in-memory icon catalog and folder groups (catalog.rs)
/// - Shared data structures (data.rs)
/// - Viewer configuration (settings.rs)

pub mod catalog;
pub mod data;
pub mod settings;
