//! Action handlers organized by category

/// Brush, tool and cell painting handlers
pub mod color;

/// File operations handlers (save, load, export, clipboard)
pub mod file_ops;

/// Cursor navigation handlers
pub mod navigation;

/// Popup and overlay management handlers
pub mod popups;

/// Template add, remove and clear handlers
pub mod templates;
