//! Parsing and serialization of persisted data.
//!
//! This module turns stored design and custom-color payloads into models,
//! upgrading the legacy single-grid format on the way, and writes them back.

pub mod design;

// Re-export commonly used functions
pub use design::{parse_custom_colors, parse_design, serialize_custom_colors, serialize_design, ParsedDesign};
