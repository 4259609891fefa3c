//! Export functionality for bead designs.
//!
//! This module turns a design into bead counts and a printable Markdown
//! pattern sheet.

pub mod bead_quantities;
pub mod pattern_sheet;

pub use bead_quantities::{overall_quantities, shopping_list, template_quantities, ColorQuantity};
pub use pattern_sheet::{default_sheet_path, export_to_markdown, SheetOptions};
