//! Data models for bead grids, templates and their layout.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are independent of UI, storage and business logic; every mutation
//! returns a new value.

pub mod grid;
pub mod layout;
pub mod palette;
pub mod rgb;
pub mod template;

// Re-export all model types
pub use grid::{BeadGrid, Cell};
pub use layout::{AddRefusal, Direction, DisplayArrangement, RemoveRefusal, TemplateLayout};
pub use palette::{BeadPalette, CustomColors, PaletteColor};
pub use rgb::RgbColor;
pub use template::{Template, TemplateId};
