//! Bead Grid Designer Library
//!
//! This library provides the core of the Bead Grid Designer: bead grids and
//! the template layout they live in, persistence of designs through a
//! key-value store, bead quantities and printable pattern sheets, the
//! design editor controller, and the command-line and terminal front ends.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod editor;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;
