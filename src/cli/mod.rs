//! CLI command handlers for Bead Grid Designer.
//!
//! This module provides headless, scriptable access to stored designs
//! for automation and testing.

pub mod colors;
pub mod common;
pub mod config;
pub mod export;
pub mod inspect;
pub mod new;
pub mod paint;
pub mod template;

// Re-export types used by main.rs and tests
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use inspect::InspectArgs;
pub use new::NewArgs;
pub use paint::PaintArgs;
pub use template::TemplateArgs;
