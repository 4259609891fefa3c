//! Shared plumbing for CLI commands: error type, exit codes and store lookup.

use clap::Args;
use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::services::{DesignService, FileStore, LoadedDesign};

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input or a refused operation
    Validation = 1,
    /// File system or serialization failure
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad input or a refused operation
    Validation,
    /// File system or serialization failure
    Io,
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category, decides the exit code
    pub kind: CliErrorKind,
    /// Message printed after `Error: `
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::Validation,
            CliErrorKind::Io => ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// `--store` option shared by every design command.
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Store file holding the design (default: configured storage file)
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

impl StoreArgs {
    /// Resolves the store file from the flag or the configuration.
    pub fn path(&self) -> CliResult<PathBuf> {
        if let Some(path) = &self.store {
            return Ok(path.clone());
        }

        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        config
            .storage_file()
            .map_err(|e| CliError::io(format!("Failed to resolve storage file: {e:#}")))
    }

    /// Opens the store.
    pub fn open(&self) -> CliResult<FileStore> {
        Ok(FileStore::new(self.path()?))
    }

    /// Opens the store and loads the design it holds.
    pub fn load(&self) -> CliResult<(FileStore, LoadedDesign)> {
        let store = self.open()?;
        let loaded = DesignService::load_required(&store).map_err(|e| {
            CliError::io(format!(
                "Failed to load design from {}: {e:#}",
                store.path().display()
            ))
        })?;
        Ok((store, loaded))
    }
}

/// Writes the design back, keeping the custom colors it was loaded with.
pub fn save_design(store: &mut FileStore, loaded: &LoadedDesign) -> CliResult<()> {
    let custom = loaded.custom_colors.unwrap_or_default();
    DesignService::save(store, &loaded.layout, &custom).map_err(|e| {
        CliError::io(format!(
            "Failed to save design to {}: {e:#}",
            store.path().display()
        ))
    })
}

/// Prints a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Converts a 1-based custom slot number to an index.
pub fn slot_index(slot: usize) -> CliResult<usize> {
    if (1..=crate::constants::CUSTOM_COLOR_SLOTS).contains(&slot) {
        Ok(slot - 1)
    } else {
        Err(CliError::validation(format!(
            "Slot must be between 1 and {}, got {slot}",
            crate::constants::CUSTOM_COLOR_SLOTS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), ExitCode::Validation);
        assert_eq!(CliError::io("disk").exit_code(), ExitCode::Io);
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::Validation.code(), 1);
        assert_eq!(ExitCode::Io.code(), 2);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(slot_index(1).unwrap(), 0);
        assert_eq!(slot_index(10).unwrap(), 9);
        assert!(slot_index(0).is_err());
        assert!(slot_index(11).is_err());
    }

    #[test]
    fn test_explicit_store_path() {
        let args = StoreArgs {
            store: Some(PathBuf::from("/tmp/design.json")),
        };
        assert_eq!(args.path().unwrap(), PathBuf::from("/tmp/design.json"));
    }
}
