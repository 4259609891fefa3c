//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, the pegboard size and storage keys.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Bead Grid Designer";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "beadgrid";

/// Side length of every pegboard template, in beads.
///
/// A standard large square pegboard holds 29x29 beads.
pub const GRID_SIZE: usize = 29;

/// Number of user-defined color slots next to the bead palette.
pub const CUSTOM_COLOR_SLOTS: usize = 10;

/// Storage key holding the serialized template layout.
pub const DESIGN_STORAGE_KEY: &str = "perler-bead-design";

/// Storage key holding the serialized custom color slots.
pub const CUSTOM_COLORS_STORAGE_KEY: &str = "perler-bead-custom-colors";

/// How long transient status messages stay visible, in milliseconds.
pub const STATUS_MESSAGE_TIMEOUT_MS: u64 = 2000;
