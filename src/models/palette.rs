//! Bead color palette and user-defined custom color slots.
//!
//! The fixed palette mirrors the colors sold in standard bead kits and is
//! loaded from embedded JSON, two rows of ten.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::RgbColor;
use crate::constants::CUSTOM_COLOR_SLOTS;

/// The fixed set of named bead colors.
#[derive(Debug, Clone, Deserialize)]
pub struct BeadPalette {
    /// Display rows, top to bottom.
    rows: Vec<Vec<PaletteColor>>,
}

/// A single named bead color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteColor {
    /// Display name (e.g., "Dark Red").
    pub name: String,
    /// Color value.
    #[serde(rename = "hex")]
    pub color: RgbColor,
}

impl BeadPalette {
    /// Load the palette from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/bead_palette.json");
        let palette: Self = serde_json::from_str(json_data)?;
        Ok(palette)
    }

    /// Colors grouped in their display rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<PaletteColor>] {
        &self.rows
    }

    /// All colors in reading order.
    pub fn colors(&self) -> impl Iterator<Item = &PaletteColor> + '_ {
        self.rows.iter().flatten()
    }

    /// Get a color by its reading-order index.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<&PaletteColor> {
        self.colors().nth(index)
    }

    /// Get the number of colors.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Palette name of a color.
    #[must_use]
    pub fn name_of(&self, color: RgbColor) -> Option<&str> {
        self.colors()
            .find(|c| c.color == color)
            .map(|c| c.name.as_str())
    }

    /// Display name of any color: the palette name, else `Custom N` for the
    /// first custom slot holding it, else `Unknown`.
    #[must_use]
    pub fn display_name(&self, color: RgbColor, custom: &CustomColors) -> String {
        if let Some(name) = self.name_of(color) {
            return name.to_string();
        }
        match custom.slot_of(color) {
            Some(slot) => format!("Custom {}", slot + 1),
            None => "Unknown".to_string(),
        }
    }
}

impl Default for BeadPalette {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::error!(error = %format!("{e:#}"), "embedded bead palette is unreadable");
            Self { rows: Vec::new() }
        })
    }
}

/// User-defined colors kept next to the fixed palette.
///
/// Serialized as a JSON array with one entry per slot: `null` for an empty
/// slot, `"#RRGGBB"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomColors {
    slots: [Option<RgbColor>; CUSTOM_COLOR_SLOTS],
}

impl CustomColors {
    /// All slots empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; CUSTOM_COLOR_SLOTS],
        }
    }

    /// Builds slots from a list, accepted only when it has exactly one entry
    /// per slot.
    #[must_use]
    pub fn from_slots(slots: &[Option<RgbColor>]) -> Option<Self> {
        let slots: [Option<RgbColor>; CUSTOM_COLOR_SLOTS] = slots.try_into().ok()?;
        Some(Self { slots })
    }

    /// Slot contents, 0-based.
    #[must_use]
    pub const fn slots(&self) -> &[Option<RgbColor>; CUSTOM_COLOR_SLOTS] {
        &self.slots
    }

    /// Color in a 0-based slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<RgbColor> {
        self.slots.get(slot).copied().flatten()
    }

    /// Stores or clears the color of a 0-based slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist.
    pub fn set(&mut self, slot: usize, color: Option<RgbColor>) -> Result<()> {
        let Some(entry) = self.slots.get_mut(slot) else {
            anyhow::bail!(
                "Custom color slot {} does not exist (valid: 1-{})",
                slot + 1,
                CUSTOM_COLOR_SLOTS
            );
        };
        *entry = color;
        Ok(())
    }

    /// First 0-based slot holding the color.
    #[must_use]
    pub fn slot_of(&self, color: RgbColor) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(color))
    }

    /// Whether no slot holds a color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for CustomColors {
    fn default() -> Self {
        Self::new()
    }
}
