//! Design save/load service.
//!
//! This module centralizes reading and writing designs through a
//! [`KeyValueStore`], so the editor, the CLI and the TUI agree on keys,
//! formats and failure handling.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::constants::{CUSTOM_COLORS_STORAGE_KEY, DESIGN_STORAGE_KEY};
use crate::models::{CustomColors, TemplateLayout};
use crate::parser::{self, ParsedDesign};
use crate::services::storage::KeyValueStore;

/// Result of trying to load a design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A design was found and parsed.
    Loaded(LoadedDesign),
    /// The store holds no design.
    NotFound,
    /// The stored design could not be parsed; the reason is attached.
    Invalid(String),
}

/// A successfully loaded design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDesign {
    /// Parsed layout
    pub layout: TemplateLayout,
    /// Stored custom colors, when present and well-formed
    pub custom_colors: Option<CustomColors>,
    /// Whether the design was upgraded from the single-grid format
    pub upgraded: bool,
}

/// Service for persisting designs.
pub struct DesignService;

impl DesignService {
    /// Writes the layout and the custom colors under their storage keys.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either store write fails.
    pub fn save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        layout: &TemplateLayout,
        custom_colors: &CustomColors,
    ) -> Result<()> {
        let design = parser::serialize_design(layout)?;
        let colors = parser::serialize_custom_colors(custom_colors)?;

        store
            .set(DESIGN_STORAGE_KEY, &design)
            .context("Failed to store design")?;
        store
            .set(CUSTOM_COLORS_STORAGE_KEY, &colors)
            .context("Failed to store custom colors")?;

        info!(templates = layout.len(), beads = layout.bead_count(), "design saved");
        Ok(())
    }

    /// Reads the stored design.
    ///
    /// Custom colors are only read when the design itself parsed; malformed
    /// custom colors are ignored rather than failing the load.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself cannot be read.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<LoadOutcome> {
        let Some(payload) = store
            .get(DESIGN_STORAGE_KEY)
            .context("Failed to read stored design")?
        else {
            debug!("no stored design");
            return Ok(LoadOutcome::NotFound);
        };

        let (layout, upgraded) = match parser::parse_design(&payload) {
            ParsedDesign::Current(layout) => (layout, false),
            ParsedDesign::Legacy(layout) => {
                info!("upgraded single-grid design to template layout");
                (layout, true)
            }
            ParsedDesign::Invalid(reason) => {
                warn!(%reason, "stored design is invalid");
                return Ok(LoadOutcome::Invalid(reason));
            }
        };

        let custom_colors = match store.get(CUSTOM_COLORS_STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = parser::parse_custom_colors(&raw);
                if parsed.is_none() {
                    warn!("ignoring malformed custom colors");
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read custom colors");
                None
            }
        };

        Ok(LoadOutcome::Loaded(LoadedDesign {
            layout,
            custom_colors,
            upgraded,
        }))
    }

    /// Loads the stored design, treating "not found" and "invalid" as errors.
    ///
    /// Used by headless commands that need a design to operate on.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no usable design in the store.
    pub fn load_required<S: KeyValueStore + ?Sized>(store: &S) -> Result<LoadedDesign> {
        match Self::load(store)? {
            LoadOutcome::Loaded(design) => Ok(design),
            LoadOutcome::NotFound => anyhow::bail!("No saved design found"),
            LoadOutcome::Invalid(reason) => anyhow::bail!("Stored design is invalid: {reason}"),
        }
    }

    /// Whether the store holds a design key, whatever its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn has_saved<S: KeyValueStore + ?Sized>(store: &S) -> Result<bool> {
        Ok(store.get(DESIGN_STORAGE_KEY)?.is_some())
    }
}
