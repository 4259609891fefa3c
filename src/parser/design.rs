//! Persisted design format: parsing with legacy upgrade, and serialization.
//!
//! The current format is a JSON array of templates:
//!
//! ```json
//! [{ "id": "a1b2", "grid": [["", "#FF0000", ...], ...], "x": 0, "y": 0 }]
//! ```
//!
//! Each grid is `N x N` strings, `""` for an unset cell and `#RRGGBB`
//! otherwise. Early versions stored a single bare grid matrix with no
//! template wrapper; [`parse_design`] upgrades that into a one-template
//! layout at (0, 0).
//!
//! Template ids are written as strings; numeric ids from older saves are
//! read back as their decimal text.
//!
//! Custom colors are stored separately as a JSON array of
//! `null | "#RRGGBB"` with one entry per slot.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::GRID_SIZE;
use crate::models::{BeadGrid, Cell, CustomColors, RgbColor, Template, TemplateId, TemplateLayout};

/// Outcome of parsing a stored design payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDesign {
    /// Payload in the template-array format
    Current(TemplateLayout),
    /// Bare grid matrix upgraded to a single template at (0, 0)
    Legacy(TemplateLayout),
    /// Payload that is neither format, with the reason
    Invalid(String),
}

impl ParsedDesign {
    /// The parsed layout, if the payload was usable.
    #[must_use]
    pub fn into_layout(self) -> Option<TemplateLayout> {
        match self {
            Self::Current(layout) | Self::Legacy(layout) => Some(layout),
            Self::Invalid(_) => None,
        }
    }

    /// Short name of the detected format, for logs and CLI output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Current(_) => "current",
            Self::Legacy(_) => "legacy",
            Self::Invalid(_) => "invalid",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTemplate {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    grid: Vec<Vec<Option<String>>>,
    #[serde(default)]
    x: Option<i32>,
    #[serde(default)]
    y: Option<i32>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "template id must be a string or a number, got {other}"
        ))),
    }
}

/// Parses a stored design payload.
///
/// Never fails: anything that is not a well-formed current or legacy payload
/// comes back as [`ParsedDesign::Invalid`].
#[must_use]
pub fn parse_design(payload: &str) -> ParsedDesign {
    match detect_and_parse(payload) {
        Ok(parsed) => parsed,
        Err(e) => ParsedDesign::Invalid(format!("{e:#}")),
    }
}

fn detect_and_parse(payload: &str) -> Result<ParsedDesign> {
    let value: Value = serde_json::from_str(payload).context("Payload is not valid JSON")?;

    let Some(first) = value.as_array().and_then(|items| items.first()) else {
        anyhow::bail!("Payload is not a non-empty array");
    };

    if first.get("id").is_some_and(is_truthy) {
        let stored: Vec<StoredTemplate> =
            serde_json::from_value(value).context("Malformed template entry")?;
        let templates = stored
            .into_iter()
            .map(stored_to_template)
            .collect::<Result<Vec<_>>>()?;
        return Ok(ParsedDesign::Current(TemplateLayout::from_templates(
            templates,
        )?));
    }

    if first.is_array() {
        let rows: Vec<Vec<Option<String>>> =
            serde_json::from_value(value).context("Malformed legacy grid")?;
        let grid = decode_grid(rows)?;
        let template = Template::with_grid(TemplateId::generate(), grid, 0, 0);
        return Ok(ParsedDesign::Legacy(TemplateLayout::from_templates(vec![
            template,
        ])?));
    }

    anyhow::bail!("Payload is neither a template list nor a grid matrix")
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn stored_to_template(stored: StoredTemplate) -> Result<Template> {
    let grid = decode_grid(stored.grid)
        .with_context(|| format!("Invalid grid in template '{}'", stored.id))?;
    Ok(Template::with_grid(
        TemplateId::from(stored.id),
        grid,
        stored.x.unwrap_or(0),
        stored.y.unwrap_or(0),
    ))
}

fn decode_grid(rows: Vec<Vec<Option<String>>>) -> Result<BeadGrid> {
    let cells = rows
        .into_iter()
        .map(|row| row.into_iter().map(decode_cell).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    let grid = BeadGrid::from_rows(cells)?;
    if grid.size() != GRID_SIZE {
        anyhow::bail!(
            "Grid is {0}x{0}, expected {1}x{1}",
            grid.size(),
            GRID_SIZE
        );
    }
    Ok(grid)
}

fn decode_cell(value: Option<String>) -> Result<Cell> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(hex) => Ok(Some(RgbColor::from_hex(hex)?)),
    }
}

fn encode_cell(cell: Cell) -> Option<String> {
    Some(cell.map(|c| c.to_hex()).unwrap_or_default())
}

/// Serializes a layout into the current stored format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn serialize_design(layout: &TemplateLayout) -> Result<String> {
    let stored: Vec<StoredTemplate> = layout
        .templates()
        .iter()
        .map(|t| StoredTemplate {
            id: t.id.to_string(),
            grid: t
                .grid
                .rows()
                .map(|row| row.iter().copied().map(encode_cell).collect())
                .collect(),
            x: Some(t.x),
            y: Some(t.y),
        })
        .collect();

    serde_json::to_string(&stored).context("Failed to serialize design")
}

/// Parses stored custom colors.
///
/// Returns `None` unless the payload is an array with exactly one entry per
/// slot. Entries that are not a `#RRGGBB` string leave their slot empty.
#[must_use]
pub fn parse_custom_colors(payload: &str) -> Option<CustomColors> {
    let entries: Vec<Value> = serde_json::from_str(payload).ok()?;
    let slots: Vec<Option<RgbColor>> = entries
        .iter()
        .map(|entry| entry.as_str().and_then(|hex| RgbColor::from_hex(hex).ok()))
        .collect();
    CustomColors::from_slots(&slots)
}

/// Serializes custom colors into their stored format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn serialize_custom_colors(colors: &CustomColors) -> Result<String> {
    serde_json::to_string(colors).context("Failed to serialize custom colors")
}
