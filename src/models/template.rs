//! Pegboard templates: one positioned grid inside a design.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::BeadGrid;

/// Opaque, stable identifier of a template.
///
/// Freshly created templates get a UUID v4; identifiers read from storage are
/// kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Generates a new unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TemplateId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One pegboard placed at integer coordinates in the shared layout space.
///
/// `x` grows to the right and `y` grows downward. The grid sits behind an
/// [`Arc`]; templates untouched by an edit keep sharing the same allocation,
/// so `Arc::ptr_eq` tells which grids changed between two layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Stable identity
    pub id: TemplateId,
    /// Bead cells of this pegboard
    pub grid: Arc<BeadGrid>,
    /// Column in the layout space
    pub x: i32,
    /// Row in the layout space
    pub y: i32,
}

impl Template {
    /// Creates an empty template at the given position with a fresh id.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_grid(TemplateId::generate(), BeadGrid::empty(), x, y)
    }

    /// Creates a template from existing parts.
    #[must_use]
    pub fn with_grid(id: TemplateId, grid: BeadGrid, x: i32, y: i32) -> Self {
        Self {
            id,
            grid: Arc::new(grid),
            x,
            y,
        }
    }

    /// Position as an `(x, y)` pair.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Returns this template with its grid replaced by `grid`.
    ///
    /// The existing allocation is kept when the new grid is equal to it.
    #[must_use]
    pub fn with_replaced_grid(&self, grid: BeadGrid) -> Self {
        if *self.grid == grid {
            return self.clone();
        }
        Self {
            grid: Arc::new(grid),
            ..self.clone()
        }
    }

    /// Returns this template with an empty grid; id and position are kept.
    #[must_use]
    pub fn cleared(&self) -> Self {
        let size = self.grid.size();
        self.with_replaced_grid(BeadGrid::empty_with_size(size))
    }
}
