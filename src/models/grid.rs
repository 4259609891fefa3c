//! Square bead grid with single-cell painting and region fill.
//!
//! Every mutation returns a new [`BeadGrid`]; the receiver is never modified,
//! so earlier snapshots stay valid for diffing.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::constants::GRID_SIZE;
use crate::models::RgbColor;

/// Color of one bead position. `None` means no bead placed.
pub type Cell = Option<RgbColor>;

/// A square matrix of bead cells.
///
/// # Invariants
///
/// - `cells.len() == size * size`
/// - The size never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BeadGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl BeadGrid {
    /// Creates a pegboard-sized grid with every cell unset.
    #[must_use]
    pub fn empty() -> Self {
        Self::empty_with_size(GRID_SIZE)
    }

    /// Creates a grid of an explicit side length with every cell unset.
    ///
    /// Designs always use [`GRID_SIZE`]; other sizes exist for small worked
    /// examples.
    #[must_use]
    pub fn empty_with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Builds a grid from row-major nested rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            anyhow::bail!("Grid must have at least one row");
        }

        let mut cells = Vec::with_capacity(size * size);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                anyhow::bail!(
                    "Grid must be square: row {} has {} cells, expected {}",
                    idx,
                    row.len(),
                    size
                );
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the color at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Whether (row, col) addresses a cell of this grid.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Returns a new grid with one cell replaced.
    ///
    /// Passing `None` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn set_cell(&self, row: usize, col: usize, color: Cell) -> Self {
        let idx = self.index(row, col);
        let mut next = self.clone();
        next.cells[idx] = color;
        next
    }

    /// Color a toggle-press at (row, col) would leave behind.
    ///
    /// Pressing with the cell's current color clears it; any other color
    /// overwrites it.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn toggled_color(&self, row: usize, col: usize, color: Cell) -> Cell {
        if self.get(row, col) == color {
            None
        } else {
            color
        }
    }

    /// Returns a new grid with the 4-connected region around (row, col)
    /// recolored to `new_color`.
    ///
    /// The region is every cell reachable from the start through up, down,
    /// left and right neighbors that have the start cell's original color.
    /// Unset cells form regions like any other color. Filling a region with
    /// its own color returns an identical grid.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn flood_fill(&self, row: usize, col: usize, new_color: Cell) -> Self {
        let start = self.index(row, col);
        let target = self.cells[start];
        if target == new_color {
            return self.clone();
        }

        // Membership is always tested against `self.cells`, never `filled`.
        let mut filled = self.cells.clone();
        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![(row, col)];
        visited[start] = true;

        while let Some((r, c)) = stack.pop() {
            filled[r * self.size + c] = new_color;

            let mut visit = |nr: usize, nc: usize| {
                let idx = nr * self.size + nc;
                if !visited[idx] && self.cells[idx] == target {
                    visited[idx] = true;
                    stack.push((nr, nc));
                }
            };

            if r > 0 {
                visit(r - 1, c);
            }
            if r + 1 < self.size {
                visit(r + 1, c);
            }
            if c > 0 {
                visit(r, c - 1);
            }
            if c + 1 < self.size {
                visit(r, c + 1);
            }
        }

        Self {
            size: self.size,
            cells: filled,
        }
    }

    /// Number of placed beads per color. Unset cells are not counted.
    #[must_use]
    pub fn color_counts(&self) -> BTreeMap<RgbColor, usize> {
        let mut counts = BTreeMap::new();
        for color in self.cells.iter().flatten() {
            *counts.entry(*color).or_insert(0) += 1;
        }
        counts
    }

    /// Total number of placed beads.
    #[must_use]
    pub fn bead_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether no bead has been placed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside the {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}

impl Default for BeadGrid {
    fn default() -> Self {
        Self::empty()
    }
}
