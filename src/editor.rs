//! Design editor controller.
//!
//! [`DesignEditor`] is the single owner of everything a design session
//! mutates: the template layout, the selected brush and tool, custom colors,
//! the drag session and the transient status line. Front ends translate
//! their input into the coordinate-addressed events below and render from
//! the read accessors; they never touch the layout directly.
//!
//! The layout is replaced wholesale on every change, so anything holding a
//! previous snapshot keeps seeing a complete, consistent design.

use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::constants::STATUS_MESSAGE_TIMEOUT_MS;
use crate::export::{self, ColorQuantity, SheetOptions};
use crate::models::{
    BeadPalette, Cell, CustomColors, Direction, RgbColor, TemplateId, TemplateLayout,
};
use crate::services::{DesignService, KeyValueStore, LoadOutcome};

/// What a cell press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Toggle one bead: same color clears, other colors overwrite
    #[default]
    Pencil,
    /// Recolor the connected same-color region
    PaintCan,
}

impl Tool {
    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::PaintCan => "Paint Can",
        }
    }
}

/// A message shown for a short while after save/load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text
    pub text: String,
    /// Whether the message reports a failure
    pub is_error: bool,
    shown_at: Instant,
}

impl StatusMessage {
    /// Creates a message shown from now on.
    pub fn new(text: impl Into<String>, is_error: bool) -> Self {
        Self {
            text: text.into(),
            is_error,
            shown_at: Instant::now(),
        }
    }

    /// When the message was first shown.
    #[must_use]
    pub const fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Whether the message should no longer be shown at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at)
            >= Duration::from_millis(STATUS_MESSAGE_TIMEOUT_MS)
    }
}

/// Active press-and-drag gesture, owned by the template it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DragSession {
    template: TemplateId,
    last_cell: (usize, usize),
}

/// Controller owning all mutable design state.
pub struct DesignEditor {
    layout: TemplateLayout,
    palette: BeadPalette,
    custom_colors: CustomColors,
    /// `None` is the eraser
    brush: Cell,
    tool: Tool,
    drag: Option<DragSession>,
    status: Option<StatusMessage>,
    has_saved: bool,
    sheet_options: SheetOptions,
    store: Box<dyn KeyValueStore>,
}

impl DesignEditor {
    /// Starts a session with a fresh single-template design.
    ///
    /// Stored data is not loaded; `has_saved` only records whether the
    /// store already holds a design.
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let palette = BeadPalette::default();
        let brush = palette.color_at(0).map(|c| c.color);
        let has_saved = DesignService::has_saved(&*store).unwrap_or_else(|e| {
            warn!(error = %e, "could not check store for a saved design");
            false
        });

        Self {
            layout: TemplateLayout::create_initial(),
            palette,
            custom_colors: CustomColors::new(),
            brush,
            tool: Tool::default(),
            drag: None,
            status: None,
            has_saved,
            sheet_options: SheetOptions::default(),
            store,
        }
    }

    /// Opens the design held by the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds no usable design.
    pub fn open(store: Box<dyn KeyValueStore>) -> Result<Self> {
        let loaded = DesignService::load_required(&*store)?;
        let mut editor = Self::new(store);
        editor.layout = loaded.layout;
        if let Some(colors) = loaded.custom_colors {
            editor.custom_colors = colors;
        }
        Ok(editor)
    }

    // === Read accessors ===

    /// Current layout snapshot.
    #[must_use]
    pub const fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    /// The fixed bead palette.
    #[must_use]
    pub const fn palette(&self) -> &BeadPalette {
        &self.palette
    }

    /// Custom color slots.
    #[must_use]
    pub const fn custom_colors(&self) -> &CustomColors {
        &self.custom_colors
    }

    /// Selected brush color; `None` when the eraser is active.
    #[must_use]
    pub const fn brush(&self) -> Cell {
        self.brush
    }

    /// Active tool.
    #[must_use]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// Template owning the active drag, if any.
    #[must_use]
    pub fn drag_template(&self) -> Option<&TemplateId> {
        self.drag.as_ref().map(|d| &d.template)
    }

    /// Status message, unless it has expired.
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status
            .as_ref()
            .filter(|s| !s.is_expired_at(Instant::now()))
    }

    /// Whether the store holds a saved design.
    #[must_use]
    pub const fn has_saved(&self) -> bool {
        self.has_saved
    }

    /// Print/export section toggles.
    #[must_use]
    pub const fn sheet_options(&self) -> SheetOptions {
        self.sheet_options
    }

    /// Whether a template can be removed right now.
    #[must_use]
    pub fn is_removable(&self, id: &TemplateId) -> bool {
        self.layout.is_removable(id)
    }

    /// Whether an add affordance should be offered on that side of a template.
    #[must_use]
    pub fn can_add(&self, id: &TemplateId, direction: Direction) -> bool {
        self.layout
            .get(id)
            .is_some_and(|t| self.layout.has_room(t.x, t.y, direction))
    }

    /// Display name of a color in this session.
    #[must_use]
    pub fn color_name(&self, color: RgbColor) -> String {
        self.palette.display_name(color, &self.custom_colors)
    }

    /// Overall bead counts.
    #[must_use]
    pub fn quantities(&self) -> Vec<ColorQuantity> {
        export::overall_quantities(&self.layout, &self.palette, &self.custom_colors)
    }

    /// Plain-text shopping list of the whole design.
    #[must_use]
    pub fn shopping_list(&self) -> String {
        export::shopping_list(&self.quantities())
    }

    /// Markdown pattern sheet with the current section toggles.
    #[must_use]
    pub fn pattern_sheet(&self) -> String {
        export::export_to_markdown(
            &self.layout,
            &self.palette,
            &self.custom_colors,
            self.sheet_options,
        )
    }

    // === Brush and tool ===

    /// Selects a brush color, or the eraser with `None`.
    pub fn select_color(&mut self, color: Cell) {
        self.brush = color;
    }

    /// Selects the eraser.
    pub fn select_eraser(&mut self) {
        self.brush = None;
    }

    /// Switches tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Toggles between pencil and paint can.
    pub fn toggle_paint_can(&mut self) {
        self.tool = match self.tool {
            Tool::Pencil => Tool::PaintCan,
            Tool::PaintCan => Tool::Pencil,
        };
    }

    /// Moves the brush to the next (or previous) selectable color: palette
    /// colors, then filled custom slots, then the eraser.
    pub fn cycle_color(&mut self, forward: bool) {
        let mut choices: Vec<Cell> = self.palette.colors().map(|c| Some(c.color)).collect();
        choices.extend(self.custom_colors.slots().iter().copied().filter(Option::is_some));
        choices.push(None);

        let current = choices.iter().position(|c| *c == self.brush);
        let len = choices.len();
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, _) => 0,
        };
        self.brush = choices[next];
    }

    /// Stores or clears a custom color slot (0-based).
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist.
    pub fn set_custom_color(&mut self, slot: usize, color: Option<RgbColor>) -> Result<()> {
        self.custom_colors.set(slot, color)
    }

    /// Puts a color in the first free custom slot, or finds the slot already
    /// holding it, and selects it as the brush. Returns the 0-based slot, or
    /// `None` when every slot is taken.
    pub fn add_custom_color(&mut self, color: RgbColor) -> Option<usize> {
        let slot = self.custom_colors.slot_of(color).or_else(|| {
            self.custom_colors
                .slots()
                .iter()
                .position(Option::is_none)
        })?;
        self.custom_colors.set(slot, Some(color)).ok()?;
        self.brush = Some(color);
        Some(slot)
    }

    /// Updates the print/export section toggles.
    pub fn set_sheet_options(&mut self, options: SheetOptions) {
        self.sheet_options = options;
    }

    // === Cell events ===

    /// Pointer pressed on a cell: applies the active tool and starts a drag
    /// session owned by that template. Returns whether the design changed.
    ///
    /// Unknown templates are ignored.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the template's grid.
    pub fn cell_press(&mut self, id: &TemplateId, row: usize, col: usize) -> bool {
        if self.layout.get(id).is_none() {
            debug!(template = %id, "press on unknown template ignored");
            self.drag = None;
            return false;
        }

        self.drag = Some(DragSession {
            template: id.clone(),
            last_cell: (row, col),
        });
        self.apply_tool(id, row, col)
    }

    /// Pointer entered a cell while pressed. Only the template that started
    /// the drag is painted, and re-entering the cell just painted does
    /// nothing.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the template's grid.
    pub fn cell_drag_enter(&mut self, id: &TemplateId, row: usize, col: usize) -> bool {
        match &mut self.drag {
            Some(session) if &session.template == id => {
                if session.last_cell == (row, col) {
                    return false;
                }
                session.last_cell = (row, col);
            }
            _ => return false,
        }
        self.apply_tool(id, row, col)
    }

    /// Pointer released: ends the drag session.
    pub fn release(&mut self) {
        self.drag = None;
    }

    fn apply_tool(&mut self, id: &TemplateId, row: usize, col: usize) -> bool {
        let Some(template) = self.layout.get(id) else {
            return false;
        };

        let grid = match self.tool {
            Tool::Pencil => {
                let color = template.grid.toggled_color(row, col, self.brush);
                template.grid.set_cell(row, col, color)
            }
            Tool::PaintCan => template.grid.flood_fill(row, col, self.brush),
        };

        if grid == *template.grid {
            return false;
        }
        self.layout = self.layout.with_grid(id, grid);
        true
    }

    // === Structural events ===

    /// Adds an empty template next to `reference`. Returns the new id, or
    /// `None` when the add was refused.
    pub fn add_adjacent(&mut self, reference: &TemplateId, direction: Direction) -> Option<TemplateId> {
        match self.layout.try_add_adjacent(reference, direction) {
            Ok((layout, id)) => {
                debug!(template = %id, from = %reference, %direction, "template added");
                self.layout = layout;
                Some(id)
            }
            Err(refusal) => {
                debug!(%refusal, "add refused");
                None
            }
        }
    }

    /// Removes a template. Returns whether it was removed.
    pub fn remove(&mut self, id: &TemplateId) -> bool {
        match self.layout.remove(id) {
            Ok(layout) => {
                debug!(template = %id, "template removed");
                self.layout = layout;
                if self.drag_template() == Some(id) {
                    self.drag = None;
                }
                true
            }
            Err(refusal) => {
                debug!(template = %id, %refusal, "remove refused");
                false
            }
        }
    }

    /// Empties one template's grid. Returns whether anything changed.
    pub fn clear(&mut self, id: &TemplateId) -> bool {
        let cleared = self.layout.clear_template(id);
        if cleared == self.layout {
            return false;
        }
        self.layout = cleared;
        true
    }

    // === Persistence ===

    /// Saves the design and custom colors, propagating failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn try_save(&mut self) -> Result<()> {
        DesignService::save(&mut *self.store, &self.layout, &self.custom_colors)?;
        self.has_saved = true;
        Ok(())
    }

    /// Saves and reports the outcome on the status line.
    pub fn save(&mut self) -> bool {
        match self.try_save() {
            Ok(()) => {
                self.status = Some(StatusMessage::new("Design saved!", false));
                true
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "save failed");
                self.status = Some(StatusMessage::new("Failed to save", true));
                false
            }
        }
    }

    /// Loads the stored design and reports the outcome on the status line.
    ///
    /// On any failure the current design is kept.
    pub fn load(&mut self) -> bool {
        match DesignService::load(&*self.store) {
            Ok(LoadOutcome::Loaded(loaded)) => {
                info!(
                    templates = loaded.layout.len(),
                    upgraded = loaded.upgraded,
                    "design loaded"
                );
                self.layout = loaded.layout;
                if let Some(colors) = loaded.custom_colors {
                    self.custom_colors = colors;
                }
                self.drag = None;
                self.has_saved = true;
                self.status = Some(StatusMessage::new("Design loaded!", false));
                true
            }
            Ok(LoadOutcome::NotFound) => {
                self.status = Some(StatusMessage::new("No saved design found", true));
                false
            }
            Ok(LoadOutcome::Invalid(reason)) => {
                warn!(%reason, "load failed");
                self.has_saved = true;
                self.status = Some(StatusMessage::new("Failed to load", true));
                false
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "load failed");
                self.status = Some(StatusMessage::new("Failed to load", true));
                false
            }
        }
    }
}

impl std::fmt::Debug for DesignEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignEditor")
            .field("templates", &self.layout.len())
            .field("brush", &self.brush)
            .field("tool", &self.tool)
            .field("drag", &self.drag)
            .field("has_saved", &self.has_saved)
            .finish_non_exhaustive()
    }
}
