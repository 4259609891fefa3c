//! Spatial arrangement of templates in a design.
//!
//! A [`TemplateLayout`] owns every template of a design and keeps their
//! positions glued into one 4-connected block: templates are only ever added
//! next to an existing one, and a removal that would strand part of the
//! design is refused.

use anyhow::Result;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::models::{BeadGrid, Template, TemplateId};

/// Side of a template on which a neighbor can be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`
    Up,
    /// Towards larger `y`
    Down,
    /// Towards smaller `x`
    Left,
    /// Towards larger `x`
    Right,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit `(dx, dy)` offset of this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Applies this direction to a position.
    ///
    /// Returns `None` when the neighbor lies outside the `i32` plane.
    #[must_use]
    pub const fn step(self, x: i32, y: i32) -> Option<(i32, i32)> {
        let (dx, dy) = self.offset();
        match (x.checked_add(dx), y.checked_add(dy)) {
            (Some(nx), Some(ny)) => Some((nx, ny)),
            _ => None,
        }
    }

    /// Lowercase name used in CLI arguments and JSON output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "top" => Ok(Self::Up),
            "down" | "bottom" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => anyhow::bail!(
                "Unknown direction '{other}'. Expected one of: up, down, left, right"
            ),
        }
    }
}

/// Why a template could not be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddRefusal {
    /// No template has the reference id
    UnknownReference(TemplateId),
    /// The target position already holds a template
    Occupied {
        /// Target column
        x: i32,
        /// Target row
        y: i32,
    },
    /// The reference sits on the edge of the coordinate range
    OutOfRange {
        /// Reference column
        x: i32,
        /// Reference row
        y: i32,
        /// Side that has no room
        direction: Direction,
    },
}

impl fmt::Display for AddRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownReference(id) => write!(f, "no template with id '{id}'"),
            Self::Occupied { x, y } => write!(f, "position ({x}, {y}) is already occupied"),
            Self::OutOfRange { x, y, direction } => {
                write!(f, "no room {direction} of ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for AddRefusal {}

/// Why a template could not be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveRefusal {
    /// No template has the given id
    UnknownTemplate(TemplateId),
    /// The design would become empty
    LastTemplate,
    /// The remaining templates would no longer form one connected block
    WouldDisconnect,
}

impl fmt::Display for RemoveRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTemplate(id) => write!(f, "no template with id '{id}'"),
            Self::LastTemplate => f.write_str("a design must keep at least one template"),
            Self::WouldDisconnect => {
                f.write_str("removing it would disconnect the remaining templates")
            }
        }
    }
}

impl std::error::Error for RemoveRefusal {}

/// All templates of a design.
///
/// # Invariants
///
/// - At least one template
/// - Ids are unique and positions are unique
/// - Occupied positions form a single 4-connected component
///
/// Every operation returns a new layout; a refused operation leaves the
/// receiver as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    templates: Vec<Template>,
}

impl TemplateLayout {
    /// Creates a design holding a single empty template at (0, 0).
    #[must_use]
    pub fn create_initial() -> Self {
        Self {
            templates: vec![Template::new(0, 0)],
        }
    }

    /// Builds a layout from stored templates, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, an id or a position repeats, or
    /// the positions are not 4-connected.
    pub fn from_templates(templates: Vec<Template>) -> Result<Self> {
        if templates.is_empty() {
            anyhow::bail!("A design must contain at least one template");
        }

        let mut ids = HashSet::new();
        let mut positions = HashSet::new();
        for template in &templates {
            if !ids.insert(&template.id) {
                anyhow::bail!("Duplicate template id '{}'", template.id);
            }
            if !positions.insert(template.position()) {
                anyhow::bail!(
                    "Two templates share position ({}, {})",
                    template.x,
                    template.y
                );
            }
        }

        if !is_connected(&positions) {
            anyhow::bail!("Templates do not form a single connected block");
        }

        Ok(Self { templates })
    }

    /// Templates in insertion order.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false for a valid layout; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks up a template by id.
    #[must_use]
    pub fn get(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Looks up the template occupying a position.
    #[must_use]
    pub fn template_at(&self, x: i32, y: i32) -> Option<&Template> {
        self.templates.iter().find(|t| t.x == x && t.y == y)
    }

    /// Whether some template sits next to (x, y) in the given direction.
    #[must_use]
    pub fn neighbor_occupied(&self, x: i32, y: i32, direction: Direction) -> bool {
        direction
            .step(x, y)
            .is_some_and(|(nx, ny)| self.template_at(nx, ny).is_some())
    }

    /// Whether a new template fits next to (x, y) in the given direction.
    #[must_use]
    pub fn has_room(&self, x: i32, y: i32, direction: Direction) -> bool {
        direction.step(x, y).is_some() && !self.neighbor_occupied(x, y, direction)
    }

    /// Adds an empty template next to `reference`, returning the new layout
    /// and the id of the added template.
    ///
    /// # Errors
    ///
    /// Refuses when the reference id is unknown, the target is occupied, or
    /// the target would fall outside the coordinate range.
    pub fn try_add_adjacent(
        &self,
        reference: &TemplateId,
        direction: Direction,
    ) -> Result<(Self, TemplateId), AddRefusal> {
        let anchor = self
            .get(reference)
            .ok_or_else(|| AddRefusal::UnknownReference(reference.clone()))?;
        let (x, y) = direction
            .step(anchor.x, anchor.y)
            .ok_or(AddRefusal::OutOfRange {
                x: anchor.x,
                y: anchor.y,
                direction,
            })?;

        if self.template_at(x, y).is_some() {
            return Err(AddRefusal::Occupied { x, y });
        }

        let added = Template::new(x, y);
        let id = added.id.clone();
        let mut templates = self.templates.clone();
        templates.push(added);
        Ok((Self { templates }, id))
    }

    /// Adds an empty template next to `reference`.
    ///
    /// Unknown references and occupied targets leave the layout unchanged.
    #[must_use]
    pub fn add_adjacent(&self, reference: &TemplateId, direction: Direction) -> Self {
        self.try_add_adjacent(reference, direction)
            .map_or_else(|_| self.clone(), |(layout, _)| layout)
    }

    /// Removes a template together with its grid.
    ///
    /// # Errors
    ///
    /// Refuses when the id is unknown, it is the only template, or the
    /// remaining templates would be split into separate blocks.
    pub fn remove(&self, id: &TemplateId) -> Result<Self, RemoveRefusal> {
        self.check_removal(id)?;
        let templates = self
            .templates
            .iter()
            .filter(|t| &t.id != id)
            .cloned()
            .collect();
        Ok(Self { templates })
    }

    /// Whether [`remove`](Self::remove) would succeed for this id.
    #[must_use]
    pub fn is_removable(&self, id: &TemplateId) -> bool {
        self.check_removal(id).is_ok()
    }

    /// Replaces the grid of one template.
    ///
    /// Unknown ids leave the layout unchanged. Other templates keep sharing
    /// their grids with `self`.
    #[must_use]
    pub fn with_grid(&self, id: &TemplateId, grid: BeadGrid) -> Self {
        let templates = self
            .templates
            .iter()
            .map(|t| {
                if &t.id == id {
                    t.with_replaced_grid(grid.clone())
                } else {
                    t.clone()
                }
            })
            .collect();
        Self { templates }
    }

    /// Resets one template's grid to empty; id and position are kept.
    #[must_use]
    pub fn clear_template(&self, id: &TemplateId) -> Self {
        let templates = self
            .templates
            .iter()
            .map(|t| if &t.id == id { t.cleared() } else { t.clone() })
            .collect();
        Self { templates }
    }

    /// Total number of placed beads across all templates.
    #[must_use]
    pub fn bead_count(&self) -> usize {
        self.templates.iter().map(|t| t.grid.bead_count()).sum()
    }

    /// Projects the templates onto a dense rectangle for rendering.
    #[must_use]
    pub fn arrange_for_display(&self) -> DisplayArrangement<'_> {
        DisplayArrangement::new(&self.templates)
    }

    fn check_removal(&self, id: &TemplateId) -> Result<(), RemoveRefusal> {
        if self.get(id).is_none() {
            return Err(RemoveRefusal::UnknownTemplate(id.clone()));
        }
        if self.templates.len() <= 1 {
            return Err(RemoveRefusal::LastTemplate);
        }

        let remaining: HashSet<(i32, i32)> = self
            .templates
            .iter()
            .filter(|t| &t.id != id)
            .map(Template::position)
            .collect();

        if is_connected(&remaining) {
            Ok(())
        } else {
            Err(RemoveRefusal::WouldDisconnect)
        }
    }
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self::create_initial()
    }
}

/// Breadth-first reachability over occupied positions.
///
/// An empty set counts as connected.
fn is_connected(positions: &HashSet<(i32, i32)>) -> bool {
    let Some(&start) = positions.iter().next() else {
        return true;
    };

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some((x, y)) = queue.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = direction.step(x, y) else {
                continue;
            };
            if positions.contains(&next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited.len() == positions.len()
}

/// Dense rectangle covering the bounding box of all templates.
///
/// Row 0 is the smallest `y`, column 0 the smallest `x`. Slots without a
/// template hold `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayArrangement<'a> {
    min_x: i32,
    min_y: i32,
    rows: Vec<Vec<Option<&'a Template>>>,
}

impl<'a> DisplayArrangement<'a> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(templates: &'a [Template]) -> Self {
        let Some(first) = templates.first() else {
            return Self {
                min_x: 0,
                min_y: 0,
                rows: Vec::new(),
            };
        };

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for t in templates {
            min_x = min_x.min(t.x);
            max_x = max_x.max(t.x);
            min_y = min_y.min(t.y);
            max_y = max_y.max(t.y);
        }

        // Offsets from the minimum always fit in u32 when computed in i64
        let offset = |value: i32, min: i32| (i64::from(value) - i64::from(min)) as usize;
        let width = offset(max_x, min_x) + 1;
        let height = offset(max_y, min_y) + 1;
        let mut rows = vec![vec![None; width]; height];

        for t in templates {
            let slot = &mut rows[offset(t.y, min_y)][offset(t.x, min_x)];
            if slot.is_none() {
                *slot = Some(t);
            }
        }

        Self { min_x, min_y, rows }
    }

    /// Rows of slots, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<&'a Template>>] {
        &self.rows
    }

    /// Number of slot columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of slot rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Layout-space position of a slot.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn position_of(&self, row: usize, col: usize) -> (i32, i32) {
        let shift = |min: i32, by: usize| (i64::from(min) + by as i64) as i32;
        (shift(self.min_x, col), shift(self.min_y, row))
    }

    /// Slot `(row, col)` holding the given template, if any.
    #[must_use]
    pub fn slot_of(&self, id: &TemplateId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|slot| slot.is_some_and(|t| &t.id == id))
                .map(|c| (r, c))
        })
    }

    /// Templates in reading order: row by row, left to right.
    pub fn templates(&self) -> impl Iterator<Item = &'a Template> + '_ {
        self.rows.iter().flatten().filter_map(|slot| *slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    fn layout_at(positions: &[(i32, i32)]) -> TemplateLayout {
        TemplateLayout::from_templates(
            positions
                .iter()
                .map(|&(x, y)| Template::new(x, y))
                .collect(),
        )
        .unwrap()
    }

    fn id_at(layout: &TemplateLayout, x: i32, y: i32) -> TemplateId {
        layout.template_at(x, y).unwrap().id.clone()
    }

    fn positions(layout: &TemplateLayout) -> HashSet<(i32, i32)> {
        layout.templates().iter().map(Template::position).collect()
    }

    #[test]
    fn test_create_initial() {
        let layout = TemplateLayout::create_initial();
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.templates()[0].position(), (0, 0));
        assert!(layout.templates()[0].grid.is_blank());
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Up.step(0, 0), Some((0, -1)));
        assert_eq!(Direction::Down.step(0, 0), Some((0, 1)));
        assert_eq!(Direction::Left.step(0, 0), Some((-1, 0)));
        assert_eq!(Direction::Right.step(0, 0), Some((1, 0)));
    }

    #[test]
    fn test_direction_step_at_range_edge() {
        assert_eq!(Direction::Right.step(i32::MAX, 0), None);
        assert_eq!(Direction::Left.step(i32::MIN, 0), None);
        assert_eq!(Direction::Up.step(0, i32::MIN), None);
        assert_eq!(Direction::Down.step(0, i32::MAX), None);
        assert_eq!(Direction::Left.step(i32::MAX, 0), Some((i32::MAX - 1, 0)));
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Bottom".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(" left ".parse::<Direction>().unwrap(), Direction::Left);
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_add_adjacent_places_new_template() {
        let layout = TemplateLayout::create_initial();
        let origin = id_at(&layout, 0, 0);

        let (added, new_id) = layout.try_add_adjacent(&origin, Direction::Right).unwrap();
        assert_eq!(added.len(), 2);
        let new_template = added.get(&new_id).unwrap();
        assert_eq!(new_template.position(), (1, 0));
        assert!(new_template.grid.is_blank());
        assert_ne!(new_id, origin);
    }

    #[test]
    fn test_add_adjacent_occupied_is_noop() {
        let layout = layout_at(&[(0, 0), (1, 0)]);
        let origin = id_at(&layout, 0, 0);

        assert_eq!(
            layout.try_add_adjacent(&origin, Direction::Right).unwrap_err(),
            AddRefusal::Occupied { x: 1, y: 0 }
        );
        assert_eq!(layout.add_adjacent(&origin, Direction::Right), layout);
    }

    #[test]
    fn test_add_adjacent_unknown_reference_is_noop() {
        let layout = TemplateLayout::create_initial();
        let unknown = TemplateId::from("missing");

        assert!(matches!(
            layout.try_add_adjacent(&unknown, Direction::Up),
            Err(AddRefusal::UnknownReference(_))
        ));
        assert_eq!(layout.add_adjacent(&unknown, Direction::Up), layout);
    }

    #[test]
    fn test_add_adjacent_keeps_layout_connected() {
        let mut layout = TemplateLayout::create_initial();
        let moves = [
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Up,
        ];
        for direction in moves {
            let last = layout.templates().last().unwrap().id.clone();
            layout = layout.add_adjacent(&last, direction);
            assert!(is_connected(&positions(&layout)));
        }
        assert_eq!(layout.len(), 7);
    }

    #[test]
    fn test_single_template_is_never_removable() {
        let layout = TemplateLayout::create_initial();
        let id = id_at(&layout, 0, 0);

        assert!(!layout.is_removable(&id));
        assert_eq!(layout.remove(&id).unwrap_err(), RemoveRefusal::LastTemplate);
    }

    #[test]
    fn test_remove_end_of_pair() {
        let layout = layout_at(&[(0, 0), (1, 0)]);
        let origin = id_at(&layout, 0, 0);

        assert!(layout.is_removable(&origin));
        let removed = layout.remove(&origin).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.templates()[0].position(), (1, 0));
    }

    #[test]
    fn test_remove_middle_of_row_is_refused() {
        let layout = layout_at(&[(0, 0), (1, 0), (2, 0)]);
        let middle = id_at(&layout, 1, 0);

        assert!(!layout.is_removable(&middle));
        assert_eq!(
            layout.remove(&middle).unwrap_err(),
            RemoveRefusal::WouldDisconnect
        );
    }

    #[test]
    fn test_remove_unknown_is_refused() {
        let layout = layout_at(&[(0, 0), (1, 0)]);
        let unknown = TemplateId::from("nope");
        assert!(!layout.is_removable(&unknown));
        assert!(matches!(
            layout.remove(&unknown),
            Err(RemoveRefusal::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_remove_corner_of_square_is_allowed() {
        let layout = layout_at(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        for t in layout.templates() {
            assert!(layout.is_removable(&t.id));
        }
    }

    #[test]
    fn test_is_removable_agrees_with_remove() {
        let shapes: [&[(i32, i32)]; 5] = [
            &[(0, 0)],
            &[(0, 0), (1, 0), (2, 0)],
            &[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)],
            &[(0, 0), (1, 0), (2, 0), (1, -1), (1, 1)],
            &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
        ];

        for shape in shapes {
            let layout = layout_at(shape);
            for t in layout.templates() {
                let result = layout.remove(&t.id);
                assert_eq!(layout.is_removable(&t.id), result.is_ok());
                match result {
                    Ok(next) => {
                        assert_eq!(next.len(), layout.len() - 1);
                        assert!(is_connected(&positions(&next)));
                    }
                    Err(_) => {
                        let remaining: HashSet<_> = positions(&layout)
                            .into_iter()
                            .filter(|p| *p != t.position())
                            .collect();
                        assert!(layout.len() == 1 || !is_connected(&remaining));
                    }
                }
            }
        }
    }

    #[test]
    fn test_refused_remove_leaves_layout_unchanged() {
        let layout = layout_at(&[(0, 0), (1, 0), (2, 0)]);
        let snapshot = layout.clone();
        let _ = layout.remove(&id_at(&layout, 1, 0));
        assert_eq!(layout, snapshot);
    }

    #[test]
    fn test_neighbor_occupied() {
        let layout = layout_at(&[(0, 0), (1, 0), (1, 1)]);
        assert!(layout.neighbor_occupied(0, 0, Direction::Right));
        assert!(!layout.neighbor_occupied(0, 0, Direction::Down));
        assert!(layout.neighbor_occupied(1, 0, Direction::Down));
        assert!(!layout.neighbor_occupied(1, 1, Direction::Right));
    }

    #[test]
    fn test_opposite_range_edges_are_not_adjacent() {
        let wide = vec![Template::new(i32::MAX, 0), Template::new(i32::MIN, 0)];
        assert!(TemplateLayout::from_templates(wide).is_err());

        let tall = vec![Template::new(0, i32::MIN), Template::new(0, i32::MAX)];
        assert!(TemplateLayout::from_templates(tall).is_err());
    }

    #[test]
    fn test_add_past_range_edge_is_refused() {
        let layout = layout_at(&[(i32::MAX - 1, 0), (i32::MAX, 0)]);
        let edge = id_at(&layout, i32::MAX, 0);

        assert_eq!(
            layout.try_add_adjacent(&edge, Direction::Right).unwrap_err(),
            AddRefusal::OutOfRange {
                x: i32::MAX,
                y: 0,
                direction: Direction::Right
            }
        );
        assert_eq!(layout.add_adjacent(&edge, Direction::Right), layout);
        assert!(!layout.neighbor_occupied(i32::MAX, 0, Direction::Right));
        assert!(layout.neighbor_occupied(i32::MAX, 0, Direction::Left));
        assert!(!layout.has_room(i32::MAX, 0, Direction::Right));
        assert!(layout.has_room(i32::MAX, 0, Direction::Up));

        let (below, _) = layout.try_add_adjacent(&edge, Direction::Down).unwrap();
        assert!(below.template_at(i32::MAX, 1).is_some());
    }

    #[test]
    fn test_arrange_for_display_at_range_edges() {
        let layout = layout_at(&[(i32::MAX - 1, i32::MIN), (i32::MAX, i32::MIN)]);
        let arranged = layout.arrange_for_display();

        assert_eq!(arranged.width(), 2);
        assert_eq!(arranged.height(), 1);
        assert_eq!(arranged.position_of(0, 1), (i32::MAX, i32::MIN));
        assert_eq!(
            arranged.rows()[0][0].unwrap().position(),
            (i32::MAX - 1, i32::MIN)
        );
    }

    #[test]
    fn test_from_templates_validates() {
        assert!(TemplateLayout::from_templates(Vec::new()).is_err());
        assert!(TemplateLayout::from_templates(vec![Template::new(0, 0), Template::new(0, 0)])
            .is_err());
        assert!(TemplateLayout::from_templates(vec![Template::new(0, 0), Template::new(2, 0)])
            .is_err());

        let a = Template::new(0, 0);
        let mut b = Template::new(1, 0);
        b.id = a.id.clone();
        assert!(TemplateLayout::from_templates(vec![a, b]).is_err());
    }

    #[test]
    fn test_arrange_for_display() {
        let layout = layout_at(&[(0, 0), (1, 0), (1, 1), (1, -1)]);
        let arranged = layout.arrange_for_display();

        assert_eq!(arranged.width(), 2);
        assert_eq!(arranged.height(), 3);
        assert!(arranged.rows()[0][0].is_none());
        assert_eq!(arranged.rows()[0][1].unwrap().position(), (1, -1));
        assert_eq!(arranged.rows()[1][0].unwrap().position(), (0, 0));
        assert!(arranged.rows()[2][0].is_none());
        assert_eq!(arranged.position_of(2, 1), (1, 1));

        let order: Vec<_> = arranged.templates().map(Template::position).collect();
        assert_eq!(order, vec![(1, -1), (0, 0), (1, 0), (1, 1)]);

        let id = id_at(&layout, 1, 1);
        assert_eq!(arranged.slot_of(&id), Some((2, 1)));

        // Recomputing gives the same projection
        assert_eq!(layout.arrange_for_display(), arranged);
    }

    #[test]
    fn test_with_grid_shares_untouched_templates() {
        let layout = layout_at(&[(0, 0), (1, 0)]);
        let target = id_at(&layout, 1, 0);
        let painted_grid = layout
            .get(&target)
            .unwrap()
            .grid
            .set_cell(0, 0, Some(RgbColor::new(9, 9, 9)));

        let next = layout.with_grid(&target, painted_grid);
        let before = layout.template_at(0, 0).unwrap();
        let after = next.template_at(0, 0).unwrap();
        assert!(std::sync::Arc::ptr_eq(&before.grid, &after.grid));
        assert_eq!(next.bead_count(), 1);
        assert_eq!(layout.bead_count(), 0);
    }

    #[test]
    fn test_clear_template() {
        let layout = layout_at(&[(0, 0), (0, 1)]);
        let target = id_at(&layout, 0, 1);
        let grid = layout
            .get(&target)
            .unwrap()
            .grid
            .flood_fill(0, 0, Some(RgbColor::new(1, 1, 1)));
        let painted = layout.with_grid(&target, grid);
        assert!(painted.bead_count() > 0);

        let cleared = painted.clear_template(&target);
        assert_eq!(cleared.bead_count(), 0);
        assert_eq!(cleared.get(&target).unwrap().position(), (0, 1));
    }
}
