//! Help overlay widget showing all keyboard shortcuts organized by category.
//!
//! The shortcut list is generated from the [`ShortcutRegistry`], so it always
//! matches what the event handlers do. Opened with `?`, and on startup unless
//! disabled in the config.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::Theme;
use crate::constants::{APP_NAME, GRID_SIZE};
use crate::shortcuts::{Action, ShortcutRegistry};

/// Width of the key column.
const KEY_COLUMN_WIDTH: usize = 22;

/// Sections of the shortcut list, in display order.
const SECTIONS: [&str; 6] = [
    "CURSOR",
    "PAINTING",
    "TEMPLATES",
    "PATTERN SHEET",
    "FILE OPERATIONS",
    "GENERAL",
];

const fn section_of(action: Action) -> &'static str {
    match action {
        Action::NavigateUp | Action::NavigateDown | Action::NavigateLeft | Action::NavigateRight => {
            "CURSOR"
        }
        Action::PressCell
        | Action::TogglePaintCan
        | Action::SelectEraser
        | Action::NextColor
        | Action::PreviousColor
        | Action::NewCustomColor => "PAINTING",
        Action::AddTemplateUp
        | Action::AddTemplateDown
        | Action::AddTemplateLeft
        | Action::AddTemplateRight
        | Action::RemoveTemplate
        | Action::ClearTemplate => "TEMPLATES",
        Action::ToggleIndividualQuantities
        | Action::ToggleOverallQuantities
        | Action::ExportSheet
        | Action::CopyShoppingList => "PATTERN SHEET",
        Action::Save | Action::Load | Action::Quit => "FILE OPERATIONS",
        Action::ToggleHelp | Action::Cancel => "GENERAL",
    }
}

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::get_help_content(&Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    fn heading(title: &str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            format!("═══ {title} ═══"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn text(text: &str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(theme.text),
        ))
    }

    /// Instructions followed by every shortcut, grouped by section.
    fn get_help_content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{APP_NAME} - Help"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::heading("HOW IT WORKS", theme),
            Line::from(""),
            Self::text(
                &format!("Each template is a {GRID_SIZE}x{GRID_SIZE} pegboard."),
                theme,
            ),
            Self::text("Click a peg, or press Space, to place the selected color.", theme),
            Self::text("Placing the same color again removes the bead.", theme),
            Self::text("Drag with the mouse to paint a stroke on one template.", theme),
            Self::text("The paint can fills the connected area of one color.", theme),
            Self::text("Add templates next to the focused one with Shift+arrows.", theme),
            Self::text("A template cannot be removed when it is the last one,", theme),
            Self::text("or when removing it would split the design in two.", theme),
            Self::text("Click a swatch to select it; x is the eraser.", theme),
            Line::from(""),
        ];

        let registry = ShortcutRegistry::new();
        let entries = registry.help_entries("main");
        for section in SECTIONS {
            lines.push(Self::heading(section, theme));
            lines.push(Line::from(""));
            for (keys, action) in entries.iter().filter(|(_, a)| section_of(*a) == section) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<KEY_COLUMN_WIDTH$}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(action.description(), Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Up/Down/PgUp/PgDn/Home/End scroll, Esc or ? closes",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Render the overlay centered in `area`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Centered modal (70% width, 80% height)
        let width = (area.width * 70) / 100;
        let height = (area.height * 80) / 100;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;

        let modal_area = Rect {
            x: x + area.x,
            y: y + area.y,
            width,
            height,
        };
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let content = Self::get_help_content(theme);

        let visible_height = content_area.height.saturating_sub(2) as usize; // Account for borders
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_every_action_has_a_listed_section() {
        let registry = ShortcutRegistry::new();
        for (_, action) in registry.help_entries("main") {
            assert!(SECTIONS.contains(&section_of(action)), "{action:?}");
        }
    }

    #[test]
    fn test_content_lists_shortcuts() {
        let text = plain(&HelpOverlayState::get_help_content(&Theme::dark()));
        assert!(text.iter().any(|l| l.contains("Ctrl+s")));
        assert!(text.iter().any(|l| l.contains("Shift+Up")));
        assert!(text.iter().any(|l| l.contains("═══ TEMPLATES ═══")));
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let mut state = HelpOverlayState::new();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        state.scroll_to_bottom();
        let bottom = state.scroll_offset;
        state.scroll_down();
        assert_eq!(state.scroll_offset, bottom);

        state.page_up(5);
        assert_eq!(state.scroll_offset, bottom - 5);
        state.page_down(100);
        assert_eq!(state.scroll_offset, bottom);
        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }
}
