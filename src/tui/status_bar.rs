//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};
use crate::models::Direction;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message or hints, focus details, help line.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let first_line = match state.current_message() {
            Some(message) if message.is_error => Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(message.text.clone(), Style::default().fg(theme.text)),
            ]),
            Some(message) => Line::from(Span::styled(
                message.text.clone(),
                Style::default().fg(theme.success),
            )),
            None => Self::get_hints_line(theme),
        };

        let status_text = vec![
            first_line,
            Self::focus_line(state),
            Self::get_contextual_help_line(state, theme),
        ];

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn get_hints_line(theme: &Theme) -> Line<'static> {
        let hints = [
            ("Space", "paint"),
            ("Tab", "color"),
            ("f", "paint can"),
            ("Shift+arrows", "add template"),
            ("Ctrl+s", "save"),
        ];

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }

    /// Template index and position, cursor, bead under the cursor and which
    /// layout operations are currently allowed.
    fn focus_line(state: &AppState) -> Line<'static> {
        let theme = &state.theme;
        let editor = &state.editor;
        let Some(template) = state.focused_template() else {
            return Line::from("");
        };

        let index = editor
            .layout()
            .arrange_for_display()
            .templates()
            .position(|t| t.id == template.id)
            .map_or(0, |i| i + 1);
        let (row, col) = state.cursor;
        let under_cursor = template
            .grid
            .get(row, col)
            .map_or_else(|| "empty".to_string(), |c| editor.color_name(c));

        let open_sides: Vec<&str> = Direction::ALL
            .into_iter()
            .filter(|d| editor.can_add(&template.id, *d))
            .map(Direction::name)
            .collect();

        let mut spans = vec![
            Span::styled(
                format!(
                    "Template {index}/{} at {}:{}",
                    editor.layout().len(),
                    template.x,
                    template.y
                ),
                Style::default().fg(theme.primary),
            ),
            Span::styled(
                format!("  Bead {}:{} ", row + 1, col + 1),
                Style::default().fg(theme.text),
            ),
            Span::styled(under_cursor, Style::default().fg(theme.text_muted)),
        ];
        if !open_sides.is_empty() {
            spans.push(Span::styled(
                format!("  Add: {}", open_sides.join(" ")),
                Style::default().fg(theme.text_muted),
            ));
        }
        if editor.is_removable(&template.id) {
            spans.push(Span::styled(
                "  Shift+X remove",
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }

    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let text = match state.active_popup {
            Some(PopupType::Help) => "Up/Down scroll  Esc/? close",
            Some(PopupType::CustomColorInput) => "Type a hex color  Enter add  Esc cancel",
            None => "?: help  q: quit",
        };
        Line::from(Span::styled(text, Style::default().fg(theme.text_muted)))
    }
}
