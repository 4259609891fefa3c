//! Bead quantities side panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::export::bead_quantities::{format_bead_count, total_beads};

/// Side panel listing how many beads of each color the design needs.
pub struct QuantitiesPanel;

impl QuantitiesPanel {
    /// Render the panel, including its border, into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let quantities = state.editor.quantities();
        let options = state.editor.sheet_options();

        let mut lines = Vec::with_capacity(quantities.len() + 4);
        if quantities.is_empty() {
            lines.push(Line::from(Span::styled(
                "No beads placed yet",
                Style::default().fg(theme.text_muted),
            )));
        }
        for q in &quantities {
            lines.push(Line::from(vec![
                Span::styled("██ ", Style::default().fg(q.color.to_ratatui_color())),
                Span::styled(
                    format!("{:>4} ", q.count),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(q.name.clone(), Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Total: {}", format_bead_count(total_beads(&quantities))),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Sheet: [{}] per template (i)  [{}] overall (o)",
                mark(options.show_individual_colors),
                mark(options.show_overall_colors)
            ),
            Style::default().fg(theme.text_muted),
        )));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Bead Quantities ")
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(panel, area);
    }
}

const fn mark(enabled: bool) -> char {
    if enabled {
        'x'
    } else {
        ' '
    }
}
