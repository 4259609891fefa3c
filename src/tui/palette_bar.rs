//! Color palette bar.
//!
//! Three lines inside a bordered block: the two bead palette rows, then the
//! custom color slots followed by the eraser. Each swatch is four columns
//! wide; the selected one is bracketed.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::constants::CUSTOM_COLOR_SLOTS;
use crate::models::{Cell, RgbColor};

/// Terminal columns per swatch.
const SWATCH_WIDTH: u16 = 4;

/// Swatch index of the eraser on the custom line (one empty swatch after the slots).
const ERASER_INDEX: usize = CUSTOM_COLOR_SLOTS + 1;

/// Column where the brush info starts.
const INFO_COLUMN: u16 = 52;

/// What a click on the palette bar selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteHit {
    /// A bead palette color
    Palette(RgbColor),
    /// A custom slot (0-based), filled or not
    Custom(usize),
    /// The eraser
    Eraser,
}

/// Swatch under a screen position.
#[must_use]
pub fn hit_test(state: &AppState, x: u16, y: u16) -> Option<PaletteHit> {
    let area = state.areas.palette;
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }
    let line = usize::from(y - area.y);
    let index = usize::from((x - area.x) / SWATCH_WIDTH);

    let rows = state.editor.palette().rows();
    if let Some(row) = rows.get(line) {
        return row.get(index).map(|c| PaletteHit::Palette(c.color));
    }
    if line != rows.len() {
        return None;
    }
    match index {
        i if i < CUSTOM_COLOR_SLOTS => Some(PaletteHit::Custom(i)),
        ERASER_INDEX => Some(PaletteHit::Eraser),
        _ => None,
    }
}

/// Palette bar widget
pub struct PaletteBar;

impl PaletteBar {
    /// Render swatches into `area` (inside the border) and the border around it.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let editor = &state.editor;
        let brush = editor.brush();

        let border = Block::default()
            .borders(Borders::ALL)
            .title(" Colors ")
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        f.render_widget(
            border,
            Rect::new(
                area.x.saturating_sub(1),
                area.y.saturating_sub(1),
                area.width + 2,
                area.height + 2,
            ),
        );

        let mut lines: Vec<Line> = editor
            .palette()
            .rows()
            .iter()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|c| swatch(Some(c.color), brush == Some(c.color), state))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let mut custom: Vec<Span> = editor
            .custom_colors()
            .slots()
            .iter()
            .map(|slot| match slot {
                Some(color) => swatch(Some(*color), brush == Some(*color), state),
                None => Span::styled(" -- ", Style::default().fg(theme.text_muted)),
            })
            .collect();
        custom.push(Span::raw("    "));
        custom.push(swatch(None, brush.is_none(), state));
        lines.push(Line::from(custom));

        // Brush info to the right of the swatches
        let info = vec![
            Line::from(vec![
                Span::styled("Tool: ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    editor.tool().label(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Color: ", Style::default().fg(theme.text_muted)),
                Span::styled(brush_name(state, brush), Style::default().fg(theme.text)),
            ]),
            Line::from(Span::styled(
                "n: new custom color",
                Style::default().fg(theme.text_muted),
            )),
        ];

        let swatches = Paragraph::new(lines).style(Style::default().bg(theme.background));
        f.render_widget(swatches, area);

        if area.width > INFO_COLUMN {
            let info_area = Rect::new(
                area.x + INFO_COLUMN,
                area.y,
                area.width - INFO_COLUMN,
                area.height,
            );
            f.render_widget(Paragraph::new(info), info_area);
        }
    }
}

fn swatch(color: Cell, selected: bool, state: &AppState) -> Span<'static> {
    let theme = &state.theme;
    let text = if selected { "[██]" } else { " ██ " };
    match color {
        Some(color) => {
            let fg = color.to_ratatui_color();
            let style = if selected {
                Style::default().fg(fg).bg(theme.surface)
            } else {
                Style::default().fg(fg)
            };
            Span::styled(text, style)
        }
        None => {
            let text = if selected { "[ x]" } else { "  x " };
            let style = if selected {
                Style::default()
                    .fg(theme.error)
                    .bg(theme.surface)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.error)
            };
            Span::styled(text, style)
        }
    }
}

fn brush_name(state: &AppState, brush: Cell) -> String {
    brush.map_or_else(
        || "Eraser".to_string(),
        |c| format!("{} ({})", state.editor.color_name(c), c.to_hex()),
    )
}
