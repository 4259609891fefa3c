//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, screen layout and the
//! popups, using Ratatui. All design changes go through the
//! [`DesignEditor`]; `AppState` only adds what the terminal needs on top:
//! focus, keyboard cursor, scroll offset and popups.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod canvas;
pub mod handlers;
pub mod help_overlay;
pub mod palette_bar;
pub mod quantities;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as RatatuiDirection, Layout as RatatuiLayout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{APP_NAME, GRID_SIZE};
use crate::editor::{DesignEditor, StatusMessage};
use crate::export::SheetOptions;
use crate::models::{Direction, Template, TemplateId, TemplateLayout};

pub use canvas::Canvas;
pub use help_overlay::HelpOverlayState;
pub use palette_bar::PaletteBar;
pub use quantities::QuantitiesPanel;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Minimum terminal width for showing the bead quantities panel.
const QUANTITIES_MIN_WIDTH: u16 = 100;

/// Width of the bead quantities panel.
const QUANTITIES_WIDTH: u16 = 34;

/// Popup currently covering the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Shortcut list and instructions
    Help,
    /// Hex entry for a new custom color
    CustomColorInput,
}

/// Screen regions of the last rendered frame, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    /// Title bar
    pub title: Rect,
    /// Pegboard, inside its border
    pub canvas: Rect,
    /// Bead quantities panel, when wide enough
    pub quantities: Option<Rect>,
    /// Palette swatches, inside their border
    pub palette: Rect,
    /// Status bar
    pub status: Rect,
}

impl ScreenAreas {
    /// Splits the full terminal area.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(RatatuiDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(5),    // Pegboard
                Constraint::Length(5), // Palette
                Constraint::Length(5), // Status bar
            ])
            .split(area);

        let (canvas_outer, quantities) = if area.width >= QUANTITIES_MIN_WIDTH {
            let columns = RatatuiLayout::default()
                .direction(RatatuiDirection::Horizontal)
                .constraints([Constraint::Min(20), Constraint::Length(QUANTITIES_WIDTH)])
                .split(chunks[1]);
            (columns[0], Some(columns[1]))
        } else {
            (chunks[1], None)
        };

        Self {
            title: chunks[0],
            canvas: canvas_outer.inner(Margin::new(1, 1)),
            quantities,
            palette: chunks[2].inner(Margin::new(1, 1)),
            status: chunks[3],
        }
    }
}

/// Application state for the terminal editor.
pub struct AppState {
    /// Design controller owning the layout, brush and persistence
    pub editor: DesignEditor,
    /// Loaded configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Template the keyboard cursor is on
    pub focus: TemplateId,
    /// Keyboard cursor `(row, col)` inside the focused template
    pub cursor: (usize, usize),
    /// First visible bead `(row, col)` of the pegboard
    pub scroll: (usize, usize),
    /// Message from the terminal front end itself (clipboard, export, refusals)
    pub notice: Option<StatusMessage>,
    /// Open popup
    pub active_popup: Option<PopupType>,
    /// Scroll position of the help popup
    pub help: HelpOverlayState,
    /// Text typed into the custom color popup
    pub color_input: String,
    /// Regions of the last frame
    pub areas: ScreenAreas,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state around an editor, applying configured defaults.
    #[must_use]
    pub fn new(mut editor: DesignEditor, config: Config) -> Self {
        match config.default_color() {
            Ok(color) => editor.select_color(Some(color)),
            Err(e) => tracing::warn!(error = %format!("{e:#}"), "ignoring default color"),
        }
        editor.set_sheet_options(SheetOptions {
            show_individual_colors: config.editor.show_individual_colors,
            show_overall_colors: config.editor.show_overall_colors,
        });

        let focus = first_in_display_order(editor.layout());
        let active_popup = config.ui.show_help_on_startup.then_some(PopupType::Help);
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            editor,
            config,
            theme,
            focus,
            cursor: (0, 0),
            scroll: (0, 0),
            notice: None,
            active_popup,
            help: HelpOverlayState::new(),
            color_input: String::new(),
            areas: ScreenAreas::default(),
            should_quit: false,
        }
    }

    /// The focused template.
    #[must_use]
    pub fn focused_template(&self) -> Option<&Template> {
        self.editor.layout().get(&self.focus)
    }

    /// Shows an informational message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.notice = Some(StatusMessage::new(message, false));
    }

    /// Shows an error message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.notice = Some(StatusMessage::new(message, true));
    }

    /// Newest unexpired message from the editor or the front end.
    #[must_use]
    pub fn current_message(&self) -> Option<&StatusMessage> {
        let now = Instant::now();
        let notice = self.notice.as_ref().filter(|n| !n.is_expired_at(now));
        match (self.editor.status(), notice) {
            (Some(a), Some(b)) => Some(if a.shown_at() > b.shown_at() { a } else { b }),
            (a, b) => a.or(b),
        }
    }

    /// Moves focus to another template, keeping the cursor.
    pub fn focus_on(&mut self, id: TemplateId) {
        self.focus = id;
    }

    /// Re-targets focus after the layout changed underneath it.
    pub fn refocus(&mut self) {
        if self.focused_template().is_none() {
            self.focus = first_in_display_order(self.editor.layout());
        }
    }

    /// Moves the keyboard cursor one bead, stepping into the neighboring
    /// template at an edge.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = self.cursor;
        let last = GRID_SIZE - 1;

        let inside = match direction {
            Direction::Up => row.checked_sub(1).map(|r| (r, col)),
            Direction::Down => (row < last).then(|| (row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| (row, c)),
            Direction::Right => (col < last).then(|| (row, col + 1)),
        };
        if let Some(cursor) = inside {
            self.cursor = cursor;
            return;
        }

        let Some(template) = self.focused_template() else {
            return;
        };
        let Some((x, y)) = direction.step(template.x, template.y) else {
            return;
        };
        let Some(next) = self.editor.layout().template_at(x, y) else {
            return;
        };

        self.focus = next.id.clone();
        self.cursor = match direction {
            Direction::Up => (last, col),
            Direction::Down => (0, col),
            Direction::Left => (row, last),
            Direction::Right => (row, 0),
        };
    }

    /// Adjusts the scroll offset so the cursor bead is on screen.
    pub fn ensure_cursor_visible(&mut self) {
        let arrangement = self.editor.layout().arrange_for_display();
        let Some(slot) = arrangement.slot_of(&self.focus) else {
            return;
        };
        let target = canvas::bead_position(slot, self.cursor);
        let content = canvas::content_size(arrangement.height(), arrangement.width());
        let view = canvas::view_size(self.areas.canvas);

        self.scroll = (
            canvas::scroll_axis(self.scroll.0, target.0, view.0, content.0),
            canvas::scroll_axis(self.scroll.1, target.1, view.1, content.1),
        );
    }
}

/// Id of the top-left template, or an id matching nothing for an empty layout.
fn first_in_display_order(layout: &TemplateLayout) -> TemplateId {
    layout
        .arrange_for_display()
        .templates()
        .next()
        .map_or_else(|| TemplateId::from(""), |t| t.id.clone())
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.areas = ScreenAreas::compute(Rect::new(0, 0, size.width, size.height));
        state.ensure_cursor_visible();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout so expired messages disappear
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key_event(state, key)?;
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse)?,
                // Resize and the rest re-render on the next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let areas = state.areas;
    render_title_bar(f, areas.title, state);
    Canvas::render(f, areas.canvas, state);
    if let Some(area) = areas.quantities {
        QuantitiesPanel::render(f, area, state);
    }
    PaletteBar::render(f, areas.palette, state);
    StatusBar::render(f, areas.status, state);

    match state.active_popup {
        Some(PopupType::Help) => state.help.render(f, f.area(), &state.theme),
        Some(PopupType::CustomColorInput) => render_color_input(f, state),
        None => {}
    }
}

/// Render title bar with app name and design summary
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let layout = state.editor.layout();
    let saved = if state.editor.has_saved() {
        ""
    } else {
        "  (never saved)"
    };
    let title = format!(
        " {APP_NAME} - {} template(s), {} bead(s){saved}",
        layout.len(),
        layout.bead_count()
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the hex entry popup for a new custom color
fn render_color_input(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let area = centered_rect(44, 5, f.area());
    f.render_widget(Clear, area);

    let preview = crate::models::RgbColor::from_hex(&state.color_input).ok();
    let mut value = vec![
        Span::styled("#", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.color_input.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("_", Style::default().fg(theme.accent)),
    ];
    if let Some(color) = preview {
        value.push(Span::raw("  "));
        value.push(Span::styled(
            "████",
            Style::default().fg(color.to_ratatui_color()),
        ));
    }

    let lines = vec![
        Line::from(value),
        Line::from(Span::styled(
            "Enter: add  Esc: cancel",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" New custom color ")
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(popup, area);
}

/// Rectangle of at most `width` x `height` centered in `area`.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
