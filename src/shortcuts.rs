//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::models::Direction;

/// All possible actions in the editor.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === CURSOR ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,

    // === PAINTING ===
    PressCell,
    TogglePaintCan,
    SelectEraser,
    NextColor,
    PreviousColor,
    NewCustomColor,

    // === TEMPLATES ===
    AddTemplateUp,
    AddTemplateDown,
    AddTemplateLeft,
    AddTemplateRight,
    RemoveTemplate,
    ClearTemplate,

    // === PATTERN SHEET ===
    ToggleIndividualQuantities,
    ToggleOverallQuantities,
    ExportSheet,
    CopyShoppingList,

    // === FILE OPERATIONS ===
    Save,
    Load,
    Quit,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Cancel,
}

impl Action {
    /// Get the action ID string
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",

            Self::PressCell => "press_cell",
            Self::TogglePaintCan => "toggle_paint_can",
            Self::SelectEraser => "select_eraser",
            Self::NextColor => "next_color",
            Self::PreviousColor => "previous_color",
            Self::NewCustomColor => "new_custom_color",

            Self::AddTemplateUp => "add_template_up",
            Self::AddTemplateDown => "add_template_down",
            Self::AddTemplateLeft => "add_template_left",
            Self::AddTemplateRight => "add_template_right",
            Self::RemoveTemplate => "remove_template",
            Self::ClearTemplate => "clear_template",

            Self::ToggleIndividualQuantities => "toggle_individual_quantities",
            Self::ToggleOverallQuantities => "toggle_overall_quantities",
            Self::ExportSheet => "export_sheet",
            Self::CopyShoppingList => "copy_shopping_list",

            Self::Save => "save",
            Self::Load => "load",
            Self::Quit => "quit",

            Self::ToggleHelp => "toggle_help",

            Self::Cancel => "cancel",
        }
    }

    /// One-line description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NavigateUp => "Move cursor up",
            Self::NavigateDown => "Move cursor down",
            Self::NavigateLeft => "Move cursor left",
            Self::NavigateRight => "Move cursor right",

            Self::PressCell => "Paint the bead under the cursor",
            Self::TogglePaintCan => "Switch between pencil and paint can",
            Self::SelectEraser => "Select the eraser",
            Self::NextColor => "Next color",
            Self::PreviousColor => "Previous color",
            Self::NewCustomColor => "Add a custom color",

            Self::AddTemplateUp => "Add template above",
            Self::AddTemplateDown => "Add template below",
            Self::AddTemplateLeft => "Add template to the left",
            Self::AddTemplateRight => "Add template to the right",
            Self::RemoveTemplate => "Remove focused template",
            Self::ClearTemplate => "Clear focused template",

            Self::ToggleIndividualQuantities => "Sheet: per-template quantities on/off",
            Self::ToggleOverallQuantities => "Sheet: total quantities on/off",
            Self::ExportSheet => "Export pattern sheet",
            Self::CopyShoppingList => "Copy bead shopping list",

            Self::Save => "Save design",
            Self::Load => "Load saved design",
            Self::Quit => "Quit",

            Self::ToggleHelp => "Toggle help",

            Self::Cancel => "Close popup",
        }
    }

    /// Side targeted by an add-template action.
    #[must_use]
    pub const fn add_direction(&self) -> Option<Direction> {
        match self {
            Self::AddTemplateUp => Some(Direction::Up),
            Self::AddTemplateDown => Some(Direction::Down),
            Self::AddTemplateLeft => Some(Direction::Left),
            Self::AddTemplateRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Registration order, for help listings
    order: Vec<(String, KeyBinding, Action)>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Terminals disagree on whether Shift is reported with characters, so
    /// uppercase letters always carry Shift and other characters never do.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let mut modifiers = event.modifiers;
        if let KeyCode::Char(c) = event.code {
            if c.is_ascii_uppercase() {
                modifiers.insert(KeyModifiers::SHIFT);
            } else if !c.is_ascii_alphabetic() {
                modifiers.remove(KeyModifiers::SHIFT);
            }
        }
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Label such as `Ctrl+S`, `Shift+Up` or `?`.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Delete => "Del".to_string(),
            other => format!("{other:?}"),
        };

        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("Alt+");
        }
        // Uppercase letters and BackTab already show Shift
        let shift_implied = matches!(self.code, KeyCode::Char(_) | KeyCode::BackTab);
        if self.modifiers.contains(KeyModifiers::SHIFT) && !shift_implied {
            label.push_str("Shift+");
        }
        label.push_str(&key);
        label
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === CURSOR ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);

        // === PAINTING ===
        self.register(ctx, K::Char(' '), M::NONE, Action::PressCell);
        self.register(ctx, K::Enter, M::NONE, Action::PressCell);
        self.register(ctx, K::Char('f'), M::NONE, Action::TogglePaintCan);
        self.register(ctx, K::Char('e'), M::NONE, Action::SelectEraser);
        self.register(ctx, K::Tab, M::NONE, Action::NextColor);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousColor);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousColor);
        self.register(ctx, K::Char('n'), M::NONE, Action::NewCustomColor);

        // === TEMPLATES ===
        self.register(ctx, K::Up, M::SHIFT, Action::AddTemplateUp);
        self.register(ctx, K::Down, M::SHIFT, Action::AddTemplateDown);
        self.register(ctx, K::Left, M::SHIFT, Action::AddTemplateLeft);
        self.register(ctx, K::Right, M::SHIFT, Action::AddTemplateRight);
        self.register(ctx, K::Char('X'), M::SHIFT, Action::RemoveTemplate);
        self.register(ctx, K::Char('C'), M::SHIFT, Action::ClearTemplate);

        // === PATTERN SHEET ===
        self.register(ctx, K::Char('i'), M::NONE, Action::ToggleIndividualQuantities);
        self.register(ctx, K::Char('o'), M::NONE, Action::ToggleOverallQuantities);
        self.register(ctx, K::Char('p'), M::CONTROL, Action::ExportSheet);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyShoppingList);

        // === FILE OPERATIONS ===
        self.register(ctx, K::Char('s'), M::CONTROL, Action::Save);
        self.register(ctx, K::Char('o'), M::CONTROL, Action::Load);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        self.order.push((context.to_string(), binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Actions of a context in registration order, each with all of its key
    /// labels joined by `/`.
    #[must_use]
    pub fn help_entries(&self, context: &str) -> Vec<(String, Action)> {
        let mut entries: Vec<(Vec<String>, Action)> = Vec::new();
        for (ctx, binding, action) in &self.order {
            if ctx != context {
                continue;
            }
            let label = binding.label();
            match entries.iter_mut().find(|(_, a)| a == action) {
                Some((labels, _)) => {
                    if !labels.contains(&label) {
                        labels.push(label);
                    }
                }
                None => entries.push((vec![label], *action)),
            }
        }
        entries
            .into_iter()
            .map(|(labels, action)| (labels.join("/"), action))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
