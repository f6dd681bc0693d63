//! Keyboard-Shortcuts für den Editor.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, AppState};

/// Für Shortcuts relevante Tasten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Z,
    Y,
    Delete,
    Backspace,
    Escape,
}

/// Modifier-Zustand eines Frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl (bzw. Cmd auf macOS)
    pub command: bool,
    pub shift: bool,
}

/// In einem Frame gedrückte Tasten plus Modifier.
#[derive(Debug, Clone, Default)]
pub struct FrameKeys {
    pub pressed: Vec<Key>,
    pub modifiers: Modifiers,
}

impl FrameKeys {
    /// Gibt zurück, ob die Taste in diesem Frame gedrückt wurde.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(keys: &FrameKeys, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let modifiers = keys.modifiers;

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let key_z_pressed = keys.key_pressed(Key::Z);
    let key_y_pressed = keys.key_pressed(Key::Y);

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Entf/Backspace löscht nur bei vorhandener Selektion und ohne Cmd/Ctrl
    let key_del_pressed = keys.key_pressed(Key::Delete) || keys.key_pressed(Key::Backspace);
    if key_del_pressed && !modifiers.command && state.selected_segment().is_some() {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if keys.key_pressed(Key::Escape) {
        if state.editor.is_dragging() {
            // Drag läuft → Abbrechen, Selektion bleibt
            events.push(AppIntent::SegmentDragCancelled);
        } else if state.selection.selected_id().is_some() {
            events.push(AppIntent::ClearSelectionRequested);
        }
    }

    events
}

#[cfg(test)]
mod tests;
