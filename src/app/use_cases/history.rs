//! Use-Case: Undo/Redo über die Segment-History.
//!
//! Ein wiederhergestellter Stand trägt keine Selektion: die selektierte ID
//! muss im wiederhergestellten Stand nicht existieren.

use crate::app::AppState;

/// Stellt den vorherigen Stand wieder her. Gibt `true` zurück, wenn ein Schritt erfolgte.
pub fn undo(state: &mut AppState) -> bool {
    let Some(previous) = state.history.undo() else {
        return false;
    };
    restore(state, previous);
    true
}

/// Stellt den nächsten Stand wieder her. Gibt `true` zurück, wenn ein Schritt erfolgte.
pub fn redo(state: &mut AppState) -> bool {
    let Some(next) = state.history.redo() else {
        return false;
    };
    restore(state, next);
    true
}

fn restore(state: &mut AppState, segments: Vec<crate::core::Segment>) {
    state.segments = segments;
    state.selection.clear();
    state.editor.drag = None;
}
