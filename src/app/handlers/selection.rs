//! Handler für Selektion und Drag-Lifecycle.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SegmentId;

/// Selektiert ein Segment.
pub fn select(state: &mut AppState, id: &SegmentId) {
    use_cases::selection::select_segment(state, id);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Startet einen Drag-Lifecycle.
pub fn begin_drag(state: &mut AppState, id: &SegmentId, pointer_pos: glam::Vec2) {
    use_cases::selection::begin_drag(state, id, pointer_pos);
}

pub fn update_drag(state: &mut AppState, pointer_pos: glam::Vec2) {
    use_cases::selection::update_drag(state, pointer_pos);
}

/// Beendet den Drag-Lifecycle (ein Undo-Snapshot bei Verschiebung).
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}

pub fn cancel_drag(state: &mut AppState) {
    use_cases::selection::cancel_drag(state);
}
