//! Use-Case: Segment per Zeiger verschieben (Zwei-Phasen-Commit).
//!
//! Während des Drags ändert sich nur der Live-Puffer. Beim Loslassen wird
//! genau ein Snapshot aufgenommen, beim Abbruch die Ursprungsposition
//! wiederhergestellt.

use crate::app::state::DragState;
use crate::app::{AppState, SelectionState};
use crate::core::SegmentId;
use glam::Vec2;

/// Beginnt den Drag eines Segments und selektiert es.
pub fn begin_drag(state: &mut AppState, id: &SegmentId, pointer_pos: Vec2) {
    if state.editor.is_dragging() {
        cancel_drag(state);
    }

    let Some(index) = state.segment_index(id) else {
        log::debug!("Drag ignoriert: Segment {} existiert nicht", id);
        return;
    };

    let origin = state.segments[index].position;
    state.selection = SelectionState::Selected(id.clone());
    state.editor.drag = Some(DragState {
        segment_id: id.clone(),
        grab_offset: pointer_pos - origin,
        origin,
    });
    log::debug!("Drag gestartet: {}", id);
}

/// Führt das gezogene Segment der Zeigerposition nach (in den Canvas geklemmt).
pub fn update_drag(state: &mut AppState, pointer_pos: Vec2) {
    let Some(drag) = state.editor.drag.as_ref() else {
        return;
    };
    let Some(index) = state.segment_index(&drag.segment_id) else {
        log::debug!("Gezogenes Segment {} existiert nicht mehr", drag.segment_id);
        state.editor.drag = None;
        return;
    };

    let target = state.options.clamp_to_canvas(pointer_pos - drag.grab_offset);
    state.segments[index].position = target;
}

/// Schließt den Drag ab. Nur eine tatsächliche Verschiebung wird aufgezeichnet.
pub fn end_drag(state: &mut AppState) {
    let Some(drag) = state.editor.drag.take() else {
        return;
    };
    let Some(index) = state.segment_index(&drag.segment_id) else {
        return;
    };

    let position = state.segments[index].position;
    if position == drag.origin {
        log::debug!("Drag ohne Verschiebung beendet: {}", drag.segment_id);
        return;
    }

    state.commit_to_history();
    log::info!(
        "Segment {} nach ({:.1}, {:.1}) verschoben",
        drag.segment_id,
        position.x,
        position.y
    );
}

/// Bricht den Drag ab und setzt die Ursprungsposition zurück.
pub fn cancel_drag(state: &mut AppState) {
    let Some(drag) = state.editor.drag.take() else {
        return;
    };
    if let Some(index) = state.segment_index(&drag.segment_id) {
        state.segments[index].position = drag.origin;
    }
    log::debug!("Drag abgebrochen: {}", drag.segment_id);
}
