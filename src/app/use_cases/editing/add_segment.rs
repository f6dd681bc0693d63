//! Use-Case: Neues Segment an der Platzierungsposition hinzufügen.

use crate::app::use_cases::selection::cancel_drag;
use crate::app::{AppState, SelectionState};
use crate::core::{Segment, SegmentKind};

/// Fügt ein Segment der gewünschten Art ans Ende der Strecke an.
///
/// Position aus `EditorOptions::placement_for` (abhängig von der
/// Segmentanzahl), Länge und Breite aus den Optionen. Das neue Segment wird
/// selektiert und genau ein History-Snapshot aufgenommen. Ein laufender Drag
/// wird vorher abgebrochen.
pub fn add_segment(state: &mut AppState, kind: SegmentKind) {
    cancel_drag(state);
    let position = state.options.placement_for(state.segments.len());
    let length = if kind.is_corner() {
        state.options.default_corner_length
    } else {
        state.options.default_straight_length
    };

    let segments = &state.segments;
    let id = state
        .editor
        .allocate_segment_id(|candidate| segments.iter().any(|s| &s.id == candidate));

    let segment = Segment::new(
        id.clone(),
        kind,
        position,
        length,
        state.options.default_segment_width,
    );
    state.segments.push(segment);
    state.selection = SelectionState::Selected(id.clone());
    state.commit_to_history();

    log::info!(
        "Segment {} ({}) an Position ({:.1}, {:.1}) hinzugefügt",
        id,
        kind.as_wire_str(),
        position.x,
        position.y
    );
}
