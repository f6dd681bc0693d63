//! Use-Case: Segment selektieren bzw. Selektion aufheben.

use crate::app::{AppState, SelectionState};
use crate::core::SegmentId;

/// Selektiert ein Segment. Eine unbekannte ID führt zu keiner Selektion.
pub fn select_segment(state: &mut AppState, id: &SegmentId) {
    if state.segment_index(id).is_some() {
        state.selection = SelectionState::Selected(id.clone());
        log::debug!("Segment {} selektiert", id);
    } else {
        log::debug!("Segment {} existiert nicht, Selektion aufgehoben", id);
        state.selection.clear();
    }
}

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}
