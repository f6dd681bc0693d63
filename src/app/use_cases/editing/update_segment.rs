//! Use-Case: Attribute des selektierten Segments ändern.

use crate::app::use_cases::selection::cancel_drag;
use crate::app::AppState;
use crate::core::SegmentUpdate;

/// Wendet ein partielles Update auf das selektierte Segment an.
///
/// Werte werden in die Editier-Grenzen geklemmt. Nur eine tatsächliche
/// Änderung erzeugt einen History-Snapshot.
pub fn update_selected_segment(state: &mut AppState, update: &SegmentUpdate) {
    cancel_drag(state);
    if update.is_empty() {
        log::debug!("Leeres Segment-Update ignoriert");
        return;
    }

    let Some(index) = state
        .selection
        .selected_id()
        .and_then(|id| state.segment_index(id))
    else {
        log::debug!("Segment-Update ohne gültige Selektion ignoriert");
        return;
    };

    let segment = &mut state.segments[index];
    let before = segment.clone();
    segment.apply_update(update);

    if *segment == before {
        log::debug!("Segment {}: keine Änderung", segment.id);
        return;
    }

    log::info!("Segment {} aktualisiert", segment.id);
    state.commit_to_history();
}
