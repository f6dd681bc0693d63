//! Use-Case: Selektiertes Segment löschen.

use crate::app::use_cases::selection::cancel_drag;
use crate::app::AppState;

/// Entfernt das selektierte Segment und hebt die Selektion auf.
///
/// Eine veraltete Selektion (ID nicht mehr vorhanden) wird nur aufgehoben.
pub fn delete_selected_segment(state: &mut AppState) {
    cancel_drag(state);
    let Some(id) = state.selection.selected_id().cloned() else {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    };
    state.selection.clear();

    let Some(index) = state.segment_index(&id) else {
        log::debug!("Selektiertes Segment {} existiert nicht mehr", id);
        return;
    };

    state.segments.remove(index);
    state.commit_to_history();
    log::info!("Segment {} gelöscht", id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::editing::test_support::state_with_straights;
    use crate::app::SelectionState;
    use crate::core::SegmentId;

    #[test]
    fn deletes_selected_and_clears_selection() {
        let mut state = state_with_straights(3);
        let target = state.segments[1].id.clone();
        state.selection = SelectionState::Selected(target.clone());

        delete_selected_segment(&mut state);

        assert_eq!(state.segments.len(), 2);
        assert!(state.segment_index(&target).is_none());
        assert_eq!(state.selection, SelectionState::None);
        assert!(state.can_undo());
    }

    #[test]
    fn stale_selection_only_clears() {
        let mut state = state_with_straights(2);
        state.selection = SelectionState::Selected(SegmentId::new("gone"));
        let before = state.history.len();

        delete_selected_segment(&mut state);

        assert_eq!(state.segments.len(), 2);
        assert_eq!(state.selection, SelectionState::None);
        assert_eq!(state.history.len(), before);
    }
}
