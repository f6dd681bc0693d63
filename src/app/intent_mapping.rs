//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddSegmentRequested { kind } => {
            with_drag_cancelled(state, AppCommand::AddSegment { kind })
        }
        AppIntent::SegmentClicked { id } => vec![AppCommand::SelectSegment { id }],
        AppIntent::CanvasClicked => vec![AppCommand::ClearSelection],

        AppIntent::SegmentDragStarted { id, pointer_pos } => vec![
            AppCommand::SelectSegment { id: id.clone() },
            AppCommand::BeginSegmentDrag { id, pointer_pos },
        ],
        AppIntent::SegmentDragMoved { pointer_pos } => {
            vec![AppCommand::UpdateSegmentDrag { pointer_pos }]
        }
        AppIntent::SegmentDragReleased => vec![AppCommand::EndSegmentDrag],
        AppIntent::SegmentDragCancelled => vec![AppCommand::CancelSegmentDrag],

        AppIntent::SegmentPropertiesEdited { update } => {
            with_drag_cancelled(state, AppCommand::UpdateSelectedSegment { update })
        }
        AppIntent::DeleteSelectedRequested => {
            with_drag_cancelled(state, AppCommand::DeleteSelectedSegment)
        }
        AppIntent::ClearSelectionRequested => {
            if state.editor.is_dragging() {
                vec![AppCommand::CancelSegmentDrag]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }

        AppIntent::UndoRequested => with_drag_cancelled(state, AppCommand::Undo),
        AppIntent::RedoRequested => with_drag_cancelled(state, AppCommand::Redo),

        AppIntent::ClearTrackRequested => with_drag_cancelled(state, AppCommand::ClearTrack),
        AppIntent::TrackNameChanged { name } => vec![AppCommand::SetTrackName { name }],
        AppIntent::LapCountChanged { laps } => vec![AppCommand::SetLapCount { laps }],

        AppIntent::TrackFileSelected { path } => {
            with_drag_cancelled(state, AppCommand::LoadTrackFile { path })
        }
        AppIntent::ExportPathSelected { path } => {
            with_drag_cancelled(state, AppCommand::SaveTrackFile { path })
        }
        AppIntent::SubmitTrackRequested => {
            with_drag_cancelled(state, AppCommand::ValidateForSubmission)
        }
        AppIntent::GeneratedTrackReceived { track } => {
            with_drag_cancelled(state, AppCommand::ApplyGeneratedTrack { track })
        }
    }
}

/// Bricht einen laufenden Drag vor dem eigentlichen Command ab.
///
/// Ein halb gezogenes Segment darf weder in einen Snapshot noch in einen
/// Export gelangen.
fn with_drag_cancelled(state: &AppState, command: AppCommand) -> Vec<AppCommand> {
    if state.editor.is_dragging() {
        vec![AppCommand::CancelSegmentDrag, command]
    } else {
        vec![command]
    }
}
