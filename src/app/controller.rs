//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{compute_metrics, safety_label, TrackDifficulty};
use crate::shared::TrackView;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Bewertet selbst nie: Kennzahlen entstehen erst in `build_view`.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddSegment { kind } => handlers::editing::add_segment(state, kind),
            AppCommand::UpdateSelectedSegment { update } => {
                handlers::editing::update_selected(state, &update)
            }
            AppCommand::DeleteSelectedSegment => handlers::editing::delete_selected(state),

            // === Selektion ===
            AppCommand::SelectSegment { id } => handlers::selection::select(state, &id),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Drag ===
            AppCommand::BeginSegmentDrag { id, pointer_pos } => {
                handlers::selection::begin_drag(state, &id, pointer_pos)
            }
            AppCommand::UpdateSegmentDrag { pointer_pos } => {
                handlers::selection::update_drag(state, pointer_pos)
            }
            AppCommand::EndSegmentDrag => handlers::selection::end_drag(state),
            AppCommand::CancelSegmentDrag => handlers::selection::cancel_drag(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Strecke ===
            AppCommand::ClearTrack => handlers::editing::clear_track(state),
            AppCommand::SetTrackName { name } => handlers::editing::set_track_name(state, name),
            AppCommand::SetLapCount { laps } => handlers::editing::set_lap_count(state, laps),
            AppCommand::ApplyGeneratedTrack { track } => {
                handlers::editing::apply_generated(state, track)?
            }

            // === Datei-I/O ===
            AppCommand::LoadTrackFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveTrackFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::ValidateForSubmission => handlers::file_io::validate_submission(state),
        }

        Ok(())
    }

    /// Baut die read-only Sicht für die Präsentationsschicht.
    ///
    /// Einziger Ort, an dem Kennzahlen berechnet werden (bei jedem Aufruf neu).
    pub fn build_view(&self, state: &AppState) -> TrackView {
        let metrics = compute_metrics(&state.segments);
        TrackView {
            name: state.track.name.clone(),
            laps: state.track.laps,
            segments: state.segments.clone(),
            selected_id: state.selected_segment().map(|s| s.id.clone()),
            metrics,
            difficulty: TrackDifficulty::from_score(metrics.difficulty_score),
            safety_label: safety_label(metrics.safety_rating),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
            is_dragging: state.editor.is_dragging(),
            status_message: state.ui.status_message.clone(),
        }
    }
}
