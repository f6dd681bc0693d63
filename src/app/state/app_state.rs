use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::core::{Segment, SegmentId, TrackDifficulty};
use crate::shared::EditorOptions;

use super::{EditorState, SelectionState, UiState};

/// Metadaten der Strecke, die nicht Teil der Undo-History sind
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    /// Streckenname (leer = noch nicht vergeben)
    pub name: String,
    /// Rundenanzahl (1–10)
    pub laps: u8,
    /// Beim Import gespeicherte Schwierigkeit (wird nicht neu abgeleitet)
    pub imported_difficulty: Option<TrackDifficulty>,
}

/// Hauptzustand einer Editor-Session
///
/// Besitzt Segmentliste, History und Selektion exklusiv; keine globalen Zustände.
pub struct AppState {
    /// Live-Segmentliste (Arbeitspuffer)
    pub segments: Vec<Segment>,
    /// Undo/Redo-History über die Segmentliste
    pub history: EditHistory<Vec<Segment>>,
    /// Selection-State
    pub selection: SelectionState,
    /// Editier-Interaktion (Drag, ID-Vergabe)
    pub editor: EditorState,
    /// Streckenmetadaten
    pub track: TrackInfo,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let segments = Vec::new();
        Self {
            history: EditHistory::new(&segments, options.effective_history_depth()),
            segments,
            selection: SelectionState::new(),
            editor: EditorState::new(),
            track: TrackInfo {
                name: String::new(),
                laps: crate::core::clamp_laps(options.default_laps),
                imported_difficulty: None,
            },
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Index eines Segments in der Liste.
    pub fn segment_index(&self, id: &SegmentId) -> Option<usize> {
        self.segments.iter().position(|s| &s.id == id)
    }

    /// Selektiertes Segment; eine veraltete Selektion ergibt `None`.
    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selection.resolve(&self.segments)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Nimmt den aktuellen Stand der Segmentliste in die History auf.
    /// Wird von jedem mutierenden Use-Case NACH der Mutation aufgerufen.
    pub fn commit_to_history(&mut self) {
        self.history.push(&self.segments);
    }

    /// Ersetzt die Segmentliste vollständig und startet die History neu.
    ///
    /// Für Import, Leeren und generierte Strecken: nicht relativ zum
    /// vorherigen Stand rückgängig machbar.
    pub fn replace_segments(&mut self, segments: Vec<Segment>) {
        self.editor.drag = None;
        self.selection.clear();
        self.history.reset(&segments);
        self.segments = segments;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
