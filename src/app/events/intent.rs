use crate::core::{SegmentId, SegmentKind, SegmentUpdate, Track};
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Segment aus der Toolbar hinzufügen
    AddSegmentRequested { kind: SegmentKind },
    /// Klick auf ein Segment
    SegmentClicked { id: SegmentId },
    /// Klick auf leere Zeichenfläche
    CanvasClicked,

    /// Drag-Lifecycle Start: Zeiger auf Segment gedrückt
    SegmentDragStarted { id: SegmentId, pointer_pos: glam::Vec2 },
    /// Drag-Lifecycle Update: Zeiger bewegt
    SegmentDragMoved { pointer_pos: glam::Vec2 },
    /// Drag-Lifecycle Ende: Zeiger losgelassen
    SegmentDragReleased,
    /// Drag abbrechen (Escape)
    SegmentDragCancelled,

    /// Eigenschaften des selektierten Segments im Panel geändert
    SegmentPropertiesEdited { update: SegmentUpdate },
    /// Selektiertes Segment löschen (Toolbar oder Entf-Taste)
    DeleteSelectedRequested,
    /// Selektion aufheben (Escape)
    ClearSelectionRequested,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Strecke leeren (nach Bestätigung durch die Oberfläche)
    ClearTrackRequested,
    /// Streckenname geändert
    TrackNameChanged { name: String },
    /// Rundenanzahl geändert
    LapCountChanged { laps: u8 },

    /// Importdatei wurde im Dialog ausgewählt
    TrackFileSelected { path: PathBuf },
    /// Exportpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: PathBuf },
    /// "Strecke speichern" gedrückt (Übergabe an einen Speicher-Dienst)
    SubmitTrackRequested,
    /// Generator-Dienst hat eine fertige Strecke geliefert
    GeneratedTrackReceived { track: Track },
}
