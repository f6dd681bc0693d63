use crate::core::{SegmentId, SegmentKind, SegmentUpdate, Track};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Editing ===
    /// Neues Segment an der Platzierungsposition hinzufügen
    AddSegment { kind: SegmentKind },
    /// Attribute des selektierten Segments ändern
    UpdateSelectedSegment { update: SegmentUpdate },
    /// Selektiertes Segment löschen
    DeleteSelectedSegment,

    // === Selektion ===
    /// Segment selektieren
    SelectSegment { id: SegmentId },
    /// Selektion aufheben
    ClearSelection,

    // === Drag (Zwei-Phasen-Commit) ===
    /// Drag beginnen (Zeigerposition in Canvas-Koordinaten)
    BeginSegmentDrag { id: SegmentId, pointer_pos: glam::Vec2 },
    /// Gezogenes Segment der Zeigerposition nachführen
    UpdateSegmentDrag { pointer_pos: glam::Vec2 },
    /// Drag abschließen (genau ein History-Eintrag bei Änderung)
    EndSegmentDrag,
    /// Drag abbrechen (Ursprungsposition wiederherstellen)
    CancelSegmentDrag,

    // === History ===
    Undo,
    Redo,

    // === Strecke ===
    /// Alle Segmente entfernen (History-Reset)
    ClearTrack,
    /// Streckennamen setzen
    SetTrackName { name: String },
    /// Rundenanzahl setzen (geklemmt 1–10)
    SetLapCount { laps: u8 },
    /// Extern erzeugte Strecke übernehmen (History-Reset)
    ApplyGeneratedTrack { track: Track },

    // === Datei-I/O ===
    /// Strecke aus JSON-Datei importieren
    LoadTrackFile { path: PathBuf },
    /// Strecke als JSON-Datei exportieren
    SaveTrackFile { path: PathBuf },
    /// Name und Segmente vor der Übergabe an einen Speicher-Dienst prüfen
    ValidateForSubmission,
}
