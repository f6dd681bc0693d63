//! Read-only Sicht auf die Strecke als Übergabevertrag an die Präsentationsschicht.
//!
//! Lebt im shared-Modul, da `app` sie baut und eine (externe) Oberfläche sie konsumiert.

use crate::core::{Segment, SegmentId, TrackDifficulty, TrackMetrics};

/// Read-only Daten für einen Anzeige-Frame.
#[derive(Debug, Clone)]
pub struct TrackView {
    /// Streckenname
    pub name: String,
    /// Rundenanzahl
    pub laps: u8,
    /// Aktuelle Segmentliste (inkl. laufendem Drag)
    pub segments: Vec<Segment>,
    /// Selektiertes Segment (nur wenn es in der Liste existiert)
    pub selected_id: Option<SegmentId>,
    /// Frisch berechnete Kennzahlen
    pub metrics: TrackMetrics,
    /// Aus dem Score abgeleitete Schwierigkeit
    pub difficulty: TrackDifficulty,
    /// Anzeigetext der Sicherheitsstufe
    pub safety_label: &'static str,
    /// Undo möglich
    pub can_undo: bool,
    /// Redo möglich
    pub can_redo: bool,
    /// Ein Segment wird gerade gezogen
    pub is_dragging: bool,
    /// Statusmeldung für die Oberfläche
    pub status_message: Option<String>,
}

impl TrackView {
    /// Gibt das selektierte Segment zurück.
    pub fn selected_segment(&self) -> Option<&Segment> {
        let id = self.selected_id.as_ref()?;
        self.segments.iter().find(|s| &s.id == id)
    }
}
