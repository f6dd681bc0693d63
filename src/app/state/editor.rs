use crate::core::SegmentId;
use glam::Vec2;

/// Laufender Drag eines Segments (unbestätigter Arbeitspuffer)
///
/// Positionen ändern sich nur im Live-Puffer; erst beim Loslassen wird
/// genau ein History-Snapshot aufgenommen.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Gezogenes Segment
    pub segment_id: SegmentId,
    /// Abstand zwischen Zeiger und Segment-Position beim Greifen
    pub grab_offset: Vec2,
    /// Position vor Beginn des Drags (für Abbruch und Änderungsprüfung)
    pub origin: Vec2,
}

/// Zustand der Editier-Interaktion
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Drag (None = kein Drag)
    pub drag: Option<DragState>,
    /// Zähler für neue Segment-IDs (wächst nur)
    next_segment_number: u64,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Vergibt eine neue, in der Session nie wiederverwendete Segment-ID.
    ///
    /// IDs, die bereits in `taken` vorkommen (z.B. aus einem Import), werden übersprungen.
    pub fn allocate_segment_id(&mut self, taken: impl Fn(&SegmentId) -> bool) -> SegmentId {
        loop {
            self.next_segment_number += 1;
            let id = SegmentId::new(format!("segment-{}", self.next_segment_number));
            if !taken(&id) {
                return id;
            }
        }
    }
}
