use crate::core::{Segment, SegmentId};

/// Auswahlbezogener Anwendungszustand
///
/// Zwei Zustände: keine Selektion oder genau ein selektiertes Segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// Nichts selektiert
    #[default]
    None,
    /// Segment mit dieser ID selektiert
    Selected(SegmentId),
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::None
    }

    /// Selektierte ID, falls vorhanden.
    pub fn selected_id(&self) -> Option<&SegmentId> {
        match self {
            Self::None => None,
            Self::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: &SegmentId) -> bool {
        self.selected_id() == Some(id)
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    /// Löst die Selektion gegen die Segmentliste auf.
    ///
    /// Eine ID, die nicht (mehr) existiert, gilt als keine Selektion.
    pub fn resolve<'a>(&self, segments: &'a [Segment]) -> Option<&'a Segment> {
        let id = self.selected_id()?;
        segments.iter().find(|s| &s.id == id)
    }
}
