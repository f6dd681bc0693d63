//! Handler für Segment- und Streckenbearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{SegmentKind, SegmentUpdate, Track};

/// Fügt ein neues Segment hinzu.
pub fn add_segment(state: &mut AppState, kind: SegmentKind) {
    use_cases::editing::add_segment(state, kind);
}

/// Ändert Attribute des selektierten Segments.
pub fn update_selected(state: &mut AppState, update: &SegmentUpdate) {
    use_cases::editing::update_selected_segment(state, update);
}

/// Löscht das selektierte Segment.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_segment(state);
}

/// Leert die Strecke.
pub fn clear_track(state: &mut AppState) {
    use_cases::editing::clear_track(state);
}

/// Übernimmt eine generierte Strecke.
pub fn apply_generated(state: &mut AppState, track: Track) -> anyhow::Result<()> {
    use_cases::editing::apply_generated_track(state, track)
}

pub fn set_track_name(state: &mut AppState, name: String) {
    use_cases::track_info::set_track_name(state, name);
}

pub fn set_lap_count(state: &mut AppState, laps: u8) {
    use_cases::track_info::set_lap_count(state, laps);
}
