//! Use-Case-Funktionen für das Bearbeiten der Segmentliste.
//!
//! Aufgeteilt nach Operation:
//! - `add_segment`: Neues Segment platzieren
//! - `update_segment`: Attribute des selektierten Segments ändern
//! - `delete_segment`: Selektiertes Segment löschen
//! - `replace_track`: Segmentliste komplett ersetzen (Leeren, generierte Strecke)

mod add_segment;
mod delete_segment;
mod replace_track;
mod update_segment;

pub use add_segment::add_segment;
pub use delete_segment::delete_selected_segment;
pub use replace_track::{apply_generated_track, clear_track};
pub use update_segment::update_selected_segment;
