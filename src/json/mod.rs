//! JSON Import/Export des Strecken-Transferobjekts.
//!
//! Format: `{ name, elements, difficulty, laps, metrics }`, Segmente als
//! `{ id, type, x, y, length, width, banking, elevation, isDRS, sectorNumber }`.

mod document;
pub mod reader;
pub mod writer;

pub use reader::parse_track_json;
pub use writer::write_track_json;
