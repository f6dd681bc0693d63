//! Race Track Designer Library.
//! Editor-Kern (Segmente, Metriken, History, Controller) als Library für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditHistory, SelectionState};
pub use core::{
    compute_metrics, SectorNumber, Segment, SegmentId, SegmentKind, SegmentUpdate, Track,
    TrackDifficulty, TrackMetrics,
};
pub use json::{parse_track_json, write_track_json};
pub use shared::{EditorOptions, TrackView};
