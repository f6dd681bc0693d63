//! Core-Domänentypen: Segmente, Strecke und Metrik-Engine.

/// Core-Datenmodelle
///
/// - Segment: Einzelnes Streckenstück mit physischen Attributen
/// - Track: Geordnete Segmente plus Name, Runden und Schwierigkeit
/// - TrackMetrics: Abgeleitete Kennzahlen (reine Funktion der Segmentliste)
pub mod metrics;
pub mod segment;
pub mod track;

pub use metrics::{
    compute_metrics, difficulty_label, safety_label, SafetyLevel, TrackDifficulty, TrackMetrics,
};
pub use segment::{SectorNumber, Segment, SegmentId, SegmentKind, SegmentUpdate};
pub use track::{clamp_laps, Track, LAPS_MAX, LAPS_MIN, UNTITLED_TRACK_NAME};
