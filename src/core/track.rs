//! Die Strecke als Transfer-Einheit (Import/Export).

use super::metrics::{compute_metrics, TrackDifficulty, TrackMetrics};
use super::segment::{Segment, SegmentId};
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Minimale Rundenanzahl.
pub const LAPS_MIN: u8 = 1;
/// Maximale Rundenanzahl.
pub const LAPS_MAX: u8 = 10;
/// Name beim Export, wenn keiner vergeben wurde.
pub const UNTITLED_TRACK_NAME: &str = "Untitled Track";

/// Vollständige Strecke: geordnete Segmente plus Metadaten
///
/// Besitzt ihre Segmente exklusiv. `difficulty` ist beim Import der
/// gespeicherte Wert und wird dort bewusst nicht neu abgeleitet.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Anzeigename
    pub name: String,
    /// Segmente in Rundkurs-Reihenfolge
    pub segments: Vec<Segment>,
    /// Rundenanzahl (1–10)
    pub laps: u8,
    /// Schwierigkeitsstufe
    pub difficulty: TrackDifficulty,
}

impl Track {
    /// Baut eine Strecke für den Export; die Schwierigkeit wird frisch aus dem Score abgeleitet.
    pub fn for_export(name: &str, segments: Vec<Segment>, laps: u8) -> Self {
        let metrics = compute_metrics(&segments);
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                UNTITLED_TRACK_NAME.to_string()
            } else {
                name.to_string()
            },
            segments,
            laps: clamp_laps(laps),
            difficulty: TrackDifficulty::from_score(metrics.difficulty_score),
        }
    }

    /// Berechnet die Kennzahlen der Segmentliste.
    pub fn metrics(&self) -> TrackMetrics {
        compute_metrics(&self.segments)
    }

    /// Prüft, ob die Strecke an einen Speicher-Dienst übergeben werden kann.
    pub fn validate_for_submission(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Streckenname fehlt");
        }
        if self.segments.is_empty() {
            bail!("Strecke enthält keine Segmente");
        }
        Ok(())
    }

    /// Erste doppelt vergebene Segment-ID, falls vorhanden.
    pub fn duplicate_segment_id(&self) -> Option<&SegmentId> {
        let mut seen = HashSet::with_capacity(self.segments.len());
        self.segments.iter().map(|s| &s.id).find(|id| !seen.insert(*id))
    }
}

/// Klemmt eine Rundenanzahl in `[LAPS_MIN, LAPS_MAX]`.
pub fn clamp_laps(laps: u8) -> u8 {
    laps.clamp(LAPS_MIN, LAPS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SegmentId, SegmentKind};
    use glam::Vec2;

    fn corners(count: usize) -> Vec<Segment> {
        (0..count)
            .map(|i| {
                Segment::new(
                    SegmentId::new(format!("c{i}")),
                    SegmentKind::CornerLeft,
                    Vec2::ZERO,
                    100.0,
                    15.0,
                )
            })
            .collect()
    }

    #[test]
    fn export_derives_difficulty_from_score() {
        // 20 Kurven à 100 m → 40 + 2 = 42 → Medium
        let track = Track::for_export("Ring", corners(20), 3);
        assert_eq!(track.difficulty, TrackDifficulty::Medium);
        assert_eq!(track.name, "Ring");
    }

    #[test]
    fn export_falls_back_to_untitled_and_clamps_laps() {
        let track = Track::for_export("   ", corners(1), 42);
        assert_eq!(track.name, UNTITLED_TRACK_NAME);
        assert_eq!(track.laps, LAPS_MAX);

        let track = Track::for_export("x", corners(1), 0);
        assert_eq!(track.laps, LAPS_MIN);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let mut track = Track::for_export("Ring", corners(3), 3);
        assert!(track.duplicate_segment_id().is_none());

        track.segments[2].id = SegmentId::new("c0");
        assert_eq!(track.duplicate_segment_id().map(|id| id.as_str()), Some("c0"));
    }

    #[test]
    fn submission_requires_name_and_segments() {
        let mut track = Track::for_export("Ring", corners(2), 3);
        assert!(track.validate_for_submission().is_ok());

        track.segments.clear();
        assert!(track.validate_for_submission().is_err());

        track.segments = corners(1);
        track.name = String::new();
        assert!(track.validate_for_submission().is_err());
    }
}
