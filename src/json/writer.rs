//! Writer für das Strecken-Transferobjekt.

use super::document::{SegmentDocument, TrackDocumentOut};
use crate::core::{Segment, Track, TrackDifficulty};
use anyhow::{Context, Result};

/// Schreibt eine Strecke als formatiertes JSON.
///
/// Die Schwierigkeit wird immer frisch aus dem berechneten Score abgeleitet,
/// unabhängig vom Wert in `track.difficulty`.
pub fn write_track_json(track: &Track) -> Result<String> {
    let metrics = track.metrics();
    let document = TrackDocumentOut {
        name: &track.name,
        elements: track.segments.iter().map(segment_to_document).collect(),
        difficulty: TrackDifficulty::from_score(metrics.difficulty_score).as_wire_str(),
        laps: track.laps,
        metrics,
    };
    serde_json::to_string_pretty(&document).context("Strecke konnte nicht serialisiert werden")
}

fn segment_to_document(segment: &Segment) -> SegmentDocument {
    SegmentDocument {
        id: segment.id.as_str().to_string(),
        kind: segment.kind.as_wire_str().to_string(),
        x: segment.position.x,
        y: segment.position.y,
        length: segment.length,
        width: segment.width,
        banking: segment.banking,
        elevation: segment.elevation,
        is_drs: segment.is_drs,
        sector_number: segment.sector.map(|s| s.as_u8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SectorNumber, SegmentId, SegmentKind};

    fn sample_track() -> Track {
        let mut straight = Segment::new(
            SegmentId::new("segment-1"),
            SegmentKind::Straight,
            glam::Vec2::new(400.0, 100.0),
            300.0,
            15.0,
        );
        straight.is_drs = true;
        straight.sector = Some(SectorNumber::Three);
        Track {
            name: "Export".to_string(),
            segments: vec![straight],
            laps: 3,
            difficulty: TrackDifficulty::Extreme,
        }
    }

    #[test]
    fn writes_wire_field_names() {
        let json = write_track_json(&sample_track()).expect("Export");
        let value: serde_json::Value = serde_json::from_str(&json).expect("JSON");

        let element = &value["elements"][0];
        assert_eq!(element["type"], "straight");
        assert_eq!(element["isDRS"], true);
        assert_eq!(element["sectorNumber"], 3);
        assert_eq!(element["x"], 400.0);
        assert_eq!(value["metrics"]["totalLength"], 300.0);
        assert_eq!(value["metrics"]["drsZoneCount"], 1);
    }

    #[test]
    fn difficulty_is_derived_not_copied() {
        let json = write_track_json(&sample_track()).expect("Export");
        let value: serde_json::Value = serde_json::from_str(&json).expect("JSON");
        assert_eq!(value["difficulty"], "easy");
    }

    #[test]
    fn missing_sector_is_written_as_null() {
        let mut track = sample_track();
        track.segments[0].sector = None;
        let json = write_track_json(&track).expect("Export");
        let value: serde_json::Value = serde_json::from_str(&json).expect("JSON");
        assert!(value["elements"][0]["sectorNumber"].is_null());
    }
}
