//! Parser für das Strecken-Transferobjekt.

use super::document::{SegmentDocument, TrackDocumentIn};
use crate::core::{
    SectorNumber, Segment, SegmentId, SegmentKind, Track, TrackDifficulty, LAPS_MAX, LAPS_MIN,
};
use anyhow::{bail, Context, Result};

/// Parst ein Strecken-Transferobjekt.
///
/// Die gespeicherte Schwierigkeit wird übernommen und nicht neu abgeleitet;
/// eingebettete Kennzahlen werden ignoriert. Rundenanzahlen außerhalb von
/// 1–10 werden mit Warnung geklemmt.
pub fn parse_track_json(json_content: &str) -> Result<Track> {
    let document: TrackDocumentIn =
        serde_json::from_str(json_content).context("Ungültiges Strecken-JSON")?;

    let difficulty = TrackDifficulty::from_wire_str(&document.difficulty)
        .with_context(|| format!("Unbekannte Schwierigkeit '{}'", document.difficulty))?;

    let laps = clamp_wire_laps(document.laps);

    let segments = document
        .elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            segment_from_document(element).with_context(|| format!("Fehler in Segment {}", index))
        })
        .collect::<Result<Vec<_>>>()?;

    let track = Track {
        name: document.name,
        segments,
        laps,
        difficulty,
    };

    if let Some(id) = track.duplicate_segment_id() {
        bail!("Doppelte Segment-ID '{}'", id);
    }

    log::info!(
        "Strecke '{}' gelesen: {} Segmente, {} Runden",
        track.name,
        track.segments.len(),
        track.laps
    );
    Ok(track)
}

fn clamp_wire_laps(laps: i64) -> u8 {
    let clamped = laps.clamp(i64::from(LAPS_MIN), i64::from(LAPS_MAX));
    if clamped != laps {
        log::warn!("Rundenanzahl {} auf {} geklemmt", laps, clamped);
    }
    // Nach dem Klemmen immer im u8-Bereich
    u8::try_from(clamped).unwrap_or(LAPS_MAX)
}

fn segment_from_document(element: SegmentDocument) -> Result<Segment> {
    let Some(kind) = SegmentKind::from_wire_str(&element.kind) else {
        bail!("Unbekannter Segmenttyp '{}'", element.kind);
    };

    if !element.x.is_finite() || !element.y.is_finite() {
        bail!("Position ({}, {}) ist nicht endlich", element.x, element.y);
    }

    let sector = match element.sector_number {
        None => None,
        Some(number) => Some(
            SectorNumber::from_u8(number)
                .with_context(|| format!("Ungültige Sektornummer {}", number))?,
        ),
    };

    let mut segment = Segment::new(
        SegmentId::new(element.id),
        kind,
        glam::Vec2::new(element.x, element.y),
        element.length,
        element.width,
    );
    segment.banking = element.banking;
    segment.elevation = element.elevation;
    segment.is_drs = element.is_drs;
    segment.sector = sector;
    Ok(segment)
}
