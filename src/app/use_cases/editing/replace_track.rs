//! Use-Case: Segmentliste komplett ersetzen (Leeren, generierte Strecke).
//!
//! Beide Fälle starten die History neu und heben Selektion und Drag auf.

use crate::app::AppState;
use crate::core::{clamp_laps, Track};
use anyhow::bail;

/// Entfernt alle Segmente. Name und Rundenanzahl bleiben erhalten.
pub fn clear_track(state: &mut AppState) {
    let removed = state.segments.len();
    state.replace_segments(Vec::new());
    state.track.imported_difficulty = None;
    log::info!("Strecke geleert ({} Segmente entfernt)", removed);
}

/// Übernimmt eine extern erzeugte Strecke.
///
/// Doppelte Segment-IDs werden abgelehnt, der State bleibt dann unverändert.
pub fn apply_generated_track(state: &mut AppState, track: Track) -> anyhow::Result<()> {
    if let Some(id) = track.duplicate_segment_id() {
        bail!("Generierte Strecke enthält doppelte Segment-ID '{}'", id);
    }

    let laps = clamp_laps(track.laps);
    if laps != track.laps {
        log::warn!("Rundenanzahl {} auf {} geklemmt", track.laps, laps);
    }

    log::info!(
        "Generierte Strecke '{}' übernommen: {} Segmente",
        track.name,
        track.segments.len()
    );

    state.replace_segments(track.segments);
    state.track.name = track.name;
    state.track.laps = laps;
    state.track.imported_difficulty = Some(track.difficulty);
    Ok(())
}
