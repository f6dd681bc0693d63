//! Use-Case: Streckenmetadaten (Name, Rundenanzahl) setzen.
//!
//! Metadaten sind nicht Teil der Undo-History.

use crate::app::AppState;
use crate::core::clamp_laps;

/// Setzt den Streckennamen.
pub fn set_track_name(state: &mut AppState, name: String) {
    log::debug!("Streckenname: '{}'", name);
    state.track.name = name;
}

/// Setzt die Rundenanzahl (geklemmt auf 1–10).
pub fn set_lap_count(state: &mut AppState, laps: u8) {
    let clamped = clamp_laps(laps);
    if clamped != laps {
        log::warn!("Rundenanzahl {} auf {} geklemmt", laps, clamped);
    }
    state.track.laps = clamped;
}
