//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::use_cases::selection::cancel_drag;
use crate::app::AppState;
use crate::core::Track;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Importiert eine Strecke aus einer JSON-Datei.
///
/// Bei einem Fehler bleibt der Editor-Zustand unverändert; die Meldung wird
/// als Statusmeldung gesetzt und der Fehler weitergereicht.
pub fn load_track_file(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let track = match read_track(&path) {
        Ok(track) => track,
        Err(e) => {
            state.ui.status_message = Some(format!("Import fehlgeschlagen: {:#}", e));
            return Err(e);
        }
    };

    log::info!(
        "Strecke importiert: {} Segmente aus {}",
        track.segments.len(),
        path.display()
    );

    state.replace_segments(track.segments);
    state.track.name = track.name;
    state.track.laps = track.laps;
    state.track.imported_difficulty = Some(track.difficulty);
    state.ui.status_message = Some(format!("Importiert: {}", path.display()));
    state.ui.current_file_path = Some(path);
    Ok(())
}

fn read_track(path: &Path) -> anyhow::Result<Track> {
    let json_content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    crate::json::parse_track_json(&json_content)
}

/// Exportiert die aktuelle Strecke als JSON-Datei.
///
/// Leerer Name wird zu "Untitled Track", die Schwierigkeit wird frisch abgeleitet.
/// Ein laufender Drag wird abgebrochen, exportiert wird die Ursprungsposition.
pub fn save_track_file(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    cancel_drag(state);
    let track = Track::for_export(&state.track.name, state.segments.clone(), state.track.laps);
    let json_content = crate::json::write_track_json(&track)?;
    std::fs::write(&path, json_content)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;

    log::info!(
        "Strecke '{}' exportiert nach {} (Schwierigkeit: {})",
        track.name,
        path.display(),
        track.difficulty.label()
    );
    state.ui.status_message = Some(format!("Exportiert: {}", path.display()));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Prüft vor der Übergabe an einen Speicher-Dienst, ob Name und Segmente vorhanden sind.
///
/// Anders als beim Export greift hier kein "Untitled Track"-Fallback: ein
/// leerer Name ist ein Fehler. Das Ergebnis landet in der Statusmeldung.
pub fn validate_for_submission(state: &mut AppState) -> bool {
    cancel_drag(state);

    let track = Track {
        name: state.track.name.clone(),
        ..Track::for_export(&state.track.name, state.segments.clone(), state.track.laps)
    };

    match track.validate_for_submission() {
        Ok(()) => {
            log::info!(
                "Strecke '{}' bereit zur Übergabe ({} Segmente)",
                track.name,
                track.segments.len()
            );
            state.ui.status_message = Some(format!("Bereit zum Speichern: {}", track.name));
            true
        }
        Err(e) => {
            log::warn!("Übergabe abgelehnt: {:#}", e);
            state.ui.status_message = Some(format!("Speichern nicht möglich: {:#}", e));
            false
        }
    }
}
