//! Race Track Designer (headless).
//!
//! Importiert eine Strecke, gibt die Kennzahlen aus und exportiert sie optional
//! mit frisch abgeleiteter Schwierigkeit.

use race_track_designer::{AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Race Track Designer v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, export) = match args.as_slice() {
        [input] => (PathBuf::from(input), None),
        [input, export] => (PathBuf::from(input), Some(PathBuf::from(export))),
        _ => {
            log::error!("Aufruf: race-track-designer <track.json> [export.json]");
            return ExitCode::from(2);
        }
    };

    match run(input, export) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(input: PathBuf, export: Option<PathBuf>) -> anyhow::Result<()> {
    let options = EditorOptions::load_or_create(&EditorOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    controller.handle_intent(&mut state, AppIntent::TrackFileSelected { path: input })?;

    let view = controller.build_view(&state);
    let metrics = view.metrics;
    log::info!("Strecke: {} ({} Runden)", view.name, view.laps);
    log::info!(
        "Länge: {:.0} m, Rundenzeit: {:.1} s, Kurven: {}, Geraden: {}, DRS-Zonen: {}",
        metrics.total_length,
        metrics.estimated_lap_time,
        metrics.corner_count,
        metrics.straight_count,
        metrics.drs_zone_count
    );
    log::info!(
        "Schwierigkeit: {} ({}), Sicherheit: {} ({}), Überholmöglichkeiten: {}, Höhendifferenz: {:.1} m",
        metrics.difficulty_score,
        view.difficulty.label(),
        metrics.safety_rating,
        view.safety_label,
        metrics.possible_overtakes,
        metrics.elevation_change
    );
    if let Some(stored) = state.track.imported_difficulty {
        if stored != view.difficulty {
            log::warn!(
                "Gespeicherte Schwierigkeit '{}' weicht von berechneter '{}' ab",
                stored.label(),
                view.difficulty.label()
            );
        }
    }

    if let Some(path) = export {
        controller.handle_intent(&mut state, AppIntent::ExportPathSelected { path })?;
    }

    Ok(())
}
