//! Handler für Datei-Operationen (Import, Export, Übergabe-Prüfung).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Importiert eine Strecke aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_track_file(state, path)
}

/// Exportiert die Strecke unter dem übergebenen Pfad.
pub fn save(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::save_track_file(state, path)
}

/// Prüft die Strecke vor der Übergabe; das Ergebnis steht in der Statusmeldung.
pub fn validate_submission(state: &mut AppState) {
    use_cases::file_io::validate_for_submission(state);
}
