use std::path::PathBuf;

/// UI-bezogener Anwendungszustand (ohne Rendering)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Zuletzt importierte oder exportierte Datei
    pub current_file_path: Option<PathBuf>,
    /// Statusmeldung für die Oberfläche (Erfolg oder wiederherstellbarer Fehler)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
