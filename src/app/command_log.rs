//! Begrenztes Command-Log der ausgeführten Commands (mit Zeitstempel).

use super::AppCommand;
use chrono::{DateTime, Utc};

/// Ein geloggter Command
#[derive(Debug, Clone)]
pub struct CommandLogEntry {
    /// Ausführungszeitpunkt
    pub at: DateTime<Utc>,
    /// Ausgeführter Command
    pub command: AppCommand,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<CommandLogEntry>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird dann verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        log::trace!("Command: {:?}", command);
        self.entries.push(CommandLogEntry {
            at: Utc::now(),
            command: command.clone(),
        });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last().map(|entry| &entry.command)
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[CommandLogEntry] {
        &self.entries
    }
}
