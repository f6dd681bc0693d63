use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Unveränderliche, eigenständige Kopie eines Zustands.
///
/// Die History hält eigenen Speicher pro Snapshot: spätere Änderungen am
/// Live-Puffer können gespeicherte Stände nicht nachträglich verändern.
#[derive(Debug, Clone)]
pub struct HistorySnapshot<T> {
    payload: T,
    created_at: DateTime<Utc>,
}

impl<T> HistorySnapshot<T> {
    fn new(payload: T) -> Self {
        Self {
            payload,
            created_at: Utc::now(),
        }
    }

    /// Gespeicherter Zustand.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Zeitpunkt der Aufnahme.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Begrenzter, linearer Undo/Redo-Verlauf mit Cursor.
///
/// Hält immer mindestens einen Snapshot (den Ausgangszustand); der Cursor
/// zeigt immer auf einen gültigen Index.
#[derive(Debug, Clone)]
pub struct EditHistory<T: Clone> {
    snapshots: VecDeque<HistorySnapshot<T>>,
    cursor: usize,
    max_depth: usize,
}

impl<T: Clone> EditHistory<T> {
    /// Erstellt einen Verlauf mit Ausgangszustand und maximaler Tiefe (mindestens 1).
    pub fn new(initial: &T, max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        let mut snapshots = VecDeque::with_capacity(max_depth);
        snapshots.push_back(HistorySnapshot::new(initial.clone()));
        Self {
            snapshots,
            cursor: 0,
            max_depth,
        }
    }

    /// Nimmt einen neuen Stand auf.
    ///
    /// Verwirft alle Redo-Stände hinter dem Cursor, kopiert den Zustand und
    /// setzt den Cursor ans Ende. Bei Überschreiten der Tiefe fällt der
    /// älteste Snapshot weg.
    pub fn push(&mut self, state: &T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(HistorySnapshot::new(state.clone()));

        while self.snapshots.len() > self.max_depth {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Einen Schritt zurück; `None`, wenn der Cursor am Anfang steht.
    pub fn undo(&mut self) -> Option<T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.snapshots[self.cursor].payload.clone())
    }

    /// Einen Schritt vor; `None`, wenn der Cursor am Ende steht.
    pub fn redo(&mut self) -> Option<T> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.snapshots[self.cursor].payload.clone())
    }

    /// Verwirft den gesamten Verlauf und startet mit genau einem Snapshot neu.
    pub fn reset(&mut self, state: &T) {
        self.snapshots.clear();
        self.snapshots.push_back(HistorySnapshot::new(state.clone()));
        self.cursor = 0;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot unter dem Cursor.
    pub fn current(&self) -> &HistorySnapshot<T> {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Anzahl gehaltener Snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Immer `false`: der Verlauf hält mindestens den Ausgangszustand.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
