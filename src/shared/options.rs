//! Zentrale Konfiguration für den Race Track Designer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Größe der Editor-Zeichenfläche (Breite, Höhe) in Canvas-Einheiten.
pub const CANVAS_SIZE: [f32; 2] = [800.0, 600.0];
/// Ausdehnung eines Segments auf der Zeichenfläche (für die Drag-Klemmung).
pub const SEGMENT_EXTENT: f32 = 100.0;

// ── Platzierung neuer Segmente ──────────────────────────────────────

/// Ursprung der Platzierung neuer Segmente.
pub const PLACEMENT_ORIGIN: [f32; 2] = [400.0, 100.0];
/// Versatz pro bereits vorhandenem Segment.
pub const PLACEMENT_STEP: [f32; 2] = [20.0, 30.0];
/// Modulo-Grenze des Versatzes (verhindert Abwandern aus dem Canvas).
pub const PLACEMENT_WRAP: [f32; 2] = [200.0, 400.0];

// ── Segment-Defaults ────────────────────────────────────────────────

/// Standardlänge neuer Geraden in Metern.
pub const DEFAULT_STRAIGHT_LENGTH: f64 = 300.0;
/// Standardlänge neuer Kurven in Metern.
pub const DEFAULT_CORNER_LENGTH: f64 = 200.0;
/// Standardbreite neuer Segmente in Metern.
pub const DEFAULT_SEGMENT_WIDTH: f64 = 15.0;

// ── Strecke & History ───────────────────────────────────────────────

/// Standard-Rundenanzahl einer neuen Strecke.
pub const DEFAULT_LAPS: u8 = 3;
/// Maximale Anzahl gehaltener Undo-Snapshots.
pub const HISTORY_DEPTH: usize = 50;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `race_track_designer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Ausdehnung eines Segments (Drag-Klemmung an rechter/unterer Kante)
    pub segment_extent: f32,

    // ── Platzierung ─────────────────────────────────────────────
    /// Ursprung für neu hinzugefügte Segmente
    pub placement_origin: [f32; 2],
    /// Versatz pro vorhandenem Segment
    pub placement_step: [f32; 2],
    /// Modulo-Grenze des Versatzes
    pub placement_wrap: [f32; 2],

    // ── Segment-Defaults ────────────────────────────────────────
    /// Länge neuer Geraden
    pub default_straight_length: f64,
    /// Länge neuer Kurven
    pub default_corner_length: f64,
    /// Breite neuer Segmente
    pub default_segment_width: f64,

    // ── Strecke ─────────────────────────────────────────────────
    /// Rundenanzahl beim Start
    #[serde(default = "default_laps")]
    pub default_laps: u8,
    /// Maximale History-Tiefe (mindestens 1)
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            segment_extent: SEGMENT_EXTENT,

            placement_origin: PLACEMENT_ORIGIN,
            placement_step: PLACEMENT_STEP,
            placement_wrap: PLACEMENT_WRAP,

            default_straight_length: DEFAULT_STRAIGHT_LENGTH,
            default_corner_length: DEFAULT_CORNER_LENGTH,
            default_segment_width: DEFAULT_SEGMENT_WIDTH,

            default_laps: DEFAULT_LAPS,
            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `default_laps` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_laps() -> u8 {
    DEFAULT_LAPS
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Lädt Optionen; fehlt die Datei, werden die Standardwerte dort angelegt.
    ///
    /// Ein Schreibfehler wird nur protokolliert, der Editor startet trotzdem.
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }

        let options = Self::default();
        if let Err(e) = options.save_to_file(path) {
            log::warn!("Optionen-Datei konnte nicht angelegt werden: {:#}", e);
        }
        options
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("race_track_designer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("race_track_designer.toml")
    }

    /// Platzierung des n-ten neuen Segments.
    ///
    /// `origin + (n * step) mod wrap` je Achse: deterministisch und ohne
    /// Kollisionsprüfung, verhindert aber, dass alle Segmente übereinander liegen.
    pub fn placement_for(&self, existing_count: usize) -> glam::Vec2 {
        let n = existing_count as f32;
        let axis = |i: usize| {
            let wrap = self.placement_wrap[i];
            let offset = n * self.placement_step[i];
            let offset = if wrap > 0.0 { offset % wrap } else { offset };
            self.placement_origin[i] + offset
        };
        glam::Vec2::new(axis(0), axis(1))
    }

    /// Klemmt eine Position in die Zeichenfläche (abzüglich Segment-Ausdehnung).
    pub fn clamp_to_canvas(&self, position: glam::Vec2) -> glam::Vec2 {
        let max = glam::Vec2::new(
            (self.canvas_size[0] - self.segment_extent).max(0.0),
            (self.canvas_size[1] - self.segment_extent).max(0.0),
        );
        position.clamp(glam::Vec2::ZERO, max)
    }

    /// History-Tiefe, mindestens 1.
    pub fn effective_history_depth(&self) -> usize {
        self.history_depth.max(1)
    }
}
