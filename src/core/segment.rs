//! Repräsentiert ein einzelnes Streckensegment (Gerade oder Kurve).

use glam::Vec2;
use std::fmt;

// ── Eingabe-Grenzen (Editier-Grenze, nicht vom Modell selbst erzwungen) ──

/// Minimale Segmentlänge in Metern.
pub const LENGTH_MIN: f64 = 50.0;
/// Maximale Segmentlänge in Metern.
pub const LENGTH_MAX: f64 = 1000.0;
/// Minimale befahrbare Breite in Metern.
pub const WIDTH_MIN: f64 = 10.0;
/// Maximale befahrbare Breite in Metern.
pub const WIDTH_MAX: f64 = 30.0;
/// Minimale Überhöhung in Grad.
pub const BANKING_MIN: f64 = 0.0;
/// Maximale Überhöhung in Grad.
pub const BANKING_MAX: f64 = 30.0;
/// Minimale Höhendifferenz zur Basislinie in Metern.
pub const ELEVATION_MIN: f64 = -50.0;
/// Maximale Höhendifferenz zur Basislinie in Metern.
pub const ELEVATION_MAX: f64 = 50.0;

/// Stabile Segment-ID (wird bei Erzeugung vergeben, nie wiederverwendet)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub String);

impl SegmentId {
    /// Erstellt eine ID aus beliebigem Text.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Liefert die ID als String-Slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SegmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Art des Segments (geschlossene Menge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Gerade
    Straight,
    /// Linkskurve
    CornerLeft,
    /// Rechtskurve
    CornerRight,
}

impl SegmentKind {
    /// Gibt zurück, ob es sich um eine Kurve (links oder rechts) handelt.
    pub fn is_corner(self) -> bool {
        matches!(self, Self::CornerLeft | Self::CornerRight)
    }

    /// Bezeichner im Transferformat.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::CornerLeft => "corner-left",
            Self::CornerRight => "corner-right",
        }
    }

    /// Parst den Bezeichner aus dem Transferformat.
    pub fn from_wire_str(value: &str) -> Option<Self> {
        match value {
            "straight" => Some(Self::Straight),
            "corner-left" => Some(Self::CornerLeft),
            "corner-right" => Some(Self::CornerRight),
            _ => None,
        }
    }
}

/// Sektor für die Zeitmessung (wird nicht bewertet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectorNumber {
    /// Sektor 1
    One,
    /// Sektor 2
    Two,
    /// Sektor 3
    Three,
}

impl SectorNumber {
    /// Numerischer Wert (1..=3).
    pub fn as_u8(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Wandelt 1..=3 in einen Sektor um, alles andere ergibt `None`.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

/// Ein physisches Streckenstück
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Eindeutige ID innerhalb der Segmentliste
    pub id: SegmentId,
    /// Gerade oder Kurve
    pub kind: SegmentKind,
    /// Position im Editor (nur Layout, nicht bewertet)
    pub position: Vec2,
    /// Länge in Metern
    pub length: f64,
    /// Befahrbare Breite in Metern
    pub width: f64,
    /// Überhöhung in Grad
    pub banking: f64,
    /// Höhendifferenz zur Basislinie in Metern (nicht kumulativ)
    pub elevation: f64,
    /// DRS-Zone (Überholhilfe)
    pub is_drs: bool,
    /// Optionaler Zeitmess-Sektor
    pub sector: Option<SectorNumber>,
}

impl Segment {
    /// Erstellt ein Segment mit neutralen Attributen.
    pub fn new(id: SegmentId, kind: SegmentKind, position: Vec2, length: f64, width: f64) -> Self {
        Self {
            id,
            kind,
            position,
            length,
            width,
            banking: 0.0,
            elevation: 0.0,
            is_drs: false,
            sector: None,
        }
    }

    /// Wendet ein partielles Update an; alle Werte werden in die Editier-Grenzen geklemmt.
    pub fn apply_update(&mut self, update: &SegmentUpdate) {
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(length) = update.length {
            self.length = clamp_input(length, LENGTH_MIN, LENGTH_MAX, self.length);
        }
        if let Some(width) = update.width {
            self.width = clamp_input(width, WIDTH_MIN, WIDTH_MAX, self.width);
        }
        if let Some(banking) = update.banking {
            self.banking = clamp_input(banking, BANKING_MIN, BANKING_MAX, self.banking);
        }
        if let Some(elevation) = update.elevation {
            self.elevation = clamp_input(elevation, ELEVATION_MIN, ELEVATION_MAX, self.elevation);
        }
        if let Some(is_drs) = update.is_drs {
            self.is_drs = is_drs;
        }
        if let Some(sector) = update.sector {
            self.sector = sector;
        }
    }
}

/// NaN behält den bisherigen Wert, alles andere wird geklemmt.
fn clamp_input(value: f64, min: f64, max: f64, previous: f64) -> f64 {
    if value.is_nan() {
        previous
    } else {
        value.clamp(min, max)
    }
}

/// Partielles Update eines Segments (nur gesetzte Felder werden übernommen).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentUpdate {
    pub kind: Option<SegmentKind>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub banking: Option<f64>,
    pub elevation: Option<f64>,
    pub is_drs: Option<bool>,
    /// `Some(None)` entfernt den Sektor
    pub sector: Option<Option<SectorNumber>>,
}

impl SegmentUpdate {
    /// Gibt zurück, ob das Update kein Feld setzt.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
