//! Metrik-Engine: bewertet eine geordnete Segmentliste.
//!
//! Reine, deterministische Funktion ohne Seiteneffekte. Die Liste wird als
//! geschlossener Rundkurs interpretiert (auf Segment `n-1` folgt Segment `0`).

use super::segment::{Segment, SegmentKind};
use serde::{Deserialize, Serialize};

/// Reisegeschwindigkeit auf Geraden (m/s).
const STRAIGHT_SPEED: f64 = 50.0;
/// Zusatzgeschwindigkeit durch DRS, als Zeitgutschrift (m/s).
const DRS_SPEED: f64 = 70.0;
/// Kurvengeschwindigkeit (m/s).
const CORNER_SPEED: f64 = 30.0;
/// Zeitersparnis pro Grad Überhöhung.
const BANKING_TIME_FACTOR: f64 = 0.01;
/// Zeitkosten pro Meter Höhendifferenz (symmetrisch für Auf- und Abfahrt).
const ELEVATION_TIME_FACTOR: f64 = 0.05;

/// Gerade ab dieser Länge (exklusiv) ergibt vor einer Kurve eine Überholchance.
const OVERTAKE_STRAIGHT_MIN_LENGTH: f64 = 300.0;
/// Kurven unterhalb dieser Überhöhung begünstigen Überholmanöver.
const OVERTAKE_LOW_BANKING: f64 = 5.0;

/// Kurven ab dieser Länge (exklusiv) gelten als schnell.
const SAFETY_FAST_CORNER_LENGTH: f64 = 200.0;
/// Kurven unterhalb dieser Überhöhung gelten als kritisch.
const SAFETY_LOW_BANKING: f64 = 3.0;
/// Steile Höhendifferenz (exklusiv).
const SAFETY_STEEP_ELEVATION: f64 = 20.0;

/// Abgeleitete Kennzahlen einer Strecke (wird immer komplett neu berechnet)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackMetrics {
    /// Gesamtlänge in Metern
    pub total_length: f64,
    /// Geschätzte Rundenzeit in Sekunden (eine Nachkommastelle)
    pub estimated_lap_time: f64,
    /// Schwierigkeit 0–100
    pub difficulty_score: u32,
    /// Anzahl möglicher Überholstellen
    pub possible_overtakes: u32,
    /// Sicherheit 0–100
    pub safety_rating: u32,
    /// Höhenband relativ zur Basislinie 0 in Metern
    pub elevation_change: f64,
    pub corner_count: usize,
    pub straight_count: usize,
    pub drs_zone_count: usize,
}

impl TrackMetrics {
    /// Kennzahlen einer leeren Strecke: alles 0, Sicherheit 100.
    pub fn empty() -> Self {
        Self {
            total_length: 0.0,
            estimated_lap_time: 0.0,
            difficulty_score: 0,
            possible_overtakes: 0,
            safety_rating: 100,
            elevation_change: 0.0,
            corner_count: 0,
            straight_count: 0,
            drs_zone_count: 0,
        }
    }
}

impl Default for TrackMetrics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Bereinigte Sicht auf ein Segment für die Bewertung.
///
/// Nur nicht-endliche Werte werden zu 0. Endliche Werte außerhalb der
/// Editier-Grenzen (z.B. aus einer extern bearbeiteten Datei) gehen
/// unverändert in die Formeln ein.
#[derive(Clone, Copy)]
struct ScoredSegment {
    kind: SegmentKind,
    length: f64,
    banking: f64,
    elevation: f64,
    is_drs: bool,
}

impl ScoredSegment {
    fn from_segment(segment: &Segment) -> Self {
        Self {
            kind: segment.kind,
            length: finite_or_zero(segment.length),
            banking: finite_or_zero(segment.banking),
            elevation: finite_or_zero(segment.elevation),
            is_drs: segment.is_drs,
        }
    }

    fn lap_time(&self) -> f64 {
        let base = if self.kind.is_corner() {
            (self.length / CORNER_SPEED) * (1.0 - self.banking * BANKING_TIME_FACTOR)
        } else if self.is_drs {
            self.length / STRAIGHT_SPEED - self.length / DRS_SPEED
        } else {
            self.length / STRAIGHT_SPEED
        };
        base + self.elevation.abs() * ELEVATION_TIME_FACTOR
    }

    fn safety_penalty(&self) -> f64 {
        let mut penalty = 0.0;
        if self.kind.is_corner() && self.length > SAFETY_FAST_CORNER_LENGTH {
            penalty += 5.0;
        }
        if self.kind.is_corner() && self.banking < SAFETY_LOW_BANKING {
            penalty += 3.0;
        }
        if self.elevation.abs() > SAFETY_STEEP_ELEVATION {
            penalty += 4.0;
        }
        penalty
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Rundet auf einen ganzzahligen Score in `[0, 100]`.
fn clamp_score(value: f64) -> u32 {
    finite_or_zero(value).clamp(0.0, 100.0).round() as u32
}

/// Berechnet alle Kennzahlen einer Segmentliste.
///
/// Totale Funktion: eine leere Liste und degenerierte Werte führen nie zu
/// einem Fehler oder zu NaN/Unendlich im Ergebnis.
pub fn compute_metrics(segments: &[Segment]) -> TrackMetrics {
    if segments.is_empty() {
        return TrackMetrics::empty();
    }

    let scored: Vec<ScoredSegment> = segments.iter().map(ScoredSegment::from_segment).collect();

    // Summe endlicher Werte kann dennoch überlaufen
    let total_length = finite_or_zero(scored.iter().map(|s| s.length).sum());
    let corner_count = scored.iter().filter(|s| s.kind.is_corner()).count();
    let straight_count = scored
        .iter()
        .filter(|s| s.kind == SegmentKind::Straight)
        .count();
    let drs_zone_count = scored.iter().filter(|s| s.is_drs).count();

    // Höhenband gegen Basislinie 0, nicht gegen Min/Max der Samples
    let max_elevation = scored.iter().map(|s| s.elevation).fold(0.0_f64, f64::max);
    let min_elevation = scored.iter().map(|s| s.elevation).fold(0.0_f64, f64::min);
    let elevation_change = finite_or_zero(max_elevation - min_elevation);

    let lap_time: f64 = scored.iter().map(ScoredSegment::lap_time).sum();
    let estimated_lap_time = finite_or_zero((lap_time * 10.0).round() / 10.0);

    let difficulty = 2.0 * corner_count as f64 + 3.0 * (elevation_change / 10.0)
        + total_length / 1000.0
        - 2.0 * drs_zone_count as f64;

    let safety = 100.0 - scored.iter().map(ScoredSegment::safety_penalty).sum::<f64>();

    TrackMetrics {
        total_length,
        estimated_lap_time,
        difficulty_score: clamp_score(difficulty),
        possible_overtakes: overtake_potential(&scored),
        safety_rating: clamp_score(safety),
        elevation_change,
        corner_count,
        straight_count,
        drs_zone_count,
    }
}

/// Überholpotenzial über alle (zyklischen) Nachbarpaare, erst am Ende gerundet.
fn overtake_potential(scored: &[ScoredSegment]) -> u32 {
    let n = scored.len();
    let mut potential = 0.0_f64;

    for (i, current) in scored.iter().enumerate() {
        let next = &scored[(i + 1) % n];

        if current.kind == SegmentKind::Straight && next.kind.is_corner() {
            if current.length > OVERTAKE_STRAIGHT_MIN_LENGTH {
                potential += 1.0;
            }
            if current.is_drs {
                potential += 1.0;
            }
        }

        if current.kind.is_corner() && current.banking < OVERTAKE_LOW_BANKING {
            potential += 0.5;
        }
    }

    potential.round() as u32
}

/// Schwierigkeitsstufe einer Strecke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackDifficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl TrackDifficulty {
    /// Leitet die Stufe aus dem Score ab (<25, <50, <75, sonst Extreme).
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=24 => Self::Easy,
            25..=49 => Self::Medium,
            50..=74 => Self::Hard,
            _ => Self::Extreme,
        }
    }

    /// Anzeigetext.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }

    /// Bezeichner im Transferformat.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Extreme => "extreme",
        }
    }

    /// Parst den Bezeichner aus dem Transferformat (Groß-/Kleinschreibung egal).
    pub fn from_wire_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }
}

/// Sicherheitsstufe einer Strecke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyLevel {
    VerySafe,
    Safe,
    Moderate,
    Risky,
    Dangerous,
}

impl SafetyLevel {
    /// Leitet die Stufe aus dem Rating ab (≥80, ≥60, ≥40, ≥20, sonst Dangerous).
    pub fn from_rating(rating: u32) -> Self {
        match rating {
            80.. => Self::VerySafe,
            60..=79 => Self::Safe,
            40..=59 => Self::Moderate,
            20..=39 => Self::Risky,
            _ => Self::Dangerous,
        }
    }

    /// Anzeigetext.
    pub fn label(self) -> &'static str {
        match self {
            Self::VerySafe => "Very Safe",
            Self::Safe => "Safe",
            Self::Moderate => "Moderate",
            Self::Risky => "Risky",
            Self::Dangerous => "Dangerous",
        }
    }
}

/// Anzeigetext der Schwierigkeit für einen Score.
pub fn difficulty_label(score: u32) -> &'static str {
    TrackDifficulty::from_score(score).label()
}

/// Anzeigetext der Sicherheit für ein Rating.
pub fn safety_label(rating: u32) -> &'static str {
    SafetyLevel::from_rating(rating).label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SegmentId;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn segment(id: &str, kind: SegmentKind, length: f64) -> Segment {
        Segment::new(SegmentId::new(id), kind, Vec2::ZERO, length, 15.0)
    }

    #[test]
    fn empty_track_is_zero_and_fully_safe() {
        let metrics = compute_metrics(&[]);
        assert_eq!(metrics, TrackMetrics::empty());
        assert_eq!(metrics.safety_rating, 100);
        assert_eq!(metrics.total_length, 0.0);
        assert_eq!(metrics.estimated_lap_time, 0.0);
        assert_eq!(metrics.possible_overtakes, 0);
    }

    #[test]
    fn drs_straight_and_banked_corner_lap_time() {
        let mut straight = segment("1", SegmentKind::Straight, 500.0);
        straight.is_drs = true;
        let mut corner = segment("2", SegmentKind::CornerLeft, 200.0);
        corner.banking = 10.0;

        let metrics = compute_metrics(&[straight, corner]);

        assert_relative_eq!(metrics.total_length, 700.0);
        // 500/50 - 500/70 + (200/30) * 0.9 = 8.857…
        assert_relative_eq!(metrics.estimated_lap_time, 8.9);
        assert_eq!(metrics.corner_count, 1);
        assert_eq!(metrics.straight_count, 1);
        assert_eq!(metrics.drs_zone_count, 1);
    }

    #[test]
    fn elevation_band_is_anchored_at_zero() {
        let mut a = segment("a", SegmentKind::Straight, 100.0);
        a.elevation = 10.0;
        let mut b = segment("b", SegmentKind::Straight, 100.0);
        b.elevation = 25.0;
        assert_relative_eq!(compute_metrics(&[a.clone(), b.clone()]).elevation_change, 25.0);

        a.elevation = -5.0;
        b.elevation = -30.0;
        assert_relative_eq!(compute_metrics(&[a.clone(), b.clone()]).elevation_change, 30.0);

        a.elevation = -5.0;
        b.elevation = 12.0;
        assert_relative_eq!(compute_metrics(&[a, b]).elevation_change, 17.0);
    }

    #[test]
    fn elevation_costs_time_in_both_directions() {
        let mut up = segment("up", SegmentKind::Straight, 500.0);
        up.elevation = 20.0;
        let mut down = up.clone();
        down.elevation = -20.0;

        // 10 s Basis + 20 * 0.05 = 11 s
        assert_relative_eq!(compute_metrics(&[up]).estimated_lap_time, 11.0);
        assert_relative_eq!(compute_metrics(&[down]).estimated_lap_time, 11.0);
    }

    #[test]
    fn difficulty_combines_corners_elevation_length_and_drs() {
        let mut corners: Vec<Segment> = (0..10)
            .map(|i| segment(&format!("c{i}"), SegmentKind::CornerRight, 200.0))
            .collect();
        corners[0].elevation = 40.0;
        // 2*10 + 3*4 + 2000/1000 = 34
        assert_eq!(compute_metrics(&corners).difficulty_score, 34);

        let mut straight = segment("s", SegmentKind::Straight, 1000.0);
        straight.is_drs = true;
        corners.push(straight);
        // 2*10 + 12 + 3 - 2 = 33
        assert_eq!(compute_metrics(&corners).difficulty_score, 33);
    }

    #[test]
    fn difficulty_is_clamped_to_zero_and_hundred() {
        let mut drs_only: Vec<Segment> = (0..5)
            .map(|i| segment(&format!("s{i}"), SegmentKind::Straight, 100.0))
            .collect();
        for s in &mut drs_only {
            s.is_drs = true;
        }
        assert_eq!(compute_metrics(&drs_only).difficulty_score, 0);

        let many_corners: Vec<Segment> = (0..80)
            .map(|i| segment(&format!("c{i}"), SegmentKind::CornerLeft, 100.0))
            .collect();
        assert_eq!(compute_metrics(&many_corners).difficulty_score, 100);
    }

    #[test]
    fn overtakes_wrap_around_the_loop() {
        // Letzte Gerade → erste Kurve zählt ebenfalls
        let mut corner = segment("c", SegmentKind::CornerLeft, 150.0);
        corner.banking = 10.0;
        let mut straight = segment("s", SegmentKind::Straight, 400.0);
        straight.is_drs = true;

        let metrics = compute_metrics(&[corner, straight]);
        assert_eq!(metrics.possible_overtakes, 2);
    }

    #[test]
    fn overtakes_round_only_at_the_end() {
        // Drei flache Kurven: 3 * 0.5 = 1.5 → 2
        let corners: Vec<Segment> = (0..3)
            .map(|i| segment(&format!("c{i}"), SegmentKind::CornerLeft, 100.0))
            .collect();
        assert_eq!(compute_metrics(&corners).possible_overtakes, 2);

        // Eine flache Kurve: 0.5 → 1 (nicht pro Term abgerundet)
        let single = [segment("c", SegmentKind::CornerRight, 100.0)];
        assert_eq!(compute_metrics(&single).possible_overtakes, 1);
    }

    #[test]
    fn short_straight_before_corner_only_counts_with_drs() {
        let mut corner = segment("c", SegmentKind::CornerLeft, 100.0);
        corner.banking = 20.0;
        let short = segment("s", SegmentKind::Straight, 200.0);
        assert_eq!(
            compute_metrics(&[short.clone(), corner.clone()]).possible_overtakes,
            0
        );

        let mut short_drs = short;
        short_drs.is_drs = true;
        assert_eq!(compute_metrics(&[short_drs, corner]).possible_overtakes, 1);
    }

    #[test]
    fn safety_deductions_per_segment() {
        // Lange, flache Kurve auf 30 m: -5 -3 -4
        let mut corner = segment("c", SegmentKind::CornerLeft, 250.0);
        corner.elevation = 30.0;
        assert_eq!(compute_metrics(&[corner]).safety_rating, 88);

        let many: Vec<Segment> = (0..20)
            .map(|i| {
                let mut c = segment(&format!("c{i}"), SegmentKind::CornerRight, 300.0);
                c.elevation = -25.0;
                c
            })
            .collect();
        assert_eq!(compute_metrics(&many).safety_rating, 0);
    }

    #[test]
    fn degenerate_values_stay_finite() {
        let mut broken = segment("x", SegmentKind::CornerLeft, f64::NAN);
        broken.banking = f64::INFINITY;
        broken.elevation = f64::NAN;
        let negative = segment("y", SegmentKind::Straight, -400.0);
        let healthy = segment("z", SegmentKind::Straight, 500.0);

        let metrics = compute_metrics(&[broken, negative, healthy]);

        assert!(metrics.total_length.is_finite());
        assert!(metrics.estimated_lap_time.is_finite());
        assert!(metrics.elevation_change.is_finite());
        // NaN → 0, die negative Länge bleibt erhalten
        assert_relative_eq!(metrics.total_length, 100.0);
        assert!(metrics.safety_rating <= 100);
        assert!(metrics.difficulty_score <= 100);
    }

    #[test]
    fn finite_out_of_range_values_are_scored_unchanged() {
        let mut steep = segment("steep", SegmentKind::Straight, 500.0);
        steep.elevation = 80.0;

        let metrics = compute_metrics(&[steep]);
        assert_relative_eq!(metrics.elevation_change, 80.0);
        // 500/50 + 80 * 0.05
        assert_relative_eq!(metrics.estimated_lap_time, 14.0);

        let negative = segment("neg", SegmentKind::Straight, -100.0);
        let regular = segment("reg", SegmentKind::Straight, 500.0);
        assert_relative_eq!(compute_metrics(&[negative, regular]).total_length, 400.0);

        let mut banked = segment("banked", SegmentKind::CornerLeft, 300.0);
        banked.banking = 45.0;
        // (300/30) * (1 - 0.45)
        assert_relative_eq!(compute_metrics(&[banked]).estimated_lap_time, 5.5);
    }

    #[test]
    fn overflowing_totals_fall_back_to_zero() {
        let mut high = segment("high", SegmentKind::Straight, f64::MAX);
        high.elevation = f64::MAX;
        let mut low = segment("low", SegmentKind::Straight, f64::MAX);
        low.elevation = -f64::MAX;

        let metrics = compute_metrics(&[high, low]);
        assert!(metrics.total_length.is_finite());
        assert!(metrics.elevation_change.is_finite());
        assert!(metrics.estimated_lap_time.is_finite());
        assert!(metrics.difficulty_score <= 100);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let mut a = segment("a", SegmentKind::Straight, 333.3);
        a.is_drs = true;
        a.elevation = 7.7;
        let mut b = segment("b", SegmentKind::CornerRight, 123.4);
        b.banking = 4.2;
        let segments = vec![a, b];

        let first = compute_metrics(&segments);
        let second = compute_metrics(&segments);
        assert_eq!(first, second);
        assert_eq!(first.total_length.to_bits(), second.total_length.to_bits());
        assert_eq!(
            first.estimated_lap_time.to_bits(),
            second.estimated_lap_time.to_bits()
        );
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(difficulty_label(20), "Easy");
        assert_eq!(difficulty_label(40), "Medium");
        assert_eq!(difficulty_label(60), "Hard");
        assert_eq!(difficulty_label(80), "Extreme");
        assert_eq!(TrackDifficulty::from_score(25), TrackDifficulty::Medium);
        assert_eq!(TrackDifficulty::from_score(75), TrackDifficulty::Extreme);
    }

    #[test]
    fn safety_labels() {
        assert_eq!(safety_label(90), "Very Safe");
        assert_eq!(safety_label(70), "Safe");
        assert_eq!(safety_label(50), "Moderate");
        assert_eq!(safety_label(30), "Risky");
        assert_eq!(safety_label(10), "Dangerous");
        assert_eq!(SafetyLevel::from_rating(80), SafetyLevel::VerySafe);
    }

    #[test]
    fn difficulty_wire_names_are_case_insensitive() {
        assert_eq!(
            TrackDifficulty::from_wire_str("Hard"),
            Some(TrackDifficulty::Hard)
        );
        assert_eq!(
            TrackDifficulty::from_wire_str("extreme"),
            Some(TrackDifficulty::Extreme)
        );
        assert_eq!(TrackDifficulty::from_wire_str("insane"), None);
    }
}
