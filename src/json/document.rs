//! Serde-Abbild des Transferformats (Drahtformat, keine Domänenlogik).

use crate::core::TrackMetrics;
use serde::{Deserialize, Serialize};

/// Segment im Transferformat
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SegmentDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub length: f64,
    pub width: f64,
    #[serde(default)]
    pub banking: f64,
    #[serde(default)]
    pub elevation: f64,
    #[serde(rename = "isDRS", default)]
    pub is_drs: bool,
    #[serde(default)]
    pub sector_number: Option<u8>,
}

/// Strecke beim Import. `metrics` wird nicht gelesen (immer neu berechnet).
#[derive(Debug, Deserialize)]
pub(super) struct TrackDocumentIn {
    pub name: String,
    pub elements: Vec<SegmentDocument>,
    pub difficulty: String,
    pub laps: i64,
}

/// Strecke beim Export inklusive eingebetteter Kennzahlen.
#[derive(Debug, Serialize)]
pub(super) struct TrackDocumentOut<'a> {
    pub name: &'a str,
    pub elements: Vec<SegmentDocument>,
    pub difficulty: &'static str,
    pub laps: u8,
    pub metrics: TrackMetrics,
}
