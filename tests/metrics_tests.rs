use approx::assert_relative_eq;
use race_track_designer::core::{difficulty_label, safety_label};
use race_track_designer::{
    compute_metrics, parse_track_json, Segment, SegmentId, SegmentKind, TrackDifficulty,
};

fn sample_segments() -> Vec<Segment> {
    parse_track_json(include_str!("fixtures/sample_track.json"))
        .expect("Fixture sollte gültig sein")
        .segments
}

#[test]
fn sample_track_metrics() {
    let metrics = compute_metrics(&sample_segments());

    assert_relative_eq!(metrics.total_length, 1800.0);
    assert_relative_eq!(metrics.estimated_lap_time, 36.5);
    assert_relative_eq!(metrics.elevation_change, 14.0);
    assert_eq!(metrics.corner_count, 3);
    assert_eq!(metrics.straight_count, 3);
    assert_eq!(metrics.drs_zone_count, 1);
    assert_eq!(metrics.difficulty_score, 10);
    assert_eq!(metrics.safety_rating, 92);
    // 1 + 1 (DRS) + 1 + 0.5 = 3.5 → 4
    assert_eq!(metrics.possible_overtakes, 4);

    assert_eq!(difficulty_label(metrics.difficulty_score), "Easy");
    assert_eq!(safety_label(metrics.safety_rating), "Very Safe");
}

#[test]
fn metrics_are_deterministic_and_pure() {
    let segments = sample_segments();
    let copy = segments.clone();

    let first = compute_metrics(&segments);
    let second = compute_metrics(&segments);

    assert_eq!(first, second);
    assert_eq!(segments, copy);
}

#[test]
fn counts_partition_the_track() {
    let segments = sample_segments();
    let metrics = compute_metrics(&segments);
    assert_eq!(metrics.corner_count + metrics.straight_count, segments.len());
}

#[test]
fn corrupt_segment_does_not_poison_the_score() {
    let mut segments = sample_segments();
    let mut corrupt = Segment::new(
        SegmentId::new("corrupt"),
        SegmentKind::CornerRight,
        glam::Vec2::ZERO,
        f64::INFINITY,
        -4.0,
    );
    corrupt.banking = f64::NAN;
    corrupt.elevation = f64::NEG_INFINITY;
    segments.push(corrupt);

    let metrics = compute_metrics(&segments);
    assert!(metrics.total_length.is_finite());
    assert!(metrics.estimated_lap_time.is_finite());
    assert!(metrics.elevation_change.is_finite());
    assert!(metrics.difficulty_score <= 100);
    assert!(metrics.safety_rating <= 100);
}

#[test]
fn difficulty_scales_with_corners() {
    let corners: Vec<Segment> = (0..40)
        .map(|i| {
            Segment::new(
                SegmentId::new(format!("c{i}")),
                SegmentKind::CornerLeft,
                glam::Vec2::ZERO,
                100.0,
                15.0,
            )
        })
        .collect();

    // 40 Kurven: 80 + 4 → 84 → Extreme
    let metrics = compute_metrics(&corners);
    assert_eq!(metrics.difficulty_score, 84);
    assert_eq!(
        TrackDifficulty::from_score(metrics.difficulty_score),
        TrackDifficulty::Extreme
    );
}

#[test]
fn imported_values_outside_edit_limits_are_scored_as_stored() {
    let json = r#"{
      "name": "Hillclimb", "difficulty": "medium", "laps": 1,
      "elements": [
        { "id": "a", "type": "straight", "x": 0, "y": 0, "length": 500,
          "width": 15, "banking": 0, "elevation": 80, "isDRS": false }
      ]
    }"#;
    let metrics = compute_metrics(&parse_track_json(json).expect("Import").segments);
    assert_relative_eq!(metrics.elevation_change, 80.0);
    assert_relative_eq!(metrics.estimated_lap_time, 14.0);

    let json = r#"{
      "name": "Kaputt", "difficulty": "easy", "laps": 1,
      "elements": [
        { "id": "a", "type": "straight", "x": 0, "y": 0, "length": -100, "width": 15 },
        { "id": "b", "type": "straight", "x": 0, "y": 0, "length": 500, "width": 15 }
      ]
    }"#;
    let metrics = compute_metrics(&parse_track_json(json).expect("Import").segments);
    assert_relative_eq!(metrics.total_length, 400.0);
}
