#![no_main]

use libfuzzer_sys::fuzz_target;
use race_track_designer::{compute_metrics, parse_track_json, write_track_json};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(track) = parse_track_json(text) else {
        return;
    };

    let metrics = compute_metrics(&track.segments);
    assert!(metrics.total_length.is_finite());
    assert!(metrics.estimated_lap_time.is_finite());
    assert!(metrics.difficulty_score <= 100);
    assert!(metrics.safety_rating <= 100);

    // Ein gelesener Track muss sich wieder schreiben und lesen lassen
    let json = write_track_json(&track).expect("Export eines gelesenen Tracks");
    let reparsed = parse_track_json(&json).expect("Re-Import des Exports");
    assert_eq!(reparsed.segments.len(), track.segments.len());
});
