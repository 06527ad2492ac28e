//! End-to-end tests for the anomaly crate
//!
//! Tests complete scoring workflows using only this crate's API.

use anomaly::{
    ArAnomalyDetector, DetectorConfig, ScoreStream, StreamConfig, StreamingDetector,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SPIKES: [usize; 3] = [120, 200, 260];

fn seasonal_data() -> Vec<f64> {
    (0..300)
        .map(|i| 50.0 + 2.0 * (i as f64 * 0.25).sin() + ((i * 31) % 7) as f64 * 0.1)
        .collect()
}

fn data_with_anomalies() -> Vec<f64> {
    let mut data = seasonal_data();
    data[120] += 25.0; // Spike
    data[200] -= 20.0; // Drop
    data[260] += 30.0; // Spike
    data
}

/// Price-like random walk, rounded to one decimal as quotes usually are.
fn random_walk(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = 2000.0;
    (0..len)
        .map(|_| {
            price += rng.gen_range(-25.0..25.0);
            (price * 10.0f64).round() / 10.0
        })
        .collect()
}

#[test]
fn e2e_spikes_stand_out_from_recent_history() {
    let mut detector = ArAnomalyDetector::with_seed(8, 0.05, 11).unwrap();
    let scores = detector.update_all(&data_with_anomalies());

    for &pos in SPIKES.iter() {
        let recent_max = scores[pos - 60..pos].iter().cloned().fold(f64::MIN, f64::max);
        assert!(
            scores[pos] > recent_max,
            "score at {} ({}) should exceed recent max {}",
            pos,
            scores[pos],
            recent_max
        );
    }
}

#[test]
fn e2e_stream_ranks_spikes_after_warm_up() {
    let detector = ArAnomalyDetector::with_seed(8, 0.05, 11).unwrap();
    let mut stream = ScoreStream::with_capacity(detector, 250);

    stream.extend(data_with_anomalies());

    // Capacity 250 keeps indices 50..300, past the warm-up phase.
    let trace = stream.trace();
    assert_eq!(trace.len(), 250);
    assert_eq!(trace.points[0].index, 50);

    let mut top: Vec<usize> = trace.top_n(3).iter().map(|p| p.index).collect();
    top.sort_unstable();
    assert_eq!(top, SPIKES.to_vec());
    assert_eq!(trace.peak().map(|p| p.index), Some(260));
}

#[test]
fn e2e_long_walk_scores_stay_finite() {
    let config = DetectorConfig::default().with_seed(2432);
    let mut detector = ArAnomalyDetector::from_config(&config).unwrap();

    let scores = detector.update_all(&random_walk(1500, 7));

    assert_eq!(scores.len(), 1500);
    assert!(scores.iter().all(|s| s.is_finite()));
    assert_eq!(detector.window_len(), config.term);
}

#[test]
fn e2e_clean_series_scores_flat_after_warm_up() {
    let mut detector = ArAnomalyDetector::with_seed(8, 0.05, 3).unwrap();
    let scores = detector.update_all(&seasonal_data());

    let settled = &scores[50..];
    let max = settled.iter().cloned().fold(f64::MIN, f64::max);
    let min = settled.iter().cloned().fold(f64::MAX, f64::min);
    assert!(min >= 0.0);
    assert!(max < 5.0, "clean series peaked at {}", max);
}

#[test]
fn e2e_streaming_matches_direct_updates() {
    let data = data_with_anomalies();

    let mut direct = ArAnomalyDetector::with_seed(8, 0.05, 5).unwrap();
    let expected = direct.update_all(&data);

    let detector = ArAnomalyDetector::with_seed(8, 0.05, 5).unwrap();
    let mut stream = ScoreStream::from_config(detector, &StreamConfig::unbounded());
    let points = stream.extend(data.iter().copied());

    let got: Vec<f64> = points.iter().map(|p| p.score).collect();
    assert_eq!(got, expected);
    assert_eq!(stream.observed(), data.len());
    assert_eq!(stream.detector().last_score(), *expected.last().unwrap());
}

#[test]
fn e2e_snapshot_serializes_to_json() {
    let mut detector = ArAnomalyDetector::with_seed(4, 0.1, 1).unwrap();
    detector.update_all(&[10.0, 11.0, 10.5, 11.5, 10.2]);

    let json = serde_json::to_value(detector.snapshot()).unwrap();
    assert_eq!(json["term"], 4);
    assert_eq!(json["window"].as_array().unwrap().len(), 4);
    assert_eq!(json["last_value"], 10.2);
}

#[test]
fn e2e_config_round_trip_through_json() {
    let config = DetectorConfig::new(12, 0.2).with_seed(4);
    let json = serde_json::to_string(&config).unwrap();
    let parsed = DetectorConfig::from_json(&json).unwrap();

    let mut a = ArAnomalyDetector::from_config(&config).unwrap();
    let mut b = ArAnomalyDetector::from_config(&parsed).unwrap();
    let data = random_walk(100, 1);

    assert_eq!(a.update_all(&data), b.update_all(&data));
}
