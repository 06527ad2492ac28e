//! Basic example scoring a series with the autoregressive detector
//!
//! Run with: cargo run --example basic -p anomaly [-- path/to/prices.csv]
//!
//! With a CSV argument the second column of every record (after the header)
//! is scored. Without one a synthetic series with injected spikes is used.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use anomaly::{ArAnomalyDetector, DetectorConfig, ScoreStream};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn synthetic_series() -> Vec<f64> {
    let mut data: Vec<f64> = (0..200)
        .map(|i| 50.0 + (i as f64 * 0.25).sin() * 2.0 + ((i * 31) % 7) as f64 * 0.1)
        .collect();
    data[80] += 25.0;
    data[150] -= 20.0;
    data
}

fn load_csv(path: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_reader(BufReader::new(File::open(path)?));
    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record.get(1).ok_or("record has no second column")?;
        values.push(field.trim().parse::<f64>()?);
    }
    info!(path, count = values.len(), "loaded series");
    Ok(values)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "basic=info,anomaly_core=info".into()),
        )
        .init();

    println!("=== anomaly Basic Example ===\n");

    let data = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading {}", path);
            load_csv(&path)?
        }
        None => synthetic_series(),
    };
    if data.is_empty() {
        warn!("no observations to score");
    }

    let config = DetectorConfig::default().with_seed(2432);
    println!(
        "Detector: term={}, decay={}, {} observations\n",
        config.term,
        config.decay,
        data.len()
    );

    let detector = ArAnomalyDetector::from_config(&config)?;
    let mut stream = ScoreStream::new(detector);
    for point in stream.extend(data) {
        println!("{:>5}  value={:>10.4}  score={:>9.4}", point.index, point.value, point.score);
    }

    println!("\nHighest scores:");
    for point in stream.trace().top_n(5) {
        println!("   #{:<5} value={:.4} score={:.4}", point.index, point.value, point.score);
    }

    if let Some(peak) = stream.trace().peak() {
        info!(index = peak.index, value = peak.value, score = peak.score, "peak score");
    }

    let detector = stream.detector();
    println!(
        "\nFinal estimates: mean={:.4}, variance={:.4}",
        detector.mean(),
        detector.variance()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
