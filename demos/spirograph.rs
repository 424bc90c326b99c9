//! Draws a hypotrochoid through the pyplot-style API and shows it.
//!
//! Run with `cargo run --example spirograph`; pass a `.json` path to save the
//! scene instead of opening a window.

use spirographicals::prelude::*;
use spirographicals::pyplot as plt;
use std::f64::consts::PI;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Curve traced by a point at distance `d` from the centre of a circle of
/// radius `r` rolling inside a fixed circle of radius `big_r`.
fn hypotrochoid(big_r: f64, r: f64, d: f64, steps: usize) -> (Vec<f64>, Vec<f64>) {
    if r == 0.0 {
        return (vec![0.0], vec![0.0]);
    }
    let revolutions = r / gcd(r as u64, big_r as u64).max(1) as f64;
    let end = 2.0 * PI * revolutions;
    let k = (big_r - r) / r;

    (0..steps)
        .map(|i| {
            let theta = end * i as f64 / (steps - 1).max(1) as f64;
            (
                (big_r - r) * theta.cos() + d * (k * theta).cos(),
                (big_r - r) * theta.sin() - d * (k * theta).sin(),
            )
        })
        .unzip()
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spirographicals=info".into()),
        )
        .init();

    let (big_r, r, d) = (10.0, 3.0, 7.0);
    let (x, y) = hypotrochoid(big_r, r, d, 2000);

    let result = (|| -> Result<Outcome> {
        plt::subplots(FigureOptions::new().figsize(10.0, 10.0).facecolor("#121212"))?;
        plt::plot(&x, &y, LineOptions::new().color("#00FFFF").linewidth(1.5))?;
        plt::title(
            format!("Hypotrochoid (R={big_r}, r={r}, d={d})"),
            TextOptions::new().color("white"),
        )?;
        plt::grid(true, GridOptions::new().color("#444444").linestyle("--"))?;

        match std::env::args().nth(1) {
            Some(path) => plt::savefig(path, SaveOptions::default()),
            None => plt::show(),
        }
    })();

    if let Err(report) = result {
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
