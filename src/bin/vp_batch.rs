use std::env;
use std::path::PathBuf;
use std::time::Instant;
use vanishing_point::io::load_segments;
use vanishing_point::VanishingPointEstimator;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        return Err(usage());
    }
    let inputs = paths
        .iter()
        .map(|p| load_segments(p).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let estimator = VanishingPointEstimator::default();
    let t0 = Instant::now();
    let results = estimator.estimate_batch(&inputs);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    for ((path, segs), result) in paths.iter().zip(&inputs).zip(&results) {
        let (name, n) = (path.display(), segs.len());
        match result {
            Some((x, y)) => println!("{name}: ({x}, {y}) from {n} segments"),
            None => println!("{name}: no estimate from {n} segments"),
        }
    }
    println!("Processed {} inputs in {:.3} ms", results.len(), elapsed_ms);
    Ok(())
}

fn usage() -> String {
    "Usage: vp_batch <segments.json>...".to_string()
}
