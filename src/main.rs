use vanishing_point::{LineSegment, VanishingPointEstimator};

fn main() {
    env_logger::init();
    // Demo stub: a fan of segments converging on (320, 180) plus one stray line
    let target = (320.0f64, 180.0f64);
    let mut segments: Vec<LineSegment> = [-2.2f64, -1.2, -0.6, 0.5, 0.9, 1.8]
        .iter()
        .map(|&slope| {
            let x0 = target.0 - 200.0;
            let y0 = target.1 - slope * 200.0;
            let y1 = target.1 - slope * 100.0;
            LineSegment::new(x0, y0, x0 + 100.0, y1)
        })
        .collect();
    segments.push(LineSegment::new(0.0, 400.0, 100.0, 350.0));

    let report = VanishingPointEstimator::default().estimate_with_diagnostics(&segments);
    let ms = report.timing.total_ms;
    match report.vanishing_point() {
        Some((x, y)) => println!("vanishing_point=({x}, {y}) latency_ms={ms:.3}"),
        None => println!("vanishing_point=none latency_ms={ms:.3}"),
    }
}
