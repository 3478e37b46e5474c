use serde::Serialize;
use std::env;
use std::path::Path;
use vanishing_point::config::vp_demo;
use vanishing_point::diagnostics::EstimateReport;
use vanishing_point::distance_grid::GridEstimate;
use vanishing_point::io::{load_segments, write_json_file};
use vanishing_point::VanishingPointEstimator;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = vp_demo::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let segments = load_segments(&config.input).map_err(|e| e.to_string())?;
    let estimator = VanishingPointEstimator::new(config.params.clone());
    let params = estimator.params();
    println!(
        "Estimator: epsilon={:.4} rad tolerance={} px lines=[{}, {}] membership={:?}",
        params.epsilon,
        params.cluster_tolerance,
        params.min_lines,
        params.max_lines,
        params.membership
    );
    let report = estimator.estimate_with_diagnostics(&segments);
    report.print_text_summary();

    let grid = config.image_size.map(|[w, h]| {
        let grid = estimator.estimate_min_distance(&segments, w, h);
        println!(
            "\nGrid search ({}x{}): point=({}, {}) distance_sum={:.3}",
            w, h, grid.point.0, grid.point.1, grid.distance_sum
        );
        grid
    });

    let output = VpDemoOutput {
        input: config.input.display().to_string(),
        segment_count: segments.len(),
        report,
        grid,
    };
    write_json_file(&config.output.result_json, &output).map_err(|e| e.to_string())?;
    println!(
        "\nWrote vanishing-point report to {}",
        config.output.result_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: vp_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VpDemoOutput {
    input: String,
    segment_count: usize,
    report: EstimateReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<GridEstimate>,
}
