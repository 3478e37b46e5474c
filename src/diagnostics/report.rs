use super::TimingBreakdown;
use crate::intersections::SweepStats;
use crate::segments::FilterDiagnostics;
use serde::Serialize;

/// Why an estimation ended without a vanishing point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoEstimateReason {
    /// Fewer filtered lines than needed to form an intersection.
    TooFewLines,
    /// Cluttered scene (foliage, textures); intersections would be noise.
    TooManyLines,
    /// Every pair was parallel, so no cluster was formed.
    NoClusters,
}

/// Terminal state of an estimation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EstimateOutcome {
    Selected { x: i64, y: i64 },
    NoEstimate { reason: NoEstimateReason },
}

impl EstimateOutcome {
    pub fn vanishing_point(&self) -> Option<(i64, i64)> {
        match *self {
            EstimateOutcome::Selected { x, y } => Some((x, y)),
            EstimateOutcome::NoEstimate { .. } => None,
        }
    }
}

/// Full trace of one estimation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub outcome: EstimateOutcome,
    pub filter: FilterDiagnostics,
    /// All zeros when the line-count gate short-circuited the run.
    pub sweep: SweepStats,
    pub cluster_count: usize,
    pub dominant_cluster_size: usize,
    /// Unrounded centroid of the dominant cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<[f64; 2]>,
    pub timing: TimingBreakdown,
}

impl EstimateReport {
    pub(crate) fn new(filter: FilterDiagnostics, reason: NoEstimateReason) -> Self {
        Self {
            outcome: EstimateOutcome::NoEstimate { reason },
            filter,
            sweep: SweepStats::default(),
            cluster_count: 0,
            dominant_cluster_size: 0,
            centroid: None,
            timing: TimingBreakdown::default(),
        }
    }

    pub fn vanishing_point(&self) -> Option<(i64, i64)> {
        self.outcome.vanishing_point()
    }

    pub fn print_text_summary(&self) {
        println!("Vanishing point estimate");
        match self.outcome {
            EstimateOutcome::Selected { x, y } => println!("  point: ({x}, {y})"),
            EstimateOutcome::NoEstimate { reason } => println!("  point: none ({reason:?})"),
        }
        if let Some([cx, cy]) = self.centroid {
            println!("  centroid: ({cx:.3}, {cy:.3})");
        }
        let f = &self.filter;
        println!(
            "\nFilter: total={} kept={} degenerate={} near_horizontal={} near_vertical={}",
            f.total, f.kept, f.degenerate, f.near_horizontal, f.near_vertical
        );
        println!(
            "Sweep: pairs={} parallel={} degenerate={} intersections={}",
            self.sweep.pairs_evaluated,
            self.sweep.parallel_pairs,
            self.sweep.degenerate_pairs,
            self.sweep.intersections
        );
        println!(
            "Clusters: count={} dominant_size={}",
            self.cluster_count, self.dominant_cluster_size
        );
        let stages = self
            .timing
            .stages
            .iter()
            .map(|s| format!("{}={:.3}", s.stage, s.elapsed_ms))
            .collect::<Vec<_>>()
            .join(" ");
        println!("\nTimings (ms): {stages} total={:.3}", self.timing.total_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_status_tag() {
        let selected = serde_json::to_value(EstimateOutcome::Selected { x: 3, y: -4 }).unwrap();
        assert_eq!(
            selected,
            serde_json::json!({ "status": "selected", "x": 3, "y": -4 })
        );
        let none = serde_json::to_value(EstimateOutcome::NoEstimate {
            reason: NoEstimateReason::TooManyLines,
        })
        .unwrap();
        assert_eq!(
            none,
            serde_json::json!({ "status": "noEstimate", "reason": "tooManyLines" })
        );
    }
}
