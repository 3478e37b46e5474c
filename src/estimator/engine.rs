use super::params::EstimatorParams;
use crate::cluster::ClusterAggregator;
use crate::diagnostics::{EstimateOutcome, EstimateReport, NoEstimateReason, TimingBreakdown};
use crate::distance_grid::{self, GridEstimate};
use crate::intersections::PairwiseIntersections;
use crate::line::Line;
use crate::segments::{filter_segments, FilterDiagnostics, LineSegment};
use log::debug;
use std::time::Instant;

/// Stateless vanishing-point estimator. One instance can serve any number of
/// calls, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct VanishingPointEstimator {
    params: EstimatorParams,
}

impl VanishingPointEstimator {
    pub fn new(params: EstimatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    /// Runs only the angular pre-filter.
    pub fn filter(&self, segments: &[LineSegment]) -> (Vec<LineSegment>, FilterDiagnostics) {
        filter_segments(segments, self.params.epsilon)
    }

    /// Integer pixel coordinate of the vanishing point, or `None` when no
    /// estimate can be made.
    pub fn estimate(&self, segments: &[LineSegment]) -> Option<(i64, i64)> {
        self.estimate_with_diagnostics(segments).vanishing_point()
    }

    pub fn estimate_with_diagnostics(&self, segments: &[LineSegment]) -> EstimateReport {
        let t0 = Instant::now();
        let mut timing = TimingBreakdown::default();

        // 1) Angular filter
        let stage = Instant::now();
        let (filtered, filter_diag) = self.filter(segments);
        timing.record("filter", stage);

        // 2) Line-count gate, before any pairwise work
        if let Some(reason) = self.params.line_count_gate(filtered.len()) {
            debug!(
                "VP: {} filtered lines outside [{}, {}] ({:?}), skipping intersections",
                filtered.len(),
                self.params.min_lines,
                self.params.max_lines,
                reason
            );
            let mut report = EstimateReport::new(filter_diag, reason);
            timing.finish(t0);
            report.timing = timing;
            return report;
        }

        // 3) Pairwise intersections streamed into the clusters
        let stage = Instant::now();
        let lines = to_lines(&filtered);
        let mut sweep = PairwiseIntersections::new(&lines);
        let mut clusters =
            ClusterAggregator::new(self.params.cluster_tolerance, self.params.membership);
        clusters.extend(sweep.by_ref());
        let sweep_stats = sweep.stats();
        timing.record("intersect_cluster", stage);

        // 4) Dominant cluster and its centroid
        let stage = Instant::now();
        let selected = clusters
            .dominant()
            .and_then(|c| c.centroid().map(|p| (p, c.len())));
        let (outcome, centroid, dominant_size) = match selected {
            Some((p, size)) => (
                EstimateOutcome::Selected {
                    x: round_pixel(p.x),
                    y: round_pixel(p.y),
                },
                Some([p.x, p.y]),
                size,
            ),
            None => (
                EstimateOutcome::NoEstimate {
                    reason: NoEstimateReason::NoClusters,
                },
                None,
                0,
            ),
        };
        timing.record("select", stage);
        timing.finish(t0);

        debug!(
            "VP: segs={} lines={} pairs={} parallel={} degenerate={} clusters={} dominant={} outcome={:?} elapsed_ms={:.3}",
            segments.len(),
            lines.len(),
            sweep_stats.pairs_evaluated,
            sweep_stats.parallel_pairs,
            sweep_stats.degenerate_pairs,
            clusters.len(),
            dominant_size,
            outcome,
            timing.total_ms
        );

        EstimateReport {
            outcome,
            filter: filter_diag,
            sweep: sweep_stats,
            cluster_count: clusters.len(),
            dominant_cluster_size: dominant_size,
            centroid,
            timing,
        }
    }

    /// Grid-search alternative on the filtered lines of an image of
    /// `width` x `height` pixels. See [`distance_grid`].
    pub fn estimate_min_distance(
        &self,
        segments: &[LineSegment],
        width: usize,
        height: usize,
    ) -> GridEstimate {
        let (filtered, _) = self.filter(segments);
        distance_grid::estimate_min_distance(&to_lines(&filtered), width, height)
    }

    /// Estimates every input independently; output order follows input order.
    pub fn estimate_batch(&self, inputs: &[Vec<LineSegment>]) -> Vec<Option<(i64, i64)>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            inputs.par_iter().map(|segs| self.estimate(segs)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs.iter().map(|segs| self.estimate(segs)).collect()
        }
    }
}

fn to_lines(filtered: &[LineSegment]) -> Vec<Line> {
    filtered
        .iter()
        .filter_map(|seg| match Line::from_segment(seg) {
            Ok(line) => Some(line),
            Err(err) => {
                debug!("VP: dropping segment {:?}: {}", seg, err);
                None
            }
        })
        .collect()
}

/// Nearest integer, halves to even.
#[inline]
fn round_pixel(v: f64) -> i64 {
    v.round_ties_even() as i64
}
