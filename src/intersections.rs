//! All-pairs intersection sweep.
//!
//! Pairs are visited in a fixed order (outer index ascending, inner index
//! ascending, `i < j`), so `n` lines cost exactly `n·(n−1)/2` evaluations and
//! the sequence of produced points is reproducible. Pairs without a usable
//! intersection are skipped silently and only show up in [`SweepStats`]:
//! parallel pairs (equal slopes) and degenerate pairs, whose slopes differ
//! but whose intersection overflows to a non-finite point.
use crate::line::Line;
use nalgebra::Point2;
use serde::Serialize;

/// Counters collected while sweeping line pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepStats {
    pub pairs_evaluated: usize,
    pub parallel_pairs: usize,
    pub degenerate_pairs: usize,
    pub intersections: usize,
}

/// Iterator over the intersection points of every unordered pair of `lines`.
///
/// ```
/// use vanishing_point::intersections::PairwiseIntersections;
/// use vanishing_point::line::Line;
/// use vanishing_point::segments::LineSegment;
///
/// let lines: Vec<Line> = [
///     LineSegment::new(0.0, 0.0, 10.0, 10.0),
///     LineSegment::new(0.0, 10.0, 10.0, 0.0),
///     LineSegment::new(0.0, 5.0, 10.0, 15.0),
/// ]
/// .iter()
/// .map(|s| Line::from_segment(s).unwrap())
/// .collect();
///
/// let mut sweep = PairwiseIntersections::new(&lines);
/// let points: Vec<_> = sweep.by_ref().collect();
/// assert_eq!(points.len(), 2);
/// assert_eq!(sweep.stats().pairs_evaluated, 3);
/// assert_eq!(sweep.stats().parallel_pairs, 1);
/// ```
#[derive(Clone, Debug)]
pub struct PairwiseIntersections<'a> {
    lines: &'a [Line],
    i: usize,
    j: usize,
    stats: SweepStats,
}

impl<'a> PairwiseIntersections<'a> {
    pub fn new(lines: &'a [Line]) -> Self {
        Self {
            lines,
            i: 0,
            j: 1,
            stats: SweepStats::default(),
        }
    }

    /// Number of pairs the full sweep evaluates.
    pub fn pair_count(&self) -> usize {
        let n = self.lines.len();
        n * n.saturating_sub(1) / 2
    }

    pub fn stats(&self) -> SweepStats {
        self.stats
    }
}

impl Iterator for PairwiseIntersections<'_> {
    type Item = Point2<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.lines.len();
        while self.i + 1 < n {
            if self.j >= n {
                self.i += 1;
                self.j = self.i + 1;
                continue;
            }
            let (i, j) = (self.i, self.j);
            self.j += 1;
            self.stats.pairs_evaluated += 1;
            let (a, b) = (&self.lines[i], &self.lines[j]);
            if a.is_parallel_to(b) {
                self.stats.parallel_pairs += 1;
                continue;
            }
            match a.intersect(b) {
                Some(p) => {
                    self.stats.intersections += 1;
                    return Some(p);
                }
                None => self.stats.degenerate_pairs += 1,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::LineSegment;

    fn fan(n: usize) -> Vec<Line> {
        // all lines through (0, 0) with distinct slopes
        (0..n)
            .map(|k| {
                let seg = LineSegment::new(0.0, 0.0, 10.0, 5.0 + k as f64);
                Line::from_segment(&seg).unwrap()
            })
            .collect()
    }

    #[test]
    fn visits_every_unordered_pair_once() {
        for n in [0usize, 1, 2, 5, 12] {
            let lines = fan(n);
            let mut sweep = PairwiseIntersections::new(&lines);
            let expected = sweep.pair_count();
            let count = sweep.by_ref().count();
            assert_eq!(expected, n * n.saturating_sub(1) / 2);
            assert_eq!(count, expected);
            assert_eq!(sweep.stats().pairs_evaluated, expected);
            assert_eq!(sweep.stats().parallel_pairs, 0);
        }
    }

    #[test]
    fn pair_order_is_row_major() {
        let segs = [
            LineSegment::new(0.0, 0.0, 1.0, 1.0),  // y = x
            LineSegment::new(0.0, 10.0, 1.0, 8.0), // y = 10 - 2x
            LineSegment::new(0.0, 3.0, 1.0, 6.0),  // y = 3 + 3x
        ];
        let lines: Vec<Line> = segs
            .iter()
            .map(|s| Line::from_segment(s).unwrap())
            .collect();
        let points: Vec<_> = PairwiseIntersections::new(&lines).collect();
        let expected = [
            lines[0].intersect(&lines[1]).unwrap(),
            lines[0].intersect(&lines[2]).unwrap(),
            lines[1].intersect(&lines[2]).unwrap(),
        ];
        assert_eq!(points, expected);
    }

    #[test]
    fn parallel_pairs_are_counted_not_returned() {
        let segs = [
            LineSegment::new(0.0, 0.0, 10.0, 10.0),
            LineSegment::new(0.0, 20.0, 10.0, 30.0),
        ];
        let lines: Vec<Line> = segs
            .iter()
            .map(|s| Line::from_segment(s).unwrap())
            .collect();
        let mut sweep = PairwiseIntersections::new(&lines);
        assert!(sweep.next().is_none());
        assert_eq!(
            sweep.stats(),
            SweepStats {
                pairs_evaluated: 1,
                parallel_pairs: 1,
                degenerate_pairs: 0,
                intersections: 0,
            }
        );
    }

    #[test]
    fn overflowing_intersection_is_degenerate_not_parallel() {
        // slopes 1 and 1 + 2^-52; offsets 1e300 apart put the crossing past f64::MAX
        let far = 2e300f64;
        let segs = [
            LineSegment::new(0.0, 0.0, 1.0, 1.0),
            LineSegment::new(-1e300, 0.0, 1e300, f64::from_bits(far.to_bits() + 1)),
        ];
        let lines: Vec<Line> = segs
            .iter()
            .map(|s| Line::from_segment(s).unwrap())
            .collect();
        assert!(!lines[0].is_parallel_to(&lines[1]));

        let mut sweep = PairwiseIntersections::new(&lines);
        assert!(sweep.next().is_none());
        let stats = sweep.stats();
        assert_eq!(stats.pairs_evaluated, 1);
        assert_eq!(stats.parallel_pairs, 0);
        assert_eq!(stats.degenerate_pairs, 1);
        assert_eq!(stats.intersections, 0);
    }
}
