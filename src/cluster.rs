//! Incremental spatial clustering of intersection points.
//!
//! Each cluster is keyed by the first point assigned to it; the key never
//! moves as members are added. A new point is compared against keys in
//! creation order and, under the default [`MembershipRule`], joins the first
//! cluster whose key lies strictly closer than the tolerance. The resulting
//! partition depends on insertion order; it is not a nearest-neighbour
//! clustering.
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Default cluster tolerance in pixels.
pub const DEFAULT_TOLERANCE_PX: f64 = 30.0;

/// How a point is assigned when more than one cluster key is within tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRule {
    /// Join the earliest-created cluster within tolerance.
    #[default]
    FirstWithinTolerance,
    /// Join the cluster whose key is closest; ties go to the earliest.
    Nearest,
    /// Join every cluster within tolerance. A point may be counted by
    /// several clusters.
    AllWithinTolerance,
}

/// Group of intersection points around a fixed key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cluster {
    pub key: Point2<f64>,
    pub members: Vec<Point2<f64>>,
}

impl Cluster {
    fn seeded(p: Point2<f64>) -> Self {
        Self {
            key: p,
            members: vec![p],
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Arithmetic mean of the members, summed in insertion order.
    pub fn centroid(&self) -> Option<Point2<f64>> {
        if self.members.is_empty() {
            return None;
        }
        let (sx, sy) = self
            .members
            .iter()
            .fold((0.0f64, 0.0f64), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = self.members.len() as f64;
        Some(Point2::new(sx / n, sy / n))
    }
}

/// Builds clusters from a stream of points.
#[derive(Clone, Debug)]
pub struct ClusterAggregator {
    tolerance: f64,
    rule: MembershipRule,
    clusters: Vec<Cluster>,
}

impl Default for ClusterAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE_PX, MembershipRule::default())
    }
}

impl ClusterAggregator {
    pub fn new(tolerance: f64, rule: MembershipRule) -> Self {
        Self {
            tolerance,
            rule,
            clusters: Vec::new(),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn insert(&mut self, p: Point2<f64>) {
        let joined = match self.rule {
            MembershipRule::FirstWithinTolerance => self.join_first(p),
            MembershipRule::Nearest => self.join_nearest(p),
            MembershipRule::AllWithinTolerance => self.join_all(p),
        };
        if !joined {
            self.clusters.push(Cluster::seeded(p));
        }
    }

    fn within(&self, p: &Point2<f64>, key: &Point2<f64>) -> Option<f64> {
        let d = nalgebra::distance(p, key);
        (d < self.tolerance).then_some(d)
    }

    fn join_first(&mut self, p: Point2<f64>) -> bool {
        let hit = self
            .clusters
            .iter()
            .position(|c| self.within(&p, &c.key).is_some());
        match hit {
            Some(idx) => {
                self.clusters[idx].members.push(p);
                true
            }
            None => false,
        }
    }

    fn join_nearest(&mut self, p: Point2<f64>) -> bool {
        let mut best: Option<(usize, f64)> = None;
        for (idx, c) in self.clusters.iter().enumerate() {
            if let Some(d) = self.within(&p, &c.key) {
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((idx, d));
                }
            }
        }
        match best {
            Some((idx, _)) => {
                self.clusters[idx].members.push(p);
                true
            }
            None => false,
        }
    }

    fn join_all(&mut self, p: Point2<f64>) -> bool {
        let tolerance = self.tolerance;
        let mut joined = false;
        for c in self.clusters.iter_mut() {
            if nalgebra::distance(&p, &c.key) < tolerance {
                c.members.push(p);
                joined = true;
            }
        }
        joined
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Largest non-empty cluster; among equal sizes the earliest created wins.
    pub fn dominant(&self) -> Option<&Cluster> {
        let mut best: Option<&Cluster> = None;
        let mut best_len = 0usize;
        for c in &self.clusters {
            if c.len() > best_len {
                best_len = c.len();
                best = Some(c);
            }
        }
        best
    }
}

impl Extend<Point2<f64>> for ClusterAggregator {
    fn extend<I: IntoIterator<Item = Point2<f64>>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}
