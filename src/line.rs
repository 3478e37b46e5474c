//! Lines in slope-normalized standard form and their pairwise intersection.
//!
//! A non-vertical segment through `(x1, y1)`–`(x2, y2)` is written as
//! `a·x + y + c = 0` with
//!
//! ```text
//! a = -(y2 - y1) / (x2 - x1)
//! c = -y1 - a·x1
//! ```
//!
//! The `y` coefficient is fixed to 1, so vertical segments have no
//! representation; [`Line::from_segment`] is the single place where they are
//! rejected.
use crate::segments::LineSegment;
use nalgebra::Point2;
use serde::Serialize;

/// Reasons a segment cannot be turned into a [`Line`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum LineError {
    #[error("segment is vertical at x = {x}; slope is undefined")]
    Vertical { x: f64 },
    #[error("segment yields non-finite line coefficients")]
    NonFinite,
}

/// Line `a·x + y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Line {
    a: f64,
    c: f64,
}

impl Line {
    pub fn from_segment(seg: &LineSegment) -> Result<Self, LineError> {
        let [x1, y1] = seg.p0;
        if seg.is_vertical() {
            return Err(LineError::Vertical { x: x1 });
        }
        let a = -(seg.dy() / seg.dx());
        let c = -y1 - a * x1;
        if !a.is_finite() || !c.is_finite() {
            return Err(LineError::NonFinite);
        }
        Ok(Self { a, c })
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Signed value of `a·x + y + c` at `p`.
    #[inline]
    pub fn residual(&self, p: &Point2<f64>) -> f64 {
        self.a * p.x + p.y + self.c
    }

    /// Perpendicular distance from `p` to the line.
    pub fn distance_to(&self, p: &Point2<f64>) -> f64 {
        self.residual(p).abs() / (self.a * self.a + 1.0).sqrt()
    }

    /// Exact slope equality; offset is ignored.
    #[inline]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.a == other.a
    }

    /// Intersection with `other`, or `None` when the lines are parallel.
    pub fn intersect(&self, other: &Line) -> Option<Point2<f64>> {
        if self.is_parallel_to(other) {
            return None;
        }
        let x = (other.c - self.c) / (self.a - other.a);
        let y = -self.a * x - self.c;
        // nearly parallel lines can overflow to a point at infinity
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Point2::new(x, y))
    }
}

impl TryFrom<&LineSegment> for Line {
    type Error = LineError;

    fn try_from(seg: &LineSegment) -> Result<Self, Self::Error> {
        Line::from_segment(seg)
    }
}

/// Convenience wrapper around [`Line::intersect`].
#[inline]
pub fn intersect(l1: &Line, l2: &Line) -> Option<Point2<f64>> {
    l1.intersect(l2)
}
