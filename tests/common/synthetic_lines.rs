use vanishing_point::LineSegment;

/// Segment of the given slope passing through `(px, py + offset)`, 100 px wide.
pub fn through(px: f64, py: f64, slope: f64, offset: f64) -> LineSegment {
    let y = py + offset;
    LineSegment::new(px - 50.0, y - 50.0 * slope, px + 50.0, y + 50.0 * slope)
}

/// `n` segments through `(px, py)` with distinct slopes, all passing the
/// angular filter (slopes in [0.25, 0.25 + 0.01 * n)).
pub fn converging(px: f64, py: f64, n: usize) -> Vec<LineSegment> {
    assert!(n <= 200, "slope range would reach the vertical band");
    (0..n)
        .map(|k| through(px, py, 0.25 + 0.01 * k as f64, 0.0))
        .collect()
}

/// Deterministic pseudo-random segments (64-bit LCG), not filtered.
#[allow(dead_code)]
pub fn scattered(n: usize, seed: u64) -> Vec<LineSegment> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 640.0
    };
    (0..n)
        .map(|_| LineSegment::new(next(), next(), next(), next()))
        .collect()
}
