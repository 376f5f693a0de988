//! Debug overlays that paint sample points and tree edges instead of the field.
use glam::DVec2;

/// Sample painted where a pixel lies on a sample point.
pub const POINT_OVERLAY_VALUE: f64 = 0.75;
/// Sample painted where a pixel lies on a tree edge.
pub const EDGE_OVERLAY_VALUE: f64 = 0.5;

/// Squared distance from `p` to the closed segment `a -> b`.
pub fn segment_distance_squared(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    let d = b - a;
    let norm = d.length_squared();
    if norm <= 0.0 {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(d) / norm).clamp(0.0, 1.0);
    p.distance_squared(a + d * t)
}

/// `true` if any of `points` is closer to `p` than `radius`.
pub fn near_point(points: &[DVec2], p: DVec2, radius: f64) -> bool {
    let r2 = radius * radius;
    points.iter().any(|q| q.distance_squared(p) < r2)
}

/// `true` if any segment is closer to `p` than `radius`.
pub fn near_segment(segments: &[(DVec2, DVec2)], p: DVec2, radius: f64) -> bool {
    let r2 = radius * radius;
    segments
        .iter()
        .any(|&(a, b)| segment_distance_squared(a, b, p) < r2)
}
