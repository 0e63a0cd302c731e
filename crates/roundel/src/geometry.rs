//! Stateless angle and point math. All angles are degrees, `0° = +x` and
//! `90° = +y` (counter-clockwise-positive mathematical convention).

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Normalize an angle to `[0, 360)`, mapping negative inputs into the
/// positive range (-90 becomes 270).
pub fn normalize_angle(degrees: f64) -> f64 {
    let a = degrees.rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Clockwise-increasing distance from `start` to `end`, handling
/// wrap-around: `angle_span(345, 15) == 30`. Equal angles yield 0, not 360.
pub fn angle_span(start: f64, end: f64) -> f64 {
    let start = normalize_angle(start);
    let end = normalize_angle(end);
    if end >= start {
        end - start
    } else {
        (360.0 - start) + end
    }
}

/// True if `angle` lies on the directed arc `[start, end]`, both endpoints
/// inclusive. `start > end` marks an arc that wraps through 0°.
pub fn angle_contains(angle: f64, start: f64, end: f64) -> bool {
    let angle = normalize_angle(angle);
    let start = normalize_angle(start);
    let end = normalize_angle(end);

    if start <= end {
        start <= angle && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Inverse of [`polar_to_cartesian`]; the angle comes back normalized to
/// `[0, 360)`. A point at the center has distance 0 and, by convention,
/// angle 0.
pub fn cartesian_to_polar(center: Point, point: Point) -> (f64, f64) {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    let distance = dx.hypot(dy);
    let angle = normalize_angle(dy.atan2(dx).to_degrees());
    (distance, angle)
}

/// Squared-distance test, so a point exactly on the rim counts as inside.
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    dx * dx + dy * dy <= radius * radius
}

/// Ring/annulus membership, both bounds inclusive.
pub fn point_in_ring(point: Point, center: Point, inner: f64, outer: f64) -> bool {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    let dist_sq = dx * dx + dy * dy;
    inner * inner <= dist_sq && dist_sq <= outer * outer
}

/// Arc-sector (pie-slice band) membership.
pub fn point_in_arc(
    point: Point,
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
) -> bool {
    // ring test first: rejects without touching atan2
    if !point_in_ring(point, center, inner, outer) {
        return false;
    }
    let (_, angle) = cartesian_to_polar(center, point);
    angle_contains(angle, start, end)
}

/// Sample `segments + 1` points at equal angular steps along the directed
/// arc from `start` to `end`. With `segments` unset, roughly one segment
/// per 5° with a floor of 8, so short arcs stay smooth without unbounded
/// point counts.
pub fn arc_points(
    center: Point,
    radius: f64,
    start: f64,
    end: f64,
    segments: Option<usize>,
) -> Vec<Point> {
    let span = angle_span(start, end);
    let segments = match segments {
        Some(s) => s.max(1),
        None => ((span / 5.0).round() as usize).max(8),
    };

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        points.push(polar_to_cartesian(center, radius, start + t * span));
    }
    points
}

/// Closed outline of an arc sector: outer arc forward, then inner arc
/// reversed, so the result forms a polygon a renderer can fill or stroke.
pub fn sector_outline_points(
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
    segments: Option<usize>,
) -> Vec<Point> {
    let outer_pts = arc_points(center, outer, start, end, segments);
    let inner_pts = arc_points(center, inner, start, end, segments);

    outer_pts
        .into_iter()
        .chain(inner_pts.into_iter().rev())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn normalize_passes_through_in_range() {
        assert_close(normalize_angle(45.0), 45.0);
        assert_close(normalize_angle(0.0), 0.0);
        assert_close(normalize_angle(359.0), 359.0);
    }

    #[test]
    fn normalize_maps_negative_angles() {
        assert_close(normalize_angle(-90.0), 270.0);
        assert_close(normalize_angle(-180.0), 180.0);
        assert_close(normalize_angle(-360.0), 0.0);
        assert_close(normalize_angle(-450.0), 270.0);
    }

    #[test]
    fn normalize_maps_large_angles() {
        assert_close(normalize_angle(360.0), 0.0);
        assert_close(normalize_angle(450.0), 90.0);
        assert_close(normalize_angle(720.0), 0.0);
    }

    #[test]
    fn normalize_stays_below_360_for_tiny_negatives() {
        let a = normalize_angle(-1e-18);
        assert!((0.0..360.0).contains(&a), "got {a}");
    }

    #[test]
    fn span_simple() {
        assert_close(angle_span(0.0, 90.0), 90.0);
        assert_close(angle_span(45.0, 135.0), 90.0);
    }

    #[test]
    fn span_wraps_through_zero() {
        assert_close(angle_span(345.0, 15.0), 30.0);
        assert_close(angle_span(350.0, 10.0), 20.0);
    }

    #[test]
    fn span_of_equal_angles_is_zero() {
        assert_close(angle_span(90.0, 90.0), 0.0);
    }

    #[test]
    fn span_the_long_way_round() {
        assert_close(angle_span(10.0, 350.0), 340.0);
    }

    #[test]
    fn contains_simple_range_is_inclusive() {
        assert!(angle_contains(45.0, 0.0, 90.0));
        assert!(angle_contains(0.0, 0.0, 90.0));
        assert!(angle_contains(90.0, 0.0, 90.0));
        assert!(!angle_contains(91.0, 0.0, 90.0));
    }

    #[test]
    fn contains_wrapping_range() {
        assert!(angle_contains(350.0, 345.0, 15.0));
        assert!(angle_contains(0.0, 345.0, 15.0));
        assert!(angle_contains(10.0, 345.0, 15.0));
        assert!(!angle_contains(344.0, 345.0, 15.0));
        assert!(!angle_contains(16.0, 345.0, 15.0));
    }

    #[test]
    fn contains_at_the_seam() {
        assert!(angle_contains(0.0, 350.0, 10.0));
        assert!(angle_contains(360.0, 350.0, 10.0));
    }

    #[test]
    fn polar_to_cartesian_cardinal_directions() {
        let c = Point::new(100.0, 100.0);

        let p = polar_to_cartesian(c, 50.0, 0.0);
        assert_close(p.x, 150.0);
        assert_close(p.y, 100.0);

        let p = polar_to_cartesian(c, 50.0, 90.0);
        assert_close(p.x, 100.0);
        assert_close(p.y, 150.0);

        let p = polar_to_cartesian(c, 50.0, 180.0);
        assert_close(p.x, 50.0);
        assert_close(p.y, 100.0);

        let p = polar_to_cartesian(c, 50.0, 270.0);
        assert_close(p.x, 100.0);
        assert_close(p.y, 50.0);
    }

    #[test]
    fn polar_to_cartesian_diagonal() {
        let p = polar_to_cartesian(Point::default(), 2.0_f64.sqrt(), 45.0);
        assert_close(p.x, 1.0);
        assert_close(p.y, 1.0);
    }

    #[test]
    fn cartesian_to_polar_cardinal_directions() {
        let c = Point::new(100.0, 100.0);

        let (dist, angle) = cartesian_to_polar(c, Point::new(150.0, 100.0));
        assert_close(dist, 50.0);
        assert_close(angle, 0.0);

        let (dist, angle) = cartesian_to_polar(c, Point::new(100.0, 150.0));
        assert_close(dist, 50.0);
        assert_close(angle, 90.0);

        let (dist, angle) = cartesian_to_polar(c, Point::new(50.0, 100.0));
        assert_close(dist, 50.0);
        assert_close(angle, 180.0);

        let (dist, angle) = cartesian_to_polar(c, Point::new(100.0, 50.0));
        assert_close(dist, 50.0);
        assert_close(angle, 270.0);
    }

    #[test]
    fn cartesian_to_polar_at_center_is_defined() {
        let c = Point::new(100.0, 100.0);
        let (dist, angle) = cartesian_to_polar(c, c);
        assert_close(dist, 0.0);
        assert_close(angle, 0.0);
    }

    #[test]
    fn circle_membership_includes_boundary() {
        let c = Point::new(100.0, 100.0);
        assert!(point_in_circle(c, c, 50.0));
        assert!(point_in_circle(Point::new(120.0, 120.0), c, 50.0));
        assert!(point_in_circle(Point::new(150.0, 100.0), c, 50.0));
        assert!(!point_in_circle(Point::new(151.0, 100.0), c, 50.0));
        assert!(!point_in_circle(Point::new(200.0, 200.0), c, 50.0));
    }

    #[test]
    fn ring_membership_includes_both_boundaries() {
        let c = Point::new(100.0, 100.0);
        assert!(point_in_ring(Point::new(140.0, 100.0), c, 30.0, 50.0));
        assert!(point_in_ring(Point::new(130.0, 100.0), c, 30.0, 50.0));
        assert!(point_in_ring(Point::new(150.0, 100.0), c, 30.0, 50.0));
        assert!(!point_in_ring(c, c, 30.0, 50.0));
        assert!(!point_in_ring(Point::new(120.0, 100.0), c, 30.0, 50.0));
        assert!(!point_in_ring(Point::new(160.0, 100.0), c, 30.0, 50.0));
    }

    #[test]
    fn arc_membership() {
        let c = Point::new(100.0, 100.0);

        let p = polar_to_cartesian(c, 40.0, 90.0);
        assert!(point_in_arc(p, c, 30.0, 50.0, 45.0, 135.0));

        // right angle span, wrong direction
        let p = polar_to_cartesian(c, 40.0, 0.0);
        assert!(!point_in_arc(p, c, 30.0, 50.0, 45.0, 135.0));

        // right direction, inside the hole
        let p = polar_to_cartesian(c, 20.0, 90.0);
        assert!(!point_in_arc(p, c, 30.0, 50.0, 45.0, 135.0));
    }

    #[test]
    fn arc_membership_across_the_seam() {
        let c = Point::new(100.0, 100.0);

        let p = polar_to_cartesian(c, 40.0, 0.0);
        assert!(point_in_arc(p, c, 30.0, 50.0, 345.0, 15.0));

        let p = polar_to_cartesian(c, 40.0, 350.0);
        assert!(point_in_arc(p, c, 30.0, 50.0, 345.0, 15.0));

        let p = polar_to_cartesian(c, 40.0, 90.0);
        assert!(!point_in_arc(p, c, 30.0, 50.0, 345.0, 15.0));
    }

    #[test]
    fn arc_points_count_and_endpoints() {
        let c = Point::new(100.0, 100.0);
        let points = arc_points(c, 50.0, 0.0, 90.0, Some(4));
        assert_eq!(points.len(), 5);

        assert_close(points[0].x, 150.0);
        assert_close(points[0].y, 100.0);
        assert_close(points[4].x, 100.0);
        assert_close(points[4].y, 150.0);
    }

    #[test]
    fn arc_points_auto_segments() {
        let c = Point::new(100.0, 100.0);
        // 90° / 5° = 18 segments
        assert_eq!(arc_points(c, 50.0, 0.0, 90.0, None).len(), 19);
        // tiny arcs hit the floor of 8
        assert_eq!(arc_points(c, 50.0, 0.0, 10.0, None).len(), 9);
    }

    #[test]
    fn arc_points_sample_along_the_wrap() {
        let c = Point::default();
        let points = arc_points(c, 1.0, 350.0, 10.0, Some(2));
        // midpoint of the wrapping arc is at 0°, not at 180°
        assert_close(points[1].x, 1.0);
        assert_close(points[1].y, 0.0);
    }

    #[test]
    fn outline_runs_outer_forward_then_inner_backward() {
        let c = Point::new(100.0, 100.0);
        let points = sector_outline_points(c, 30.0, 50.0, 0.0, 90.0, Some(2));
        assert_eq!(points.len(), 6);

        assert_close(points[0].x, 150.0); // outer arc at 0°
        assert_close(points[2].y, 150.0); // outer arc at 90°
        assert_close(points[3].y, 130.0); // inner arc at 90°
        assert_close(points[5].x, 130.0); // inner arc back at 0°
    }
}
