/// Connect-screen layout: derives the diamond and its ornament ring from
/// the container size.
///
/// Pure geometry. The same `(width, height)` always produces the same
/// coordinate sets; degenerate sizes produce degenerate (but valid) paths.
use crate::core::config;
use crate::core::types::{ConnectGeometry, Polyline, Vec2};

pub struct ConnectLayout;

impl ConnectLayout {
    pub fn new() -> Self {
        Self
    }

    /// Computes the full scene geometry for one container size.
    ///
    /// The diamond's half-diagonal is a quarter of the container width;
    /// the border ring sits `LINE_SPACING` further out and the arrow ring
    /// `2 * LINE_SPACING`.
    pub fn compute(&self, width: f64, height: f64) -> ConnectGeometry {
        let center = Vec2::new(width / 2.0, height / 2.0);
        let box_square = width / 2.0;
        let box_half = box_square / 2.0;
        let ring_radius = box_half + config::LINE_SPACING;
        let arrow_radius = box_half + 2.0 * config::LINE_SPACING;

        ConnectGeometry {
            center,
            box_half,
            diamond: Self::diamond(center, box_half),
            border_segments: Self::edge_segments(center, ring_radius, config::CORNER_TOLERANCE),
            corner_triangles: Self::corner_triangles(center, ring_radius, config::TRIANGLE_SIZE),
            arrow_ticks: Self::arrow_ticks(
                center,
                arrow_radius,
                box_square / 2.0,
                config::CORNER_TOLERANCE * config::ARROW_LENGTH_FACTOR,
            ),
        }
    }

    // ===== Diamond =====

    /// The four corner points of a diamond of the given radius, in
    /// emission order: top, right, bottom, left.
    fn corners(center: Vec2, radius: f64) -> [Vec2; 4] {
        [
            Vec2::new(center.x, center.y - radius),
            Vec2::new(center.x + radius, center.y),
            Vec2::new(center.x, center.y + radius),
            Vec2::new(center.x - radius, center.y),
        ]
    }

    fn diamond(center: Vec2, half: f64) -> Polyline {
        Polyline::closed(Self::corners(center, half).to_vec())
    }

    // ===== Ornament ring =====

    /// Eight half-edge segments of a diamond at the given radius, two per
    /// corner. Each runs from the corner point, inset by `tolerance` along
    /// both axes toward the edge's far end, to the midpoint of that edge,
    /// so adjacent segments never touch at a corner. Corners are emitted
    /// top, right, bottom, left; per corner the clockwise edge comes first.
    fn edge_segments(center: Vec2, radius: f64, tolerance: f64) -> Vec<Polyline> {
        let corners = Self::corners(center, radius);
        let mut segments = Vec::with_capacity(8);
        for i in 0..4 {
            let corner = corners[i];
            let clockwise = corners[(i + 1) % 4];
            let counter = corners[(i + 3) % 4];
            for neighbor in [clockwise, counter] {
                let start = Self::inset_toward(corner, neighbor, tolerance);
                let end = (corner + neighbor) * 0.5;
                segments.push(Polyline::open(vec![start, end]));
            }
        }
        segments
    }

    /// One small triangle centered on each ring corner. Vertical corners
    /// point inward (apex toward the center), horizontal corners outward.
    fn corner_triangles(center: Vec2, radius: f64, size: f64) -> Vec<Polyline> {
        let half = size / 2.0;
        let [top, right, bottom, left] = Self::corners(center, radius);
        vec![
            // top: base above, apex below
            Polyline::closed(vec![
                Vec2::new(top.x - half, top.y - half),
                Vec2::new(top.x + half, top.y - half),
                Vec2::new(top.x, top.y + half),
            ]),
            // right: base toward center, apex out
            Polyline::closed(vec![
                Vec2::new(right.x - half, right.y - half),
                Vec2::new(right.x - half, right.y + half),
                Vec2::new(right.x + half, right.y),
            ]),
            // bottom: base below, apex above
            Polyline::closed(vec![
                Vec2::new(bottom.x - half, bottom.y + half),
                Vec2::new(bottom.x + half, bottom.y + half),
                Vec2::new(bottom.x, bottom.y - half),
            ]),
            // left: base toward center, apex out
            Polyline::closed(vec![
                Vec2::new(left.x + half, left.y - half),
                Vec2::new(left.x + half, left.y + half),
                Vec2::new(left.x - half, left.y),
            ]),
        ]
    }

    /// Chevron ornaments at the outermost radius: the half-edge segment
    /// pattern with a wide tolerance, plus a short tick from each
    /// segment's midpoint aimed at the container center. Emitted
    /// interleaved, segment then tick.
    fn arrow_ticks(center: Vec2, radius: f64, tolerance: f64, tick_length: f64) -> Vec<Polyline> {
        let segments = Self::edge_segments(center, radius, tolerance);
        let mut paths = Vec::with_capacity(segments.len() * 2);
        for segment in segments {
            let mid = (segment.points[0] + segment.points[1]) * 0.5;
            let dir = (center - mid).normalized();
            let tick = Polyline::open(vec![mid, mid + dir * tick_length]);
            paths.push(segment);
            paths.push(tick);
        }
        paths
    }

    /// Moves a corner point by `tolerance` along both axes toward the far
    /// end of its edge.
    fn inset_toward(corner: Vec2, toward: Vec2, tolerance: f64) -> Vec2 {
        let sx = if toward.x >= corner.x { 1.0 } else { -1.0 };
        let sy = if toward.y >= corner.y { 1.0 } else { -1.0 };
        Vec2::new(corner.x + sx * tolerance, corner.y + sy * tolerance)
    }
}

impl Default for ConnectLayout {
    fn default() -> Self {
        Self::new()
    }
}
