//! Path generators for a single panel edge.

use super::geometry::{Direction, FingerSpacing};
use super::types::Point;

/// Points drawn for one edge, excluding the start point, plus the exact
/// (unrounded) position the next edge continues from.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub points: Vec<Point>,
    pub end: Point,
}

/// Interlocking finger edge: alternating tabs and gaps between two flat margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerEdge {
    pub length: f64,
    pub direction: Direction,
    pub finger_width: f64,
    pub thickness: f64,
    /// `true` starts on a tab (primary side), `false` starts on a gap.
    pub tabs: bool,
    pub surrounding_spaces: f64,
}

impl FingerEdge {
    pub fn spacing(&self) -> FingerSpacing {
        FingerSpacing::new(self.length, self.finger_width, self.surrounding_spaces)
    }

    /// Draw the edge from `start`.
    ///
    /// Positions along the edge are computed from the finger index rather than
    /// accumulated, so they match [`edge_holes`](super::holes::edge_holes)
    /// exactly after rounding.
    pub fn path(&self, start: Point) -> EdgePath {
        let spacing = self.spacing();
        let (ax, ay) = self.direction.axis();
        let (px, py) = self.direction.perpendicular();
        let out_x = px * self.thickness;
        let out_y = py * self.thickness;

        let along = |d: f64| Point::new(start.x + ax * d, start.y + ay * d);

        tracing::trace!(
            length = self.length,
            direction = ?self.direction,
            tabs = self.tabs,
            fingers = spacing.inner_count,
            pitch = spacing.inner_pitch,
            "finger edge"
        );

        let capacity = spacing.inner_count.saturating_mul(3).saturating_add(2);
        let mut points = Vec::with_capacity(capacity);

        if spacing.has_margin() {
            points.push(along(spacing.margin).rounded());
        }

        for i in 0..spacing.inner_count {
            let from = along(spacing.offset(i));
            let to = along(spacing.offset(i + 1));
            if spacing.is_tab(i, self.tabs) {
                points.push(Point::new(from.x + out_x, from.y + out_y).rounded());
                points.push(Point::new(to.x + out_x, to.y + out_y).rounded());
            }
            points.push(to.rounded());
        }

        let end = along(self.length);
        if spacing.has_margin() {
            points.push(end.rounded());
        }

        EdgePath { points, end }
    }
}

/// Plain run of the full edge length. Used for open edges and for the
/// perimeter of hole-jointed edges.
pub fn straight_edge(start: Point, length: f64, direction: Direction) -> EdgePath {
    let (ax, ay) = direction.axis();
    let end = Point::new(start.x + ax * length, start.y + ay * length);
    EdgePath {
        points: vec![end.rounded()],
        end,
    }
}
