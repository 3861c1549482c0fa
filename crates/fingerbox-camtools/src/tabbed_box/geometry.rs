//! Geometry primitives shared by the edge, hole and panel generators.
//!
//! All emitted coordinates pass through [`round3`], and every jointed edge
//! derives its finger layout from [`FingerSpacing`] so that mating panels
//! agree on tab and hole positions.

use serde::{Deserialize, Serialize};

/// Margins shorter than this are not emitted as separate path segments.
pub const MARGIN_TOLERANCE: f64 = 0.01;

/// Minimum number of fingers on any jointed edge.
pub const MIN_FINGERS: usize = 3;

/// Upper bound on the fingers of one edge. Odd, so the cap keeps the
/// odd-count rule without adjustment.
pub const MAX_FINGERS: usize = 9_999;

/// Round to 3 decimal places (0.001mm precision).
///
/// Halves round towards positive infinity and negative zero is normalised,
/// so `-0.0005` and `0.0` both print as `0`.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0 + 0.5).floor() / 1000.0 + 0.0
}

/// Travel direction of a clockwise panel traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Unit vector along the direction of travel.
    pub fn axis(self) -> (f64, f64) {
        match self {
            Direction::Right => (1.0, 0.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Up => (0.0, -1.0),
        }
    }

    /// Unit vector in which tabs protrude.
    ///
    /// For a clockwise traversal in screen coordinates (y down) this always
    /// points away from the panel interior.
    pub fn perpendicular(self) -> (f64, f64) {
        match self {
            Direction::Right => (0.0, -1.0),
            Direction::Down => (1.0, 0.0),
            Direction::Left => (0.0, 1.0),
            Direction::Up => (-1.0, 0.0),
        }
    }
}

/// Number of fingers for an edge: the nearest whole count of
/// `desired_width`-sized fingers, between 3 and [`MAX_FINGERS`] and always odd.
///
/// Non-finite or negative ratios (zero-width fingers, margins that swallow
/// the whole edge) fall back to the minimum.
pub fn finger_count(length: f64, desired_width: f64) -> usize {
    let ratio = (length / desired_width).round();
    let mut n = if !ratio.is_finite() || ratio <= MIN_FINGERS as f64 {
        MIN_FINGERS
    } else if ratio >= MAX_FINGERS as f64 {
        MAX_FINGERS
    } else {
        ratio as usize
    };
    if n % 2 == 0 {
        n += 1;
    }
    n
}

/// Finger layout of one jointed edge.
///
/// The base count is computed over the full edge and only fixes the size of
/// the flat margins; the inner count and pitch are recomputed over the
/// remaining usable length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FingerSpacing {
    pub length: f64,
    pub base_count: usize,
    pub base_pitch: f64,
    pub margin: f64,
    pub usable: f64,
    pub inner_count: usize,
    pub inner_pitch: f64,
}

impl FingerSpacing {
    pub fn new(length: f64, finger_width: f64, surrounding_spaces: f64) -> Self {
        let base_count = finger_count(length, finger_width);
        let base_pitch = length / base_count as f64;
        let margin = surrounding_spaces * base_pitch;

        let usable = length - 2.0 * margin;
        let inner_count = finger_count(usable, finger_width).max(1);
        let inner_pitch = usable / inner_count as f64;

        if usable <= 0.0 {
            tracing::warn!(
                length,
                margin,
                "surrounding space consumes the whole edge, falling back to {} fingers",
                inner_count
            );
        }

        Self {
            length,
            base_count,
            base_pitch,
            margin,
            usable,
            inner_count,
            inner_pitch,
        }
    }

    /// Whether the margins are long enough to be drawn as their own segments.
    pub fn has_margin(&self) -> bool {
        self.margin > MARGIN_TOLERANCE
    }

    /// Distance from the edge start to the beginning of finger `index`.
    pub fn offset(&self, index: usize) -> f64 {
        self.margin + index as f64 * self.inner_pitch
    }

    /// Whether finger `index` protrudes. The tabs side starts on a tab, the
    /// slots side starts on a gap, so the two are exact complements.
    pub fn is_tab(&self, index: usize, tabs: bool) -> bool {
        (index % 2 == 0) == tabs
    }

    /// Protrusion pattern over all inner fingers.
    pub fn pattern(&self, tabs: bool) -> impl Iterator<Item = bool> + '_ {
        (0..self.inner_count).map(move |i| self.is_tab(i, tabs))
    }

    /// Offsets of the protruding fingers on the tabs side.
    pub fn tab_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.inner_count)
            .filter(move |&i| self.is_tab(i, true))
            .map(move |i| self.offset(i))
    }
}
