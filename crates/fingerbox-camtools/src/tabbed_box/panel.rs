//! Panel composition: four edges walked clockwise into one closed outline.

use serde::{Deserialize, Serialize};

use super::edges::{straight_edge, EdgePath, FingerEdge};
use super::geometry::Direction;
use super::holes::{edge_holes, HoleSettings};
use super::types::{EdgeJoint, FingerJointSettings, Hole, Point};

/// One side of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeSide {
    /// Traversal order, clockwise from the top-left corner.
    pub const CLOCKWISE: [EdgeSide; 4] = [
        EdgeSide::Top,
        EdgeSide::Right,
        EdgeSide::Bottom,
        EdgeSide::Left,
    ];

    pub fn direction(self) -> Direction {
        match self {
            EdgeSide::Top => Direction::Right,
            EdgeSide::Right => Direction::Down,
            EdgeSide::Bottom => Direction::Left,
            EdgeSide::Left => Direction::Up,
        }
    }
}

/// Resolved joints of a panel's four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEdges {
    pub top: EdgeJoint,
    pub right: EdgeJoint,
    pub bottom: EdgeJoint,
    pub left: EdgeJoint,
}

impl PanelEdges {
    pub fn uniform(joint: EdgeJoint) -> Self {
        Self {
            top: joint,
            right: joint,
            bottom: joint,
            left: joint,
        }
    }

    pub fn get(&self, side: EdgeSide) -> EdgeJoint {
        match side {
            EdgeSide::Top => self.top,
            EdgeSide::Right => self.right,
            EdgeSide::Bottom => self.bottom,
            EdgeSide::Left => self.left,
        }
    }
}

/// Placement and nominal size of a panel, before joints are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width for the horizontal edges, height for the vertical ones.
    pub fn edge_length(&self, side: EdgeSide) -> f64 {
        match side {
            EdgeSide::Top | EdgeSide::Bottom => self.width,
            EdgeSide::Right | EdgeSide::Left => self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    /// Closed outline starting at the panel origin.
    pub outline: Vec<Point>,
    pub holes: Vec<Hole>,
    /// Where the traversal ended; equals the origin for a well-formed panel.
    pub end: Point,
}

/// Build the outline and holes of one panel.
pub fn compose_panel(
    rect: &PanelRect,
    edges: &PanelEdges,
    joint: &FingerJointSettings,
    thickness: f64,
) -> PanelGeometry {
    let mut cursor = Point::new(rect.x, rect.y);
    let mut outline = vec![cursor.rounded()];
    let mut holes = Vec::new();

    for side in EdgeSide::CLOCKWISE {
        let length = rect.edge_length(side);
        let direction = side.direction();
        let kind = edges.get(side);

        let EdgePath { points, end } = if kind.is_finger() {
            FingerEdge {
                length,
                direction,
                finger_width: joint.finger_width,
                thickness,
                tabs: kind == EdgeJoint::Tabs,
                surrounding_spaces: joint.surrounding_spaces,
            }
            .path(cursor)
        } else {
            straight_edge(cursor, length, direction)
        };
        outline.extend(points);
        cursor = end;

        if kind.has_holes() {
            let settings = HoleSettings {
                finger_width: joint.finger_width,
                thickness,
                surrounding_spaces: joint.surrounding_spaces,
                edge_width: joint.edge_width,
                flush: kind == EdgeJoint::FlushHoles,
            };
            holes.extend(edge_holes(rect, side, &settings));
        }
    }

    PanelGeometry {
        outline,
        holes,
        end: cursor,
    }
}
