//! Face cutouts for hole-based edge joints.
//!
//! The perimeter of a hole-jointed edge stays straight. The mating panel's
//! tabs go through rectangular holes instead, laid out with the same
//! [`FingerSpacing`] a tabs-side finger edge of the same length would use.

use super::geometry::{round3, FingerSpacing};
use super::panel::{EdgeSide, PanelRect};
use super::types::Hole;

/// Placement options shared by every hole on one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleSettings {
    pub finger_width: f64,
    pub thickness: f64,
    pub surrounding_spaces: f64,
    /// Inset from the panel boundary, in multiples of thickness.
    pub edge_width: f64,
    /// Holes touch the panel boundary instead of being inset.
    pub flush: bool,
}

impl HoleSettings {
    /// Distance between the panel boundary and the near side of each hole.
    pub fn inset(&self) -> f64 {
        if self.flush {
            0.0
        } else {
            self.edge_width * self.thickness
        }
    }
}

/// Holes for the given edge of a panel, one per tab of the mating edge.
///
/// Each hole is one inner pitch long along the edge and one thickness deep.
pub fn edge_holes(panel: &PanelRect, side: EdgeSide, settings: &HoleSettings) -> Vec<Hole> {
    let length = panel.edge_length(side);
    let spacing = FingerSpacing::new(length, settings.finger_width, settings.surrounding_spaces);
    let depth = settings.thickness;
    let inset = settings.inset();
    let pitch = spacing.inner_pitch;

    spacing
        .tab_offsets()
        .map(|pos| {
            let (x, y, width, height) = match side {
                EdgeSide::Top => (panel.x + pos, panel.y + inset, pitch, depth),
                EdgeSide::Bottom => (
                    panel.x + pos,
                    panel.y + panel.height - inset - depth,
                    pitch,
                    depth,
                ),
                EdgeSide::Left => (panel.x + inset, panel.y + pos, depth, pitch),
                EdgeSide::Right => (
                    panel.x + panel.width - inset - depth,
                    panel.y + pos,
                    depth,
                    pitch,
                ),
            };
            Hole {
                x: round3(x),
                y: round3(y),
                width: round3(width),
                height: round3(height),
            }
        })
        .collect()
}
