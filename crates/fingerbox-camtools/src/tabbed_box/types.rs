//! Type definitions for the finger-jointed box generator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::geometry::{round3, FingerSpacing};
use crate::error::{ParameterError, ParameterResult};

/// Joint selector for the top and bottom caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeStyle {
    /// Interlocking tabs and slots along the edge.
    #[serde(alias = "F")]
    Finger,
    /// Straight edge; the mating tabs go into holes cut in the panel face.
    #[serde(alias = "h")]
    Holes,
    /// Like `Holes`, but flush with the panel boundary so boxes can stack.
    #[serde(alias = "s")]
    FlushHoles,
    /// No joint and no cap panel.
    #[serde(alias = "e")]
    Open,
}

impl EdgeStyle {
    pub const ALL: [EdgeStyle; 4] = [
        EdgeStyle::Finger,
        EdgeStyle::Holes,
        EdgeStyle::FlushHoles,
        EdgeStyle::Open,
    ];

    /// Resolve to the joint a particular panel draws on this edge.
    ///
    /// Primary panels (front/back) take the tabs of a finger joint, secondary
    /// panels (left/right) take the slots.
    pub fn resolve(self, primary: bool) -> EdgeJoint {
        match self {
            EdgeStyle::Finger if primary => EdgeJoint::Tabs,
            EdgeStyle::Finger => EdgeJoint::Slots,
            EdgeStyle::Holes => EdgeJoint::Holes,
            EdgeStyle::FlushHoles => EdgeJoint::FlushHoles,
            EdgeStyle::Open => EdgeJoint::Open,
        }
    }

    /// Joint drawn on all four edges of the matching cap panel, or `None`
    /// when the cap is not emitted.
    pub fn cap_joint(self) -> Option<EdgeJoint> {
        match self {
            EdgeStyle::Finger => Some(EdgeJoint::Slots),
            EdgeStyle::Holes | EdgeStyle::FlushHoles => Some(EdgeJoint::Tabs),
            EdgeStyle::Open => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            EdgeStyle::Finger => 'F',
            EdgeStyle::Holes => 'h',
            EdgeStyle::FlushHoles => 's',
            EdgeStyle::Open => 'e',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EdgeStyle::Finger => "Tabs interlock at edges",
            EdgeStyle::Holes => "Slots cut into panel faces",
            EdgeStyle::FlushHoles => "Flush slots (stackable)",
            EdgeStyle::Open => "No joint (open)",
        }
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finger => write!(f, "finger"),
            Self::Holes => write!(f, "holes"),
            Self::FlushHoles => write!(f, "flush-holes"),
            Self::Open => write!(f, "open"),
        }
    }
}

impl FromStr for EdgeStyle {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => return Ok(Self::Finger),
            "h" => return Ok(Self::Holes),
            "s" => return Ok(Self::FlushHoles),
            "e" => return Ok(Self::Open),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "finger" | "tabs-and-slots" => Ok(Self::Finger),
            "holes" | "hole" => Ok(Self::Holes),
            "flush-holes" | "flush" | "stackable" => Ok(Self::FlushHoles),
            "open" | "none" => Ok(Self::Open),
            _ => Err(ParameterError::UnknownEdgeStyle(s.to_string())),
        }
    }
}

/// Joint kind of one edge of one panel, after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeJoint {
    Tabs,
    Slots,
    Holes,
    FlushHoles,
    Open,
}

impl EdgeJoint {
    /// Tabs or slots drawn into the outline itself.
    pub fn is_finger(self) -> bool {
        matches!(self, EdgeJoint::Tabs | EdgeJoint::Slots)
    }

    /// Straight outline with rectangular holes in the panel face.
    pub fn has_holes(self) -> bool {
        matches!(self, EdgeJoint::Holes | EdgeJoint::FlushHoles)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerJointSettings {
    /// Desired finger width in mm
    pub finger_width: f64,
    /// Flat margin at each end of a jointed edge, in multiples of the base finger pitch
    pub surrounding_spaces: f64,
    /// Distance from the panel edge to a row of holes, in multiples of thickness
    pub edge_width: f64,
    /// Per-side joint clearance in mm. Informational, not applied to geometry.
    pub play: f64,
}

impl Default for FingerJointSettings {
    fn default() -> Self {
        Self {
            finger_width: 10.0,
            surrounding_spaces: 1.0,
            edge_width: 1.5,
            play: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    /// Outer width (mm)
    pub width: f64,
    /// Outer depth (mm)
    pub depth: f64,
    /// Outer height (mm)
    pub height: f64,
    /// Material thickness (mm)
    pub thickness: f64,
    /// Beam width (mm). Informational, not applied to geometry.
    pub kerf: f64,
    pub finger_joint: FingerJointSettings,
    pub top_edge: EdgeStyle,
    pub bottom_edge: EdgeStyle,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            width: 100.0,
            depth: 80.0,
            height: 60.0,
            thickness: 3.0,
            kerf: 0.15,
            finger_joint: FingerJointSettings::default(),
            top_edge: EdgeStyle::Open,
            bottom_edge: EdgeStyle::Holes,
        }
    }
}

/// Accepted range for one numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterLimit {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParameterLimit {
    const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    pub fn check(&self, value: f64) -> ParameterResult<()> {
        if !value.is_finite() {
            return Err(ParameterError::InvalidValue {
                name: self.name.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
        if value < self.min || value > self.max {
            return Err(ParameterError::OutOfRange {
                name: self.name.to_string(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

pub const WIDTH_LIMIT: ParameterLimit = ParameterLimit::new("width", 30.0, 500.0);
pub const DEPTH_LIMIT: ParameterLimit = ParameterLimit::new("depth", 30.0, 500.0);
pub const HEIGHT_LIMIT: ParameterLimit = ParameterLimit::new("height", 20.0, 300.0);
pub const THICKNESS_LIMIT: ParameterLimit = ParameterLimit::new("thickness", 1.0, 12.0);
pub const KERF_LIMIT: ParameterLimit = ParameterLimit::new("kerf", 0.0, 0.5);
pub const FINGER_WIDTH_LIMIT: ParameterLimit = ParameterLimit::new("finger_width", 3.0, 30.0);
pub const SURROUNDING_SPACES_LIMIT: ParameterLimit =
    ParameterLimit::new("surrounding_spaces", 0.0, 4.0);
pub const PLAY_LIMIT: ParameterLimit = ParameterLimit::new("play", 0.0, 0.5);
pub const EDGE_WIDTH_LIMIT: ParameterLimit = ParameterLimit::new("edge_width", 0.5, 5.0);

impl BoxParameters {
    /// Inner span of the side and cap panels: the outer depth less the
    /// front and back material.
    pub fn side_width(&self) -> f64 {
        self.depth - 2.0 * self.thickness
    }

    fn limited_fields(&self) -> [(ParameterLimit, f64); 9] {
        let fj = &self.finger_joint;
        [
            (WIDTH_LIMIT, self.width),
            (DEPTH_LIMIT, self.depth),
            (HEIGHT_LIMIT, self.height),
            (THICKNESS_LIMIT, self.thickness),
            (KERF_LIMIT, self.kerf),
            (FINGER_WIDTH_LIMIT, fj.finger_width),
            (SURROUNDING_SPACES_LIMIT, fj.surrounding_spaces),
            (PLAY_LIMIT, fj.play),
            (EDGE_WIDTH_LIMIT, fj.edge_width),
        ]
    }

    /// Check every field against its input range.
    ///
    /// [`generate_box`](super::generate_box) does not call this; it accepts
    /// any input and degrades to minimum finger counts instead.
    pub fn validate(&self) -> ParameterResult<()> {
        for (limit, value) in self.limited_fields() {
            limit.check(value)?;
        }
        Ok(())
    }

    /// Copy with every numeric field clamped into its input range.
    pub fn clamped(&self) -> Self {
        let fj = &self.finger_joint;
        Self {
            width: WIDTH_LIMIT.clamp(self.width),
            depth: DEPTH_LIMIT.clamp(self.depth),
            height: HEIGHT_LIMIT.clamp(self.height),
            thickness: THICKNESS_LIMIT.clamp(self.thickness),
            kerf: KERF_LIMIT.clamp(self.kerf),
            finger_joint: FingerJointSettings {
                finger_width: FINGER_WIDTH_LIMIT.clamp(fj.finger_width),
                surrounding_spaces: SURROUNDING_SPACES_LIMIT.clamp(fj.surrounding_spaces),
                edge_width: EDGE_WIDTH_LIMIT.clamp(fj.edge_width),
                play: PLAY_LIMIT.clamp(fj.play),
            },
            top_edge: self.top_edge,
            bottom_edge: self.bottom_edge,
        }
    }

    /// Derived values worth showing next to the inputs.
    pub fn summary(&self) -> BoxSummary {
        let fj = &self.finger_joint;
        let spacing = FingerSpacing::new(self.height, fj.finger_width, fj.surrounding_spaces);
        BoxSummary {
            height_fingers: spacing.base_count,
            height_finger_pitch: round3(spacing.base_pitch),
            margin: round3(spacing.margin),
            hole_inset: round3(fj.edge_width * self.thickness),
            side_width: round3(self.side_width()),
        }
    }
}

/// Informational figures derived from a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    /// Base finger count on a height edge
    pub height_fingers: usize,
    /// Base finger pitch on a height edge (mm)
    pub height_finger_pitch: f64,
    /// Flat margin at each end of a height edge (mm)
    pub margin: f64,
    /// Distance from the panel edge to the holes (mm)
    pub hole_inset: f64,
    /// Width of the left/right panels (mm)
    pub side_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Copy snapped to the 0.001mm output grid.
    pub fn rounded(self) -> Self {
        Self::new(round3(self.x), round3(self.y))
    }
}

/// Axis-aligned rectangular cutout in a panel face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl PanelId {
    pub const ALL: [PanelId; 6] = [
        PanelId::Front,
        PanelId::Back,
        PanelId::Left,
        PanelId::Right,
        PanelId::Top,
        PanelId::Bottom,
    ];

    /// Stable identifier used in exported files.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Front => "front",
            PanelId::Back => "back",
            PanelId::Left => "left",
            PanelId::Right => "right",
            PanelId::Top => "top",
            PanelId::Bottom => "bottom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelId::Front => "Front",
            PanelId::Back => "Back",
            PanelId::Left => "Left",
            PanelId::Right => "Right",
            PanelId::Top => "Top",
            PanelId::Bottom => "Bottom",
        }
    }

    /// Display colour for renderers. Not used by the geometry.
    pub fn color(self) -> &'static str {
        match self {
            PanelId::Front => "#e74c3c",
            PanelId::Back => "#3498db",
            PanelId::Left => "#2ecc71",
            PanelId::Right => "#f39c12",
            PanelId::Top => "#9b59b6",
            PanelId::Bottom => "#1abc9c",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cut panel, placed in the flattened layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub id: PanelId,
    pub label: &'static str,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Closed outline; the first point is the start, the close back to it is implicit.
    pub outline: Vec<Point>,
    pub holes: Vec<Hole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// All panels for one parameter set plus the sheet size that encloses them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxLayout {
    pub panels: Vec<Panel>,
    pub bounds: Bounds,
}

impl BoxLayout {
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn hole_count(&self) -> usize {
        self.panels.iter().map(|p| p.holes.len()).sum()
    }

    /// Layout as JSON, for renderers living outside the process.
    pub fn to_json(&self) -> crate::error::CamToolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
