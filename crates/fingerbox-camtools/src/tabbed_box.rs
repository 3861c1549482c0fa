//! Finger-Jointed Box Maker
//!
//! Computes the six panels of a finger-jointed box from its outer
//! dimensions and lays them out flat for a laser cutter:
//!
//! ```text
//!              [Top]
//!   [Left] [Front] [Right] [Back]
//!             [Bottom]
//! ```
//!
//! Front and back are `width × height` and carry the tabs on their vertical
//! edges. Left and right are `(depth - 2T) × height` and carry the slots.
//! The top and bottom caps are `width × (depth - 2T)` and only exist when
//! their edge style is not [`EdgeStyle::Open`].
//!
//! [`generate_box`] is a pure function: the same parameters always give the
//! same layout, and nothing is cached between calls.

pub mod edges;
pub mod geometry;
pub mod holes;
pub mod panel;
pub mod svg;
pub mod types;

pub use edges::{straight_edge, EdgePath, FingerEdge};
pub use geometry::{finger_count, round3, Direction, FingerSpacing};
pub use holes::{edge_holes, HoleSettings};
pub use panel::{compose_panel, EdgeSide, PanelEdges, PanelGeometry, PanelRect};
pub use svg::{export_filename, export_svg, export_svg_with, write_svg, SvgOptions};
pub use types::{
    BoxLayout, BoxParameters, BoxSummary, Bounds, EdgeJoint, EdgeStyle, FingerJointSettings, Hole,
    Panel, PanelId, ParameterLimit, Point,
};

/// Gap between neighbouring panels on the cut sheet (mm).
pub const PANEL_PADDING: f64 = 12.0;

/// Extra room added past the furthest panel, on top of one thickness (mm).
pub const BOUNDS_SLACK: f64 = 5.0;

/// Compute every panel of the box and the sheet bounds that enclose them.
pub fn generate_box(params: &BoxParameters) -> BoxLayout {
    let w = params.width;
    let h = params.height;
    let t = params.thickness;
    let side_w = params.side_width();
    let cap_d = side_w;

    let top_joint = params.top_edge.cap_joint();
    let bottom_joint = params.bottom_edge.cap_joint();

    let front_x = side_w + PANEL_PADDING;
    let front_y = if top_joint.is_some() {
        cap_d + PANEL_PADDING
    } else {
        0.0
    };
    let right_x = front_x + w + PANEL_PADDING;
    let back_x = right_x + side_w + PANEL_PADDING;

    let primary = PanelEdges {
        top: params.top_edge.resolve(true),
        right: EdgeJoint::Tabs,
        bottom: params.bottom_edge.resolve(true),
        left: EdgeJoint::Tabs,
    };
    let secondary = PanelEdges {
        top: params.top_edge.resolve(false),
        right: EdgeJoint::Slots,
        bottom: params.bottom_edge.resolve(false),
        left: EdgeJoint::Slots,
    };

    let mut plan = vec![
        (PanelId::Front, PanelRect::new(front_x, front_y, w, h), primary),
        (PanelId::Back, PanelRect::new(back_x, front_y, w, h), primary),
        (PanelId::Left, PanelRect::new(0.0, front_y, side_w, h), secondary),
        (PanelId::Right, PanelRect::new(right_x, front_y, side_w, h), secondary),
    ];
    if let Some(joint) = top_joint {
        plan.push((
            PanelId::Top,
            PanelRect::new(front_x, 0.0, w, cap_d),
            PanelEdges::uniform(joint),
        ));
    }
    if let Some(joint) = bottom_joint {
        plan.push((
            PanelId::Bottom,
            PanelRect::new(front_x, front_y + h + PANEL_PADDING, w, cap_d),
            PanelEdges::uniform(joint),
        ));
    }

    let panels: Vec<Panel> = plan
        .into_iter()
        .map(|(id, rect, edges)| build_panel(id, rect, &edges, params))
        .collect();

    let bounds = panels.iter().fold(
        Bounds {
            width: 0.0,
            height: 0.0,
        },
        |acc, p| Bounds {
            width: acc.width.max(p.x + p.width + t + BOUNDS_SLACK),
            height: acc.height.max(p.y + p.height + t + BOUNDS_SLACK),
        },
    );

    tracing::debug!(
        panels = panels.len(),
        holes = panels.iter().map(|p| p.holes.len()).sum::<usize>(),
        bounds_width = bounds.width,
        bounds_height = bounds.height,
        "generated box layout"
    );

    BoxLayout { panels, bounds }
}

fn build_panel(id: PanelId, rect: PanelRect, edges: &PanelEdges, params: &BoxParameters) -> Panel {
    let geometry = compose_panel(&rect, edges, &params.finger_joint, params.thickness);
    Panel {
        id,
        label: id.label(),
        color: id.color(),
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        outline: geometry.outline,
        holes: geometry.holes,
    }
}
