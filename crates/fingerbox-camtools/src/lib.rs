//! # Fingerbox CAM Tools
//!
//! Geometry engine for finger-jointed boxes cut from sheet material.
//!
//! ## Pipeline
//!
//! - **Geometry primitives**: rounding, travel directions, odd finger counts
//! - **Edge generators**: interlocking finger edges and straight edges
//! - **Hole generator**: face cutouts for hole-based and flush joints
//! - **Panel composer**: four edges walked clockwise into a closed outline
//! - **Box layout**: six panels in a cross layout with sheet bounds
//! - **SVG export**: 1:1 scale cut sheet for laser software
//!
//! ```no_run
//! use fingerbox_camtools::{export_svg, generate_box, BoxParameters};
//!
//! let params = BoxParameters::default();
//! let layout = generate_box(&params);
//! let svg = export_svg(&layout, &params);
//! ```

pub mod error;
pub mod tabbed_box;

// Re-export commonly used items
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use tabbed_box::{
    export_filename, export_svg, export_svg_with, generate_box, write_svg, BoxLayout,
    BoxParameters, BoxSummary, Bounds, EdgeJoint, EdgeStyle, FingerJointSettings, Hole, Panel,
    PanelId, Point, SvgOptions,
};
