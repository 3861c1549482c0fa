//! Laser-ready SVG export of a [`BoxLayout`].
//!
//! The document is sized in millimetres to the layout bounds so it cuts at
//! 1:1 scale. Every panel becomes one `<path>`; panels with holes get a
//! second `<path>` holding one closed rectangle per hole.

use std::path::Path;

use super::geometry::round3;
use super::types::{BoxLayout, BoxParameters, Hole, Point};
use crate::error::CamToolResult;

/// Cosmetic styling of the exported paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Stroke width in mm. 0.1mm is the usual hairline for laser cut lines.
    pub stroke_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { stroke_width: 0.1 }
    }
}

/// Export with the default hairline stroke.
pub fn export_svg(layout: &BoxLayout, params: &BoxParameters) -> String {
    export_svg_with(layout, params, &SvgOptions::default())
}

pub fn export_svg_with(layout: &BoxLayout, params: &BoxParameters, options: &SvgOptions) -> String {
    let width = round3(layout.bounds.width);
    let height = round3(layout.bounds.height);
    let style = format!(
        r##"fill="none" stroke="#000" stroke-width="{}""##,
        options.stroke_width
    );

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"\n");
    svg.push_str(&format!("  width=\"{width}mm\" height=\"{height}mm\"\n"));
    svg.push_str(&format!("  viewBox=\"0 0 {width} {height}\">\n"));
    svg.push_str(&format!(
        "<title>Box {}x{}x{}mm - T{}mm</title>\n",
        params.width, params.depth, params.height, params.thickness
    ));
    svg.push_str(&format!(
        "<!-- Generated by Fingerbox v{} -->\n",
        env!("CARGO_PKG_VERSION")
    ));
    svg.push_str(&format!(
        "<!-- Material: {}mm, Kerf: {}mm, Play: {}mm -->\n",
        params.thickness, params.kerf, params.finger_joint.play
    ));

    for panel in &layout.panels {
        svg.push_str(&format!(
            "  <path d=\"{}\" {} id=\"{}\" />\n",
            outline_path_data(&panel.outline),
            style,
            panel.id.as_str()
        ));
        if !panel.holes.is_empty() {
            svg.push_str(&format!(
                "  <path d=\"{}\" {} id=\"{}-holes\" />\n",
                holes_path_data(&panel.holes),
                style,
                panel.id.as_str()
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// `M x y L ... Z` for a closed outline.
pub fn outline_path_data(outline: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in outline.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd} {} {} ", p.x, p.y));
    }
    d.push('Z');
    d
}

/// One closed rectangle per hole, each as four segments and a close.
pub fn holes_path_data(holes: &[Hole]) -> String {
    holes
        .iter()
        .map(|h| {
            let x2 = round3(h.x + h.width);
            let y2 = round3(h.y + h.height);
            format!(
                "M {} {} L {} {} L {} {} L {} {} Z",
                h.x, h.y, x2, h.y, x2, y2, h.x, y2
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Suggested file name, e.g. `box-100x80x60.svg`.
pub fn export_filename(params: &BoxParameters) -> String {
    format!(
        "box-{}x{}x{}.svg",
        params.width, params.depth, params.height
    )
}

/// Export and write to `path`.
pub fn write_svg(
    path: &Path,
    layout: &BoxLayout,
    params: &BoxParameters,
    options: &SvgOptions,
) -> CamToolResult<()> {
    let svg = export_svg_with(layout, params, options);
    std::fs::write(path, svg)?;
    tracing::info!(path = %path.display(), panels = layout.panels.len(), "wrote SVG cut sheet");
    Ok(())
}
