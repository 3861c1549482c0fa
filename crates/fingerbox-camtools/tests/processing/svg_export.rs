//! SVG cut sheet export

use fingerbox_camtools::tabbed_box::{
    export_filename, export_svg, export_svg_with, generate_box, write_svg, BoxParameters,
    EdgeStyle, SvgOptions,
};

#[test]
fn test_svg_header_matches_bounds() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let svg = export_svg(&layout, &params);

    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(svg.contains("width=\"392mm\" height=\"154mm\""));
    assert!(svg.contains("viewBox=\"0 0 392 154\""));
    assert!(svg.contains("<title>Box 100x80x60mm - T3mm</title>"));
    assert!(svg.contains("<!-- Material: 3mm, Kerf: 0.15mm, Play: 0mm -->"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_one_path_per_panel_plus_holes() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let svg = export_svg(&layout, &params);

    for id in ["front", "back", "left", "right", "bottom"] {
        assert!(svg.contains(&format!("id=\"{}\"", id)), "missing {}", id);
    }
    assert!(!svg.contains("id=\"top\""));
    for id in ["front", "back", "left", "right"] {
        assert!(svg.contains(&format!("id=\"{}-holes\"", id)));
    }
    assert!(!svg.contains("id=\"bottom-holes\""));

    assert_eq!(svg.matches("<path ").count(), 9);
    assert!(svg.lines().filter(|l| l.contains("<path ")).all(|l| {
        l.contains("fill=\"none\" stroke=\"#000\" stroke-width=\"0.1\"")
    }));
}

#[test]
fn test_hole_rectangles_are_closed() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let svg = export_svg(&layout, &params);

    let front_holes = svg
        .lines()
        .find(|l| l.contains("id=\"front-holes\""))
        .unwrap();
    assert_eq!(front_holes.matches('M').count(), 5);
    assert_eq!(front_holes.matches('Z').count(), 5);
    assert_eq!(front_holes.matches('L').count(), 15);
}

#[test]
fn test_outline_paths_start_and_close() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let svg = export_svg(&layout, &params);
    let front = svg.lines().find(|l| l.contains("id=\"front\"")).unwrap();
    assert!(front.contains("d=\"M 86 0 L "));
    assert!(front.contains(" Z\""));
}

#[test]
fn test_export_is_byte_identical_across_calls() {
    let params = BoxParameters {
        top_edge: EdgeStyle::Finger,
        ..BoxParameters::default()
    };
    let a = export_svg(&generate_box(&params), &params);
    let b = export_svg(&generate_box(&params), &params);
    assert_eq!(a, b);
}

#[test]
fn test_custom_stroke_width() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let svg = export_svg_with(&layout, &params, &SvgOptions { stroke_width: 0.25 });
    assert!(svg.contains("stroke-width=\"0.25\""));
    assert!(!svg.contains("stroke-width=\"0.1\""));
}

#[test]
fn test_write_svg_to_disk() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export_filename(&params));

    write_svg(&path, &layout, &params, &SvgOptions::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, export_svg(&layout, &params));
    assert!(path.ends_with("box-100x80x60.svg"));
}

#[test]
fn test_write_svg_reports_io_errors() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("box.svg");

    let err = write_svg(&path, &layout, &params, &SvgOptions::default()).unwrap_err();
    assert!(matches!(err, fingerbox_camtools::CamToolError::IoError(_)));
}

#[test]
fn test_layout_json() {
    let params = BoxParameters::default();
    let layout = generate_box(&params);
    let json = layout.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["panels"].as_array().unwrap().len(), 5);
    assert_eq!(value["panels"][0]["id"], "front");
    assert_eq!(value["panels"][0]["label"], "Front");
    assert_eq!(value["panels"][0]["color"], "#e74c3c");
    assert_eq!(value["bounds"]["width"], 392.0);
}
