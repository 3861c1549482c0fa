//! Six-panel layout, sizing and bounds

use fingerbox_camtools::tabbed_box::{
    generate_box, round3, BoxLayout, BoxParameters, EdgeStyle, FingerJointSettings, PanelId,
    BOUNDS_SLACK, PANEL_PADDING,
};
use fingerbox_camtools::tabbed_box::geometry::MAX_FINGERS;

fn example_params() -> BoxParameters {
    BoxParameters {
        width: 100.0,
        depth: 80.0,
        height: 60.0,
        thickness: 3.0,
        kerf: 0.15,
        finger_joint: FingerJointSettings {
            finger_width: 10.0,
            surrounding_spaces: 1.0,
            edge_width: 1.5,
            play: 0.0,
        },
        top_edge: EdgeStyle::Open,
        bottom_edge: EdgeStyle::Holes,
    }
}

fn assert_closed(layout: &BoxLayout) {
    for panel in &layout.panels {
        let first = panel.outline.first().copied();
        let last = panel.outline.last().copied();
        assert_eq!(first, last, "{} outline is not closed", panel.id);
        assert_eq!(
            first.map(|p| (p.x, p.y)),
            Some((round3(panel.x), round3(panel.y))),
            "{} outline does not start at its origin",
            panel.id
        );
    }
}

#[test]
fn test_example_box_without_top() {
    let layout = generate_box(&example_params());

    let ids: Vec<PanelId> = layout.panels.iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec![
            PanelId::Front,
            PanelId::Back,
            PanelId::Left,
            PanelId::Right,
            PanelId::Bottom
        ]
    );
    assert!(layout.panel(PanelId::Top).is_none());

    for id in [PanelId::Front, PanelId::Back] {
        let p = layout.panel(id).unwrap();
        assert_eq!((p.width, p.height), (100.0, 60.0));
    }
    for id in [PanelId::Left, PanelId::Right] {
        let p = layout.panel(id).unwrap();
        assert_eq!((p.width, p.height), (74.0, 60.0));
    }
    let bottom = layout.panel(PanelId::Bottom).unwrap();
    assert_eq!((bottom.width, bottom.height), (100.0, 74.0));

    // The side walls hold the holes; the bottom panel holds the tabs.
    for id in [PanelId::Front, PanelId::Back, PanelId::Left, PanelId::Right] {
        let p = layout.panel(id).unwrap();
        assert!(!p.holes.is_empty(), "{} should have holes", id);
        for hole in &p.holes {
            assert!(hole.y > p.y + p.height / 2.0, "{} hole not on bottom edge", id);
        }
    }
    assert!(bottom.holes.is_empty());
    assert_eq!(layout.panel(PanelId::Front).unwrap().holes.len(), 5);
    assert_eq!(layout.panel(PanelId::Left).unwrap().holes.len(), 3);
    assert_eq!(layout.hole_count(), 16);

    assert_closed(&layout);
}

#[test]
fn test_cross_layout_positions() {
    let layout = generate_box(&example_params());
    let pos = |id| {
        let p = layout.panel(id).unwrap();
        (p.x, p.y)
    };

    assert_eq!(pos(PanelId::Left), (0.0, 0.0));
    assert_eq!(pos(PanelId::Front), (74.0 + PANEL_PADDING, 0.0));
    assert_eq!(pos(PanelId::Right), (198.0, 0.0));
    assert_eq!(pos(PanelId::Back), (284.0, 0.0));
    assert_eq!(pos(PanelId::Bottom), (86.0, 72.0));

    assert_eq!(layout.bounds.width, 284.0 + 100.0 + 3.0 + BOUNDS_SLACK);
    assert_eq!(layout.bounds.height, 72.0 + 74.0 + 3.0 + BOUNDS_SLACK);
}

#[test]
fn test_top_panel_shifts_walls_down() {
    let params = BoxParameters {
        top_edge: EdgeStyle::Finger,
        ..example_params()
    };
    let layout = generate_box(&params);
    let ids: Vec<PanelId> = layout.panels.iter().map(|p| p.id).collect();
    assert_eq!(ids, PanelId::ALL);

    let top = layout.panel(PanelId::Top).unwrap();
    assert_eq!((top.x, top.y, top.width, top.height), (86.0, 0.0, 100.0, 74.0));
    let front = layout.panel(PanelId::Front).unwrap();
    assert_eq!(front.y, 74.0 + PANEL_PADDING);

    // Finger-jointed top: the cap is all slots, the walls carry tabs that
    // rise one thickness above their top edge.
    assert!(top.holes.is_empty());
    assert!(front.outline.iter().any(|p| p.y == front.y - 3.0));
    assert_closed(&layout);
}

#[test]
fn test_flush_holes_on_top_edge() {
    let params = BoxParameters {
        top_edge: EdgeStyle::FlushHoles,
        bottom_edge: EdgeStyle::Open,
        ..example_params()
    };
    let layout = generate_box(&params);
    assert!(layout.panel(PanelId::Bottom).is_none());

    let front = layout.panel(PanelId::Front).unwrap();
    assert!(!front.holes.is_empty());
    assert!(front.holes.iter().all(|h| h.y == front.y));

    let top = layout.panel(PanelId::Top).unwrap();
    assert!(top.holes.is_empty());
    // Hole-jointed caps carry tabs on every edge.
    assert!(top.outline.iter().any(|p| p.y == top.y - 3.0));
    assert!(top.outline.iter().any(|p| p.x == top.x - 3.0));
}

#[test]
fn test_open_box_has_four_walls() {
    let params = BoxParameters {
        top_edge: EdgeStyle::Open,
        bottom_edge: EdgeStyle::Open,
        ..example_params()
    };
    let layout = generate_box(&params);
    assert_eq!(layout.panels.len(), 4);
    assert_eq!(layout.hole_count(), 0);
    assert_eq!(layout.bounds.height, 60.0 + 3.0 + BOUNDS_SLACK);
}

#[test]
fn test_side_width_is_depth_less_two_thicknesses() {
    for (depth, thickness) in [(80.0, 3.0), (120.0, 6.0), (45.5, 2.25)] {
        let params = BoxParameters {
            depth,
            thickness,
            ..example_params()
        };
        let layout = generate_box(&params);
        for id in [PanelId::Left, PanelId::Right, PanelId::Bottom] {
            let p = layout.panel(id).unwrap();
            let span = if id == PanelId::Bottom { p.height } else { p.width };
            assert_eq!(span, depth - 2.0 * thickness);
        }
    }
}

#[test]
fn test_every_combination_closes() {
    for top in EdgeStyle::ALL {
        for bottom in EdgeStyle::ALL {
            let params = BoxParameters {
                width: 137.5,
                depth: 91.3,
                height: 48.7,
                thickness: 3.3,
                top_edge: top,
                bottom_edge: bottom,
                ..example_params()
            };
            let layout = generate_box(&params);
            let expected = 4
                + usize::from(top != EdgeStyle::Open)
                + usize::from(bottom != EdgeStyle::Open);
            assert_eq!(layout.panels.len(), expected);
            assert_closed(&layout);
        }
    }
}

#[test]
fn test_kerf_and_play_do_not_move_geometry() {
    let base = generate_box(&example_params());

    let mut params = example_params();
    params.kerf = 0.4;
    params.finger_joint.play = 0.25;
    let changed = generate_box(&params);

    assert_eq!(base, changed);
}

#[test]
fn test_generation_is_idempotent() {
    let params = example_params();
    assert_eq!(generate_box(&params), generate_box(&params));
}

#[test]
fn test_extreme_parameters_do_not_panic() {
    let params = BoxParameters {
        width: 30.0,
        depth: 30.0,
        height: 20.0,
        thickness: 12.0,
        finger_joint: FingerJointSettings {
            finger_width: 30.0,
            surrounding_spaces: 4.0,
            edge_width: 5.0,
            play: 0.5,
        },
        top_edge: EdgeStyle::Finger,
        bottom_edge: EdgeStyle::FlushHoles,
        ..example_params()
    };
    let layout = generate_box(&params);
    assert_eq!(layout.panels.len(), 6);
    assert!(layout.bounds.width.is_finite() && layout.bounds.height.is_finite());
}

#[test]
fn test_microscopic_finger_width_is_capped() {
    let mut params = example_params();
    params.finger_joint.finger_width = 1e-300;

    let layout = generate_box(&params);
    assert_eq!(layout.panels.len(), 5);
    assert!(layout.bounds.width.is_finite() && layout.bounds.height.is_finite());

    let per_edge = 3 * MAX_FINGERS + 2;
    for panel in &layout.panels {
        assert!(panel.outline.len() <= 4 * per_edge + 1);
        assert!(panel.holes.len() <= 4 * MAX_FINGERS);
    }
}
