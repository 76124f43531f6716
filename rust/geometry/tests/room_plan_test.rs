// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end checks: document text through the parser into placements.

use approx::assert_relative_eq;
use layout_lens_core::{parse_room_plan, RoomPlan, Winding};
use layout_lens_geometry::{
    derive_floor_placements, derive_openings, derive_outline, derive_placements, derive_walls,
    PlacementConfig,
};

const BEDROOM: &str = r#"{
    "space": {
        "height": 2.7,
        "boundary": [
            {"x": 0.0, "y": 0.0},
            {"x": 4.0, "y": 0.0},
            {"x": 4.0, "y": 3.5},
            {"x": 0.0, "y": 3.5}
        ],
        "openings": [
            {"kind": "door", "edge_index": 0, "center": 0.2, "width": 0.9},
            {"kind": "window", "edge_index": 2, "center": 0.5, "width": 1.4},
            {"kind": "other", "edge_index": 99, "center": 1.7, "width": 0.6}
        ]
    },
    "elements": [
        {
            "id": "bed_01", "label": "bed", "placement": "floor", "height": 0.6,
            "transform": {"x": 2.0, "y": 2.4, "yaw_deg": 0},
            "footprint": {"kind": "rect", "width": 1.6, "depth": 2.0}
        },
        "not an element",
        {
            "id": "desk_01", "label": "desk", "placement": "floor", "height": 0.75,
            "transform": {"x": 3.5, "y": 0.6, "yaw_deg": 90},
            "footprint": {"kind": "poly", "points": [
                {"x": -0.6, "y": -0.3}, {"x": 0.6, "y": -0.3},
                {"x": 0.6, "y": 0.3}, {"x": -0.6, "y": 0.3}
            ]}
        },
        {
            "id": "mirror_01", "label": "mirror", "placement": "wall", "height": 1.2,
            "transform": {"x": 0.1, "y": 1.5, "yaw_deg": 90},
            "footprint": {"kind": "rect", "width": 0.6, "depth": 0.05}
        }
    ]
}"#;

fn bedroom() -> RoomPlan {
    parse_room_plan(BEDROOM).expect("bedroom plan should parse")
}

#[test]
fn test_bedroom_counts() {
    let plan = bedroom();
    assert_eq!(plan.elements.len(), 3);
    assert_eq!(plan.winding(), Winding::CounterClockwise);

    assert_eq!(derive_outline(&plan).len(), 4);
    assert_eq!(derive_walls(&plan, 0.1).len(), 4);
    assert_eq!(derive_openings(&plan, 0.1).len(), 3);
    assert_eq!(derive_floor_placements(&plan, true).len(), 2);
}

#[test]
fn test_bedroom_openings() {
    let openings = derive_openings(&bedroom(), 0.1);

    let door = &openings[0];
    assert_relative_eq!(door.center.x, 80.0, epsilon = 1e-9);
    assert_relative_eq!(door.top, 210.0);

    let window = &openings[1];
    assert_relative_eq!(window.bottom, 100.0);
    assert_relative_eq!(window.top, 200.0);

    let other = &openings[2];
    assert_eq!(other.edge_index, 3);
    assert_relative_eq!(other.center01, 1.0);
    assert_relative_eq!(other.top, 150.0);
}

#[test]
fn test_poly_footprint_sizes_desk() {
    let floor = derive_floor_placements(&bedroom(), false);
    let desk = floor.iter().find(|b| b.element_id == "desk_01").unwrap();
    assert_relative_eq!(desk.width, 120.0, epsilon = 1e-9);
    assert_relative_eq!(desk.depth, 60.0, epsilon = 1e-9);
    assert_relative_eq!(desk.center.z, 37.5);
    assert!(desk.label_text.is_empty());
}

#[test]
fn test_coincident_vertices_drop_one_wall() {
    let doc = r#"{
        "space": {"height": 2.7, "boundary": [
            {"x": 0, "y": 0}, {"x": 3, "y": 0}, {"x": 3, "y": 0},
            {"x": 3, "y": 3}, {"x": 0, "y": 3}
        ]},
        "elements": []
    }"#;
    let plan = parse_room_plan(doc).unwrap();
    assert_eq!(derive_outline(&plan).len(), 5);
    assert_eq!(derive_walls(&plan, 0.1).len(), 4);
}

#[test]
fn test_heights_follow_room() {
    let tall = parse_room_plan(
        r#"{"space":{"height":4.0,"boundary":[{"x":0,"y":0},{"x":2,"y":0},{"x":2,"y":2}],
            "openings":[{"kind":"door","edge_index":0,"center":0.5,"width":0.8},
                        {"kind":"window","edge_index":1,"center":0.5,"width":0.8}]},
            "elements":[]}"#,
    )
    .unwrap();
    let openings = derive_openings(&tall, 0.1);
    assert_relative_eq!(openings[0].top, 210.0);
    assert_relative_eq!(openings[1].bottom, 100.0);
    assert_relative_eq!(openings[1].top, 200.0);

    let low = RoomPlan {
        room_height_meters: 0.9,
        ..tall
    };
    let openings = derive_openings(&low, 0.1);
    assert_relative_eq!(openings[0].top, 90.0);
    assert_relative_eq!(openings[1].bottom, 70.0);
    assert_relative_eq!(openings[1].top, 80.0);
}

#[test]
fn test_repeated_derivation_is_identical() {
    let plan = bedroom();
    let config = PlacementConfig::default();

    assert_eq!(derive_outline(&plan), derive_outline(&plan));
    assert_eq!(derive_walls(&plan, 0.1), derive_walls(&plan, 0.1));
    assert_eq!(derive_openings(&plan, 0.1), derive_openings(&plan, 0.1));
    assert_eq!(
        derive_floor_placements(&plan, true),
        derive_floor_placements(&plan, true)
    );

    let first = serde_json::to_string(&derive_placements(&plan, &config)).unwrap();
    let second = serde_json::to_string(&derive_placements(&plan, &config)).unwrap();
    assert_eq!(first, second);
}
