// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placeholder boxes for floor-standing elements

use crate::config::PlacementConfig;
use crate::types::{FloorBox, Point3D};
use layout_lens_core::{Element, RoomPlan};

/// Floor boxes with default scaling
pub fn derive_floor_placements(plan: &RoomPlan, labels_enabled: bool) -> Vec<FloorBox> {
    let config = PlacementConfig::default().with_labels(labels_enabled);
    derive_floor_placements_with(plan, &config)
}

/// One box per element placed on the floor, resting on the floor plane.
///
/// Wall, ceiling and stacked elements are left out.
pub fn derive_floor_placements_with(plan: &RoomPlan, config: &PlacementConfig) -> Vec<FloorBox> {
    plan.floor_elements()
        .map(|element| floor_box(element, config))
        .collect()
}

fn floor_box(element: &Element, config: &PlacementConfig) -> FloorBox {
    let height = config.scale(element.height_meters);

    let label_text = if config.labels_enabled {
        format!("{}\n({})", element.label, element.id)
    } else {
        String::new()
    };

    FloorBox {
        element_id: element.id.clone(),
        label_text,
        center: Point3D::new(
            config.scale(element.transform.x),
            config.scale(element.transform.y),
            height * 0.5,
        ),
        width: config.scale(element.width_meters),
        depth: config.scale(element.depth_meters),
        height,
        yaw_deg: element.transform.yaw_deg,
    }
}
