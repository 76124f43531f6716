// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall boxes along the room boundary

use crate::config::PlacementConfig;
use crate::types::{Point3D, WallBox};
use layout_lens_core::RoomPlan;
use nalgebra::Vector2;

/// Wall boxes with the given thickness (meters) and default configuration
pub fn derive_walls(plan: &RoomPlan, wall_thickness_m: f64) -> Vec<WallBox> {
    let config = PlacementConfig::default().with_wall_thickness(wall_thickness_m);
    derive_walls_with(plan, &config)
}

/// One box per boundary edge, centered on the edge midpoint at half the
/// room height and yawed along the edge.
///
/// Edges shorter than `min_edge_length` after scaling are skipped.
pub fn derive_walls_with(plan: &RoomPlan, config: &PlacementConfig) -> Vec<WallBox> {
    let height = config.scale(plan.room_height_meters);
    let thickness = config.wall_thickness();

    let mut walls = Vec::with_capacity(plan.boundary.len());

    for (edge_index, (a, b)) in plan.edges().enumerate() {
        let start = Vector2::new(config.scale(a.x), config.scale(a.y));
        let end = Vector2::new(config.scale(b.x), config.scale(b.y));

        let delta = end - start;
        let length = delta.norm();
        if length < config.min_edge_length {
            tracing::debug!(edge_index, length, "Skipping degenerate wall edge");
            continue;
        }

        let mid = (start + end) * 0.5;

        walls.push(WallBox {
            edge_index,
            center: Point3D::new(mid.x, mid.y, height * 0.5),
            length,
            thickness,
            height,
            yaw_deg: delta.y.atan2(delta.x).to_degrees(),
        });
    }

    walls
}
