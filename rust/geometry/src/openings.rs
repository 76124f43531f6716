// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door and window outlines
//!
//! Each opening becomes a vertical rectangle standing on its boundary edge.
//! The rectangle is a visual marker only; wall boxes are not cut.
//!
//! The rectangle is pushed off the wall centerline along `(-dir.y, dir.x)`,
//! the edge direction rotated 90° counter-clockwise. That side is the room
//! interior for counter-clockwise boundaries and the exterior for clockwise
//! ones; see [`RoomPlan::winding`](layout_lens_core::RoomPlan::winding).

use crate::config::PlacementConfig;
use crate::types::{OpeningRect, Point3D, Rgba};
use layout_lens_core::{Opening, OpeningKind, RoomPlan};
use nalgebra::Vector2;

/// Opening outlines for the given wall thickness (meters) with default
/// configuration
pub fn derive_openings(plan: &RoomPlan, wall_thickness_m: f64) -> Vec<OpeningRect> {
    let config = PlacementConfig::default().with_wall_thickness(wall_thickness_m);
    derive_openings_with(plan, &config)
}

/// Opening outlines, in plan order.
///
/// `edge_index` and `center01` are clamped before use. Openings on edges
/// shorter than `min_edge_length` are skipped, as is everything when the
/// boundary has fewer than 2 vertices.
pub fn derive_openings_with(plan: &RoomPlan, config: &PlacementConfig) -> Vec<OpeningRect> {
    let vertex_count = plan.boundary.len();
    if vertex_count < 2 {
        return Vec::new();
    }

    let room_height = config.scale(plan.room_height_meters);
    let wall_offset = config.wall_thickness() * 0.5 + config.opening_clearance;

    plan.openings
        .iter()
        .filter_map(|opening| place_opening(plan, opening, room_height, wall_offset, config))
        .collect()
}

fn place_opening(
    plan: &RoomPlan,
    opening: &Opening,
    room_height: f64,
    wall_offset: f64,
    config: &PlacementConfig,
) -> Option<OpeningRect> {
    let edge_index = opening.resolved_edge_index(plan.boundary.len())?;
    let (a, b) = plan.edge(edge_index)?;

    let edge_start = Vector2::new(config.scale(a.x), config.scale(a.y));
    let edge_end = Vector2::new(config.scale(b.x), config.scale(b.y));

    let delta = edge_end - edge_start;
    let edge_length = delta.norm();
    if edge_length < config.min_edge_length {
        tracing::debug!(edge_index, kind = %opening.kind, "Skipping opening on degenerate edge");
        return None;
    }

    let direction = delta / edge_length;
    let normal = Vector2::new(-direction.y, direction.x);

    let center01 = opening.resolved_center01();
    let center = edge_start + direction * (center01 * edge_length) + normal * wall_offset;

    let half_width = config.scale(opening.width_meters) * 0.5;
    let start = center - direction * half_width;
    let end = center + direction * half_width;

    let (bottom, top) = vertical_extent(&opening.kind, room_height, config);

    Some(OpeningRect {
        kind: opening.kind.clone(),
        edge_index,
        center01,
        center: Point3D::new(center.x, center.y, 0.0),
        bottom,
        top,
        corners: [
            Point3D::new(start.x, start.y, bottom),
            Point3D::new(end.x, end.y, bottom),
            Point3D::new(end.x, end.y, top),
            Point3D::new(start.x, start.y, top),
        ],
        color: Rgba::for_opening(&opening.kind),
    })
}

/// Bottom and top elevation of an opening in a room `room_height` tall
pub fn vertical_extent(kind: &OpeningKind, room_height: f64, config: &PlacementConfig) -> (f64, f64) {
    match kind {
        OpeningKind::Door => (0.0, room_height.min(config.door_height)),
        OpeningKind::Window => {
            let max_sill = (room_height - config.window_sill_headroom).max(0.0);
            let sill = config.window_sill_height.clamp(0.0, max_sill);
            let top = (room_height - config.window_top_headroom).min(sill + config.window_height);
            (sill, top)
        }
        OpeningKind::Other(_) => (0.0, room_height.min(config.other_opening_height)),
    }
}
