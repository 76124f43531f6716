// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room outline segments

use crate::config::PlacementConfig;
use crate::types::{LineSegment, Point3D, Rgba};
use layout_lens_core::RoomPlan;

/// One segment per boundary edge, closing edge included, with default
/// configuration
pub fn derive_outline(plan: &RoomPlan) -> Vec<LineSegment> {
    derive_outline_with(plan, &PlacementConfig::default())
}

/// One segment per boundary edge, lifted to `outline_elevation` so it stays
/// visible above the floor plane.
///
/// Boundaries with fewer than 2 vertices produce nothing.
pub fn derive_outline_with(plan: &RoomPlan, config: &PlacementConfig) -> Vec<LineSegment> {
    let z = config.outline_elevation;

    plan.edges()
        .map(|(a, b)| LineSegment {
            start: Point3D::new(config.scale(a.x), config.scale(a.y), z),
            end: Point3D::new(config.scale(b.x), config.scale(b.y), z),
            color: Rgba::CYAN,
        })
        .collect()
}
