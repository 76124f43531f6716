// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Full conversion pass over one room plan

use crate::config::PlacementConfig;
use crate::floor::derive_floor_placements_with;
use crate::openings::derive_openings_with;
use crate::outline::derive_outline_with;
use crate::types::PlacementSet;
use crate::walls::derive_walls_with;
use layout_lens_core::RoomPlan;

/// Run every enabled pass over `plan`.
///
/// Floor elements are always placed; outline, walls and openings follow
/// their config toggles. The result replaces, never patches, whatever the
/// caller derived from a previous plan.
pub fn derive_placements(plan: &RoomPlan, config: &PlacementConfig) -> PlacementSet {
    let outline = if config.draw_outline {
        derive_outline_with(plan, config)
    } else {
        Vec::new()
    };

    let walls = if config.spawn_walls {
        derive_walls_with(plan, config)
    } else {
        Vec::new()
    };

    let openings = if config.draw_openings {
        derive_openings_with(plan, config)
    } else {
        Vec::new()
    };

    let floor = derive_floor_placements_with(plan, config);

    let set = PlacementSet {
        outline,
        walls,
        openings,
        floor,
    };

    let summary = set.summary();
    tracing::info!(
        outline = summary.outline_segments,
        walls = summary.walls,
        openings = summary.openings,
        floor_elements = summary.floor_elements,
        "Derived placements"
    );

    set
}
