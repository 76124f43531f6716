// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LayoutLens Placement Geometry
//!
//! Pure, deterministic derivation of renderable placements from a parsed
//! [`RoomPlan`](layout_lens_core::RoomPlan):
//!
//! 1. Room outline segments (one per boundary edge)
//! 2. Wall boxes along the boundary
//! 3. Door/window/opening rectangles anchored to boundary edges
//! 4. Oriented boxes for floor-standing elements
//!
//! Nothing here allocates host objects or keeps state between calls; the
//! same plan and configuration always yield identical output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use layout_lens_core::parse_room_plan;
//! use layout_lens_geometry::{derive_placements, PlacementConfig};
//!
//! let plan = parse_room_plan(&text)?;
//! let placements = derive_placements(&plan, &PlacementConfig::default());
//! ```

pub mod config;
pub mod floor;
pub mod openings;
pub mod outline;
pub mod placement;
pub mod types;
pub mod walls;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2};

pub use config::PlacementConfig;
pub use floor::{derive_floor_placements, derive_floor_placements_with};
pub use openings::{derive_openings, derive_openings_with, vertical_extent};
pub use outline::{derive_outline, derive_outline_with};
pub use placement::derive_placements;
pub use types::{
    FloorBox, LineSegment, OpeningRect, PlacementSet, PlacementSummary, Point3D, Rgba, WallBox,
};
pub use walls::{derive_walls, derive_walls_with};
