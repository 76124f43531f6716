// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement engine configuration

use serde::{Deserialize, Serialize};

/// Parameters for deriving placements from a room plan.
///
/// Plan data is in meters; every length here except `wall_thickness_m` is
/// already in rendering units (centimeters with the default
/// `units_per_meter`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Rendering units per plan meter
    pub units_per_meter: f64,
    /// Wall box thickness in meters
    pub wall_thickness_m: f64,
    /// Height of outline segments above the floor plane
    pub outline_elevation: f64,
    /// Gap between the wall face and an opening outline
    pub opening_clearance: f64,
    /// Edges shorter than this produce no wall or opening
    pub min_edge_length: f64,
    /// Door top, capped by the room height
    pub door_height: f64,
    /// Window bottom before clamping
    pub window_sill_height: f64,
    /// Window height above the sill
    pub window_height: f64,
    /// Minimum gap between the sill and the ceiling
    pub window_sill_headroom: f64,
    /// Minimum gap between the window top and the ceiling
    pub window_top_headroom: f64,
    /// Top of openings that are neither doors nor windows
    pub other_opening_height: f64,
    /// Attach "label (id)" text to floor boxes
    pub labels_enabled: bool,
    pub draw_outline: bool,
    pub spawn_walls: bool,
    pub draw_openings: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            units_per_meter: 100.0,
            wall_thickness_m: 0.10,
            outline_elevation: 5.0,
            opening_clearance: 2.0,
            min_edge_length: 1.0,
            door_height: 210.0,
            window_sill_height: 100.0,
            window_height: 100.0,
            window_sill_headroom: 20.0,
            window_top_headroom: 10.0,
            other_opening_height: 150.0,
            labels_enabled: true,
            draw_outline: true,
            spawn_walls: true,
            draw_openings: true,
        }
    }
}

impl PlacementConfig {
    pub fn with_wall_thickness(mut self, meters: f64) -> Self {
        self.wall_thickness_m = meters;
        self
    }

    pub fn with_labels(mut self, enabled: bool) -> Self {
        self.labels_enabled = enabled;
        self
    }

    /// Wall thickness in rendering units
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness_m * self.units_per_meter
    }

    /// Convert a plan length (meters) to rendering units
    pub fn scale(&self, meters: f64) -> f64 {
        meters * self.units_per_meter
    }
}
