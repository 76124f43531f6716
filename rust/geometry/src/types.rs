// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement records handed to the renderer
//!
//! All positions and sizes are in rendering units (centimeters with the
//! default configuration); z points up.

use layout_lens_core::OpeningKind;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A 3D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: &Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// 8-bit RGBA display color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const CYAN: Rgba = Rgba::opaque(0, 255, 255);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Display color used for an opening outline
    pub fn for_opening(kind: &OpeningKind) -> Self {
        match kind {
            OpeningKind::Door => Rgba::GREEN,
            OpeningKind::Window => Rgba::YELLOW,
            OpeningKind::Other(_) => Rgba::WHITE,
        }
    }
}

/// A straight debug line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LineSegment {
    pub start: Point3D,
    pub end: Point3D,
    pub color: Rgba,
}

impl LineSegment {
    pub fn length(&self) -> f64 {
        (self.end.to_nalgebra() - self.start.to_nalgebra()).norm()
    }
}

/// Oriented box standing in for one boundary wall
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallBox {
    /// Boundary edge this wall was built from
    pub edge_index: usize,
    /// Edge midpoint at half the room height
    pub center: Point3D,
    /// Extent along the edge direction
    pub length: f64,
    pub thickness: f64,
    pub height: f64,
    /// Rotation about z aligning the long axis with the edge
    pub yaw_deg: f64,
}

impl WallBox {
    /// Box extents as (length, thickness, height)
    pub fn size(&self) -> Point3D {
        Point3D::new(self.length, self.thickness, self.height)
    }
}

/// Vertical rectangle outlining a door, window or other opening
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpeningRect {
    pub kind: OpeningKind,
    /// Edge index after clamping into the boundary
    pub edge_index: usize,
    /// Position along the edge after clamping into [0, 1]
    pub center01: f64,
    /// Center of the opening at floor level, offset off the wall centerline
    pub center: Point3D,
    pub bottom: f64,
    pub top: f64,
    /// Bottom-start, bottom-end, top-end, top-start
    pub corners: [Point3D; 4],
    pub color: Rgba,
}

impl OpeningRect {
    pub fn width(&self) -> f64 {
        (self.corners[1].to_nalgebra() - self.corners[0].to_nalgebra()).norm()
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Outline as bottom, top, start vertical, end vertical
    pub fn edges(&self) -> [LineSegment; 4] {
        let [bottom_start, bottom_end, top_end, top_start] = self.corners;
        let line = |start, end| LineSegment {
            start,
            end,
            color: self.color,
        };
        [
            line(bottom_start, bottom_end),
            line(top_start, top_end),
            line(bottom_start, top_start),
            line(bottom_end, top_end),
        ]
    }
}

/// Oriented placeholder box for a floor-standing element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorBox {
    pub element_id: String,
    /// Empty when labels are disabled
    pub label_text: String,
    /// Footprint center lifted to half the element height
    pub center: Point3D,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub yaw_deg: f64,
}

impl FloorBox {
    /// Box extents as (width, depth, height)
    pub fn size(&self) -> Point3D {
        Point3D::new(self.width, self.depth, self.height)
    }
}

/// Everything derived from one room plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlacementSet {
    pub outline: Vec<LineSegment>,
    pub walls: Vec<WallBox>,
    pub openings: Vec<OpeningRect>,
    pub floor: Vec<FloorBox>,
}

impl PlacementSet {
    pub fn summary(&self) -> PlacementSummary {
        PlacementSummary {
            outline_segments: self.outline.len(),
            walls: self.walls.len(),
            openings: self.openings.len(),
            floor_elements: self.floor.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty() && self.walls.is_empty() && self.openings.is_empty() && self.floor.is_empty()
    }
}

/// Per-list counts of a [`PlacementSet`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementSummary {
    pub outline_segments: usize,
    pub walls: usize,
    pub openings: usize,
    pub floor_elements: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_opening_rect_edges() {
        let rect = OpeningRect {
            kind: OpeningKind::Door,
            edge_index: 0,
            center01: 0.5,
            center: Point3D::new(50.0, 7.0, 0.0),
            bottom: 0.0,
            top: 210.0,
            corners: [
                Point3D::new(5.0, 7.0, 0.0),
                Point3D::new(95.0, 7.0, 0.0),
                Point3D::new(95.0, 7.0, 210.0),
                Point3D::new(5.0, 7.0, 210.0),
            ],
            color: Rgba::GREEN,
        };

        assert_relative_eq!(rect.width(), 90.0);
        assert_relative_eq!(rect.height(), 210.0);

        let [bottom, top, left, right] = rect.edges();
        assert_relative_eq!(bottom.start.z, 0.0);
        assert_relative_eq!(top.end.z, 210.0);
        assert_relative_eq!(left.length(), 210.0);
        assert_relative_eq!(right.start.x, 95.0);
        assert_eq!(right.color, Rgba::GREEN);
    }

    #[test]
    fn test_opening_colors() {
        assert_eq!(Rgba::for_opening(&OpeningKind::Door), Rgba::GREEN);
        assert_eq!(Rgba::for_opening(&OpeningKind::Window), Rgba::YELLOW);
        assert_eq!(Rgba::for_opening(&OpeningKind::Other("arch".into())), Rgba::WHITE);
    }

    #[test]
    fn test_point_nalgebra_roundtrip() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(Point3D::from_nalgebra(&p.to_nalgebra()), p);
    }
}
