// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room plan data model
//!
//! All planar values are in meters, angles in degrees. A [`RoomPlan`] is
//! built once per reload and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest width/depth derived from a polygon footprint (meters)
pub const MIN_FOOTPRINT_EXTENT: f64 = 0.01;

/// Element height used when a document does not provide one (meters)
pub const DEFAULT_ELEMENT_HEIGHT: f64 = 0.9;

/// Room height used when a document does not provide one (meters)
pub const DEFAULT_ROOM_HEIGHT: f64 = 2.7;

/// A vertex in room-plan space
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Planar position plus rotation about the vertical axis
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Transform2D {
    pub x: f64,
    pub y: f64,
    pub yaw_deg: f64,
}

impl Transform2D {
    pub fn new(x: f64, y: f64, yaw_deg: f64) -> Self {
        Self { x, y, yaw_deg }
    }
}

/// Category of a boundary opening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    Door,
    Window,
    /// Any other kind, original text preserved
    Other(String),
}

impl OpeningKind {
    /// Case-insensitive classification of a document `kind` string
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("door") {
            OpeningKind::Door
        } else if name.eq_ignore_ascii_case("window") {
            OpeningKind::Window
        } else {
            OpeningKind::Other(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OpeningKind::Door => "door",
            OpeningKind::Window => "window",
            OpeningKind::Other(name) => name,
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A door/window/other cut anchored to one boundary edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub kind: OpeningKind,
    /// Edge `i` runs from `boundary[i]` to `boundary[(i + 1) % n]`.
    /// Kept as read from the document; consumers clamp it.
    pub edge_index: i64,
    /// Fractional position along the edge (0 = start, 1 = end), unclamped
    pub center01: f64,
    pub width_meters: f64,
}

impl Opening {
    /// Edge index clamped into `[0, vertex_count - 1]`.
    ///
    /// Returns `None` for an empty boundary.
    pub fn resolved_edge_index(&self, vertex_count: usize) -> Option<usize> {
        if vertex_count == 0 {
            return None;
        }
        let last = (vertex_count - 1) as i64;
        Some(self.edge_index.clamp(0, last) as usize)
    }

    /// Position along the edge clamped into `[0, 1]`
    pub fn resolved_center01(&self) -> f64 {
        if self.center01.is_nan() {
            return 0.0;
        }
        self.center01.clamp(0.0, 1.0)
    }
}

/// How an element is installed in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementPlacement {
    Floor,
    Wall,
    On,
    Ceiling,
    Other(String),
}

impl ElementPlacement {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "floor" => ElementPlacement::Floor,
            "wall" => ElementPlacement::Wall,
            "on" => ElementPlacement::On,
            "ceiling" => ElementPlacement::Ceiling,
            _ => ElementPlacement::Other(name.to_string()),
        }
    }

    pub fn is_floor(&self) -> bool {
        matches!(self, ElementPlacement::Floor)
    }
}

/// Planar shape category of an element footprint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintKind {
    #[default]
    Rect,
    Poly,
    Other(String),
}

impl FootprintKind {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("rect") {
            FootprintKind::Rect
        } else if name.eq_ignore_ascii_case("poly") {
            FootprintKind::Poly
        } else {
            FootprintKind::Other(name.to_string())
        }
    }
}

/// A furnishing or fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub label: String,
    pub placement: ElementPlacement,
    pub height_meters: f64,
    pub transform: Transform2D,
    pub footprint_kind: FootprintKind,
    /// For `Poly` footprints this is derived from the point bounds
    pub width_meters: f64,
    /// For `Poly` footprints this is derived from the point bounds
    pub depth_meters: f64,
    pub polygon_points: Vec<Point2D>,
}

impl Element {
    /// Element with default dimensions and an origin transform
    pub fn new(id: impl Into<String>, label: impl Into<String>, placement: ElementPlacement) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placement,
            height_meters: DEFAULT_ELEMENT_HEIGHT,
            transform: Transform2D::default(),
            footprint_kind: FootprintKind::default(),
            width_meters: 1.0,
            depth_meters: 1.0,
            polygon_points: Vec::new(),
        }
    }

    /// Replace the footprint with a polygon and derive width/depth from
    /// its axis-aligned bounds.
    ///
    /// An empty point list keeps the current width/depth.
    pub fn with_polygon(mut self, points: Vec<Point2D>) -> Self {
        self.footprint_kind = FootprintKind::Poly;
        if let Some((width, depth)) = polygon_extent(&points) {
            self.width_meters = width;
            self.depth_meters = depth;
        }
        self.polygon_points = points;
        self
    }
}

/// Width and depth of the axis-aligned bounds of `points`, each floored at
/// [`MIN_FOOTPRINT_EXTENT`]
pub fn polygon_extent(points: &[Point2D]) -> Option<(f64, f64)> {
    let first = points.first()?;
    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Some((
        (max_x - min_x).max(MIN_FOOTPRINT_EXTENT),
        (max_y - min_y).max(MIN_FOOTPRINT_EXTENT),
    ))
}

/// Boundary orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    Degenerate,
}

/// A complete, immutable description of one room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPlan {
    pub room_height_meters: f64,
    /// Closed polygon; vertex `i` connects to vertex `(i + 1) % n`
    pub boundary: Vec<Point2D>,
    pub openings: Vec<Opening>,
    pub elements: Vec<Element>,
}

impl Default for RoomPlan {
    fn default() -> Self {
        Self {
            room_height_meters: DEFAULT_ROOM_HEIGHT,
            boundary: Vec::new(),
            openings: Vec::new(),
            elements: Vec::new(),
        }
    }
}

impl RoomPlan {
    /// Boundary edges as `(start, end)` pairs, including the closing edge.
    ///
    /// Yields nothing for fewer than 2 vertices.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.boundary.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.boundary[i], self.boundary[(i + 1) % n]))
    }

    /// Edge `index` with wraparound, or `None` if out of range
    pub fn edge(&self, index: usize) -> Option<(Point2D, Point2D)> {
        let n = self.boundary.len();
        if n < 2 || index >= n {
            return None;
        }
        Some((self.boundary[index], self.boundary[(index + 1) % n]))
    }

    /// Signed boundary area (shoelace); positive for counter-clockwise
    pub fn signed_area(&self) -> f64 {
        let n = self.boundary.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.boundary[i].x * self.boundary[j].y;
            area -= self.boundary[j].x * self.boundary[i].y;
        }

        area / 2.0
    }

    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area.abs() < 1e-12 {
            Winding::Degenerate
        } else if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    pub fn floor_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.placement.is_floor())
    }
}
