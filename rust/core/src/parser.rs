// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room plan document parser
//!
//! Decodes the JSON document produced by the planning pipeline into a
//! [`RoomPlan`]. Top-level structure is checked strictly: a missing
//! `space` object, `space.boundary` array or `elements` array aborts the
//! parse. Items inside those lists are decoded one at a time into raw
//! schema structs; an item that fails to decode is skipped and the rest
//! of the list is kept.
//!
//! ```rust,ignore
//! use layout_lens_core::parse_room_plan;
//!
//! let plan = parse_room_plan(r#"{"space":{"height":2.7,"boundary":[]},"elements":[]}"#)?;
//! assert!(plan.boundary.is_empty());
//! ```

use crate::error::{ParseError, Result};
use crate::model::{
    polygon_extent, Element, ElementPlacement, FootprintKind, Opening, OpeningKind, Point2D,
    RoomPlan, Transform2D, DEFAULT_ELEMENT_HEIGHT, DEFAULT_ROOM_HEIGHT,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Parse a room plan document
pub fn parse_room_plan(text: &str) -> Result<RoomPlan> {
    let root: Value = serde_json::from_str(text)?;
    let root = root
        .as_object()
        .ok_or_else(|| ParseError::InvalidJson("document root is not an object".into()))?;

    let space = root
        .get("space")
        .and_then(Value::as_object)
        .ok_or(ParseError::MissingSpace)?;

    let room_height_meters = read_room_height(space)?;

    let boundary_items = space
        .get("boundary")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingBoundary)?;
    let boundary = collect_items(boundary_items, "space.boundary", decode_point);

    // Openings are optional; anything but an array counts as absent
    let openings = space
        .get("openings")
        .and_then(Value::as_array)
        .map(|items| collect_items(items, "space.openings", decode_opening))
        .unwrap_or_default();

    let element_items = root
        .get("elements")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingElements)?;
    let elements = collect_items(element_items, "elements", decode_element);

    tracing::debug!(
        boundary = boundary.len(),
        openings = openings.len(),
        elements = elements.len(),
        dropped_elements = element_items.len() - elements.len(),
        "Parsed room plan"
    );

    Ok(RoomPlan {
        room_height_meters,
        boundary,
        openings,
        elements,
    })
}

impl FromStr for RoomPlan {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_room_plan(s)
    }
}

fn read_room_height(space: &Map<String, Value>) -> Result<f64> {
    match space.get("height") {
        None => Ok(DEFAULT_ROOM_HEIGHT),
        Some(value) => value.as_f64().ok_or_else(|| ParseError::InvalidField {
            path: "space.height".into(),
            reason: format!("expected a number, found {}", json_type_name(value)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Why a single list item was dropped
#[derive(Debug)]
enum ItemDefect {
    NotAnObject,
    Schema(serde_json::Error),
    MissingField(&'static str),
    NotANumber(&'static str),
}

impl fmt::Display for ItemDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemDefect::NotAnObject => f.write_str("item is not an object"),
            ItemDefect::Schema(err) => write!(f, "{}", err),
            ItemDefect::MissingField(name) => write!(f, "missing field `{}`", name),
            ItemDefect::NotANumber(name) => write!(f, "field `{}` is not a number", name),
        }
    }
}

impl From<serde_json::Error> for ItemDefect {
    fn from(err: serde_json::Error) -> Self {
        ItemDefect::Schema(err)
    }
}

type ItemResult<T> = std::result::Result<T, ItemDefect>;

/// Decode every item of a list, keeping the successes in order
fn collect_items<T>(items: &[Value], list: &str, decode: fn(&Value) -> ItemResult<T>) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match decode(item) {
            Ok(decoded) => Some(decoded),
            Err(defect) => {
                tracing::debug!(list, index, %defect, "Skipping malformed item");
                None
            }
        })
        .collect()
}

/// Decode an item that must be a JSON object.
///
/// Structs also deserialize from arrays in serde, so the object check
/// comes first.
fn decode_object<'a, T: Deserialize<'a>>(item: &'a Value) -> ItemResult<T> {
    if !item.is_object() {
        return Err(ItemDefect::NotAnObject);
    }
    Ok(T::deserialize(item)?)
}

#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawOpening {
    kind: String,
    edge_index: f64,
    center: f64,
    width: f64,
}

#[derive(Deserialize)]
struct RawTransform {
    x: f64,
    y: f64,
    #[serde(default)]
    yaw_deg: f64,
}

#[derive(Deserialize)]
struct RawFootprint {
    kind: String,
    // Only rect footprints read these, so they stay untyped until then
    #[serde(default)]
    width: Option<Value>,
    #[serde(default)]
    depth: Option<Value>,
    #[serde(default)]
    points: Option<Value>,
}

#[derive(Deserialize)]
struct RawElement {
    id: String,
    label: String,
    placement: String,
    #[serde(default = "default_element_height")]
    height: f64,
    #[serde(default)]
    transform: Option<Value>,
    #[serde(default)]
    footprint: Option<Value>,
}

fn default_element_height() -> f64 {
    DEFAULT_ELEMENT_HEIGHT
}

fn decode_point(item: &Value) -> ItemResult<Point2D> {
    let raw: RawPoint = decode_object(item)?;
    Ok(Point2D::new(raw.x, raw.y))
}

fn decode_opening(item: &Value) -> ItemResult<Opening> {
    let raw: RawOpening = decode_object(item)?;
    Ok(Opening {
        kind: OpeningKind::from_name(&raw.kind),
        // Integer fields accept any JSON number and truncate toward zero
        edge_index: raw.edge_index as i64,
        center01: raw.center,
        width_meters: raw.width,
    })
}

fn decode_element(item: &Value) -> ItemResult<Element> {
    let raw: RawElement = decode_object(item)?;

    let mut element = Element::new(raw.id, raw.label, ElementPlacement::from_name(&raw.placement));
    element.height_meters = raw.height;

    // Non-object transform/footprint values are ignored, not fatal
    if let Some(value) = raw.transform.as_ref().filter(|v| v.is_object()) {
        let transform: RawTransform = decode_object(value)?;
        element.transform = Transform2D::new(transform.x, transform.y, transform.yaw_deg);
    }

    if let Some(value) = raw.footprint.as_ref().filter(|v| v.is_object()) {
        let footprint: RawFootprint = decode_object(value)?;
        apply_footprint(&mut element, footprint)?;
    }

    Ok(element)
}

fn apply_footprint(element: &mut Element, footprint: RawFootprint) -> ItemResult<()> {
    element.footprint_kind = FootprintKind::from_name(&footprint.kind);

    match element.footprint_kind {
        FootprintKind::Rect => {
            element.width_meters = required_number(footprint.width.as_ref(), "footprint.width")?;
            element.depth_meters = required_number(footprint.depth.as_ref(), "footprint.depth")?;
        }
        FootprintKind::Poly => {
            let points = footprint
                .points
                .as_ref()
                .and_then(Value::as_array)
                .map(|items| collect_items(items, "footprint.points", decode_point))
                .unwrap_or_default();

            if let Some((width, depth)) = polygon_extent(&points) {
                element.width_meters = width;
                element.depth_meters = depth;
            }
            element.polygon_points = points;
        }
        FootprintKind::Other(_) => {}
    }

    Ok(())
}

fn required_number(value: Option<&Value>, name: &'static str) -> ItemResult<f64> {
    value
        .ok_or(ItemDefect::MissingField(name))?
        .as_f64()
        .ok_or(ItemDefect::NotANumber(name))
}
