// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # LayoutLens Core
//!
//! Room plan data model and document parser.
//!
//! ## Overview
//!
//! - **Data model**: [`RoomPlan`] with its boundary polygon, wall openings
//!   and furnishings, all in meters
//! - **Parser**: [`parse_room_plan`] decodes the JSON document emitted by the
//!   planning pipeline; structural defects are fatal, per-item defects are
//!   skipped
//! - **Sources**: [`DocumentSource`] abstracts where document text comes from
//! - **Diagnostics**: [`diagnose`] lists defects the placement engine will
//!   clamp or skip
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use layout_lens_core::{diagnose, parse_room_plan};
//!
//! let plan = parse_room_plan(&text)?;
//! for issue in diagnose(&plan) {
//!     println!("{}", issue);
//! }
//! ```

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod parser;
pub mod source;

pub use diagnostics::{diagnose, log_issues, PlanIssue};
pub use error::{LoadError, ParseError, Result, SourceError};
pub use model::{
    polygon_extent, Element, ElementPlacement, FootprintKind, Opening, OpeningKind, Point2D,
    RoomPlan, Transform2D, Winding, DEFAULT_ELEMENT_HEIGHT, DEFAULT_ROOM_HEIGHT,
    MIN_FOOTPRINT_EXTENT,
};
pub use parser::parse_room_plan;
pub use source::{load_plan, DocumentSource, StrDocumentSource};

/// Crate-level error alias
pub type Error = ParseError;
