// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Non-fatal plan diagnostics
//!
//! Flags input defects that the placement engine will clamp or skip, so
//! hosts can surface them. Nothing here blocks conversion.

use crate::model::{RoomPlan, Winding};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// Edges shorter than this are reported (meters)
pub const MIN_EDGE_LENGTH_METERS: f64 = 0.01;

/// A single defect found in a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum PlanIssue {
    TooFewVertices {
        count: usize,
    },
    ZeroArea,
    ShortEdge {
        edge_index: usize,
        length: f64,
    },
    OpeningEdgeOutOfRange {
        opening_index: usize,
        edge_index: i64,
        edge_count: usize,
    },
    OpeningCenterOutOfRange {
        opening_index: usize,
        center: f64,
    },
    OpeningWidthInvalid {
        opening_index: usize,
        width: f64,
    },
    OpeningWiderThanEdge {
        opening_index: usize,
        width: f64,
        edge_length: f64,
    },
    DuplicateElementId {
        id: String,
    },
    ElementSizeInvalid {
        id: String,
        width: f64,
        depth: f64,
        height: f64,
    },
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanIssue::TooFewVertices { count } => {
                write!(f, "boundary has {} vertices, a room needs at least 3", count)
            }
            PlanIssue::ZeroArea => f.write_str("boundary encloses no area"),
            PlanIssue::ShortEdge { edge_index, length } => {
                write!(f, "boundary edge {} is only {:.4} m long", edge_index, length)
            }
            PlanIssue::OpeningEdgeOutOfRange {
                opening_index,
                edge_index,
                edge_count,
            } => write!(
                f,
                "opening #{} edge_index={} is out of range (0..{})",
                opening_index,
                edge_index,
                edge_count.saturating_sub(1)
            ),
            PlanIssue::OpeningCenterOutOfRange {
                opening_index,
                center,
            } => write!(f, "opening #{} center={} is outside 0..1", opening_index, center),
            PlanIssue::OpeningWidthInvalid {
                opening_index,
                width,
            } => write!(f, "opening #{} has non-positive width {}", opening_index, width),
            PlanIssue::OpeningWiderThanEdge {
                opening_index,
                width,
                edge_length,
            } => write!(
                f,
                "opening #{} width={:.2} exceeds its edge length {:.2}",
                opening_index, width, edge_length
            ),
            PlanIssue::DuplicateElementId { id } => write!(f, "element id '{}' is used more than once", id),
            PlanIssue::ElementSizeInvalid {
                id,
                width,
                depth,
                height,
            } => write!(
                f,
                "element '{}' has non-positive size {}x{}x{}",
                id, width, depth, height
            ),
        }
    }
}

/// Collect every non-fatal defect in `plan`, in boundary/opening/element order
pub fn diagnose(plan: &RoomPlan) -> Vec<PlanIssue> {
    let mut issues = Vec::new();
    let vertex_count = plan.boundary.len();

    if vertex_count > 0 && vertex_count < 3 {
        issues.push(PlanIssue::TooFewVertices {
            count: vertex_count,
        });
    } else if vertex_count >= 3 && plan.winding() == Winding::Degenerate {
        issues.push(PlanIssue::ZeroArea);
    }

    for (edge_index, (start, end)) in plan.edges().enumerate() {
        let length = start.distance_to(&end);
        if length < MIN_EDGE_LENGTH_METERS {
            issues.push(PlanIssue::ShortEdge { edge_index, length });
        }
    }

    for (opening_index, opening) in plan.openings.iter().enumerate() {
        if !(0.0..=1.0).contains(&opening.center01) {
            issues.push(PlanIssue::OpeningCenterOutOfRange {
                opening_index,
                center: opening.center01,
            });
        }

        if opening.width_meters <= 0.0 {
            issues.push(PlanIssue::OpeningWidthInvalid {
                opening_index,
                width: opening.width_meters,
            });
        }

        let edge = usize::try_from(opening.edge_index)
            .ok()
            .and_then(|index| plan.edge(index));
        let Some((start, end)) = edge else {
            issues.push(PlanIssue::OpeningEdgeOutOfRange {
                opening_index,
                edge_index: opening.edge_index,
                edge_count: vertex_count,
            });
            continue;
        };

        let edge_length = start.distance_to(&end);
        if edge_length >= MIN_EDGE_LENGTH_METERS && opening.width_meters > edge_length {
            issues.push(PlanIssue::OpeningWiderThanEdge {
                opening_index,
                width: opening.width_meters,
                edge_length,
            });
        }
    }

    let mut seen_ids = FxHashSet::default();
    for element in &plan.elements {
        if !seen_ids.insert(element.id.as_str()) {
            issues.push(PlanIssue::DuplicateElementId {
                id: element.id.clone(),
            });
        }

        if element.width_meters <= 0.0 || element.depth_meters <= 0.0 || element.height_meters <= 0.0 {
            issues.push(PlanIssue::ElementSizeInvalid {
                id: element.id.clone(),
                width: element.width_meters,
                depth: element.depth_meters,
                height: element.height_meters,
            });
        }
    }

    issues
}

/// Emit each issue as a warning
pub fn log_issues(source: &str, issues: &[PlanIssue]) {
    for issue in issues {
        tracing::warn!(source, %issue, "Room plan issue");
    }
}
