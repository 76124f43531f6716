// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document-to-placements conversion, one independent pass per input.

use crate::source::FileDocumentSource;
use layout_lens_core::{diagnose, load_plan, log_issues, DocumentSource, LoadError, PlanIssue};
use layout_lens_geometry::{derive_placements, PlacementConfig, PlacementSet};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Outcome of converting one document
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub source: String,
    pub issues: Vec<PlanIssue>,
    pub placements: PlacementSet,
}

/// Load, diagnose and derive one document
pub fn convert<S: DocumentSource + ?Sized>(
    source: &S,
    config: &PlacementConfig,
) -> Result<Conversion, LoadError> {
    let name = source.describe();
    let plan = load_plan(source)?;

    let issues = diagnose(&plan);
    log_issues(&name, &issues);

    Ok(Conversion {
        source: name,
        issues,
        placements: derive_placements(&plan, config),
    })
}

/// Convert every input in parallel; results keep input order.
///
/// Each document gets its own plan snapshot, so a failure in one never
/// affects the others.
pub fn convert_all(
    inputs: &[String],
    project_dir: &Path,
    config: &PlacementConfig,
) -> Vec<(String, Result<Conversion, LoadError>)> {
    inputs
        .par_iter()
        .map(|input| {
            let source = FileDocumentSource::new(input, project_dir);
            (source.describe(), convert(&source, config))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_lens_core::{ParseError, StrDocumentSource};

    const ROOM: &str = r#"{
        "space": {
            "height": 2.7,
            "boundary": [{"x": 0, "y": 0}, {"x": 3, "y": 0}, {"x": 3, "y": 3}, {"x": 0, "y": 3}],
            "openings": [{"kind": "door", "edge_index": 7, "center": 0.5, "width": 0.9}]
        },
        "elements": [
            {"id": "chair_01", "label": "chair", "placement": "floor", "height": 0.9,
             "transform": {"x": 1, "y": 1, "yaw_deg": 0},
             "footprint": {"kind": "rect", "width": 0.5, "depth": 0.5}}
        ]
    }"#;

    #[test]
    fn test_convert_reports_issues_and_placements() {
        let source = StrDocumentSource::new("room", ROOM);
        let conversion = convert(&source, &PlacementConfig::default()).unwrap();

        assert_eq!(conversion.source, "room");
        assert_eq!(conversion.issues.len(), 1);
        assert!(matches!(
            conversion.issues[0],
            PlanIssue::OpeningEdgeOutOfRange { edge_index: 7, .. }
        ));
        assert_eq!(conversion.placements.walls.len(), 4);
        assert_eq!(conversion.placements.openings[0].edge_index, 3);
        assert_eq!(conversion.placements.floor.len(), 1);
    }

    #[test]
    fn test_convert_propagates_parse_errors() {
        let source = StrDocumentSource::new("broken", r#"{"space": {"boundary": []}}"#);
        let err = convert(&source, &PlacementConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::MissingElements)));
    }

    #[test]
    fn test_convert_all_keeps_order_and_isolates_failures() {
        let dir = std::env::temp_dir();
        let good = dir.join(format!("layout-lens-convert-{}.json", std::process::id()));
        std::fs::write(&good, ROOM).unwrap();

        let inputs = vec![
            "layout-lens-convert-missing.json".to_string(),
            good.to_string_lossy().into_owned(),
        ];
        let results = convert_all(&inputs, &dir, &PlacementConfig::default());
        std::fs::remove_file(&good).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_err());
        assert!(results[1].1.is_ok());
    }
}
