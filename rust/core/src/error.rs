// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for room plan parsing
pub type Result<T> = std::result::Result<T, ParseError>;

/// Fatal errors while decoding a room plan document.
///
/// Per-item defects inside `boundary`, `openings` or `elements` never
/// surface here; those items are skipped.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON document: {0}")]
    InvalidJson(String),

    #[error("missing 'space' object")]
    MissingSpace,

    #[error("missing 'space.boundary' array")]
    MissingBoundary,

    #[error("missing 'elements' array")]
    MissingElements,

    #[error("invalid field '{path}': {reason}")]
    InvalidField { path: String, reason: String },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidJson(err.to_string())
    }
}

/// Errors reported by a [`DocumentSource`](crate::source::DocumentSource)
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from reading and decoding a document in one step
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to load document: {0}")]
    Source(#[from] SourceError),

    #[error("failed to parse document: {0}")]
    Parse(#[from] ParseError),
}
