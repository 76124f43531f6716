// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document sources
//!
//! The parser never touches the filesystem. Hosts hand it text through a
//! [`DocumentSource`]; the file-backed implementation lives with the host.

use crate::error::{LoadError, SourceError};
use crate::model::RoomPlan;
use crate::parser::parse_room_plan;

/// Something that can produce the text of a room plan document
pub trait DocumentSource {
    /// Read the full document text
    fn read_document(&self) -> Result<String, SourceError>;

    /// Human-readable origin used in log lines
    fn describe(&self) -> String;
}

/// In-memory document, mostly for tests and embedding
#[derive(Debug, Clone)]
pub struct StrDocumentSource {
    name: String,
    text: String,
}

impl StrDocumentSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl DocumentSource for StrDocumentSource {
    fn read_document(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Read and parse a document in one step
pub fn load_plan<S: DocumentSource + ?Sized>(source: &S) -> Result<RoomPlan, LoadError> {
    let text = source.read_document()?;
    let plan = parse_room_plan(&text)?;

    tracing::info!(
        source = %source.describe(),
        elements = plan.elements.len(),
        "Loaded room plan"
    );

    Ok(plan)
}
