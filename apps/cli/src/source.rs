// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Filesystem-backed document source.

use layout_lens_core::{DocumentSource, SourceError};
use std::path::{Path, PathBuf};

/// Reads a room plan document from disk
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    /// Trim `path` and resolve it against `project_dir` when relative.
    pub fn new(path: &str, project_dir: &Path) -> Self {
        let trimmed = Path::new(path.trim());
        let path = if trimmed.is_relative() {
            project_dir.join(trimmed)
        } else {
            trimmed.to_path_buf()
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileDocumentSource {
    fn read_document(&self) -> Result<String, SourceError> {
        let display = self.path.display().to_string();

        if !self.path.exists() {
            return Err(SourceError::NotFound { path: display });
        }

        std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: display,
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_resolves_against_project_dir() {
        let source = FileDocumentSource::new("  output/latest/room_plan.json ", Path::new("/project"));
        assert_eq!(source.path(), Path::new("/project/output/latest/room_plan.json"));
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let source = FileDocumentSource::new("/data/plan.json", Path::new("/project"));
        assert_eq!(source.path(), Path::new("/data/plan.json"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = std::env::temp_dir();
        let source = FileDocumentSource::new("layout-lens-missing-plan-4f1c.json", &dir);
        let err = source.read_document().unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_reads_existing_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("layout-lens-plan-{}.json", std::process::id()));
        std::fs::write(&path, "{}").unwrap();

        let source = FileDocumentSource::new(path.to_str().unwrap(), &dir);
        assert_eq!(source.read_document().unwrap(), "{}");

        std::fs::remove_file(&path).unwrap();
    }
}
