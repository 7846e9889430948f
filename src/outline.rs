//! Outline document loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::{OutlineError, OutlineResult};

/// One element of the work-breakdown structure, as written in the source
/// document. The shape is recursive: `{ "title": ..., "code"?: ...,
/// "children"?: [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineDocument {
    /// Display text (required at every level)
    pub title: String,
    /// Optional short identifier prefix, e.g. "1.2"
    #[serde(default)]
    pub code: Option<String>,
    /// Ordered child elements (order determines angular placement and list order)
    #[serde(default)]
    pub children: Vec<OutlineDocument>,
}

/// Read and parse the outline document at `path`.
///
/// I/O failures (file absent, unreadable) and shape failures (missing
/// `title`, wrong types) are reported as distinct error kinds.
pub fn load_document(path: &Path) -> OutlineResult<OutlineDocument> {
    let raw = fs::read_to_string(path).map_err(|source| OutlineError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;

    let document: OutlineDocument =
        serde_json::from_str(&raw).map_err(|e| OutlineError::MalformedInput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    debug!("loaded outline: {}", document.title);
    Ok(document)
}
