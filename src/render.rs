//! Script Filter envelope rendering
//!
//! Renders a [`Response`] to the JSON text the launcher host consumes. The
//! data model is plain strings, booleans and maps, so serialization cannot
//! structurally fail; a backend failure is still surfaced as
//! [`RenderError`] so callers can distinguish it from an empty result.

use thiserror::Error;

use crate::response::Response;

/// Rendering failure surfaced to the caller
#[derive(Debug, Error)]
pub enum RenderError {
    /// The JSON backend rejected the response
    #[error("failed to serialize script filter response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Response {
    /// Render as compact single-line JSON in the Script Filter shape
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as indented JSON, same shape; useful when debugging a workflow
    pub fn to_json_pretty(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
