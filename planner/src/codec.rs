//! Document export/import as pretty-printed JSON.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use crate::doc::Document;

/// Error from exporting or importing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The text is not a layout document. This is the single user-facing signal for bad imports.
    #[error("invalid file")]
    InvalidFile(#[source] serde_json::Error),
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serialise `doc` as indented JSON.
///
/// # Errors
///
/// Returns [`DocumentError::Encode`] if serialisation fails.
pub fn export_document(doc: &Document) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(doc).map_err(DocumentError::Encode)
}

/// Parse a document from JSON text. Missing fields take their defaults.
///
/// # Errors
///
/// Returns [`DocumentError::InvalidFile`] when the text is not valid JSON or
/// does not have the document's shape.
pub fn import_document(text: &str) -> Result<Document, DocumentError> {
    serde_json::from_str(text).map_err(DocumentError::InvalidFile)
}
