//! Error types for worksheet loading

use std::fmt;

/// Errors that make the whole document unconvertible.
///
/// Both variants are fatal: no output is produced for a document that does
/// not parse or does not carry a region list where Mathcad puts one.
#[derive(Debug)]
pub enum WorksheetError {
    /// The XML itself is corrupted.
    Xml(roxmltree::Error),
    /// The root element has no fourth child, so there is no region list.
    MissingRegionList { found: usize },
}

impl fmt::Display for WorksheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorksheetError::Xml(e) => write!(f, "corrupted worksheet XML: {}", e),
            WorksheetError::MissingRegionList { found } => write!(
                f,
                "no region list: expected it as the root's fourth child, root has {} children",
                found
            ),
        }
    }
}

impl std::error::Error for WorksheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorksheetError::Xml(e) => Some(e),
            WorksheetError::MissingRegionList { .. } => None,
        }
    }
}

impl From<roxmltree::Error> for WorksheetError {
    fn from(e: roxmltree::Error) -> Self {
        WorksheetError::Xml(e)
    }
}
