//! Error types for expression rendering

use serde::Serialize;
use std::fmt;

/// Why one expression subtree could not be rendered.
///
/// All of these are recoverable at region granularity: the assembler skips
/// the offending region and keeps going. Nothing here aborts the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderError {
    /// Node tag outside the recognized expression vocabulary.
    UnsupportedTag { tag: String },
    /// An `apply` node with a child count we cannot interpret.
    ApplyArity { count: usize },
    /// A node that must carry a child or text content is empty.
    MissingContent { tag: String },
    /// No LaTeX template for this operator key at this arity.
    UnknownOperator { operator: String, arity: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnsupportedTag { tag } => {
                write!(f, "unsupported tag `{}`", tag)
            }
            RenderError::ApplyArity { count } => {
                write!(f, "`apply` node has {} children, expected 2 or 3", count)
            }
            RenderError::MissingContent { tag } => {
                write!(f, "`{}` node is missing required content", tag)
            }
            RenderError::UnknownOperator { operator, arity } => {
                write!(
                    f,
                    "no LaTeX template for operator `{}` with {} operand(s)",
                    operator, arity
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// A region that was skipped, with its 1-indexed position in the worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionFailure {
    pub region: usize,
    pub error: RenderError,
}

impl fmt::Display for RegionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {}: {}", self.region, self.error)
    }
}

impl std::error::Error for RegionFailure {}
