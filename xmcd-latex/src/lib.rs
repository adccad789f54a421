//! Mathcad worksheet to LaTeX conversion
//!
//! This crate is the core of the converter: it walks the expression trees
//! of a parsed worksheet and emits the equivalent LaTeX. The pieces, leaves
//! first:
//!
//!     - operators: operator key + rendered operands -> LaTeX fragment
//!     - reduce:    recursive expression-tree walk, delegates to operators
//!     - text:      text-region paragraph join
//!     - symbols:   identifier normalization (Greek letters, LaTeX escapes)
//!     - assemble:  per-region dispatch, failure isolation, document
//!                  prologue/epilogue
//!
//! This is a pure library: it never prints and never touches the
//! filesystem. Per-region failures come back as data ([`RegionFailure`])
//! for the caller to report, and verbose-mode progress notes are collected
//! into [`Assembly::notes`] rather than written to stderr.

pub mod assemble;
pub mod error;
pub mod operators;
pub mod reduce;
pub mod symbols;
pub mod text;

pub use assemble::{Assembler, Assembly};
pub use error::{RegionFailure, RenderError};

use xmcd_parser::{Worksheet, WorksheetError};

/// Convert worksheet XML to a LaTeX document in one call.
///
/// Fails only for fatal conditions (corrupted XML, missing region list);
/// unconvertible regions are skipped and reported in the returned
/// [`Assembly::failures`].
pub fn convert(source: &str, verbose: bool) -> Result<Assembly, WorksheetError> {
    let worksheet = Worksheet::parse(source)?;
    let regions = worksheet.regions()?;
    Ok(Assembler::new(verbose).assemble(&regions))
}
