//! Document assembly
//!
//! Walks the worksheet's ordered regions, dispatches each to the math
//! reducer or the text renderer by its first child's tag, and isolates
//! per-region failures so one unsupported expression never aborts the
//! document. The buffer always opens with the fixed LaTeX prologue and
//! always closes with the epilogue, whatever happens in between.

use crate::error::{RegionFailure, RenderError};
use crate::reduce::reduce;
use crate::text::{self, LINE_BREAK};
use xmcd_parser::{Element, WORKSHEET_NS};

/// Fixed document preamble: report layout plus the AMS math packages.
pub const PROLOGUE: &str = "\\documentclass[10pt,a4paper]{report}\n\
\\usepackage[utf8]{inputenc}\n\
\\usepackage{amsmath}\n\
\\usepackage{amsfonts}\n\
\\usepackage{amssymb}\n\
\\begin{document}\n\
\\noindent\n";

/// Fixed document close.
pub const EPILOGUE: &str = "\\end{document}";

/// The result of assembling one worksheet: a complete LaTeX buffer, the
/// regions that had to be skipped, and (in verbose mode) progress notes.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub latex: String,
    pub failures: Vec<RegionFailure>,
    pub notes: Vec<String>,
}

/// Region-by-region document builder.
///
/// Verbosity is a constructed-in value, not process state: when set, the
/// assembler records one note per region describing how it was classified.
/// The notes are data for the caller to print; the assembler itself never
/// writes to stderr.
#[derive(Debug, Clone)]
pub struct Assembler {
    verbose: bool,
}

impl Assembler {
    pub fn new(verbose: bool) -> Self {
        Assembler { verbose }
    }

    /// Assemble the full LaTeX document from the ordered region list.
    ///
    /// Always completes: failures are collected per region (1-indexed) and
    /// rendering continues with the next region. Regions whose first child
    /// is neither a worksheet `math` nor `text` element (plots, programs,
    /// images) are skipped without a diagnostic; verbose mode records them
    /// in the notes.
    pub fn assemble(&self, regions: &[Element<'_, '_>]) -> Assembly {
        let mut latex = String::from(PROLOGUE);
        let mut failures = Vec::new();
        let mut notes = Vec::new();

        for (i, region) in regions.iter().enumerate() {
            let index = i + 1;
            let mut note = |msg: String| {
                if self.verbose {
                    notes.push(msg);
                }
            };

            let Some(body) = region.child(0) else {
                note(format!("region {}: empty, skipped", index));
                continue;
            };
            if body.namespace() != Some(WORKSHEET_NS) {
                note(format!(
                    "region {}: skipped foreign `{}` region",
                    index,
                    body.local_name()
                ));
                continue;
            }

            match body.local_name() {
                "math" => match render_math(body) {
                    Ok(fragment) => {
                        note(format!("region {}: math region", index));
                        latex.push_str(&fragment);
                    }
                    Err(error) => {
                        note(format!("region {}: math region failed: {}", index, error));
                        failures.push(RegionFailure { region: index, error });
                    }
                },
                "text" => {
                    note(format!("region {}: text region", index));
                    latex.push_str(&text::render(body));
                    latex.push_str(LINE_BREAK);
                }
                other => {
                    note(format!("region {}: skipped `{}` region", index, other));
                }
            }
        }

        latex.push_str(EPILOGUE);
        Assembly {
            latex,
            failures,
            notes,
        }
    }
}

/// The actual expression root sits one level below the `math` wrapper.
fn render_math(body: Element<'_, '_>) -> Result<String, RenderError> {
    let expr = body.child(0).ok_or(RenderError::MissingContent {
        tag: "math".to_string(),
    })?;
    Ok(format!("$ {} ${}", reduce(expr)?, LINE_BREAK))
}
