//! Identifier normalization
//!
//! Mathcad variable names routinely carry Greek letters and other symbols
//! straight from the formula editor. `normalize` rewrites them to LaTeX
//! commands and escapes the ASCII characters LaTeX reserves; everything
//! else passes through untouched.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static UNICODE_TO_LATEX: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('α', "\\alpha"),
        ('β', "\\beta"),
        ('γ', "\\gamma"),
        ('δ', "\\delta"),
        ('ε', "\\varepsilon"),
        ('ζ', "\\zeta"),
        ('η', "\\eta"),
        ('θ', "\\theta"),
        ('ι', "\\iota"),
        ('κ', "\\kappa"),
        ('λ', "\\lambda"),
        ('μ', "\\mu"),
        ('µ', "\\mu"),
        ('ν', "\\nu"),
        ('ξ', "\\xi"),
        ('π', "\\pi"),
        ('ρ', "\\rho"),
        ('σ', "\\sigma"),
        ('τ', "\\tau"),
        ('υ', "\\upsilon"),
        ('φ', "\\varphi"),
        ('χ', "\\chi"),
        ('ψ', "\\psi"),
        ('ω', "\\omega"),
        ('Γ', "\\Gamma"),
        ('Δ', "\\Delta"),
        ('Θ', "\\Theta"),
        ('Λ', "\\Lambda"),
        ('Ξ', "\\Xi"),
        ('Π', "\\Pi"),
        ('Σ', "\\Sigma"),
        ('Υ', "\\Upsilon"),
        ('Φ', "\\Phi"),
        ('Ψ', "\\Psi"),
        ('Ω', "\\Omega"),
        ('∞', "\\infty"),
        ('±', "\\pm"),
        ('°', "^{\\circ}"),
        ('′', "'"),
        ('·', "\\cdot"),
    ])
});

/// Characters LaTeX treats as syntax when they appear in identifier text.
const ESCAPED_ASCII: &[char] = &['_', '%', '&', '#', '$'];

/// Rewrite an identifier for LaTeX math mode.
///
/// Replacements ending in a letter get a trailing space so a following
/// letter cannot fuse into the command name (`αx` -> `\alpha x`, not
/// `\alphax`); replacements like `'` need no separator. The result is
/// right-trimmed so lone symbols stay clean.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if let Some(command) = UNICODE_TO_LATEX.get(&ch) {
            out.push_str(command);
            if command.ends_with(|c: char| c.is_ascii_alphabetic()) {
                out.push(' ');
            }
        } else if ESCAPED_ASCII.contains(&ch) {
            out.push('\\');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}
