//! Expression-tree reduction
//!
//! A strict recursive walk over one math region's expression tree. Each
//! node is classified by its namespace-free tag, children are reduced to
//! LaTeX strings first, and combination is delegated to the operator
//! templates in [`crate::operators`]. Depth is bounded by the expression
//! nesting of the worksheet, so plain recursion is fine.

use crate::error::RenderError;
use crate::operators;
use crate::symbols;
use xmcd_parser::Element;

/// Reduce one expression subtree to its LaTeX rendering.
///
/// Never returns an empty string for a supported construct; anything the
/// vocabulary does not cover fails with a [`RenderError`] that the caller
/// contains at the region boundary.
pub fn reduce(node: Element<'_, '_>) -> Result<String, RenderError> {
    match node.local_name() {
        "apply" => reduce_apply(node),
        "parens" => {
            let inner = node.child(0).ok_or_else(|| missing(node))?;
            operators::format("parens", &reduce(inner)?, None)
        }
        // Numeric literal, passed through verbatim.
        "real" => Ok(text_of(node)?.to_string()),
        // Provenance wraps an expression's edit history; only the last
        // child is the current value, everything before it is stale.
        "provenance" => {
            let current = node.children().last().ok_or_else(|| missing(node))?;
            reduce(current)
        }
        "id" => Ok(symbols::normalize(text_of(node)?)),
        // A definition renders exactly like an equality.
        "define" => {
            let lhs = node.child(0).ok_or_else(|| missing(node))?;
            let rhs = node.child(1).ok_or_else(|| missing(node))?;
            operators::format("equal", &reduce(lhs)?, Some(&reduce(rhs)?))
        }
        // An empty slot the author never filled in.
        "placeholder" => Ok(" ".to_string()),
        other => Err(RenderError::UnsupportedTag {
            tag: other.to_string(),
        }),
    }
}

/// `apply` carries its operator as the first child's tag; the remaining
/// one or two children are the operands.
fn reduce_apply(node: Element<'_, '_>) -> Result<String, RenderError> {
    let children: Vec<_> = node.children().collect();
    match children.len() {
        3 => {
            let x = reduce(children[1])?;
            let y = reduce(children[2])?;
            operators::format(children[0].local_name(), &x, Some(&y))
        }
        2 => {
            let x = reduce(children[1])?;
            operators::format(children[0].local_name(), &x, None)
        }
        count => Err(RenderError::ApplyArity { count }),
    }
}

fn text_of<'a>(node: Element<'a, '_>) -> Result<&'a str, RenderError> {
    node.text().ok_or_else(|| missing(node))
}

fn missing(node: Element<'_, '_>) -> RenderError {
    RenderError::MissingContent {
        tag: node.local_name().to_string(),
    }
}
