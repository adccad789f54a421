//! LaTeX templates for Mathcad operators
//!
//! Pure string combination: operator key plus one or two already-rendered
//! operands in, LaTeX fragment out. No tree knowledge lives here.

use crate::error::RenderError;

/// Apply the LaTeX template for `operator` to its rendered operands.
///
/// `y` present selects the binary table, absent the unary table. Keys the
/// table does not define fail with [`RenderError::UnknownOperator`] naming
/// the key and arity, so missing coverage surfaces as a diagnostic instead
/// of silently dropped output.
pub fn format(operator: &str, x: &str, y: Option<&str>) -> Result<String, RenderError> {
    match y {
        Some(y) => format_binary(operator, x, y),
        None => format_unary(operator, x),
    }
}

fn format_binary(operator: &str, x: &str, y: &str) -> Result<String, RenderError> {
    let rendered = match operator {
        "plus" => format!("{} + {}", x, y),
        "minus" => format!("{} - {}", x, y),
        "mult" => format!("{} \\cdot {}", x, y),
        "div" => format!("\\frac{{{}}}{{{}}}", x, y),
        "equal" => format!("{} = {}", x, y),
        "pow" => format!("{}^{{{}}}", x, y),
        "nthRoot" => format!("\\sqrt[{}]{{{}}}", x, y),
        "lessThan" => format!("{} < {}", x, y),
        "greaterThan" => format!("{} > {}", x, y),
        "lessOrEqual" => format!("{} \\leq {}", x, y),
        "greaterOrEqual" => format!("{} \\geq {}", x, y),
        "and" => format!("{} \\land {}", x, y),
        "or" => format!("{} \\lor {}", x, y),
        _ => {
            return Err(RenderError::UnknownOperator {
                operator: operator.to_string(),
                arity: 2,
            })
        }
    };
    Ok(rendered)
}

fn format_unary(operator: &str, x: &str) -> Result<String, RenderError> {
    let rendered = match operator {
        "parens" => format!("\\left({}\\right)", x),
        "sqrt" => format!("\\sqrt{{{}}}", x),
        "absval" => format!("\\left|{}\\right|", x),
        "neg" => format!("-{}", x),
        _ => {
            return Err(RenderError::UnknownOperator {
                operator: operator.to_string(),
                arity: 1,
            })
        }
    };
    Ok(rendered)
}
