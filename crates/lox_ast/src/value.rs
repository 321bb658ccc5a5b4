//! Literal values held by expression trees.

use crate::token::Literal;
use std::fmt;

/// The value of a literal expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Nil,
    Bool(bool),
    Number(f64),
    Text(&'a str),
}

impl<'a> From<Literal<'a>> for LiteralValue<'a> {
    fn from(literal: Literal<'a>) -> Self {
        match literal {
            Literal::Number(n) => LiteralValue::Number(n),
            Literal::Text(s) => LiteralValue::Text(s),
        }
    }
}

impl fmt::Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => f.write_str("nil"),
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => f.write_str(&format_number(*n)),
            LiteralValue::Text(s) => f.write_str(s),
        }
    }
}

/// Format a number the way Lox token dumps show it: at least one
/// fractional digit (`123.0`, `45.67`), and exponent form outside
/// `[1e-3, 1e7)` (`1.0E22`, `1.5E-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        let scientific = format!("{:e}", n);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        if mantissa.contains('.') {
            format!("{}E{}", mantissa, exponent)
        } else {
            format!("{}.0E{}", mantissa, exponent)
        }
    } else if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}
