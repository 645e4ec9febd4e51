//! Value types carried by tokens and shared between the scanner
//! and whatever consumes its output.

use core::fmt::{Display, Formatter};
use core::num::FpCategory;

/// A line number in the source code, 1-indexed.
pub type Line = usize;

/// Decoded literal values inside the Lox language.
///
/// The raw source text is kept on the token as its lexeme,
/// so only the decoded value lives here.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum Literal {
    /// A string, with no escape sequences supported currently.
    String(String),
    /// A number, represented as a double-precision floating point number.
    Number(f64),
}

impl Literal {
    /// The string value, if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Literal::String(ref value) => Some(value.as_str()),
            Literal::Number(_) => None,
        }
    }

    /// The numeric value, if this is a number literal.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match *self {
            Literal::Number(value) => Some(value),
            Literal::String(_) => None,
        }
    }
}

/// Strings print verbatim. Numbers always carry a fractional part,
/// so `5` prints as `5.0`, and `1e16` prints as `1.0E16`.
impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            Literal::String(ref value) => f.write_str(value),
            Literal::Number(value) => write_number(f, value),
        }
    }
}

/// Writes a number the way the reference Lox prints doubles: plain decimals
/// for magnitudes in `[1e-3, 1e7)`, scientific notation with an upper-case
/// `E` outside of it.
fn write_number(f: &mut Formatter<'_>, value: f64) -> core::fmt::Result {
    match value.classify() {
        FpCategory::Nan => f.write_str("NaN"),
        FpCategory::Infinite if value.is_sign_negative() => f.write_str("-Infinity"),
        FpCategory::Infinite => f.write_str("Infinity"),
        FpCategory::Zero => write!(f, "{value:?}"),
        FpCategory::Normal | FpCategory::Subnormal if (1e-3..1e7).contains(&value.abs()) => {
            write!(f, "{value:?}")
        }
        FpCategory::Normal | FpCategory::Subnormal => {
            let scientific = format!("{value:e}");
            let (mantissa, exponent) = scientific
                .split_once('e')
                .unwrap_or((scientific.as_str(), "0"));
            if mantissa.contains('.') {
                write!(f, "{mantissa}E{exponent}")
            } else {
                write!(f, "{mantissa}.0E{exponent}")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Literal;

    #[test]
    fn numbers_display_with_fraction() {
        assert_eq!(Literal::Number(5.0).to_string(), "5.0");
        assert_eq!(Literal::Number(12.25).to_string(), "12.25");
        assert_eq!(Literal::Number(0.0).to_string(), "0.0");
        assert_eq!(Literal::Number(9_999_999.0).to_string(), "9999999.0");
    }

    #[test]
    fn large_and_tiny_numbers_use_exponent_notation() {
        assert_eq!(Literal::Number(10_000_000.0).to_string(), "1.0E7");
        assert_eq!(Literal::Number(1e16).to_string(), "1.0E16");
        assert_eq!(Literal::Number(12_345_678.0).to_string(), "1.2345678E7");
        assert_eq!(Literal::Number(0.0001).to_string(), "1.0E-4");
        assert_eq!(Literal::Number(0.001).to_string(), "0.001");
    }

    #[test]
    fn strings_display_verbatim() {
        let literal = Literal::String("Hello, World!".to_owned());
        assert_eq!(literal.to_string(), "Hello, World!");
        assert_eq!(literal.as_str(), Some("Hello, World!"));
        assert_eq!(literal.as_number(), None);
    }
}
