//! The `Parse` trait for property values, and utilities for parsers.

use cssparser::{Parser, ParserInput, Token};

use crate::error::*;

/// Trait to parse values using `cssparser::Parser`.
pub trait Parse: Sized {
    /// Parses a value out of the `parser`.
    ///
    /// All value types should implement this for composability.
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>>;

    /// Convenience function to parse a value out of a `&str`.
    ///
    /// The whole string must be consumed; trailing garbage is an error.
    fn parse_str(s: &str) -> Result<Self, ParseError<'_>> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);

        let res = Self::parse(&mut parser)?;
        parser.expect_exhausted()?;

        Ok(res)
    }
}

/// Consumes a comma if it exists, or does nothing.
pub fn optional_comma(parser: &mut Parser<'_, '_>) {
    let _ = parser.try_parse(|p| p.expect_comma());
}

impl<T: Parse> Parse for Option<T> {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>> {
        T::parse(parser).map(Some)
    }
}

impl Parse for f64 {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>> {
        let loc = parser.current_source_location();
        let n = parser.expect_number()?;
        if n.is_finite() {
            Ok(f64::from(n))
        } else {
            Err(loc.new_custom_error(ValueErrorKind::value_error("expected finite number")))
        }
    }
}

impl Parse for i32 {
    /// CSS integer
    ///
    /// SVG1.1: <https://www.w3.org/TR/SVG11/types.html#DataTypeInteger>
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>> {
        Ok(parser.expect_integer()?)
    }
}

/// A number as found in presentation attributes like `stroke-width`.
///
/// Plain numbers and numbers with a `px` suffix are accepted; both are
/// user units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UserNumber(pub f64);

impl Parse for UserNumber {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>> {
        let loc = parser.current_source_location();

        let value = match *parser.next()? {
            Token::Number { value, .. } => value,
            Token::Dimension {
                value, ref unit, ..
            } if unit.eq_ignore_ascii_case("px") => value,
            ref tok => return Err(loc.new_unexpected_token_error(tok.clone())),
        };

        if value.is_finite() {
            Ok(UserNumber(f64::from(value)))
        } else {
            Err(loc.new_custom_error(ValueErrorKind::value_error("expected finite number")))
        }
    }
}

/// Parses a list of identifiers from a `cssparser::Parser`
///
/// # Example
///
/// ```
/// # use cssparser::{ParserInput, Parser};
/// # use svgpaint::parse_identifiers;
/// # fn main() -> Result<(), cssparser::BasicParseError<'static>> {
/// # let mut input = ParserInput::new("true");
/// # let mut parser = Parser::new(&mut input);
/// let my_boolean = parse_identifiers!(
///     parser,
///     "true" => true,
///     "false" => false,
/// )?;
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! parse_identifiers {
    ($parser:expr,
     $($str:expr => $val:expr,)+) => {
        {
            let loc = $parser.current_source_location();
            let token = $parser.next()?;

            match token {
                $(cssparser::Token::Ident(ref cow) if &**cow == $str => Ok($val),)+

                _ => Err(loc.new_basic_unexpected_token_error(token.clone()))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number() {
        assert_eq!(f64::parse_str("0").unwrap(), 0.0);
        assert_eq!(f64::parse_str("1.5").unwrap(), 1.5);
        assert_eq!(f64::parse_str("-2e2").unwrap(), -200.0);
    }

    #[test]
    fn invalid_number() {
        assert!(f64::parse_str("").is_err());
        assert!(f64::parse_str("1x").is_err());
        assert!(f64::parse_str("1 2").is_err());
    }

    #[test]
    fn parses_integer() {
        assert_eq!(i32::parse_str("0").unwrap(), 0);
        assert_eq!(i32::parse_str("1").unwrap(), 1);
        assert_eq!(i32::parse_str("-1").unwrap(), -1);
    }

    #[test]
    fn invalid_integer() {
        assert!(i32::parse_str("").is_err());
        assert!(i32::parse_str("1x").is_err());
        assert!(i32::parse_str("1.5").is_err());
    }

    #[test]
    fn parses_user_number() {
        assert_eq!(UserNumber::parse_str("2").unwrap(), UserNumber(2.0));
        assert_eq!(UserNumber::parse_str("2.5px").unwrap(), UserNumber(2.5));
        assert_eq!(UserNumber::parse_str("  3PX ").unwrap(), UserNumber(3.0));
    }

    #[test]
    fn invalid_user_number() {
        assert!(UserNumber::parse_str("").is_err());
        assert!(UserNumber::parse_str("2em").is_err());
        assert!(UserNumber::parse_str("50%").is_err());
        assert!(UserNumber::parse_str("wide").is_err());
    }
}
