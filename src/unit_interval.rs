//! Type for values in the [0.0, 1.0] range.

use cssparser::{Parser, Token};

use crate::error::*;
use crate::parsers::Parse;
use crate::util;

/// Opacities and gradient stop offsets.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnitInterval(pub f64);

impl UnitInterval {
    pub fn clamp(val: f64) -> UnitInterval {
        UnitInterval(util::clamp(val, 0.0, 1.0))
    }
}

/// Accepts a number or a percentage, so `0.5` and `50%` are the same.
impl Parse for UnitInterval {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<UnitInterval, ParseError<'i>> {
        let loc = parser.current_source_location();

        let x = match *parser.next()? {
            Token::Number { value, .. } => value,
            Token::Percentage { unit_value, .. } => unit_value,
            ref tok => return Err(loc.new_unexpected_token_error(tok.clone())),
        };

        if x.is_finite() {
            Ok(UnitInterval::clamp(f64::from(x)))
        } else {
            Err(loc.new_custom_error(ValueErrorKind::value_error("expected finite number")))
        }
    }
}

/// Scales to an 8-bit alpha value, rounding to the nearest integer.
impl From<UnitInterval> for u8 {
    fn from(val: UnitInterval) -> u8 {
        let UnitInterval(x) = val;
        (x * 255.0 + 0.5).floor() as u8
    }
}
