//! Lists of numbers separated by commas and/or whitespace.

use cssparser::{Parser, ParserInput};

use crate::error::*;
use crate::parsers::{optional_comma, Parse};

#[derive(Eq, PartialEq)]
pub enum NumberListLength {
    Exact(usize),
    Unbounded,
}

/// A list like `1, 2 3`, with elements of type `T`.
///
/// `rgb()` color components use `NumberList<i32>`.
#[derive(Debug, PartialEq)]
pub struct NumberList<T>(pub Vec<T>);

impl<T: Parse> NumberList<T> {
    pub fn parse<'i>(
        parser: &mut Parser<'i, '_>,
        length: NumberListLength,
    ) -> Result<Self, ParseError<'i>> {
        let mut v = match length {
            NumberListLength::Exact(l) if l > 0 => Vec::<T>::with_capacity(l),
            NumberListLength::Exact(_) => unreachable!("NumberListLength::Exact cannot be 0"),
            NumberListLength::Unbounded => Vec::<T>::new(),
        };

        if parser.is_exhausted() && length == NumberListLength::Unbounded {
            return Ok(NumberList(v));
        }

        for i in 0.. {
            if i != 0 {
                optional_comma(parser);
            }

            v.push(T::parse(parser)?);

            if let NumberListLength::Exact(l) = length {
                if i + 1 == l {
                    break;
                }
            }

            if parser.is_exhausted() {
                match length {
                    NumberListLength::Exact(l) => {
                        if i + 1 == l {
                            break;
                        }
                    }
                    _ => break,
                }
            }
        }

        Ok(NumberList(v))
    }

    pub fn parse_str(s: &str, length: NumberListLength) -> Result<NumberList<T>, ParseError<'_>> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);

        let res = Self::parse(&mut parser, length)?;
        parser.expect_exhausted()?;
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_list() {
        assert_eq!(
            NumberList::<f64>::parse_str("5", NumberListLength::Exact(1)),
            Ok(NumberList(vec![5.0]))
        );

        assert_eq!(
            NumberList::<f64>::parse_str("1 2 3 4", NumberListLength::Exact(4)),
            Ok(NumberList(vec![1.0, 2.0, 3.0, 4.0]))
        );

        assert_eq!(
            NumberList::<f64>::parse_str("", NumberListLength::Unbounded),
            Ok(NumberList(vec![]))
        );

        assert_eq!(
            NumberList::<f64>::parse_str("1, 2, 3.0, 4, 5", NumberListLength::Unbounded),
            Ok(NumberList(vec![1.0, 2.0, 3.0, 4.0, 5.0]))
        );
    }

    #[test]
    fn parses_integer_list() {
        assert_eq!(
            NumberList::<i32>::parse_str("255, 0 ,128", NumberListLength::Unbounded),
            Ok(NumberList(vec![255, 0, 128]))
        );

        assert!(NumberList::<i32>::parse_str("1.5, 2", NumberListLength::Unbounded).is_err());
    }

    #[test]
    fn errors_on_invalid_number_list() {
        // empty
        assert!(NumberList::<f64>::parse_str("", NumberListLength::Exact(1)).is_err());

        // garbage
        assert!(NumberList::<f64>::parse_str("foo", NumberListLength::Exact(1)).is_err());
        assert!(NumberList::<f64>::parse_str("1foo", NumberListLength::Exact(2)).is_err());
        assert!(NumberList::<f64>::parse_str("1 foo", NumberListLength::Exact(2)).is_err());
        assert!(NumberList::<f64>::parse_str("1,foo", NumberListLength::Exact(2)).is_err());

        // too many
        assert!(NumberList::<f64>::parse_str("1 2", NumberListLength::Exact(1)).is_err());

        // extra token
        assert!(NumberList::<f64>::parse_str("1,", NumberListLength::Exact(1)).is_err());
        assert!(NumberList::<f64>::parse_str("1,", NumberListLength::Unbounded).is_err());

        // too few
        assert!(NumberList::<f64>::parse_str("1", NumberListLength::Exact(2)).is_err());
    }
}
