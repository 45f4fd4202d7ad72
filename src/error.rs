//! Error types.

use std::fmt;

use cssparser::{BasicParseError, BasicParseErrorKind};
use thiserror::Error;

/// A short-lived error.
///
/// The lifetime of the error is the same as the `cssparser::ParserInput` that
/// was used to create a `cssparser::Parser`.  That is, it is the lifetime of
/// the string data that is being parsed.
pub type ParseError<'i> = cssparser::ParseError<'i, ValueErrorKind>;

/// A simple error which refers to a property's value
#[derive(Debug, Clone, PartialEq)]
pub enum ValueErrorKind {
    /// The value could not be parsed
    Parse(String),

    // The value could be parsed, but is invalid
    Value(String),
}

impl ValueErrorKind {
    pub fn parse_error(s: &str) -> ValueErrorKind {
        ValueErrorKind::Parse(s.to_string())
    }

    pub fn value_error(s: &str) -> ValueErrorKind {
        ValueErrorKind::Value(s.to_string())
    }
}

impl fmt::Display for ValueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ValueErrorKind::Parse(ref s) => write!(f, "parse error: {s}"),

            ValueErrorKind::Value(ref s) => write!(f, "invalid value: {s}"),
        }
    }
}

impl<'a> From<BasicParseError<'a>> for ValueErrorKind {
    fn from(e: BasicParseError<'_>) -> ValueErrorKind {
        let BasicParseError { kind, .. } = e;

        let msg = match kind {
            BasicParseErrorKind::UnexpectedToken(_) => "unexpected token",
            BasicParseErrorKind::EndOfInput => "unexpected end of input",
            BasicParseErrorKind::AtRuleInvalid(_) => "invalid @-rule",
            BasicParseErrorKind::AtRuleBodyInvalid => "invalid @-rule body",
            BasicParseErrorKind::QualifiedRuleInvalid => "invalid qualified rule",
        };

        ValueErrorKind::parse_error(msg)
    }
}

/// Indicates that a transform is not invertible.
///
/// Gradient shaders need the inverse of the gradient's transform, so a
/// singular `gradientTransform` cannot be turned into a shader.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidTransform;

impl fmt::Display for InvalidTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform is not invertible")
    }
}

impl std::error::Error for InvalidTransform {}

/// Errors from parsing a color string.
///
/// These are never fatal; a fill or stroke whose color does not parse is
/// simply not painted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A `#RGB` or `#RRGGBB` value with the wrong length or non-hex digits.
    #[error("invalid hex color \"{0}\"")]
    InvalidHex(String),

    /// An `rgb(...)` value that does not have exactly three integer components.
    #[error("invalid rgb() color \"{0}\"")]
    InvalidRgb(String),

    /// Neither a color keyword nor a bare hex number.
    #[error("unknown color \"{0}\"")]
    UnknownColor(String),
}

/// Errors that abort paint resolution for the current document.
///
/// All of these indicate a malformed document; they are not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A `url(#id)` paint or a shader lookup named a gradient that was never registered.
    #[error("no gradient found for id \"{0}\"")]
    UnknownGradientId(String),

    /// A gradient's `xlink:href` points to an id that was never registered.
    #[error("could not resolve xlink \"{xlink}\" of gradient \"{id}\"")]
    UnresolvableXlink { id: String, xlink: String },

    /// Following `xlink:href` references from this gradient leads back to it.
    #[error("circular xlink reference through gradient \"{0}\"")]
    CyclicXlink(String),

    /// The gradient's transform is not invertible, so no shader can be built for it.
    ///
    /// Unlike the other variants, the paint resolver does not pass this on; the
    /// fill or stroke that uses the gradient is just not painted.
    #[error("gradient \"{0}\" has a non-invertible transform")]
    InvalidTransform(String),
}

impl ResolveError {
    /// The id of the gradient that the error is about.
    pub fn id(&self) -> &str {
        match *self {
            ResolveError::UnknownGradientId(ref id)
            | ResolveError::UnresolvableXlink { ref id, .. }
            | ResolveError::CyclicXlink(ref id)
            | ResolveError::InvalidTransform(ref id) => id,
        }
    }
}
