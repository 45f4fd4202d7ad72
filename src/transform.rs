//! Affine transforms for `gradientTransform`.
//!
//! [`TransformAttribute`] parses the [`transform` attribute][attr] grammar from
//! SVG1.1, which is also what `gradientTransform` uses.  Gradient shaders need
//! the inverse of the resulting [`Transform`], so a singular one cannot be used.
//!
//! [attr]: https://www.w3.org/TR/SVG11/coords.html#TransformAttribute

use cssparser::{Parser, Token};

use crate::angle::Angle;
use crate::error::*;
use crate::parsers::{optional_comma, Parse};

/// A 2D affine matrix, in cairo's field order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Transform {
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Transform {
        Transform {
            xx,
            yx,
            xy,
            yy,
            x0,
            y0,
        }
    }

    pub fn identity() -> Transform {
        Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn new_translate(tx: f64, ty: f64) -> Transform {
        Transform::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn new_scale(sx: f64, sy: f64) -> Transform {
        Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn new_rotate(angle: Angle) -> Transform {
        let (s, c) = angle.radians().sin_cos();
        Transform::new(c, s, -s, c, 0.0, 0.0)
    }

    pub fn new_skew_x(angle: Angle) -> Transform {
        Transform::new(1.0, 0.0, angle.radians().tan(), 1.0, 0.0, 0.0)
    }

    pub fn new_skew_y(angle: Angle) -> Transform {
        Transform::new(1.0, angle.radians().tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// The transform that applies `self` to a point first, and then `next`.
    #[must_use]
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            xx: self.xx * next.xx + self.yx * next.xy,
            yx: self.xx * next.yx + self.yx * next.yy,
            xy: self.xy * next.xx + self.yy * next.xy,
            yy: self.xy * next.yx + self.yy * next.yy,
            x0: self.x0 * next.xx + self.y0 * next.xy + next.x0,
            y0: self.x0 * next.yx + self.y0 * next.yy + next.y0,
        }
    }

    fn determinant(&self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    #[must_use]
    pub fn invert(&self) -> Option<Transform> {
        if !self.is_invertible() {
            return None;
        }

        let inv = 1.0 / self.determinant();

        Some(Transform::new(
            inv * self.yy,
            -inv * self.yx,
            -inv * self.xy,
            inv * self.xx,
            inv * (self.xy * self.y0 - self.yy * self.x0),
            inv * (self.yx * self.x0 - self.xx * self.y0),
        ))
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::identity()
    }
}

#[cfg(feature = "cairo")]
impl From<Transform> for cairo::Matrix {
    fn from(t: Transform) -> Self {
        Self::new(t.xx, t.yx, t.xy, t.yy, t.x0, t.y0)
    }
}

/// A parsed `gradientTransform` value.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct TransformAttribute(Transform);

impl TransformAttribute {
    pub fn to_transform(self) -> Transform {
        self.0
    }
}

impl Parse for TransformAttribute {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<TransformAttribute, ParseError<'i>> {
        let mut transform = Transform::identity();

        // The rightmost function in the list is the first one applied to a point.
        while !parser.is_exhausted() {
            transform = parse_function(parser)?.then(&transform);
            optional_comma(parser);
        }

        Ok(TransformAttribute(transform))
    }
}

fn parse_function<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    let loc = parser.current_source_location();

    let name = match parser.next()?.clone() {
        Token::Function(name) => name,

        // SVG1.1 allows whitespace between the name and the parenthesis.
        Token::Ident(name) => {
            parser.expect_parenthesis_block()?;
            name
        }

        tok => return Err(loc.new_unexpected_token_error(tok)),
    };

    let args = parser.parse_nested_block(|p| parse_arguments(p))?;

    let transform = match (&*name, args.as_slice()) {
        ("matrix", &[xx, yx, xy, yy, x0, y0]) => Transform::new(xx, yx, xy, yy, x0, y0),

        ("translate", &[tx]) => Transform::new_translate(tx, 0.0),
        ("translate", &[tx, ty]) => Transform::new_translate(tx, ty),

        ("scale", &[s]) => Transform::new_scale(s, s),
        ("scale", &[sx, sy]) => Transform::new_scale(sx, sy),

        ("rotate", &[deg]) => Transform::new_rotate(Angle::from_degrees(deg)),
        ("rotate", &[deg, cx, cy]) => Transform::new_translate(-cx, -cy)
            .then(&Transform::new_rotate(Angle::from_degrees(deg)))
            .then(&Transform::new_translate(cx, cy)),

        ("skewX", &[deg]) => Transform::new_skew_x(Angle::from_degrees(deg)),
        ("skewY", &[deg]) => Transform::new_skew_y(Angle::from_degrees(deg)),

        _ => {
            return Err(loc.new_custom_error(ValueErrorKind::parse_error(
                "expected matrix(6), translate(1-2), scale(1-2), rotate(1|3), skewX(1) or skewY(1)",
            )))
        }
    };

    Ok(transform)
}

/// Numbers separated by whitespace or single commas; a trailing comma is an error.
fn parse_arguments<'i>(parser: &mut Parser<'i, '_>) -> Result<Vec<f64>, ParseError<'i>> {
    let mut args = Vec::new();

    while !parser.is_exhausted() {
        if !args.is_empty() {
            optional_comma(parser);
        }

        args.push(f64::parse(parser)?);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn gradient_transform(s: &str) -> Option<Transform> {
        TransformAttribute::parse_str(s)
            .ok()
            .map(TransformAttribute::to_transform)
    }

    fn assert_close(a: Transform, b: Transform) {
        let pairs = [
            (a.xx, b.xx),
            (a.yx, b.yx),
            (a.xy, b.xy),
            (a.yy, b.yy),
            (a.x0, b.x0),
            (a.y0, b.y0),
        ];

        for (x, y) in pairs {
            assert!(approx_eq!(f64, x, y, epsilon = 1e-12), "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn empty_gradient_transform_is_identity() {
        assert_eq!(gradient_transform(""), Some(Transform::identity()));
        assert_eq!(gradient_transform("   "), Some(Transform::identity()));
    }

    #[test]
    fn single_functions() {
        assert_eq!(
            gradient_transform("matrix(1,2,3,4 5 6)"),
            Some(Transform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0))
        );
        assert_eq!(
            gradient_transform("translate(-1)"),
            Some(Transform::new_translate(-1.0, 0.0))
        );
        assert_eq!(
            gradient_transform("scale (3)"),
            Some(Transform::new_scale(3.0, 3.0))
        );
        assert_eq!(
            gradient_transform("scale(1, 0)"),
            Some(Transform::new_scale(1.0, 0.0))
        );
    }

    #[test]
    fn list_is_applied_right_to_left() {
        assert_eq!(
            gradient_transform("translate(10, 20) scale(2)"),
            Some(Transform::new(2.0, 0.0, 0.0, 2.0, 10.0, 20.0))
        );

        assert_eq!(
            gradient_transform("scale(2),translate(10 20)"),
            Some(Transform::new(2.0, 0.0, 0.0, 2.0, 20.0, 40.0))
        );
    }

    #[test]
    fn rotates_around_center() {
        let t = gradient_transform("rotate(90 10 10)").unwrap();
        assert_close(t, Transform::new(0.0, 1.0, -1.0, 0.0, 20.0, 0.0));
    }

    #[test]
    fn skews() {
        let t = gradient_transform("skewX(45)").unwrap();
        assert_close(t, Transform::new(1.0, 0.0, 1.0, 1.0, 0.0, 0.0));

        let t = gradient_transform("skewY(45)").unwrap();
        assert_close(t, Transform::new(1.0, 1.0, 0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn rejects_malformed_gradient_transforms() {
        for s in [
            "foo",
            "scale",
            "matrix(1 2 3 4 5)",
            "translate(1 2 3)",
            "translate(1,)",
            "scale()",
            "rotate(30 1)",
            "skewX(1, 2)",
            "perspective(1)",
        ] {
            assert!(gradient_transform(s).is_none(), "{} should not parse", s);
        }
    }

    #[test]
    fn inverse_undoes_gradient_transform() {
        let t = gradient_transform("translate(5 -3) rotate(30) scale(2 4)").unwrap();
        let inverse = t.invert().unwrap();

        assert_close(t.then(&inverse), Transform::identity());
        assert_close(inverse.then(&t), Transform::identity());
    }

    #[test]
    fn singular_transforms_have_no_inverse() {
        for t in [
            Transform::new_scale(1.0, 0.0),
            Transform::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0),
            Transform::new_scale(f64::INFINITY, 1.0),
        ] {
            assert!(!t.is_invertible());
            assert_eq!(t.invert(), None);
        }
    }
}
