//! Resolving `fill` and `stroke` into paint for the renderer.
//!
//! For each drawable element the document walker asks a [`PaintResolver`] for the
//! element's fill and then its stroke.  Each call looks at the element's cascaded
//! properties and produces either nothing, meaning that this part of the element is
//! not painted, or a fresh [`PaintState`].  A paint state never carries anything over
//! from a previous call; [`PaintState::apply_to`] resets the renderer's paint before
//! setting it up.
//!
//! The rules are SVG's:
//!
//! * `display="none"`, or a `fill`/`stroke` of `none`, paints nothing.
//!
//! * An element with neither `fill` nor `stroke` is filled with opaque black.  If it
//!   only has a `stroke`, it is not filled.
//!
//! * `url(#id)` paints with the gradient registered under `id`.  A reference to a
//!   gradient that does not exist, or whose `xlink:href` chain cannot be resolved,
//!   is an error for the whole document.  A gradient with a non-invertible
//!   `gradientTransform` just paints nothing.
//!
//! * Anything else is a color.  A color that does not parse is not an error; that
//!   part of the element is just not painted.
//!
//! * The alpha comes from `opacity` if it is set, or else from `fill-opacity` or
//!   `stroke-opacity`, or else it is opaque.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cssparser::Parser;

use crate::api::PaintOptions;
use crate::bbox::BoundsTracker;
use crate::color::{self, with_alpha, Color, ColorParser};
use crate::error::*;
use crate::gradient::{
    ColorStop, Gradient, GradientRegistry, GradientType, GradientVariant, SpreadMethod,
};
use crate::paint_server::{PlainShaderFactory, ShaderFactory};
use crate::parsers::Parse;
use crate::properties::SvgProperties;
use crate::rect::Rect;
use crate::session::Session;
use crate::transform::TransformAttribute;
use crate::unit_interval::UnitInterval;

/// Whether a paint is for the inside or the outline of a shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

impl PaintStyle {
    fn property(self) -> &'static str {
        match self {
            PaintStyle::Fill => "fill",
            PaintStyle::Stroke => "stroke",
        }
    }

    fn opacity_property(self) -> &'static str {
        match self {
            PaintStyle::Fill => "fill-opacity",
            PaintStyle::Stroke => "stroke-opacity",
        }
    }
}

impl fmt::Display for PaintStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.property())
    }
}

/// `stroke-linecap` property.
///
/// `Default` means "whatever the renderer uses when it is not told".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineCap {
    Default,
    Butt,
    Round,
    Square,
}

enum_default!(LineCap, LineCap::Default);

impl Parse for LineCap {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<LineCap, ParseError<'i>> {
        Ok(parse_identifiers!(
            parser,
            "butt" => LineCap::Butt,
            "round" => LineCap::Round,
            "square" => LineCap::Square,
        )?)
    }
}

/// `stroke-linejoin` property.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineJoin {
    Default,
    Miter,
    Round,
    Bevel,
}

enum_default!(LineJoin, LineJoin::Default);

impl Parse for LineJoin {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<LineJoin, ParseError<'i>> {
        Ok(parse_identifiers!(
            parser,
            "miter" => LineJoin::Miter,
            "round" => LineJoin::Round,
            "bevel" => LineJoin::Bevel,
        )?)
    }
}

/// What to paint with.
pub enum PaintSource<S> {
    SolidColor(Color),
    Gradient(Rc<S>),
}

impl<S> Clone for PaintSource<S> {
    fn clone(&self) -> Self {
        match *self {
            PaintSource::SolidColor(c) => PaintSource::SolidColor(c),
            PaintSource::Gradient(ref s) => PaintSource::Gradient(s.clone()),
        }
    }
}

impl<S> fmt::Debug for PaintSource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PaintSource::SolidColor(c) => write!(
                f,
                "PaintSource::SolidColor(#{:08x})",
                color::color_to_u32(c)
            ),
            PaintSource::Gradient(_) => write!(f, "PaintSource::Gradient"),
        }
    }
}

/// Gradients are equal if they are the same cached shader.
impl<S> PartialEq for PaintSource<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PaintSource::SolidColor(a), PaintSource::SolidColor(b)) => a == b,
            (PaintSource::Gradient(a), PaintSource::Gradient(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The renderer's paint object, as seen from here.
pub trait PaintSink<S> {
    fn reset(&mut self, style: PaintStyle);
    fn set_antialias(&mut self, antialias: bool);
    fn set_color(&mut self, color: Color);
    fn set_alpha(&mut self, alpha: u8);
    fn set_shader(&mut self, shader: &Rc<S>);
    fn set_stroke_width(&mut self, width: f64);
    fn set_stroke_cap(&mut self, cap: LineCap);
    fn set_stroke_join(&mut self, join: LineJoin);
}

/// Resolved paint for one fill or stroke.
pub struct PaintState<S> {
    style: PaintStyle,
    antialias: bool,
    source: PaintSource<S>,
    stroke_width: Option<f64>,
    line_cap: LineCap,
    line_join: LineJoin,
}

impl<S> Clone for PaintState<S> {
    fn clone(&self) -> Self {
        PaintState {
            style: self.style,
            antialias: self.antialias,
            source: self.source.clone(),
            stroke_width: self.stroke_width,
            line_cap: self.line_cap,
            line_join: self.line_join,
        }
    }
}

impl<S> fmt::Debug for PaintState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintState")
            .field("style", &self.style)
            .field("antialias", &self.antialias)
            .field("source", &self.source)
            .field("stroke_width", &self.stroke_width)
            .field("line_cap", &self.line_cap)
            .field("line_join", &self.line_join)
            .finish()
    }
}

impl<S> PaintState<S> {
    fn new(style: PaintStyle, antialias: bool, source: PaintSource<S>) -> PaintState<S> {
        PaintState {
            style,
            antialias,
            source,
            stroke_width: None,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }

    pub fn style(&self) -> PaintStyle {
        self.style
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }

    pub fn source(&self) -> &PaintSource<S> {
        &self.source
    }

    /// The color with its alpha, if this paints with a solid color.
    pub fn color(&self) -> Option<Color> {
        match self.source {
            PaintSource::SolidColor(c) => Some(c),
            PaintSource::Gradient(_) => None,
        }
    }

    pub fn shader(&self) -> Option<&Rc<S>> {
        match self.source {
            PaintSource::SolidColor(_) => None,
            PaintSource::Gradient(ref s) => Some(s),
        }
    }

    /// `None` if `stroke-width` was not specified.
    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }

    /// Resets the `sink` and sets it up with this paint.
    ///
    /// Stroke parameters are only set for strokes, and the stroke width only if
    /// it was specified.
    pub fn apply_to<K: PaintSink<S> + ?Sized>(&self, sink: &mut K) {
        sink.reset(self.style);
        sink.set_antialias(self.antialias);

        match self.source {
            PaintSource::SolidColor(c) => {
                sink.set_color(c);
                sink.set_alpha(c.a);
            }

            PaintSource::Gradient(ref shader) => sink.set_shader(shader),
        }

        if self.style == PaintStyle::Stroke {
            if let Some(width) = self.stroke_width {
                sink.set_stroke_width(width);
            }

            sink.set_stroke_cap(self.line_cap);
            sink.set_stroke_join(self.line_join);
        }
    }
}

/// Paint resolution for one document.
///
/// Holds the document's gradients and the bounds of what has been drawn.  Use
/// [`reset`](#method.reset) before reusing it for another document.
pub struct PaintResolver<F: ShaderFactory = PlainShaderFactory> {
    session: Session,
    colors: ColorParser,
    gradients: GradientRegistry<F>,
    bounds: BoundsTracker,
    antialias: bool,
    base_path: Option<PathBuf>,
}

impl<F: ShaderFactory> PaintResolver<F> {
    pub fn new(options: PaintOptions, factory: F) -> PaintResolver<F> {
        let session = options.session();

        let PaintOptions {
            antialias,
            color_mapper,
            base_path,
            ..
        } = options;

        let colors = match color_mapper {
            Some(mapper) => ColorParser::with_mapper(mapper),
            None => ColorParser::new(),
        };

        PaintResolver {
            session,
            colors,
            gradients: GradientRegistry::new(factory),
            bounds: BoundsTracker::new(),
            antialias,
            base_path,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn color_parser(&self) -> &ColorParser {
        &self.colors
    }

    /// Directory for resolving the document's external assets, if one was configured.
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    pub fn gradients(&self) -> &GradientRegistry<F> {
        &self.gradients
    }

    pub fn gradients_mut(&mut self) -> &mut GradientRegistry<F> {
        &mut self.gradients
    }

    pub fn bounds(&self) -> &BoundsTracker {
        &self.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut BoundsTracker {
        &mut self.bounds
    }

    /// The extents of everything drawn so far.
    pub fn computed_bounds(&self) -> Option<Rect> {
        self.bounds.rect()
    }

    /// Resolves the fill of an element.
    ///
    /// Returns `Ok(None)` if the element is not filled.
    pub fn resolve_fill<P: SvgProperties + ?Sized>(
        &mut self,
        props: &P,
    ) -> Result<Option<PaintState<F::Shader>>, ResolveError> {
        if is_display_none(props) || is_none(props, PaintStyle::Fill) {
            return Ok(None);
        }

        match props.string_property("fill") {
            Some(fill) => self.resolve_paint(props, fill, PaintStyle::Fill),

            None if props.string_property("stroke").is_none() => {
                // Default is black fill; the color mapper is not applied here.
                Ok(Some(PaintState::new(
                    PaintStyle::Fill,
                    self.antialias,
                    PaintSource::SolidColor(with_alpha(color::BLACK, 255)),
                )))
            }

            None => Ok(None),
        }
    }

    /// Resolves the stroke of an element.
    ///
    /// Returns `Ok(None)` if the element is not stroked.
    pub fn resolve_stroke<P: SvgProperties + ?Sized>(
        &mut self,
        props: &P,
    ) -> Result<Option<PaintState<F::Shader>>, ResolveError> {
        if is_display_none(props) || is_none(props, PaintStyle::Stroke) {
            return Ok(None);
        }

        let stroke = match props.string_property("stroke") {
            Some(stroke) => stroke,
            None => return Ok(None),
        };

        let mut state = match self.resolve_paint(props, stroke, PaintStyle::Stroke)? {
            Some(state) => state,
            None => return Ok(None),
        };

        state.stroke_width = self.float_property(props, "stroke-width");
        state.line_cap = self
            .parse_property::<LineCap, _>(props, "stroke-linecap")
            .unwrap_or_default();
        state.line_join = self
            .parse_property::<LineJoin, _>(props, "stroke-linejoin")
            .unwrap_or_default();

        Ok(Some(state))
    }

    fn resolve_paint<P: SvgProperties + ?Sized>(
        &mut self,
        props: &P,
        value: &str,
        style: PaintStyle,
    ) -> Result<Option<PaintState<F::Shader>>, ResolveError> {
        let value = value.trim();

        if let Some(id) = url_fragment(value) {
            return match self.gradients.resolve_shader(id) {
                Ok(shader) => Ok(Some(PaintState::new(
                    style,
                    self.antialias,
                    PaintSource::Gradient(shader),
                ))),

                // A gradient that cannot be inverted disables the paint, like a bad color.
                Err(e @ ResolveError::InvalidTransform(_)) => {
                    paint_log!(self.session, "(not painting {}: {})", style, e);
                    Ok(None)
                }

                Err(e) => {
                    paint_log!(self.session, "could not resolve paint server: {}", e);
                    Err(e)
                }
            };
        }

        match self.colors.parse(value) {
            Ok(rgb) => {
                let alpha = self.alpha(props, style);

                Ok(Some(PaintState::new(
                    style,
                    self.antialias,
                    PaintSource::SolidColor(with_alpha(rgb, alpha)),
                )))
            }

            Err(e) => {
                paint_log!(self.session, "(not painting {}: {})", style, e);
                Ok(None)
            }
        }
    }

    fn alpha<P: SvgProperties + ?Sized>(&self, props: &P, style: PaintStyle) -> u8 {
        self.parse_property::<UnitInterval, _>(props, "opacity")
            .or_else(|| self.parse_property(props, style.opacity_property()))
            .map(u8::from)
            .unwrap_or(255)
    }

    /// Registers a `linearGradient` or `radialGradient` element.
    ///
    /// Returns the new gradient so that its stops can be added with
    /// [`parse_gradient_stop`](#method.parse_gradient_stop), or `None` if the element
    /// has no `id` and thus could never be referenced.
    pub fn register_gradient<P: SvgProperties + ?Sized>(
        &mut self,
        props: &P,
        gradient_type: GradientType,
    ) -> Option<&mut Gradient> {
        let id = match props.string_property("id") {
            Some(id) => id.trim().to_string(),
            None => {
                paint_log!(self.session, "(ignoring gradient without an id)");
                return None;
            }
        };

        let transform = self
            .parse_property::<TransformAttribute, _>(props, "gradientTransform")
            .map(TransformAttribute::to_transform);

        let xlink = props
            .string_property("href")
            .or_else(|| props.string_property("xlink:href"))
            .map(|href| {
                let href = href.trim();
                href.strip_prefix('#').unwrap_or(href).to_string()
            });

        let coord = |name| self.float_property(props, name).unwrap_or(0.0);

        let variant = match gradient_type {
            GradientType::Linear => GradientVariant::Linear {
                x1: coord("x1"),
                y1: coord("y1"),
                x2: coord("x2"),
                y2: coord("y2"),
            },

            GradientType::Radial => GradientVariant::Radial {
                cx: coord("cx"),
                cy: coord("cy"),
                r: coord("r"),
            },
        };

        let spread = self.parse_property::<SpreadMethod, _>(props, "spreadMethod");

        let gradient = self.gradients.register(&id, variant, transform, xlink);
        gradient.set_spread(spread);

        Some(gradient)
    }

    /// Parses a `<stop>` element.
    ///
    /// `offset` defaults to 0, `stop-color` to black and `stop-opacity` to opaque.
    pub fn parse_gradient_stop<P: SvgProperties + ?Sized>(&self, props: &P) -> ColorStop {
        let UnitInterval(offset) = self
            .parse_property::<UnitInterval, _>(props, "offset")
            .unwrap_or_default();

        let rgb = self
            .colors
            .parse_or(props.string_property("stop-color"), color::BLACK);

        let alpha = self
            .parse_property::<UnitInterval, _>(props, "stop-opacity")
            .map(u8::from)
            .unwrap_or(255);

        ColorStop::new(offset, with_alpha(rgb, alpha))
    }

    /// Forgets the materialized shaders, keeping the gradient definitions.
    pub fn clear_gradient_shaders(&mut self) {
        self.gradients.clear_shaders();
    }

    /// Forgets gradients and bounds, to start on a new document.
    pub fn reset(&mut self) {
        self.gradients.clear();
        self.bounds = BoundsTracker::new();
    }

    fn float_property<P: SvgProperties + ?Sized>(&self, props: &P, name: &str) -> Option<f64> {
        let value = props.float_property(name);

        if value.is_none() {
            if let Some(s) = props.string_property(name) {
                paint_log!(self.session, "(ignoring invalid {}=\"{}\")", name, s);
            }
        }

        value
    }

    fn parse_property<T: Parse, P: SvgProperties + ?Sized>(
        &self,
        props: &P,
        name: &str,
    ) -> Option<T> {
        let s = props.string_property(name)?;

        match T::parse_str(s) {
            Ok(v) => Some(v),
            Err(_) => {
                paint_log!(self.session, "(ignoring invalid {}=\"{}\")", name, s);
                None
            }
        }
    }
}

fn is_display_none<P: SvgProperties + ?Sized>(props: &P) -> bool {
    props.string_property("display").map(str::trim) == Some("none")
}

fn is_none<P: SvgProperties + ?Sized>(props: &P, style: PaintStyle) -> bool {
    props.string_property(style.property()).map(str::trim) == Some("none")
}

/// Extracts `id` from `url(#id)`.
fn url_fragment(value: &str) -> Option<&str> {
    let rest = value.strip_prefix("url(#")?;
    let end = rest.find(')').unwrap_or(rest.len());

    Some(rest[..end].trim())
}
