//! Public Rust API for svgpaint.
//!
//! This gets re-exported from the toplevel `lib.rs`.

#![warn(missing_docs)]

pub use crate::{
    angle::Angle,
    bbox::{BoundsTracker, PathBounds},
    color::{parse_color, with_alpha, Color, ColorMapper, ColorParser, RGB8},
    error::{ColorError, InvalidTransform, ResolveError},
    gradient::{
        ColorStop, Gradient, GradientRegistry, GradientType, GradientVariant, ResolvedGradient,
        SpreadMethod,
    },
    paint::{LineCap, LineJoin, PaintResolver, PaintSink, PaintSource, PaintState, PaintStyle},
    paint_server::{GradientShader, PlainShaderFactory, ShaderFactory},
    properties::{Properties, SvgProperties},
    rect::Rect,
    style::StyleSet,
    transform::Transform,
    unit_interval::UnitInterval,
};

#[cfg(feature = "cairo")]
pub use crate::paint_server::CairoShaderFactory;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::session::Session;

/// Builder for creating a [`PaintResolver`].
///
/// This struct implements a builder pattern for configuring how paint gets
/// resolved.  You can call the methods of `PaintOptions` in sequence, and finally
/// call [`resolver`](#method.resolver) or
/// [`resolver_with_factory`](#method.resolver_with_factory) to get a
/// [`PaintResolver`] for one document.
pub struct PaintOptions {
    pub(crate) antialias: bool,
    pub(crate) color_mapper: Option<Box<dyn ColorMapper>>,
    pub(crate) base_path: Option<PathBuf>,
    pub(crate) log_enabled: Option<bool>,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            color_mapper: None,
            base_path: None,
            log_enabled: None,
        }
    }
}

impl fmt::Debug for PaintOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintOptions")
            .field("antialias", &self.antialias)
            .field("color_mapper", &self.color_mapper.is_some())
            .field("base_path", &self.base_path)
            .field("log_enabled", &self.log_enabled)
            .finish()
    }
}

impl PaintOptions {
    /// Creates a `PaintOptions` with the default options.
    ///
    /// * [`antialias`](#method.with_antialias) defaults to `true`.
    ///
    /// * There is no color mapper, so colors are used as they are written.
    ///
    /// * Logging is controlled by the `SVGPAINT_LOG` environment variable.
    ///
    /// # Example:
    ///
    /// ```
    /// let resolver = svgpaint::PaintOptions::new().resolver();
    /// assert!(resolver.bounds().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls whether paint is antialiased.
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Passes every parsed color through `mapper`, for example to apply a theme.
    ///
    /// # Example:
    ///
    /// ```
    /// use svgpaint::{PaintOptions, RGB8};
    ///
    /// let resolver = PaintOptions::new()
    ///     .with_color_mapper(|c: RGB8| RGB8::new(255 - c.r, 255 - c.g, 255 - c.b))
    ///     .resolver();
    ///
    /// assert_eq!(resolver.color_parser().parse("white"), Ok(RGB8::new(0, 0, 0)));
    /// ```
    pub fn with_color_mapper<M: ColorMapper + 'static>(mut self, mapper: M) -> Self {
        self.color_mapper = Some(Box::new(mapper));
        self
    }

    /// Sets the directory against which the document's external assets get resolved.
    ///
    /// The resolver does not load anything by itself; it only hands this to
    /// whoever asks through [`PaintResolver::base_path`].
    pub fn with_base_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Turns log messages on or off, regardless of the `SVGPAINT_LOG` environment variable.
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_enabled = Some(enabled);
        self
    }

    /// Creates a resolver that produces [`GradientShader`] values.
    pub fn resolver(self) -> PaintResolver {
        PaintResolver::new(self, PlainShaderFactory)
    }

    /// Creates a resolver that materializes gradients with `factory`.
    pub fn resolver_with_factory<F: ShaderFactory>(self, factory: F) -> PaintResolver<F> {
        PaintResolver::new(self, factory)
    }

    pub(crate) fn session(&self) -> Session {
        match self.log_enabled {
            Some(enabled) => Session::new_with_logging(enabled),
            None => Session::new(),
        }
    }
}
