//! Resolve SVG paint attributes into paint that a renderer can use.
//!
//! This crate takes the textual presentation attributes of SVG elements (`fill`,
//! `stroke`, the opacities, stroke geometry and references to gradients) and turns
//! them into concrete paint: a color with its alpha, or a gradient shader, plus the
//! stroke parameters.  It does not parse XML and it does not draw; the code that
//! walks the document calls into it once per element, and hands the result to the
//! renderer.
//!
//! # Basic usage
//!
//! * Create a [`PaintResolver`] with [`PaintOptions`].
//! * Register each `linearGradient` and `radialGradient` element with
//!   [`PaintResolver::register_gradient`], and its `<stop>` children with
//!   [`PaintResolver::parse_gradient_stop`].
//! * For each drawable element, call [`PaintResolver::resolve_fill`] and
//!   [`PaintResolver::resolve_stroke`] with the element's [`Properties`], and apply
//!   the resulting [`PaintState`] to the renderer through a [`PaintSink`].
//! * Record what gets drawn in the [`BoundsTracker`] from
//!   [`PaintResolver::bounds_mut`].
//!
//! # Example
//!
//! ```
//! use svgpaint::{GradientType, PaintOptions, Properties};
//!
//! let mut resolver = PaintOptions::new().resolver();
//!
//! let gradient = Properties::from_attributes([("id", "sunset"), ("x2", "100")]);
//! let stop = Properties::from_attributes([("offset", "0"), ("stop-color", "orange")]);
//!
//! let s = resolver.parse_gradient_stop(&stop);
//! resolver
//!     .register_gradient(&gradient, GradientType::Linear)
//!     .unwrap()
//!     .add_stop(s);
//!
//! let rect = Properties::from_attributes([
//!     ("style", "fill: url(#sunset); stroke: navy"),
//!     ("stroke-width", "2"),
//! ]);
//!
//! let fill = resolver.resolve_fill(&rect)?.unwrap();
//! assert!(fill.shader().is_some());
//!
//! let stroke = resolver.resolve_stroke(&rect)?.unwrap();
//! assert_eq!(stroke.stroke_width(), Some(2.0));
//! # Ok::<(), svgpaint::ResolveError>(())
//! ```
//!
//! # Logging
//!
//! Set the `SVGPAINT_LOG` environment variable to get messages about values that
//! were ignored, or use [`PaintOptions::with_logging`].

#![allow(rustdoc::private_intra_doc_links)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::new_without_default)]
#![warn(nonstandard_style, rust_2018_idioms, unused)]
// Some lints no longer exist
#![warn(renamed_and_removed_lints)]
// Standalone lints
#![warn(trivial_casts, trivial_numeric_casts)]

// The public API is exported here
pub use crate::api::*;

#[macro_use]
pub mod log;

#[macro_use]
mod util;

#[macro_use]
mod parsers;

mod angle;
mod api;
mod bbox;
mod color;
mod error;
mod gradient;
mod number_list;
mod paint;
mod paint_server;
mod properties;
mod rect;
mod session;
mod style;
mod transform;
mod unit_interval;

#[doc(hidden)]
pub mod doctest_only {
    pub use crate::error::ValueErrorKind;
    pub use crate::parsers::Parse;
    pub use crate::session::Session;
    pub use crate::transform::TransformAttribute;
}
