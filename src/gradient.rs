//! Gradient definitions and their `xlink:href` inheritance.
//!
//! A `linearGradient` or `radialGradient` element is registered in a
//! [`GradientRegistry`] as soon as the document walker sees it, with whatever
//! attributes it has.  Nothing is resolved at that point, so a gradient can refer to
//! another one that appears later in the document.
//!
//! The first time a fill or stroke uses a gradient, the registry follows its
//! `xlink:href` chain, fills in what the gradient did not specify from its resolved
//! parent, and asks a [`ShaderFactory`] to turn the result into a shader.  Shaders
//! are cached per id, so each gradient in a chain is materialized once no matter how
//! many gradients refer to it.
//!
//! The registered definitions are never overwritten by resolution; the derived
//! gradients live in the cache next to the shaders.  Changing a definition that
//! has already been resolved drops the whole cache, since gradients that inherit
//! from it may have been derived too.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use cssparser::Parser;

use crate::color::Color;
use crate::error::*;
use crate::paint_server::ShaderFactory;
use crate::parsers::Parse;
use crate::transform::Transform;
use crate::unit_interval::UnitInterval;

/// Contents of a `<stop>` element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    /// `<stop offset="..."/>`
    pub offset: UnitInterval,

    /// `<stop stop-color="..." stop-opacity="..."/>`
    pub color: Color,
}

impl ColorStop {
    pub fn new(offset: f64, color: Color) -> ColorStop {
        ColorStop {
            offset: UnitInterval::clamp(offset),
            color,
        }
    }
}

/// spreadMethod attribute for gradients
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpreadMethod {
    Pad,
    Reflect,
    Repeat,
}

enum_default!(SpreadMethod, SpreadMethod::Pad);

impl Parse for SpreadMethod {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<SpreadMethod, ParseError<'i>> {
        Ok(parse_identifiers!(
            parser,
            "pad" => SpreadMethod::Pad,
            "reflect" => SpreadMethod::Reflect,
            "repeat" => SpreadMethod::Repeat,
        )?)
    }
}

/// Which element a gradient comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GradientType {
    Linear,
    Radial,
}

/// Parameters specific to each gradient type, in user units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientVariant {
    Linear { x1: f64, y1: f64, x2: f64, y2: f64 },

    Radial { cx: f64, cy: f64, r: f64 },
}

impl GradientVariant {
    pub fn gradient_type(&self) -> GradientType {
        match *self {
            GradientVariant::Linear { .. } => GradientType::Linear,
            GradientVariant::Radial { .. } => GradientType::Radial,
        }
    }
}

/// A gradient as registered, before following its `xlink:href`.
///
/// The transform and spread method are `None` when the element did not specify
/// them, so that they can be taken from the parent gradient.  An empty list of
/// stops also means "take them from the parent".
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    id: String,
    variant: GradientVariant,
    transform: Option<Transform>,
    spread: Option<SpreadMethod>,
    stops: Vec<ColorStop>,
    fallback: Option<String>,
}

impl Gradient {
    pub fn new(
        id: impl Into<String>,
        variant: GradientVariant,
        transform: Option<Transform>,
        xlink: Option<String>,
    ) -> Gradient {
        Gradient {
            id: id.into(),
            variant,
            transform,
            spread: None,
            stops: Vec::new(),
            fallback: xlink,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn variant(&self) -> GradientVariant {
        self.variant
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }

    pub fn spread(&self) -> Option<SpreadMethod> {
        self.spread
    }

    pub fn set_spread(&mut self, spread: Option<SpreadMethod>) {
        self.spread = spread;
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Appends a stop; stops keep their document order.
    pub fn add_stop(&mut self, stop: ColorStop) {
        self.stops.push(stop);
    }

    /// The id from `xlink:href`, without the leading `#`.
    pub fn xlink(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Combines this gradient with its already-resolved parent.
    ///
    /// Geometry always comes from `self`.
    pub fn derive_from(&self, parent: &Gradient) -> Gradient {
        let stops = if self.stops.is_empty() {
            parent.stops.clone()
        } else {
            self.stops.clone()
        };

        Gradient {
            id: self.id.clone(),
            variant: self.variant,
            transform: self.transform.or(parent.transform),
            spread: self.spread.or(parent.spread),
            stops,
            fallback: self.fallback.clone(),
        }
    }

    /// Fills unspecified values with their defaults.
    pub fn to_resolved(&self) -> ResolvedGradient {
        ResolvedGradient {
            variant: self.variant,
            transform: self.transform.unwrap_or_default(),
            spread: self.spread.unwrap_or_default(),
            stops: self.stops.clone(),
        }
    }
}

/// What a [`ShaderFactory`] gets to build a shader.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGradient {
    pub variant: GradientVariant,
    pub transform: Transform,
    pub spread: SpreadMethod,
    pub stops: Vec<ColorStop>,
}

/// Gradient definitions of one document, plus their materialized shaders.
pub struct GradientRegistry<F: ShaderFactory> {
    gradients: HashMap<String, Gradient>,
    derived: HashMap<String, Gradient>,
    shaders: HashMap<String, Rc<F::Shader>>,
    factory: F,
}

impl<F: ShaderFactory> GradientRegistry<F> {
    pub fn new(factory: F) -> GradientRegistry<F> {
        GradientRegistry {
            gradients: HashMap::new(),
            derived: HashMap::new(),
            shaders: HashMap::new(),
            factory,
        }
    }

    /// Stores a gradient definition and returns it so that stops can be added to it.
    ///
    /// If `id` was already registered, the new definition replaces it.  If it had
    /// already been resolved, all cached shaders are dropped.
    pub fn register(
        &mut self,
        id: &str,
        variant: GradientVariant,
        transform: Option<Transform>,
        xlink: Option<String>,
    ) -> &mut Gradient {
        self.insert(Gradient::new(id, variant, transform, xlink))
    }

    pub fn insert(&mut self, gradient: Gradient) -> &mut Gradient {
        self.invalidate(gradient.id());

        match self.gradients.entry(gradient.id.clone()) {
            Entry::Occupied(mut e) => {
                e.insert(gradient);
                e.into_mut()
            }

            Entry::Vacant(e) => e.insert(gradient),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Gradient> {
        self.gradients.get(id)
    }

    /// Mutable access to a definition, for example to add stops.
    ///
    /// Drops the cached shaders if `id` had already been resolved.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Gradient> {
        self.invalidate(id);
        self.gradients.get_mut(id)
    }

    /// The gradient as resolved through its `xlink:href` chain, once a shader has
    /// been created for it.
    pub fn resolved(&self, id: &str) -> Option<&Gradient> {
        self.derived.get(id)
    }

    // A gradient can only have been derived from `id` if `id` itself was resolved
    // first.
    fn invalidate(&mut self, id: &str) {
        if self.derived.contains_key(id) {
            self.clear_shaders();
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.gradients.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// Whether a shader has already been materialized for `id`.
    pub fn is_cached(&self, id: &str) -> bool {
        self.shaders.contains_key(id)
    }

    /// Returns the shader for `id`, resolving its `xlink:href` chain on first use.
    pub fn resolve_shader(&mut self, id: &str) -> Result<Rc<F::Shader>, ResolveError> {
        let mut stack = Vec::new();
        self.resolve_in_stack(id, &mut stack)
    }

    // `stack` has the ids whose resolution is in progress further up.
    fn resolve_in_stack(
        &mut self,
        id: &str,
        stack: &mut Vec<String>,
    ) -> Result<Rc<F::Shader>, ResolveError> {
        if let Some(shader) = self.shaders.get(id) {
            return Ok(shader.clone());
        }

        if stack.iter().any(|s| s == id) {
            return Err(ResolveError::CyclicXlink(id.to_string()));
        }

        let gradient = self
            .gradients
            .get(id)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownGradientId(id.to_string()))?;

        let gradient = match gradient.xlink().map(str::to_string) {
            None => gradient,

            Some(ref xlink) => {
                if !self.gradients.contains_key(xlink) {
                    return Err(ResolveError::UnresolvableXlink {
                        id: id.to_string(),
                        xlink: xlink.to_string(),
                    });
                }

                stack.push(id.to_string());
                let parent_result = self.resolve_in_stack(xlink, stack);
                stack.pop();
                parent_result?;

                let parent = self.derived.get(xlink).ok_or_else(|| {
                    ResolveError::UnresolvableXlink {
                        id: id.to_string(),
                        xlink: xlink.to_string(),
                    }
                })?;

                gradient.derive_from(parent)
            }
        };

        let shader = self
            .factory
            .create_shader(&gradient.to_resolved())
            .map(Rc::new)
            .map_err(|_| ResolveError::InvalidTransform(id.to_string()))?;

        self.derived.insert(id.to_string(), gradient);
        self.shaders.insert(id.to_string(), shader.clone());

        Ok(shader)
    }

    /// Forgets the materialized shaders but keeps the definitions.
    ///
    /// The next use of each gradient derives it again from the current definitions.
    pub fn clear_shaders(&mut self) {
        self.shaders.clear();
        self.derived.clear();
    }

    /// Forgets everything, for reuse with another document.
    pub fn clear(&mut self) {
        self.clear_shaders();
        self.gradients.clear();
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}
