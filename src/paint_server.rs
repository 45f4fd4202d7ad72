//! Materializing resolved gradients as renderer shaders.

use crate::color::Color;
use crate::error::InvalidTransform;
use crate::gradient::{ColorStop, GradientVariant, ResolvedGradient, SpreadMethod};
use crate::transform::Transform;

/// Turns a resolved gradient into whatever the renderer uses to paint with it.
///
/// The [`GradientRegistry`](crate::gradient::GradientRegistry) calls this at most once
/// per gradient id and caches the result.
pub trait ShaderFactory {
    type Shader;

    /// Fails if the gradient's transform cannot be inverted.
    fn create_shader(&self, gradient: &ResolvedGradient) -> Result<Self::Shader, InvalidTransform>;
}

/// A renderer-neutral shader.
///
/// Like a cairo pattern, the matrix maps user space to gradient space; it is
/// the inverse of the gradient's transform.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientShader {
    pub variant: GradientVariant,
    pub matrix: Transform,
    pub spread: SpreadMethod,
    pub stops: Vec<ColorStop>,
}

impl GradientShader {
    /// Color of the first stop, or transparent black if there are no stops.
    ///
    /// Renderers that cannot paint gradients can fall back to this.
    pub fn first_color(&self) -> Color {
        self.stops
            .first()
            .map(|stop| stop.color)
            .unwrap_or_default()
    }
}

/// Creates [`GradientShader`] values.
#[derive(Debug, Default, Copy, Clone)]
pub struct PlainShaderFactory;

impl ShaderFactory for PlainShaderFactory {
    type Shader = GradientShader;

    fn create_shader(&self, gradient: &ResolvedGradient) -> Result<GradientShader, InvalidTransform> {
        let matrix = gradient.transform.invert().ok_or(InvalidTransform)?;

        Ok(GradientShader {
            variant: gradient.variant,
            matrix,
            spread: gradient.spread,
            stops: gradient.stops.clone(),
        })
    }
}

#[cfg(feature = "cairo")]
pub use self::cairo_shader::CairoShaderFactory;

#[cfg(feature = "cairo")]
mod cairo_shader {
    use super::*;

    impl From<SpreadMethod> for cairo::Extend {
        fn from(s: SpreadMethod) -> cairo::Extend {
            match s {
                SpreadMethod::Pad => cairo::Extend::Pad,
                SpreadMethod::Reflect => cairo::Extend::Reflect,
                SpreadMethod::Repeat => cairo::Extend::Repeat,
            }
        }
    }

    /// Creates cairo linear and radial gradient patterns.
    #[derive(Debug, Default, Copy, Clone)]
    pub struct CairoShaderFactory;

    impl ShaderFactory for CairoShaderFactory {
        type Shader = cairo::Gradient;

        fn create_shader(
            &self,
            gradient: &ResolvedGradient,
        ) -> Result<cairo::Gradient, InvalidTransform> {
            let matrix = gradient.transform.invert().ok_or(InvalidTransform)?;

            let g = match gradient.variant {
                GradientVariant::Linear { x1, y1, x2, y2 } => {
                    cairo::Gradient::clone(&cairo::LinearGradient::new(x1, y1, x2, y2))
                }

                GradientVariant::Radial { cx, cy, r } => {
                    cairo::Gradient::clone(&cairo::RadialGradient::new(cx, cy, 0.0, cx, cy, r))
                }
            };

            g.set_matrix(matrix.into());
            g.set_extend(cairo::Extend::from(gradient.spread));

            for stop in &gradient.stops {
                let ColorStop { offset, color } = *stop;

                g.add_color_stop_rgba(
                    offset.0,
                    f64::from(color.r) / 255.0,
                    f64::from(color.g) / 255.0,
                    f64::from(color.b) / 255.0,
                    f64::from(color.a) / 255.0,
                );
            }

            Ok(g)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{with_alpha, RGB8};

    fn gradient(transform: Transform) -> ResolvedGradient {
        ResolvedGradient {
            variant: GradientVariant::Radial {
                cx: 5.0,
                cy: 5.0,
                r: 5.0,
            },
            transform,
            spread: SpreadMethod::Repeat,
            stops: vec![
                ColorStop::new(0.0, with_alpha(RGB8::new(255, 0, 0), 255)),
                ColorStop::new(1.0, with_alpha(RGB8::new(0, 0, 255), 128)),
            ],
        }
    }

    #[test]
    fn shader_matrix_is_inverse_transform() {
        let shader = PlainShaderFactory
            .create_shader(&gradient(Transform::new_translate(10.0, 20.0)))
            .unwrap();

        assert_eq!(shader.matrix, Transform::new_translate(-10.0, -20.0));
        assert_eq!(shader.spread, SpreadMethod::Repeat);
        assert_eq!(shader.stops.len(), 2);
        assert_eq!(shader.first_color(), with_alpha(RGB8::new(255, 0, 0), 255));
    }

    #[test]
    fn singular_transform_has_no_shader() {
        assert_eq!(
            PlainShaderFactory.create_shader(&gradient(Transform::new_scale(1.0, 0.0))),
            Err(InvalidTransform)
        );
    }

    #[test]
    fn empty_gradient_falls_back_to_transparent() {
        let mut g = gradient(Transform::identity());
        g.stops.clear();

        let shader = PlainShaderFactory.create_shader(&g).unwrap();
        assert_eq!(shader.first_color().a, 0);
    }
}
