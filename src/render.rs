use crate::core::color::Rgba;
use crate::core::constants::{GRADIENT_RADIUS_FACTOR, MIN_EXTENT, TRAIL_FADE_ALPHA};
use crate::core::field::ParticleField;
use glam::Vec2;
use rand::Rng;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod tween;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use tween::TweenLayer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Background stops from the bright center out to the black edge.
pub const BACKGROUND_STOPS: [GradientStop; 5] = [
    GradientStop {
        offset: 0.0,
        color: Rgba::rgb(255, 102, 0),
    },
    GradientStop {
        offset: 0.1,
        color: Rgba::rgb(180, 71, 0),
    },
    GradientStop {
        offset: 0.3,
        color: Rgba::rgb(80, 30, 0),
    },
    GradientStop {
        offset: 0.6,
        color: Rgba::rgb(20, 10, 0),
    },
    GradientStop {
        offset: 1.0,
        color: Rgba::rgb(0, 0, 0),
    },
];

/// Radial gradient from `center` (offset 0) out to `radius` (offset 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient<'a> {
    pub center: Vec2,
    pub radius: f32,
    pub stops: &'a [GradientStop],
}

/// Minimal immediate-mode 2D drawing target.
///
/// The browser implementation wraps a `CanvasRenderingContext2d`; tests use a
/// recording surface.
pub trait Surface2d {
    /// Logical width and height in surface units.
    fn size(&self) -> Vec2;
    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba);
    fn fill_rect_gradient(&mut self, origin: Vec2, extent: Vec2, gradient: &RadialGradient<'_>);
    /// `style` is `color` already rendered as a CSS color string.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba, style: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub gradient_radius_factor: f32,
    pub fade_alpha: f32,
    pub stops: &'static [GradientStop],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gradient_radius_factor: GRADIENT_RADIUS_FACTOR,
            fade_alpha: TRAIL_FADE_ALPHA,
            stops: &BACKGROUND_STOPS,
        }
    }
}

/// Immediate full-redraw renderer: gradient, fade overlay, then particles.
#[derive(Clone, Debug, Default)]
pub struct EmberRenderer {
    config: RenderConfig,
}

impl EmberRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Gradient for a surface of `size`, with the radius kept positive.
    pub fn background(&self, size: Vec2) -> RadialGradient<'static> {
        let size = size.max(Vec2::ZERO);
        RadialGradient {
            center: size * 0.5,
            radius: (size.x * self.config.gradient_radius_factor).max(MIN_EXTENT),
            stops: self.config.stops,
        }
    }

    pub fn draw_frame<S, R>(&self, field: &ParticleField<R>, surface: &mut S)
    where
        S: Surface2d + ?Sized,
        R: Rng,
    {
        let size = surface.size();
        let extent = size.max(Vec2::splat(MIN_EXTENT));

        surface.fill_rect_gradient(Vec2::ZERO, extent, &self.background(size));
        surface.fill_rect(
            Vec2::ZERO,
            extent,
            Rgba::rgba(0, 0, 0, self.config.fade_alpha),
        );

        let positions = field.positions();
        let sizes = field.sizes();
        let colors = field.colors();
        let styles = field.fill_styles();
        for i in 0..field.len() {
            surface.fill_disc(positions[i], sizes[i], colors[i], &styles[i]);
        }
    }
}
