use super::{RadialGradient, Surface2d};
use crate::core::color::Rgba;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface2d` backed by a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // Skips redundant fill-style writes for runs of identical colors
    last_fill: Option<Rgba>,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            last_fill: None,
        })
    }

    #[inline]
    fn set_fill(&mut self, color: Rgba, style: &str) {
        if self.last_fill != Some(color) {
            self.ctx.set_fill_style_str(style);
            self.last_fill = Some(color);
        }
    }
}

impl Surface2d for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba) {
        if self.last_fill != Some(color) {
            self.set_fill(color, &color.to_css());
        }
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            extent.x as f64,
            extent.y as f64,
        );
    }

    fn fill_rect_gradient(&mut self, origin: Vec2, extent: Vec2, gradient: &RadialGradient<'_>) {
        let (cx, cy) = (gradient.center.x as f64, gradient.center.y as f64);
        let g = match self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, gradient.radius as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::error!("createRadialGradient error: {:?}", e);
                return;
            }
        };
        for stop in gradient.stops {
            _ = g.add_color_stop(stop.offset, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.last_fill = None;
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            extent.x as f64,
            extent.y as f64,
        );
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba, style: &str) {
        self.set_fill(color, style);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
