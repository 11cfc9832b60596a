use crate::constants::{ORB_DIAMETER_PX, ORB_TRANSITION_SEC, TWEEN_TRANSITION_SEC};
use crate::core::drift::{DriftField, OrbGlow, OrbState};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Declarative renderer: one absolutely positioned element per particle plus
/// the glow orb. Elements are only re-targeted; the browser's CSS transitions
/// do the in-between frames.
pub struct TweenLayer {
    field: DriftField,
    dots: Vec<web::HtmlElement>,
    orb: web::HtmlElement,
    last_pointer: Option<Vec2>,
    last_glow: Option<OrbGlow>,
}

fn create_div(document: &web::Document, style: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element error: {:?}", e))?;
    el.set_attribute("style", style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

impl TweenLayer {
    pub fn new(
        document: &web::Document,
        container: &web::Element,
        field: DriftField,
    ) -> anyhow::Result<Self> {
        let opacity = field.config().opacity;
        let mut dots = Vec::with_capacity(field.particles().len());
        for p in field.particles() {
            let style = format!(
                "position:absolute;left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;\
                 background:#fff;border-radius:9999px;opacity:{};pointer-events:none;\
                 will-change:transform;transition:transform {}s linear;",
                p.origin.x, p.origin.y, p.size, p.size, opacity, TWEEN_TRANSITION_SEC
            );
            let dot = create_div(document, &style)?;
            container
                .append_child(&dot)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            dots.push(dot);
        }

        let half = ORB_DIAMETER_PX * 0.5;
        let orb_style = format!(
            "position:absolute;left:50%;top:50%;width:{d}px;height:{d}px;\
             margin-left:-{h}px;margin-top:-{h}px;background:#000;border-radius:9999px;\
             pointer-events:none;will-change:transform;\
             transition:transform {t}s linear,box-shadow {t}s linear;",
            d = ORB_DIAMETER_PX,
            h = half,
            t = ORB_TRANSITION_SEC
        );
        let orb = create_div(document, &orb_style)?;
        container
            .append_child(&orb)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        log::info!("[tween] {} particles attached", dots.len());
        Ok(Self {
            field,
            dots,
            orb,
            last_pointer: None,
            last_glow: None,
        })
    }

    /// Re-target elements whose inputs changed since the previous call.
    pub fn render(&mut self, orb: &OrbState, now_ms: f64) {
        let pointer = orb.pointer();
        let glow = orb.glow(now_ms);
        let pointer_changed = self.last_pointer != Some(pointer);
        let glow_changed = self.last_glow != Some(glow);

        if pointer_changed {
            for (dot, offset) in self.dots.iter().zip(self.field.offsets(pointer)) {
                _ = dot.style().set_property(
                    "transform",
                    &format!("translate({:.2}px, {:.2}px)", offset.x, offset.y),
                );
            }
            self.last_pointer = Some(pointer);
        }

        if pointer_changed || glow_changed {
            let t = orb.translation(self.field.viewport());
            let style = self.orb.style();
            _ = style.set_property(
                "transform",
                &format!("translate({:.2}px, {:.2}px) scale({})", t.x, t.y, glow.scale),
            );
            _ = style.set_property("box-shadow", glow.box_shadow);
            self.last_glow = Some(glow);
        }
    }
}
