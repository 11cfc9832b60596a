#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ELEMENT_ID, TWEEN_CONTAINER_ID};
use crate::core::{
    DriftConfig, DriftField, FieldConfig, OrbState, PageExit, ParticleField, PointerCell,
};
use crate::dom::EventListener;
use crate::frame::{FrameContext, FrameLoop, TweenContext};
use crate::render::{CanvasSurface, EmberRenderer, TweenLayer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

/// Everything that must be released on page teardown.
#[derive(Default)]
struct App {
    listeners: Vec<EventListener>,
    loops: Vec<FrameLoop>,
}

impl App {
    fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ember-field starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut app = App::default();
    if let Some(el) = document.get_element_by_id(CANVAS_ELEMENT_ID) {
        let canvas: web::HtmlCanvasElement = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", CANVAS_ELEMENT_ID, e)))?;
        start_canvas(&window, &canvas, &mut app)?;
    }
    if let Some(container) = document.get_element_by_id(TWEEN_CONTAINER_ID) {
        start_tween(&window, &document, &container, &mut app)?;
    }

    if app.is_empty() {
        log::warn!(
            "no #{} canvas or #{} container found; nothing to animate",
            CANVAS_ELEMENT_ID,
            TWEEN_CONTAINER_ID
        );
        return Ok(());
    }

    wire_teardown(&window, &mut app)?;
    APP.with(|a| *a.borrow_mut() = Some(app));
    Ok(())
}

fn start_canvas(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    app: &mut App,
) -> anyhow::Result<()> {
    let size = dom::sync_canvas_size(canvas);
    let surface = CanvasSurface::new(canvas)?;
    let config = FieldConfig::default();
    log::info!(
        "[canvas] {}x{} surface, {} particles",
        size.x,
        size.y,
        config.particle_count
    );
    let field = ParticleField::new(config, size.x, size.y, rand::random());

    let pointer = PointerCell::new();
    app.listeners
        .extend(events::wire_canvas_pointer(canvas, &pointer)?);

    let ctx = Rc::new(RefCell::new(FrameContext::new(
        field,
        EmberRenderer::default(),
        surface,
        pointer,
    )));

    // Particles keep their positions; only later drift and respawns see the new size
    let canvas_resize = canvas.clone();
    let ctx_resize = ctx.clone();
    app.listeners
        .push(EventListener::new(window, "resize", move |_ev: web::Event| {
            let size = dom::sync_canvas_size(&canvas_resize);
            ctx_resize
                .borrow_mut()
                .field
                .set_surface_size(size.x, size.y);
        })?);

    app.loops.push(frame::start_loop(ctx));
    Ok(())
}

fn start_tween(
    window: &web::Window,
    document: &web::Document,
    container: &web::Element,
    app: &mut App,
) -> anyhow::Result<()> {
    let viewport = dom::viewport_size(window);
    let field = DriftField::new(DriftConfig::default(), viewport, &mut rand::thread_rng());
    let layer = TweenLayer::new(document, container, field)?;

    let epoch = Instant::now();
    let orb = Rc::new(RefCell::new(OrbState::centered(viewport)));
    app.listeners
        .push(events::wire_window_mousemove(window, orb.clone(), epoch)?);

    let ctx = Rc::new(RefCell::new(TweenContext { layer, orb, epoch }));
    app.loops.push(frame::start_loop(ctx));
    Ok(())
}

fn wire_teardown(window: &web::Window, app: &mut App) -> anyhow::Result<()> {
    app.listeners
        .push(EventListener::new(window, "pagehide", |ev: web::Event| {
            let persisted = ev
                .dyn_ref::<web::PageTransitionEvent>()
                .map(|e| e.persisted());
            if !PageExit::from_persisted(persisted).releases_resources() {
                // The browser suspends animation frames while the page sits in the cache
                log::info!("pagehide into back/forward cache; keeping loops alive");
                return;
            }
            if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
                log::info!(
                    "teardown: stopping {} loop(s), removing {} listener(s)",
                    app.loops.len(),
                    app.listeners.len()
                );
                drop(app);
            }
        })?);
    Ok(())
}
