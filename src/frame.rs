use crate::constants::STATS_LOG_INTERVAL_FRAMES;
use crate::core::drift::OrbState;
use crate::core::field::{ParticleField, TickStats};
use crate::core::pointer::PointerCell;
use crate::render::{CanvasSurface, EmberRenderer, TweenLayer};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One unit of per-frame work driven by `requestAnimationFrame`.
pub trait Tick {
    fn frame(&mut self);
}

/// Immediate-redraw ember field: update every particle, then draw.
pub struct FrameContext {
    pub field: ParticleField,
    pub renderer: EmberRenderer,
    pub surface: CanvasSurface,
    pub pointer: PointerCell,

    pub interval_stats: TickStats,
    pub interval_frames: u32,
    pub interval_start: Instant,
}

impl FrameContext {
    pub fn new(
        field: ParticleField,
        renderer: EmberRenderer,
        surface: CanvasSurface,
        pointer: PointerCell,
    ) -> Self {
        Self {
            field,
            renderer,
            surface,
            pointer,
            interval_stats: TickStats::default(),
            interval_frames: 0,
            interval_start: Instant::now(),
        }
    }

    fn record(&mut self, tick: TickStats) {
        self.interval_stats.merge(tick);
        self.interval_frames += 1;
        if self.interval_frames < STATS_LOG_INTERVAL_FRAMES {
            return;
        }
        let secs = self.interval_start.elapsed().as_secs_f32();
        let fps = self.interval_frames as f32 / secs.max(1e-3);
        let s = self.interval_stats;
        log::debug!(
            "[frame] fps={:.1} attracted={} drifted={} respawned={} over {} frames",
            fps,
            s.attracted,
            s.drifted,
            s.respawned,
            self.interval_frames
        );
        self.interval_stats = TickStats::default();
        self.interval_frames = 0;
        self.interval_start = Instant::now();
    }
}

impl Tick for FrameContext {
    fn frame(&mut self) {
        // Sample the pointer once; input handlers may overwrite it between ticks
        let pointer = self.pointer.get();
        let tick = self.field.update(pointer);
        self.renderer.draw_frame(&self.field, &mut self.surface);
        self.record(tick);
    }
}

/// Declarative tween variant: re-targets DOM elements from the orb state.
pub struct TweenContext {
    pub layer: TweenLayer,
    pub orb: Rc<RefCell<OrbState>>,
    pub epoch: Instant,
}

impl Tick for TweenContext {
    fn frame(&mut self) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        let orb = *self.orb.borrow();
        self.layer.render(&orb, now_ms);
    }
}

/// Handle to a running animation loop. Dropping it cancels the pending frame
/// and releases the callback.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure -> cell -> closure cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

pub fn start_loop<T: Tick + 'static>(ctx: Rc<RefCell<T>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            pending_clone.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(request_frame(cb));
    }
    FrameLoop { pending, tick }
}
