use crate::core::constants::POINTER_THROTTLE_MS;
use crate::core::drift::OrbState;
use crate::core::pointer::{PointerCell, Throttle};
use crate::dom::EventListener;
use crate::input;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed canvas pointer moves into `pointer`; leaving the canvas clears it.
pub fn wire_canvas_pointer(
    canvas: &web::HtmlCanvasElement,
    pointer: &PointerCell,
) -> anyhow::Result<Vec<EventListener>> {
    let canvas_move = canvas.clone();
    let pointer_move = pointer.clone();
    let on_move = EventListener::new(canvas, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        match input::pointer_surface_px(ev, &canvas_move) {
            Some(pos) => pointer_move.set(pos),
            None => pointer_move.clear(),
        }
    })?;

    let pointer_leave = pointer.clone();
    let on_leave = EventListener::new(canvas, "pointerleave", move |_ev: web::Event| {
        pointer_leave.clear();
    })?;

    Ok(vec![on_move, on_leave])
}

/// Feed throttled window mouse moves into the tween variant's orb state.
///
/// Timestamps are milliseconds since `epoch`, the same clock the tween tick
/// reads when deciding whether the pointer still counts as moving.
pub fn wire_window_mousemove(
    window: &web::Window,
    orb: Rc<RefCell<OrbState>>,
    epoch: Instant,
) -> anyhow::Result<EventListener> {
    let mut throttle = Throttle::new(POINTER_THROTTLE_MS);
    EventListener::new(window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        if throttle.accept(now_ms) {
            orb.borrow_mut().on_move(input::client_px(ev), now_ms);
        }
    })
}
