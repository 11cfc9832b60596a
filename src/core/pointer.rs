use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Last known pointer position in surface coordinates, shared between input
/// handlers (writer) and the frame tick (reader).
///
/// Both sides run on the browser's single UI thread, so a plain `Cell` is
/// enough: writes are last-writer-wins and the tick samples the value once
/// at its start. The type is `!Send`; a multi-threaded host would need an
/// atomic or locked cell instead.
#[derive(Clone, Debug, Default)]
pub struct PointerCell(Rc<Cell<Option<Vec2>>>);

impl PointerCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell that starts engaged at `pos`.
    pub fn at(pos: Vec2) -> Self {
        Self(Rc::new(Cell::new(Some(pos))))
    }

    #[inline]
    pub fn set(&self, pos: Vec2) {
        // NaN coordinates would poison every distance test downstream
        if pos.is_finite() {
            self.0.set(Some(pos));
        }
    }

    #[inline]
    pub fn clear(&self) {
        self.0.set(None);
    }

    #[inline]
    pub fn get(&self) -> Option<Vec2> {
        self.0.get()
    }
}

/// Leading-edge throttle: the first event passes, then events are dropped
/// until `limit_ms` has elapsed since the last accepted one.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_ms: None,
        }
    }

    pub fn accept(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}
