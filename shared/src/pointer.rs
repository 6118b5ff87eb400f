use std::cell::Cell;
use std::rc::Rc;

use crate::events::{BoardEvent, EventHub};

/// Last known pointer coordinates. Every update goes out through the hub so
/// the recorder can pick it up. No bounds checks.
pub struct Pointer {
    x: Cell<f64>,
    y: Cell<f64>,
    hub: Rc<EventHub>,
}

impl Pointer {
    pub fn new(hub: Rc<EventHub>) -> Self {
        Self {
            x: Cell::new(0.0),
            y: Cell::new(0.0),
            hub,
        }
    }

    pub fn set_point(&self, x: f64, y: f64) {
        self.x.set(x);
        self.y.set(y);
        self.hub.dispatch(&BoardEvent::PointMoved { x, y });
    }

    pub fn x(&self) -> f64 {
        self.x.get()
    }

    pub fn y(&self) -> f64 {
        self.y.get()
    }
}
