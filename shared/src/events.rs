//! Name-keyed publish/subscribe hub. Dispatch is synchronous and runs
//! handlers in subscription order; there is no unsubscribe.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum BoardEvent {
    PointMoved { x: f64, y: f64 },
    ColorChanged(String),
    WidthChanged(f64),
    StrokeFinished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointMoved,
    ColorChanged,
    WidthChanged,
    StrokeFinished,
}

impl BoardEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BoardEvent::PointMoved { .. } => EventKind::PointMoved,
            BoardEvent::ColorChanged(_) => EventKind::ColorChanged,
            BoardEvent::WidthChanged(_) => EventKind::WidthChanged,
            BoardEvent::StrokeFinished => EventKind::StrokeFinished,
        }
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

type Handler = Box<dyn Fn(&BoardEvent) -> Result<(), HandlerError>>;

#[derive(Default)]
pub struct EventHub {
    handlers: RefCell<HashMap<EventKind, Vec<Handler>>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        kind: EventKind,
        handler: impl Fn(&BoardEvent) -> Result<(), HandlerError> + 'static,
    ) {
        self.handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Box::new(handler));
    }

    /// Invoke every handler registered for the event's kind. A failing
    /// handler is logged and the remaining handlers still run.
    pub fn dispatch(&self, event: &BoardEvent) {
        let handlers = self.handlers.borrow();
        let Some(list) = handlers.get(&event.kind()) else {
            return;
        };
        for handler in list {
            if let Err(error) = handler(event) {
                log::error!("handler failed for {:?}: {error}", event.kind());
            }
        }
    }
}
