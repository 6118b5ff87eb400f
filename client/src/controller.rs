use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use inktale_shared::{BoardEvent, EventHub};

/// Owns the drawing context, the current stroke style and the live-stroke
/// flag. Style setters mutate the context and announce the change through the
/// hub; values are not validated here.
pub struct CanvasController {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    color: RefCell<String>,
    width: Cell<f64>,
    drawing: Cell<bool>,
    hub: Rc<EventHub>,
}

impl CanvasController {
    pub fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        hub: Rc<EventHub>,
    ) -> Self {
        Self {
            canvas,
            ctx,
            color: RefCell::new(String::new()),
            width: Cell::new(0.0),
            drawing: Cell::new(false),
            hub,
        }
    }

    pub fn ctx(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn set_color(&self, color: &str) {
        self.ctx.set_stroke_style_str(color);
        *self.color.borrow_mut() = color.to_string();
        self.hub.dispatch(&BoardEvent::ColorChanged(color.to_string()));
    }

    pub fn set_width(&self, width: f64) {
        self.ctx.set_line_width(width);
        self.width.set(width);
        self.hub.dispatch(&BoardEvent::WidthChanged(width));
    }

    pub fn color(&self) -> String {
        self.color.borrow().clone()
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.get()
    }

    pub fn set_drawing(&self, drawing: bool) {
        self.drawing.set(drawing);
    }

    /// Replay writes stroke style straight to the context, so the context can
    /// drift from the controller's own style. Re-assert it before a live
    /// stroke starts.
    pub fn apply_style(&self) {
        self.ctx.set_stroke_style_str(&self.color.borrow());
        self.ctx.set_line_width(self.width.get());
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}
