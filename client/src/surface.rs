use web_sys::CanvasRenderingContext2d;

use inktale_shared::StrokeSurface;

/// Replay target over the 2d context. Writes style directly and emits no
/// domain events.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl StrokeSurface for CanvasSurface<'_> {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
