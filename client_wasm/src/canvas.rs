//! Canvas 2D backend for the fx_core drawing code

use fx_core::{Paint, Stroke, Surface};
use glam::DVec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Grab the 2D context of `canvas`
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("No 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self::new(ctx))
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        match &stroke.paint {
            Paint::Solid(css) => self.ctx.set_stroke_style_str(css),
            Paint::Linear(gradient) => {
                let g = self.ctx.create_linear_gradient(
                    gradient.from.x,
                    gradient.from.y,
                    gradient.to.x,
                    gradient.to.y,
                );
                for (offset, color) in gradient.stops {
                    if let Err(e) = g.add_color_stop(*offset as f32, color) {
                        log::debug!("bad gradient stop {color}: {e:?}");
                    }
                }
                self.ctx.set_stroke_style_canvas_gradient(&g);
            }
        }
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_line_cap(stroke.cap.css());
        self.ctx.set_global_alpha(stroke.alpha);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, stroke: &Stroke) {
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, start, end).is_err() {
            return;
        }
        self.apply_stroke(stroke);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.apply_stroke(stroke);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint, alpha: f64) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        match paint {
            Paint::Solid(css) => self.ctx.set_fill_style_str(css),
            Paint::Linear(_) => self.ctx.set_fill_style_str(fx_core::SparkColor::Violet.css()),
        }
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0));
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        if let Err(e) = self.ctx.fill_text(text, at.x, at.y) {
            log::debug!("fill_text failed: {e:?}");
        }
    }
}
