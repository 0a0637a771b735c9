//! Hover spark effect over a button-sized canvas

use fx_core::{draw_field, Config, FxRng, ParticleField};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasSurface;

#[wasm_bindgen]
pub struct SparkButton {
    canvas: HtmlCanvasElement,
    surface: Option<CanvasSurface>,
    field: ParticleField,
    rng: FxRng,
}

#[wasm_bindgen]
impl SparkButton {
    /// `config_json` is an optional JSON object, e.g. `{"effectVariant": "f1"}`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<SparkButton, JsValue> {
        let config: Config = crate::load_config(config_json.as_deref())?;
        let surface = CanvasSurface::from_canvas(&canvas)
            .map_err(|e| log::warn!("spark button has no 2d context: {e:?}"))
            .ok();

        Ok(Self {
            canvas,
            surface,
            field: ParticleField::new(&config),
            rng: FxRng::from_seed(config.seed),
        })
    }

    pub fn hover_start(&mut self) {
        self.field.activate();
    }

    pub fn hover_end(&mut self) {
        self.field.deactivate();
    }

    /// Pointer position in client (viewport) coordinates
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        let rect = self.canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        // CSS pixels to canvas pixels
        let scale_x = f64::from(self.canvas.width()) / rect.width();
        let scale_y = f64::from(self.canvas.height()) / rect.height();
        let local = Vec2::new(
            ((client_x - rect.left()) * scale_x) as f32,
            ((client_y - rect.top()) * scale_y) as f32,
        );
        self.field.on_pointer_move(local, &mut self.rng);
    }

    /// Advance one tick and redraw. Call once per animation frame.
    pub fn frame(&mut self) {
        self.field.tick();
        draw_field(
            self.surface.as_mut(),
            &self.field,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    #[wasm_bindgen(getter)]
    pub fn is_hovered(&self) -> bool {
        self.field.is_active()
    }

    #[wasm_bindgen(getter)]
    pub fn spark_count(&self) -> usize {
        self.field.sparks().len()
    }

    #[wasm_bindgen(getter)]
    pub fn trail_count(&self) -> usize {
        self.field.trails().len()
    }
}
