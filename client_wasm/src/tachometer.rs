//! Canvas tachometer with controlled and demo modes

use fx_core::{clamp_dt, draw_dial, DialGeometry, Readout, Tachometer, Time};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasSurface;

#[wasm_bindgen(js_name = Tachometer)]
pub struct WebTachometer {
    surface: Option<CanvasSurface>,
    dial: DialGeometry,
    tach: Tachometer,
    time: Time,
}

#[wasm_bindgen(js_class = Tachometer)]
impl WebTachometer {
    /// Sizes the canvas from `sizeVariant` in the optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<WebTachometer, JsValue> {
        let config = crate::load_config(config_json.as_deref())?;
        let tach = Tachometer::new(&config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let side = config.size_variant.side();
        canvas.set_width(side as u32);
        canvas.set_height(side as u32);
        let surface = CanvasSurface::from_canvas(&canvas)
            .map_err(|e| log::warn!("tachometer has no 2d context: {e:?}"))
            .ok();

        Ok(Self {
            surface,
            dial: DialGeometry::square(side),
            tach,
            time: Time::new(0.0, 0.0),
        })
    }

    /// Controlled mode: show `rpm` (clamped to the configured max)
    pub fn set_rpm(&mut self, rpm: f64) {
        self.tach.set_value(rpm);
    }

    /// Demo mode: run the scripted launch from idle to max and back
    pub fn start_sequence(&mut self) {
        self.tach.start_sequence();
    }

    pub fn cancel_sequence(&mut self) -> bool {
        self.tach.cancel_sequence()
    }

    /// Advance by `dt_ms` milliseconds and redraw
    pub fn frame(&mut self, dt_ms: f64) {
        self.time.advance(clamp_dt((dt_ms / 1000.0) as f32));
        self.tach.advance(self.time.dt);
        draw_dial(self.surface.as_mut(), &self.dial, &self.tach);
    }

    fn readout(&self) -> Readout {
        self.tach.readout()
    }

    #[wasm_bindgen(getter)]
    pub fn rpm(&self) -> u32 {
        self.readout().rpm
    }

    #[wasm_bindgen(getter)]
    pub fn gear(&self) -> u8 {
        self.readout().gear
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> u16 {
        self.readout().speed
    }

    #[wasm_bindgen(getter)]
    pub fn is_redline(&self) -> bool {
        self.readout().redline
    }

    #[wasm_bindgen(getter)]
    pub fn progress_percent(&self) -> u8 {
        self.readout().progress_percent
    }

    #[wasm_bindgen(getter)]
    pub fn sequence_running(&self) -> bool {
        self.tach.is_sequence_running()
    }

    /// Scale factor for the redline pulse (1.0 when idle)
    #[wasm_bindgen(getter)]
    pub fn pulse_scale(&self) -> f32 {
        self.tach.pulse_scale()
    }
}
