pub mod components;
pub mod config;
pub mod draw;
pub mod error;
pub mod field;
pub mod gauge;
pub mod params;
pub mod resources;
pub mod sequence;
pub mod systems;
pub mod tachometer;

pub use components::*;
pub use config::*;
pub use draw::*;
pub use error::*;
pub use field::*;
pub use gauge::*;
pub use params::*;
pub use resources::*;
pub use sequence::*;
pub use tachometer::*;

/// Clamp a host frame delta to `[0, MAX_DT]`. NaN reads as no time passing,
/// a long pause after a background tab resumes as one `MAX_DT` frame.
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        return 0.0;
    }
    dt.min(Params::MAX_DT).max(0.0)
}

/// Advance both widgets by one host frame
pub fn step(field: &mut ParticleField, tach: &mut Tachometer, time: &mut Time) {
    let clamped_dt = clamp_dt(time.dt);

    field.tick();
    tach.advance(clamped_dt);

    time.now += clamped_dt;
}
