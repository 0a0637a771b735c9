//! Tachometer read-outs and dial geometry

use glam::DVec2;

use crate::Params;

/// Display values derived from the current rpm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub rpm: u32,
    pub gear: u8,
    pub speed: u16,
    pub redline: bool,
    pub progress_percent: u8,
}

impl Readout {
    /// Derive every display value from `rpm`, clamped into `[0, max]` first.
    /// `max` must already be validated as positive.
    pub fn compute(rpm: f64, max: f64) -> Self {
        let rpm = clamp_rpm(rpm, max);
        let fraction = rpm / max;

        let gear = ((rpm / Params::GEAR_STEP).floor() as u8)
            .saturating_add(1)
            .min(Params::MAX_GEAR);

        Self {
            rpm: rpm.round() as u32,
            gear,
            speed: (fraction * Params::TOP_SPEED).floor() as u16,
            redline: rpm >= max * Params::REDLINE_FRACTION,
            progress_percent: (fraction * 100.0).round() as u8,
        }
    }

    /// Engine revving in neutral: first gear selected, car not moving,
    /// redline lamp off
    pub fn neutral(rpm: f64, max: f64) -> Self {
        Self {
            gear: 1,
            speed: 0,
            redline: false,
            ..Self::compute(rpm, max)
        }
    }
}

/// Clamp into `[0, max]`; NaN reads as zero
pub fn clamp_rpm(rpm: f64, max: f64) -> f64 {
    if rpm.is_nan() {
        return 0.0;
    }
    rpm.max(0.0).min(max)
}

/// Placement of the dial on a square canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub width: f64,
    pub height: f64,
    pub center: DVec2,
    pub radius: f64,
}

impl DialGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        let center = DVec2::new(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            center,
            radius: (center.x.min(center.y) - Params::DIAL_MARGIN).max(0.0),
        }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Angle for a 0..=1 fraction of the sweep
    pub fn fraction_angle(fraction: f64) -> f64 {
        Params::DIAL_START + fraction * Params::DIAL_SWEEP
    }

    pub fn tick_angle(index: u32) -> f64 {
        Self::fraction_angle(f64::from(index) / f64::from(Params::DIAL_TICKS))
    }

    pub fn needle_angle(rpm: f64, max: f64) -> f64 {
        Self::fraction_angle(clamp_rpm(rpm, max) / max)
    }

    /// Point at `angle`, `distance` from the center
    pub fn polar(&self, angle: f64, distance: f64) -> DVec2 {
        self.center + DVec2::new(angle.cos(), angle.sin()) * distance
    }
}
