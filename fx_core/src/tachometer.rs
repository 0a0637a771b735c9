use crate::{clamp_rpm, AccelerationSequence, Config, ConfigError, Params, Readout};

/// Redline pulse: scale 1 -> 1.05 -> 1, a few times over
#[derive(Debug, Clone, Copy, Default)]
pub struct Pulse {
    elapsed: f32,
    active: bool,
}

impl Pulse {
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= Params::PULSE_PERIOD * Params::PULSE_REPEATS as f32 {
            self.active = false;
        }
    }

    pub fn scale(&self) -> f32 {
        if !self.active {
            return 1.0;
        }
        let phase = (self.elapsed % Params::PULSE_PERIOD) / Params::PULSE_PERIOD;
        let triangle = 1.0 - (2.0 * phase - 1.0).abs();
        1.0 + Params::PULSE_AMPLITUDE * triangle
    }
}

/// Whether the engine drives the wheels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    Engaged,
    /// Set by the cool-down at the end of the launch sequence
    Neutral,
}

/// Tachometer state: a single rpm value plus the optional demo script
#[derive(Debug, Clone)]
pub struct Tachometer {
    max: f64,
    rpm: f64,
    drive: Drive,
    sequence: Option<AccelerationSequence>,
    pulse: Pulse,
}

impl Tachometer {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            max: config.max_value,
            rpm: 0.0,
            drive: Drive::Engaged,
            sequence: None,
            pulse: Pulse::default(),
        })
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn rpm(&self) -> f64 {
        self.rpm
    }

    /// Controlled mode. Overrides (and stops) a running launch sequence.
    pub fn set_value(&mut self, rpm: f64) -> Readout {
        if self.sequence.take().is_some() {
            log::debug!("launch sequence cancelled by set_value");
        }
        self.rpm = clamp_rpm(rpm, self.max);
        self.drive = Drive::Engaged;
        self.readout()
    }

    pub fn readout(&self) -> Readout {
        match self.drive {
            Drive::Engaged => Readout::compute(self.rpm, self.max),
            Drive::Neutral => Readout::neutral(self.rpm, self.max),
        }
    }

    pub fn drive(&self) -> Drive {
        self.drive
    }

    pub fn start_sequence(&mut self) {
        log::info!("launch sequence started, max {} rpm", self.max);
        self.sequence = Some(AccelerationSequence::new(self.max));
        self.drive = Drive::Engaged;
    }

    /// Stop the script mid-way; the current value stays where it is
    pub fn cancel_sequence(&mut self) -> bool {
        self.sequence.take().is_some()
    }

    pub fn is_sequence_running(&self) -> bool {
        self.sequence.is_some()
    }

    /// Advance the script and the redline pulse by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.pulse.update(dt);

        let Some(sequence) = self.sequence.as_mut() else {
            return;
        };
        let redline_at = self.max * Params::REDLINE_FRACTION;

        let reached = sequence.advance(dt);
        let finished = sequence.is_done();

        for (i, &target) in reached.iter().enumerate() {
            self.rpm = clamp_rpm(target, self.max);
            if finished && i + 1 == reached.len() {
                // Cool-down: back to idle, out of gear
                self.drive = Drive::Neutral;
            } else if target >= redline_at {
                self.pulse.start();
            }
        }

        if finished {
            log::info!("launch sequence finished");
            self.sequence = None;
        }
    }

    pub fn pulse_scale(&self) -> f32 {
        self.pulse.scale()
    }
}
