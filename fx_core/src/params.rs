use std::f64::consts::PI;

/// Tuning parameters for the spark button and the tachometer
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Sparks
    pub const GRAVITY: f32 = 0.1; // added to vel.y every tick
    /// Horizontal drag only. Gravity owns the vertical axis, so sparks fall in
    /// an arc while their sideways motion bleeds off.
    pub const FRICTION: f32 = 0.99;
    pub const SPARK_SPEED_MIN: f32 = 1.0;
    pub const SPARK_SPEED_MAX: f32 = 4.0;
    pub const SPARK_LIFE_MIN: u32 = 20; // ticks
    pub const SPARK_LIFE_MAX: u32 = 50; // exclusive
    pub const SPARK_SIZE_MIN: f32 = 1.0;
    pub const SPARK_SIZE_MAX: f32 = 4.0;
    pub const SPARK_JITTER: f32 = 10.0; // spawn box side around the pointer
    pub const SPARKS_PER_MOVE_MIN: usize = 1;
    pub const SPARKS_PER_MOVE_MAX: usize = 3; // inclusive
    pub const SPARK_CAPACITY: usize = 15;

    // Glow trails
    pub const TRAIL_SIZE_MIN: f32 = 4.0;
    pub const TRAIL_SIZE_MAX: f32 = 12.0;
    pub const TRAIL_DECAY: f32 = 0.95;
    pub const TRAIL_GROWTH: f32 = 1.02;
    pub const TRAIL_MIN_OPACITY: f32 = 0.1;
    pub const TRAIL_CAPACITY: usize = 8;
    /// Largest accepted particle or trail capacity
    pub const MAX_CAPACITY: usize = 1024;

    // Tyre burn marks (race mode)
    pub const BURNS_PER_MOVE: usize = 2;
    pub const BURN_JITTER_X: f32 = 20.0;
    pub const BURN_JITTER_Y: f32 = 5.0;
    pub const BURN_LIFE_MIN: u32 = 30;
    pub const BURN_LIFE_MAX: u32 = 70; // also the opacity reference
    pub const BURN_SIZE_MIN: f32 = 3.0;
    pub const BURN_SIZE_MAX: f32 = 5.0;
    pub const BURN_ORANGE_CHANCE: f64 = 0.7;

    // Gauge
    pub const MAX_RPM: f64 = 18000.0;
    pub const GEAR_STEP: f64 = 2000.0;
    pub const MAX_GEAR: u8 = 8;
    pub const TOP_SPEED: f64 = 400.0; // km/h at max rpm
    pub const REDLINE_FRACTION: f64 = 0.75;

    // Dial
    pub const DIAL_START: f64 = PI * 0.75;
    pub const DIAL_SWEEP: f64 = PI * 1.5;
    pub const DIAL_TICKS: u32 = 18; // intervals, so 19 marks
    pub const DIAL_MAJOR_EVERY: u32 = 3;
    pub const DIAL_TICK_VALUE: u32 = 1000;
    pub const DIAL_MARGIN: f64 = 20.0;

    // Launch sequence (seconds)
    pub const SEQ_IDLE: f32 = 1.0;
    pub const SEQ_FIRST_TARGET: f64 = 2000.0;
    pub const SEQ_STEP: f64 = 1000.0;
    pub const SEQ_SLOW_BELOW: f64 = 10000.0;
    pub const SEQ_SLOW_HOLD: f32 = 0.8;
    pub const SEQ_FAST_HOLD: f32 = 0.4;
    pub const SEQ_MAX_HOLD: f32 = 2.0;
    pub const SEQ_IDLE_RPM: f64 = 1000.0;

    // Redline pulse
    pub const PULSE_PERIOD: f32 = 0.2;
    pub const PULSE_REPEATS: u32 = 3;
    pub const PULSE_AMPLITUDE: f32 = 0.05;

    // Frame
    pub const MAX_DT: f32 = 0.1; // clamp to prevent large jumps
}
