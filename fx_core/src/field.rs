//! Spark button particle field
//!
//! Owns the sparks and glow trails of one button. The host forwards hover
//! changes and pointer moves, and calls [`ParticleField::tick`] once per frame.

use glam::Vec2;
use rand::Rng;

use crate::systems::*;
use crate::{Config, EffectVariant, GlowTrail, Params, Spark};

pub struct ParticleField {
    sparks: Vec<Spark>,
    trails: Vec<GlowTrail>,
    active: bool,
    next_spark_id: u32,
    next_trail_id: u32,
    spark_capacity: usize,
    trail_capacity: usize,
    burn_capacity: usize,
    variant: EffectVariant,
    burns: bool,
    glow_color: String,
}

impl ParticleField {
    pub fn new(config: &Config) -> Self {
        Self {
            sparks: Vec::with_capacity(
                config
                    .burn_capacity()
                    .min(Params::MAX_CAPACITY.saturating_mul(2)),
            ),
            trails: Vec::with_capacity(config.trail_capacity.min(Params::MAX_CAPACITY)),
            active: false,
            next_spark_id: 0,
            next_trail_id: 0,
            spark_capacity: config.particle_capacity.max(1),
            trail_capacity: config.trail_capacity.max(1),
            burn_capacity: config.burn_capacity().max(1),
            variant: config.effect_variant,
            burns: config.emits_burns(),
            glow_color: config.glow_color().to_owned(),
        }
    }

    /// Hover start
    pub fn activate(&mut self) {
        if !self.active {
            log::debug!("particle field activated");
        }
        self.active = true;
    }

    /// Hover end: everything disappears at once, no fade-out
    pub fn deactivate(&mut self) {
        self.active = false;
        self.sparks.clear();
        self.trails.clear();
    }

    /// Emit particles at a surface-local pointer position.
    ///
    /// Ignored while inactive or for non-finite coordinates. Returns the
    /// number of particles created.
    pub fn on_pointer_move<R: Rng + ?Sized>(&mut self, local: Vec2, rng: &mut R) -> usize {
        if !self.active || !local.is_finite() {
            return 0;
        }
        let mut emitted = 0;

        if self.variant.emits_trails() {
            self.trails
                .push(emit_trail(local, &mut self.next_trail_id, rng));
            keep_recent(&mut self.trails, self.trail_capacity);
            emitted += 1;
        }

        if self.variant.emits_sparks() {
            let sparks = emit_sparks(local, &mut self.next_spark_id, rng);
            emitted += sparks.len();
            self.sparks.extend(sparks);
            keep_recent(&mut self.sparks, self.spark_capacity);
        }

        if self.burns {
            let marks = emit_burn_marks(local, &mut self.next_spark_id, rng);
            emitted += marks.len();
            self.sparks.extend(marks);
            keep_recent(&mut self.sparks, self.burn_capacity);
        }

        emitted
    }

    /// Advance one animation frame. Does nothing while inactive.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        advance_sparks(&mut self.sparks);
        advance_trails(&mut self.trails);
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn trails(&self) -> &[GlowTrail] {
        &self.trails
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty() && self.trails.is_empty()
    }

    /// Largest spark count this field can hold
    pub fn spark_bound(&self) -> usize {
        if self.burns {
            self.burn_capacity.max(self.spark_capacity)
        } else {
            self.spark_capacity
        }
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    pub fn glow_color(&self) -> &str {
        &self.glow_color
    }
}
