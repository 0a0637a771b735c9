use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::{GlowTrail, Params, Spark, SparkColor};

/// Throw 1-3 sparks off the pointer in random directions
pub fn emit_sparks<R: Rng + ?Sized>(at: Vec2, next_id: &mut u32, rng: &mut R) -> Vec<Spark> {
    let count = rng.gen_range(Params::SPARKS_PER_MOVE_MIN..=Params::SPARKS_PER_MOVE_MAX);
    let half = Params::SPARK_JITTER / 2.0;

    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(Params::SPARK_SPEED_MIN..Params::SPARK_SPEED_MAX);
            let life = rng.gen_range(Params::SPARK_LIFE_MIN..Params::SPARK_LIFE_MAX);
            let jitter = Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half));
            let color = if rng.gen_bool(0.5) {
                SparkColor::Violet
            } else {
                SparkColor::Magenta
            };

            let spark = Spark {
                id: *next_id,
                pos: at + jitter,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life,
                max_life: life,
                size: rng.gen_range(Params::SPARK_SIZE_MIN..Params::SPARK_SIZE_MAX),
                color,
            };
            *next_id = next_id.wrapping_add(1);
            spark
        })
        .collect()
}

/// Leave a glow trail exactly at the pointer
pub fn emit_trail<R: Rng + ?Sized>(at: Vec2, next_id: &mut u32, rng: &mut R) -> GlowTrail {
    let size = rng.gen_range(Params::TRAIL_SIZE_MIN..Params::TRAIL_SIZE_MAX);
    let trail = GlowTrail::new(*next_id, at, size);
    *next_id = next_id.wrapping_add(1);
    trail
}

/// Tyre burn marks: slow, heavy embers that drift sideways and rise
pub fn emit_burn_marks<R: Rng + ?Sized>(at: Vec2, next_id: &mut u32, rng: &mut R) -> Vec<Spark> {
    let half_x = Params::BURN_JITTER_X / 2.0;

    (0..Params::BURNS_PER_MOVE)
        .map(|_| {
            let offset = Vec2::new(
                rng.gen_range(-half_x..half_x),
                rng.gen_range(0.0..Params::BURN_JITTER_Y),
            );
            // Rises: vy in (-1, 0]
            let vel = Vec2::new(rng.gen_range(-1.0..1.0), -rng.gen_range(0.0f32..1.0));
            let color = if rng.gen_bool(Params::BURN_ORANGE_CHANCE) {
                SparkColor::BurnOrange
            } else {
                SparkColor::BurnGold
            };

            let mark = Spark {
                id: *next_id,
                pos: at + offset,
                vel,
                life: rng.gen_range(Params::BURN_LIFE_MIN..Params::BURN_LIFE_MAX),
                max_life: Params::BURN_LIFE_MAX,
                size: rng.gen_range(Params::BURN_SIZE_MIN..Params::BURN_SIZE_MAX),
                color,
            };
            *next_id = next_id.wrapping_add(1);
            mark
        })
        .collect()
}
