use crate::{GlowTrail, Params, Spark};

/// Integrate every spark by one tick, then drop the dead ones
pub fn advance_sparks(sparks: &mut Vec<Spark>) {
    for spark in sparks.iter_mut() {
        spark.pos += spark.vel;
        spark.vel.y += Params::GRAVITY;
        spark.vel.x *= Params::FRICTION;
        spark.life = spark.life.saturating_sub(1);
    }
    sparks.retain(|spark| !spark.is_dead());
}

/// Fade and widen every trail by one tick, then drop the faded ones
pub fn advance_trails(trails: &mut Vec<GlowTrail>) {
    for trail in trails.iter_mut() {
        trail.opacity *= Params::TRAIL_DECAY;
        trail.size *= Params::TRAIL_GROWTH;
    }
    trails.retain(|trail| !trail.is_faded(Params::TRAIL_MIN_OPACITY));
}

/// Keep only the `capacity` most recent entries (oldest are at the front)
pub fn keep_recent<T>(items: &mut Vec<T>, capacity: usize) {
    if items.len() > capacity {
        let excess = items.len() - capacity;
        items.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparkColor;
    use glam::Vec2;

    fn spark(life: u32, vel: Vec2) -> Spark {
        Spark {
            id: 0,
            pos: Vec2::ZERO,
            vel,
            life,
            max_life: life,
            size: 2.0,
            color: SparkColor::Violet,
        }
    }

    #[test]
    fn test_spark_integrates_then_decays() {
        let mut sparks = vec![spark(5, Vec2::new(2.0, -1.0))];
        advance_sparks(&mut sparks);

        let s = sparks[0];
        assert_eq!(s.pos, Vec2::new(2.0, -1.0), "moves by the old velocity");
        assert!((s.vel.x - 1.98).abs() < 1e-6, "x drag");
        assert!((s.vel.y - -0.9).abs() < 1e-6, "gravity, no vertical drag");
        assert_eq!(s.life, 4);
    }

    #[test]
    fn test_spark_removed_when_life_runs_out() {
        let mut sparks = vec![spark(1, Vec2::ZERO), spark(2, Vec2::ZERO)];
        advance_sparks(&mut sparks);
        assert_eq!(sparks.len(), 1);
        assert_eq!(sparks[0].life, 1);
        advance_sparks(&mut sparks);
        assert!(sparks.is_empty());
    }

    #[test]
    fn test_trail_fades_geometrically() {
        let mut trails = vec![GlowTrail::new(0, Vec2::ZERO, 10.0)];
        advance_trails(&mut trails);
        assert!((trails[0].opacity - 0.95).abs() < 1e-6);
        assert!((trails[0].size - 10.2).abs() < 1e-5);
    }

    #[test]
    fn test_trail_removed_below_threshold() {
        let mut trails = vec![GlowTrail::new(0, Vec2::ZERO, 4.0)];
        let mut ticks = 0;
        while !trails.is_empty() {
            advance_trails(&mut trails);
            ticks += 1;
        }
        // 0.95^44 ~ 0.105, 0.95^45 ~ 0.099
        assert_eq!(ticks, 45);
    }

    #[test]
    fn test_keep_recent_drops_oldest() {
        let mut items: Vec<u32> = (0..10).collect();
        keep_recent(&mut items, 4);
        assert_eq!(items, vec![6, 7, 8, 9]);

        keep_recent(&mut items, 8);
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_empty_collections_are_noop() {
        let mut sparks = Vec::new();
        let mut trails = Vec::new();
        advance_sparks(&mut sparks);
        advance_trails(&mut trails);
        assert!(sparks.is_empty());
        assert!(trails.is_empty());
    }
}
