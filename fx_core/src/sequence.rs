//! Scripted launch sequence for the demo tachometer
//!
//! Idle for a moment, climb from 2000 rpm to max in 1000 rpm steps (shorter
//! holds above 10000), hold at max, then drop back to idle. Driven purely by
//! the frame delta handed to [`AccelerationSequence::advance`].

use crate::Params;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Idle,
    Launch { target: f64 },
    Hold,
    Done,
}

#[derive(Debug, Clone)]
pub struct AccelerationSequence {
    max: f64,
    stage: Stage,
    remaining: f32, // seconds left in the current stage
}

impl AccelerationSequence {
    pub fn new(max: f64) -> Self {
        Self {
            max,
            stage: Stage::Idle,
            remaining: Params::SEQ_IDLE,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// Every rpm the script visits, in order
    pub fn targets(max: f64) -> impl Iterator<Item = f64> {
        let mut next = Params::SEQ_FIRST_TARGET;
        std::iter::from_fn(move || {
            if next > max {
                return None;
            }
            let target = next;
            next += Params::SEQ_STEP;
            Some(target)
        })
    }

    fn hold_for(target: f64) -> f32 {
        if target < Params::SEQ_SLOW_BELOW {
            Params::SEQ_SLOW_HOLD
        } else {
            Params::SEQ_FAST_HOLD
        }
    }

    /// Advance by `dt` seconds. Returns the rpm values reached during this
    /// call, oldest first; a long frame can cross several stages at once.
    pub fn advance(&mut self, dt: f32) -> Vec<f64> {
        let mut reached = Vec::new();
        if self.is_done() {
            return reached;
        }

        self.remaining -= dt.max(0.0);
        while self.remaining <= 0.0 && !self.is_done() {
            let carry = self.remaining;
            let next = match self.stage {
                Stage::Idle => self.launch_or_hold(Params::SEQ_FIRST_TARGET),
                Stage::Launch { target } => self.launch_or_hold(target + Params::SEQ_STEP),
                Stage::Hold => Stage::Done,
                Stage::Done => Stage::Done,
            };

            match next {
                Stage::Launch { target } => {
                    reached.push(target);
                    self.remaining = carry + Self::hold_for(target);
                }
                Stage::Hold => self.remaining = carry + Params::SEQ_MAX_HOLD,
                Stage::Done => reached.push(Params::SEQ_IDLE_RPM),
                Stage::Idle => {}
            }
            log::debug!("launch sequence: {:?} -> {:?}", self.stage, next);
            self.stage = next;
        }
        reached
    }

    fn launch_or_hold(&self, target: f64) -> Stage {
        if target <= self.max {
            Stage::Launch { target }
        } else {
            Stage::Hold
        }
    }
}
