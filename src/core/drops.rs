//! Drop scheduling
//!
//! Transient forcing events. A drop overrides one cell's height with an
//! eased envelope (smoothstep in, flat hold, smoothstep out) so that the
//! lattice never sees a step discontinuity.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DROP_SPAWN_MARGIN, SimParams};
use crate::math::{Real, smoothstep};

/// A single in-flight forcing event targeting one cell.
#[derive(Clone, Copy, Debug)]
pub struct Drop {
    pub x: usize,
    pub y: usize,
    /// Simulated-clock timestamp of creation.
    pub start_time: Real,
}

impl Drop {
    /// Forced height at simulated time `now`. Zero outside the drop's
    /// lifetime, `drop_height` during the hold phase, smoothstep-eased in
    /// between.
    pub fn forcing(&self, now: Real, params: &SimParams) -> Real {
        let age = now - self.start_time;
        let rise_end = params.drop_ease_in;
        let fall_start = params.drop_ease_in + params.drop_hold;
        let total = fall_start + params.drop_ease_out;

        if age < 0.0 || age > total {
            0.0
        } else if age < rise_end {
            smoothstep(age / rise_end) * params.drop_height
        } else if age < fall_start {
            params.drop_height
        } else {
            (1.0 - smoothstep((age - fall_start) / params.drop_ease_out)) * params.drop_height
        }
    }
}

/// Owns the set of live drops and the simulated clock that drives them.
pub struct DropScheduler {
    drops: Vec<Drop>,
    clock: Real,
    last_drop_time: Real,
    rng: StdRng,
}

impl DropScheduler {
    pub fn new(params: &SimParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Start one full interval in the past so the first drop lands on the
        // first advance. An infinite interval disables spawning entirely.
        let last_drop_time = if params.drop_interval.is_finite() {
            -params.drop_interval
        } else {
            0.0
        };

        Self {
            drops: Vec::new(),
            clock: 0.0,
            last_drop_time,
            rng,
        }
    }

    /// Advance the simulated clock: spawn at most one drop when the interval
    /// has elapsed, then retire every drop past its total duration.
    pub fn advance(&mut self, dt: Real, params: &SimParams) {
        self.clock += dt;

        if self.clock - self.last_drop_time >= params.drop_interval {
            let (x, y) = self.random_target(params);
            self.spawn_at(x, y);
            self.last_drop_time = self.clock;
        }

        let now = self.clock;
        let duration = params.drop_duration();
        self.drops.retain(|event| now - event.start_time <= duration);
    }

    /// Forcing height for cell `(x, y)` if a live drop targets it. When two
    /// drops land on the same cell, the first-created one wins.
    pub fn forced_height(&self, x: usize, y: usize, params: &SimParams) -> Option<Real> {
        self.drops
            .iter()
            .find(|event| event.x == x && event.y == y)
            .map(|event| event.forcing(self.clock, params))
    }

    /// Inject a drop at a fixed cell, starting now. Spawned drops go through
    /// this too.
    pub fn spawn_at(&mut self, x: usize, y: usize) {
        self.drops.push(Drop {
            x,
            y,
            start_time: self.clock,
        });
    }

    /// Uniformly-random cell inside the display window, inset by the spawn
    /// margin so drops never land near the visible edge.
    fn random_target(&mut self, params: &SimParams) -> (usize, usize) {
        let (lo, hi) = if params.display_size > 2 * DROP_SPAWN_MARGIN {
            (
                params.display_offset + DROP_SPAWN_MARGIN,
                params.display_offset + params.display_size - DROP_SPAWN_MARGIN,
            )
        } else {
            // Window too small to inset; use the whole of it.
            (
                params.display_offset,
                params.display_offset + params.display_size,
            )
        };

        (
            self.rng.random_range(lo..hi),
            self.rng.random_range(lo..hi),
        )
    }

    pub fn clock(&self) -> Real {
        self.clock
    }

    pub fn drops(&self) -> &[Drop] {
        &self.drops
    }
}
