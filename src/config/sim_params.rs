use bevy::prelude::*;

use crate::config::constants;
use crate::math::Real;

/// Simulation parameters, fixed for the lifetime of a [`crate::WaveState`].
#[derive(Resource, Clone)]
pub struct SimParams {
    /// Coupling stiffness between a cell and its 4 orthogonal neighbors.
    pub spring_strength: Real,

    /// Stiffness of the anchor spring pulling each cell toward its rest
    /// height. Kept much weaker than `spring_strength` so disturbances
    /// propagate as waves instead of snapping back locally.
    pub ground_stiffness: Real,

    /// Per-step multiplicative velocity decay, in (0, 1].
    pub damping: Real,

    /// Mass of a single lattice point.
    pub mass: Real,

    /// Peak forced height of a drop.
    pub drop_height: Real,

    /// Simulated seconds between drop spawns.
    pub drop_interval: Real,

    /// Drop envelope phase durations, in simulated seconds.
    pub drop_ease_in: Real,
    pub drop_hold: Real,
    pub drop_ease_out: Real,

    /// Side length of the full physics grid.
    pub physical_size: usize,

    /// Side length of the visible sub-window.
    pub display_size: usize,

    /// Offset of the visible sub-window within the physics grid.
    pub display_offset: usize,

    /// Seed for drop placement. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            spring_strength: constants::SPRING_STRENGTH,
            ground_stiffness: constants::GROUND_STIFFNESS,
            damping: constants::DAMPING,
            mass: constants::MASS,
            drop_height: constants::DROP_HEIGHT,
            drop_interval: constants::DROP_INTERVAL,
            drop_ease_in: constants::DROP_EASE_IN,
            drop_hold: constants::DROP_HOLD,
            drop_ease_out: constants::DROP_EASE_OUT,
            physical_size: constants::PHYSICAL_SIZE,
            display_size: constants::DISPLAY_SIZE,
            display_offset: constants::DISPLAY_OFFSET,
            seed: None,
        }
    }
}

impl SimParams {
    /// Parameters with drop scheduling disabled (no drop ever spawns).
    pub fn without_drops() -> Self {
        Self {
            drop_interval: Real::INFINITY,
            ..Self::default()
        }
    }

    /// Set the drop placement seed for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a physics grid of `physical` cells per side with a centered
    /// `display` window.
    pub fn with_grid(mut self, physical: usize, display: usize) -> Self {
        self.physical_size = physical;
        self.display_size = display;
        self.display_offset = (physical - display) / 2;
        self
    }

    /// Total drop lifetime: ease-in, hold, then ease-out.
    pub fn drop_duration(&self) -> Real {
        self.drop_ease_in + self.drop_hold + self.drop_ease_out
    }

    /// Rough explicit-integration stability figure for a timestep `dt`.
    ///
    /// The stiffest restoring force a cell can see is all four neighbor
    /// springs plus the ground spring; values well above 1.0 mean the
    /// lattice will likely blow up. Advisory only, never enforced.
    pub fn stability_hint(&self, dt: Real) -> Real {
        (4.0 * self.spring_strength + self.ground_stiffness) * dt * dt / self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_stable_at_30hz() {
        let params = SimParams::default();
        assert!(params.stability_hint(1.0 / 30.0) < 1.0);
    }

    #[test]
    fn with_grid_centers_the_display_window() {
        let params = SimParams::default().with_grid(72, 24);
        assert_eq!(params.display_offset, 24);
    }
}
