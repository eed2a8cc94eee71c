use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod math;
pub mod solver;

// Public re-exports for clean API
pub use config::SimParams;
pub use crate::core::{Cell, Drop, DropScheduler, Grid, WaveState};
pub use math::Real;

use crate::solver::{advance_drops, step_grid};

/// Spring-lattice ripple simulation as a Bevy plugin.
///
/// Inserts a [`WaveState`] built from the supplied parameters and runs the
/// drop and lattice stages, in that order, on the fixed-timestep schedule.
pub struct RipplePlugin {
    pub params: SimParams,
}

impl Default for RipplePlugin {
    fn default() -> Self {
        Self {
            params: SimParams::default(),
        }
    }
}

impl Plugin for RipplePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(WaveState::new(self.params.clone()))
            .add_systems(FixedUpdate, (advance_drops, step_grid).chain());
    }
}
