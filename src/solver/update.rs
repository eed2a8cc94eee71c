use bevy::prelude::*;

use crate::core::WaveState;

/// Drop stage (advances the simulated clock, spawns and retires drops).
pub fn advance_drops(time: Res<Time>, mut state: ResMut<WaveState>) {
    let dt = time.delta_secs();
    state.advance_clock(dt);
}

/// Lattice stage (compute-then-commit spring update over all cells).
pub fn step_grid(time: Res<Time>, mut state: ResMut<WaveState>) {
    let dt = time.delta_secs();
    state.step(dt);
}
