use bevy::prelude::*;

use crate::config::SimParams;
use crate::math::Real;

use super::drops::DropScheduler;
use super::grid::{Cell, Grid};

/// Aggregate simulation state for one independent lattice instance.
///
/// Owns the grid, a same-size scratch buffer for the compute pass, and the
/// drop scheduler. One `advance_frame` call per display tick.
#[derive(Resource)]
pub struct WaveState {
    grid: Grid,
    scratch: Grid,
    scheduler: DropScheduler,
    params: SimParams,
}

impl WaveState {
    pub fn new(params: SimParams) -> Self {
        let hint = params.stability_hint(1.0 / 30.0);
        if hint >= 1.0 {
            warn!("spring configuration may be unstable at 30 Hz (stability hint {hint:.2})");
        }

        Self {
            grid: Grid::new(params.physical_size),
            scratch: Grid::new(params.physical_size),
            scheduler: DropScheduler::new(&params),
            params,
        }
    }

    /// One frame: advance the drop clock, then step the lattice.
    pub fn advance_frame(&mut self, dt: Real) {
        self.advance_clock(dt);
        self.step(dt);
    }

    /// Advance only the drop side: spawn and retire drops.
    pub fn advance_clock(&mut self, dt: Real) {
        self.scheduler.advance(dt, &self.params);
    }

    /// Advance every cell by one timestep.
    ///
    /// Two phases: next states are computed for all cells from the pre-step
    /// snapshot, then committed at once by swapping the buffers. A cell never
    /// sees a neighbor that was already updated this frame.
    pub fn step(&mut self, dt: Real) {
        let size = self.grid.size();

        for y in 0..size {
            for x in 0..size {
                let cell = *self.grid.get(x, y);
                let next = match self.scheduler.forced_height(x, y, &self.params) {
                    // Forced cell: track the drop envelope, keep the incoming
                    // velocity so motion resumes smoothly on release.
                    Some(forced) => Cell {
                        height: forced,
                        velocity: cell.velocity,
                        acceleration: 0.0,
                        rest_height: cell.rest_height,
                    },
                    None => self.integrate_cell(x, y, cell, dt),
                };
                *self.scratch.get_mut(x, y) = next;
            }
        }

        std::mem::swap(&mut self.grid, &mut self.scratch);
    }

    /// Semi-implicit Euler update for a free cell, damping folded into the
    /// velocity update.
    fn integrate_cell(&self, x: usize, y: usize, cell: Cell, dt: Real) -> Cell {
        let spring_force = self.params.spring_strength * self.grid.neighbor_height_delta(x, y);
        let ground_force = self.params.ground_stiffness * (cell.rest_height - cell.height);
        let acceleration = (spring_force + ground_force) / self.params.mass;

        let velocity = (cell.velocity + acceleration * dt) * self.params.damping;

        Cell {
            height: cell.height + velocity * dt,
            velocity,
            // Measured value, not the force-derived one; with damping < 1
            // they differ, and the display wants what actually happened.
            acceleration: (velocity - cell.velocity) / dt,
            rest_height: cell.rest_height,
        }
    }

    /// Row-major `(height, velocity, acceleration)` triples for the visible
    /// window, `display_size²` entries.
    pub fn sample_display_window(&self) -> impl Iterator<Item = (Real, Real, Real)> {
        self.grid
            .window(self.params.display_offset, self.params.display_size)
            .map(|cell| (cell.height, cell.velocity, cell.acceleration))
    }

    /// Visible cells with their display-window coordinates, row-major.
    pub fn display_cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let offset = self.params.display_offset;
        let window = self.params.display_size;
        (0..window).flat_map(move |y| {
            (0..window).map(move |x| (x, y, self.grid.get(x + offset, y + offset)))
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn scheduler(&self) -> &DropScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut DropScheduler {
        &mut self.scheduler
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn clock(&self) -> Real {
        self.scheduler.clock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: Real = 1.0 / 30.0;

    fn quiet_state() -> WaveState {
        WaveState::new(SimParams::without_drops())
    }

    #[test]
    fn flat_grid_at_rest_stays_at_rest() {
        let mut state = quiet_state();
        for _ in 0..10 {
            state.advance_frame(DT);
        }

        for cell in state.grid().cells() {
            assert_eq!(cell.height, 0.0);
            assert_eq!(cell.velocity, 0.0);
            assert_eq!(cell.acceleration, 0.0);
        }
    }

    #[test]
    fn forced_cell_tracks_the_envelope_and_keeps_velocity() {
        let mut state = quiet_state();
        state.grid_mut().get_mut(30, 30).velocity = 3.0;
        state.scheduler_mut().spawn_at(30, 30);

        for _ in 0..5 {
            state.advance_frame(DT);
            let expected = state
                .scheduler()
                .forced_height(30, 30, state.params())
                .unwrap();
            let cell = state.grid().get(30, 30);
            assert_eq!(cell.height, expected);
            assert_eq!(cell.acceleration, 0.0);
        }

        // Velocity survived the whole forced phase so far: the only change
        // it could have seen is the spring update, which forced cells skip.
        assert_eq!(state.grid().get(30, 30).velocity, 3.0);
    }

    #[test]
    fn display_cells_use_window_coordinates() {
        let mut state = quiet_state();
        // Physical (24, 24) is display (0, 0) with the default offset.
        state.grid_mut().get_mut(24, 24).height = 4.0;

        let (x, y, cell) = state.display_cells().next().unwrap();
        assert_eq!((x, y), (0, 0));
        assert_eq!(cell.height, 4.0);
    }

    #[test]
    fn recorded_acceleration_is_the_measured_delta() {
        let mut state = quiet_state();
        state.grid_mut().get_mut(20, 20).height = 1.0;

        let before = state.grid().get(20, 20).velocity;
        state.step(DT);
        let cell = state.grid().get(20, 20);

        let measured = (cell.velocity - before) / DT;
        assert!((cell.acceleration - measured).abs() < 1e-5);
    }
}
