pub mod drops;
pub mod grid;
pub mod wave_state;

pub use drops::{Drop, DropScheduler};
pub use grid::{Cell, Grid};
pub use wave_state::WaveState;
