//! Configuration and parameters
//!
//! Default tuning constants and per-run simulation settings.

pub mod constants;
pub mod sim_params;

pub use constants::*;
pub use sim_params::*;
