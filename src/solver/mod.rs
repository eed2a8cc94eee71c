// src/solver/mod.rs
pub mod update;

// Re-export from the solver module
pub use update::*;
