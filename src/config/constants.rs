// Default tuning for the spring lattice.
use crate::math::Real;

// Spring network
pub const SPRING_STRENGTH: Real = 50.0; // Strong coupling between neighbors
pub const GROUND_STIFFNESS: Real = 2.5; // Weak ground anchor (allows waves to spread)
pub const DAMPING: Real = 0.98; // Very light damping for sustained waves
pub const MASS: Real = 1.0;

// Drop forcing
pub const DROP_HEIGHT: Real = 20.0;
pub const DROP_INTERVAL: Real = 5.0;
pub const DROP_EASE_IN: Real = 0.25;
pub const DROP_HOLD: Real = 0.75;
pub const DROP_EASE_OUT: Real = 0.5;

// Drops spawn inside the display window, inset by this many cells
pub const DROP_SPAWN_MARGIN: usize = 4;

// Grid layout: visible window centered in a 3x larger physics grid so waves
// can leave the display area before hitting the fixed boundary
pub const DISPLAY_SIZE: usize = 24;
pub const PHYSICAL_SIZE: usize = DISPLAY_SIZE * 3;
pub const DISPLAY_OFFSET: usize = DISPLAY_SIZE;

// Display mapping
pub const BASE_BRIGHTNESS: Real = 50.0; // Brightness at height 0
pub const HEIGHT_BRIGHTNESS_SCALE: Real = 20.0;
