/// Simple custom benchmarking without criterion
use std::time::Instant;

use ripple2d::{SimParams, WaveState};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

fn main() {
    println!("\n=== ripple2d Benchmarks ===\n");

    let dt = 1.0 / 30.0;

    println!("--- Lattice step ---");
    for &size in &[24usize, 72, 144, 288] {
        let params = SimParams::default().with_grid(size, size / 3);
        let mut state = WaveState::new(params);
        state.grid_mut().get_mut(size / 2, size / 2).height = 10.0;

        time_it(&format!("step ({size}x{size})"), 100, || {
            state.advance_frame(dt);
        });
    }

    println!("\n--- Display sampling ---");
    let mut state = WaveState::new(SimParams::default());
    state.advance_frame(dt);
    time_it("sample_display_window (24x24)", 1000, || {
        let count = state.sample_display_window().count();
        assert_eq!(count, 24 * 24);
    });
}
