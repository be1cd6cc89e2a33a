//! Performance benchmark comparing the serial and parallel steppers

use std::time::Instant;

use rand::Rng;
use tile_life::{Cell, Grid, Tile};

/// Mixed grid: mostly mono tiles (30% alive), with some rainbows and constants.
/// Multi-color tiles are left out since random neighborhoods can produce
/// unresolvable birth votes.
fn random_grid(size: usize) -> Grid {
    let mut rng = rand::rng();
    let mut grid = Grid::new(size, size).expect("benchmark sizes are positive");
    for row in 0..size {
        for col in 0..size {
            let tile = match rng.random_range(0..10) {
                0 => Tile::Rainbow { age: rng.random_range(0..6) },
                1 => Tile::Constant { age: rng.random_range(0..2) },
                _ if rng.random_bool(0.3) => Tile::Mono { age: 1 },
                _ => Tile::Mono { age: 0 },
            };
            grid.set(row, col, Cell::Tile(tile)).expect("in bounds");
        }
    }
    grid
}

fn benchmark(size: usize, iterations: u32, step: fn(&Grid) -> tile_life::error::Result<Grid>) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid).expect("mono, rainbow and constant tiles always evolve");
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Tile Life Stepper Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Grid::evolve);
        let parallel_ms = benchmark(size, iterations, Grid::evolve_parallel);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
