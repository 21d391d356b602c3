//! Generation throughput across grid sizes

use std::time::Instant;

use hex_wealth::{DEFAULT_STARTING_WEALTH, Grid, WealthRules};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn benchmark_evolve(size: usize, iterations: u32, rules: &WealthRules) -> (f64, usize) {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::random(size, size, 0.3, DEFAULT_STARTING_WEALTH, || rng.random::<f64>());

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve(rules, DEFAULT_STARTING_WEALTH).grid;
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, grid.population())
}

fn main() {
    println!("=== Hex Wealth Life Benchmark ===\n");

    let rules = WealthRules::default();
    let sizes = [25, 50, 100, 150, 500, 1000];
    let iterations = 50;

    println!("{:>10} {:>12} {:>14} {:>12}", "Size", "ms/gen", "Mcells/sec", "Population");
    println!("{:-<52}", "");

    for size in sizes {
        let (ms, population) = benchmark_evolve(size, iterations, &rules);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>14.1} {:>12}",
            format!("{size}x{size}"),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            population
        );
    }
}
