//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use cellular_automata::application::{seed_fire, seed_life};
use cellular_automata::domain::{Grid, LifeRule, FireRule, Rule, Stepping};
use rand::{SeedableRng, rngs::StdRng};

/// Average milliseconds per generation
fn benchmark<R: Rule>(rule: &R, start_grid: &Grid<R::Cell>, stepping: Stepping, iterations: u32) -> f64 {
    let (width, height) = start_grid.dimensions();
    let mut grid = start_grid.clone();
    let mut next = Grid::new(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        stepping.step_into(&grid, rule, &mut next);
        std::mem::swap(&mut grid, &mut next);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Same as [`benchmark`], but through the allocating pure step
fn benchmark_pure<R: Rule>(rule: &R, start_grid: &Grid<R::Cell>, stepping: Stepping, iterations: u32) -> f64 {
    let mut grid = start_grid.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = match stepping {
            Stepping::Serial => grid.evolve(rule),
            Stepping::Parallel => grid.evolve_parallel(rule),
        };
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn print_row(label: &str, size: usize, serial_ms: f64, parallel_ms: f64) {
    println!(
        "{:>6} {:>12} {:>12.3} {:>12.3} {:>9.1}x",
        label,
        format!("{}x{}", size, size),
        serial_ms,
        parallel_ms,
        serial_ms / parallel_ms
    );
}

fn main() {
    println!("=== Cellular Automaton Stepping Benchmark ===\n");

    let sizes = [128, 500, 1000, 2000, 4000];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("{:>6} {:>12} {:>12} {:>12} {:>10}", "Rule", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<57}", "");

    for size in sizes {
        let life = seed_life((size, size), 0.5, &mut rng);
        let [serial, parallel] = Stepping::all().map(|s| benchmark(&LifeRule, &life, s, iterations));
        print_row(LifeRule.name(), size, serial, parallel);

        // Dense fuel keeps the fire front alive for the whole run
        let fire = seed_fire((size, size), 0.8, &mut rng);
        let [serial, parallel] = Stepping::all().map(|s| benchmark(&FireRule, &fire, s, iterations));
        print_row(FireRule.name(), size, serial, parallel);
    }

    println!("\n=== Throughput at 4000x4000 ===\n");

    let cells = 4000 * 4000;
    let grid = seed_life((4000, 4000), 0.5, &mut rng);
    for stepping in Stepping::all() {
        let ms = benchmark(&LifeRule, &grid, stepping, iterations);
        println!(
            "{:<10} {:.2} ms/gen, {:.1}M cells/sec",
            stepping.name(),
            ms,
            (cells as f64) / (ms / 1000.0) / 1_000_000.0
        );
    }

    println!("\n=== Allocating vs double-buffered at 2000x2000 ===\n");

    let grid = seed_life((2000, 2000), 0.5, &mut rng);
    for stepping in Stepping::all() {
        let pure = benchmark_pure(&LifeRule, &grid, stepping, iterations);
        let buffered = benchmark(&LifeRule, &grid, stepping, iterations);
        println!(
            "{:<10} {:.2} ms/gen allocating, {:.2} ms/gen buffered",
            stepping.name(),
            pure,
            buffered
        );
    }
}
