use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qsim::{queue_time, run_batch, BatchConfig, Scenario, ServiceQueue};

/// Generate a seeded random workload of service durations
fn random_queue(len: usize, seed: u64) -> ServiceQueue {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(1..=20u64)).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Queue-time engine benchmark");
    println!();

    // Single-scenario scaling
    for &len in &[1_000usize, 100_000, 1_000_000] {
        let queue = random_queue(len, 42);
        let start = Instant::now();
        let total = queue_time(&queue, 8)?;
        let elapsed = start.elapsed();
        println!(
            "  {:>9} items on 8 stations -> makespan {:>9} in {:?}",
            len, total, elapsed
        );
    }
    println!();

    // Batch throughput, sequential vs parallel
    let scenarios: Vec<Scenario> = (0..1_000u64)
        .map(|i| Scenario::new(random_queue(2_000, 1_000 + i), 1 + (i as usize % 16)))
        .collect();

    let start = Instant::now();
    let sequential = run_batch(&scenarios, &BatchConfig::sequential())?;
    let sequential_elapsed = start.elapsed();
    println!(
        "  batch of {} scenarios, sequential: {:?}",
        scenarios.len(),
        sequential_elapsed
    );

    let start = Instant::now();
    let parallel = run_batch(&scenarios, &BatchConfig::parallel())?;
    let parallel_elapsed = start.elapsed();
    println!(
        "  batch of {} scenarios, rayon:      {:?}",
        scenarios.len(),
        parallel_elapsed
    );

    assert_eq!(sequential, parallel);
    println!();
    println!("Done.");
    Ok(())
}
