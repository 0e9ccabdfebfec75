//! Quick search performance and convergence test

use evo_extremum::{
    compute::evolution::{SearchRng, SnapshotStats, run},
    schema::{MutationConfig, ObjectiveSpec, OptimizationMode, SearchConfig},
};
use std::time::Instant;

fn main() {
    println!("=== Search Performance Test ===\n");

    let objective = ObjectiveSpec::Polynomial {
        coefficients: vec![0.0, 0.0, 1.0],
    };

    // Test different population sizes
    for agents in [10, 100, 1000] {
        println!("Agents: {}", agents);

        let config = SearchConfig {
            left: -2.0,
            right: 2.0,
            mode: OptimizationMode::Minimize,
            agent_count: agents,
            generation_count: 100,
            mutation: MutationConfig {
                intensity: 0.01,
                frequency: 0.5,
            },
            random_seed: Some(42),
        };

        let start = Instant::now();
        let mut rng = SearchRng::new(42);
        let snapshots = match run(&config, &objective, &mut rng) {
            Ok(snapshots) => snapshots,
            Err(e) => {
                eprintln!("  Search failed: {}", e);
                continue;
            }
        };
        let elapsed = start.elapsed();

        let evaluations = (config.generation_count + 1) * config.agent_count;
        let evals_per_sec = evaluations as f64 / elapsed.as_secs_f64();

        println!("  Generations:    {}", snapshots.len());
        println!("  Evaluations:    {}", evaluations);
        println!("  Elapsed:        {:.4}s", elapsed.as_secs_f64());
        println!("  Evals/sec:      {:.1}", evals_per_sec);
        if let Some(best) = snapshots
            .last()
            .and_then(|s| SnapshotStats::from_snapshot(s, config.mode).best)
        {
            println!("  Best point:     f({:.5}) = {:.6}", best.input, best.output);
        }
        println!();
    }

    println!("=== Convergence Trace (4 agents, 10 generations) ===\n");

    let config = SearchConfig {
        left: -2.0,
        right: 2.0,
        mode: OptimizationMode::Minimize,
        agent_count: 4,
        generation_count: 10,
        mutation: MutationConfig {
            intensity: 0.1,
            frequency: 0.5,
        },
        random_seed: Some(7),
    };

    let mut rng = SearchRng::new(7);
    match run(&config, &objective, &mut rng) {
        Ok(snapshots) => {
            for snapshot in &snapshots {
                println!(
                    "  Generation {:>2}: mean surviving x = {:+.4}",
                    snapshot.generation(),
                    snapshot.mean_surviving_input().unwrap_or(f64::NAN)
                );
            }
        }
        Err(e) => eprintln!("  Search failed: {}", e),
    }
}
