//! Evo Extremum CLI - Run searches from JSON job files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use evo_extremum::{
    compute::{
        FunctionCurve,
        evolution::{EvolutionEngine, SearchRng, SnapshotStats},
    },
    schema::{SearchJob, SearchReport},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <job.json> [report.json]", args[0]);
        eprintln!();
        eprintln!("Search for an extremum of a function from a JSON job file.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  job.json     Path to search job file");
        eprintln!("  report.json  Optional path to write the replay report");
        eprintln!();
        eprintln!("Example job is printed with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_job();
        return;
    }

    let job_path = PathBuf::from(&args[1]);
    let report_path = args.get(2).map(PathBuf::from);

    // Load job
    let job_str = fs::read_to_string(&job_path).unwrap_or_else(|e| {
        eprintln!("Error reading job file: {}", e);
        std::process::exit(1);
    });

    let job: SearchJob = serde_json::from_str(&job_str).unwrap_or_else(|e| {
        eprintln!("Error parsing job: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = job.validate() {
        eprintln!("Invalid job: {}", e);
        std::process::exit(1);
    }

    let search = job.search.clone();

    println!("Evo Extremum Search");
    println!("===================");
    println!("Function: f(x) = {}", job.objective.describe());
    println!("Interval: [{}, {}]", search.left, search.right);
    println!("Mode: {:?}", search.mode);
    println!("Agents: {}", search.agent_count);
    println!("Generations: {}", search.generation_count);
    println!(
        "Mutation: intensity={}, frequency={}",
        search.mutation.intensity, search.mutation.frequency
    );
    println!();

    let rng = SearchRng::from_optional_seed(search.random_seed);
    let engine = EvolutionEngine::new(search.clone(), &job.objective, rng).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // Run search
    println!("Running search...");
    let start = Instant::now();
    let total = search.generation_count;

    let snapshots = engine
        .run_with_callback(|snapshot| {
            let done = snapshot.generation() + 1;

            // Print progress every 10%
            if done % (total / 10).max(1) == 0 {
                let stats = SnapshotStats::from_snapshot(snapshot, search.mode);
                match stats.best {
                    Some(best) => println!(
                        "  Generation {}/{}: mean x={:.6}, best f({:.6})={:.6}",
                        done, total, stats.mean_input, best.input, best.output
                    ),
                    None => println!("  Generation {}/{}: no survivors", done, total),
                }
            }
        })
        .unwrap_or_else(|e| {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        });

    let elapsed = start.elapsed();

    println!();
    if let Some(last) = snapshots.last() {
        let stats = SnapshotStats::from_snapshot(last, search.mode);
        println!("Final generation:");
        println!("  Surviving: {}", stats.surviving);
        println!("  Discarded: {}", stats.discarded);
        println!("  Mean x: {:.6}", stats.mean_input);
        println!("  Mean f(x): {:.6}", stats.mean_output);
        if let Some(best) = stats.best {
            println!("  Best: f({:.6}) = {:.6}", best.input, best.output);
        }
        println!();
    }
    println!("Time: {:.3}s", elapsed.as_secs_f64());

    let Some(report_path) = report_path else {
        return;
    };

    let curve = FunctionCurve::sample(&job.objective, &search, &job.plot).unwrap_or_else(|e| {
        eprintln!("Error sampling curve: {}", e);
        std::process::exit(1);
    });
    if curve.gaps > 0 {
        println!("Curve: {} samples undefined", curve.gaps);
    }

    let report = SearchReport {
        search,
        objective: job.objective,
        curve: curve.points,
        snapshots,
    };

    if let Err(e) = report.save_json(&report_path) {
        eprintln!("Error writing report: {}", e);
        std::process::exit(1);
    }
    println!("Report written to {}", report_path.display());
}

fn print_example_job() {
    let job = SearchJob::default();

    println!("Example job (job.json):");
    match serde_json::to_string_pretty(&job) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example: {}", e),
    }
}
