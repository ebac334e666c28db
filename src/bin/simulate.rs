//! Monty Hall strategy simulation: stay vs switch win rates.
//!
//! Runs N seeded trials per strategy, prints the two win rates and a two-bar
//! chart. With `--output DIR`, also writes `simulation_statistics.json`.

use std::time::Instant;

use monty::env_config;
use monty::report::{format_report, render_bar_chart};
use monty::simulation::{aggregate_statistics, save_statistics};
use monty::{simulate, simulate_fast, simulate_paired};

struct Args {
    num_trials: usize,
    seed: u64,
    paired: bool,
    fast: bool,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_trials = 10_000usize;
    let mut seed = 42u64;
    let mut paired = false;
    let mut fast = false;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    num_trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--paired" => {
                paired = true;
            }
            "--fast" => {
                fast = true;
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: monty-simulate [--trials N] [--seed S] [--paired] [--fast] [--output DIR]");
                println!();
                println!("Options:");
                println!("  --trials N    Trials per strategy (default: 10000)");
                println!("  --seed S      RNG seed (default: 42)");
                println!("  --paired      Evaluate both strategies on the same per-trial draw");
                println!("  --fast        SplitMix64 fast path (one u64 per game, unpaired)");
                println!("  --output DIR  Write simulation_statistics.json to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: monty-simulate [--trials N] [--seed S] [--paired] [--fast] [--output DIR]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if paired && fast {
        eprintln!("--paired and --fast are mutually exclusive");
        std::process::exit(1);
    }

    Args {
        num_trials,
        seed,
        paired,
        fast,
        output,
    }
}

fn main() {
    let args = parse_args();
    let num_threads = env_config::init_rayon_threads();

    let mode = if args.paired {
        "paired"
    } else if args.fast {
        "fast (unpaired)"
    } else {
        "unpaired"
    };

    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Monty Hall Simulation: Stay vs Switch");
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Trials per strategy: {:>10}", args.num_trials);
    println!("  Seed:                {:>10}", args.seed);
    println!("  Threads:             {:>10}", num_threads);
    println!("  Mode:                {:>10}", mode);
    if let Some(ref dir) = args.output {
        println!("  Output:      {}", dir);
    }
    println!();

    let sim_start = Instant::now();
    let result = if args.paired {
        simulate_paired(args.num_trials, args.seed)
    } else if args.fast {
        simulate_fast(args.num_trials, args.seed)
    } else {
        simulate(args.num_trials, args.seed)
    }
    .unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let sim_elapsed = sim_start.elapsed();

    let per_trial_ns = sim_elapsed.as_secs_f64() * 1e9 / args.num_trials as f64;
    let throughput = args.num_trials as f64 / sim_elapsed.as_secs_f64();

    println!(
        "  Elapsed:     {:.1} ms",
        sim_elapsed.as_secs_f64() * 1000.0
    );
    println!("  Per trial:   {:.1} ns", per_trial_ns);
    println!("  Throughput:  {:.0} trials/sec", throughput);
    println!();

    println!("{}", format_report(&result));
    println!();
    println!("{}", render_bar_chart(&result));

    if let Some(ref dir) = args.output {
        let stats = aggregate_statistics(&result, args.paired);
        let json_path = format!("{}/simulation_statistics.json", dir);
        save_statistics(&stats, &json_path);
        println!();
        println!("  Statistics:  {}", json_path);
    }
}
