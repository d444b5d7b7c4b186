use anyhow::{bail, Result};
use clap::Parser;
use eight_puzzle::board::{Board, DEFAULT_SIZE, MAX_SIZE};
use eight_puzzle::heuristics::{Heuristic, HeuristicKind};
use eight_puzzle::solver::{solve_with_config, SearchConfig, SearchOutcome};
use log::warn;
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare heuristics on seeded random boards", long_about = None)]
struct Args {
    /// Number of random boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Random blank moves applied to the goal to build each board
    #[clap(short, long, default_value_t = 30)]
    steps: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Board side length
    #[clap(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Per-search expansion budget
    #[clap(long)]
    max_expansions: Option<usize>,
}

#[derive(Default)]
struct Totals {
    generated: Vec<usize>,
    expanded: Vec<usize>,
    aborted: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if !(2..=MAX_SIZE).contains(&args.size) {
        bail!("board size must be between 2 and {}, got {}", MAX_SIZE, args.size);
    }

    let config = SearchConfig {
        max_expansions: args.max_expansions,
        ..SearchConfig::default()
    };
    let goal = Board::goal(args.size);

    let mut totals: HashMap<HeuristicKind, Totals> = HashMap::new();

    println!("Starting heuristic evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let start = Board::scrambled(args.size, args.steps, current_seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        let mut optimal: Option<usize> = None;
        for kind in HeuristicKind::ALL {
            let outcome = solve_with_config(&start, &goal, &kind, &config)?;
            let entry = totals.entry(kind).or_default();
            match &outcome {
                SearchOutcome::Solved(solution) => {
                    println!(
                        "  Heuristic: {:<10}, Moves: {:<4}, Generated: {:<8}, Expanded: {}",
                        kind.name(),
                        solution.move_count,
                        solution.states_generated,
                        solution.states_expanded
                    );
                    entry.generated.push(solution.states_generated);
                    entry.expanded.push(solution.states_expanded);
                    match optimal {
                        None => optimal = Some(solution.move_count),
                        Some(expected) if expected != solution.move_count => warn!(
                            "heuristic {} found {} moves on seed {}, expected {}",
                            kind, solution.move_count, current_seed, expected
                        ),
                        Some(_) => {}
                    }
                }
                other => {
                    println!("  Heuristic: {:<10}, {:?}", kind.name(), other);
                    entry.aborted += 1;
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Average States ---");

    let mut averages: Vec<(HeuristicKind, f64, f64, usize)> = Vec::new();
    for kind in HeuristicKind::ALL {
        let entry = match totals.get(&kind) {
            Some(entry) => entry,
            None => continue,
        };
        if entry.generated.is_empty() {
            println!("Heuristic {}: No solved boards recorded.", kind);
            continue;
        }
        let solved = entry.generated.len() as f64;
        let avg_generated = entry.generated.iter().sum::<usize>() as f64 / solved;
        let avg_expanded = entry.expanded.iter().sum::<usize>() as f64 / solved;
        averages.push((kind, avg_generated, avg_expanded, entry.aborted));
    }

    // Fewest generated states first
    averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (kind, avg_generated, avg_expanded, aborted) in averages {
        println!(
            "Heuristic {:<10}: Generated = {:.2}, Expanded = {:.2}, Unsolved = {}",
            kind.name(),
            avg_generated,
            avg_expanded,
            aborted
        );
    }
    Ok(())
}
