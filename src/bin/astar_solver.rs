use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use eight_puzzle::board::Board;
use eight_puzzle::frontier::VisitedPolicy;
use eight_puzzle::heuristics::HeuristicKind;
use eight_puzzle::solvability::ParityRule;
use eight_puzzle::solver::{solve_with_config, SearchConfig, SearchOutcome};
use eight_puzzle::utils::{parse_board, parse_flat_board};
use std::fs;
use std::path::PathBuf;

const DEMO_START: [[u32; 3]; 3] = [[3, 1, 2], [4, 7, 5], [6, 8, 0]];

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicArg {
    Zero,
    Misplaced,
    Manhattan,
    All,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ParityArg {
    Canonical,
    Relative,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a sliding-tile puzzle with A* search", long_about = None)]
struct Args {
    /// Start board as a row-major list, e.g. "3,1,2,4,7,5,6,8,0"
    #[clap(long, conflicts_with = "start_file")]
    start: Option<String>,

    /// Path to a start board file (one row per line)
    #[clap(long)]
    start_file: Option<PathBuf>,

    /// Goal board as a row-major list. Defaults to 0,1,..,N²-1
    #[clap(long, conflicts_with = "goal_file")]
    goal: Option<String>,

    /// Path to a goal board file (one row per line)
    #[clap(long)]
    goal_file: Option<PathBuf>,

    /// Heuristics to run, in order
    #[clap(
        short = 'H',
        long,
        value_enum,
        value_delimiter = ',',
        default_values = ["zero", "misplaced"]
    )]
    heuristic: Vec<HeuristicArg>,

    /// Solvability rule applied before searching
    #[clap(long, value_enum, default_value = "canonical")]
    parity: ParityArg,

    /// Re-queue boards reached again through a cheaper path
    #[clap(long)]
    reopen: bool,

    /// Give up after this many expansions
    #[clap(long)]
    max_expansions: Option<usize>,

    /// Only print the summary, not every board on the path
    #[clap(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn load_board(inline: Option<&str>, file: Option<&PathBuf>, label: &str) -> Result<Option<Board>> {
    if let Some(text) = inline {
        let board = parse_flat_board(text).with_context(|| format!("invalid {} board", label))?;
        return Ok(Some(board));
    }
    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {} board from {}", label, path.display()))?;
        let board = parse_board(&content)
            .with_context(|| format!("invalid {} board in {}", label, path.display()))?;
        return Ok(Some(board));
    }
    Ok(None)
}

fn selected_heuristics(args: &[HeuristicArg]) -> Vec<HeuristicKind> {
    let mut kinds = Vec::new();
    for arg in args {
        let expanded: &[HeuristicKind] = match arg {
            HeuristicArg::Zero => &[HeuristicKind::Zero],
            HeuristicArg::Misplaced => &[HeuristicKind::Misplaced],
            HeuristicArg::Manhattan => &[HeuristicKind::Manhattan],
            HeuristicArg::All => &HeuristicKind::ALL,
        };
        for kind in expanded {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
    }
    kinds
}

fn print_outcome(kind: HeuristicKind, outcome: &SearchOutcome, quiet: bool) {
    println!("{} Solution:", kind.label());
    match outcome {
        SearchOutcome::Unsolvable => println!("Unsolvable puzzle."),
        SearchOutcome::Exhausted { .. } => println!("No solution found."),
        SearchOutcome::Aborted { reason, .. } => println!("Search aborted: {:?}.", reason),
        SearchOutcome::Solved(solution) => {
            if !quiet {
                for step in &solution.path {
                    println!("{}\n", step);
                }
            }
        }
    }
    let (sequence, count) = outcome
        .solution()
        .map_or((String::new(), 0), |s| (s.move_string(), s.move_count));
    println!("States generated: {}", outcome.states_generated());
    println!("Sequence of moves: {}", sequence);
    println!("Number of moves: {}", count);
    println!();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let start = match load_board(args.start.as_deref(), args.start_file.as_ref(), "start")? {
        Some(board) => board,
        None => Board::from_rows(&DEMO_START)?,
    };
    let goal = load_board(args.goal.as_deref(), args.goal_file.as_ref(), "goal")?
        .unwrap_or_else(|| Board::goal(start.size()));

    let config = SearchConfig {
        visited_policy: if args.reopen {
            VisitedPolicy::ReopenOnImprovement
        } else {
            VisitedPolicy::FirstSeen
        },
        parity_rule: match args.parity {
            ParityArg::Canonical => ParityRule::Canonical,
            ParityArg::Relative => ParityRule::RelativeToGoal,
        },
        max_expansions: args.max_expansions,
    };

    println!("Start state\n{}\n", start);
    println!("Goal state\n{}\n", goal);

    for kind in selected_heuristics(&args.heuristic) {
        let outcome = solve_with_config(&start, &goal, &kind, &config)
            .with_context(|| format!("search with heuristic '{}' failed", kind))?;
        print_outcome(kind, &outcome, args.quiet);
    }
    Ok(())
}
