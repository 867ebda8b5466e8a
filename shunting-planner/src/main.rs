use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use shunting_planner::domain::{InvalidTrainId, TrainId};
use shunting_planner::output::{ReportDto, benchmark_list, comparison_table, solution_text};
use shunting_planner::planner::{Planner, SearchConfig, SearchError, Strategy};
use shunting_planner::puzzles::{LoadError, Puzzle, benchmark};

#[derive(Debug, Parser)]
#[command(name = "shunting-planner", about = "Plan minimum-move railway shunting")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Solve a puzzle with one or all strategies
    Solve(SolveArgs),
    /// List the built-in benchmark puzzles
    List,
    /// Print a built-in benchmark as JSON
    Export { name: String },
}

#[derive(Debug, clap::Args)]
#[command(group(ArgGroup::new("source").required(true)))]
struct SolveArgs {
    /// Name of a built-in benchmark (see `list`)
    #[arg(long, group = "source")]
    benchmark: Option<String>,

    /// Path to a JSON puzzle file
    #[arg(long, group = "source")]
    file: Option<PathBuf>,

    /// Inline main line, e.g. "3 1 2"
    #[arg(long, group = "source", requires = "goal")]
    main: Option<String>,

    /// Inline siding contents; repeat per siding, "" for an empty one
    #[arg(long = "siding", requires = "main")]
    sidings: Vec<String>,

    /// Extra empty sidings appended to an inline puzzle
    #[arg(long, default_value_t = 0, requires = "main")]
    empty_sidings: usize,

    /// Inline goal order, e.g. "1 2 3"
    #[arg(long, requires = "main")]
    goal: Option<String>,

    /// Which strategy to run
    #[arg(long, value_enum, default_value_t = StrategyArg::All)]
    strategy: StrategyArg,

    /// Maximum trains per siding
    #[arg(long)]
    capacity: Option<usize>,

    /// Stop after expanding this many states
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Emit reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print only the comparison table
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Ucs,
    Misplaced,
    Manhattan,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Ucs => vec![Strategy::UniformCost],
            StrategyArg::Misplaced => vec![Strategy::AStarMisplaced],
            StrategyArg::Manhattan => vec![Strategy::AStarManhattan],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    TrainId(#[from] InvalidTrainId),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolveArgs {
    fn puzzle(&self) -> Result<Puzzle, CliError> {
        if let Some(name) = &self.benchmark {
            return benchmark(name).ok_or_else(|| LoadError::UnknownBenchmark(name.clone()).into());
        }
        if let Some(path) = &self.file {
            return Ok(Puzzle::load(path)?);
        }

        let names = |s: &str| -> Result<Vec<String>, InvalidTrainId> {
            Ok(TrainId::parse_list(s)?
                .into_iter()
                .map(|id| id.as_str().to_string())
                .collect())
        };
        let mut sidings = self
            .sidings
            .iter()
            .map(|s| names(s))
            .collect::<Result<Vec<_>, _>>()?;
        sidings.extend(std::iter::repeat_n(Vec::new(), self.empty_sidings));

        Ok(Puzzle {
            main_line: names(self.main.as_deref().unwrap_or_default())?,
            sidings,
            goal: names(self.goal.as_deref().unwrap_or_default())?,
            description: None,
            difficulty: None,
            expected_cost: None,
        })
    }
}

fn solve(args: &SolveArgs) -> Result<ExitCode, CliError> {
    let puzzle = args.puzzle()?;
    let config = SearchConfig::new(args.capacity, args.max_expansions);
    let (yard, goal) = puzzle.prepare(config.siding_capacity)?;

    let planner = Planner::new(&config);
    let mut results = Vec::new();
    for strategy in args.strategy.strategies() {
        let report = planner.search(&yard, &goal, strategy)?;
        results.push((strategy, report));
    }

    if args.json {
        let dtos: Vec<ReportDto> = results
            .iter()
            .map(|(strategy, report)| ReportDto::new(*strategy, report))
            .collect();
        println!("{}", serde_json::to_string_pretty(&dtos)?);
    } else {
        if !args.quiet {
            println!("Initial: {}", yard);
            let order: Vec<&str> = goal.order().iter().map(TrainId::as_str).collect();
            println!("Goal:    main: {}", order.join(" "));
            println!();
            for (strategy, report) in &results {
                println!("{}", solution_text(*strategy, report));
            }
        }
        print!("{}", comparison_table(&results));
    }

    if results.iter().all(|(_, report)| report.is_success()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}

fn run(args: Args) -> Result<ExitCode, CliError> {
    match args.cmd {
        Cmd::Solve(solve_args) => solve(&solve_args),
        Cmd::List => {
            print!("{}", benchmark_list());
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Export { name } => {
            let puzzle = benchmark(&name).ok_or(LoadError::UnknownBenchmark(name))?;
            println!("{}", puzzle.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
