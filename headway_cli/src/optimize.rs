use std::path::PathBuf;

use clap::{Args, ValueEnum};
use headway_optimizer::{
    parsers::{arrivals_csv::ArrivalsCsvParser, parser::DatasetParser},
    solver::{
        solver::Solver,
        solver_params::{SearchStrategyKind, SolverParams, Threads},
    },
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::{output::write_timetable, table::schedule_table};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Strategy {
    Genetic,
    Random,
}

impl From<Strategy> for SearchStrategyKind {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::Genetic => SearchStrategyKind::Genetic,
            Strategy::Random => SearchStrategyKind::Random,
        }
    }
}

#[derive(Args)]
pub struct OptimizeArgs {
    /// Arrivals CSV file (`station,H:MM,count`)
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Where to write the schedule, `.json` for JSON, CSV otherwise
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    #[arg(long, short = 'g', default_value_t = 10)]
    generations: usize,

    #[arg(long, short = 'p', default_value_t = 30)]
    population: usize,

    /// Evaluation threads, all available cores when omitted
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Strategy::Genetic)]
    strategy: Strategy,
}

impl OptimizeArgs {
    fn solver_params(&self) -> SolverParams {
        SolverParams {
            search_strategy: self.strategy.into(),
            generations: self.generations,
            population_size: self.population,
            evaluation_threads: match self.threads {
                None => Threads::Auto,
                Some(1) => Threads::Single,
                Some(threads) => Threads::Multi(threads),
            },
            seed: self.seed,
            ..SolverParams::default()
        }
    }
}

pub fn run(args: OptimizeArgs) -> Result<(), anyhow::Error> {
    info!("Optimizing timetable for {:?}", args.input);
    let arrivals = ArrivalsCsvParser.parse(&args.input)?;

    let mut solver = Solver::new(arrivals, args.solver_params());

    let bar = ProgressBar::new(args.generations as u64 + 1);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} {msg}")?);

    let generation_bar = bar.clone();
    solver.on_generation(move |row| {
        generation_bar.inc(1);
        if let Some(best_fitness) = row.best_fitness {
            generation_bar.set_message(format!("best = {best_fitness:.3} min"));
        }
    });

    let result = solver.solve();
    bar.finish_and_clear();
    let timetable = result?;

    println!("{}", schedule_table(&timetable.schedule));
    match timetable.average_wait() {
        Some(average_wait) => info!("Finished: average wait = {average_wait:.3} min"),
        None => info!("Finished: no feasible timetable found"),
    }

    if let Some(out) = &args.out {
        write_timetable(out, &timetable)?;
    }

    Ok(())
}
