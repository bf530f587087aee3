use std::{path::PathBuf, sync::Arc};

use clap::Args;
use headway_optimizer::{
    genome::{departure_schedule::DepartureSchedule, genome::Genome},
    parsers::{arrivals_csv::ArrivalsCsvParser, parser::DatasetParser},
};
use tracing::{info, warn};

use crate::table::schedule_table;

#[derive(Args)]
pub struct EvaluateArgs {
    /// Arrivals CSV file (`station,H:MM,count`)
    #[arg(short = 'i', long)]
    input: PathBuf,
}

pub fn run(args: EvaluateArgs) -> Result<(), anyhow::Error> {
    let arrivals = ArrivalsCsvParser.parse(&args.input)?;
    info!(
        "Loaded {} samples, {} passengers",
        arrivals.samples().len(),
        arrivals.total_passengers()
    );

    let genome = DepartureSchedule::seeded(Arc::new(arrivals));
    println!("{}", schedule_table(&genome.schedule()));

    match genome.feasible_schedule() {
        Ok(_) => info!("Seed timetable: average wait = {:.3} min", genome.evaluate()?),
        Err(reason) => warn!("Seed timetable is infeasible: {reason}"),
    }

    Ok(())
}
