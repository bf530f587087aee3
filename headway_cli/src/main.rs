use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{evaluate::EvaluateArgs, generate::GenerateSubcommands, optimize::OptimizeArgs};

mod evaluate;
mod generate;
mod optimize;
mod output;
mod table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Searches for the departure timetable with the lowest average wait
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Simulates and scores the seed timetable
    Evaluate {
        #[command(flatten)]
        args: EvaluateArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Optimize { args }) => optimize::run(args)?,
        Some(Commands::Evaluate { args }) => evaluate::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
