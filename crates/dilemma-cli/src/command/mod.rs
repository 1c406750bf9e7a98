use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, simulate::SimulateArg};

mod generate;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve a field file and render the final grid
    Simulate(#[clap(flatten)] SimulateArg),
    /// Write a random field file for simulation input
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Simulate(arg) => simulate::run(&arg),
        Mode::Generate(arg) => generate::run(&arg),
    }
}
