use std::path::PathBuf;

use anyhow::ensure;
use dilemma_engine::evolve;

use crate::{field_file, render, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// File describing the initial field
    field_file: PathBuf,
    /// Reward for defecting against a cooperator (must be positive)
    defection_bonus: f64,
    /// Number of generations to evolve the field through
    steps: usize,
    /// Path of the rendered PNG
    #[clap(long, default_value = "Prisoners.png")]
    output: PathBuf,
    /// Also write the final field as JSON to this path
    #[clap(long)]
    json: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        field_file: path,
        defection_bonus,
        steps,
        output,
        json,
    } = arg;
    ensure!(
        defection_bonus.is_finite() && *defection_bonus > 0.0,
        "defection bonus must be a positive number, got {defection_bonus}"
    );

    let mut field = field_file::load(path)?;
    eprintln!("Field dimensions are {} by {}", field.rows(), field.cols());

    evolve(&mut field, *steps, *defection_bonus);

    render::save_png(&field, output)?;
    eprintln!("Rendered final field to {}", output.display());

    if let Some(json_path) = json {
        Output::save_json(&field, Some(json_path.clone()))?;
    }

    Ok(())
}
