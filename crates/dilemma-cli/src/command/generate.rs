use std::path::PathBuf;

use anyhow::ensure;
use dilemma_engine::{Grid, Strategy};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{field_file, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of rows in the generated field
    rows: usize,
    /// Number of columns in the generated field
    cols: usize,
    /// Probability that a cell starts as a defector
    #[clap(long, default_value_t = 0.3)]
    defect_ratio: f64,
    /// Seed for reproducible fields (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Output file path (stdout when omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        rows,
        cols,
        defect_ratio,
        seed,
        output,
    } = arg;
    ensure!(
        *rows > 0 && *cols > 0,
        "field must have at least one row and one column"
    );
    ensure!(
        (0.0..=1.0).contains(defect_ratio),
        "defect ratio must lie in [0, 1], got {defect_ratio}"
    );

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg32::seed_from_u64(seed);
    eprintln!("Generating a {rows} by {cols} field with seed {seed}");

    let symbol_rows: Vec<String> = (0..*rows)
        .map(|_| {
            (0..*cols)
                .map(|_| {
                    if rng.random_bool(*defect_ratio) {
                        Strategy::Defect
                    } else {
                        Strategy::Cooperate
                    }
                    .as_char()
                })
                .collect()
        })
        .collect();
    let field = Grid::from_symbol_rows(&symbol_rows)?;

    let mut output = Output::from_output_path(output.clone())?;
    field_file::write(&field, &mut output)?;

    Ok(())
}
