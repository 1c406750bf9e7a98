use std::{fs, io, path::Path};

use anyhow::{Context as _, bail};
use dilemma_engine::Grid;

/// Reads an initial field description.
///
/// The format is a first line holding the row and column counts, then one
/// line of `'C'`/`'D'` symbols per row:
///
/// ```text
/// 2 3
/// CCD
/// DCC
/// ```
///
/// Anything malformed (garbled header, wrong row count, wrong row length,
/// unknown symbol) aborts before a grid is constructed.
pub(crate) fn load(path: &Path) -> anyhow::Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read field file: {}", path.display()))?;
    parse(&text).with_context(|| format!("Malformed field file: {}", path.display()))
}

pub(crate) fn parse(text: &str) -> anyhow::Result<Grid> {
    let mut lines = text.trim_end().lines();
    let header = lines.next().context("missing dimension line")?;

    let mut dims = header.split_whitespace();
    let rows: usize = dims
        .next()
        .context("missing row count")?
        .parse()
        .with_context(|| format!("invalid row count in {header:?}"))?;
    let cols: usize = dims
        .next()
        .context("missing column count")?
        .parse()
        .with_context(|| format!("invalid column count in {header:?}"))?;
    if dims.next().is_some() {
        bail!("dimension line must hold exactly two numbers, got {header:?}");
    }
    if rows == 0 || cols == 0 {
        bail!("field must have at least one row and one column, got {rows} by {cols}");
    }

    let symbol_rows: Vec<&str> = lines.collect();
    if symbol_rows.len() != rows {
        bail!("expected {rows} field rows, found {}", symbol_rows.len());
    }
    for (index, row) in symbol_rows.iter().enumerate() {
        let actual = row.chars().count();
        if actual != cols {
            bail!("row {index} has {actual} symbols, expected {cols}");
        }
    }

    Ok(Grid::from_symbol_rows(&symbol_rows)?)
}

/// Writes a field in the same format [`load`] reads.
pub(crate) fn write<W>(field: &Grid, writer: &mut W) -> anyhow::Result<()>
where
    W: io::Write,
{
    writeln!(writer, "{} {}", field.rows(), field.cols())?;
    for row in field.symbol_rows() {
        writeln!(writer, "{row}")?;
    }
    writer.flush()?;
    Ok(())
}
