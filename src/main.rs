//! CLI driver: parse the root, modulus and iteration cap, then print
//! the forward and inverse power tables.

use clap::{Parser, ValueEnum};
use num_bigint::BigUint;
use power_lookup::{write_table, PlainRender, Render, TableRender};
use std::error::Error;
use std::io::{self, Write};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Base value, assumed (not checked) to have power-of-two order
    primitive_root: BigUint,
    /// Modulus of the power chain
    modulo: BigUint,
    /// Upper bound on forward squarings
    #[clap(short = 'n', long, value_name = "N", default_value_t = 100)]
    max_calculations: usize,
    /// Output style
    #[clap(short, long, value_enum, default_value = "plain")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `exp: 2^i: value` line per power
    Plain,
    /// Array-literal lines for embedding into source
    Table,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let render: &dyn Render = match cli.format {
        OutputFormat::Plain => &PlainRender,
        OutputFormat::Table => &TableRender,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(
        &cli.primitive_root,
        &cli.modulo,
        cli.max_calculations,
        render,
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}
