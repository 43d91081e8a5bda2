use anyhow::{Context, Result};
use clap::Parser;
use mrp::{MatrixFormat, MatrixOptions, Randomize, Symbols, build_matrix_file};
use std::path::PathBuf;
use tracing::Level;

/// Builds an MRP matrix from a file of NEWICK trees.
#[derive(Debug, Parser)]
#[command(name = "mrp", version)]
struct Cli {
    /// A file containing NEWICK trees, one tree per line.
    trees: PathBuf,

    /// The MRP matrix file to write.
    output: PathBuf,

    /// NEXUS, PHYLIP or FASTA; other names fall back to FASTA.
    format: String,

    /// Write A and T instead of 1 and 0, and "-" for missing data.
    #[arg(long)]
    dna: bool,

    /// Randomize the 0/1 coding of each column, optionally from SEED.
    #[arg(long, value_name = "SEED", num_args = 0..=1)]
    randomize: Option<Option<u64>>,

    /// Log each tree as it is read.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::INFO
        }
    }

    fn matrix_options(&self) -> MatrixOptions {
        let symbols =
            if self.dna { Symbols::dna() } else { Symbols::default() };
        let randomize = match self.randomize {
            Some(seed) => Randomize::On(seed),
            None => Randomize::Off,
        };
        MatrixOptions::new(MatrixFormat::from_name(&self.format))
            .with_symbols(symbols)
            .with_randomize(randomize)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    let options = cli.matrix_options();
    _ = build_matrix_file(&cli.trees, &cli.output, &options).with_context(
        || {
            format!(
                "Failed to build MRP matrix from {} into {}",
                cli.trees.display(),
                cli.output.display()
            )
        },
    )?;

    Ok(())
}
