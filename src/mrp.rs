mod bipartitions;
mod coding;
mod forest;
mod taxa;
mod tree_index;
mod writer;

pub use bipartitions::MrpBuilder;
pub use coding::{ColumnCoding, Randomize};
pub use forest::{Forest, TaxonRecord};
pub use taxa::{TaxonId, TaxonRegistry};
pub use tree_index::TreeIndex;
pub use writer::{MatrixFormat, MatrixOptions, Symbols};

use crate::TreeParseError;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MrpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    TreeParse(#[from] TreeParseError),
}

pub type MrpResult<T> = Result<T, MrpError>;

/// Builds the MRP matrix of `trees` (one NEWICK tree per line) in memory.
///
/// ```
/// use mrp::{MatrixFormat, MatrixOptions, build_matrix};
///
/// let matrix = build_matrix(
///     "(A,(B,C));\n(D,E);\n",
///     &MatrixOptions::new(MatrixFormat::Fasta),
/// )?;
/// assert_eq!(matrix, ">A\n01?\n>B\n11?\n>C\n11?\n>D\n??1\n>E\n??1\n");
/// # Ok::<(), mrp::MrpError>(())
/// ```
pub fn build_matrix(trees: &str, options: &MatrixOptions) -> MrpResult<String> {
    let mut builder = MrpBuilder::new();
    builder.read_trees(trees.as_bytes())?;
    let forest = builder.finish();

    let mut buffer: Vec<u8> = Vec::new();
    forest.write_matrix(&mut buffer, options)?;
    String::from_utf8(buffer).map_err(|err| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err).into()
    })
}

/// Reads the trees file at `trees_path` and writes its MRP matrix to
/// `matrix_path`, returning the forest for inspection.
pub fn build_matrix_file<P: AsRef<Path>, Q: AsRef<Path>>(
    trees_path: P,
    matrix_path: Q,
    options: &MatrixOptions,
) -> MrpResult<Forest> {
    let trees_path = trees_path.as_ref();
    let mut builder = MrpBuilder::new();
    builder.read_trees(BufReader::new(File::open(trees_path)?))?;
    let forest = builder.finish();
    info!(
        "Read {} trees from {}: {} taxa, {} bipartitions.",
        forest.count_of_trees(),
        trees_path.display(),
        forest.count_of_taxa(),
        forest.count_of_columns()
    );

    let out = BufWriter::new(File::create(matrix_path)?);
    forest.write_matrix(out, options)?;
    Ok(forest)
}
