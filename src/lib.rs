//! Matrix Representation with Parsimony (MRP) for forests of NEWICK trees.
//!
//! Every clade of every input tree becomes one binary character. Taxa inside
//! the clade get the marked symbol, the other taxa of that tree the unmarked
//! symbol, and taxa the tree does not contain the missing symbol.
//!
//! Building a matrix takes two passes:
//! 1. [MrpBuilder] tokenizes each line and records, per taxon, the columns
//!    and trees it belongs to.
//! 2. [Forest::write_matrix] replays those records into NEXUS, PHYLIP or
//!    FASTA output.

mod mrp;
mod parsers;

pub use mrp::ColumnCoding;
pub use mrp::Forest;
pub use mrp::MatrixFormat;
pub use mrp::MatrixOptions;
pub use mrp::MrpBuilder;
pub use mrp::MrpError;
pub use mrp::MrpResult;
pub use mrp::Randomize;
pub use mrp::Symbols;
pub use mrp::TaxonId;
pub use mrp::TaxonRecord;
pub use mrp::TaxonRegistry;
pub use mrp::TreeIndex;
pub use mrp::build_matrix;
pub use mrp::build_matrix_file;
pub use parsers::TreeParseError;
pub use parsers::newick::NewickTokenizer;
pub use parsers::newick::Token;
pub use parsers::newick::TokenizerMode;
