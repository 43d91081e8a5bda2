use super::MrpResult;
use super::coding::{ColumnCoding, Randomize};
use super::forest::{Forest, TaxonRecord};
use std::fmt::Display;
use std::io::Write;
use tracing::{info, warn};

/// Layout of the written matrix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// `#NEXUS` data block declaring `ntax` and `nchar`.
    #[default]
    Nexus,
    /// Header line `<taxa> <columns>`, then one `<name> <row>` line per taxon.
    Phylip,
    /// `><name>` line followed by the row; no header or footer.
    Fasta,
}

impl MatrixFormat {
    /// Looks up a format by case-insensitive name.
    ///
    /// Unknown names fall back to [MatrixFormat::Fasta].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "NEXUS" => MatrixFormat::Nexus,
            "PHYLIP" => MatrixFormat::Phylip,
            "FASTA" => MatrixFormat::Fasta,
            _ => {
                warn!("Unknown output format \"{name}\"; writing FASTA.");
                MatrixFormat::Fasta
            }
        }
    }
}

impl Display for MatrixFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MatrixFormat::Nexus => "NEXUS",
                MatrixFormat::Phylip => "PHYLIP",
                MatrixFormat::Fasta => "FASTA",
            }
        )
    }
}

/// Output alphabet.
///
/// With randomized coding, `marked` and `unmarked` swap roles in the columns
/// drawn as "zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub marked: char,
    pub unmarked: char,
    pub missing: char,
}

impl Default for Symbols {
    fn default() -> Self { Self { marked: '1', unmarked: '0', missing: '?' } }
}

impl Symbols {
    pub fn new(marked: char, unmarked: char, missing: char) -> Self {
        Self { marked, unmarked, missing }
    }

    /// Nucleotide-like alphabet: `A`, `T` and `-`.
    pub fn dna() -> Self { Self { marked: 'A', unmarked: 'T', missing: '-' } }

    fn pick(&self, is_marked: bool, marked_is_one: bool) -> char {
        if is_marked == marked_is_one { self.marked } else { self.unmarked }
    }
}

/// Everything that shapes Pass 2 output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatrixOptions {
    pub format: MatrixFormat,
    pub symbols: Symbols,
    pub randomize: Randomize,
}

impl MatrixOptions {
    pub fn new(format: MatrixFormat) -> Self {
        Self { format, ..Self::default() }
    }

    pub fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_randomize(mut self, randomize: Randomize) -> Self {
        self.randomize = randomize;
        self
    }
}

/// Appends one symbol per global column to `row`.
///
/// `column_ends` holds the exclusive column bound of every tree. Spans of
/// trees that contain the taxon are walked column by column against the
/// ascending marked columns; spans of other trees cannot hold any of them
/// and are filled with the missing symbol in one go.
pub(super) fn write_row(
    row: &mut String,
    record: &TaxonRecord,
    column_ends: &[usize],
    coding: &ColumnCoding,
    symbols: &Symbols,
) {
    let mut marked = record.columns.iter().copied().peekable();
    let mut trees = record.trees.iter().copied().peekable();
    let mut column: usize = 0;

    for (tree, &column_end) in column_ends.iter().enumerate() {
        if trees.next_if_eq(&tree).is_some() {
            while column < column_end {
                let is_marked = marked.next_if_eq(&column).is_some();
                row.push(symbols.pick(is_marked, coding.marked_is_one(column)));
                column += 1;
            }
        } else {
            let missing = column_end - column;
            row.extend(std::iter::repeat_n(symbols.missing, missing));
            column = column_end;
        }
    }
}

/// NEXUS taxon names are single-quoted; embedded quotes are doubled.
fn quote_nexus_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

fn write_header<W: Write>(
    out: &mut W,
    forest: &Forest,
    options: &MatrixOptions,
) -> std::io::Result<()> {
    let ntax = forest.count_of_taxa();
    let nchar = forest.count_of_columns();
    match options.format {
        MatrixFormat::Nexus => {
            writeln!(out, "#NEXUS")?;
            writeln!(out, "begin data;")?;
            writeln!(out, "\t dimensions ntax = {ntax} nchar = {nchar};")?;
            writeln!(out, "\t format missing = {};", options.symbols.missing)?;
            writeln!(out, "\tmatrix")
        }
        MatrixFormat::Phylip => writeln!(out, "{ntax} {nchar}"),
        MatrixFormat::Fasta => Ok(()),
    }
}

fn write_footer<W: Write>(
    out: &mut W,
    options: &MatrixOptions,
) -> std::io::Result<()> {
    match options.format {
        MatrixFormat::Nexus => {
            writeln!(out, "\t;")?;
            writeln!(out, "end;")
        }
        MatrixFormat::Phylip | MatrixFormat::Fasta => Ok(()),
    }
}

pub(super) fn write_matrix<W: Write>(
    forest: &Forest,
    mut out: W,
    options: &MatrixOptions,
) -> MrpResult<()> {
    let coding =
        ColumnCoding::new(options.randomize, forest.count_of_columns());
    let column_ends = forest.tree_index().column_ends();

    write_header(&mut out, forest, options)?;

    let mut row = String::with_capacity(forest.count_of_columns());
    for (name, record) in forest.taxa() {
        row.clear();
        write_row(&mut row, record, column_ends, &coding, &options.symbols);
        match options.format {
            MatrixFormat::Nexus => {
                writeln!(out, "\t{} {row}", quote_nexus_name(name))?
            }
            MatrixFormat::Phylip => writeln!(out, "{name} {row}")?,
            MatrixFormat::Fasta => {
                writeln!(out, ">{name}")?;
                writeln!(out, "{row}")?;
            }
        }
    }

    write_footer(&mut out, options)?;
    out.flush()?;

    info!(
        "Wrote {} matrix: {} taxa, {} columns, {} trees.",
        options.format,
        forest.count_of_taxa(),
        forest.count_of_columns(),
        forest.count_of_trees()
    );
    Ok(())
}
