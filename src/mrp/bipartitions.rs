use super::forest::{Forest, TaxonRecord};
use super::taxa::{TaxonId, TaxonRegistry};
use super::tree_index::TreeIndex;
use super::MrpResult;
use crate::TreeParseError;
use crate::parsers::newick::{NewickTokenizer, Token};
use std::io::BufRead;
use tracing::{debug, warn};

/// Accumulates the bipartitions of a forest, one NEWICK line at a time.
///
/// Every closing parenthesis that ends an open clade registers one column,
/// numbered globally across all trees in the order clades close. The clade
/// spanning a whole tree is registered as well, so every tree with at least
/// one clade contributes one trivial column.
///
/// ```
/// use mrp::MrpBuilder;
///
/// let mut builder = MrpBuilder::new();
/// builder.add_tree_line("(A,(B,C));")?;
/// builder.add_tree_line("(D,E);")?;
/// let forest = builder.finish();
///
/// assert_eq!(forest.count_of_columns(), 3);
/// assert_eq!(forest.tree_index().end_index(0), Some(1));
/// # Ok::<(), mrp::TreeParseError>(())
/// ```
#[derive(Debug, Default)]
pub struct MrpBuilder {
    registry: TaxonRegistry,
    records: Vec<TaxonRecord>,
    tree_index: TreeIndex,
    /// One set of taxa per clade that is still open.
    clades: Vec<Vec<TaxonId>>,
    count_of_columns: usize,
    tree_id: usize,
    line: usize,
}

impl MrpBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn count_of_taxa(&self) -> usize { self.registry.count_of_taxa() }

    pub fn count_of_columns(&self) -> usize { self.count_of_columns }

    pub fn count_of_trees(&self) -> usize { self.tree_id }

    /// Reads one tree per line until the reader is exhausted.
    pub fn read_trees<R: BufRead>(&mut self, reader: R) -> MrpResult<()> {
        for line in reader.lines() {
            self.add_tree_line(&line?)?;
        }
        Ok(())
    }

    /// Adds the bipartitions of the tree on `line`.
    ///
    /// Blank lines are skipped and do not count as trees. A tree is
    /// terminated by `;` or, failing that, by the end of the line; anything
    /// after the `;` is ignored.
    pub fn add_tree_line(&mut self, line: &str) -> Result<(), TreeParseError> {
        self.line += 1;
        if line.trim().is_empty() {
            debug!("Line {}: blank, skipped.", self.line);
            return Ok(());
        }

        let mut tokenizer = NewickTokenizer::new(line);
        match tokenizer.next() {
            Some(Token::Open) => self.clades.push(Vec::new()),
            other => {
                return Err(TreeParseError::MissingOpenParenthesis {
                    line: self.line,
                    found: other.map_or_else(
                        || "end of line".to_string(),
                        |token| token.to_string(),
                    ),
                });
            }
        }

        let mut terminated = false;
        for token in tokenizer.by_ref() {
            match token {
                Token::Open => self.clades.push(Vec::new()),
                Token::Close(_) => self.close_clade(),
                Token::Label(name) => self.add_taxon(name),
                Token::End => {
                    terminated = true;
                    break;
                }
            }
        }

        if !terminated {
            warn!("Line {}: tree is not terminated by \";\".", self.line);
        } else if tokenizer.has_next() {
            warn!("Line {}: ignoring text after \";\".", self.line);
        }
        self.end_tree();
        Ok(())
    }

    fn add_taxon(&mut self, name: &str) {
        let taxon_id = self.registry.resolve_or_insert(name);
        if taxon_id == self.records.len() {
            self.records.push(TaxonRecord::default());
        }
        if let Some(clade) = self.clades.last_mut() {
            clade.push(taxon_id);
        }
        let trees = &mut self.records[taxon_id].trees;
        if trees.last() != Some(&self.tree_id) {
            trees.push(self.tree_id);
        }
    }

    fn close_clade(&mut self) {
        let Some(mut clade) = self.clades.pop() else {
            debug!("Line {}: unbalanced \")\" ignored.", self.line);
            return;
        };
        clade.sort_unstable();
        clade.dedup();

        let column = self.count_of_columns;
        self.count_of_columns += 1;
        for &taxon_id in &clade {
            self.records[taxon_id].columns.push(column);
        }

        if let Some(parent) = self.clades.last_mut() {
            parent.extend(clade);
        }
    }

    fn end_tree(&mut self) {
        if !self.clades.is_empty() {
            warn!(
                "Line {}: {} unclosed clade(s) discarded.",
                self.line,
                self.clades.len()
            );
            self.clades.clear();
        }
        self.tree_index.push_end(self.count_of_columns);
        debug!(
            "Tree {}: columns up to {}, {} taxa so far.",
            self.tree_id,
            self.count_of_columns,
            self.registry.count_of_taxa()
        );
        self.tree_id += 1;
    }

    /// Ends Pass 1, freezing everything collected so far.
    pub fn finish(self) -> Forest {
        Forest::new(
            self.registry,
            self.records,
            self.tree_index,
            self.count_of_columns,
        )
    }
}
