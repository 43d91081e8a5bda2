use super::coding::ColumnCoding;
use super::taxa::{TaxonId, TaxonRegistry};
use super::tree_index::TreeIndex;
use super::writer::{MatrixOptions, Symbols, write_matrix, write_row};
use super::MrpResult;
use std::io::Write;

/// Sparse record of where a taxon occurs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaxonRecord {
    /// Columns whose marked side holds the taxon; strictly ascending.
    pub(crate) columns: Vec<usize>,
    /// Trees that contain the taxon; strictly ascending.
    pub(crate) trees: Vec<usize>,
}

impl TaxonRecord {
    pub fn columns(&self) -> &[usize] { &self.columns }

    pub fn trees(&self) -> &[usize] { &self.trees }

    pub fn is_in_tree(&self, tree: usize) -> bool {
        self.trees.binary_search(&tree).is_ok()
    }
}

/// Read-only result of Pass 1: everything needed to write the matrix.
#[derive(Debug, Clone)]
pub struct Forest {
    registry: TaxonRegistry,
    records: Vec<TaxonRecord>,
    tree_index: TreeIndex,
    count_of_columns: usize,
}

impl Forest {
    pub(super) fn new(
        registry: TaxonRegistry,
        records: Vec<TaxonRecord>,
        tree_index: TreeIndex,
        count_of_columns: usize,
    ) -> Self {
        Self { registry, records, tree_index, count_of_columns }
    }

    pub fn count_of_taxa(&self) -> usize { self.registry.count_of_taxa() }

    pub fn count_of_columns(&self) -> usize { self.count_of_columns }

    pub fn count_of_trees(&self) -> usize { self.tree_index.count_of_trees() }

    pub fn registry(&self) -> &TaxonRegistry { &self.registry }

    pub fn tree_index(&self) -> &TreeIndex { &self.tree_index }

    pub fn taxon_id(&self, name: &str) -> Option<TaxonId> {
        self.registry.taxon_id(name)
    }

    pub fn record(&self, taxon_id: TaxonId) -> Option<&TaxonRecord> {
        self.records.get(taxon_id)
    }

    /// Taxa with their records, ordered by id.
    pub fn taxa(&self) -> impl Iterator<Item = (&str, &TaxonRecord)> {
        self.registry.names().zip(self.records.iter())
    }

    /// Renders the matrix row of `taxon_id` without randomized coding.
    pub fn row(&self, taxon_id: TaxonId, symbols: &Symbols) -> Option<String> {
        let record = self.records.get(taxon_id)?;
        let mut row = String::with_capacity(self.count_of_columns);
        write_row(
            &mut row,
            record,
            self.tree_index.column_ends(),
            &ColumnCoding::Fixed,
            symbols,
        );
        Some(row)
    }

    /// Renders the matrix row of the taxon called `name`.
    pub fn row_by_name(&self, name: &str, symbols: &Symbols) -> Option<String> {
        self.row(self.taxon_id(name)?, symbols)
    }

    /// Pass 2: streams the complete matrix to `out`.
    pub fn write_matrix<W: Write>(
        &self,
        out: W,
        options: &MatrixOptions,
    ) -> MrpResult<()> {
        write_matrix(self, out, options)
    }
}
