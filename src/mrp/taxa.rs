use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Dense, zero-based taxon index assigned in first-appearance order.
pub type TaxonId = usize;

/// Maps taxon names to [TaxonId]s for the whole forest.
///
/// Ids are handed out on the first occurrence of a name and are never
/// reassigned or removed.
#[derive(Debug, Default, Clone)]
pub struct TaxonRegistry {
    ids: FxHashMap<Arc<str>, TaxonId>,
    names: Vec<Arc<str>>,
}

impl TaxonRegistry {
    pub fn new() -> Self { Self::default() }

    /// Returns the id of `name`, registering it if it was not seen before.
    pub fn resolve_or_insert(&mut self, name: &str) -> TaxonId {
        if let Some(&taxon_id) = self.ids.get(name) {
            return taxon_id;
        }
        let taxon_id = self.names.len();
        let name: Arc<str> = name.into();
        _ = self.ids.insert(name.clone(), taxon_id);
        self.names.push(name);
        taxon_id
    }

    pub fn taxon_id(&self, name: &str) -> Option<TaxonId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, taxon_id: TaxonId) -> Option<&str> {
        self.names.get(taxon_id).map(|name| name.as_ref())
    }

    pub fn count_of_taxa(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Taxon names ordered by id.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let mut registry = TaxonRegistry::new();
        assert_eq!(registry.resolve_or_insert("B"), 0);
        assert_eq!(registry.resolve_or_insert("A"), 1);
        assert_eq!(registry.resolve_or_insert("B"), 0);
        assert_eq!(registry.resolve_or_insert("C"), 2);

        assert_eq!(registry.count_of_taxa(), 3);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(registry.taxon_id("A"), Some(1));
        assert_eq!(registry.taxon_id("D"), None);
        assert_eq!(registry.name(2), Some("C"));
        assert_eq!(registry.name(3), None);
    }
}
