use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Whether, and how, the 0/1 coding of each column is randomized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Randomize {
    #[default]
    Off,
    /// Draw one coding per column, from a seeded source when a seed is given.
    On(Option<u64>),
}

/// Per-column choice of which symbol the marked side of a bipartition gets.
///
/// Randomizing the coding keeps the two symbols balanced across the matrix,
/// which matters when it is analysed as nucleotide data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnCoding {
    /// Marked side is always coded as "one".
    Fixed,
    /// `true` codes the marked side as "one", `false` as "zero".
    Drawn(Vec<bool>),
}

impl ColumnCoding {
    pub fn new(randomize: Randomize, count_of_columns: usize) -> Self {
        match randomize {
            Randomize::Off => ColumnCoding::Fixed,
            Randomize::On(seed) => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                let codings: Vec<bool> =
                    (0..count_of_columns).map(|_| rng.random()).collect();
                ColumnCoding::Drawn(codings)
            }
        }
    }

    /// Whether the marked side of `column` is coded as "one".
    pub fn marked_is_one(&self, column: usize) -> bool {
        match self {
            ColumnCoding::Fixed => true,
            ColumnCoding::Drawn(codings) => {
                codings.get(column).copied().unwrap_or(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_coding() {
        let coding = ColumnCoding::new(Randomize::Off, 10);
        assert_eq!(coding, ColumnCoding::Fixed);
        assert!((0..10).all(|column| coding.marked_is_one(column)));
    }

    #[test]
    fn test_seeded_coding_is_reproducible() {
        let a = ColumnCoding::new(Randomize::On(Some(7)), 256);
        let b = ColumnCoding::new(Randomize::On(Some(7)), 256);
        assert_eq!(a, b);

        let ColumnCoding::Drawn(codings) = a else {
            panic!("Expected drawn coding.");
        };
        assert_eq!(codings.len(), 256);
        // Both codings occur in a column set of this size.
        assert!(codings.iter().any(|&c| c));
        assert!(codings.iter().any(|&c| !c));
    }
}
