//! Named multiplier tables produced by the normalizer.

use placerank_core::FactorAccumulator;

/// Multipliers that hold for the current context, keyed by entry name.
///
/// The normalizer only inserts entries whose condition holds, so a scorer
/// applies every entry of each table it selects.
///
/// # Examples
/// ```
/// use placerank_scorer::MultiplierTable;
///
/// let table = MultiplierTable::new()
///     .with("lunch", 1.3)
///     .with_if(false, "dinner", 1.3);
/// assert_eq!(table.get("lunch"), Some(1.3));
/// assert_eq!(table.get("dinner"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiplierTable {
    entries: Vec<(&'static str, f64)>,
}

impl MultiplierTable {
    /// An empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The `{neutral: 1.0}` table used when an input is not recognised.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new().with("neutral", 1.0)
    }

    /// Add an entry.
    #[must_use]
    pub fn with(mut self, key: &'static str, multiplier: f64) -> Self {
        self.entries.push((key, multiplier));
        self
    }

    /// Add an entry when `applies` holds.
    #[must_use]
    pub fn with_if(self, applies: bool, key: &'static str, multiplier: f64) -> Self {
        if applies {
            self.with(key, multiplier)
        } else {
            self
        }
    }

    /// Look up an entry by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|&(name, multiplier)| (name == key).then_some(multiplier))
    }

    /// Iterate over `(name, multiplier)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Multiply every entry into `acc`.
    pub fn apply_to(&self, acc: &mut FactorAccumulator) {
        for (_, multiplier) in self.iter() {
            acc.apply(multiplier);
        }
    }
}
