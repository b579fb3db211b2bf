//! The shared representation of predict sets.

use std::collections::{BTreeMap, BTreeSet};

use ll_grammar::Symbol;

/// The representation of FIRST and FOLLOW sets.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

/// Read access to a finished table of FIRST or FOLLOW sets.
pub trait PredictSets {
    /// Returns a reference to the underlying map.
    fn predict_sets(&self) -> &PerSymbolSets;

    /// Returns the set computed for `sym`, if it has an entry.
    fn get(&self, sym: &Symbol) -> Option<&BTreeSet<Symbol>> {
        self.predict_sets().get(sym)
    }
}

pub(crate) fn singleton(sym: &Symbol) -> BTreeSet<Symbol> {
    let mut set = BTreeSet::new();
    set.insert(sym.clone());
    set
}
