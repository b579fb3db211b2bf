//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace, warn};

use ll_grammar::{Grammar, Symbol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sets::{singleton, PerSymbolSets, PredictSets};
use crate::warning::Warning;

/// FIRST sets of every terminal, every nonterminal and epsilon.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FirstSets {
    map: PerSymbolSets,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// We compute the transitive closure of this relation.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = FirstSets {
            map: BTreeMap::new(),
        };
        this.seed(grammar);

        let mut passes = 0;
        let mut changed = true;
        while changed {
            passes += 1;
            changed = this.update(grammar);
            trace!("FIRST pass {}: changed = {}", passes, changed);
        }
        debug!(
            "FIRST sets of {} symbols converged after {} passes",
            this.map.len(),
            passes
        );
        this
    }

    /// Calculates a FIRST set for a string of symbols, logging a warning for
    /// every symbol without a FIRST set.
    pub fn first_of(&self, string: &[Symbol]) -> BTreeSet<Symbol> {
        self.first_of_with(string, |warning| warn!("{}", warning))
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// A symbol without a FIRST set is treated as its own singleton set, and
    /// `on_warning` is told about it.
    pub fn first_of_with<F>(&self, string: &[Symbol], mut on_warning: F) -> BTreeSet<Symbol>
    where
        F: FnMut(Warning),
    {
        let mut result = BTreeSet::new();
        for sym in string {
            let fallback;
            let first_set = match self.map.get(sym) {
                Some(first_set) => first_set,
                None => {
                    on_warning(Warning::MissingFirstSet {
                        symbol: sym.clone(),
                    });
                    fallback = singleton(sym);
                    &fallback
                }
            };
            result.extend(first_set.iter().filter(|s| !s.is_epsilon()).cloned());
            if !first_set.contains(&Symbol::Epsilon) {
                return result;
            }
        }
        result.insert(Symbol::Epsilon);
        result
    }

    /// Iterates over symbols and their FIRST sets.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BTreeSet<Symbol>)> {
        self.map.iter()
    }

    fn seed(&mut self, grammar: &Grammar) {
        for terminal in grammar.terminals() {
            self.map.insert(terminal.clone(), singleton(terminal));
        }
        self.map.insert(Symbol::Epsilon, singleton(&Symbol::Epsilon));
        for nonterminal in grammar.nonterminals() {
            self.map.insert(nonterminal.clone(), BTreeSet::new());
        }
        // Any other symbol on a right-hand side is an implicit terminal.
        for rule in grammar.rules() {
            for sym in rule.rhs {
                if !self.map.contains_key(sym) {
                    debug!("treating undeclared symbol `{}` as a terminal", sym);
                    self.map.insert(sym.clone(), singleton(sym));
                }
            }
        }
    }

    /// Runs one pass over all rules. Returns whether any set grew.
    fn update(&mut self, grammar: &Grammar) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            let lookahead = self.first_of(rule.rhs);
            let first_set = self.map.entry(rule.lhs.clone()).or_default();
            let prev_cardinality = first_set.len();
            first_set.extend(lookahead);
            changed |= prev_cardinality != first_set.len();
        }
        changed
    }
}

impl PredictSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
