//! FOLLOW sets.

use std::collections::BTreeSet;

use log::{debug, trace};

use ll_grammar::{Grammar, Symbol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::first::FirstSets;
use crate::sets::{PerSymbolSets, PredictSets};

/// FOLLOW sets.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// The FOLLOW set of the start symbol always contains the end of input.
    ///
    /// `first_sets` must be computed for the same grammar. A symbol without a
    /// FIRST entry stands for itself, so only terminals found that way reach a
    /// FOLLOW set.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: PerSymbolSets::new(),
        };
        this.seed(grammar);

        let mut passes = 0;
        let mut changed = true;
        while changed {
            passes += 1;
            changed = this.update(grammar, first_sets);
            trace!("FOLLOW pass {}: changed = {}", passes, changed);
        }
        debug!(
            "FOLLOW sets of {} nonterminals converged after {} passes",
            this.map.len(),
            passes
        );
        this
    }

    /// Iterates over nonterminals and their FOLLOW sets.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BTreeSet<Symbol>)> {
        self.map.iter()
    }

    fn seed(&mut self, grammar: &Grammar) {
        self.map = grammar
            .nonterminals()
            .iter()
            .map(|nt| (nt.clone(), BTreeSet::new()))
            .collect();
        self.map
            .entry(grammar.start_sym().clone())
            .or_default()
            .insert(Symbol::EndOfInput);
    }

    /// Runs one pass over every nonterminal occurrence. Returns whether any set grew.
    fn update(&mut self, grammar: &Grammar, first_sets: &FirstSets) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            for (i, sym) in rule.rhs.iter().enumerate() {
                if !sym.is_nonterminal() {
                    continue;
                }
                let rest = &rule.rhs[i + 1..];
                let mut follow_set = BTreeSet::new();
                let inherits_lhs = if rest.is_empty() {
                    true
                } else {
                    let first_set = first_sets.first_of(rest);
                    follow_set.extend(first_set.iter().filter(|s| s.is_terminal()).cloned());
                    first_set.contains(&Symbol::Epsilon)
                };
                if inherits_lhs {
                    if let Some(lhs_follow) = self.map.get(rule.lhs) {
                        follow_set.extend(lhs_follow.iter().cloned());
                    }
                }

                let followed = self.map.entry(sym.clone()).or_default();
                let prev_cardinality = followed.len();
                followed.extend(follow_set);
                changed |= prev_cardinality != followed.len();
            }
        }
        changed
    }
}

impl PredictSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
