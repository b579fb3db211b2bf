//! Predict sets: FIRST and FOLLOW set computation.
//!
//! Both computations are least fixed points. The tables only grow while they
//! are computed and are returned only once a full pass changes nothing.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod first;
pub mod follow;
pub mod sets;
pub mod sets_ext;
pub mod warning;

use std::collections::BTreeSet;

use ll_grammar::{Grammar, Symbol};

pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::sets::{PerSymbolSets, PredictSets};
pub use self::sets_ext::GrammarSetsExt;
pub use self::warning::Warning;

/// Computes FIRST sets of every terminal, nonterminal and epsilon.
pub fn compute_first(grammar: &Grammar) -> FirstSets {
    FirstSets::new(grammar)
}

/// Computes FOLLOW sets of every nonterminal.
pub fn compute_follow(grammar: &Grammar, first_sets: &FirstSets) -> FollowSets {
    FollowSets::new(grammar, first_sets)
}

/// Computes the FIRST set of a string of symbols.
pub fn first_of(first_sets: &FirstSets, string: &[Symbol]) -> BTreeSet<Symbol> {
    first_sets.first_of(string)
}
