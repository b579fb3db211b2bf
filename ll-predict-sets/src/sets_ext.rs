//! Extension trait for computing sets on a grammar.

use ll_grammar::Grammar;

use crate::{FirstSets, FollowSets};

/// Set computations available directly on a grammar.
pub trait GrammarSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes FOLLOW sets, computing FIRST sets along the way.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from FIRST sets computed earlier.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
}

impl GrammarSetsExt for Grammar {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }
}
