//! FIRST and FOLLOW sets of context-free grammars.
//!
//! ```
//! use ll_first_follow::{Grammar, GrammarSetsExt, PredictSets, Symbol};
//!
//! let mut builder = Grammar::builder();
//! builder
//!     .start("S")
//!     .add_production("S", ["A", "B"]).unwrap()
//!     .add_production("A", ["a"]).unwrap()
//!     .add_production("A", ["e"]).unwrap()
//!     .add_production("B", ["b"]).unwrap();
//! let grammar = builder.build().unwrap();
//!
//! let follow_sets = grammar.follow_sets();
//! let follow_a = follow_sets.get(&Symbol::nonterminal("A")).unwrap();
//! assert!(follow_a.contains(&Symbol::terminal("b")));
//! ```

pub mod report;

pub use ll_grammar::*;
pub use ll_load as load;
pub use ll_predict_sets as predict_sets;
pub use ll_predict_sets::{
    compute_first, compute_follow, first_of, FirstSets, FollowSets, GrammarSetsExt, PredictSets,
    Warning,
};
