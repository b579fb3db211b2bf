//! Plain-text rendering of a grammar and its sets.

use std::collections::BTreeSet;
use std::fmt;

use ll_grammar::{Grammar, Symbol};
use ll_load::Query;
use ll_predict_sets::{FirstSets, FollowSets, PredictSets};

/// Displays a set of symbols as `{a, b, e}`, with epsilon written the way the
/// grammar writes it.
pub struct DisplaySet<'a> {
    grammar: &'a Grammar,
    set: &'a BTreeSet<Symbol>,
}

impl<'a> DisplaySet<'a> {
    pub fn new(grammar: &'a Grammar, set: &'a BTreeSet<Symbol>) -> Self {
        DisplaySet { grammar, set }
    }
}

impl<'a> fmt::Display for DisplaySet<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, sym) in self.set.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.grammar.display_sym(sym))?;
        }
        f.write_str("}")
    }
}

/// Everything computed for one grammar.
pub struct Report<'a> {
    pub grammar: &'a Grammar,
    pub first_sets: &'a FirstSets,
    pub follow_sets: &'a FollowSets,
    pub queries: &'a [Query],
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grammar = self.grammar;
        writeln!(f, "Start symbol: {}", grammar.start_sym())?;
        writeln!(
            f,
            "Nonterminals: {}",
            DisplaySet::new(grammar, grammar.nonterminals())
        )?;
        writeln!(
            f,
            "Terminals: {}",
            DisplaySet::new(grammar, grammar.terminals())
        )?;
        writeln!(f, "Productions:")?;
        for line in grammar.to_string().lines() {
            writeln!(f, "  {}", line)?;
        }

        writeln!(f)?;
        writeln!(f, "FIRST sets:")?;
        for nonterminal in grammar.nonterminals() {
            if let Some(set) = self.first_sets.get(nonterminal) {
                writeln!(f, "FIRST({}) = {}", nonterminal, DisplaySet::new(grammar, set))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "FOLLOW sets:")?;
        for (nonterminal, set) in self.follow_sets.iter() {
            writeln!(f, "FOLLOW({}) = {}", nonterminal, DisplaySet::new(grammar, set))?;
        }

        if !self.queries.is_empty() {
            writeln!(f)?;
            writeln!(f, "FIRST of strings:")?;
            for query in self.queries {
                let set = self.first_sets.first_of(&query.symbols);
                writeln!(f, "FIRST({}) = {}", query.text, DisplaySet::new(grammar, &set))?;
            }
        }
        Ok(())
    }
}
