#![allow(dead_code)]

use std::collections::BTreeSet;

use ll_grammar::{Grammar, Symbol};

/// Builds a grammar from `(lhs, rhs)` pairs. An empty rhs is the empty production.
pub fn grammar(start: &str, rules: &[(&str, &[&str])]) -> Grammar {
    let mut builder = Grammar::builder();
    builder.nonterminal(start).unwrap().start(start);
    for &(lhs, rhs) in rules {
        builder.add_production(lhs, rhs.iter().copied()).unwrap();
    }
    builder.build().unwrap()
}

pub fn t(name: &str) -> Symbol {
    Symbol::terminal(name)
}

pub fn nt(name: &str) -> Symbol {
    Symbol::nonterminal(name)
}

pub fn set<const N: usize>(syms: [Symbol; N]) -> BTreeSet<Symbol> {
    syms.into_iter().collect()
}

/// `S -> A B`, `A -> a | e`, `B -> b`
pub fn nullable_prefix() -> Grammar {
    grammar(
        "S",
        &[("S", &["A", "B"]), ("A", &["a"]), ("A", &["e"]), ("B", &["b"])],
    )
}

/// `E -> E + T | T`, `T -> t`
pub fn left_recursive() -> Grammar {
    grammar(
        "E",
        &[("E", &["E", "+", "T"]), ("E", &["T"]), ("T", &["t"])],
    )
}

/// The classic expression grammar with left recursion removed.
pub fn expressions() -> Grammar {
    grammar(
        "E",
        &[
            ("E", &["T", "X"]),
            ("X", &["+", "T", "X"]),
            ("X", &["e"]),
            ("T", &["F", "Y"]),
            ("Y", &["*", "F", "Y"]),
            ("Y", &["e"]),
            ("F", &["(", "E", ")"]),
            ("F", &["id"]),
        ],
    )
}
