mod support;

use std::collections::BTreeSet;

use ll_grammar::Symbol;
use ll_predict_sets::{compute_first, first_of, GrammarSetsExt, PredictSets};
use test_case::test_case;

use support::*;

#[test]
fn test_nullable_prefix() {
    let first_sets = compute_first(&nullable_prefix());

    assert_eq!(first_sets.get(&nt("A")), Some(&set([t("a"), Symbol::Epsilon])));
    assert_eq!(first_sets.get(&nt("B")), Some(&set([t("b")])));
    assert_eq!(first_sets.get(&nt("S")), Some(&set([t("a"), t("b")])));
}

#[test]
fn test_left_recursion() {
    let first_sets = compute_first(&left_recursive());

    assert_eq!(first_sets.get(&nt("E")), Some(&set([t("t")])));
    assert_eq!(first_sets.get(&nt("T")), Some(&set([t("t")])));
}

#[test_case("E", &["(", "id"] ; "expression")]
#[test_case("T", &["(", "id"] ; "term")]
#[test_case("F", &["(", "id"] ; "factor")]
#[test_case("X", &["+", "e"] ; "expression tail")]
#[test_case("Y", &["*", "e"] ; "term tail")]
fn test_expressions(sym: &str, expected: &[&str]) {
    let grammar = expressions();
    let first_sets = grammar.first_sets();
    let expected: BTreeSet<Symbol> = expected
        .iter()
        .map(|&token| grammar.symbol(token))
        .collect();

    assert_eq!(first_sets.get(&nt(sym)), Some(&expected));
}

#[test]
fn test_terminals_and_epsilon_are_their_own_first_sets() {
    let grammar = expressions();
    let first_sets = compute_first(&grammar);

    for terminal in grammar.terminals() {
        assert_eq!(first_sets.get(terminal), Some(&set([terminal.clone()])));
    }
    assert_eq!(
        first_sets.get(&Symbol::Epsilon),
        Some(&set([Symbol::Epsilon]))
    );
}

#[test]
fn test_nonterminal_sets_hold_no_nonterminals() {
    let grammar = expressions();
    let first_sets = compute_first(&grammar);

    for nonterminal in grammar.nonterminals() {
        let first_set = first_sets.get(nonterminal).unwrap();
        assert!(first_set
            .iter()
            .all(|sym| sym.is_terminal() || sym.is_epsilon()));
    }
}

#[test]
fn test_mutual_recursion() {
    let grammar = grammar(
        "A",
        &[
            ("A", &["B", "x"]),
            ("B", &["A", "y"]),
            ("B", &["C"]),
            ("C", &["z"]),
            ("C", &[]),
        ],
    );
    let first_sets = compute_first(&grammar);

    assert_eq!(first_sets.get(&nt("A")), Some(&set([t("x"), t("z")])));
    assert_eq!(first_sets.get(&nt("B")), Some(&set([t("x"), t("z"), Symbol::Epsilon])));
}

#[test]
fn test_nonterminal_without_productions() {
    let grammar = grammar("S", &[("S", &["a", "Orphan"])]);
    let first_sets = compute_first(&grammar);

    assert_eq!(first_sets.get(&nt("Orphan")), Some(&set([])));
    assert_eq!(first_sets.get(&nt("S")), Some(&set([t("a")])));
}

#[test]
fn test_blocked_by_nonterminal_without_productions() {
    let grammar = grammar("S", &[("S", &["Orphan", "a"])]);
    let first_sets = compute_first(&grammar);

    assert_eq!(first_sets.get(&nt("S")), Some(&set([])));
}

#[test]
fn test_idempotent() {
    let grammar = expressions();

    assert_eq!(compute_first(&grammar), compute_first(&grammar));
}

#[test]
fn test_first_of_empty_string() {
    let first_sets = compute_first(&nullable_prefix());

    assert_eq!(first_of(&first_sets, &[]), set([Symbol::Epsilon]));
}

#[test]
fn test_first_of_nullable_string() {
    let first_sets = compute_first(&expressions());

    assert_eq!(
        first_of(&first_sets, &[nt("X"), nt("Y")]),
        set([t("+"), t("*"), Symbol::Epsilon])
    );
}

#[test]
fn test_first_of_stops_at_non_nullable_symbol() {
    let first_sets = compute_first(&expressions());

    assert_eq!(
        first_of(&first_sets, &[nt("Y"), t(")"), nt("X")]),
        set([t("*"), t(")")])
    );
}

#[test]
fn test_first_of_unknown_symbol_falls_back_to_itself() {
    let first_sets = compute_first(&nullable_prefix());
    let mut warnings = vec![];
    let result = first_sets.first_of_with(&[nt("A"), nt("Unknown"), t("b")], |w| warnings.push(w));

    assert_eq!(result, set([t("a"), nt("Unknown")]));
    assert_eq!(warnings.len(), 1);
}
