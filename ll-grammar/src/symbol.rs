//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! kind and name.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The token that denotes the end of input. It cannot name a grammar symbol.
pub const END_OF_INPUT_TOKEN: &str = "$";

/// Shared, immutable symbol name.
pub type SymbolName = Arc<str>;

/// The kind of a grammar symbol, as decided by classification.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymbolKind {
    /// A symbol that appears in the final input.
    Terminal,
    /// A symbol defined by productions.
    Nonterminal,
    /// The empty-derivation marker.
    Epsilon,
}

/// A grammar symbol.
///
/// `Epsilon` may only appear in FIRST sets, and `EndOfInput` only in
/// FOLLOW sets.
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// A terminal symbol.
    Terminal(SymbolName),
    /// A nonterminal symbol.
    Nonterminal(SymbolName),
    /// The empty-derivation marker.
    Epsilon,
    /// The boundary after the last input token, written `$`.
    EndOfInput,
}

impl Symbol {
    /// Creates a terminal symbol.
    pub fn terminal(name: impl AsRef<str>) -> Self {
        Symbol::Terminal(name.as_ref().into())
    }

    /// Creates a nonterminal symbol.
    pub fn nonterminal(name: impl AsRef<str>) -> Self {
        Symbol::Nonterminal(name.as_ref().into())
    }

    /// Creates a symbol of the given kind. The name is ignored for `Epsilon`.
    pub fn with_kind(kind: SymbolKind, name: impl AsRef<str>) -> Self {
        match kind {
            SymbolKind::Terminal => Symbol::terminal(name),
            SymbolKind::Nonterminal => Symbol::nonterminal(name),
            SymbolKind::Epsilon => Symbol::Epsilon,
        }
    }

    /// Checks whether this is a terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Checks whether this is a nonterminal.
    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    /// Checks whether this is the epsilon marker.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name) => f.write_str(name),
            Symbol::Epsilon => f.write_str("ε"),
            Symbol::EndOfInput => f.write_str(END_OF_INPUT_TOKEN),
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SymbolKind::Terminal => "terminal",
            SymbolKind::Nonterminal => "nonterminal",
            SymbolKind::Epsilon => "epsilon",
        })
    }
}
