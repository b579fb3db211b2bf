use std::error::Error;
use std::fmt;

use crate::symbol::SymbolKind;

/// Represents an error when building a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// A name was used with a kind that contradicts its registered kind.
    KindConflict {
        /// The offending name.
        name: String,
        /// The kind the name was registered with.
        registered: SymbolKind,
        /// The kind the name was used as.
        used_as: SymbolKind,
    },
    /// No start symbol was given.
    MissingStartSymbol,
    /// The start symbol was never registered as a nonterminal.
    StartNotDeclared {
        /// Name of the start symbol.
        name: String,
    },
    /// A name is reserved and cannot be a grammar symbol.
    ReservedName {
        /// The offending name.
        name: String,
    },
    /// The start symbol is not a nonterminal.
    StartNotNonterminal {
        /// Name of the start symbol.
        name: String,
        /// The kind the name is registered with.
        kind: SymbolKind,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::KindConflict {
                name,
                registered,
                used_as,
            } => write!(
                f,
                "symbol `{}` is a {} but is used as a {}",
                name, registered, used_as
            ),
            GrammarError::MissingStartSymbol => write!(f, "grammar has no start symbol"),
            GrammarError::StartNotDeclared { name } => write!(
                f,
                "start symbol `{}` is not a nonterminal of the grammar",
                name
            ),
            GrammarError::ReservedName { name } => {
                write!(f, "`{}` is reserved for the end of input", name)
            }
            GrammarError::StartNotNonterminal { name, kind } => write!(
                f,
                "start symbol `{}` must be a nonterminal, but it is a {}",
                name, kind
            ),
        }
    }
}

impl Error for GrammarError {}
