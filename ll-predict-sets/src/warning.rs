//! Recoverable warnings.

use std::fmt;

use ll_grammar::Symbol;

/// A recoverable problem found during set computation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Warning {
    /// A symbol had no FIRST set. Its own singleton set was used instead.
    MissingFirstSet {
        /// The symbol without a FIRST set.
        symbol: Symbol,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::MissingFirstSet { symbol } => write!(
                f,
                "symbol `{}` has no FIRST set; treating it as its own FIRST set",
                symbol
            ),
        }
    }
}
