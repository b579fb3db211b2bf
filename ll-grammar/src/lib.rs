//! Grammar model for FIRST and FOLLOW set analysis. Symbols are classified once,
//! when the grammar is built, and carry their kind thereafter.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod classify;
pub mod error;
pub mod grammar;
pub mod symbol;

pub use crate::classify::{CaseConvention, Classify, DEFAULT_EPSILON};
pub use crate::error::GrammarError;
pub use crate::grammar::{Grammar, GrammarBuilder, Production, RuleRef};
pub use crate::symbol::{Symbol, SymbolKind, SymbolName, END_OF_INPUT_TOKEN};
