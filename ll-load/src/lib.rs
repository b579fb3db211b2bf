//! Allows us to load context-free grammars from
//! a line-oriented text format.
//!
//! ```text
//! # comments and blank lines are ignored
//! S
//! S -> A B
//! A -> a | e
//! B -> b
//! FIRST: A B
//! ```
//!
//! The first line names the start symbol. `FIRST:` lines are queries for the
//! FIRST set of a string. Other lines that are not rules are skipped with a
//! warning.

#![deny(unsafe_code)]
#![deny(missing_docs)]

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use ll_grammar::{CaseConvention, Grammar, GrammarBuilder, GrammarError, Symbol, DEFAULT_EPSILON};

/// Represents an error when loading a grammar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed. Zero when the error is not tied to a line.
    pub line: u32,
}

impl LoadError {
    fn grammar(err: GrammarError, line: u32) -> Self {
        LoadError {
            reason: err.to_string(),
            line,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            write!(f, "Load error: {}", self.reason)
        } else {
            write!(f, "Load error at line {}: {}", self.line, self.reason)
        }
    }
}

impl std::error::Error for LoadError {}

/// How the symbols of an alternative are separated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tokenize {
    /// Symbols are separated by whitespace: `S -> A b`.
    #[default]
    Whitespace,
    /// Every character is a symbol: `S -> Ab`.
    Chars,
}

/// Options for loading.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    /// How alternatives are split into symbols.
    pub tokenize: Tokenize,
    /// The token that denotes epsilon.
    pub epsilon: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            tokenize: Tokenize::default(),
            epsilon: DEFAULT_EPSILON.to_string(),
        }
    }
}

/// A request for the FIRST set of a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Query {
    /// The string as written.
    pub text: String,
    /// The string's symbols, resolved against the grammar.
    pub symbols: Vec<Symbol>,
}

/// A line that could not be understood.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedLine {
    /// One-indexed line number.
    pub line: u32,
    /// The line's text.
    pub text: String,
}

/// The result of loading.
#[derive(Debug)]
pub struct Loaded {
    /// The grammar.
    pub grammar: Grammar,
    /// `FIRST:` queries, in order of appearance.
    pub queries: Vec<Query>,
    /// Lines skipped as malformed.
    pub skipped: Vec<SkippedLine>,
}

struct RuleLine<'a> {
    line: u32,
    lhs: &'a str,
    alternatives: Vec<Vec<String>>,
}

/// Loads a grammar from a file.
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Loaded, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| LoadError {
        reason: format!("cannot read {}: {}", path.display(), err),
        line: 0,
    })?;
    let loaded = load(&text, options)?;
    debug!(
        "loaded {} rules from {}",
        loaded.grammar.rules().count(),
        path.display()
    );
    Ok(loaded)
}

/// Loads a grammar from a string.
pub fn load(text: &str, options: &LoadOptions) -> Result<Loaded, LoadError> {
    let mut lines = text
        .lines()
        .zip(1..)
        .map(|(text, line)| (line, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'));

    let (start_line, start) = lines.next().ok_or_else(|| LoadError {
        reason: "missing start symbol".to_string(),
        line: 0,
    })?;

    let mut rules = vec![];
    let mut queries = vec![];
    let mut skipped = vec![];
    for (line, text) in lines {
        if let Some(query) = text.strip_prefix("FIRST:") {
            queries.push(query.trim());
        } else if let Some(rule) = parse_rule(line, text, options.tokenize) {
            rules.push(rule);
        } else {
            warn!("skipping malformed line {}: {}", line, text);
            skipped.push(SkippedLine {
                line,
                text: text.to_string(),
            });
        }
    }

    let mut builder = GrammarBuilder::with_classifier(CaseConvention::new(options.epsilon.clone()));
    builder
        .nonterminal(start)
        .map_err(|err| LoadError::grammar(err, start_line))?
        .start(start);
    // Left-hand sides are nonterminals wherever they occur, even before their rule.
    for rule in &rules {
        builder
            .nonterminal(rule.lhs)
            .map_err(|err| LoadError::grammar(err, rule.line))?;
    }
    for rule in &rules {
        for rhs in &rule.alternatives {
            builder
                .add_production(rule.lhs, rhs)
                .map_err(|err| LoadError::grammar(err, rule.line))?;
        }
    }
    let grammar = builder
        .build()
        .map_err(|err| LoadError::grammar(err, start_line))?;

    let queries = queries
        .into_iter()
        .map(|text| Query {
            text: text.to_string(),
            symbols: tokens(text, options.tokenize)
                .iter()
                .map(|token| grammar.symbol(token))
                .collect(),
        })
        .collect();

    Ok(Loaded {
        grammar,
        queries,
        skipped,
    })
}

fn parse_rule(line: u32, text: &str, tokenize: Tokenize) -> Option<RuleLine<'_>> {
    let (lhs, rhs) = text.split_once("->")?;
    let lhs = lhs.trim();
    if lhs.is_empty() || lhs.contains(char::is_whitespace) {
        return None;
    }
    Some(RuleLine {
        line,
        lhs,
        alternatives: rhs.split('|').map(|alt| tokens(alt, tokenize)).collect(),
    })
}

fn tokens(text: &str, tokenize: Tokenize) -> Vec<String> {
    match tokenize {
        Tokenize::Whitespace => text.split_whitespace().map(str::to_string).collect(),
        Tokenize::Chars => text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect(),
    }
}
