//! Definitions of the context-free grammar type, its rules and its builder.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::classify::{CaseConvention, Classify};
use crate::error::GrammarError;
use crate::symbol::{Symbol, SymbolKind, SymbolName, END_OF_INPUT_TOKEN};

/// The right-hand side of a single rule alternative.
pub type Production = Vec<Symbol>;

/// References rule's components.
#[derive(Copy, Clone, Debug)]
pub struct RuleRef<'a> {
    /// Left-hand side.
    pub lhs: &'a Symbol,
    /// Right-hand side.
    pub rhs: &'a [Symbol],
}

/// Context-free grammar type.
///
/// Built once with a [`GrammarBuilder`] and read-only afterwards. Every
/// nonterminal has an entry in the production map, possibly with no
/// alternatives.
#[derive(Clone)]
pub struct Grammar {
    start: Symbol,
    productions: BTreeMap<Symbol, Vec<Production>>,
    terminals: BTreeSet<Symbol>,
    nonterminals: BTreeSet<Symbol>,
    registry: BTreeMap<SymbolName, SymbolKind>,
    classifier: Arc<dyn Classify + Send + Sync>,
}

impl Grammar {
    /// Starts building a grammar classified by [`CaseConvention`].
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Returns the start symbol.
    pub fn start_sym(&self) -> &Symbol {
        &self.start
    }

    /// Returns the alternatives of a nonterminal, in declaration order.
    ///
    /// The slice is empty for a nonterminal without productions and for any
    /// symbol that is not a nonterminal of this grammar.
    pub fn alternatives(&self, lhs: &Symbol) -> &[Production] {
        self.productions
            .get(lhs)
            .map(|alts| &alts[..])
            .unwrap_or(&[])
    }

    /// Returns all productions, grouped by their left-hand side.
    pub fn productions(&self) -> &BTreeMap<Symbol, Vec<Production>> {
        &self.productions
    }

    /// Returns an iterator over all rules of the grammar.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        self.productions.iter().flat_map(|(lhs, alts)| {
            alts.iter().map(move |rhs| RuleRef {
                lhs,
                rhs: &rhs[..],
            })
        })
    }

    /// Returns the terminal vocabulary.
    pub fn terminals(&self) -> &BTreeSet<Symbol> {
        &self.terminals
    }

    /// Returns the nonterminal vocabulary, including nonterminals without productions.
    pub fn nonterminals(&self) -> &BTreeSet<Symbol> {
        &self.nonterminals
    }

    /// The token that denotes epsilon in this grammar.
    pub fn epsilon_token(&self) -> &str {
        self.classifier.epsilon_token()
    }

    /// Resolves a raw token the same way grammar construction does, without
    /// registering it. The result may be a symbol this grammar does not know.
    pub fn symbol(&self, token: &str) -> Symbol {
        let kind = self
            .registry
            .get(token)
            .copied()
            .unwrap_or_else(|| self.classifier.classify(token));
        Symbol::with_kind(kind, token)
    }

    /// Checks whether the symbol is registered in either vocabulary, or is epsilon.
    pub fn contains(&self, sym: &Symbol) -> bool {
        match sym {
            Symbol::Terminal(_) => self.terminals.contains(sym),
            Symbol::Nonterminal(_) => self.nonterminals.contains(sym),
            Symbol::Epsilon => true,
            Symbol::EndOfInput => false,
        }
    }

    /// Writes a symbol the way it appears in grammar text.
    pub fn display_sym<'a>(&'a self, sym: &'a Symbol) -> impl fmt::Display + 'a {
        DisplaySym { grammar: self, sym }
    }
}

struct DisplaySym<'a> {
    grammar: &'a Grammar,
    sym: &'a Symbol,
}

impl<'a> fmt::Display for DisplaySym<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.sym {
            Symbol::Epsilon => f.write_str(self.grammar.epsilon_token()),
            sym => write!(f, "{}", sym),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (lhs, alts) in &self.productions {
            if alts.is_empty() {
                continue;
            }
            write!(f, "{} ->", lhs)?;
            for (i, rhs) in alts.iter().enumerate() {
                if i > 0 {
                    f.write_str(" |")?;
                }
                if rhs.is_empty() {
                    write!(f, " {}", self.epsilon_token())?;
                }
                for sym in rhs {
                    write!(f, " {}", self.display_sym(sym))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("start", &self.start)
            .field("productions", &self.productions)
            .field("terminals", &self.terminals)
            .field("nonterminals", &self.nonterminals)
            .finish()
    }
}

/// The grammar builder.
///
/// Names declared with [`terminal`] or [`nonterminal`], or seen earlier, keep
/// their kind. Unseen tokens are classified by the builder's [`Classify`]
/// implementation.
///
/// [`terminal`]: GrammarBuilder::terminal
/// [`nonterminal`]: GrammarBuilder::nonterminal
pub struct GrammarBuilder {
    start: Option<SymbolName>,
    productions: BTreeMap<Symbol, Vec<Production>>,
    terminals: BTreeSet<Symbol>,
    nonterminals: BTreeSet<Symbol>,
    registry: BTreeMap<SymbolName, SymbolKind>,
    classifier: Arc<dyn Classify + Send + Sync>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        GrammarBuilder::new()
    }
}

impl GrammarBuilder {
    /// Creates a builder that classifies tokens by [`CaseConvention`].
    pub fn new() -> Self {
        GrammarBuilder::with_classifier(CaseConvention::default())
    }

    /// Creates a builder with the given classifier.
    pub fn with_classifier<C>(classifier: C) -> Self
    where
        C: Classify + Send + Sync + 'static,
    {
        let mut registry = BTreeMap::new();
        registry.insert(classifier.epsilon_token().into(), SymbolKind::Epsilon);
        GrammarBuilder {
            start: None,
            productions: BTreeMap::new(),
            terminals: BTreeSet::new(),
            nonterminals: BTreeSet::new(),
            registry,
            classifier: Arc::new(classifier),
        }
    }

    /// Sets the start symbol.
    pub fn start(&mut self, name: &str) -> &mut Self {
        self.start = Some(name.into());
        self
    }

    /// Declares a terminal explicitly.
    pub fn terminal(&mut self, name: &str) -> Result<&mut Self, GrammarError> {
        self.register(name, SymbolKind::Terminal)?;
        Ok(self)
    }

    /// Declares a nonterminal explicitly.
    pub fn nonterminal(&mut self, name: &str) -> Result<&mut Self, GrammarError> {
        self.register(name, SymbolKind::Nonterminal)?;
        Ok(self)
    }

    /// Adds one alternative for `lhs`.
    ///
    /// Every token of `rhs` is classified and registered. Nonterminals that are
    /// referenced before their own productions are declared are valid.
    pub fn add_production<I, T>(&mut self, lhs: &str, rhs: I) -> Result<&mut Self, GrammarError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let lhs = self.register_lhs(lhs)?;
        let rhs = rhs
            .into_iter()
            .map(|token| self.resolve(token.as_ref()))
            .collect::<Result<Production, _>>()?;
        self.productions.entry(lhs).or_default().push(rhs);
        Ok(self)
    }

    /// Validates the start symbol and finishes the grammar.
    ///
    /// The start symbol must already be registered as a nonterminal, either as
    /// a left-hand side or through [`nonterminal`].
    ///
    /// [`nonterminal`]: GrammarBuilder::nonterminal
    pub fn build(mut self) -> Result<Grammar, GrammarError> {
        let name = self.start.clone().ok_or(GrammarError::MissingStartSymbol)?;
        let start = match self.registry.get(&name).copied() {
            Some(SymbolKind::Nonterminal) => Symbol::Nonterminal(name),
            Some(kind) => {
                return Err(GrammarError::StartNotNonterminal {
                    name: name.to_string(),
                    kind,
                })
            }
            None => {
                return Err(GrammarError::StartNotDeclared {
                    name: name.to_string(),
                })
            }
        };
        Ok(Grammar {
            start,
            productions: self.productions,
            terminals: self.terminals,
            nonterminals: self.nonterminals,
            registry: self.registry,
            classifier: self.classifier,
        })
    }

    fn register_lhs(&mut self, name: &str) -> Result<Symbol, GrammarError> {
        if !self.registry.contains_key(name)
            && self.classifier.classify(name) != SymbolKind::Nonterminal
        {
            warn!(
                "`{}` is defined by productions but is not named like a nonterminal",
                name
            );
        }
        self.register(name, SymbolKind::Nonterminal)
    }

    fn resolve(&mut self, token: &str) -> Result<Symbol, GrammarError> {
        let kind = self
            .registry
            .get(token)
            .copied()
            .unwrap_or_else(|| self.classifier.classify(token));
        self.register(token, kind)
    }

    fn register(&mut self, name: &str, kind: SymbolKind) -> Result<Symbol, GrammarError> {
        if name == END_OF_INPUT_TOKEN {
            return Err(GrammarError::ReservedName {
                name: name.to_string(),
            });
        }
        if let Some(&registered) = self.registry.get(name) {
            if registered != kind {
                return Err(GrammarError::KindConflict {
                    name: name.to_string(),
                    registered,
                    used_as: kind,
                });
            }
        }
        let name: SymbolName = name.into();
        self.registry.entry(name.clone()).or_insert(kind);
        let sym = Symbol::with_kind(kind, &name);
        match kind {
            SymbolKind::Terminal => {
                self.terminals.insert(sym.clone());
            }
            SymbolKind::Nonterminal => {
                self.nonterminals.insert(sym.clone());
                self.productions.entry(sym.clone()).or_default();
            }
            SymbolKind::Epsilon => {}
        }
        Ok(sym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_preserve_declaration_order() {
        let mut builder = Grammar::builder();
        builder
            .start("A")
            .add_production("A", ["b"])
            .unwrap()
            .add_production("A", ["a"])
            .unwrap();
        let grammar = builder.build().unwrap();
        let rhs = grammar
            .rules()
            .map(|rule| rule.rhs.to_vec())
            .collect::<Vec<_>>();
        assert_eq!(
            rhs,
            vec![vec![Symbol::terminal("b")], vec![Symbol::terminal("a")]]
        );
    }

    #[test]
    fn test_end_of_input_token_is_reserved() {
        let mut builder = Grammar::builder();
        let err = builder.add_production("S", ["a", "$"]).err();

        assert_eq!(
            err,
            Some(GrammarError::ReservedName {
                name: "$".to_string()
            })
        );
        assert!(builder.terminal("$").is_err());
        assert!(!builder.terminals.contains(&Symbol::terminal("$")));
    }

    #[test]
    fn test_display() {
        let mut builder = Grammar::builder();
        builder
            .start("S")
            .add_production("S", ["a", "S"])
            .unwrap()
            .add_production("S", Vec::<&str>::new())
            .unwrap();
        let grammar = builder.build().unwrap();
        assert_eq!(grammar.to_string(), "S -> a S | e\n");
    }
}
