//! Classification of raw tokens into terminals, nonterminals and epsilon.

use crate::symbol::SymbolKind;

/// The token that denotes the empty derivation, unless configured otherwise.
pub const DEFAULT_EPSILON: &str = "e";

/// Decides the kind of tokens that were not declared explicitly.
pub trait Classify {
    /// Classifies a raw token.
    fn classify(&self, token: &str) -> SymbolKind;

    /// Returns the token that denotes epsilon.
    fn epsilon_token(&self) -> &str;
}

/// Classification by lexical case: the epsilon token is epsilon, names that begin
/// with an uppercase letter are nonterminals, everything else is a terminal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseConvention {
    epsilon: String,
}

impl CaseConvention {
    /// Creates the convention with the given epsilon token.
    pub fn new(epsilon: impl Into<String>) -> Self {
        CaseConvention {
            epsilon: epsilon.into(),
        }
    }
}

impl Default for CaseConvention {
    fn default() -> Self {
        CaseConvention::new(DEFAULT_EPSILON)
    }
}

impl Classify for CaseConvention {
    fn classify(&self, token: &str) -> SymbolKind {
        if token == self.epsilon {
            SymbolKind::Epsilon
        } else if token.chars().next().is_some_and(char::is_uppercase) {
            SymbolKind::Nonterminal
        } else {
            SymbolKind::Terminal
        }
    }

    fn epsilon_token(&self) -> &str {
        &self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("e", SymbolKind::Epsilon)]
    #[test_case("E", SymbolKind::Nonterminal)]
    #[test_case("Expr", SymbolKind::Nonterminal)]
    #[test_case("id", SymbolKind::Terminal)]
    #[test_case("+", SymbolKind::Terminal)]
    #[test_case("eps", SymbolKind::Terminal)]
    fn test_case_convention(token: &str, kind: SymbolKind) {
        assert_eq!(CaseConvention::default().classify(token), kind);
    }

    #[test]
    fn test_custom_epsilon() {
        let convention = CaseConvention::new("ε");
        assert_eq!(convention.classify("ε"), SymbolKind::Epsilon);
        assert_eq!(convention.classify("e"), SymbolKind::Terminal);
    }
}
