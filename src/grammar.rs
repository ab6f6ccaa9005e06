//! Definition of the grammar type and its start-rule augmentation.

use std::collections::BTreeMap;
use std::fmt;

use log::trace;

use crate::error::GrammarError;
use crate::production::Production;
use crate::symbol::{NonTerminal, Symbol};

/// A context-free grammar, indexed by the head symbol of its productions.
///
/// Construction augments the grammar with a synthetic start rule
/// `S ::= start`, where `S` is a fresh non-terminal that cannot collide with
/// any user-supplied symbol. The augmenting rule lets a parser built on top
/// of the automaton recognize when it has accepted its input.
#[derive(Clone, Debug)]
pub struct Grammar {
    indexed_productions: BTreeMap<NonTerminal, Vec<Production>>,
    starting_symbol: NonTerminal,
    starting_production: Production,
}

impl Grammar {
    /// Creates a grammar from its productions and a designated start symbol.
    pub fn new(productions: impl IntoIterator<Item = Production>, start: NonTerminal) -> Self {
        let mut indexed_productions: BTreeMap<NonTerminal, Vec<Production>> = BTreeMap::new();
        for production in productions {
            indexed_productions
                .entry(production.lhs().clone())
                .or_default()
                .push(production);
        }

        let starting_symbol = NonTerminal::synthetic_start();
        let starting_production =
            Production::new(starting_symbol.clone(), [Symbol::NonTerminal(start)]);
        trace!("augmenting grammar with `{}`", starting_production);
        indexed_productions.insert(starting_symbol.clone(), vec![starting_production.clone()]);

        Grammar {
            indexed_productions,
            starting_symbol,
            starting_production,
        }
    }

    /// Returns the synthetic start symbol.
    pub fn starting_symbol(&self) -> &NonTerminal {
        &self.starting_symbol
    }

    /// Returns the synthetic production `S ::= start`.
    pub fn starting_production(&self) -> &Production {
        &self.starting_production
    }

    /// Returns the productions headed by the given non-terminal.
    ///
    /// Fails with [`GrammarError::UnknownSymbol`] when no productions are
    /// recorded for the symbol. An undefined head queried during closure is a
    /// malformed grammar, not a benign empty result.
    pub fn productions_of(
        &self,
        non_terminal: &NonTerminal,
    ) -> Result<&[Production], GrammarError> {
        match self.indexed_productions.get(non_terminal) {
            Some(productions) => Ok(productions),
            None => Err(GrammarError::UnknownSymbol {
                symbol: non_terminal.clone(),
            }),
        }
    }

    /// Returns an iterator over all productions, the augmenting rule included.
    pub fn productions(&self) -> impl Iterator<Item = &Production> {
        self.indexed_productions.values().flatten()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for production in self.productions() {
            writeln!(f, "{}", production)?;
        }
        Ok(())
    }
}
