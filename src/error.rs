//! Failure conditions reported by grammar and item operations.

use crate::production::Production;
use crate::symbol::NonTerminal;

/// Errors reported while querying a grammar or manipulating items.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GrammarError {
    /// An item at the end of its production body was advanced. Always a logic
    /// bug in the caller: completeness must be checked before advancing.
    #[error("cannot advance item past the end of production `{production}`")]
    InvalidAdvance {
        /// The production of the completed item.
        production: Production,
    },
    /// A non-terminal with no recorded productions was queried, e.g. a symbol
    /// that only ever appears on the right-hand side of rules. Signals a
    /// malformed grammar.
    #[error("no productions recorded for symbol {symbol}")]
    UnknownSymbol {
        /// The undefined non-terminal.
        symbol: NonTerminal,
    },
}
