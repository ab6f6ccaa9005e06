//! Definition of the grammar production type.

use std::fmt;
use std::rc::Rc;

use crate::symbol::{NonTerminal, Symbol};

/// A grammar rule: one non-terminal produces an ordered sequence of symbols.
///
/// The RHS is frozen into a shared slice at construction, so later changes to
/// the caller's sequence cannot affect the rule. Equality and hashing are
/// structural over `(lhs, rhs)`: two separately constructed productions with
/// the same head and body are interchangeable.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Production {
    lhs: NonTerminal,
    rhs: Rc<[Symbol]>,
}

impl Production {
    /// Creates a new production.
    pub fn new(lhs: NonTerminal, rhs: impl AsRef<[Symbol]>) -> Self {
        Production {
            lhs,
            rhs: rhs.as_ref().into(),
        }
    }

    /// Returns the production's left-hand side symbol.
    pub fn lhs(&self) -> &NonTerminal {
        &self.lhs
    }

    /// Returns the production's right-hand side symbols.
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::=", self.lhs)?;
        for symbol in self.rhs.iter() {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}
