//! Definitions of the grammar symbol types.

use std::fmt;
use std::rc::Rc;

/// A terminal symbol: something matched directly in the input, either a
/// literal string or a named token class produced by a lexer.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Terminal {
    text: Rc<str>,
    kind: TerminalKind,
}

/// Distinguishes how a terminal matches input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TerminalKind {
    /// Matches the terminal's text verbatim.
    Literal,
    /// Matches a named class of tokens, e.g. `identifier`.
    Class,
}

/// A non-terminal symbol: defined by one or more productions.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NonTerminal {
    repr: Repr,
}

/// The synthetic start symbol is a separate variant, so it can never be equal
/// to a user-supplied non-terminal, whatever the user names theirs.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
enum Repr {
    Named(Rc<str>),
    Start,
}

/// Either kind of grammar symbol.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Symbol {
    /// A terminal symbol.
    Terminal(Terminal),
    /// A non-terminal symbol.
    NonTerminal(NonTerminal),
}

impl Terminal {
    /// Creates a terminal matching the given text verbatim.
    pub fn literal(text: impl Into<Rc<str>>) -> Self {
        Terminal {
            text: text.into(),
            kind: TerminalKind::Literal,
        }
    }

    /// Creates a terminal matching a named token class.
    pub fn class(name: impl Into<Rc<str>>) -> Self {
        Terminal {
            text: name.into(),
            kind: TerminalKind::Class,
        }
    }

    /// Returns the terminal's text or class name.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether this terminal is a literal or a token class.
    pub fn kind(&self) -> TerminalKind {
        self.kind
    }
}

impl NonTerminal {
    /// Creates a non-terminal with the given name.
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        NonTerminal {
            repr: Repr::Named(name.into()),
        }
    }

    /// Creates the synthetic start symbol used for grammar augmentation.
    pub(crate) fn synthetic_start() -> Self {
        NonTerminal { repr: Repr::Start }
    }

    /// Returns the non-terminal's name. The synthetic start symbol is
    /// named "S".
    pub fn name(&self) -> &str {
        match self.repr {
            Repr::Named(ref name) => name,
            Repr::Start => "S",
        }
    }
}

impl Symbol {
    /// Returns the inner non-terminal, or `None` for a terminal.
    pub fn non_terminal(&self) -> Option<&NonTerminal> {
        match *self {
            Symbol::NonTerminal(ref non_terminal) => Some(non_terminal),
            Symbol::Terminal(_) => None,
        }
    }

    /// Determines whether this symbol is a terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(*self, Symbol::Terminal(_))
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(non_terminal: NonTerminal) -> Self {
        Symbol::NonTerminal(non_terminal)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TerminalKind::Literal => write!(f, "\"{}\"", self.text.replace('"', "\"\"")),
            TerminalKind::Class => write!(f, "?{}?", self.text.replace('?', "??")),
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escaped = self
            .name()
            .replace('\\', "\\\\")
            .replace('<', "\\<")
            .replace('>', "\\>");
        write!(f, "<{}>", escaped)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::Terminal(ref terminal) => terminal.fmt(f),
            Symbol::NonTerminal(ref non_terminal) => non_terminal.fmt(f),
        }
    }
}
