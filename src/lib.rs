//! Library for constructing the canonical collection of LR(0) item sets for
//! context-free grammars. The collection and its transition function form the
//! state machine that parse table generators are built on.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod error;
pub mod grammar;
pub mod item;
pub mod lr0;
pub mod production;
pub mod symbol;

pub use crate::error::GrammarError;
pub use crate::grammar::Grammar;
pub use crate::item::{Item, ItemSet};
pub use crate::lr0::{Automaton, AutomatonBuilder, ClosureBuilder, TransitionMap};
pub use crate::production::Production;
pub use crate::symbol::{NonTerminal, Symbol, Terminal};
