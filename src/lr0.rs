//! Construction of the canonical LR(0) item set collection.
//!
//! [`ClosureBuilder`] computes item set closures and single-symbol
//! transitions; [`AutomatonBuilder`] explores the whole automaton breadth
//! first from the closure of the augmented start item.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use log::{debug, trace};

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::item::{Item, ItemSet};
use crate::symbol::Symbol;

/// Transitions out of one state: the successor state per expected symbol.
pub type TransitionMap = BTreeMap<Symbol, Rc<ItemSet>>;

/// A builder for LR(0) item set closures and transitions.
pub struct ClosureBuilder<'a> {
    grammar: &'a Grammar,
    queue: VecDeque<Item>,
}

/// Builder of the LR(0) automaton.
pub struct AutomatonBuilder<'a> {
    closure: ClosureBuilder<'a>,
    sets_queue: VecDeque<Rc<ItemSet>>,
    cached_sets: BTreeSet<Rc<ItemSet>>,
}

/// The canonical collection: every discoverable state mapped to its
/// transition table. States are shared behind `Rc`, so a successor in a
/// transition table is the same allocation as the corresponding key.
#[derive(Clone, Debug)]
pub struct Automaton {
    start_state: Rc<ItemSet>,
    states: BTreeMap<Rc<ItemSet>, TransitionMap>,
}

impl<'a> ClosureBuilder<'a> {
    /// Creates a closure builder over the given grammar.
    pub fn new(grammar: &'a Grammar) -> Self {
        ClosureBuilder {
            grammar,
            queue: VecDeque::new(),
        }
    }

    /// Closes the given item set in place.
    ///
    /// Afterwards, for every item whose cursor sits before a non-terminal,
    /// the set also holds a cursor-at-start item for each production of that
    /// non-terminal. Each distinct item is enqueued at most once, so the
    /// fixpoint is linear in the number of reachable productions.
    pub fn closure(&mut self, items: &mut ItemSet) -> Result<(), GrammarError> {
        self.queue.clear();
        self.queue.extend(items.iter().cloned());

        while let Some(item) = self.queue.pop_front() {
            let Some(Symbol::NonTerminal(expected)) = item.expecting_symbol() else {
                continue;
            };
            for production in self.grammar.productions_of(expected)? {
                let new_item = Item::new(production.clone());
                if items.contains(&new_item) {
                    continue;
                }
                trace!("closure adds `{}`", new_item);
                items.insert(new_item.clone());
                self.queue.push_back(new_item);
            }
        }
        Ok(())
    }

    /// Advances every item in the set that expects the given symbol, then
    /// closes the result. Returns `None` when no item expects the symbol,
    /// meaning the state has no transition on it.
    pub fn advance(
        &mut self,
        items: &ItemSet,
        symbol: &Symbol,
    ) -> Result<Option<ItemSet>, GrammarError> {
        let mut new_items = ItemSet::new();
        for item in items.iter() {
            if item.expecting_symbol() == Some(symbol) {
                new_items.insert(item.advance()?);
            }
        }
        if new_items.is_empty() {
            return Ok(None);
        }
        self.closure(&mut new_items)?;
        Ok(Some(new_items))
    }

    /// Constructs all transitions out of the given state: for each symbol
    /// expected by some item, the closed set of advanced items reached on it.
    pub fn transitions(
        &mut self,
        items: &ItemSet,
    ) -> Result<BTreeMap<Symbol, ItemSet>, GrammarError> {
        let expected_symbols: BTreeSet<Symbol> = items
            .iter()
            .filter_map(|item| item.expecting_symbol().cloned())
            .collect();

        let mut result = BTreeMap::new();
        for symbol in expected_symbols {
            // `advance` cannot return `None` here: the symbol came from an
            // item of this very set.
            if let Some(new_items) = self.advance(items, &symbol)? {
                result.insert(symbol, new_items);
            }
        }
        Ok(result)
    }
}

impl<'a> AutomatonBuilder<'a> {
    /// Creates an automaton builder over the given grammar.
    pub fn new(grammar: &'a Grammar) -> Self {
        AutomatonBuilder {
            closure: ClosureBuilder::new(grammar),
            sets_queue: VecDeque::new(),
            cached_sets: BTreeSet::new(),
        }
    }

    /// Constructs the canonical collection of LR(0) item sets.
    ///
    /// Breadth-first from the initial state. Each distinct state is interned
    /// and enqueued exactly once, which bounds the traversal even when the
    /// automaton is cyclic, as it is for any left-recursive rule.
    pub fn build(mut self) -> Result<Automaton, GrammarError> {
        let start_state = self.initial_item_set()?;

        let mut states = BTreeMap::new();
        while let Some(item_set) = self.sets_queue.pop_front() {
            if states.contains_key(&item_set) {
                continue;
            }
            let transitions = self.closure.transitions(&item_set)?;
            let link: TransitionMap = transitions
                .into_iter()
                .map(|(symbol, new_items)| (symbol, self.intern(new_items)))
                .collect();
            states.insert(item_set, link);
        }

        debug!("canonical collection complete: {} states", states.len());
        Ok(Automaton {
            start_state,
            states,
        })
    }

    fn initial_item_set(&mut self) -> Result<Rc<ItemSet>, GrammarError> {
        let starting_production = self.closure.grammar.starting_production().clone();
        let mut initial: ItemSet = [Item::new(starting_production)].into_iter().collect();
        self.closure.closure(&mut initial)?;
        Ok(self.intern(initial))
    }

    /// Returns the shared handle for a state, enqueueing it for exploration
    /// the first time it is seen.
    fn intern(&mut self, items: ItemSet) -> Rc<ItemSet> {
        match self.cached_sets.get(&items) {
            Some(existing) => existing.clone(),
            None => {
                trace!("discovered state with {} items", items.len());
                let items = Rc::new(items);
                self.cached_sets.insert(items.clone());
                self.sets_queue.push_back(items.clone());
                items
            }
        }
    }
}

impl Automaton {
    /// Constructs the automaton for the given grammar.
    pub fn build(grammar: &Grammar) -> Result<Self, GrammarError> {
        AutomatonBuilder::new(grammar).build()
    }

    /// Returns the initial state: the closure of the augmented start item.
    pub fn start_state(&self) -> &Rc<ItemSet> {
        &self.start_state
    }

    /// Returns the number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Returns an iterator over all states.
    pub fn states(&self) -> impl Iterator<Item = &Rc<ItemSet>> {
        self.states.keys()
    }

    /// Returns the transition table of the given state, or `None` when the
    /// state is not part of this automaton.
    pub fn transitions(&self, state: &ItemSet) -> Option<&TransitionMap> {
        self.states.get(state)
    }

    /// Returns an iterator over all states paired with their transitions.
    pub fn iter(&self) -> impl Iterator<Item = (&Rc<ItemSet>, &TransitionMap)> {
        self.states.iter()
    }
}
