//! LR(0) items and item sets.

use std::collections::{btree_set, BTreeSet};
use std::fmt;

use crate::error::GrammarError;
use crate::production::Production;
use crate::symbol::Symbol;

/// A dotted production: a production paired with a cursor recording how much
/// of its body has been matched.
///
/// Items compare and hash structurally over `(production, dot)`, so items
/// recreated independently from equal parts are the same item.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Item {
    production: Production,
    dot: usize,
}

/// An unordered, deduplicated set of items: one state of the LR(0) automaton.
///
/// The sorted set representation makes equality, ordering and hashing
/// independent of the order items were discovered in, so two independently
/// computed sets with the same membership are recognized as the same state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ItemSet {
    items: BTreeSet<Item>,
}

impl Item {
    /// Creates an item with the cursor at the start of the production body.
    pub fn new(production: Production) -> Self {
        Item { production, dot: 0 }
    }

    /// Returns the item's production.
    pub fn production(&self) -> &Production {
        &self.production
    }

    /// Returns the cursor position within the production body.
    pub fn dot(&self) -> usize {
        self.dot
    }

    /// Returns the symbol right after the cursor, or `None` when the item is
    /// complete.
    pub fn expecting_symbol(&self) -> Option<&Symbol> {
        self.production.rhs().get(self.dot)
    }

    /// Determines whether the cursor is at the end of the production body.
    pub fn is_complete(&self) -> bool {
        self.dot == self.production.rhs().len()
    }

    /// Returns a new item with the cursor moved past one symbol.
    ///
    /// Fails with [`GrammarError::InvalidAdvance`] when the item is already
    /// complete.
    pub fn advance(&self) -> Result<Item, GrammarError> {
        if self.is_complete() {
            return Err(GrammarError::InvalidAdvance {
                production: self.production.clone(),
            });
        }
        Ok(Item {
            production: self.production.clone(),
            dot: self.dot + 1,
        })
    }
}

impl ItemSet {
    /// Creates an empty item set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks whether the set contains the given item.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Adds an item to the set. Returns whether the item was newly inserted.
    pub fn insert(&mut self, item: Item) -> bool {
        self.items.insert(item)
    }

    /// Returns an iterator over the items, in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, Item> {
        self.items.iter()
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        ItemSet {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Item> for ItemSet {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = btree_set::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ItemSet {
    type Item = Item;
    type IntoIter = btree_set::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::=", self.production.lhs())?;
        let (before_dot, after_dot) = self.production.rhs().split_at(self.dot);
        for symbol in before_dot {
            write!(f, " {}", symbol)?;
        }
        write!(f, " ·")?;
        for symbol in after_dot {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}
