#![allow(dead_code)]

use lr0::{Grammar, Item, NonTerminal, Production, Symbol, Terminal};

/// Symbols of the left-recursive arithmetic grammar over binary digits:
///
/// - `E ::= E "*" B`
/// - `E ::= E "+" B`
/// - `E ::= B`
/// - `B ::= "0"`
/// - `B ::= "1"`
pub struct ArithSymbols {
    pub e: NonTerminal,
    pub b: NonTerminal,
    pub times: Terminal,
    pub plus: Terminal,
    pub zero: Terminal,
    pub one: Terminal,
}

pub fn arith_symbols() -> ArithSymbols {
    ArithSymbols {
        e: NonTerminal::new("E"),
        b: NonTerminal::new("B"),
        times: Terminal::literal("*"),
        plus: Terminal::literal("+"),
        zero: Terminal::literal("0"),
        one: Terminal::literal("1"),
    }
}

pub fn arith_productions() -> Vec<Production> {
    let syms = arith_symbols();
    vec![
        Production::new(
            syms.e.clone(),
            [
                Symbol::from(syms.e.clone()),
                syms.times.clone().into(),
                syms.b.clone().into(),
            ],
        ),
        Production::new(
            syms.e.clone(),
            [
                Symbol::from(syms.e.clone()),
                syms.plus.clone().into(),
                syms.b.clone().into(),
            ],
        ),
        Production::new(syms.e.clone(), [Symbol::from(syms.b.clone())]),
        Production::new(syms.b.clone(), [Symbol::from(syms.zero.clone())]),
        Production::new(syms.b.clone(), [Symbol::from(syms.one.clone())]),
    ]
}

pub fn arith_grammar() -> Grammar {
    Grammar::new(arith_productions(), arith_symbols().e)
}

/// Builds an item with the cursor at the given position.
pub fn item_at(production: &Production, dot: usize) -> Item {
    let mut item = Item::new(production.clone());
    for _ in 0..dot {
        item = item.advance().expect("dot within production body");
    }
    item
}
