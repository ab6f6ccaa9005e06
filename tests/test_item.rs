mod support;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lr0::{GrammarError, Item, NonTerminal, Production, Symbol, Terminal};
use test_case::test_case;

use support::{arith_productions, item_at};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_structural_equality_of_productions() {
    let left = Production::new(
        NonTerminal::new("E"),
        [
            Symbol::from(NonTerminal::new("E")),
            Terminal::literal("+").into(),
            NonTerminal::new("B").into(),
        ],
    );
    let right = Production::new(
        NonTerminal::new("E"),
        [
            Symbol::from(NonTerminal::new("E")),
            Terminal::literal("+").into(),
            NonTerminal::new("B").into(),
        ],
    );

    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));

    let other_head = Production::new(NonTerminal::new("B"), left.rhs());
    assert_ne!(left, other_head);
}

#[test]
fn test_structural_equality_of_items() {
    let productions = arith_productions();
    let independent = arith_productions();
    let left = item_at(&productions[0], 2);
    let right = item_at(&independent[0], 2);

    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
    assert_ne!(left, item_at(&productions[0], 1));
}

#[test_case(0 ; "at start")]
#[test_case(1 ; "after one symbol")]
#[test_case(2 ; "before last symbol")]
fn test_advance_increments_dot(dot: usize) {
    let productions = arith_productions();
    let item = item_at(&productions[0], dot);

    let advanced = item.advance().unwrap();
    assert_eq!(advanced.dot(), dot + 1);
    assert_eq!(advanced.production(), item.production());
}

#[test]
fn test_advance_past_end_fails() {
    let productions = arith_productions();
    let complete = item_at(&productions[3], 1);
    assert!(complete.is_complete());
    assert_eq!(complete.expecting_symbol(), None);

    let result = complete.advance();
    assert_eq!(
        result,
        Err(GrammarError::InvalidAdvance {
            production: productions[3].clone()
        })
    );
}

#[test]
fn test_expecting_symbol() {
    let productions = arith_productions();
    let item = Item::new(productions[0].clone());
    assert_eq!(
        item.expecting_symbol(),
        Some(&Symbol::from(NonTerminal::new("E")))
    );

    let item = item.advance().unwrap();
    assert_eq!(
        item.expecting_symbol(),
        Some(&Symbol::from(Terminal::literal("*")))
    );
}

#[test]
fn test_item_display_renders_cursor() {
    let productions = arith_productions();
    assert_eq!(
        item_at(&productions[0], 0).to_string(),
        "<E> ::= · <E> \"*\" <B>"
    );
    assert_eq!(
        item_at(&productions[0], 1).to_string(),
        "<E> ::= <E> · \"*\" <B>"
    );
    assert_eq!(
        item_at(&productions[0], 3).to_string(),
        "<E> ::= <E> \"*\" <B> ·"
    );
}

#[test]
fn test_symbol_display_escaping() {
    assert_eq!(Terminal::literal("+").to_string(), "\"+\"");
    assert_eq!(Terminal::literal("\"").to_string(), "\"\"\"\"");
    assert_eq!(Terminal::class("digit").to_string(), "?digit?");
    assert_eq!(Terminal::class("what?").to_string(), "?what???");
    assert_eq!(NonTerminal::new("expr").to_string(), "<expr>");
    assert_eq!(NonTerminal::new("a<b>c\\d").to_string(), "<a\\<b\\>c\\\\d>");
}

#[test]
fn test_terminal_kinds_distinguish_equality() {
    assert_ne!(
        Symbol::from(Terminal::literal("digit")),
        Symbol::from(Terminal::class("digit"))
    );
    assert_eq!(Terminal::class("digit"), Terminal::class("digit"));
}

#[test]
fn test_production_display() {
    let productions = arith_productions();
    assert_eq!(productions[1].to_string(), "<E> ::= <E> \"+\" <B>");
    assert_eq!(productions[4].to_string(), "<B> ::= \"1\"");
}
