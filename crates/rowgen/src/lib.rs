//! Random row payloads.
//!
//! Produces the synthetic person-shaped rows written by the load generator:
//! a title-cased "Adjective Name" pair, a few plausible numeric attributes
//! and a fixed multi-paragraph description that provides the bulk of each
//! row's on-disk footprint.

use rand::Rng;

mod words;

pub use words::{ADJECTIVES, DESCRIPTION, NAMES};

/// One generated row payload. Created per insert attempt and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub age: i32,
    pub description: &'static str,
}

/// Generate a random two-word display name, e.g. "Convivial Edgar".
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let name = NAMES[rng.gen_range(0..NAMES.len())];
    format!("{} {}", title_case(adjective), name)
}

/// Generate a complete random row payload.
pub fn random_row<R: Rng>(rng: &mut R) -> Row {
    Row {
        name: random_name(rng),
        height: rng.gen_range(120..201),
        weight: rng.gen_range(30..231),
        age: rng.gen_range(10..111),
        description: DESCRIPTION,
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
