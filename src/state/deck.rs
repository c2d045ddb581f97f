//! Estimation decks offered when creating a team

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Deck of estimation cards a team votes with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Deck {
    #[default]
    Standard,
    Fibonacci,
}

const STANDARD_VALUES: &[f64] = &[0.0, 0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 20.0, 40.0, 100.0];
const FIBONACCI_VALUES: &[f64] = &[0.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0];

static ESTIMATION_DECKS: Lazy<BTreeMap<Deck, String>> = Lazy::new(|| {
    Deck::ALL
        .iter()
        .map(|deck| (*deck, deck.label()))
        .collect()
});

impl Deck {
    /// Every deck, in declaration order
    pub const ALL: [Deck; 2] = [Deck::Standard, Deck::Fibonacci];

    /// Numeric card values of the deck, lowest first
    pub fn values(&self) -> &'static [f64] {
        match self {
            Self::Standard => STANDARD_VALUES,
            Self::Fibonacci => FIBONACCI_VALUES,
        }
    }

    /// Comma separated card values, e.g. "0, 0.5, 1, 2"
    pub fn label(&self) -> String {
        self.values()
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Standard => Self::Fibonacci,
            Self::Fibonacci => Self::Standard,
        }
    }

    pub fn prev(&self) -> Self {
        // Two decks, so stepping back is the same as stepping forward
        self.next()
    }

    /// Name the service expects in the `deck` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Fibonacci => "Fibonacci",
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Label of every deck, built once per process
pub fn estimation_decks() -> &'static BTreeMap<Deck, String> {
    &ESTIMATION_DECKS
}
