//! This is the core module. It exports everything that is not
//! specific to one poker variant.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Code related to cards in hands.
mod hand;
/// Export `Hand`
pub use self::hand::Hand;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the trait and the result.
pub use self::flat_deck::{FlatDeck, Flattenable};

/// 5 to 7 card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Rank, Rankable};

/// Errors for card and range parsing.
mod error;
/// Export the error type.
pub use self::error::IcmPokerError;
