//! A library for tournament poker math.
//!
//! The centerpiece is the [`icm`] module: an Independent Chip Model
//! engine that converts chip stacks and a payout schedule into each
//! player's expected tournament winnings, along with the derived
//! numbers players actually act on (risk premium, bubble factor,
//! push/fold EV). The [`core`] and [`holdem`] modules carry the
//! supporting cast: cards, 5 to 7 card hand ranking, starting hand
//! ranges, and monte carlo equity estimation.
//!
//! Everything here is pure computation. There is no I/O and no shared
//! state, so an HTTP layer can call any of these functions from as
//! many threads as it likes and cache results by input.

/// Core poker functionality that is agnostic to any
/// particular game: cards, hands, decks, and hand ranking.
pub mod core;

/// Holdem specific code: starting hands, range string
/// expansion, and monte carlo equity estimation.
pub mod holdem;

/// The Independent Chip Model engine: recursive tournament
/// equity, bubble factors, push/fold EV, and a simulation
/// fallback for large fields.
pub mod icm;
