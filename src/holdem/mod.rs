/// Module that can generate possible cards for a starting hand.
mod starting_hand;
/// Export `StartingHand`
pub use self::starting_hand::{StartingHand, Suitedness};

/// Module with all the starting hand range parsing code.
mod parse;
/// Export `RangeParser`
pub use self::parse::RangeParser;

/// Monte carlo game simulation for equity estimation.
mod monte_carlo_game;
/// Export `MonteCarloGame`
pub use self::monte_carlo_game::MonteCarloGame;
