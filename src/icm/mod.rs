//! This module implements the Independent Chip Model: converting
//! tournament chip stacks and a payout schedule into each player's
//! expected winnings, by expanding the probability of every possible
//! elimination order.
//!
//! The expansion is recursive. Each level picks the next player to
//! bust, weights the reduced sub-tournament by that player's
//! elimination probability, and recurses until everyone left is
//! guaranteed a payout. Recursion depth is bounded by the player
//! count, but the branching is factorial, so this is the right tool
//! for final tables and sit-n-gos rather than 200 player fields. For
//! large fields use [`simulate_tournament_equity`] from the
//! [`simulation`] submodule, which trades exact answers for linear
//! cost per trial.
//!
//! Everything here is pure: fresh vectors per call, no shared state,
//! safe to call from any number of threads and to cache by input.

use thiserror::Error;

/// Push/fold EV and the static pushing range tables.
mod push_fold;
pub use self::push_fold::{DEFAULT_CALL_EQUITY, PushFoldEv, push_fold_ev, pushing_range};

/// Simulation based ICM for fields too big to recurse over.
pub mod simulation;
pub use self::simulation::simulate_tournament_equity;

/// Errors for the ICM engine. Every calculation validates its
/// inputs up front and fails fast; retrying is meaningless since
/// the computation is deterministic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcmError {
    #[error("There must be at least one chip stack")]
    EmptyStacks,
    #[error("There must be at least one payout")]
    EmptyPayouts,
    #[error("Player index {index} is out of range for {players} players")]
    PlayerIndexOutOfRange { index: usize, players: usize },
    #[error("At least one player must have chips")]
    NoChipsInPlay,
}

/// The tournament value of one player's stack.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    /// Expected winnings under the Independent Chip Model.
    pub equity: f64,
    /// The chip-proportional share of the prize pool, ignoring
    /// ICM effects entirely.
    pub chip_ev: f64,
    /// Alias of `equity`, the dollar valued expectation.
    pub dollar_ev: f64,
    /// `chip_ev - dollar_ev`. Positive when ICM discounts the
    /// stack below its chip-proportional value, which is the
    /// usual state of a big stack near the money.
    pub risk_premium: f64,
}

fn validate(stacks: &[f64], payouts: &[f64], player_index: usize) -> Result<(), IcmError> {
    if stacks.is_empty() {
        return Err(IcmError::EmptyStacks);
    }
    if payouts.is_empty() {
        return Err(IcmError::EmptyPayouts);
    }
    if player_index >= stacks.len() {
        return Err(IcmError::PlayerIndexOutOfRange {
            index: player_index,
            players: stacks.len(),
        });
    }
    if stacks.iter().sum::<f64>() <= 0.0 {
        return Err(IcmError::NoChipsInPlay);
    }
    Ok(())
}

/// Compute the full equity picture for one player.
///
/// # Examples
///
/// ```
/// use icm_poker::icm::calculate_icm;
///
/// let result = calculate_icm(&[3000.0, 1000.0], &[600.0, 400.0], 0).unwrap();
/// assert_eq!(550.0, result.equity);
/// assert_eq!(750.0, result.chip_ev);
/// assert_eq!(200.0, result.risk_premium);
/// ```
pub fn calculate_icm(
    stacks: &[f64],
    payouts: &[f64],
    player_index: usize,
) -> Result<EquityResult, IcmError> {
    validate(stacks, payouts, player_index)?;
    tracing::trace!(
        players = stacks.len(),
        payouts = payouts.len(),
        player_index,
        "computing icm equity"
    );

    let total_chips: f64 = stacks.iter().sum();
    let prize_pool: f64 = payouts.iter().sum();

    let equity = equity_recursive(stacks, payouts, player_index);
    let chip_ev = (stacks[player_index] / total_chips) * prize_pool;

    Ok(EquityResult {
        equity,
        chip_ev,
        dollar_ev: equity,
        risk_premium: chip_ev - equity,
    })
}

/// The ICM expected winnings for one player.
///
/// This is the recursive core. Branching is factorial in the number
/// of players outside the money, an accepted cost for the field
/// sizes this targets.
pub fn player_equity(
    stacks: &[f64],
    payouts: &[f64],
    player_index: usize,
) -> Result<f64, IcmError> {
    validate(stacks, payouts, player_index)?;
    Ok(equity_recursive(stacks, payouts, player_index))
}

/// How much ICM pressure is this player under?
///
/// The ratio of ICM equity to chip-proportional equity. Values
/// above 1 mean the stack is worth more than its chip share and
/// marginal chip-EV-positive gambles are losers in dollars, the
/// short stack's usual spot near the bubble. Values below 1 mean
/// the player can take those gambles freely, typically the chip
/// leader.
pub fn bubble_factor(
    stacks: &[f64],
    payouts: &[f64],
    player_index: usize,
) -> Result<f64, IcmError> {
    validate(stacks, payouts, player_index)?;

    let total_chips: f64 = stacks.iter().sum();
    let prize_pool: f64 = payouts.iter().sum();
    let chip_ev = (stacks[player_index] / total_chips) * prize_pool;
    let icm_equity = equity_recursive(stacks, payouts, player_index);

    Ok(if chip_ev > 0.0 {
        icm_equity / chip_ev
    } else {
        1.0
    })
}

/// The probability that each player is the next one eliminated.
///
/// For each player the harmonic mean of the *other* players'
/// stacks is weighed against their own: a big own stack pushes the
/// probability down, and a very short stack anywhere among the
/// others soaks up elimination weight. This is a heuristic, not a
/// derived distribution, and it is the one knob the whole engine
/// turns on.
///
/// Zero stacks are treated as already eliminated: if any are
/// present the entire probability mass is split evenly among them
/// and every live player gets zero. That keeps the vector
/// normalized and keeps the recursion free of division by zero,
/// since busted players are removed before any reciprocal sum is
/// taken over them.
pub fn elimination_probabilities(stacks: &[f64]) -> Vec<f64> {
    let n = stacks.len();
    if n <= 1 {
        return vec![1.0; n];
    }

    let busted = stacks.iter().filter(|s| **s <= 0.0).count();
    if busted > 0 {
        let share = 1.0 / busted as f64;
        return stacks
            .iter()
            .map(|s| if *s <= 0.0 { share } else { 0.0 })
            .collect();
    }

    let mut raw: Vec<f64> = Vec::with_capacity(n);
    for (i, stack) in stacks.iter().enumerate() {
        let reciprocal_sum: f64 = stacks
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, s)| 1.0 / s)
            .sum();
        let harmonic_mean = (n as f64 - 1.0) / reciprocal_sum;
        raw.push(harmonic_mean / (harmonic_mean + stack));
    }

    // Normalize so the probabilities sum to exactly one.
    let total: f64 = raw.iter().sum();
    raw.iter().map(|p| p / total).collect()
}

/// Drop player `removed` from the stacks and remap the tracked
/// player's index into the reduced vector.
fn remove_player(stacks: &[f64], removed: usize, tracked: usize) -> (Vec<f64>, usize) {
    let reduced: Vec<f64> = stacks
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != removed)
        .map(|(_, s)| *s)
        .collect();
    let new_tracked = if tracked > removed {
        tracked - 1
    } else {
        tracked
    };
    (reduced, new_tracked)
}

fn equity_recursive(stacks: &[f64], payouts: &[f64], player_index: usize) -> f64 {
    let n = stacks.len();
    if n == 1 {
        return payouts.first().copied().unwrap_or(0.0);
    }
    if n <= payouts.len() {
        // Everyone left is guaranteed some payout, which changes
        // what an elimination is worth.
        return in_money_equity(stacks, payouts, player_index);
    }

    // Some finishing positions pay nothing. Expand over who busts
    // next; the branch where the tracked player busts is worth
    // nothing and is skipped.
    let elimination = elimination_probabilities(stacks);
    let mut total = 0.0;
    for (i, probability) in elimination.iter().enumerate() {
        if i == player_index || *probability == 0.0 {
            continue;
        }
        let (reduced, new_index) = remove_player(stacks, i, player_index);
        let new_payouts = &payouts[..payouts.len().min(reduced.len())];
        if !new_payouts.is_empty() {
            total += probability * equity_recursive(&reduced, new_payouts, new_index);
        }
    }
    total
}

/// The in-the-money unwind: every remaining player is paid, so the
/// tracked player busting next locks in the lowest remaining slot
/// instead of nothing.
fn in_money_equity(stacks: &[f64], payouts: &[f64], player_index: usize) -> f64 {
    let n = stacks.len();
    if n == 1 {
        return payouts[0];
    }
    if n == 2 {
        // Exact two player form: win probability is the chip share.
        let total = stacks[0] + stacks[1];
        let win_probability = if total > 0.0 {
            stacks[player_index] / total
        } else {
            0.5
        };
        let second = payouts.get(1).copied().unwrap_or(0.0);
        return win_probability * payouts[0] + (1.0 - win_probability) * second;
    }

    let elimination = elimination_probabilities(stacks);
    let mut total = 0.0;
    for (i, probability) in elimination.iter().enumerate() {
        if *probability == 0.0 {
            continue;
        }
        if i == player_index {
            // Busting first among n paid players pays the n-th slot.
            total += probability * payouts[n - 1];
        } else {
            let (reduced, new_index) = remove_player(stacks, i, player_index);
            total += probability * in_money_equity(&reduced, &payouts[..n - 1], new_index);
        }
    }
    total
}
