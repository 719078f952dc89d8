//! Simulation based ICM for large fields.
//!
//! Instead of expanding every elimination order, repeatedly play the
//! tournament out as a series of all-in coin flips between random
//! pairs of players and record who finishes where. Averaged over many
//! trials the payouts converge on ICM equity.
//!
//! Compared to the recursive engine in the parent module:
//!
//! - The results are not repeatable, they carry monte carlo noise.
//! - Small fields are faster and exact through the recursion.
//! - But cost per trial is linear in the player count, so hundreds of
//!   players are no problem, and independent trials parallelize
//!   across threads with no coordination.

use rand::Rng;

/// Play a single tournament to completion and return what each
/// player won.
///
/// Players with a zero stack are treated as already eliminated and
/// take the bottom finishing places before any flips happen.
pub fn simulate_tournament(stacks: &[f64], payouts: &[f64]) -> Vec<f64> {
    let mut remaining: Vec<f64> = stacks.to_vec();
    let mut winnings = vec![0.0; stacks.len()];
    // Which place the next player to bust will get.
    let mut next_place = stacks.len().saturating_sub(1);
    let mut rng = rand::rng();

    // Everyone with chips is still playing.
    let mut live: Vec<usize> = (0..stacks.len()).filter(|i| stacks[*i] > 0.0).collect();

    // Already busted players take the bottom places up front.
    for idx in 0..stacks.len() {
        if stacks[idx] <= 0.0 {
            winnings[idx] += payouts.get(next_place).copied().unwrap_or(0.0);
            next_place = next_place.saturating_sub(1);
        }
    }

    while live.len() > 1 {
        // Pick two distinct players at random rather than in order,
        // so that seating never decides anything.
        let a = rng.random_range(0..live.len());
        let mut b = rng.random_range(0..live.len() - 1);
        if b >= a {
            b += 1;
        }
        let (hero, villain) = (live[a], live[b]);

        // Assume equal skill for every player.
        let hero_won = rng.random_bool(0.5);

        // Can't bet chips that can't be called.
        let effective_stack = remaining[hero].min(remaining[villain]);
        if hero_won {
            remaining[hero] += effective_stack;
            remaining[villain] -= effective_stack;
        } else {
            remaining[hero] -= effective_stack;
            remaining[villain] += effective_stack;
        }

        // At most one of the two can have busted, the winner gained.
        let busted = if remaining[hero] <= 0.0 {
            Some(hero)
        } else if remaining[villain] <= 0.0 {
            Some(villain)
        } else {
            None
        };
        if let Some(idx) = busted {
            winnings[idx] += payouts.get(next_place).copied().unwrap_or(0.0);
            next_place = next_place.saturating_sub(1);
            live.retain(|p| *p != idx);
        }
    }

    // Whoever is left standing takes first place.
    if let Some(&winner) = live.first() {
        winnings[winner] += payouts.first().copied().unwrap_or(0.0);
    }
    winnings
}

/// Estimate ICM equity by averaging many simulated tournaments.
pub fn simulate_tournament_equity(
    stacks: &[f64],
    payouts: &[f64],
    iterations: usize,
) -> Vec<f64> {
    tracing::debug!(
        players = stacks.len(),
        iterations,
        "simulating tournament equity"
    );
    let mut totals = vec![0.0; stacks.len()];
    for _ in 0..iterations {
        for (total, won) in totals.iter_mut().zip(simulate_tournament(stacks, payouts)) {
            *total += won;
        }
    }
    for total in totals.iter_mut() {
        *total /= iterations as f64;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test_log::test]
    fn test_huge_lead_wins() {
        let stacks = [1000.0, 2.0, 1.0];
        let payments = [100.0, 30.0, 10.0];

        let shares = simulate_tournament_equity(&stacks, &payments, 1000);

        assert!(
            shares[0] > shares[1],
            "The player with most of the chips should out-earn the rest."
        );
    }

    #[test]
    fn test_about_same() {
        let stacks = [1000.0, 1000.0, 999.0];
        let payments = [100.0, 30.0, 10.0];

        let shares = simulate_tournament_equity(&stacks, &payments, 1000);

        let sum: f64 = shares.iter().sum();
        let avg = sum / (shares.len() as f64);

        for &share in shares.iter() {
            assert!(share < 1.1 * avg);
            assert!(1.1 * share > avg);
        }
    }

    #[test]
    fn test_single_trial_conserves_payouts() {
        let stacks = [500.0, 400.0, 300.0, 200.0, 100.0];
        let payments = [100.0, 60.0, 40.0];

        for _ in 0..100 {
            let winnings = simulate_tournament(&stacks, &payments);
            assert_relative_eq!(
                200.0,
                winnings.iter().sum::<f64>(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_zero_stack_busts_first() {
        let stacks = [1000.0, 0.0, 500.0];
        let payments = [100.0, 60.0, 40.0];

        let winnings = simulate_tournament(&stacks, &payments);
        // The busted player always takes last place money.
        assert_eq!(40.0, winnings[1]);
    }

    #[test]
    fn test_tracks_recursive_engine() {
        // On a small field the simulation should land near the
        // exact recursive answer.
        let stacks = [3000.0, 1000.0];
        let payouts = [600.0, 400.0];

        let shares = simulate_tournament_equity(&stacks, &payouts, 40_000);
        // Exact answer is 550. Leave generous room for noise.
        assert!((shares[0] - 550.0).abs() < 15.0);
    }
}
