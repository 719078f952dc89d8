use crate::core::{Deck, FlatDeck, Hand, IcmPokerError, Rank, Rankable};

/// A repeated-trial equity estimator.
///
/// Each simulation fills every hand out to seven cards with the
/// same random community cards and ranks them. Over many
/// iterations the win shares converge on each hand's equity.
#[derive(Debug)]
pub struct MonteCarloGame {
    /// Flattened deck of the cards nobody holds yet.
    deck: FlatDeck,
    /// Hands still playing.
    hands: Vec<Hand>,
    // The original size of each of the hands.
    // This is used to reset each hand after a round.
    hand_sizes: Vec<usize>,
    // The number of community cards that will be dealt to each player.
    num_community_cards: usize,
    // The number of needed cards each round.
    cards_needed: usize,
    current_offset: usize,
}

impl MonteCarloGame {
    /// If we already have hands then lets start there.
    pub fn new(hands: Vec<Hand>) -> Result<Self, IcmPokerError> {
        let mut deck = Deck::default();
        let mut max_hand_size: usize = 0;
        let mut cards_needed = 0;
        let mut hand_sizes: Vec<usize> = Vec::with_capacity(hands.len());

        for hand in &hands {
            let hand_size = hand.len();
            if hand_size > 7 {
                return Err(IcmPokerError::HoldemHandSize);
            }

            // The largest hand size sets how many community cards to add
            max_hand_size = max_hand_size.max(hand_size);
            // But we have to keep track of each hand size to allow resetting
            hand_sizes.push(hand_size);
            // Compute the number of cards needed per round.
            cards_needed += 7 - hand_size;

            for card in hand.iter() {
                if !deck.remove(card) {
                    return Err(IcmPokerError::DuplicateCardInHand(*card));
                }
            }
        }

        let num_community_cards = 7 - max_hand_size;

        let flat_deck: FlatDeck = deck.into();
        // Grab the deck.len() so that any call to shuffle_if_needed
        // will result in a shuffling.
        let offset = flat_deck.len();

        Ok(Self {
            deck: flat_deck,
            hands,
            hand_sizes,
            num_community_cards,
            cards_needed,
            current_offset: offset,
        })
    }

    /// Simulate finishing a holdem game.
    ///
    /// This will fill out the board and then return the indexes
    /// of the winning hands and the rank that won the round.
    pub fn simulate(&mut self) -> (Vec<usize>, Rank) {
        self.shuffle_if_needed();

        let community_start_idx = self.current_offset;
        let community_end_idx = self.current_offset + self.num_community_cards;
        self.current_offset += self.num_community_cards;

        for h in self.hands.iter_mut() {
            h.extend(self.deck[community_start_idx..community_end_idx].iter().copied());
            let hole_needed = 7 - h.len();
            let range = &self.deck[self.current_offset..self.current_offset + hole_needed];
            h.extend(range.iter().copied());
            self.current_offset += hole_needed;
        }

        // Now get the best rank of all the possible hands.
        let mut winners: Vec<usize> = Vec::with_capacity(1);
        let mut best = Rank::HighCard(0);
        for (idx, rank) in self.hands.iter().map(|h| h.rank()).enumerate() {
            match rank.cmp(&best) {
                std::cmp::Ordering::Equal => {
                    // If this is a tie then add the index.
                    winners.push(idx);
                }
                std::cmp::Ordering::Greater => {
                    // A new best hand resets the winner list.
                    winners.clear();
                    winners.push(idx);
                    best = rank;
                }
                // Otherwise keep what we've already found.
                _ => {}
            }
        }
        (winners, best)
    }

    /// Reset the game state.
    pub fn reset(&mut self) {
        for (h, hand_size) in self.hands.iter_mut().zip(self.hand_sizes.iter()) {
            h.truncate(*hand_size);
        }
    }

    fn shuffle_if_needed(&mut self) {
        if self.current_offset + self.cards_needed >= self.deck.len() {
            self.current_offset = 0;
            let mut rng = rand::rng();
            self.deck.shuffle(&mut rng);
        }
    }

    /// Run the given number of simulations and report each hand's
    /// share of the wins. Ties split the pot between the tied hands.
    pub fn estimate_equity(&mut self, iterations: usize) -> Vec<f64> {
        tracing::debug!(iterations, hands = self.hands.len(), "estimating equity");
        let mut values = vec![0.0; self.hands.len()];
        for _ in 0..iterations {
            let (winners, _) = self.simulate();

            // Reset the hands
            self.reset();
            // each player gets the pot divided by the number of people with exactly the
            // same hand value. This is to make sure that ties are correctly valued.
            let value = 1.0 / winners.len() as f64;

            for idx in winners {
                values[idx] += value;
            }
        }

        // Normalize later on in the hopes of not making
        // each value actually zero
        for v in values.iter_mut() {
            *v /= iterations as f64;
        }
        values
    }
}
