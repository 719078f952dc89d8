use crate::core::{Card, Hand, Suit, Value};

/// Should a starting hand keep only same-suit combos,
/// only different-suit combos, or all of them?
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub enum Suitedness {
    /// Only show hands with the same suit.
    Suited,
    /// Only show hands with different suits.
    OffSuit,
    /// Show everything.
    Any,
}

/// `StartingHand` represents the two card starting hand of texas holdem.
/// It can generate all the possible actual starting hands.
///
/// Give two values and if you only want suited variants.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub struct StartingHand {
    /// The first value.
    pub value_one: Value,
    /// The second value.
    pub value_two: Value,
    /// Should we only consider possible starting hands of the same suit?
    pub suited: Suitedness,
}

impl StartingHand {
    /// Create a new starting hand.
    pub fn new(value_one: Value, value_two: Value, suited: Suitedness) -> Self {
        Self {
            value_one,
            value_two,
            suited,
        }
    }

    /// Is this a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.value_one == self.value_two
    }

    fn create_suited(&self) -> Vec<Hand> {
        // Can't have a suited pair. Not unless you're cheating.
        if self.is_pair() {
            return vec![];
        }
        Suit::suits()
            .iter()
            .map(|s| {
                Hand::new_with_cards(vec![
                    Card::new(self.value_one, *s),
                    Card::new(self.value_two, *s),
                ])
            })
            .collect()
    }

    fn create_offsuit(&self) -> Vec<Hand> {
        // Since the values are the same there is no reason to swap the suits.
        let expected_hands = if self.is_pair() { 6 } else { 12 };
        self.append_offsuit(Vec::with_capacity(expected_hands))
    }

    fn append_offsuit(&self, mut hands: Vec<Hand>) -> Vec<Hand> {
        let suits = Suit::suits();
        for (i, suit_one) in suits.iter().enumerate() {
            for suit_two in &suits[i + 1..] {
                // Push the hands in.
                hands.push(Hand::new_with_cards(vec![
                    Card::new(self.value_one, *suit_one),
                    Card::new(self.value_two, *suit_two),
                ]));

                // If this isn't a pair then the flipped suits is needed.
                if !self.is_pair() {
                    hands.push(Hand::new_with_cards(vec![
                        Card::new(self.value_one, *suit_two),
                        Card::new(self.value_two, *suit_one),
                    ]));
                }
            }
        }
        hands
    }

    /// Get all the possible starting hands represented by the
    /// two values of this starting hand.
    pub fn possible_hands(&self) -> Vec<Hand> {
        match self.suited {
            Suitedness::Suited => self.create_suited(),
            Suitedness::OffSuit => self.create_offsuit(),
            Suitedness::Any => self.append_offsuit(self.create_suited()),
        }
    }

    /// Create every possible unique StartingHand.
    pub fn all() -> Vec<StartingHand> {
        let mut hands = Vec::with_capacity(91);
        let values = Value::values();
        for (i, value_one) in values.iter().enumerate() {
            for value_two in &values[i..] {
                hands.push(StartingHand {
                    value_one: *value_one,
                    value_two: *value_two,
                    suited: Suitedness::Any,
                });
            }
        }
        hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aces() {
        let sh = StartingHand::new(Value::Ace, Value::Ace, Suitedness::OffSuit);
        assert_eq!(6, sh.possible_hands().len());
    }

    #[test]
    fn test_suited_pair_is_empty() {
        let sh = StartingHand::new(Value::Ace, Value::Ace, Suitedness::Suited);
        assert!(sh.possible_hands().is_empty());
    }

    #[test]
    fn test_suited_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, Suitedness::Suited);
        assert_eq!(4, sh.possible_hands().len());
    }

    #[test]
    fn test_unsuited_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, Suitedness::OffSuit);
        assert_eq!(12, sh.possible_hands().len());
    }

    #[test]
    fn test_any_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, Suitedness::Any);
        assert_eq!(16, sh.possible_hands().len());
    }

    #[test]
    fn test_starting_hand_count() {
        let num_to_test: usize = StartingHand::all()
            .iter()
            .map(|h| h.possible_hands().len())
            .sum();
        assert_eq!(1326, num_to_test);
    }
}
