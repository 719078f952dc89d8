use std::ops::Index;
use std::slice::Iter;

use super::{Card, IcmPokerError, Suit, Value};

/// Struct to hold cards.
///
/// This doesn't have the ability to easily check if a card is
/// in the hand. So do that before adding a card. `new_from_str`
/// does check for duplicates while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    /// Where all the cards are placed
    cards: Vec<Card>,
}

impl Hand {
    /// Create the hand with specific hand.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// From a str create a new hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use icm_poker::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AdKh").unwrap();
    /// assert_eq!(2, hand.len());
    /// ```
    ///
    /// Anything that can't be parsed will return an error.
    ///
    /// ```
    /// use icm_poker::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AdKx");
    /// assert!(hand.is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, IcmPokerError> {
        // Get the chars iterator.
        let mut chars = hand_string.chars();
        // Where we will put the cards
        //
        // We make the assumption that the hands will have 2 plus five cards.
        let mut cards: Vec<Card> = Vec::with_capacity(7);

        // Keep looping until we explicitly break
        loop {
            // Now try and get a char.
            let vco = chars.next();
            // If there was no char then we are done.
            if vco.is_none() {
                break;
            } else {
                // If we got a value char then we should get a
                // suit.
                let sco = chars.next();
                // Now try and parse the two chars that we have.
                let v = vco
                    .and_then(Value::from_char)
                    .ok_or(IcmPokerError::UnexpectedValueChar)?;
                let s = sco
                    .and_then(Suit::from_char)
                    .ok_or(IcmPokerError::UnexpectedSuitChar)?;

                let c = Card { value: v, suit: s };
                if cards.contains(&c) {
                    return Err(IcmPokerError::DuplicateCardInHand(c));
                }
                cards.push(c);
            }
        }

        if chars.next().is_some() {
            return Err(IcmPokerError::UnparsedCharsRemaining);
        }

        Ok(Self { cards })
    }

    /// Add card at to the hand.
    /// No verification is done at all.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Truncate the hand to the given number of cards.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len)
    }

    /// How many cards are in this hand so far?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Are there any cards at all?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is the given card in this hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Create an iter on the cards.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// Borrow the cards as a slice.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_card() {
        let mut h = Hand::default();
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        h.push(c);
        // Make sure that the card was added to the vec.
        assert_eq!(1, h.len());
        assert!(h.contains(&c));
    }

    #[test]
    fn test_parse_error() {
        assert!(Hand::new_from_str("BAD").is_err());
        assert!(Hand::new_from_str("Adx").is_err());
    }

    #[test]
    fn test_parse_one_card() {
        let h = Hand::new_from_str("Ad").unwrap();
        assert_eq!(1, h.len());
    }

    #[test]
    fn test_parse_duplicate() {
        assert_eq!(
            Err(IcmPokerError::DuplicateCardInHand(Card::new(
                Value::Ace,
                Suit::Diamond
            ))),
            Hand::new_from_str("AdAd")
        );
    }

    #[test]
    fn test_parse_seven_cards() {
        let h = Hand::new_from_str("AdKd2s4h7c9cTd").unwrap();
        assert_eq!(7, h.len());
    }

    #[test]
    fn test_extend_and_truncate() {
        let mut h = Hand::new_from_str("AdKd").unwrap();
        h.extend(vec![
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Spade),
        ]);
        assert_eq!(4, h.len());
        h.truncate(2);
        assert_eq!(2, h.len());
    }
}
