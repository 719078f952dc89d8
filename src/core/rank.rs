use super::{Card, Hand, Value};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

impl Rank {
    /// The strength category of this rank, 1 (high card)
    /// through 9 (straight flush). Higher is strictly stronger.
    pub fn category(&self) -> u8 {
        match self {
            Rank::HighCard(_) => 1,
            Rank::OnePair(_) => 2,
            Rank::TwoPair(_) => 3,
            Rank::ThreeOfAKind(_) => 4,
            Rank::Straight(_) => 5,
            Rank::Flush(_) => 6,
            Rank::FullHouse(_) => 7,
            Rank::FourOfAKind(_) => 8,
            Rank::StraightFlush(_) => 9,
        }
    }

    /// A human readable description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            Rank::HighCard(_) => "High Card",
            Rank::OnePair(_) => "One Pair",
            Rank::TwoPair(_) => "Two Pair",
            Rank::ThreeOfAKind(_) => "Three of a Kind",
            Rank::Straight(_) => "Straight",
            Rank::Flush(_) => "Flush",
            Rank::FullHouse(_) => "Full House",
            Rank::FourOfAKind(_) => "Four of a Kind",
            Rank::StraightFlush(_) => "Straight Flush",
        }
    }
}

/// Bit pattern of the wheel (A2345), the one straight
/// where the ace plays low.
const WHEEL: u32 = 1 << (Value::Ace as u32)
    | 1 << (Value::Two as u32)
    | 1 << (Value::Three as u32)
    | 1 << (Value::Four as u32)
    | 1 << (Value::Five as u32);

/// Given a bitset of card values find the rank of the best
/// straight it contains, if any. 0 is the wheel, 9 is broadway.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Look for the highest run of five contiguous values first.
    for low in (0..=8u32).rev() {
        let mask = 0b1_1111 << low;
        if value_set & mask == mask {
            return Some(low + 1);
        }
    }
    if value_set & WHEEL == WHEEL {
        return Some(0);
    }
    None
}

/// Rank exactly five cards.
///
/// The strength payloads pack the deciding values in the high
/// bits and the kickers below them, so deriving `Ord` on `Rank`
/// compares hands correctly.
fn rank_five(cards: &[Card]) -> Rank {
    // Use bitsets for the cheap questions.
    let mut suit_set: u32 = 0;
    let mut value_set: u32 = 0;
    // And a count per value for the pair questions.
    let mut value_counts = [0u8; 13];
    for c in cards {
        suit_set |= 1 << (c.suit as u32);
        value_set |= 1 << (c.value as u32);
        value_counts[c.value as usize] += 1;
    }

    // The major deciding factor for hand rank
    // is the number of unique card values.
    let unique_card_count = value_set.count_ones();

    /// Highest value that appears exactly `count` times.
    fn value_with_count(value_counts: &[u8; 13], count: u8) -> Option<u32> {
        (0..13u32).rev().find(|&v| value_counts[v as usize] == count)
    }

    match unique_card_count {
        5 => {
            // If there are five different cards it can be a straight,
            // a straight flush, a flush, or just a high card.
            // Need to check for all of them.
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                (Some(rank), true) => Rank::StraightFlush(rank),
                (Some(rank), false) => Rank::Straight(rank),
                (None, true) => Rank::Flush(value_set),
                (None, false) => Rank::HighCard(value_set),
            }
        }
        2 => {
            // This can either be full house, or four of a kind.
            match value_with_count(&value_counts, 3) {
                Some(three_value) => {
                    let major_rank = 1 << three_value;
                    // Remove the card that we have three of from the minor rank.
                    let minor_rank = value_set ^ major_rank;
                    // then join the two ranks
                    Rank::FullHouse(major_rank << 13 | minor_rank)
                }
                None => {
                    // Two unique values with no trips means one
                    // value appears four times.
                    let four_value = value_with_count(&value_counts, 4).unwrap_or(0);
                    let major_rank = 1 << four_value;
                    let minor_rank = value_set ^ major_rank;
                    Rank::FourOfAKind(major_rank << 13 | minor_rank)
                }
            }
        }
        3 => {
            // This can be three of a kind or two pair.
            match value_with_count(&value_counts, 3) {
                Some(three_value) => {
                    let major_rank = 1 << three_value;
                    let minor_rank = value_set ^ major_rank;
                    Rank::ThreeOfAKind(major_rank << 13 | minor_rank)
                }
                None => {
                    // The values of both pairs.
                    let major_rank: u32 = (0..13u32)
                        .filter(|&v| value_counts[v as usize] == 2)
                        .map(|v| 1 << v)
                        .sum();
                    let minor_rank = value_set ^ major_rank;
                    Rank::TwoPair(major_rank << 13 | minor_rank)
                }
            }
        }
        _ => {
            // This is unique_card_count == 4
            let pair_value = value_with_count(&value_counts, 2).unwrap_or(0);
            let major_rank = 1 << pair_value;
            let minor_rank = value_set ^ major_rank;
            Rank::OnePair(major_rank << 13 | minor_rank)
        }
    }
}

/// The best five card rank that any 5 to 7 cards contain.
fn best_five(cards: &[Card]) -> Rank {
    if cards.len() == 5 {
        return rank_five(cards);
    }
    let n = cards.len();
    let mut best = Rank::HighCard(0);
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let rank = rank_five(&five);
                        if rank > best {
                            best = rank;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank the cards as the best five card hand
    /// they contain. It doesn't do any caching so it's left up
    /// to the user to understand that duplicate work will be done
    /// if this is called more than once.
    ///
    /// Expects between five and seven cards.
    fn rank(&self) -> Rank;
}

impl Rankable for Hand {
    fn rank(&self) -> Rank {
        best_five(self.cards())
    }
}

impl Rankable for [Card] {
    fn rank(&self) -> Rank {
        best_five(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;

    fn rank_str(s: &str) -> Rank {
        Hand::new_from_str(s).unwrap().rank()
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::HighCard(0) < Rank::StraightFlush(0));
        assert!(Rank::HighCard(0) < Rank::FourOfAKind(0));
        assert!(Rank::HighCard(0) < Rank::ThreeOfAKind(0));
    }

    #[test]
    fn test_cmp_high() {
        assert!(Rank::HighCard(0) < Rank::HighCard(100));
    }

    #[test]
    fn test_high_card_hand() {
        let rank = 1 << Value::Ace as u32
            | 1 << Value::Eight as u32
            | 1 << Value::Nine as u32
            | 1 << Value::Ten as u32
            | 1 << Value::Five as u32;
        assert_eq!(Rank::HighCard(rank), rank_str("Ad8h9cTc5c"));
    }

    #[test]
    fn test_flush() {
        let rank = 1 << Value::Ace as u32
            | 1 << Value::Eight as u32
            | 1 << Value::Nine as u32
            | 1 << Value::Ten as u32
            | 1 << Value::Five as u32;
        assert_eq!(Rank::Flush(rank), rank_str("Ad8d9dTd5d"));
    }

    #[test]
    fn test_full_house() {
        let rank = (1 << (Value::Nine as u32)) << 13 | 1 << (Value::Ace as u32);
        assert_eq!(Rank::FullHouse(rank), rank_str("AdAc9d9c9s"));
    }

    #[test]
    fn test_two_pair() {
        let rank = (1 << Value::Ace as u32 | 1 << Value::Nine as u32) << 13
            | 1 << Value::Ten as u32;
        assert_eq!(Rank::TwoPair(rank), rank_str("AdAc9d9cTs"));
    }

    #[test]
    fn test_one_pair() {
        let rank = (1 << Value::Ace as u32) << 13
            | 1 << Value::Nine as u32
            | 1 << Value::Eight as u32
            | 1 << Value::Ten as u32;
        assert_eq!(Rank::OnePair(rank), rank_str("AdAc9d8cTs"));
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(
            Rank::FourOfAKind((1 << (Value::Ace as u32)) << 13 | 1 << (Value::Ten as u32)),
            rank_str("AdAcAsAhTs")
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(Rank::Straight(0), rank_str("Ad2c3s4h5s"));
    }

    #[test]
    fn test_straight() {
        assert_eq!(Rank::Straight(1), rank_str("2c3s4h5s6d"));
    }

    #[test]
    fn test_broadway() {
        assert_eq!(Rank::Straight(9), rank_str("TcJsQhKsAd"));
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(Rank::StraightFlush(9), rank_str("TcJcQcKcAc"));
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = (1 << (Value::Two as u32)) << 13
            | 1 << (Value::Five as u32)
            | 1 << (Value::Six as u32);
        assert_eq!(Rank::ThreeOfAKind(rank), rank_str("2c2s2h5s6d"));
    }

    #[test]
    fn test_seven_card_finds_flush() {
        // Two hearts in the hand plus three on the board.
        let rank = rank_str("AhKh2h7h9hQs2c");
        assert_eq!(6, rank.category());
    }

    #[test]
    fn test_seven_card_best_of() {
        // The pair of aces should beat the pair of twos in the same
        // seven cards.
        let rank = rank_str("AdAc2s2h7c9dQs");
        assert_eq!(3, rank.category());
        assert!(rank > rank_str("2s2h7c9dQsKdJd"));
    }

    #[test]
    fn test_six_card() {
        assert_eq!(Rank::Straight(1), rank_str("2c3s4h5s6dKc"));
    }

    #[test]
    fn test_category_ordering() {
        let ordered = [
            rank_str("Ad8h9cTc5c"),
            rank_str("AdAc9d8cTs"),
            rank_str("AdAc9d9cTs"),
            rank_str("2c2s2h5s6d"),
            rank_str("2c3s4h5s6d"),
            rank_str("Ad8d9dTd5d"),
            rank_str("AdAc9d9c9s"),
            rank_str("AdAcAsAhTs"),
            rank_str("TcJcQcKcAc"),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for (idx, rank) in ordered.iter().enumerate() {
            assert_eq!(idx as u8 + 1, rank.category());
            assert!(!rank.description().is_empty());
        }
    }
}
