use std::iter::Peekable;
use std::str::Chars;

use crate::core::{Hand, IcmPokerError, Value};
use crate::holdem::{StartingHand, Suitedness};

/// The non-value characters that can follow the two values
/// of a starting hand token.
#[derive(Debug)]
enum Modifier {
    Plus,
    Range,
    Suited,
    Offsuit,
}

impl Modifier {
    fn from_char(c: char) -> Option<Modifier> {
        match c {
            '+' => Some(Modifier::Plus),
            's' => Some(Modifier::Suited),
            'o' => Some(Modifier::Offsuit),
            '-' => Some(Modifier::Range),
            _ => None,
        }
    }
}

/// One endpoint of a range token: two values and an
/// optional suitedness.
#[derive(Debug)]
struct Endpoint {
    high: Value,
    low: Value,
    suited: Option<Suitedness>,
}

/// Parser for starting hand range strings.
///
/// Tokens look like `"AA"`, `"AKs"`, `"QJo"`, `"TT+"`, `"A2s+"`,
/// or `"54s-T9s"`; `parse` accepts a comma separated list of them.
pub struct RangeParser;

impl RangeParser {
    /// Parse a comma separated range string into the unique
    /// starting hands it names.
    ///
    /// # Examples
    ///
    /// ```
    /// use icm_poker::holdem::RangeParser;
    ///
    /// let hands = RangeParser::parse("TT+,AQs+,AKo").unwrap();
    /// assert_eq!(8, hands.len());
    /// ```
    pub fn parse(range_str: &str) -> Result<Vec<StartingHand>, IcmPokerError> {
        let mut hands = Vec::new();
        for token in range_str.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            hands.extend(Self::parse_one(token)?);
        }
        hands.sort();
        hands.dedup();
        Ok(hands)
    }

    /// Parse a single token and return all the starting hands it expands to.
    pub fn parse_one(token: &str) -> Result<Vec<StartingHand>, IcmPokerError> {
        // Consume the string, turning it into an iterator of chars.
        let mut iter = token.chars().peekable();

        let first = Self::create_endpoint(&mut iter)?;

        // Assume that we have only specified one hand.
        let mut plus = false;
        let mut second: Option<Endpoint> = None;

        // After the endpoint there can be a modifier that widens
        // the token into a run of hands.
        if let Some(modifier) = iter.peek().copied().and_then(Modifier::from_char) {
            iter.next();
            match modifier {
                Modifier::Plus => plus = true,
                Modifier::Range => second = Some(Self::create_endpoint(&mut iter)?),
                // Suited modifiers are handled inside the endpoint,
                // one here means something like "AKss".
                _ => return Err(IcmPokerError::UnparsedCharsRemaining),
            }
        }

        // A plus can't widen a dash range, "QQ-99+" is nonsense.
        if second.is_some() && iter.peek() == Some(&'+') {
            return Err(IcmPokerError::InvalidPlusModifier);
        }

        if iter.next().is_some() {
            return Err(IcmPokerError::UnparsedCharsRemaining);
        }

        if plus {
            Self::expand_plus(&first)
        } else if let Some(second) = second {
            Self::expand_range(&first, &second)
        } else {
            Ok(vec![StartingHand::new(
                first.high,
                first.low,
                first.suited.unwrap_or(Suitedness::Any),
            )])
        }
    }

    /// Parse a comma separated range string all the way down to the
    /// concrete two card hands it contains.
    pub fn expand(range_str: &str) -> Result<Vec<Hand>, IcmPokerError> {
        Ok(Self::parse(range_str)?
            .iter()
            .flat_map(StartingHand::possible_hands)
            .collect())
    }

    /// Take two value chars and an optional suitedness char
    /// off the front of the iterator.
    fn create_endpoint(iter: &mut Peekable<Chars>) -> Result<Endpoint, IcmPokerError> {
        let value_one = iter
            .next()
            .and_then(Value::from_char)
            .ok_or(IcmPokerError::UnexpectedValueChar)?;
        let value_two = iter
            .next()
            .and_then(Value::from_char)
            .ok_or(IcmPokerError::UnexpectedValueChar)?;

        // Hands are written high card first but accept either order.
        let high = value_one.max(value_two);
        let low = value_one.min(value_two);

        let suited = match iter.peek() {
            Some('s') => {
                iter.next();
                if high == low {
                    return Err(IcmPokerError::InvalidSuitedPairs);
                }
                Some(Suitedness::Suited)
            }
            Some('o') => {
                iter.next();
                Some(Suitedness::OffSuit)
            }
            _ => None,
        };

        Ok(Endpoint { high, low, suited })
    }

    /// Expand a plus token. For pairs the pair value climbs to aces,
    /// for everything else the kicker climbs to one below the high card.
    fn expand_plus(first: &Endpoint) -> Result<Vec<StartingHand>, IcmPokerError> {
        let suited = first.suited.unwrap_or(Suitedness::Any);
        if first.high == first.low {
            let hands = Value::values()
                .into_iter()
                .filter(|v| *v >= first.high)
                .map(|v| StartingHand::new(v, v, suited))
                .collect();
            return Ok(hands);
        }
        let hands = Value::values()
            .into_iter()
            .filter(|v| *v >= first.low && *v < first.high)
            .map(|v| StartingHand::new(first.high, v, suited))
            .collect();
        Ok(hands)
    }

    /// Expand a dash range token. Both endpoints must keep the same
    /// gap between their two cards and the run slides that shape
    /// between them, e.g. `"54s-T9s"`.
    fn expand_range(
        first: &Endpoint,
        second: &Endpoint,
    ) -> Result<Vec<StartingHand>, IcmPokerError> {
        match (first.suited, second.suited) {
            (Some(a), Some(b)) if a != b => {
                return Err(IcmPokerError::MismatchedSuitedness);
            }
            _ => {}
        }
        let suited = first
            .suited
            .or(second.suited)
            .unwrap_or(Suitedness::Any);

        if first.high.gap(first.low) != second.high.gap(second.low) {
            return Err(IcmPokerError::InvalidGap);
        }

        let start = first.high.min(second.high) as u8;
        let end = first.high.max(second.high) as u8;
        let gap = first.high.gap(first.low);

        let values = Value::values();
        let hands = (start..=end)
            .map(|hi| {
                StartingHand::new(
                    values[hi as usize],
                    values[(hi - gap) as usize],
                    suited,
                )
            })
            .collect();
        Ok(hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let hands = RangeParser::parse_one("AK").unwrap();
        assert_eq!(
            vec![StartingHand::new(Value::Ace, Value::King, Suitedness::Any)],
            hands
        );
    }

    #[test]
    fn test_parse_reversed() {
        // Accept low card first too.
        assert_eq!(
            RangeParser::parse_one("KA").unwrap(),
            RangeParser::parse_one("AK").unwrap()
        );
    }

    #[test]
    fn test_parse_suited() {
        let hands = RangeParser::parse_one("AKs").unwrap();
        assert_eq!(
            vec![StartingHand::new(
                Value::Ace,
                Value::King,
                Suitedness::Suited
            )],
            hands
        );
    }

    #[test]
    fn test_parse_pair_plus() {
        let hands = RangeParser::parse_one("TT+").unwrap();
        // TT JJ QQ KK AA
        assert_eq!(5, hands.len());
        assert!(hands.iter().all(|h| h.is_pair()));
        assert!(hands.contains(&StartingHand::new(
            Value::Ace,
            Value::Ace,
            Suitedness::Any
        )));
    }

    #[test]
    fn test_parse_kicker_plus() {
        let hands = RangeParser::parse_one("ATs+").unwrap();
        // AT AJ AQ AK
        assert_eq!(4, hands.len());
        assert!(
            hands
                .iter()
                .all(|h| h.value_one == Value::Ace && h.suited == Suitedness::Suited)
        );
    }

    #[test]
    fn test_parse_connector_range() {
        let hands = RangeParser::parse_one("54s-T9s").unwrap();
        // 54 65 76 87 98 T9
        assert_eq!(6, hands.len());
        assert!(hands.contains(&StartingHand::new(
            Value::Seven,
            Value::Six,
            Suitedness::Suited
        )));
    }

    #[test]
    fn test_parse_pair_range() {
        let hands = RangeParser::parse_one("QQ-99").unwrap();
        assert_eq!(4, hands.len());
        assert!(hands.iter().all(|h| h.is_pair()));
    }

    #[test]
    fn test_invalid_gap() {
        assert_eq!(
            Err(IcmPokerError::InvalidGap),
            RangeParser::parse_one("54s-T8s")
        );
    }

    #[test]
    fn test_suited_pair_rejected() {
        assert_eq!(
            Err(IcmPokerError::InvalidSuitedPairs),
            RangeParser::parse_one("TTs")
        );
    }

    #[test]
    fn test_mismatched_suitedness() {
        assert_eq!(
            Err(IcmPokerError::MismatchedSuitedness),
            RangeParser::parse_one("54s-T9o")
        );
    }

    #[test]
    fn test_plus_after_range() {
        assert_eq!(
            Err(IcmPokerError::InvalidPlusModifier),
            RangeParser::parse_one("QQ-99+")
        );
    }

    #[test]
    fn test_trailing_garbage() {
        assert!(RangeParser::parse_one("AKsx").is_err());
        assert!(RangeParser::parse_one("AKss").is_err());
    }

    #[test]
    fn test_parse_list_dedupes() {
        let hands = RangeParser::parse("QQ+, QQ+, AKs").unwrap();
        // QQ KK AA AKs
        assert_eq!(4, hands.len());
    }

    #[test]
    fn test_expand_counts_combos() {
        // A pair has 6 combos, a suited hand 4, an offsuit hand 12.
        assert_eq!(6, RangeParser::expand("AA").unwrap().len());
        assert_eq!(4, RangeParser::expand("AKs").unwrap().len());
        assert_eq!(12, RangeParser::expand("AKo").unwrap().len());
        assert_eq!(16, RangeParser::expand("AK").unwrap().len());
    }
}
