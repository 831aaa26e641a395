//! Hand representation and the dual soft/hard valuation.

use core::fmt;

use crate::card::{Card, Rank};

/// Target total for a blackjack.
pub const BLACKJACK: u8 = 21;

/// The dual valuation of a hand.
///
/// `hard` is the operative total: every ace counts as 1, except that a
/// single ace stays elevated to 11 when that does not bust the hand.
/// All bust checks and showdown comparisons use `hard`.
///
/// `soft` is the strictly lower all-aces-as-one alternative, present
/// only while an ace is currently counted as 11. It exists purely for
/// display ("11/21").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Operative total.
    pub hard: u8,
    /// Lower alternative total, if an ace is elevated.
    pub soft: Option<u8>,
}

impl HandValue {
    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.hard > BLACKJACK
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.soft {
            Some(soft) => write!(f, "{}/{}", soft, self.hard),
            None => write!(f, "{}", self.hard),
        }
    }
}

/// An ordered collection of cards held by the player or the dealer.
///
/// The hand tracks a running raw total (every ace counted as 11) and
/// the number of aces held; the dual valuation is derived on demand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Sum of card values with every ace counted as 11.
    raw_total: u8,
    /// Number of aces held.
    aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            raw_total: 0,
            aces: 0,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.raw_total += card.value();
        if card.rank == Rank::Ace {
            self.aces += 1;
        }
        self.cards.push(card);
    }

    /// Calculates the dual valuation of the hand.
    ///
    /// With `n` aces, all but one are forced to count as 1 (two
    /// elevated aces always bust); the last ace stays at 11 only while
    /// the total fits under 21.
    #[must_use]
    pub fn value(&self) -> HandValue {
        if self.aces == 0 {
            return HandValue {
                hard: self.raw_total,
                soft: None,
            };
        }

        let adjusted = self.raw_total - (self.aces - 1) * 10;
        if adjusted > BLACKJACK {
            HandValue {
                hard: adjusted - 10,
                soft: None,
            }
        } else {
            HandValue {
                hard: adjusted,
                soft: Some(adjusted - 10),
            }
        }
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(rank, Suit::Spades));
        }
        hand
    }

    #[test]
    fn no_aces_is_plain_sum() {
        let hand = hand_of(&[Rank::Seven, Rank::Nine]);
        let value = hand.value();
        assert_eq!(value.hard, 16);
        assert_eq!(value.soft, None);
    }

    #[test]
    fn single_ace_offers_both_totals() {
        let hand = hand_of(&[Rank::Ace, Rank::Six]);
        let value = hand.value();
        assert_eq!(value.hard, 17);
        assert_eq!(value.soft, Some(7));
        assert_eq!(value.to_string(), "7/17");
    }

    #[test]
    fn two_aces_and_nine_is_twenty_one() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        let value = hand.value();
        assert_eq!(value.hard, 21);
        assert_eq!(value.soft, Some(11));
    }

    #[test]
    fn three_aces_and_nine_drops_all_aces() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine]);
        let value = hand.value();
        assert_eq!(value.hard, 12);
        assert_eq!(value.soft, None);
    }

    #[test]
    fn elevated_ace_demotes_when_it_would_bust() {
        let hand = hand_of(&[Rank::Ace, Rank::Nine, Rank::Five]);
        let value = hand.value();
        assert_eq!(value.hard, 15);
        assert_eq!(value.soft, None);
        assert_eq!(value.to_string(), "15");
    }

    #[test]
    fn bust_detection_uses_hard_total() {
        let hand = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);
        assert!(hand.value().is_bust());

        let soft = hand_of(&[Rank::Ace, Rank::King]);
        assert!(!soft.value().is_bust());
        assert_eq!(soft.value().hard, 21);
    }
}
