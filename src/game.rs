//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::{BLACKJACK, Hand};

/// Dealer draws until reaching this hard total.
pub const DEALER_STANDS_AT: u8 = 17;

/// State of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The player may hit or stand.
    InProgress,
    /// The player reached 21 and is forced to stand.
    PlayerBlackjack,
    /// The player went over 21; the round is decided.
    PlayerBusted,
    /// The player has stood; the dealer draws.
    DealerTurn,
    /// The dealer has finished and the round can be resolved.
    RoundOver,
}

/// Result of a resolved round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins.
    Win,
    /// Tie.
    Tie,
    /// Player loses.
    Lose,
}

/// A single round of blackjack against the house dealer.
///
/// The engine owns the deck and both hands and walks a small state
/// machine: deal, player turn, dealer turn, resolution. It performs no
/// I/O and never sleeps; pacing and display belong to the caller.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: GameState,
}

impl Game {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// The same seed always produces the same shuffle.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::from_deck(deck)
    }

    /// Creates a round over a pre-arranged deck.
    ///
    /// The deck is used as given, without shuffling. See
    /// [`Deck::from_cards`] for the draw order.
    #[must_use]
    pub const fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::InProgress,
        }
    }

    /// Deals the opening cards: two to the player, one to the dealer.
    ///
    /// The dealer holds a single card until the dealer turn; there is
    /// no hidden hole card. Returns [`GameState::PlayerBlackjack`] if
    /// the opening deal totals exactly 21, [`GameState::InProgress`]
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started or the deck
    /// runs out.
    pub fn start(&mut self) -> Result<GameState, GameError> {
        if self.state != GameState::InProgress || !self.player.is_empty() {
            return Err(GameError::InvalidState);
        }

        let card = self.deck.draw()?;
        self.player.add_card(card);
        let card = self.deck.draw()?;
        self.player.add_card(card);
        let card = self.deck.draw()?;
        self.dealer.add_card(card);

        if self.player.value().hard == BLACKJACK {
            self.state = GameState::PlayerBlackjack;
        }
        Ok(self.state)
    }

    /// Deals one more card to the player.
    ///
    /// Returns [`GameState::PlayerBusted`] past 21,
    /// [`GameState::PlayerBlackjack`] at exactly 21, and
    /// [`GameState::InProgress`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot act (before [`start`],
    /// after a bust or blackjack, or once standing) or the deck runs
    /// out.
    ///
    /// [`start`]: Self::start
    pub fn hit(&mut self) -> Result<GameState, GameError> {
        if self.state != GameState::InProgress || self.player.is_empty() {
            return Err(GameError::InvalidState);
        }

        let card = self.deck.draw()?;
        self.player.add_card(card);

        let value = self.player.value().hard;
        if value > BLACKJACK {
            self.state = GameState::PlayerBusted;
        } else if value == BLACKJACK {
            self.state = GameState::PlayerBlackjack;
        }
        Ok(self.state)
    }

    /// Ends the player turn and hands control to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error unless the player is in progress or holds a
    /// blackjack.
    pub fn stand(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::InProgress | GameState::PlayerBlackjack if !self.player.is_empty() => {
                self.state = GameState::DealerTurn;
                Ok(())
            }
            _ => Err(GameError::InvalidState),
        }
    }

    /// Advances the dealer turn by exactly one draw.
    ///
    /// While the dealer's hard total is below [`DEALER_STANDS_AT`],
    /// draws one card and returns it. Once the total reaches 17 or
    /// more (possibly bust: busts are detected at resolution, not
    /// here), transitions to [`GameState::RoundOver`] and returns
    /// `None`.
    ///
    /// Stepping one card at a time lets the caller decide whether and
    /// how long to pause between draws.
    ///
    /// # Errors
    ///
    /// Returns an error outside the dealer turn or if the deck runs
    /// out.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, GameError> {
        if self.state != GameState::DealerTurn {
            return Err(GameError::InvalidState);
        }

        if self.dealer.value().hard < DEALER_STANDS_AT {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
            Ok(Some(card))
        } else {
            self.state = GameState::RoundOver;
            Ok(None)
        }
    }

    /// Plays the dealer turn to completion and returns the cards
    /// drawn.
    ///
    /// Equivalent to calling [`dealer_step`] until it yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error outside the dealer turn or if the deck runs
    /// out.
    ///
    /// [`dealer_step`]: Self::dealer_step
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, GameError> {
        let mut drawn = Vec::new();
        while let Some(card) = self.dealer_step()? {
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Resolves the round by comparing hard totals.
    ///
    /// Precedence, first match wins:
    /// 1. player bust loses, regardless of the dealer;
    /// 2. dealer bust wins for the player;
    /// 3. equal totals tie (including 21 against 21);
    /// 4. player 21 wins;
    /// 5. otherwise the higher total wins.
    ///
    /// # Errors
    ///
    /// Returns an error unless the dealer has finished or the player
    /// busted (a busted round needs no dealer turn).
    pub fn outcome(&self) -> Result<Outcome, GameError> {
        if self.state != GameState::RoundOver && self.state != GameState::PlayerBusted {
            return Err(GameError::InvalidState);
        }

        let player = self.player.value().hard;
        let dealer = self.dealer.value().hard;

        let outcome = if player > BLACKJACK {
            Outcome::Lose
        } else if dealer > BLACKJACK {
            Outcome::Win
        } else if player == dealer {
            Outcome::Tie
        } else if player == BLACKJACK || player > dealer {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        Ok(outcome)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
