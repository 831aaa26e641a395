//! Interactive console blackjack session.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blackjack::{BLACKJACK, Card, Game, GameState, Hand, Outcome, Rank, Suit};

/// Pause between dealer draws, purely for suspense. The engine never
/// sleeps; pacing lives here so it can be dropped without touching
/// game semantics.
const DEALER_PAUSE: Duration = Duration::from_secs(2);

fn main() {
    println!("Blackjack! Draw as close to 21 as you can without going over.");

    let mut wins: u32 = 0;
    let mut ties: u32 = 0;
    let mut losses: u32 = 0;

    loop {
        match play_round() {
            Some(Outcome::Win) => wins += 1,
            Some(Outcome::Tie) => ties += 1,
            Some(Outcome::Lose) => losses += 1,
            None => break,
        }

        println!("Won: {wins}, Tied: {ties}, Lost: {losses}");

        if !prompt_replay() {
            println!("Thank you. Come back soon!");
            break;
        }
        println!("Welcome back!");
    }
}

/// Plays one round. Returns `None` only if the deck somehow depletes,
/// which a single 52-card round cannot reach in normal play.
fn play_round() -> Option<Outcome> {
    let mut game = Game::new(clock_seed());

    let state = match game.start() {
        Ok(state) => state,
        Err(err) => {
            println!("Deal error: {err}");
            return None;
        }
    };

    print_table(&game);
    if state == GameState::PlayerBlackjack {
        println!("Blackjack! Wait for dealer...");
    }

    while game.state() == GameState::InProgress {
        match prompt_line("Hit or stand? (hit = 'h', stand = 's'): ").as_str() {
            "h" | "hit" => match game.hit() {
                Ok(state) => {
                    print_table(&game);
                    match state {
                        GameState::PlayerBusted => println!("Player busted!"),
                        GameState::PlayerBlackjack => println!("Blackjack! Wait for dealer..."),
                        _ => {}
                    }
                }
                Err(err) => {
                    println!("Action error: {err}");
                    return None;
                }
            },
            "s" | "stand" => {
                if let Err(err) = game.stand() {
                    println!("Action error: {err}");
                    return None;
                }
            }
            _ => println!("Invalid answer. Please select again."),
        }
    }

    // A blackjack hand stands automatically.
    if game.state() == GameState::PlayerBlackjack && game.stand().is_err() {
        return None;
    }

    if game.state() == GameState::DealerTurn {
        println!("Dealer getting cards...");
        loop {
            match game.dealer_step() {
                Ok(Some(_)) => {
                    thread::sleep(DEALER_PAUSE);
                    print_table(&game);
                }
                Ok(None) => break,
                Err(err) => {
                    println!("Dealer error: {err}");
                    return None;
                }
            }
        }
    }

    match game.outcome() {
        Ok(outcome) => {
            println!("{}", outcome_message(&game, outcome));
            Some(outcome)
        }
        Err(err) => {
            println!("Showdown error: {err}");
            None
        }
    }
}

fn outcome_message(game: &Game, outcome: Outcome) -> &'static str {
    let player = game.player_hand().value();
    let dealer = game.dealer_hand().value();
    match outcome {
        Outcome::Win if dealer.is_bust() => "Dealer busted! You win!",
        Outcome::Win if player.hard == BLACKJACK => "Blackjack! You win!",
        Outcome::Win => "Player value higher! You win!",
        Outcome::Tie => "Tie!",
        Outcome::Lose if player.is_bust() => "Player busted! You lose!",
        Outcome::Lose => "Dealer value higher! You lose!",
    }
}

fn prompt_replay() -> bool {
    loop {
        match prompt_line("Play again? (yes = 'y', no = 'n'): ").as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Invalid answer. Please select again."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    nanos as u64
}

fn print_table(game: &Game) {
    println!();
    println!(
        "Dealer: {} (value {})",
        format_hand(game.dealer_hand()),
        game.dealer_hand().value()
    );
    println!(
        "Player: {} (value {})",
        format_hand(game.player_hand()),
        game.player_hand().value()
    );
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank.to_string();
    let colored_rank = if matches!(card.rank, Rank::Ace | Rank::Jack | Rank::Queen | Rank::King) {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
