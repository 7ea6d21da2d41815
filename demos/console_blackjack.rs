//! Console blackjack demo.
//!
//! Run with `cargo run --example console_blackjack`. Set `RUST_LOG=debug` to
//! see the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_engine::input::{parse_action, parse_bet, parse_yes_no};
use blackjack_engine::{
    Action, BetError, Card, DEALER_NAME, DecisionProvider, Event, EventSink, Game, GameOptions,
    Hand, HandOutcome, Seat, Suit,
};

const RULES: &str = "\
The Player and the Dealer are each dealt two cards from a shuffled deck.
Only one of the Dealer's cards is shown. The goal is to get as close to 21
as possible without going over. Going over 21 is a bust and loses at once.
Hit to take another card, or stay to end your turn. The Dealer then draws
until their total is above 17. The higher total wins; equal totals tie.";

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("=> Welcome to Blackjack!");
    let wants_rules = prompt_until(
        "=> Do you need an explanation of the rules? (y/n) ",
        |line| parse_yes_no(line).map_err(|_| "Please enter either y or n."),
    );
    if wants_rules {
        println!("{RULES}");
    }
    println!("=> Have fun!!");

    let mut input = ConsoleInput;
    let mut table = ConsoleTable::default();
    let mut game = Game::join(GameOptions::default(), seed, &mut input, &mut table);

    if let Err(err) = game.play_session(&mut input, &mut table) {
        eprintln!("Game aborted: {err}");
    }
}

/// Reads decisions from standard input.
struct ConsoleInput;

impl DecisionProvider for ConsoleInput {
    fn player_name(&mut self) -> String {
        prompt_line("=> Please enter your name: ")
    }

    fn bet(&mut self, pot: usize) -> isize {
        println!("=> Your funds are: ${pot}.");
        prompt_until("=> Please place your bet: ", |line| {
            let amount = parse_bet(line, pot).map_err(|err| match err {
                BetError::NotPositive => "The bet must be greater than zero.",
                BetError::InsufficientFunds => "You cannot bet more than your funds.",
                BetError::NotANumber | BetError::InvalidState => {
                    "Invalid bet, please provide a valid amount."
                }
            })?;
            Ok(isize::try_from(amount).unwrap_or(isize::MAX))
        })
    }

    fn hit_or_stand(&mut self, hand: &Hand) -> Action {
        println!("=> Your hand is: {} (total {})", format_hand(hand), hand.value());
        prompt_until("=> Would you like to 1.) Hit, or 2.) Stay? ", |line| {
            parse_action(line).map_err(|_| "Please enter 1 or 2.")
        })
    }

    fn play_again(&mut self) -> bool {
        prompt_until("=> Would you like to play another game? (y/n) ", |line| {
            parse_yes_no(line).map_err(|_| "Invalid choice. Please answer y or n.")
        })
    }
}

/// Prints table events to standard output.
#[derive(Default)]
struct ConsoleTable {
    name: String,
}

impl ConsoleTable {
    fn who(&self, seat: Seat) -> &str {
        match seat {
            Seat::Player => self.name.as_str(),
            Seat::Dealer => DEALER_NAME,
        }
    }
}

impl EventSink for ConsoleTable {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::PlayerSeated { name, pot } => {
                self.name.clone_from(name);
                println!("=> {name} sits down with ${pot}.");
            }
            Event::NameRejected(_) => println!("=> Name cannot be empty."),
            Event::InitialDeal { player, dealer_up } => {
                println!("=> {} was dealt: {}", self.name, format_hand(player));
                println!(
                    "=> Dealer was dealt: {} and an unknown card.",
                    format_card(dealer_up)
                );
            }
            Event::BetRejected { error, .. } => {
                println!("=> Invalid bet ({error}), please provide a valid amount.");
            }
            Event::BetPlaced { amount, .. } => println!("=> {} bets ${amount}.", self.name),
            Event::CardDrawn { seat, card, value } => {
                println!(
                    "=> A new card, {}, was added to {}'s hand ({value}).",
                    format_card(card),
                    self.who(*seat)
                );
            }
            Event::Stood { seat, value } => {
                println!("=> {} stays on {value}.", self.who(*seat));
            }
            Event::Busted { seat, value } => {
                println!(
                    "=> Seems like a bust at {value}. Too bad for {}...",
                    self.who(*seat)
                );
            }
            Event::HandsRevealed { player, dealer } => {
                println!(
                    "\n=> {}'s hand: {} (total {})",
                    self.name,
                    format_hand(player),
                    player.value()
                );
                println!(
                    "=> Dealer's hand: {} (total {})",
                    format_hand(dealer),
                    dealer.value()
                );
            }
            Event::RoundSettled(result) => {
                match result.outcome {
                    HandOutcome::Win => println!("=> {} wins!", self.name),
                    HandOutcome::Lose => println!("=> Dealer wins!"),
                    HandOutcome::Push => {
                        println!("=> Both hands are the same value. It's a tie!");
                    }
                }
                println!("=> Your pot is now: ${}", result.pot);
            }
            Event::Reshuffled => println!("\n=> A new deck is being shuffled..."),
            Event::SessionEnded { pot } => {
                println!("=> You walk away with ${pot}.");
                println!("=> Thank you for playing! Goodbye!");
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => {}
        Err(_) => return String::new(),
    }
    input.trim().to_string()
}

fn prompt_until<T>(prompt: &str, mut parse: impl FnMut(&str) -> Result<T, &'static str>) -> T {
    loop {
        match parse(&prompt_line(prompt)) {
            Ok(value) => return value,
            Err(message) => println!("=> {message}"),
        }
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
