//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blackjack_table::{
    Card, DealerView, Game, GameOptions, GameState, HandView, Suit, TableEvent,
};

const BOT_DELAY: Duration = Duration::from_millis(400);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default().with_seats(3), seed);

    loop {
        let balance = game.balance();
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let last = game.bankroll().last_bet();
        let prompt = if last > 0 {
            format!("Bet amount (1-{balance}, enter to repeat {last}, 0 to quit): ")
        } else {
            format!("Bet amount (1-{balance}, 0 to quit): ")
        };
        let Some(bet) = prompt_bet(&prompt) else {
            break;
        };

        let placed = match bet {
            Some(0) => {
                println!("Goodbye.");
                break;
            }
            Some(amount) => game.place_bet(amount),
            None => game.repeat_bet(),
        };
        if let Err(err) = placed {
            println!("Bet error: {err}");
            continue;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game);
            println!("{}", format_actions(&game));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down().map(|_| ()),
                "p" | "split" => game.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        while let Some(event) = game.step() {
            print_event(&event);
            if matches!(event, TableEvent::BotHit { .. } | TableEvent::BotStand { .. }) {
                thread::sleep(BOT_DELAY);
            }
        }

        print_table(&game);
        if let Some(human) = game.last_result().and_then(|result| result.human()) {
            for hand in &human.hands {
                println!(
                    "Hand {}: {} ({} vs dealer {}), payout {}",
                    hand.hand_index, hand.outcome, hand.seat_value, hand.dealer_value, hand.payout
                );
            }
        }
        println!("Balance: {}\n", game.balance());

        game.clear_round();
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

/// Reads a bet. `Some(None)` repeats the last bet; `None` quits.
fn prompt_bet(prompt: &str) -> Option<Option<usize>> {
    loop {
        let input = prompt_line(prompt);
        match input.as_str() {
            "q" | "quit" => return None,
            "" => return Some(None),
            _ => match input.parse::<usize>() {
                Ok(value) => return Some(Some(value)),
                Err(_) => println!("Please enter a number."),
            },
        }
    }
}

fn print_event(event: &TableEvent) {
    match event {
        TableEvent::BotHit { seat, card, value } => {
            let bust = if value.is_bust() { " (bust)" } else { "" };
            println!("Bot {seat} hits: {} -> {value}{bust}", format_card(card));
        }
        TableEvent::BotStand {
            seat,
            decision,
            value,
        } => println!("Bot {seat}: {decision} on {value}"),
        TableEvent::HoleRevealed { value } => println!("Dealer reveals: {value}"),
        TableEvent::DealerHit { card, value } => {
            println!("Dealer draws {} -> {value}", format_card(card));
        }
        TableEvent::RoundSettled(result) => {
            if result.dealer_bust {
                println!("Dealer busts with {}.", result.dealer_value);
            } else {
                println!("Dealer stands on {}.", result.dealer_value);
            }
        }
    }
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    println!("Dealer: {}", format_dealer(&game.dealer_view()));

    for seat in game.seat_views() {
        let marker = if seat.active { "*" } else { " " };
        let name = if seat.human {
            "You".to_string()
        } else {
            format!("Bot {}", seat.seat)
        };
        for hand in &seat.hands {
            println!(
                "{marker} {name}: {} | {} | bet {} | {:?}",
                format_hand(hand),
                hand.score,
                hand.bet,
                hand.status
            );
        }
    }
    println!();
}

fn format_actions(game: &Game) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", game.can_double()),
        format_action("split", "p", game.can_split()),
    ];
    let hint = game
        .recommendation()
        .map(|decision| format!("  (strategy: {})", decision.advice_text()))
        .unwrap_or_default();
    format!("Actions: {}{hint}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerView) -> String {
    if dealer.cards.is_empty() {
        return "(no cards)".to_string();
    }

    let cards = dealer
        .cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{cards} ({})", dealer.score)
}

fn format_hand(hand: &HandView) -> String {
    if hand.cards.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(
        &format!("{}{}", card.rank_label(), card.suit.symbol()),
        color_code,
    )
}
