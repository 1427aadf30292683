//! CLI blackjack example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, CardView, Game, GameOptions, GameState};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default());

    loop {
        if let Err(err) = game.start_seeded_round(seed) {
            println!("Deal error: {err}");
            break;
        }
        seed = seed.wrapping_add(1);

        while game.state() == GameState::PlayerTurn {
            print_table(&game);

            let Some(action) = prompt_line("[h]it [s]tand [q]uit: ") else {
                println!("\nGoodbye.");
                return;
            };
            let result = match action.as_str() {
                "h" | "hit" => game.player_hit().map(|_| ()),
                "s" | "stand" => game.player_stand(),
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

        if game.state() == GameState::DealerTurn {
            if let Err(err) = game.dealer_play() {
                println!("Dealer error: {err}");
            }
        }

        match game.result() {
            Ok(result) => {
                print_table(&game);
                println!("{}", result.outcome);
            }
            Err(err) => println!("Result error: {err}"),
        }

        match prompt_line("Play again? (y/n): ").as_deref() {
            Some("y" | "yes") => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    read_answer(&mut io::stdin().lock())
}

/// Reads one trimmed, lowercased line. `None` once the input is closed.
fn read_answer(reader: &mut impl BufRead) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    let dealer = game.dealer_hand();
    let dealer_value = if dealer.iter().all(|view| view.is_face_up()) {
        game.dealer_visible_value().to_string()
    } else {
        "?".to_string()
    };
    println!("Dealer: {} (value {dealer_value})", format_hand(&dealer));
    println!(
        "Player: {} (value {})\n",
        format_hand(&game.player_hand()),
        game.player_value()
    );
}

fn format_hand(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|view| view.card().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
