//! CLI blackjack demo.
//!
//! Run with `cargo run --example cli_blackjack`; set `RUST_LOG=debug` to see
//! the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{ActionError, Game, Hand, PlayerAction, Seat};

fn main() {
    env_logger::init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    loop {
        match play_round() {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => println!("Game abandoned: {err}"),
        }

        if !matches!(prompt_line("Play again? (y/n): ").as_str(), "y" | "yes") {
            break;
        }
    }

    println!("Goodbye.");
}

/// Plays one game. Returns `Ok(false)` if the player quit.
fn play_round() -> Result<bool, ActionError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let mut game = Game::new(seed);
    game.deal_opening()?;

    while !game.done() {
        print_table(&game);

        let input = prompt_line("Enter 'h' to hit or 's' to stand: ");
        if input == "q" || input == "quit" {
            return Ok(false);
        }

        match input.parse::<PlayerAction>() {
            Ok(PlayerAction::Hit) => {
                let card = game.hit(Seat::Player)?;
                println!("You draw {card}.");
                if game.player().is_bust() {
                    println!("Player busts.");
                }
            }
            Ok(PlayerAction::Stand) => {
                let drawn = game.stand()?;
                if !drawn.is_empty() {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    print_table(&game);
    match game.result() {
        Ok(outcome) => println!("{outcome}"),
        Err(err) => println!("Result error: {err}"),
    }

    Ok(true)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // EOF quits.
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!();
    println!("Dealer: {}", format_hand(game.dealer()));
    println!("You:    {}", format_hand(game.player()));
    println!();
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    let soft = if hand.is_soft() { " soft" } else { "" };
    format!("{hand} (total{soft} {})", hand.total())
}
