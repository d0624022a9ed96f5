//! Bot-only table for watching the Dealer work.
//!
//! usage: simulate [seed] [players] [turns]
//!
//! Logging goes through env_logger, e.g. `RUST_LOG=debug simulate 7 4 40`.
//! A bot that cannot beat the pile passes. The run ends after the turn
//! budget, or once every seat has passed in a row.

use std::env;

use rust_dealer::{Dealer, DealerConfig, GameEvent, LowestBeating};

fn arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    args.get(idx).and_then(|s| s.parse().ok()).unwrap_or(default)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed: u64 = arg(&args, 1, 42);
    let nplayers: usize = arg(&args, 2, 4);
    let max_turns: usize = arg(&args, 3, 30);

    let mut dealer = Dealer::standard(DealerConfig::default().with_seed(seed));
    dealer.subscribe(|event: &GameEvent| {
        if let GameEvent::PlayAccepted { player, cards, turn } = event {
            println!("turn {:>3}: {:<4} plays {:?}", turn, player, cards);
        }
    });

    for i in 0..nplayers {
        if let Err(e) = dealer.add_player(format!("P{}", i), LowestBeating) {
            eprintln!("cannot seat P{}: {}", i, e);
            return;
        }
    }

    dealer.init_deck();
    if let Err(e) = dealer.deal() {
        eprintln!("deal failed: {}", e);
        return;
    }

    let mut passes = 0;
    for _ in 0..max_turns {
        match dealer.play_turn().await {
            Ok(_) => passes = 0,
            Err(e) if e.is_rejected_play() => {
                let name = dealer.current_player().unwrap_or_default().to_string();
                println!("          {:<4} passes ({})", name, e);
                passes += 1;
                if passes >= dealer.player_count() {
                    println!("nobody can beat the pile");
                    break;
                }
                if let Err(e) = dealer.skip_turn() {
                    eprintln!("cannot pass: {}", e);
                    break;
                }
            }
            Err(e) => {
                eprintln!("turn failed: {}", e);
                break;
            }
        }
    }

    for player in dealer.players() {
        println!("{:<4} holds {}", player.name(), player.hand());
    }
}
