//! Batch random playouts with an outcome tally.
//!
//! Usage:
//! `cargo run --release --bin random_playout -- --games 200 --seed 42 --max-plies 400`

use std::collections::BTreeMap;
use std::time::Instant;

use prime_rook_chess::utils::random_playout::{random_playout, PlayoutConfig};
use tracing_subscriber::EnvFilter;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let games: u64 = parse_arg("--games", 100);
    let max_plies: usize = parse_arg("--max-plies", PlayoutConfig::default().max_plies);
    let base_seed: Option<u64> = std::env::args()
        .any(|a| a == "--seed")
        .then(|| parse_arg("--seed", 0u64));

    println!("Random playouts: games={games} max_plies={max_plies} seed={base_seed:?}");

    let start = Instant::now();
    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_plies = 0usize;
    let mut failures = 0usize;

    for game in 0..games {
        let config = PlayoutConfig {
            max_plies,
            seed: base_seed.map(|seed| seed.wrapping_add(game)),
        };
        match random_playout(&config) {
            Ok(summary) => {
                total_plies += summary.plies;
                let label = if summary.truncated {
                    "unfinished".to_owned()
                } else {
                    summary.status.to_string()
                };
                *tally.entry(label).or_insert(0) += 1;
            }
            Err(err) => {
                failures += 1;
                eprintln!("game {game} failed: {err}");
            }
        }
    }

    let elapsed = start.elapsed();
    println!("outcome,count");
    for (label, count) in &tally {
        println!("{label},{count}");
    }
    if failures > 0 {
        println!("failed,{failures}");
    }
    let finished = games.saturating_sub(failures as u64).max(1);
    println!(
        "avg_plies={:.1} elapsed_ms={}",
        total_plies as f64 / finished as f64,
        elapsed.as_millis()
    );
}
