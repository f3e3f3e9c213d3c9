//! Furlong Headless Betting Simulator
//!
//! Runs seeded betting rounds without any UI, using the exact same odds,
//! race, and settlement functions as the real game. Bets a flat stake on the
//! favorite every round and reports the realized edge, so payout changes can
//! be sanity-checked quickly.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --rounds N    Rounds to simulate (default: 10000)
//!   --seed N      RNG seed (default: 42)
//!   --stake X     Flat stake per round (default: 10.0)
//!   --bet TYPE    win | place | show | exacta (default: win)
//!   --quiet       Only the final summary line

use furlong::betting::{settle, Bet, BetType};
use furlong::constants::{MAX_STEP, NUM_HORSES, TRACK_LENGTH};
use furlong::odds::OddsBoard;
use furlong::race::{finishing_order, run_race};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    rounds: u64,
    seed: u64,
    stake: f64,
    bet_type: BetType,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            seed: 42,
            stake: 10.0,
            bet_type: BetType::Win,
            quiet: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rounds" => {
                i += 1;
                config.rounds = args[i].parse().expect("--rounds requires a number");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("--seed requires a number");
            }
            "--stake" => {
                i += 1;
                config.stake = args[i].parse().expect("--stake requires a number");
            }
            "--bet" => {
                i += 1;
                config.bet_type = parse_bet_name(&args[i]);
            }
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn parse_bet_name(name: &str) -> BetType {
    match name.to_ascii_lowercase().as_str() {
        "win" => BetType::Win,
        "place" => BetType::Place,
        "show" => BetType::Show,
        "exacta" => BetType::Exacta,
        other => {
            eprintln!("Unknown bet type: {other} (expected win|place|show|exacta)");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Furlong Headless Betting Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --rounds N    Rounds to simulate (default: 10000)\n\
         \x20 --seed N      RNG seed (default: 42)\n\
         \x20 --stake X     Flat stake per round (default: 10.0)\n\
         \x20 --bet TYPE    win | place | show | exacta (default: win)\n\
         \x20 --quiet       Only the final summary line\n\
         \x20 --help, -h    Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Default)]
struct SimStats {
    rounds: u64,
    wins: u64,
    total_staked: f64,
    total_returned: f64,
}

impl SimStats {
    fn record(&mut self, stake: f64, payout: f64) {
        self.rounds += 1;
        self.total_staked += stake;
        self.total_returned += payout;
        if payout > 0.0 {
            self.wins += 1;
        }
    }

    fn hit_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }

    /// Net return per dollar staked. Fair payouts hover around zero.
    fn edge(&self) -> f64 {
        if self.total_staked == 0.0 {
            return 0.0;
        }
        (self.total_returned - self.total_staked) / self.total_staked
    }
}

// ── Simulation ───────────────────────────────────────────────────────

/// Builds the round's bet: always the favorite; for an Exacta, the top two
/// favorites in probability order.
fn favorite_bet(board: &OddsBoard, bet_type: BetType) -> Bet {
    match bet_type {
        BetType::Win => Bet::Win {
            horse: board.favorite(),
        },
        BetType::Place => Bet::Place {
            horse: board.favorite(),
        },
        BetType::Show => Bet::Show {
            horse: board.favorite(),
        },
        BetType::Exacta => {
            let mut ranked: Vec<usize> = (0..board.horse_count()).collect();
            ranked.sort_by(|&a, &b| {
                board
                    .win_prob(b)
                    .partial_cmp(&board.win_prob(a))
                    .unwrap_or(Ordering::Equal)
            });
            Bet::Exacta {
                first: ranked[0],
                second: ranked[1],
            }
        }
    }
}

fn main() {
    let config = parse_args();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut stats = SimStats::default();

    for _ in 0..config.rounds {
        let board = OddsBoard::generate(NUM_HORSES, &mut rng);
        let bet = favorite_bet(&board, config.bet_type);

        let positions = run_race(NUM_HORSES, TRACK_LENGTH, MAX_STEP, &mut rng, |_| {});
        let order = finishing_order(&positions);

        let settlement = settle(&bet, config.stake, &order, &board);
        stats.record(config.stake, settlement.payout);
    }

    let net = stats.total_returned - stats.total_staked;
    if config.quiet {
        println!(
            "rounds={} bet={} hit_rate={:.4} staked={:.2} returned={:.2} edge={:+.4}",
            stats.rounds,
            config.bet_type.name(),
            stats.hit_rate(),
            stats.total_staked,
            stats.total_returned,
            stats.edge()
        );
    } else {
        println!("Furlong betting simulation");
        println!("  seed:      {}", config.seed);
        println!("  bet:       {} on the favorite", config.bet_type.name());
        println!("  rounds:    {}", stats.rounds);
        println!(
            "  hits:      {} ({:.2}% of rounds)",
            stats.wins,
            stats.hit_rate() * 100.0
        );
        println!("  staked:    $ {:.2}", stats.total_staked);
        println!("  returned:  $ {:.2}", stats.total_returned);
        println!("  net:       $ {:+.2}", net);
        println!("  edge:      {:+.4} per dollar staked", stats.edge());
    }
}
