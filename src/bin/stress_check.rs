//! Equivalence harness - linear scanner vs pairwise reference
//!
//! Run with: cargo run --bin stress-check
//!
//! The single-pass scanner must agree with the O(n²) reference on every
//! input. The in-crate tests prove it exhaustively for small series; this
//! tool hammers long random series as well.

use console::style;
use rand::Rng;

use scout::scanner::{best_window, max_profit, max_profit_exhaustive};

const ROUNDS: usize = 10_000;
const MAX_LEN: usize = 128;
const MAX_PRICE: u64 = 100_000;

fn main() {
    println!("🔬 SCOUT STRESS CHECK - {} random series\n", ROUNDS);

    let mut rng = rand::thread_rng();
    let mut profitable = 0usize;
    let mut flat = 0usize;

    for round in 0..ROUNDS {
        let len = rng.gen_range(0..=MAX_LEN);
        let series: Vec<u64> = (0..len).map(|_| rng.gen_range(0..MAX_PRICE)).collect();

        let fast = max_profit(&series);
        let slow = max_profit_exhaustive(&series);

        if fast != slow {
            println!(
                "{}",
                style(format!(
                    "✗ DIVERGED on round {}: linear={} reference={} series={:?}",
                    round, fast, slow, series
                ))
                .red()
                .bold()
            );
            std::process::exit(1);
        }

        match best_window(&series) {
            Some(window) => {
                if !window.is_valid() || window.profit != fast {
                    println!(
                        "{}",
                        style(format!(
                            "✗ BAD WINDOW on round {}: {:?} vs profit {} series={:?}",
                            round, window, fast, series
                        ))
                        .red()
                        .bold()
                    );
                    std::process::exit(1);
                }
                profitable += 1;
            }
            None => {
                if fast != 0 {
                    println!(
                        "{}",
                        style(format!(
                            "✗ MISSING WINDOW on round {}: profit {} but no window, series={:?}",
                            round, fast, series
                        ))
                        .red()
                        .bold()
                    );
                    std::process::exit(1);
                }
                flat += 1;
            }
        }
    }

    println!(
        "{}",
        style(format!(
            "✓ {} rounds agreed ({} with a window, {} flat/falling)",
            ROUNDS, profitable, flat
        ))
        .green()
        .bold()
    );
}
