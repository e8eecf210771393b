//! Phase 1: The Scanner
//!
//! Responsible for:
//! - Finding the best single buy/sell window in a price series
//! - Filtering out dust windows below the profit threshold

mod sweep;
mod window;

pub use sweep::{ProfitSweep, SeriesScan};
pub use window::{best_window, max_profit, max_profit_exhaustive, TradeWindow};
