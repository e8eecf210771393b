//! Scout - price-window scanning and bracket sanity checking
//!
//! Two independent, stateless cores behind a thin CLI:
//! - `scanner`: best single buy/sell window in a price series
//! - `validator`: bracket balance of filter expressions
//!
//! Both cores are pure synchronous functions; everything fallible lives
//! in the config and CLI layers.

pub mod config;
pub mod scanner;
pub mod validator;

pub use config::Config;
pub use scanner::{best_window, max_profit, max_profit_exhaustive, ProfitSweep, TradeWindow};
pub use validator::{is_valid, is_valid_with, CharPolicy};
