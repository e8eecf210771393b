//! Single-Trade Window Scanner
//!
//! Step 1.1: The Scanner
//!
//! Finds the best buy-low/sell-high window in a price series in one
//! forward pass: track the cheapest price seen so far and the best
//! spread against it. The O(n²) pairwise scan is kept as the reference
//! semantics and cross-checked in tests and the stress harness.

use serde::Serialize;

/// The winning buy/sell window for a price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeWindow {
    pub buy_index: usize,
    pub sell_index: usize,
    pub buy_price: u64,
    pub sell_price: u64,
    pub profit: u64,
}

impl TradeWindow {
    pub fn spread_pct(&self) -> f64 {
        if self.buy_price == 0 {
            return 0.0;
        }
        (self.profit as f64 / self.buy_price as f64) * 100.0
    }

    pub fn hold_ticks(&self) -> usize {
        self.sell_index - self.buy_index
    }

    /// Structural invariants: buy strictly before sell, prices consistent
    /// with the recorded profit, and profit strictly positive (a zero-profit
    /// window is never reported).
    pub fn is_valid(&self) -> bool {
        if self.buy_index >= self.sell_index {
            return false;
        }
        if self.sell_price <= self.buy_price {
            return false;
        }
        self.sell_price - self.buy_price == self.profit
    }
}

/// Maximum profit from one buy followed by one later sell, floored at 0.
///
/// Single pass: for each price, widen the best spread against the cheapest
/// price seen so far, then lower the floor if the current price is cheaper.
/// Empty and single-element series yield 0.
pub fn max_profit(prices: &[u64]) -> u64 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0;
    };

    let mut min_so_far = first;
    let mut best = 0u64;

    for &price in rest {
        if price > min_so_far {
            best = best.max(price - min_so_far);
        } else {
            min_so_far = price;
        }
    }

    best
}

/// Reference semantics: every i < j pair, running maximum, floored at 0.
///
/// Quadratic on purpose. The linear scan in [`max_profit`] must agree with
/// this for every input; `stress-check` and the equivalence tests enforce it.
pub fn max_profit_exhaustive(prices: &[u64]) -> u64 {
    let mut best = 0u64;

    for i in 0..prices.len() {
        for j in (i + 1)..prices.len() {
            if prices[j] > prices[i] {
                best = best.max(prices[j] - prices[i]);
            }
        }
    }

    best
}

/// Like [`max_profit`], but reports which window wins.
///
/// Returns `None` exactly when no positive-profit window exists (so
/// `best_window(p).map_or(0, |w| w.profit) == max_profit(p)` always holds).
/// Ties resolve to the earliest maximal window found by the scan.
pub fn best_window(prices: &[u64]) -> Option<TradeWindow> {
    if prices.len() < 2 {
        return None;
    }

    let mut min_index = 0;
    let mut best: Option<TradeWindow> = None;

    for (i, &price) in prices.iter().enumerate().skip(1) {
        let floor = prices[min_index];

        if price > floor {
            let profit = price - floor;
            if best.map_or(true, |w| profit > w.profit) {
                best = Some(TradeWindow {
                    buy_index: min_index,
                    sell_index: i,
                    buy_price: floor,
                    sell_price: price,
                    profit,
                });
            }
        } else if price < floor {
            min_index = i;
        }
    }

    best
}
