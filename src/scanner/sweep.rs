//! Sweep Filter
//!
//! Step 1.2: The Filter
//!
//! Runs the window scanner over a batch of labeled price series and
//! separates actionable windows from dust below the profit threshold.
//!
//! Success Criteria:
//! - Console filters out sub-threshold windows
//! - Console highlights: "ACTIONABLE: AAPL +5 (buy @1, sell @6)"

use chrono::Local;
use console::style;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::window::{best_window, TradeWindow};

/// Scan result for one labeled series
#[derive(Debug, Clone, Serialize)]
pub struct SeriesScan {
    /// Caller-supplied label (symbol, feed name, ...)
    pub label: String,

    /// Number of ticks in the series
    pub ticks: usize,

    /// Winning window, if any positive-profit window exists
    pub window: Option<TradeWindow>,
}

impl SeriesScan {
    pub fn profit(&self) -> u64 {
        self.window.map_or(0, |w| w.profit)
    }

    /// One-line rendering of the window for console output
    pub fn format_window(&self) -> String {
        match &self.window {
            Some(w) => format!(
                "+{} (buy {} @ tick {}, sell {} @ tick {})",
                w.profit, w.buy_price, w.buy_index, w.sell_price, w.sell_index
            ),
            None => "no profitable window".to_string(),
        }
    }
}

/// Threshold filter over a batch of scans
pub struct ProfitSweep {
    /// Minimum profit for a window to be worth acting on
    min_profit: u64,
}

impl ProfitSweep {
    pub fn new(min_profit: u64) -> Self {
        Self { min_profit }
    }

    pub fn min_profit(&self) -> u64 {
        self.min_profit
    }

    /// Scan a single labeled series
    pub fn analyze(&self, label: &str, prices: &[u64]) -> SeriesScan {
        let window = best_window(prices);

        if let Some(w) = &window {
            debug!(
                "{}: window +{} over {} ticks ({:.2}%)",
                label,
                w.profit,
                w.hold_ticks(),
                w.spread_pct()
            );
        } else {
            debug!("{}: no profitable window in {} ticks", label, prices.len());
        }

        SeriesScan {
            label: label.to_string(),
            ticks: prices.len(),
            window,
        }
    }

    /// Keep only scans at or above the threshold, best first
    pub fn filter_actionable<'a>(&self, scans: &'a [SeriesScan]) -> Vec<&'a SeriesScan> {
        let mut actionable = Vec::new();
        let mut filtered_count = 0;

        for scan in scans {
            if scan.window.is_some() && scan.profit() >= self.min_profit {
                info!(
                    "{}",
                    style(format!("💰 ACTIONABLE: {} {}", scan.label, scan.format_window()))
                        .green()
                        .bold()
                );
                actionable.push(scan);
            } else {
                filtered_count += 1;
                debug!("Filtered: {} | {}", scan.label, scan.format_window());
            }
        }

        if filtered_count > 0 {
            info!(
                "Filtered out {} series below the +{} profit threshold",
                filtered_count, self.min_profit
            );
        }

        actionable.sort_by(|a, b| b.profit().cmp(&a.profit()));
        actionable
    }

    /// Print a summary of all scans
    pub fn print_summary(&self, scans: &[SeriesScan]) {
        if scans.is_empty() {
            warn!("No series scanned");
            return;
        }

        let actionable = self.filter_actionable(scans);

        println!();
        println!("{}", style("═══ SWEEP SUMMARY ═══").yellow().bold());
        println!();
        println!(
            "Scanned {} series at {} | threshold: +{}",
            scans.len(),
            Local::now().format("%H:%M:%S"),
            self.min_profit
        );
        println!();

        for (i, scan) in actionable.iter().enumerate() {
            println!(
                "  {}. {} {} | {}",
                i + 1,
                style("✓ ACTIONABLE").green(),
                style(&scan.label).cyan().bold(),
                scan.format_window()
            );
        }

        let quiet = scans.len() - actionable.len();
        if quiet > 0 {
            println!(
                "  ... {} series with {} (threshold +{})",
                quiet,
                style("nothing actionable").dim(),
                self.min_profit
            );
        }
        println!();
    }
}

impl Default for ProfitSweep {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_batch(sweep: &ProfitSweep) -> Vec<SeriesScan> {
        vec![
            sweep.analyze("RISING", &[1, 2, 3, 4, 5]),
            sweep.analyze("CHOPPY", &[7, 1, 5, 3, 6, 4]),
            sweep.analyze("FALLING", &[7, 6, 4, 3, 1]),
            sweep.analyze("FLAT", &[3, 3, 3]),
        ]
    }

    #[test]
    fn test_analyze_records_window() {
        let sweep = ProfitSweep::new(1);
        let scan = sweep.analyze("CHOPPY", &[7, 1, 5, 3, 6, 4]);

        assert_eq!(scan.ticks, 6);
        assert_eq!(scan.profit(), 5);
        assert!(scan.window.unwrap().is_valid());
    }

    #[test]
    fn test_filter_drops_dust_and_sorts() {
        let sweep = ProfitSweep::new(5);
        let scans = scan_batch(&sweep);
        let actionable = sweep.filter_actionable(&scans);

        // RISING (+4) is below the +5 threshold; FALLING/FLAT have no window
        assert_eq!(actionable.len(), 1);
        assert_eq!(actionable[0].label, "CHOPPY");
    }

    #[test]
    fn test_filter_sorts_best_first() {
        let sweep = ProfitSweep::new(1);
        let scans = scan_batch(&sweep);
        let actionable = sweep.filter_actionable(&scans);

        assert_eq!(actionable.len(), 2);
        assert_eq!(actionable[0].label, "CHOPPY");
        assert_eq!(actionable[1].label, "RISING");
    }

    #[test]
    fn test_quiet_series_report_no_window() {
        let sweep = ProfitSweep::default();
        let scan = sweep.analyze("FALLING", &[7, 6, 4, 3, 1]);

        assert_eq!(scan.profit(), 0);
        assert_eq!(scan.format_window(), "no profitable window");
    }
}
