//! Runtime configuration for Scout
//!
//! Knobs come from environment variables (with `.env` support) or a TOML
//! file. Absent or unparseable numeric values fall back to defaults; an
//! explicitly set but unrecognized BRACKET_POLICY is rejected at load
//! time rather than silently downgraded.

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::validator::CharPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // ========== Sweep Settings ==========
    /// Minimum window profit to mark a series actionable
    pub min_profit: u64,

    // ========== Validator Settings ==========
    /// How the bracket scan treats non-bracket characters
    pub bracket_policy: CharPolicy,

    // ========== Output Settings ==========
    /// Print the styled sweep summary after scanning
    pub print_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_profit: 1,
            bracket_policy: CharPolicy::PushAll,
            print_summary: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let bracket_policy = match env::var("BRACKET_POLICY") {
            Ok(raw) => CharPolicy::parse(&raw).ok_or_else(|| {
                eyre::eyre!("Invalid BRACKET_POLICY '{}' - use 'strict' or 'lenient'", raw)
            })?,
            Err(_) => CharPolicy::PushAll,
        };

        Ok(Self {
            min_profit: env::var("MIN_PROFIT")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1),
            bracket_policy,
            print_summary: env::var("PRINT_SUMMARY")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Sanity-check the loaded values
    pub fn validate(&self) -> Result<()> {
        if self.min_profit == 0 {
            return Err(eyre::eyre!(
                "MIN_PROFIT = 0 makes every window actionable - set it to 1 or higher"
            ));
        }
        Ok(())
    }

    /// Print configuration summary
    pub fn print_config(&self) {
        println!("╔════════════════════════════════════════════════════════════╗");
        println!("║                  SCOUT - CONFIGURATION                     ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║ Min Profit:        {:^40} ║", self.min_profit);
        println!("║ Bracket Policy:    {:^40} ║", self.bracket_policy.to_string());
        println!("║ Print Summary:     {:^40} ║", self.print_summary);
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bracket_policy, CharPolicy::PushAll);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = Config {
            min_profit: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            min_profit: 25,
            bracket_policy: CharPolicy::BracketsOnly,
            print_summary: false,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.min_profit, 25);
        assert_eq!(back.bracket_policy, CharPolicy::BracketsOnly);
        assert!(!back.print_summary);
    }
}
