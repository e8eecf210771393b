//! Diagnostic tool - Check configuration
//!
//! Run with: cargo run --bin diagnose

use std::env;

fn main() {
    println!("🔍 SCOUT DIAGNOSTIC CHECK\n");

    // Load .env
    dotenvy::dotenv().ok();

    println!("═══════════════════════════════════════════════════");
    println!("                  CONFIGURATION                     ");
    println!("═══════════════════════════════════════════════════\n");

    let checks = [
        ("MIN_PROFIT", "1", "Minimum actionable window profit"),
        ("BRACKET_POLICY", "strict", "strict = reject non-bracket chars, lenient = ignore them"),
        ("PRINT_SUMMARY", "true", "Print the styled sweep summary?"),
    ];

    for (key, default, desc) in checks {
        let value = env::var(key).unwrap_or_else(|_| default.to_string());
        let marker = if env::var(key).is_err() { "(default)" } else { "(from .env)" };
        println!("  {}: {} {}", key, value, marker);
        println!("    └─ {}\n", desc);
    }

    let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "scout=info".to_string());
    println!("  RUST_LOG: {}", log_filter);

    println!("\n═══════════════════════════════════════════════════");
    println!("                     STATUS                         ");
    println!("═══════════════════════════════════════════════════\n");

    let policy = env::var("BRACKET_POLICY").unwrap_or_else(|_| "strict".to_string());
    match policy.to_lowercase().as_str() {
        "strict" | "push_all" | "pushall" => {
            println!("  📋 STRICT POLICY");
            println!("     → Every non-closer is pushed onto the stack");
            println!("     → Non-bracket characters poison validation");
            println!("     → \"(a)\" is rejected");
        }
        "lenient" | "brackets_only" | "bracketsonly" => {
            println!("  🔬 LENIENT POLICY");
            println!("     → Only the three bracket pairs are tracked");
            println!("     → Identifiers and operators are ignored");
            println!("     → \"(a)\" is balanced");
        }
        _ => {
            println!("  ❓ Unknown policy: {} (scout will refuse to start)", policy);
        }
    }

    println!("\n✅ Diagnostic complete!\n");
}
