//! Phase 2: The Gatekeeper
//!
//! Responsible for:
//! - Rejecting filter expressions with unbalanced brackets before
//!   anything downstream tries to evaluate them

mod brackets;

pub use brackets::{is_valid, is_valid_with, scan, BracketFault, CharPolicy};
