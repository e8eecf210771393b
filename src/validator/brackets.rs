//! Bracket Balance Validator
//!
//! Step 2.1: The Gatekeeper
//!
//! Stack scan over the three bracket pairs `()`, `[]`, `{}`. Filter
//! expressions are rejected before anything downstream evaluates them:
//! a closer must match the most recent unclosed opener, and nothing may
//! remain open at the end. Invalid input is a verdict, never an error.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// Closer → the opener it must pop
    static ref PARTNER: HashMap<char, char> = {
        let mut m = HashMap::new();
        m.insert(')', '(');
        m.insert(']', '[');
        m.insert('}', '{');
        m
    };
}

/// How the scan treats characters outside the three bracket pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharPolicy {
    /// Push every non-closer onto the stack. A non-bracket character can
    /// never be popped, so it poisons the expression: `"(a)"` is invalid.
    /// This is the default.
    PushAll,

    /// Skip characters that are not brackets: `"(a)"` is valid. Opt-in
    /// for expressions that carry identifiers and operators.
    BracketsOnly,
}

impl Default for CharPolicy {
    fn default() -> Self {
        CharPolicy::PushAll
    }
}

impl std::fmt::Display for CharPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharPolicy::PushAll => write!(f, "STRICT"),
            CharPolicy::BracketsOnly => write!(f, "LENIENT"),
        }
    }
}

impl CharPolicy {
    /// Parse a config/CLI string; anything unrecognized is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strict" | "push_all" | "pushall" => Some(CharPolicy::PushAll),
            "lenient" | "brackets_only" | "bracketsonly" => Some(CharPolicy::BracketsOnly),
            _ => None,
        }
    }
}

/// First fault found by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BracketFault {
    /// A closer arrived with nothing open
    UnmatchedCloser { index: usize, closer: char },

    /// A closer arrived but the top of the stack is not its partner
    MismatchedPair { index: usize, closer: char, top: char },

    /// Input ended with entries still awaiting closure
    Unclosed { depth: usize },
}

impl std::fmt::Display for BracketFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketFault::UnmatchedCloser { index, closer } => {
                write!(f, "'{}' at index {} has nothing to close", closer, index)
            }
            BracketFault::MismatchedPair { index, closer, top } => {
                write!(f, "'{}' at index {} closes '{}' instead of its partner", closer, index, top)
            }
            BracketFault::Unclosed { depth } => {
                write!(f, "{} entr{} left unclosed at end of input", depth, if *depth == 1 { "y" } else { "ies" })
            }
        }
    }
}

/// Scan an expression and report the first fault, if any.
///
/// `Ok(())` iff the expression is well-nested and fully closed under the
/// given policy. Never panics; the scan copies plain `char`s onto a local
/// stack and touches nothing else.
pub fn scan(s: &str, policy: CharPolicy) -> Result<(), BracketFault> {
    let mut awaiting: Vec<char> = Vec::new();

    for (index, c) in s.chars().enumerate() {
        if let Some(&partner) = PARTNER.get(&c) {
            let Some(top) = awaiting.pop() else {
                return Err(BracketFault::UnmatchedCloser { index, closer: c });
            };
            if top != partner {
                return Err(BracketFault::MismatchedPair { index, closer: c, top });
            }
        } else if policy == CharPolicy::PushAll || matches!(c, '(' | '[' | '{') {
            awaiting.push(c);
        }
    }

    if awaiting.is_empty() {
        Ok(())
    } else {
        Err(BracketFault::Unclosed { depth: awaiting.len() })
    }
}

/// Is the expression well-nested and fully closed?
///
/// Strict by default: every character that is not a recognized closer is
/// pushed, so non-bracket characters fail validation (see [`CharPolicy`]).
pub fn is_valid(s: &str) -> bool {
    scan(s, CharPolicy::PushAll).is_ok()
}

/// [`is_valid`] under an explicit policy
pub fn is_valid_with(s: &str, policy: CharPolicy) -> bool {
    scan(s, policy).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_nested_expressions() {
        assert!(is_valid(""));
        assert!(is_valid("()"));
        assert!(is_valid("()[]{}"));
        assert!(is_valid("{[]}"));
        assert!(is_valid("([{}])"));
    }

    #[test]
    fn test_mismatched_and_unbalanced() {
        assert!(!is_valid("(]"));
        assert!(!is_valid("([)]"));
        assert!(!is_valid(")"));
        assert!(!is_valid("("));
        assert!(!is_valid("((("));
        assert!(!is_valid("())"));
    }

    #[test]
    fn test_push_all_poisons_on_other_chars() {
        // Non-closers are pushed, so they block any later closer and
        // linger on the stack at end of input.
        assert!(!is_valid("a"));
        assert!(!is_valid("(a)"));
        assert!(!is_valid("ab"));
        assert!(!is_valid("(x+y)*2"));
    }

    #[test]
    fn test_brackets_only_ignores_other_chars() {
        assert!(is_valid_with("(x+y)*2", CharPolicy::BracketsOnly));
        assert!(is_valid_with("a", CharPolicy::BracketsOnly));
        assert!(is_valid_with("close[0] > open[0]", CharPolicy::BracketsOnly));
        // Bracket faults still fail
        assert!(!is_valid_with("(x+y]", CharPolicy::BracketsOnly));
        assert!(!is_valid_with("f(x", CharPolicy::BracketsOnly));
    }

    #[test]
    fn test_validity_is_closed_under_concatenation() {
        // Both scans end on an empty stack, so chaining them does too.
        let valid = ["", "()", "()[]{}", "{[]}", "([{}])"];
        for a in valid {
            for b in valid {
                let joined = format!("{}{}", a, b);
                assert!(is_valid(&joined), "expected {:?} to stay valid", joined);
            }
        }
    }

    #[test]
    fn test_invalid_parts_can_concatenate_to_valid() {
        // Validity is not compositional from parts: both halves fail alone.
        assert!(!is_valid("("));
        assert!(!is_valid(")"));
        assert!(is_valid("()"));

        assert!(!is_valid("({"));
        assert!(!is_valid("})"));
        assert!(is_valid("({})"));
    }

    #[test]
    fn test_scan_reports_first_fault() {
        assert_eq!(
            scan(")", CharPolicy::PushAll),
            Err(BracketFault::UnmatchedCloser { index: 0, closer: ')' })
        );
        assert_eq!(
            scan("(]", CharPolicy::PushAll),
            Err(BracketFault::MismatchedPair { index: 1, closer: ']', top: '(' })
        );
        assert_eq!(
            scan("([)]", CharPolicy::PushAll),
            Err(BracketFault::MismatchedPair { index: 2, closer: ')', top: '[' })
        );
        assert_eq!(
            scan("({", CharPolicy::PushAll),
            Err(BracketFault::Unclosed { depth: 2 })
        );
        // Under PushAll the poisoning char is what gets popped
        assert_eq!(
            scan("(a)", CharPolicy::PushAll),
            Err(BracketFault::MismatchedPair { index: 2, closer: ')', top: 'a' })
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(CharPolicy::parse("strict"), Some(CharPolicy::PushAll));
        assert_eq!(CharPolicy::parse("LENIENT"), Some(CharPolicy::BracketsOnly));
        assert_eq!(CharPolicy::parse("whatever"), None);
    }
}
