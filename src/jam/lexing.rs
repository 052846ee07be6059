//! Lexer
//!
//!     Tokenization of Jam / B2 sources with a table-driven, mode-stack scanner.
//!
//!     The scanner keeps an explicit stack of lexical modes. The mode on top decides which rules
//!     apply at the cursor: root statements, a rule signature, an actions header, a shell
//!     action body, a value with grist tags, or a `$(...)` expansion. Rules are data (see
//!     [tables]); the loop that runs them is in [machine].
//!
//!     The lexer is total. Every input, including malformed or binary text, produces a finite
//!     token sequence whose texts concatenate back to the input.
//!
//! Modules
//!
//!         - [words]: keyword, builtin, modifier and punctuation tables.
//!         - [rules]: modes, rules, matchers and stack transitions.
//!         - [tables]: the per-mode rule lists.
//!         - [machine]: the mode stack and the lazy dispatch loop.

pub mod machine;
pub mod rules;
pub mod tables;
pub mod words;

pub use machine::{Lexer, ModeStack};
pub use rules::{Mode, Rule, Transition};

use crate::jam::token::Token;

/// Lazily tokenize `source`. Each call starts from a fresh mode stack.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Tokenize `source` and collect every token.
pub fn tokenize_all(source: &str) -> Vec<Token<'_>> {
    tokenize(source).collect()
}
