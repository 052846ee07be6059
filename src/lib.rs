//! # jam-lex
//!
//! A lexer for the Jam / Boost.Build (B2) build-description language, for syntax highlighting
//! and light analysis.
//!
//! The lexer turns source text into a lossless, ordered stream of classified tokens. It is
//! driven by an explicit stack of lexical modes, so rule signatures, actions blocks with their
//! shell bodies, `<grist>` tags and nested `$(...)` expansions are all recognized in context.
//!
//! ```ignore
//! use jam_lex::jam::lexing::tokenize;
//!
//! for token in tokenize("exe hello : hello.cpp ;") {
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! ```
//!
//! See [jam::lexing] for the state machine and [jam::formats] for the renderers.

pub mod jam;

pub use jam::lexing::{tokenize, tokenize_all, Lexer};
pub use jam::metadata::{LexerMetadata, JAM};
pub use jam::token::{Token, TokenKind};
