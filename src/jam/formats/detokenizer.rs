//! Detokenizer
//!
//! Converts a token stream back into source text. Tokens carry their exact source slice, so
//! this is a plain concatenation; the round trip is the losslessness check used in tests.

use crate::jam::token::Token;

pub fn detokenize(tokens: &[Token<'_>]) -> String {
    let capacity = tokens.iter().map(Token::len).sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        out.push_str(token.text);
    }
    out
}

/// Whether `tokens` tile `source` exactly: contiguous, in order, covering every byte.
pub fn covers_source(tokens: &[Token<'_>], source: &str) -> bool {
    let mut offset = 0;
    for token in tokens {
        if token.start != offset || source.get(token.span()) != Some(token.text) {
            return false;
        }
        offset = token.end;
    }
    offset == source.len()
}
