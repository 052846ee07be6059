//! Tag listing
//!
//! One token per line, `kind "escaped text"`, optionally followed by the byte range. Meant
//! for reading token streams in a terminal and for snapshot tests.

use crate::jam::token::Token;

pub fn to_tag_string(tokens: &[Token<'_>], show_offsets: bool) -> String {
    tokens
        .iter()
        .map(|token| tag_line(token, show_offsets))
        .collect()
}

fn tag_line(token: &Token<'_>, show_offsets: bool) -> String {
    if show_offsets {
        format!(
            "{} {:?} @{}..{}\n",
            token.kind, token.text, token.start, token.end
        )
    } else {
        format!("{} {:?}\n", token.kind, token.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jam::lexing::tokenize_all;

    #[test]
    fn test_tag_listing() {
        let tokens = tokenize_all("rule a\n");
        assert_eq!(
            to_tag_string(&tokens, false),
            "keyword \"rule\"\nwhitespace \" \"\nname.function \"a\"\nwhitespace \"\\n\"\n"
        );
    }

    #[test]
    fn test_tag_listing_with_offsets() {
        let tokens = tokenize_all("if");
        assert_eq!(to_tag_string(&tokens, true), "keyword \"if\" @0..2\n");
    }

    #[test]
    fn test_offsets_follow_each_token() {
        let tokens = tokenize_all("x\t#|c|#");
        assert_eq!(
            to_tag_string(&tokens, true),
            "text \"x\" @0..1\nwhitespace \"\\t\" @1..2\ncomment.multiline \"#|c|#\" @2..7\n"
        );
    }

    #[test]
    fn test_empty_stream_is_empty_listing() {
        assert_eq!(to_tag_string(&[], true), "");
    }
}
