//! Token definitions for the Jam lexer
//!
//!     Every byte of the input ends up inside exactly one [Token]. Whitespace and comments are
//!     tokens too, so a consumer can re-render the original text with styling overlaid.
//!
//!     The kind taxonomy mirrors the Pygments token hierarchy, which is what highlighting
//!     consumers expect. See [TokenKind::as_str] and [TokenKind::css_class].

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The closed set of token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Whitespace,
    CommentLine,
    CommentBlock,
    Keyword,
    Builtin,
    /// Names introduced by `local` and `for` declarations.
    Identifier,
    /// Name of a rule being defined.
    RuleName,
    ClassName,
    NamespaceName,
    /// Rule parameters and variables bound by an actions definition.
    VariableName,
    /// Grist tags (`<toolset>`) and action modifiers.
    AttributeName,
    Punctuation,
    /// `$(...)` variable expansions, including their delimiters.
    StringInterpolation,
    /// Shell text inside an action body.
    StringHeredoc,
    PlainText,
}

pub const TOKEN_KINDS: &[TokenKind] = &[
    TokenKind::Whitespace,
    TokenKind::CommentLine,
    TokenKind::CommentBlock,
    TokenKind::Keyword,
    TokenKind::Builtin,
    TokenKind::Identifier,
    TokenKind::RuleName,
    TokenKind::ClassName,
    TokenKind::NamespaceName,
    TokenKind::VariableName,
    TokenKind::AttributeName,
    TokenKind::Punctuation,
    TokenKind::StringInterpolation,
    TokenKind::StringHeredoc,
    TokenKind::PlainText,
];

impl TokenKind {
    /// Dotted, Pygments-style name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::CommentLine => "comment.single",
            TokenKind::CommentBlock => "comment.multiline",
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "name.builtin",
            TokenKind::Identifier => "name",
            TokenKind::RuleName => "name.function",
            TokenKind::ClassName => "name.class",
            TokenKind::NamespaceName => "name.namespace",
            TokenKind::VariableName => "name.variable",
            TokenKind::AttributeName => "name.attribute",
            TokenKind::Punctuation => "punctuation",
            TokenKind::StringInterpolation => "string.interpol",
            TokenKind::StringHeredoc => "string.heredoc",
            TokenKind::PlainText => "text",
        }
    }

    /// Short CSS class used by Pygments' HTML formatter. Plain text has no class.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "w",
            TokenKind::CommentLine => "c1",
            TokenKind::CommentBlock => "cm",
            TokenKind::Keyword => "k",
            TokenKind::Builtin => "nb",
            TokenKind::Identifier => "n",
            TokenKind::RuleName => "nf",
            TokenKind::ClassName => "nc",
            TokenKind::NamespaceName => "nn",
            TokenKind::VariableName => "nv",
            TokenKind::AttributeName => "na",
            TokenKind::Punctuation => "p",
            TokenKind::StringInterpolation => "si",
            TokenKind::StringHeredoc => "sh",
            TokenKind::PlainText => "",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::CommentLine | TokenKind::CommentBlock)
    }

    /// Whitespace and comments: tokens that carry no syntax.
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Whitespace || self.is_comment()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified span of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact substring of the input covered by this token.
    pub text: &'a str,
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Token {
            kind,
            text,
            start,
            end: start + text.len(),
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
