//! Registration metadata
//!
//!     Highlighting hosts discover a lexer through a small static record: a display name,
//!     short aliases, the filename globs it claims and its MIME types. This module holds that
//!     record for Jam and the lookups a host needs to pick the lexer for a file.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::Path;

/// Static description of a lexer, as seen by a host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexerMetadata {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub const JAM: LexerMetadata = LexerMetadata {
    name: "Jam",
    aliases: &["jam", "bjam", "b2"],
    filenames: &["*.jam", "Jamfile", "Jamroot"],
    mimetypes: &["text/x-jam"],
};

static JAM_FILENAME_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| JAM.filenames.iter().copied().map(glob_to_regex).collect());

/// Translate a filename glob (`*` and `?` wildcards) into an anchored regex.
fn glob_to_regex(glob: &str) -> Regex {
    let mut pattern = String::from("^");
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            c => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    Regex::new(&pattern).expect("escaped globs are valid patterns")
}

impl LexerMetadata {
    /// Whether the file name component of `path` matches one of the claimed globs.
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if self == &JAM {
            return JAM_FILENAME_PATTERNS.iter().any(|re| re.is_match(name));
        }
        self.filenames
            .iter()
            .any(|glob| glob_to_regex(glob).is_match(name))
    }

    /// Case-insensitive alias lookup.
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    pub fn matches_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes.iter().any(|m| m.eq_ignore_ascii_case(mimetype))
    }
}

/// All lexers this crate provides.
pub const LEXERS: &[LexerMetadata] = &[JAM];

pub fn find_lexer_for_filename(path: impl AsRef<Path>) -> Option<&'static LexerMetadata> {
    LEXERS.iter().find(|m| m.matches_filename(path.as_ref()))
}

pub fn find_lexer_by_alias(alias: &str) -> Option<&'static LexerMetadata> {
    LEXERS.iter().find(|m| m.matches_alias(alias))
}
