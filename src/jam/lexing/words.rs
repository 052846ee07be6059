//! Fixed word tables
//!
//!     Jam separates every token with whitespace, so a "word" is the maximal run of
//!     non-whitespace characters at the cursor. A word belongs to a table only if the whole run
//!     is one of the listed strings: `rules` is not the keyword `rule`, and hyphenated builtins
//!     such as `use-project` are matched as single units, never as a shorter prefix.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const KEYWORDS: &[&str] = &[
    "local", "include", "return", "break", "continue", "for", "in", "switch", "if", "else",
    "module", "class", "while", "rule", "on", "actions", "case", "bind", "updated", "together",
    "ignore", "quietly", "piecemeal", "existing",
];

/// Modifiers accepted between `actions` and the action name.
pub const ACTION_MODIFIERS: &[&str] = &[
    "updated",
    "together",
    "ignore",
    "quietly",
    "piecemeal",
    "existing",
];

/// Builtin rules of the Jam engine followed by the common B2 project rules.
pub const BUILTINS: &[&str] = &[
    "Always", "ALWAYS", "Depends", "DEPENDS", "echo", "Echo", "ECHO", "exit", "Exit", "EXIT",
    "Glob", "GLOB", "GLOB-RECURSIVELY", "Includes", "INCLUDES", "REBUILDS",
    "SPLIT_BY_CHARACTERS", "NoCare", "NOCARE", "NOTIME", "NotFile", "NOTFILE", "NoUpdate",
    "NOUPDATE", "Temporary", "TEMPORARY", "ISFILE", "HdrMacro", "HDRMACRO", "FAIL_EXPECTED",
    "RMOLD", "UPDATE", "subst", "SUBST", "RULENAMES", "VARNAMES", "DELETE_MODULE", "IMPORT",
    "EXPORT", "CALLER_MODULE", "BACKTRACE", "PWD", "IMPORT_MODULE", "IMPORTED_MODULES",
    "INSTANCE", "SORT", "NORMALIZE_PATH", "CALC", "NATIVE_RULE", "HAS_NATIVE_RULE",
    "USER_MODULE", "NEAREST_USER_LOCATION", "PYTHON_IMPORT_RULE", "W32_GETREG",
    "W32_GETREGNAMES", "SHELL", "COMMAND", "MD5", "FILE_OPEN", "PAD", "PRECIOUS", "SELF_PATH",
    "MAKEDIR", "READLINK", "GLOB_ARCHIVE",
    // B2
    "import", "using", "peek", "poke", "record-binding", "project", "use-project",
    "build-project", "exe", "lib", "alias", "obj", "explicit", "install", "make", "notfile",
    "unit-test", "compile", "compile-fail", "link", "link-fail", "run", "run-fail",
    "check-target-builds", "glob", "glob-tree", "always", "constant", "path-constant",
];

/// Operators and separators that stand alone as words.
pub const PUNCTUATION: &[&str] = &[
    "{", "}", "[", "]", "(", ")", ";", ":", "=", "+=", "?=", "-=", "!=", "!", "&&", "||", "<",
    ">", "<=", ">=",
];

/// An immutable set of whole words.
#[derive(Debug)]
pub struct WordSet {
    name: &'static str,
    words: HashSet<&'static str>,
}

impl WordSet {
    fn new(name: &'static str, words: &[&'static str]) -> Self {
        WordSet {
            name,
            words: words.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Length in bytes of the word at the start of `input`, if the whole word is in the set.
    pub fn match_word(&self, input: &str) -> Option<usize> {
        let word = leading_word(input);
        if !word.is_empty() && self.contains(word) {
            Some(word.len())
        } else {
            None
        }
    }
}

pub static KEYWORD_SET: Lazy<WordSet> = Lazy::new(|| WordSet::new("keywords", KEYWORDS));
pub static BUILTIN_SET: Lazy<WordSet> = Lazy::new(|| WordSet::new("builtins", BUILTINS));
pub static MODIFIER_SET: Lazy<WordSet> =
    Lazy::new(|| WordSet::new("action-modifiers", ACTION_MODIFIERS));
pub static PUNCTUATION_SET: Lazy<WordSet> =
    Lazy::new(|| WordSet::new("punctuation", PUNCTUATION));

/// The maximal run of non-whitespace characters at the start of `input`.
pub fn leading_word(input: &str) -> &str {
    let end = input
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    &input[..end]
}
