//! Rule engine primitives
//!
//!     A mode is an ordered list of [Rule]s. A rule pairs a [Matcher] with the kinds it emits and
//!     the [Transition] applied to the mode stack after it fires. Rules are tried top to bottom
//!     and the first one that matches at the cursor wins, so declaration order is part of the
//!     grammar.
//!
//!     Four matcher flavors cover every construct of the language:
//!         - anchored regex patterns, whose capture groups split one match into several tokens;
//!         - whole-word lookups in a fixed [WordSet];
//!         - delimited spans (`open ... close`), whose closing search the lexer can cache;
//!         - zero-width look-ahead on the next character, used only to change modes.

use super::tables;
use super::words::WordSet;
use crate::jam::token::TokenKind;
use regex::Regex;
use std::fmt;
use std::ops::Range;

/// Named lexical contexts. The stack always has [Mode::Root] at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Root,
    RuleName,
    RuleArgs,
    RuleParams,
    ActionsDef,
    ActionsBind,
    ActionsBody,
    ActionsNested,
    Value,
    Grist,
    Variable,
}

pub const MODES: &[Mode] = &[
    Mode::Root,
    Mode::RuleName,
    Mode::RuleArgs,
    Mode::RuleParams,
    Mode::ActionsDef,
    Mode::ActionsBind,
    Mode::ActionsBody,
    Mode::ActionsNested,
    Mode::Value,
    Mode::Grist,
    Mode::Variable,
];

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::RuleName => "rule_name",
            Mode::RuleArgs => "rule_args",
            Mode::RuleParams => "rule_params",
            Mode::ActionsDef => "actions_def",
            Mode::ActionsBind => "actions_bind",
            Mode::ActionsBody => "actions_body",
            Mode::ActionsNested => "actions_nested",
            Mode::Value => "value",
            Mode::Grist => "grist",
            Mode::Variable => "variable",
        }
    }

    /// The effective rule list of this mode, included sub-tables first.
    pub fn rules(self) -> &'static [Rule] {
        tables::rules_for(self)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happens to the mode stack after a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(Mode),
    Pop,
    /// Unwind several nested contexts at once.
    PopN(usize),
    Replace(Mode),
}

impl Transition {
    /// Whether applying this transition always alters the stack (when above the root).
    pub fn changes_stack(self) -> bool {
        !matches!(self, Transition::Stay | Transition::PopN(0))
    }
}

pub enum Matcher {
    Pattern(Regex),
    Word(&'static WordSet),
    /// `open`, then everything up to and including the first `close` after it.
    Delimited {
        open: &'static str,
        close: &'static str,
    },
    Peek(fn(char) -> bool),
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Pattern(regex) => write!(f, "Pattern({})", regex.as_str()),
            Matcher::Word(set) => write!(f, "Word({})", set.name()),
            Matcher::Delimited { open, close } => write!(f, "Delimited({open} .. {close})"),
            Matcher::Peek(_) => f.write_str("Peek"),
        }
    }
}

/// A successful match at the cursor, in offsets relative to the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub len: usize,
    /// One entry per emitted kind. `None` for optional groups that did not participate.
    pub groups: Vec<Option<Range<usize>>>,
}

impl RuleMatch {
    pub fn whole(len: usize) -> Self {
        RuleMatch {
            len,
            groups: vec![Some(0..len)],
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    pub matcher: Matcher,
    /// Kinds emitted for the match. A single kind covers the whole match; several kinds map
    /// onto the pattern's capture groups, left to right.
    pub kinds: &'static [TokenKind],
    pub transition: Transition,
}

impl Rule {
    /// A regex rule. The pattern is anchored at the cursor.
    ///
    /// When `kinds` has more than one entry the pattern must be a concatenation of exactly that
    /// many capture groups (optionally wrapped in non-capturing groups), so the groups tile the
    /// whole match.
    pub fn pattern(pattern: &str, kinds: &'static [TokenKind], transition: Transition) -> Self {
        let anchored = format!(r"\A(?:{})", pattern);
        let regex = Regex::new(&anchored).expect("rule patterns are static and valid");
        Rule {
            matcher: Matcher::Pattern(regex),
            kinds,
            transition,
        }
    }

    pub fn word(set: &'static WordSet, kinds: &'static [TokenKind], transition: Transition) -> Self {
        Rule {
            matcher: Matcher::Word(set),
            kinds,
            transition,
        }
    }

    /// A span from `open` to the first `close` after it. Does not match when `close` never
    /// follows, so later rules get their turn.
    pub fn delimited(
        open: &'static str,
        close: &'static str,
        kinds: &'static [TokenKind],
        transition: Transition,
    ) -> Self {
        debug_assert!(!open.is_empty() && !close.is_empty());
        Rule {
            matcher: Matcher::Delimited { open, close },
            kinds,
            transition,
        }
    }

    /// A zero-width rule: fires when the next character satisfies `predicate`, consuming
    /// nothing and emitting nothing. Its transition must change the stack.
    pub fn peek(predicate: fn(char) -> bool, transition: Transition) -> Self {
        debug_assert!(transition.changes_stack());
        Rule {
            matcher: Matcher::Peek(predicate),
            kinds: &[],
            transition,
        }
    }

    pub fn is_lookahead(&self) -> bool {
        matches!(self.matcher, Matcher::Peek(_))
    }

    /// Try this rule against the text starting at the cursor.
    pub fn find(&self, rest: &str) -> Option<RuleMatch> {
        match &self.matcher {
            Matcher::Pattern(regex) if self.kinds.len() > 1 => {
                let caps = regex.captures(rest)?;
                let len = caps.get(0).map(|m| m.end())?;
                let groups = (1..=self.kinds.len())
                    .map(|i| caps.get(i).map(|m| m.range()))
                    .collect();
                Some(RuleMatch { len, groups })
            }
            Matcher::Pattern(regex) => regex.find(rest).map(|m| RuleMatch::whole(m.end())),
            Matcher::Word(set) => set.match_word(rest).map(RuleMatch::whole),
            Matcher::Delimited { open, close } => {
                let body = rest.strip_prefix(open)?;
                let end = body.find(close)?;
                Some(RuleMatch::whole(open.len() + end + close.len()))
            }
            Matcher::Peek(predicate) => {
                let next = rest.chars().next()?;
                if predicate(next) {
                    Some(RuleMatch {
                        len: 0,
                        groups: Vec::new(),
                    })
                } else {
                    None
                }
            }
        }
    }
}
