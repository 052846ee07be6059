//! The dispatch loop
//!
//!     [Lexer] is a lazy iterator over the tokens of one input. Each step looks at the mode on
//!     top of the stack, tries that mode's rules at the cursor, queues the token(s) of the first
//!     match and applies the rule's transition. When nothing matches, one character is emitted
//!     as [TokenKind::PlainText], so every input makes progress and the loop always ends.
//!
//!     All state (stack, cursor, queued tokens, known closing delimiters) belongs to the
//!     iterator. Creating a new one re-tokenizes from scratch.
//!
//!     Delimited spans such as `#| ... |#` are matched against a per-lexer record of where the
//!     next closing delimiter sits. An opener with no closer left in the input is then rejected
//!     without scanning the rest of the input again, which keeps lexing linear on files full of
//!     unterminated openers.

use super::rules::{Matcher, Mode, Rule, RuleMatch, Transition};
use crate::jam::token::{Token, TokenKind};
use std::collections::VecDeque;
use tracing::{trace, warn};

/// Consecutive zero-width transitions tolerated at one offset before look-ahead rules are
/// skipped. Only a defective table can hit this.
const MAX_STALLED_STEPS: usize = 16;

/// Stack of active modes. Never empty: [Mode::Root] cannot be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStack {
    modes: Vec<Mode>,
}

impl ModeStack {
    pub fn new() -> Self {
        ModeStack {
            modes: vec![Mode::Root],
        }
    }

    pub fn top(&self) -> Mode {
        // the root is never removed, so the stack cannot be empty
        self.modes.last().copied().unwrap_or(Mode::Root)
    }

    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(mode) => self.modes.push(mode),
            Transition::Pop => self.pop(1),
            Transition::PopN(n) => self.pop(n),
            Transition::Replace(mode) => {
                if self.modes.len() > 1 {
                    self.modes.pop();
                }
                self.modes.push(mode);
            }
        }
    }

    fn pop(&mut self, n: usize) {
        let keep = self.modes.len().saturating_sub(n).max(1);
        self.modes.truncate(keep);
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a mode to its rule list. [Mode::rules] for every lexer built with [Lexer::new].
pub type RuleSource = fn(Mode) -> &'static [Rule];

/// Where the next closing delimiter was last found.
#[derive(Debug, Clone)]
struct Terminator {
    close: &'static str,
    searched_from: usize,
    /// Absolute offset of the first `close` at or after `searched_from`.
    found_at: Option<usize>,
}

/// Lazy tokenizer over one input string.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    stack: ModeStack,
    pending: VecDeque<Token<'a>>,
    stalled: usize,
    rules: RuleSource,
    terminators: Vec<Terminator>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_rules(input, Mode::rules)
    }

    /// A lexer driven by another set of mode tables.
    pub fn with_rules(input: &'a str, rules: RuleSource) -> Self {
        Lexer {
            input,
            cursor: 0,
            stack: ModeStack::new(),
            pending: VecDeque::new(),
            stalled: 0,
            rules,
            terminators: Vec::new(),
        }
    }

    /// Mode currently on top of the stack.
    pub fn mode(&self) -> Mode {
        self.stack.top()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn stack(&self) -> &ModeStack {
        &self.stack
    }

    /// Byte offset of the next unconsumed character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Run one dispatch step: exactly one rule fires, or the fallback emits one character.
    fn step(&mut self) {
        let mode = self.stack.top();
        let input = self.input;
        let rest = &input[self.cursor..];

        for rule in (self.rules)(mode) {
            let found = match rule.matcher {
                Matcher::Delimited { open, close } => self.find_delimited(rest, open, close),
                _ => rule.find(rest),
            };
            let Some(found) = found else {
                continue;
            };
            if found.len == 0 {
                if self.stalled >= MAX_STALLED_STEPS {
                    continue;
                }
                self.stalled += 1;
            } else {
                self.stalled = 0;
            }
            self.emit(rule, &found);
            self.cursor += found.len;
            self.transition(mode, rule.transition);
            return;
        }

        if self.stalled >= MAX_STALLED_STEPS {
            warn!(
                offset = self.cursor,
                mode = mode.name(),
                "look-ahead rules stalled, forcing progress"
            );
        }
        self.fallback();
    }

    /// Same result as [Rule::find] on a delimited rule, reusing earlier closer searches.
    fn find_delimited(&mut self, rest: &str, open: &str, close: &'static str) -> Option<RuleMatch> {
        if !rest.starts_with(open) {
            return None;
        }
        let end = self.next_terminator(close, self.cursor + open.len())?;
        Some(RuleMatch::whole(end + close.len() - self.cursor))
    }

    /// Offset of the first `close` at or after `from`. The cursor never moves backwards, so a
    /// recorded hit stays valid until the cursor passes it and a recorded miss stays valid
    /// for good.
    fn next_terminator(&mut self, close: &'static str, from: usize) -> Option<usize> {
        let input = self.input;
        let scan = |from: usize| input[from..].find(close).map(|i| from + i);
        match self.terminators.iter_mut().find(|t| t.close == close) {
            Some(known) => {
                let stale = match known.found_at {
                    Some(at) => at < from,
                    None => from < known.searched_from,
                };
                if stale {
                    known.searched_from = from;
                    known.found_at = scan(from);
                }
                known.found_at
            }
            None => {
                let found_at = scan(from);
                self.terminators.push(Terminator {
                    close,
                    searched_from: from,
                    found_at,
                });
                found_at
            }
        }
    }

    fn emit(&mut self, rule: &Rule, found: &RuleMatch) {
        let input = self.input;
        let base = self.cursor;
        for (kind, group) in rule.kinds.iter().zip(&found.groups) {
            let Some(range) = group else {
                continue;
            };
            if range.is_empty() {
                continue;
            }
            let text = &input[base + range.start..base + range.end];
            self.pending
                .push_back(Token::new(*kind, text, base + range.start));
        }
    }

    fn fallback(&mut self) {
        let input = self.input;
        let rest = &input[self.cursor..];
        let width = rest.chars().next().map(char::len_utf8).unwrap_or(0);
        if width == 0 {
            return;
        }
        self.pending.push_back(Token::new(
            TokenKind::PlainText,
            &rest[..width],
            self.cursor,
        ));
        self.cursor += width;
        self.stalled = 0;
    }

    fn transition(&mut self, from: Mode, transition: Transition) {
        if transition == Transition::Stay {
            return;
        }
        self.stack.apply(transition);
        trace!(
            offset = self.cursor,
            from = from.name(),
            to = self.stack.top().name(),
            depth = self.stack.depth(),
            ?transition,
            "mode transition"
        );
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.cursor >= self.input.len() {
                return None;
            }
            self.step();
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
