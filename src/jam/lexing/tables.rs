//! Mode tables
//!
//!     The whole grammar lives here as data. Each mode's effective rule list is the
//!     concatenation of the sub-tables it includes (whitespace, comments) followed by its own
//!     rules. Tables are compiled once, on first use, and shared read-only afterwards.
//!
//!     Stack shapes for the nested constructs:
//!
//!     ```text
//!     rule foo ( a )         root > rule_name -> rule_args -> rule_params, `)` pops
//!     actions x { ... }      root > actions_def -> actions_bind > actions_body, `}` pops 2
//!     <a<b>>c                root > value > grist > grist, each `>` pops, whitespace pops value
//!     $($(a)b)               root > value > variable > variable, each `)` pops
//!     ```

use super::rules::{Mode, Rule, Transition};
use super::words::{BUILTIN_SET, KEYWORD_SET, MODIFIER_SET, PUNCTUATION_SET};
use crate::jam::token::TokenKind::{self, *};
use once_cell::sync::Lazy;

const WS: &[TokenKind] = &[Whitespace];

fn whitespace() -> Vec<Rule> {
    vec![Rule::pattern(r"\s+", WS, Transition::Stay)]
}

fn comments() -> Vec<Rule> {
    vec![
        Rule::delimited("#|", "|#", &[CommentBlock], Transition::Stay),
        Rule::pattern(r"#[^\n]*\n?", &[CommentLine], Transition::Stay),
    ]
}

fn include(parts: Vec<Vec<Rule>>) -> Vec<Rule> {
    parts.into_iter().flatten().collect()
}

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

fn is_not_space(c: char) -> bool {
    !c.is_whitespace()
}

fn any(_: char) -> bool {
    true
}

static ROOT: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        whitespace(),
        comments(),
        vec![
            Rule::pattern(
                r"(rule)(\s+)",
                &[Keyword, Whitespace],
                Transition::Push(Mode::RuleName),
            ),
            Rule::pattern(
                r"(actions)(\s+)",
                &[Keyword, Whitespace],
                Transition::Push(Mode::ActionsDef),
            ),
            Rule::pattern(
                r"(module)(\s+)(\S+)(\s+)(\{)",
                &[Keyword, Whitespace, NamespaceName, Whitespace, Punctuation],
                Transition::Stay,
            ),
            Rule::pattern(
                r"(class)(\s+)(\S+)(\s+)(:)(\s+)(\S+)",
                &[
                    Keyword,
                    Whitespace,
                    ClassName,
                    Whitespace,
                    Punctuation,
                    Whitespace,
                    ClassName,
                ],
                Transition::Stay,
            ),
            Rule::pattern(
                r"(class)(\s+)(\S+)",
                &[Keyword, Whitespace, ClassName],
                Transition::Stay,
            ),
            Rule::pattern(
                r"(for)(\s+)(?:(local)(\s+))?([^\s$<]+)(\s+)(in)(\s+)",
                &[
                    Keyword, Whitespace, Keyword, Whitespace, Identifier, Whitespace, Keyword,
                    Whitespace,
                ],
                Transition::Stay,
            ),
            Rule::pattern(
                r"(local)(\s+)([^\s$<;=]+)",
                &[Keyword, Whitespace, Identifier],
                Transition::Stay,
            ),
            Rule::word(&BUILTIN_SET, &[Builtin], Transition::Stay),
            Rule::word(&KEYWORD_SET, &[Keyword], Transition::Stay),
            Rule::word(&PUNCTUATION_SET, &[Punctuation], Transition::Stay),
            Rule::peek(is_not_space, Transition::Push(Mode::Value)),
        ],
    ])
});

static RULE_NAME: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        whitespace(),
        comments(),
        vec![Rule::pattern(
            r"\S+",
            &[RuleName],
            Transition::Replace(Mode::RuleArgs),
        )],
    ])
});

static RULE_ARGS: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        whitespace(),
        comments(),
        vec![
            Rule::pattern(
                r"\(",
                &[Punctuation],
                Transition::Replace(Mode::RuleParams),
            ),
            // no parameter list: hand the character back to root
            Rule::peek(any, Transition::Pop),
        ],
    ])
});

static RULE_PARAMS: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        whitespace(),
        comments(),
        vec![
            Rule::pattern(r"\)", &[Punctuation], Transition::Pop),
            Rule::pattern(r"[:*+?]", &[Punctuation], Transition::Stay),
            Rule::pattern(r"[^\s:*+?)]+", &[VariableName], Transition::Stay),
        ],
    ])
});

static ACTIONS_DEF: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        whitespace(),
        comments(),
        vec![
            Rule::pattern(
                r"\{",
                &[Punctuation],
                Transition::Push(Mode::ActionsBody),
            ),
            Rule::word(&MODIFIER_SET, &[AttributeName], Transition::Stay),
            Rule::pattern(
                r"[^\s{]+",
                &[Builtin],
                Transition::Replace(Mode::ActionsBind),
            ),
        ],
    ])
});

static ACTIONS_BIND: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        whitespace(),
        comments(),
        vec![
            Rule::pattern(
                r"\{",
                &[Punctuation],
                Transition::Push(Mode::ActionsBody),
            ),
            Rule::pattern(r"(bind)(\s+)", &[Keyword, Whitespace], Transition::Stay),
            Rule::pattern(r"[^\s{]+", &[VariableName], Transition::Stay),
        ],
    ])
});

/// Shell text shared by the outer body and nested brace groups.
fn body_text() -> Vec<Rule> {
    vec![
        Rule::pattern(
            r"\$\(",
            &[StringInterpolation],
            Transition::Push(Mode::Variable),
        ),
        Rule::pattern(
            r"\{",
            &[StringHeredoc],
            Transition::Push(Mode::ActionsNested),
        ),
        // text runs end on a non-space so the closing brace keeps its leading whitespace
        Rule::pattern(r"[^{}$]*[^{}$\s]", &[StringHeredoc], Transition::Stay),
        Rule::pattern(r"\s+", &[StringHeredoc], Transition::Stay),
        Rule::pattern(r"\$", &[StringHeredoc], Transition::Stay),
    ]
}

static ACTIONS_BODY: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        vec![Rule::pattern(
            r"(\s*)(\})",
            &[Whitespace, Punctuation],
            Transition::PopN(2),
        )],
        body_text(),
    ])
});

static ACTIONS_NESTED: Lazy<Vec<Rule>> = Lazy::new(|| {
    include(vec![
        vec![Rule::pattern(r"\}", &[StringHeredoc], Transition::Pop)],
        body_text(),
    ])
});

static VALUE: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::peek(is_space, Transition::Pop),
        Rule::pattern(r"<", &[AttributeName], Transition::Push(Mode::Grist)),
        Rule::pattern(
            r"\$\(",
            &[StringInterpolation],
            Transition::Push(Mode::Variable),
        ),
        Rule::pattern(r"[^\s<$]+", &[PlainText], Transition::Stay),
        Rule::pattern(r"\$", &[PlainText], Transition::Stay),
    ]
});

static GRIST: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::peek(is_space, Transition::Pop),
        Rule::pattern(r"<", &[AttributeName], Transition::Push(Mode::Grist)),
        Rule::pattern(r">", &[AttributeName], Transition::Pop),
        Rule::pattern(
            r"\$\(",
            &[StringInterpolation],
            Transition::Push(Mode::Variable),
        ),
        Rule::pattern(r"[^\s<>$]+", &[AttributeName], Transition::Stay),
        Rule::pattern(r"\$", &[AttributeName], Transition::Stay),
    ]
});

static VARIABLE: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::pattern(r"\\\$", &[StringInterpolation], Transition::Stay),
        Rule::pattern(
            r"\$\(",
            &[StringInterpolation],
            Transition::Push(Mode::Variable),
        ),
        Rule::pattern(r"\)", &[StringInterpolation], Transition::Pop),
        Rule::pattern(r"[^$)\\]+", &[StringInterpolation], Transition::Stay),
        Rule::pattern(r"[$\\]", &[StringInterpolation], Transition::Stay),
    ]
});

pub fn rules_for(mode: Mode) -> &'static [Rule] {
    match mode {
        Mode::Root => ROOT.as_slice(),
        Mode::RuleName => RULE_NAME.as_slice(),
        Mode::RuleArgs => RULE_ARGS.as_slice(),
        Mode::RuleParams => RULE_PARAMS.as_slice(),
        Mode::ActionsDef => ACTIONS_DEF.as_slice(),
        Mode::ActionsBind => ACTIONS_BIND.as_slice(),
        Mode::ActionsBody => ACTIONS_BODY.as_slice(),
        Mode::ActionsNested => ACTIONS_NESTED.as_slice(),
        Mode::Value => VALUE.as_slice(),
        Mode::Grist => GRIST.as_slice(),
        Mode::Variable => VARIABLE.as_slice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jam::lexing::rules::{Matcher, MODES};

    #[test]
    fn test_every_mode_has_rules() {
        for mode in MODES {
            assert!(!mode.rules().is_empty(), "{mode} has no rules");
        }
    }

    #[test]
    fn test_lookahead_rules_change_the_stack() {
        for mode in MODES {
            for rule in mode.rules().iter().filter(|r| r.is_lookahead()) {
                assert!(rule.transition.changes_stack(), "{mode}: {rule:?}");
                assert!(rule.kinds.is_empty(), "{mode}: {rule:?}");
            }
        }
    }

    #[test]
    fn test_lookahead_pushes_land_in_consuming_modes() {
        // A look-ahead push into a mode whose first applicable rule is another look-ahead push
        // would stack modes without consuming input.
        for mode in MODES {
            for rule in mode.rules().iter().filter(|r| r.is_lookahead()) {
                if let Transition::Push(target) = rule.transition {
                    let pushes_again = target.rules().iter().any(|r| {
                        r.is_lookahead() && matches!(r.transition, Transition::Push(_))
                    });
                    assert!(!pushes_again, "{mode} -> {target}");
                }
            }
        }
    }

    #[test]
    fn test_non_lookahead_patterns_never_match_empty() {
        for mode in MODES {
            for rule in mode.rules() {
                if let Matcher::Pattern(regex) = &rule.matcher {
                    assert!(!regex.is_match(""), "{mode}: {rule:?} matches empty input");
                }
            }
        }
    }

    #[test]
    fn test_multi_kind_patterns_have_one_group_per_kind() {
        for mode in MODES {
            for rule in mode.rules() {
                if let Matcher::Pattern(regex) = &rule.matcher {
                    if rule.kinds.len() > 1 {
                        assert_eq!(
                            regex.captures_len() - 1,
                            rule.kinds.len(),
                            "{mode}: {rule:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_comments_come_right_after_whitespace() {
        for mode in [Mode::Root, Mode::RuleName, Mode::ActionsDef, Mode::ActionsBind] {
            let kinds: Vec<_> = mode.rules().iter().take(3).map(|r| r.kinds[0]).collect();
            assert_eq!(kinds, vec![Whitespace, CommentBlock, CommentLine], "{mode}");
        }
    }
}
