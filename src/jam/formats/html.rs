//! HTML highlighting
//!
//! Emits the same markup as Pygments' HTML formatter: each token becomes
//! `<span class="CLASS">text</span>` with the short class of its kind, plain text is left
//! unwrapped, and the whole listing may be wrapped in `<div class="highlight"><pre>`. Existing
//! Pygments stylesheets therefore apply unchanged.

use crate::jam::config::HtmlConfig;
use crate::jam::token::Token;

pub fn to_html(tokens: &[Token<'_>], options: &HtmlConfig) -> String {
    let mut out = String::new();
    if options.wrap_pre {
        out.push_str("<div class=\"highlight\"><pre>");
    }
    for token in tokens {
        let class = token.kind.css_class();
        if class.is_empty() {
            escape_into(&mut out, token.text);
            continue;
        }
        out.push_str("<span class=\"");
        out.push_str(&options.css_prefix);
        out.push_str(class);
        out.push_str("\">");
        escape_into(&mut out, token.text);
        out.push_str("</span>");
    }
    if options.wrap_pre {
        out.push_str("</pre></div>\n");
    }
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jam::lexing::tokenize_all;

    fn options(wrap_pre: bool, css_prefix: &str) -> HtmlConfig {
        HtmlConfig {
            wrap_pre,
            css_prefix: css_prefix.to_string(),
        }
    }

    #[test]
    fn test_grist_is_escaped() {
        let tokens = tokenize_all("<os>nt");
        assert_eq!(
            to_html(&tokens, &options(false, "")),
            "<span class=\"na\">&lt;</span><span class=\"na\">os</span>\
             <span class=\"na\">&gt;</span>nt"
        );
    }

    #[test]
    fn test_wrapping_and_prefix() {
        let tokens = tokenize_all("if");
        assert_eq!(
            to_html(&tokens, &options(true, "jam-")),
            "<div class=\"highlight\"><pre><span class=\"jam-k\">if</span></pre></div>\n"
        );
    }
}
