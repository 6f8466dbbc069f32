/*!
 * Inline markup translation.
 *
 * SRT bodies carry HTML-like emphasis and colour tags. This module rewrites
 * them into ASS override codes and removes every other tag.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// One literal tag and the override code replacing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupRule {
    /// Tag as written in the SRT body
    pub tag: &'static str,
    /// ASS override code emitted in its place
    pub replacement: &'static str,
}

/// Emphasis rules, applied in order.
///
/// Closing a colour span always resets to white; there is no colour stack.
pub const MARKUP_RULES: [MarkupRule; 7] = [
    MarkupRule { tag: "<b>", replacement: "{\\b1}" },
    MarkupRule { tag: "</b>", replacement: "{\\b0}" },
    MarkupRule { tag: "<i>", replacement: "{\\i1}" },
    MarkupRule { tag: "</i>", replacement: "{\\i0}" },
    MarkupRule { tag: "<u>", replacement: "{\\u1}" },
    MarkupRule { tag: "</u>", replacement: "{\\u0}" },
    MarkupRule { tag: "</font>", replacement: "{\\c&HFFFFFF&}" },
];

const COLOR_OPEN_PREFIX: &str = "<font color=\"#";
const COLOR_HEX_LEN: usize = 6;

/// Opening colour tag with exactly six hex digits
static COLOR_OPEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"<font color="#[0-9A-Fa-f]{6}">"##).expect("Invalid colour tag regex")
});

/// Any remaining tag-shaped text, plus stray carriage returns
static LEFTOVER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<.+?>|\r").expect("Invalid leftover tag regex")
});

/// Translates SRT inline markup into ASS override codes
pub struct MarkupTranslator;

impl MarkupTranslator {
    /// Translate a cue body.
    ///
    /// Known tags become override codes, colour tags get their hex digits
    /// reversed, and whatever still looks like a tag is deleted.
    pub fn translate(body: &str) -> String {
        let mut text = body.to_string();

        for rule in &MARKUP_RULES {
            if text.contains(rule.tag) {
                text = text.replace(rule.tag, rule.replacement);
            }
        }

        text = Self::translate_colors(text);
        Self::strip_leftovers(&text)
    }

    /// Replace colour-open tags one at a time until none are left
    fn translate_colors(mut text: String) -> String {
        while let Some(found) = COLOR_OPEN_REGEX.find(&text) {
            let hex_start = found.start() + COLOR_OPEN_PREFIX.len();
            let reversed = Self::reverse_hex(&text[hex_start..hex_start + COLOR_HEX_LEN]);
            let range = found.range();
            text.replace_range(range, &format!("{{\\c&{}&}}", reversed));
        }
        text
    }

    /// Reverse the characters of a hex colour string.
    ///
    /// This is a plain character reversal: `1A2B3C` becomes `C3B2A1`, not the
    /// channel swap `3C2B1A`.
    pub fn reverse_hex(hex: &str) -> String {
        hex.chars().rev().collect()
    }

    fn strip_leftovers(text: &str) -> String {
        let stripped_tags = LEFTOVER_REGEX
            .find_iter(text)
            .filter(|m| m.as_str() != "\r")
            .count();
        if stripped_tags > 0 {
            debug!("Dropping {} unrecognised tag(s) from {:?}", stripped_tags, text);
        }

        LEFTOVER_REGEX.replace_all(text, "").into_owned()
    }
}
