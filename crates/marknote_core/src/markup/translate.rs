//! Batch whole-document translation to HTML.
//!
//! # Responsibility
//! - Convert a full plain-text document into an HTML fragment at save time.
//! - Apply each rule as a line-anchored, multi-line substitution.
//!
//! # Invariants
//! - Rules are applied in the precedence order of [`RULES`].
//! - Lines matching no rule pass through byte-for-byte unchanged.
//! - Translation is pure and deterministic with no failure mode.

use crate::markup::presentation::saved_markup;
use crate::markup::rules::{Treatment, RULES};
use once_cell::sync::Lazy;
use regex::Regex;

/// Per-rule line patterns, built once from the same markers the live
/// decorator prefix-tests against.
static LINE_RULES: Lazy<Vec<(Treatment, Regex)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let pattern = format!("(?m)^{}(.*)$", regex::escape(rule.marker));
            let regex = Regex::new(&pattern).expect("valid marker line pattern");
            (rule.treatment, regex)
        })
        .collect()
});

/// Translates raw note text into an HTML fragment.
///
/// Every line starting with a marker is replaced by that rule's saved markup
/// element wrapping the remaining text, marker stripped. Text without any
/// marker is returned unchanged; the empty string translates to itself.
///
/// Feeding the output back through the translator is undefined behavior of
/// the format, not supported.
pub fn translate(text: &str) -> String {
    let mut html = text.to_owned();
    for (treatment, line_re) in LINE_RULES.iter() {
        let markup = saved_markup(*treatment);
        let replacement = format!(
            "<{tag} class=\"{class}\">$1</{tag}>",
            tag = markup.tag,
            class = markup.class
        );
        html = line_re.replace_all(&html, replacement.as_str()).into_owned();
    }
    html
}
