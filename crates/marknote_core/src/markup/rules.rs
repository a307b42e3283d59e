//! Line-prefix formatting rules.
//!
//! # Responsibility
//! - Define the canonical marker-to-treatment table.
//! - Provide the single line-matching decision shared by the live decorator
//!   and the batch translator.
//!
//! # Invariants
//! - `RULES` is ordered longest-marker-first; `match_line` returns the first
//!   hit in that order.
//! - Every marker carries its trailing space; `*no space` matches nothing.

use serde::{Deserialize, Serialize};

/// Presentation treatment a matching line carries.
///
/// Treatments identify semantics only; the tag/class each one renders to
/// lives in [`crate::markup::presentation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    /// Large bold heading line.
    Heading,
    /// Bold text line.
    Strong,
    /// Red alert text line.
    Alert,
    /// Underlined text line.
    Underline,
}

/// One marker-to-treatment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Literal line prefix, trailing space included.
    pub marker: &'static str,
    /// Treatment applied to the whole matching line.
    pub treatment: Treatment,
}

/// The fixed rule table, in match precedence order.
///
/// Longest markers come first so prefix tests cannot hand a `*** ` line to
/// the `* ` rule.
pub const RULES: [Rule; 4] = [
    Rule {
        marker: "*** ",
        treatment: Treatment::Underline,
    },
    Rule {
        marker: "** ",
        treatment: Treatment::Alert,
    },
    Rule {
        marker: "* ",
        treatment: Treatment::Strong,
    },
    Rule {
        marker: "# ",
        treatment: Treatment::Heading,
    },
];

/// Matches one line against the rule table.
///
/// Returns the first rule (in precedence order) whose marker prefixes the
/// line, together with the text remaining after the marker, or `None` when
/// the line carries no marker.
pub fn match_line(line: &str) -> Option<(&'static Rule, &str)> {
    RULES
        .iter()
        .find_map(|rule| line.strip_prefix(rule.marker).map(|rest| (rule, rest)))
}

#[cfg(test)]
mod tests {
    use super::{match_line, Treatment, RULES};

    #[test]
    fn rules_are_ordered_longest_marker_first() {
        for pair in RULES.windows(2) {
            assert!(pair[0].marker.len() >= pair[1].marker.len());
        }
    }

    #[test]
    fn each_marker_resolves_to_its_own_treatment() {
        let cases = [
            ("# heading", Treatment::Heading, "heading"),
            ("* bold", Treatment::Strong, "bold"),
            ("** alert", Treatment::Alert, "alert"),
            ("*** underline", Treatment::Underline, "underline"),
        ];
        for (line, expected, rest) in cases {
            let (rule, remainder) = match_line(line).expect("line should match one rule");
            assert_eq!(rule.treatment, expected);
            assert_eq!(remainder, rest);
        }
    }

    #[test]
    fn longer_marker_wins_over_shorter_prefix() {
        let (rule, rest) = match_line("*** loud").expect("triple marker should match");
        assert_eq!(rule.treatment, Treatment::Underline);
        assert_eq!(rest, "loud");
    }

    #[test]
    fn marker_without_trailing_space_matches_nothing() {
        assert!(match_line("*no space").is_none());
        assert!(match_line("#title").is_none());
        assert!(match_line("**x").is_none());
    }

    #[test]
    fn unmarked_and_empty_lines_match_nothing() {
        assert!(match_line("plain text").is_none());
        assert!(match_line("").is_none());
    }

    #[test]
    fn marker_with_empty_remainder_still_matches() {
        let (rule, rest) = match_line("# ").expect("bare heading marker should match");
        assert_eq!(rule.treatment, Treatment::Heading);
        assert_eq!(rest, "");
    }
}
