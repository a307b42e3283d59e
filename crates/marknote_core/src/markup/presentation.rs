//! Treatment-to-presentation lookup tables.
//!
//! # Responsibility
//! - Map each [`Treatment`] to the element it renders as, for both the saved
//!   HTML output and the live composing view.
//!
//! # Invariants
//! - Lookup is total over `Treatment`; matching logic never reads these
//!   tables.
//! - The two tables are independently swappable; only the heading entry
//!   differs between them.

use crate::markup::rules::Treatment;

/// Element shape a treatment renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    /// HTML tag name without brackets.
    pub tag: &'static str,
    /// Utility class list applied to the element.
    pub class: &'static str,
}

/// Markup used by the batch translator for saved notes.
pub fn saved_markup(treatment: Treatment) -> Markup {
    match treatment {
        Treatment::Heading => Markup {
            tag: "h1",
            class: "text-4xl font-bold",
        },
        Treatment::Strong => Markup {
            tag: "span",
            class: "font-bold",
        },
        Treatment::Alert => Markup {
            tag: "span",
            class: "text-red-500",
        },
        Treatment::Underline => Markup {
            tag: "span",
            class: "underline",
        },
    }
}

/// Markup used by the live view while a note is being composed.
///
/// Headings render one size smaller in the composing surface than in the
/// saved rendering; the span treatments are identical in both.
pub fn live_markup(treatment: Treatment) -> Markup {
    match treatment {
        Treatment::Heading => Markup {
            tag: "h1",
            class: "text-3xl font-bold",
        },
        other => saved_markup(other),
    }
}

#[cfg(test)]
mod tests {
    use super::{live_markup, saved_markup};
    use crate::markup::rules::Treatment;

    #[test]
    fn saved_heading_wraps_in_h1() {
        let markup = saved_markup(Treatment::Heading);
        assert_eq!(markup.tag, "h1");
        assert!(markup.class.contains("font-bold"));
    }

    #[test]
    fn live_and_saved_tables_agree_except_heading_size() {
        for treatment in [Treatment::Strong, Treatment::Alert, Treatment::Underline] {
            assert_eq!(live_markup(treatment), saved_markup(treatment));
        }
        assert_ne!(
            live_markup(Treatment::Heading).class,
            saved_markup(Treatment::Heading).class
        );
    }
}
