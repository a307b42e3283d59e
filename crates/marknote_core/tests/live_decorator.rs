use marknote_core::{decorate_document, Document, Treatment};

fn document_of(text: &str) -> Document {
    let mut document = Document::empty();
    document.on_change(text);
    document
}

#[test]
fn every_rule_decorates_its_own_block() {
    let document = document_of("# Title\n* bold line\n** alert line\n*** underline line");
    let overlay = decorate_document(&document);

    let treatments: Vec<(usize, Treatment)> = overlay
        .iter()
        .map(|decoration| (decoration.block, decoration.treatment))
        .collect();
    assert_eq!(
        treatments,
        vec![
            (0, Treatment::Heading),
            (1, Treatment::Strong),
            (2, Treatment::Alert),
            (3, Treatment::Underline),
        ]
    );
}

#[test]
fn decorations_cover_the_whole_block() {
    let document = document_of("* bold line");
    let overlay = decorate_document(&document);

    assert_eq!(overlay.len(), 1);
    assert_eq!(overlay[0].start, 0);
    assert_eq!(overlay[0].end, "* bold line".chars().count());
}

#[test]
fn triple_star_block_carries_underline_not_strong() {
    let document = document_of("*** loud");
    let overlay = decorate_document(&document);

    assert_eq!(overlay.len(), 1);
    assert_eq!(overlay[0].treatment, Treatment::Underline);
}

#[test]
fn marker_without_space_gets_no_decoration() {
    let document = document_of("*no space");
    assert!(decorate_document(&document).is_empty());
}

#[test]
fn pass_is_idempotent_and_leaves_the_document_unchanged() {
    let document = document_of("# a\nplain\n** c");
    let before = document.plain_text().to_owned();

    let first = decorate_document(&document);
    let second = decorate_document(&document);

    assert_eq!(first, second);
    assert_eq!(document.plain_text(), before);
}

#[test]
fn empty_document_produces_an_empty_overlay() {
    assert!(decorate_document(&Document::empty()).is_empty());
}
