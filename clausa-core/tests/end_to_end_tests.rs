//! End-to-end tests for the complete segmentation pipeline

use clausa_core::{
    is_heading, ClassifyError, Clause, ClauseClassifier, ClauseProcessor, Config, Input,
    KeywordClassifier, UNCLASSIFIED,
};
use std::io::Cursor;

const AGREEMENT: &str = "\
RESIDENTIAL LEASE AGREEMENT

This Agreement is entered into between the Landlord and the Tenant named below.

1. DEFINITIONS
In this Agreement the following terms have the meanings given.
\"Premises\" means the apartment described in Schedule A.

2. TERM AND RENEWAL OF LEASE
1. The lease commences on the first day of January and runs for twelve months.
2. The Tenant may renew for a further term by written notice.

3. RENT AND SECURITY DEPOSIT
Rent:  The Tenant shall pay rent of one thousand dollars on the first day of each month.
Security Deposit:
A deposit equal to one month of rent is payable on signing.
The deposit is refundable within thirty days of the end of the term.

4. INSURANCE AND LIABILITY
The Tenant shall maintain coverage of not less than one million dollars.
General obligations apply as follows.
1. The Tenant shall insure personal belongings.
2. The Landlord shall insure the building.
\u{0C}
Page 2

5. GOVERNING LAW
This Agreement shall be governed by the laws of the State of New York.

OK
";

fn process(text: &str) -> Vec<Clause> {
    ClauseProcessor::new().process(Input::from_text(text)).unwrap().clauses
}

#[test]
fn test_complete_agreement_segmentation() {
    let clauses = process(AGREEMENT);
    let titles: Vec<_> = clauses.iter().map(|c| c.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "RESIDENTIAL LEASE AGREEMENT",
            "1. DEFINITIONS",
            "2. TERM AND RENEWAL OF LEASE",
            "1. The lease commences on the first day of January and runs for twelve months.",
            "3. RENT AND SECURITY DEPOSIT",
            "Rent",
            "Security Deposit:",
            "4. INSURANCE AND LIABILITY",
            "5. GOVERNING LAW",
        ]
    );
}

#[test]
fn test_ids_are_contiguous_from_one() {
    let clauses = process(AGREEMENT);
    for (index, clause) in clauses.iter().enumerate() {
        assert_eq!(clause.id, index + 1);
    }
}

#[test]
fn test_numbered_items_inside_prose_stay_in_clause() {
    let clauses = process(AGREEMENT);
    let insurance = clauses
        .iter()
        .find(|c| c.title == "4. INSURANCE AND LIABILITY")
        .unwrap();

    assert!(insurance.text.contains("1. The Tenant shall insure personal belongings."));
    assert!(insurance.text.contains("2. The Landlord shall insure the building."));
    assert!(insurance.text.ends_with("Page 2"));
}

#[test]
fn test_inline_heading_body_is_split_from_label() {
    let clauses = process(AGREEMENT);
    let rent = clauses.iter().find(|c| c.title == "Rent").unwrap();
    assert_eq!(
        rent.text,
        "Rent The Tenant shall pay rent of one thousand dollars on the first day of each month."
    );
}

#[test]
fn test_trailing_short_line_joins_last_clause() {
    let output = ClauseProcessor::new().process_text(AGREEMENT);
    let last = output.clauses.last().unwrap();
    assert!(last.text.ends_with("State of New York. OK"));
    assert_eq!(output.metadata.stats.dropped_fragments, 0);
}

#[test]
fn test_heading_signal_on_agreement_lines() {
    assert!(is_heading("RESIDENTIAL LEASE AGREEMENT"));
    assert!(is_heading("1. DEFINITIONS"));
    assert!(is_heading("Schedule A"));
    assert!(!is_heading("General obligations apply as follows."));
}

#[test]
fn test_short_documents() {
    let one = process(
        "14. INSURANCE AND LIABILITY\nThe tenant shall maintain coverage of not less than one million dollars.",
    );
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].title, "14. INSURANCE AND LIABILITY");

    let two = process(
        "14. INSURANCE AND LIABILITY\n1. The tenant shall maintain coverage of not less than one million dollars in value.",
    );
    assert_eq!(two.len(), 2);

    let merged = process(
        "General obligations apply as follows.\n1. The tenant shall pay rent promptly each month without delay.",
    );
    assert_eq!(merged.len(), 1);

    assert!(process("").is_empty());
    assert!(process(" \n\t ").is_empty());
    assert!(process("OK").is_empty());
}

#[test]
fn test_ocr_noise_does_not_break_headings() {
    let clauses = process(
        "7.  CON\u{FB01}DENTIALITY\u{0C}\u{0C}\u{0C}Each party shall keep the terms  con\u{FB01}dential \u{2013} always.",
    );
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0].title, "7. CONDENTIALITY");
    assert_eq!(
        clauses[0].text,
        "7. CONDENTIALITY Each party shall keep the terms condential always."
    );
}

#[test]
fn test_crlf_document() {
    let clauses = process("3. RENT AND DEPOSIT\r\nRent is due on the first day.\r\n");
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0].text, "3. RENT AND DEPOSIT Rent is due on the first day.");
}

#[test]
fn test_manual_line_breaks_split_lines() {
    for sep in ['\u{0B}', '\u{2028}', '\u{85}'] {
        let doc = format!(
            "2. RENT{sep}The Tenant shall pay rent monthly in advance.{sep}\
             3. INSURANCE{sep}The Tenant shall insure the premises fully."
        );
        let clauses = process(&doc);

        assert_eq!(clauses.len(), 2, "separator {sep:?}");
        assert_eq!(clauses[0].title, "2. RENT");
        assert_eq!(
            clauses[0].text,
            "2. RENT The Tenant shall pay rent monthly in advance."
        );
        assert_eq!(clauses[1].title, "3. INSURANCE");
    }
}

#[test]
fn test_reader_input() {
    let output = ClauseProcessor::new()
        .process(Input::from_reader(Cursor::new(AGREEMENT.as_bytes().to_vec())))
        .unwrap();
    assert_eq!(output.clauses, process(AGREEMENT));
}

#[test]
fn test_classification_labels_agreement() {
    let classifier = KeywordClassifier::builtin().unwrap();
    let output = ClauseProcessor::new()
        .process_and_classify(Input::from_text(AGREEMENT), &classifier)
        .unwrap();

    let label_of = |title: &str| {
        output
            .clauses
            .iter()
            .find(|c| c.title == title)
            .and_then(|c| c.clause_type.clone())
            .unwrap()
    };

    assert_eq!(label_of("1. DEFINITIONS"), "definitions");
    assert_eq!(label_of("Rent"), "payment");
    assert_eq!(label_of("4. INSURANCE AND LIABILITY"), "insurance");
    assert_eq!(label_of("5. GOVERNING LAW"), "governing_law");
}

struct OfflineClassifier;

impl ClauseClassifier for OfflineClassifier {
    fn classify(&self, _text: &str) -> Result<String, ClassifyError> {
        Err(ClassifyError::Unavailable("timeout".into()))
    }

    fn labels(&self) -> Vec<String> {
        vec!["insurance".into()]
    }
}

#[test]
fn test_classifier_outage_keeps_structure() {
    let plain = ClauseProcessor::new().process_text(AGREEMENT);
    let labeled = ClauseProcessor::with_config(Config::builder().parallel(false).build().unwrap())
        .unwrap()
        .process_and_classify(Input::from_text(AGREEMENT), &OfflineClassifier)
        .unwrap();

    assert_eq!(labeled.clauses.len(), plain.clauses.len());
    for (a, b) in labeled.clauses.iter().zip(&plain.clauses) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.text, b.text);
        assert_eq!(a.clause_type.as_deref(), Some(UNCLASSIFIED));
    }
}
