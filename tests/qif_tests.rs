// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use qifledger::error::QifError;
use qifledger::qif::{Parser, Record, Split, parse_date, sanitize_label};
use std::io::Cursor;

fn parse_all(qif: &str) -> Vec<Result<Record, QifError>> {
    Parser::from_reader(Cursor::new(qif)).collect()
}

fn single(qif: &str) -> Record {
    let mut recs = parse_all(qif);
    assert_eq!(recs.len(), 1, "expected one record from {:?}", qif);
    recs.remove(0).unwrap()
}

#[test]
fn empty_input_is_end_of_sequence() {
    let mut p = Parser::from_reader(Cursor::new(""));
    assert!(p.next_record().unwrap().is_none());
}

#[test]
fn separator_only_yields_empty_record() {
    assert_eq!(single("^"), Record::default());
    assert_eq!(single("^ignored"), Record::default());
    let recs = parse_all("^\n^\n^\n");
    assert_eq!(recs.len(), 3);
    assert!(recs.iter().all(|r| r.as_ref().unwrap() == &Record::default()));
}

#[test]
fn unterminated_record_is_dropped() {
    let mut p = Parser::from_reader(Cursor::new("!Type:Foo\nD15/03'2003\n"));
    assert!(p.next_record().unwrap().is_none());
    assert_eq!(p.lines_read(), 2);
}

#[test]
fn each_field_code_sets_its_field() {
    assert_eq!(single("!Type:Foo\n^\n").r#type, "Type:Foo");
    assert_eq!(single("D15/03'2003\n^\n").date, "15/03'2003");
    assert_eq!(single("D01/02/1996\n^\n").date, "01/02/1996");
    assert_eq!(single("T10.00\n^\n").amount, "10.00");
    assert_eq!(single("U10.00\n^\n").amount, "10.00");
    assert_eq!(single("N123456\n^\n").number, "123456");
    assert_eq!(single("CX\n^\n").cleared, "X");
    assert_eq!(single("C \n^\n").cleared, " ");
    assert_eq!(single("PJohn Lewis\n^\n").payee, "John Lewis");
    assert_eq!(single("MShopping\n^\n").memo, "Shopping");

    let r = single("LFood:Groceries\n^\n");
    assert_eq!(r.label, "Food:Groceries");
    assert!(!r.transfer);

    let r = single("L[Paul_-_smile_current]\n^\n");
    assert_eq!(r.label, "Paul_-_smile_current");
    assert!(r.transfer);
}

#[test]
fn unknown_field_codes_are_ignored() {
    assert_eq!(single("Xsomething\nA1 High Street\n^\n"), Record::default());
}

#[test]
fn complete_record() {
    let r = single("D15/03'2003\nCX\nMPaint\nT-26.07\nNVISA\nPHomebase\nLHousing:Improvements\n^\n");
    assert_eq!(
        r,
        Record {
            date: "15/03'2003".into(),
            amount: "-26.07".into(),
            number: "VISA".into(),
            cleared: "X".into(),
            payee: "Homebase".into(),
            label: "Housing:Improvements".into(),
            memo: "Paint".into(),
            ..Record::default()
        }
    );
}

#[test]
fn record_with_splits() {
    let r = single(
        "D24/11'2004\nCX\nMLunch at Heathrow\nT-14.40\nNVISA\nPThe Bridge Bar\nLFood:Dining Out\n\
SFood:Dining Out\nELunch/early dinner\n$-10.00\nSDrink\nEBeer & juice\n$-4.40\n^\n",
    );
    assert_eq!(r.amount, "-14.40");
    assert_eq!(
        r.splits,
        vec![
            Split {
                category: "Food:Dining Out".into(),
                memo: "Lunch/early dinner".into(),
                amount: "-10.00".into(),
                ..Split::default()
            },
            Split {
                category: "Drink".into(),
                memo: "Beer & juice".into(),
                amount: "-4.40".into(),
                ..Split::default()
            },
        ]
    );
}

#[test]
fn crlf_line_endings_are_stripped() {
    let r = single("PHomebase\r\nT-1.00\r\n^\r\n");
    assert_eq!(r.payee, "Homebase");
    assert_eq!(r.amount, "-1.00");
}

#[test]
fn empty_line_is_an_error_with_line_number() {
    let mut p = Parser::from_reader(Cursor::new("D01/01'2001\n\nT1\n^\n"));
    match p.next_record() {
        Err(QifError::EmptyLine { line }) => assert_eq!(line, 2),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn percentage_split_fails_record_then_reaches_end() {
    let mut p = Parser::from_reader(Cursor::new(
        "D24/11'2004\nSFood:Dining Out\nELunch/early dinner\n%25.00\n^\nD25/11'2004\nT-1.00\n^\n",
    ));
    assert!(matches!(p.next_record(), Err(QifError::Unsupported(_))));
    let next = p.next_record().unwrap().unwrap();
    assert_eq!(next.date, "25/11'2004");
    assert!(next.splits.is_empty());
    assert!(p.next_record().unwrap().is_none());
    assert!(p.next_record().unwrap().is_none());
}

#[test]
fn split_field_without_open_split_is_an_error() {
    let mut p = Parser::from_reader(Cursor::new("D24/11'2004\n$-4.40\n^\n"));
    match p.next_record() {
        Err(QifError::OrphanSplitField { code, line }) => {
            assert_eq!(code, '$');
            assert_eq!(line, 2);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(p.next_record().unwrap().is_none());
}

#[test]
fn sanitize_label_cases() {
    for (input, want, transfer) in [
        ("", "", false),
        ("a", "a", false),
        ("[a", "[a", false),
        ("a]", "a]", false),
        ("[", "[", false),
        ("[a]", "a", true),
        ("[]", "", true),
        ("[foo bar]", "foo bar", true),
    ] {
        assert_eq!(sanitize_label(input), (want, transfer), "input {:?}", input);
    }
}

#[test]
fn parse_date_formats() {
    assert_eq!(
        parse_date("13/04'2006").unwrap(),
        NaiveDate::from_ymd_opt(2006, 4, 13).unwrap()
    );
    assert_eq!(
        parse_date("11/07/1970").unwrap(),
        NaiveDate::from_ymd_opt(1970, 7, 11).unwrap()
    );
    for bad in [
        "",
        "not a date",
        "13-04-2006",
        "12'02/2016",
        "31/02'2006",
        "1/4'2006",
        "01/4'2006",
        " 13/04'2006",
        "13/04/+2006",
        "13/04'206",
        "13/04'20066",
    ] {
        assert!(
            matches!(parse_date(bad), Err(QifError::DateFormat(ref s)) if s == bad),
            "{:?} should not parse",
            bad
        );
    }
}
