use unicode_charnames::{CharNames, Config, QueryError};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/DerivedName.txt");

fn fixture() -> CharNames {
    CharNames::load(&Config::default().with_source(FIXTURE)).expect("fixture must build")
}

fn search(names: &CharNames, term: &str) -> Vec<(String, String)> {
    names
        .search_charnames(term)
        .expect("term must be accepted")
        .map(|(cp, name)| (cp.to_string(), name.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(cp, name)| (cp.to_string(), name.to_string()))
        .collect()
}

#[test]
fn sextile_in_declaration_order() {
    let names = fixture();
    assert_eq!(
        search(&names, "sextile"),
        pairs(&[("26B9", "SEXTILE"), ("26BA", "SEMISEXTILE")])
    );
}

#[test]
fn search_is_case_insensitive() {
    let names = fixture();
    let expected = pairs(&[
        ("32FF", "SQUARE ERA NAME REIWA"),
        ("337B", "SQUARE ERA NAME HEISEI"),
        ("337C", "SQUARE ERA NAME SYOUWA"),
        ("337D", "SQUARE ERA NAME TAISYOU"),
        ("337E", "SQUARE ERA NAME MEIZI"),
    ]);
    assert_eq!(search(&names, "ERA NAME"), expected);
    assert_eq!(search(&names, "era name"), expected);
    assert_eq!(search(&names, "Era Name"), expected);
}

#[test]
fn hex_digits_span_four_to_five_places() {
    let names = fixture();
    assert_eq!(
        search(&names, "French"),
        pairs(&[("20A3", "FRENCH FRANC SIGN"), ("1F35F", "FRENCH FRIES")])
    );
}

#[test]
fn expanded_names_are_searchable() {
    let names = fixture();
    assert_eq!(
        search(&names, "ideograph-2a6df"),
        pairs(&[("2A6DF", "CJK UNIFIED IDEOGRAPH-2A6DF")])
    );
    assert_eq!(
        names.search_charnames("NUSHU CHARACTER-").unwrap().count(),
        0x1B2FB - 0x1B170 + 1
    );
}

#[test]
fn no_match_is_empty() {
    let names = fixture();
    assert!(search(&names, "CALIFRAGILIS").is_empty());
}

#[test]
fn empty_term_is_invalid() {
    let err = fixture().search_charnames("").unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument { .. }));
    assert_eq!(
        err.to_string(),
        "expected a non-empty string for search, but got ''"
    );
}

#[test]
fn synthesized_labels_are_not_searchable() {
    let names = fixture();
    names.charname("\u{0}").unwrap();
    names.charname("\u{0378}").unwrap();
    assert!(search(&names, "control").is_empty());
    assert!(search(&names, "<reserved").is_empty());
}

#[test]
fn each_search_is_an_independent_scan() {
    let names = fixture();
    let mut first = names.search_charnames("sextile").unwrap();
    assert_eq!(
        first.next().map(|(cp, _)| cp.to_string()).as_deref(),
        Some("26B9")
    );

    let second: Vec<_> = names.search_charnames("sextile").unwrap().collect();
    assert_eq!(second.len(), 2);

    assert_eq!(first.next().map(|(_, name)| name), Some("SEMISEXTILE"));
    assert_eq!(first.next(), None);
}
