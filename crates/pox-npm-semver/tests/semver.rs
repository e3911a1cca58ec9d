use std::cmp::Ordering;

use pox_npm_semver::{Expression, Found, Kind, Semver, SemverError, Version};

fn parse(range: &str) -> Expression {
    Semver::parse(range).unwrap()
}

fn matches(range: &str, version: &str) -> bool {
    parse(range).matches_str(version).unwrap()
}

#[test]
fn text_round_trips_for_versions() {
    for text in [
        "1",
        "1.2",
        "v1.2.3",
        "1.2.3-beta.01",
        "1.2.3+build.007",
        "0.1.2beta",
        "1.2.X",
        "1.x",
    ] {
        assert_eq!(parse(text).text(), text);
        assert_eq!(parse(&format!("  {}\t", text)).text(), text);
    }
}

#[test]
fn version_order_is_total() {
    let mut versions: Vec<Version> = [
        "2.0.0",
        "1.0.0-beta",
        "1.0.0+build",
        "1.0.0-alpha.1",
        "0.9.9",
        "1.0.0",
        "1.0.0-alpha",
        "1.0.0-1",
    ]
    .iter()
    .map(|v| Version::parse(v).unwrap())
    .collect();
    versions.sort();

    for window in versions.windows(3) {
        assert!(window[0] <= window[1] && window[1] <= window[2]);
        assert!(window[0] <= window[2]);
    }
    for a in &versions {
        for b in &versions {
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
        }
    }

    let texts: Vec<&str> = versions.iter().map(Version::text).collect();
    assert_eq!(
        texts,
        vec![
            "0.9.9",
            "1.0.0-1",
            "1.0.0-alpha.1",
            "1.0.0-alpha",
            "1.0.0-beta",
            "1.0.0",
            "1.0.0+build",
            "2.0.0"
        ]
    );
}

#[test]
fn any_matches_every_version() {
    for version in ["0.0.0", "1.2.3", "99.0.0-rc.1", "1.0.0+build"] {
        assert!(matches("*", version));
        assert!(matches("", version));
    }
}

#[test]
fn relational_and_range_examples() {
    assert!(matches("=1.2.3", "1.2.3"));
    assert!(!matches("=1.2.3", "1.2.4"));

    assert!(matches("~1.2.3", "1.2.9"));
    assert!(!matches("~1.2.3", "1.3.0"));
    assert!(!matches("~1.2.3", "1.2.2"));

    assert!(matches("1.x.x", "1.5.9"));
    assert!(!matches("1.x.x", "2.0.0"));

    assert!(matches("1.0.0 - 2.9999.9999", "2.9999.9999"));
    assert!(!matches("1.0.0 - 2.9999.9999", "3.0.0"));

    assert!(matches("<1.0.0-alpha", "1.0.0-alpha.1"));

    assert!(!matches("1.3.4 || 1.3.5", "1.3.6"));
    assert!(matches("1.3.4 || 1.3.5", "1.3.4"));
}

#[test]
fn composite_ranges() {
    let range = "<1.0.0 || >=2.3.1 <2.4.5 || >=2.5.2 <3.0.0";
    assert!(matches(range, "0.9.0"));
    assert!(matches(range, "2.4.0"));
    assert!(!matches(range, "2.4.5"));
    assert!(matches(range, "2.5.2"));
    assert!(!matches(range, "3.0.0"));

    assert!(matches("1.2.x || 2.x", "2.1.3"));
    assert!(!matches("1.2.x || 2.x", "1.3.0"));
    assert!(matches("~1.2.1 >=1.2.3 1.2.3", "1.2.3"));
}

#[test]
fn wildcard_operands() {
    assert!(matches("=1.2.x", "1.2.7"));
    assert!(matches("<=1.2.x", "1.2.7"));
    assert!(!matches("<1.2.x", "1.2.0"));
    assert!(matches(">1.x", "2.0.0"));
    assert!(!matches(">1.x", "1.9.9"));
    assert!(matches("~1.2.x", "1.2.4"));
    assert!(!matches("~1.2.x", "1.3.0"));
}

#[test]
fn url_pseudo_versions() {
    let url = "git+ssh://git@github.com:npm/npm.git#v1.0.27";
    let expression = parse(url);
    assert_eq!(expression.kind(), Kind::Url);
    assert!(expression.matches_str(url).unwrap());
    assert!(!expression.matches_str("1.0.27").unwrap());
    assert!(Semver::satisfies(url, url));

    let err = Semver::compare(url, "1.0.27").unwrap_err();
    assert_eq!(err.to_string(), format!("unsupported comparison for {}", url));
}

#[test]
fn latest_sorts_above_everything() {
    assert!(Semver::satisfies("latest", "latest"));
    assert!(!Semver::satisfies("1.0.0", "latest"));
    assert_eq!(Semver::rsort(&["1.0.0", "latest", "9.9.9"]), vec!["latest", "9.9.9", "1.0.0"]);

    let mut versions = vec!["2.0.0", "latest", "10.0.0"];
    versions.sort_by(|a, b| Semver::compare_desc(a, b).unwrap());
    assert_eq!(versions, vec!["latest", "10.0.0", "2.0.0"]);
}

#[test]
fn error_messages() {
    let cases = [
        ("a.0.0", "found: 'a', expected: '0-9+, =, <, <=, >, >= or ~'"),
        ("x.0.0", "found: 'x', expected: '0-9+, =, <, <=, >, >= or ~'"),
        ("0.a.0", "found: 'a', expected: '0-9+ or x'"),
        ("0.0.a", "found: 'a', expected: '0-9+ or x'"),
        ("0.0.1 || ", "found: 'eof', expected: '0-9+, =, <, <=, >, >= or ~'"),
        ("0.0.1 - ", "found: 'eof', expected: '0-9+, =, <, <=, >, >= or ~'"),
        (">= a", "found: 'a', expected: '0-9+, =, <, <=, >, >= or ~'"),
        ("~1.#", "found: '#', expected: '0-9+ or x'"),
        ("1.2.3 ^", "found: '^', expected: '0-9+, =, <, <=, >, >= or ~'"),
        ("1.2.3,", "found: ',', expected: '||'"),
    ];
    for (input, message) in cases {
        let err = Semver::parse(input).unwrap_err();
        assert_eq!(err.to_string(), message, "{}", input);
    }
}

#[test]
fn errors_carry_structured_details() {
    let err = Semver::parse("1.2.").unwrap_err();
    assert_eq!(err.found(), Found::EndOfInput);
    assert_eq!(err.expected(), "0-9+ or x");
    assert_eq!(err.position(), 4);

    match Semver::compare("1.0.0", "1.x") {
        Err(SemverError::Parse(err)) => assert_eq!(err.found(), Found::Char('x')),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn and_compare_to_sign_convention() {
    let above = Version::parse("3.0.0").unwrap();
    let inside = Version::parse("1.5.0").unwrap();
    assert_eq!(parse(">=1.0.0 <2.0.0").compare_to(&above), Ok(Ordering::Less));
    assert_eq!(parse(">=1.0.0 <2.0.0").compare_to(&inside), Ok(Ordering::Equal));
    // the left operand is always read as the lower bound
    assert_eq!(parse("<2.0.0 >=1.0.0").compare_to(&inside), Ok(Ordering::Greater));
    assert_eq!(Semver::compare("1.0.0 - 2.0.0", "3.0.0").unwrap(), Ordering::Less);
    assert_eq!(Semver::compare("1.0.0 - 2.0.0", "0.5.0").unwrap(), Ordering::Greater);
}

#[test]
fn facade_filters_and_sorts() {
    let versions = ["0.9.0", "1.0.0", "1.2.5", "1.3.0", "bogus", "2.0.0-rc.1"];
    // a pre-release of the ceiling still sorts below it
    assert_eq!(Semver::satisfied_by(&versions, "~1.2"), vec!["1.2.5", "1.3.0", "2.0.0-rc.1"]);
    assert_eq!(Semver::satisfied_by(&versions, ">=1.0.0 <1.3.0"), vec!["1.0.0", "1.2.5"]);
    assert_eq!(
        Semver::sort(&versions),
        vec!["0.9.0", "1.0.0", "1.2.5", "1.3.0", "2.0.0-rc.1"]
    );
}
