use dn_parse::{ parse_dn, AttributeTypeAndValue, Dn, ParseError, RelativeDn };
use indoc::indoc;

fn dn(rdns: &[&[(&str, &str)]]) -> Dn {
    Dn::new(
        rdns.iter()
            .map(|rdn| {
                RelativeDn::new(
                    rdn.iter()
                        .map(|(t, v)| AttributeTypeAndValue::new(*t, *v))
                        .collect(),
                )
            })
            .collect(),
    )
}

fn check(src: &str, expected: &[&[(&str, &str)]]) {
    match parse_dn(src) {
        Ok(result) => {
            let expected = dn(expected);
            if result != expected {
                panic!("=== Input ===\n{}\n\n=== Expected ===\n{:?}\n\n=== Got ===\n{:?}", src, expected, result);
            }
        }
        Err(e) => panic!("{}", e.full_message(src)),
    }
}

#[test]
fn test_single_attribute() {
    check("CN=James", &[&[("CN", "James")]]);
    check("uid=test_user", &[&[("uid", "test_user")]]);
    check("O=Example Corp.", &[&[("O", "Example Corp.")]]);
}

#[test]
fn test_several_rdns() {
    let result = parse_dn("CN=James,OU=Engineering,DC=example,DC=com").unwrap();
    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|rdn| rdn.len() == 1));
    assert_eq!(result.rdns()[0].attributes()[0], AttributeTypeAndValue::new("CN", "James"));
    assert_eq!(result.rdns()[1].attributes()[0].value(), "Engineering");
    assert_eq!(result.rdns()[3].attributes()[0].attr_type(), "DC");
    assert_eq!(result.rdns()[3].attributes()[0].value(), "com");
}

#[test]
fn test_multi_valued_rdn() {
    check("OU=Sales+CN=J. Smith", &[&[("OU", "Sales"), ("CN", "J. Smith")]]);
    check(
        "OU=Sales+CN=J. Smith,DC=example,DC=net",
        &[&[("OU", "Sales"), ("CN", "J. Smith")], &[("DC", "example")], &[("DC", "net")]],
    );
}

#[test]
fn test_escaped_specials() {
    check(r"CN=James\2C Jr.", &[&[("CN", "James, Jr.")]]);
    check(r"CN=James\, Jr.", &[&[("CN", "James, Jr.")]]);
    check(
        r#"CN=James \"Jim\" Smith\, III,DC=example,DC=net"#,
        &[&[("CN", r#"James "Jim" Smith, III"#)], &[("DC", "example")], &[("DC", "net")]],
    );
    check(r"CN=a\+b\=c\;d\<e\>f\#g\\h", &[&[("CN", r"a+b=c;d<e>f#g\h")]]);
}

#[test]
fn test_hex_escapes() {
    check(r"CN=Before\0dAfter,DC=example,DC=net", &[
        &[("CN", "Before\rAfter")],
        &[("DC", "example")],
        &[("DC", "net")],
    ]);
    check(r"CN=Lu\C4\8Di\C4\87", &[&[("CN", "Lučić")]]);
    check("CN=Lučić", &[&[("CN", "Lučić")]]);
}

#[test]
fn test_whitespace() {
    check("CN=James   ", &[&[("CN", "James")]]);
    check(r"CN=James\ ", &[&[("CN", "James ")]]);
    check("CN=   James", &[&[("CN", "James")]]);
    check(r"  CN  =  Lu\C4\8Di\C4\87  ", &[&[("CN", "Lučić")]]);
    check("  A  =  1  ,  B  =  2  ", &[&[("A", "1")], &[("B", "2")]]);
    check("  A  =  1  +  B  =  2  ", &[&[("A", "1"), ("B", "2")]]);
    check(
        r"  \ \ A\ \   =   \ \ 1\ \   ,   \ \ B\ \   =   \ \ 2\ \   ",
        &[&[("  A  ", "  1  ")], &[("  B  ", "  2  ")]],
    );
}

#[test]
fn test_ber_values() {
    check("1.3.6.1.4.1.1466.0=#04024869", &[&[("1.3.6.1.4.1.1466.0", "Hi")]]);
    check("1.3.6.1.4.1.1466.0=#04024869,DC=example,DC=com", &[
        &[("1.3.6.1.4.1.1466.0", "Hi")],
        &[("DC", "example")],
        &[("DC", "com")],
    ]);
    check("A=#04024869+B=c", &[&[("A", "Hi"), ("B", "c")]]);
}

#[test]
fn test_empty_values() {
    check("", &[]);
    check("CN=", &[&[("CN", "")]]);
    check("CN=,DC=com", &[&[("CN", "")], &[("DC", "com")]]);
    check("CN=James,", &[&[("CN", "James")]]);
    check("CN=James+", &[&[("CN", "James")]]);
}

#[test]
fn test_repeated_parses_are_equal() {
    let src = r"CN=James\2C Jr.+UID=jj,OU=Sales,DC=example,DC=com";
    let first = parse_dn(src).unwrap();
    let second = parse_dn(src).unwrap();
    assert_eq!(first, second);

    let first_value = first.rdns()[0].attributes()[0].value().as_ptr();
    let second_value = second.rdns()[0].attributes()[0].value().as_ptr();
    assert_ne!(first_value, second_value);
}

#[test]
fn test_from_str() {
    let result: Dn = "CN=James,DC=com".parse().unwrap();
    assert_eq!(result, parse_dn("CN=James,DC=com").unwrap());

    let result = "CN".parse::<Dn>();
    assert!(matches!(result, Err(ParseError::IncompletePair(_))));
}

#[test]
fn test_escape_errors() {
    match parse_dn(r"CN=James\") {
        Err(ParseError::TruncatedEscape(span)) => assert_eq!(span, 8..9),
        e => panic!("Expected TruncatedEscape error, got: {:?}", e),
    }

    match parse_dn(r"cn=Jim\0") {
        Err(ParseError::TruncatedEscape(span)) => assert_eq!(span, 6..8),
        e => panic!("Expected TruncatedEscape error, got: {:?}", e),
    }

    match parse_dn(r"cn=Jim\0Test") {
        Err(ParseError::InvalidEscapeHex(pair, span)) => {
            assert_eq!(pair, "0T");
            assert_eq!(span, 6..9);
        }
        e => panic!("Expected InvalidEscapeHex error, got: {:?}", e),
    }

    match parse_dn(r"CN=\ZZ") {
        Err(ParseError::InvalidEscapeHex(pair, _)) => assert_eq!(pair, "ZZ"),
        e => panic!("Expected InvalidEscapeHex error, got: {:?}", e),
    }
}

#[test]
fn test_ber_errors() {
    match parse_dn("1=#0402486") {
        Err(ParseError::InvalidBerHex(hex, span)) => {
            assert_eq!(hex, "0402486");
            assert_eq!(span, 3..10);
        }
        e => panic!("Expected InvalidBerHex error, got: {:?}", e),
    }

    match parse_dn("CN=#zz,DC=com") {
        Err(ParseError::InvalidBerHex(hex, _)) => assert_eq!(hex, "zz"),
        e => panic!("Expected InvalidBerHex error, got: {:?}", e),
    }

    // No hex at all before the end of input.
    match parse_dn("CN=#") {
        Err(ParseError::BerDecode(_, span)) => assert_eq!(span, 4..4),
        e => panic!("Expected BerDecode error, got: {:?}", e),
    }

    // Length says four bytes but only two follow.
    assert!(matches!(parse_dn("CN=#04044869"), Err(ParseError::BerDecode(_, _))));
}

#[test]
fn test_incomplete_pair() {
    match parse_dn("CN") {
        Err(ParseError::IncompletePair(span)) => assert_eq!(span, 0..2),
        e => panic!("Expected IncompletePair error, got: {:?}", e),
    }

    assert!(matches!(parse_dn("*"), Err(ParseError::IncompletePair(_))));
    assert!(matches!(parse_dn("CN=James,OU"), Err(ParseError::IncompletePair(_))));

    match parse_dn("DC=example,=net") {
        Err(ParseError::IncompletePair(span)) => assert_eq!(span, 12..15),
        e => panic!("Expected IncompletePair error, got: {:?}", e),
    }

    // A delimiter with no type before it.
    assert!(matches!(parse_dn("CN=a,,DC=com"), Err(ParseError::IncompletePair(_))));
}

#[test]
fn test_invalid_utf8() {
    match parse_dn(r"CN=\ff") {
        Err(ParseError::InvalidUtf8(span)) => assert_eq!(span, 3..6),
        e => panic!("Expected InvalidUtf8 error, got: {:?}", e),
    }
}

#[test]
fn test_error_location() {
    let input = r"cn=Jim\0Test";
    let error = parse_dn(input).unwrap_err();
    let expected = indoc! {r"
        line 1: Invalid hex in escape sequence '0T'
        cn=Jim\0Test
              ^^^"};
    assert_eq!(error.full_message(input), expected);

    let input = "DC=example,=net";
    let error = parse_dn(input).unwrap_err();
    let expected = indoc! {"
        line 1: DN ended with incomplete type, value pair
        DC=example,=net
                    ^^^"};
    assert_eq!(error.full_message(input), expected);
}
