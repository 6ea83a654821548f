use std::thread;

use crate::{
    Defaults, NumberFormatKind, NumberParts, PHONE_UTIL, ParseError, ValidationError,
};

use super::test_registry::get_phone_util;

#[test]
fn parse_international_number() {
    let phone_util = get_phone_util();
    let phone = phone_util.parse("+385915125486").unwrap().unwrap();

    assert_eq!(phone.number(), "5125486");
    assert_eq!(phone.area_code(), "91");
    assert_eq!(phone.country_code(), "+385");
    assert_eq!(phone.extension(), "");
}

#[test]
fn parse_number_with_extension() {
    let phone_util = get_phone_util();
    let phone = phone_util.parse("+385915125486x148").unwrap().unwrap();

    assert_eq!(phone.number(), "5125486");
    assert_eq!(phone.area_code(), "91");
    assert_eq!(phone.country_code(), "+385");
    assert_eq!(phone.extension(), "148");

    let spaced = phone_util.parse("+385 91 512 5486 Ext. 148").unwrap().unwrap();
    assert_eq!(spaced, phone);
}

#[test]
fn parse_equivalent_notations() {
    let phone_util = get_phone_util();
    let expected = phone_util.parse("+385915125486").unwrap();

    for input in [
        "+00385915125486",
        "00385915125486",
        "+0385915125486",
        "00385 91 512 5486",
        "+385 (91) 512-5486",
        "+385.91.512.5486",
        "+３８５ ９１ ５１２ ５４８６",
    ] {
        assert_eq!(phone_util.parse(input).unwrap(), expected, "input: {input}");
    }
}

#[test]
fn parse_uses_ambient_defaults() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.set_default_country_code("385"), "385");
    assert_eq!(phone_util.set_default_area_code("47"), "47");

    let phone = phone_util.parse("451-588").unwrap().unwrap();
    assert_eq!(phone.country_code(), "+385");
    assert_eq!(phone.area_code(), "47");
    assert_eq!(phone.number(), "451588");

    // a national number with its own area code keeps it
    let phone = phone_util.parse("091 512 5486").unwrap().unwrap();
    assert_eq!(phone.area_code(), "91");
    assert_eq!(phone.number(), "5125486");
}

#[test]
fn later_default_overwrites_earlier() {
    let phone_util = get_phone_util();
    phone_util.set_default_country_code("385");
    phone_util.set_default_country_code("+386");
    phone_util.set_default_area_code("1");

    let phone = phone_util.parse("5125486").unwrap().unwrap();
    assert_eq!(phone.country_code(), "+386");
    assert_eq!(phone_util.defaults().country_code(), Some("+386"));
}

#[test]
fn parse_with_explicit_defaults_leaves_ambient_state_alone() {
    let phone_util = get_phone_util();
    let defaults = Defaults::new().with_country_code("385").with_area_code("47");

    let phone = phone_util
        .parse_with_defaults("451-588", &defaults)
        .unwrap()
        .unwrap();
    assert_eq!(phone.country_code(), "+385");
    assert_eq!(phone.area_code(), "47");

    assert_eq!(phone_util.defaults(), Defaults::new());
    assert_eq!(phone_util.parse("451-588"), Err(ParseError::NoCountryCode));
}

#[test]
fn parse_without_country_fails() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.parse("451-588"), Err(ParseError::NoCountryCode));
    assert_eq!(phone_util.parse("+999123456"), Err(ParseError::NoCountryCode));
    assert_eq!(phone_util.parse("   "), Err(ParseError::NoCountryCode));
}

#[test]
fn parse_reports_missing_area_code() {
    let phone_util = get_phone_util();
    phone_util.set_default_country_code("385");

    let Err(ParseError::Validation(errors)) = phone_util.parse("451588") else {
        panic!("expected a validation error");
    };
    assert_eq!(errors.as_slice(), &[ValidationError::MissingAreaCode]);
}

#[test]
fn parse_empty_input_is_no_result() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.parse(""), Ok(None));
    assert!(phone_util.is_valid(""));
}

#[test]
fn is_valid_agrees_with_parse() {
    let phone_util = get_phone_util();
    phone_util.set_default_area_code("47");

    for input in [
        "+385915125486",
        "+385915125486x148",
        "451-588",
        "+12125551234",
        "+12425551234",
        "+386 1 512 5486",
        "not a number",
        "",
    ] {
        assert_eq!(
            phone_util.is_valid(input),
            phone_util.parse(input).is_ok(),
            "input: {input}"
        );
    }
    assert!(phone_util.is_valid("+385915125486"));
    assert!(!phone_util.is_valid("451-588"));
}

#[test]
fn split_prefers_longest_dialing_code() {
    let phone_util = get_phone_util();

    let bahamas = phone_util.split_to_parts("+12425551234", None).unwrap();
    assert_eq!(bahamas.country_code, "+1242");
    assert_eq!(bahamas.area_code, "");
    assert_eq!(bahamas.number, "5551234");
    assert_eq!(bahamas.format, NumberFormatKind::Short);

    let new_york = phone_util.split_to_parts("+12125551234", None).unwrap();
    assert_eq!(new_york.country_code, "+1");
    assert_eq!(new_york.area_code, "212");
    assert_eq!(new_york.number, "5551234");
}

#[test]
fn split_area_code_alternation() {
    let phone_util = get_phone_util();
    let berlin = phone_util.split_to_parts("+493012345678", None).unwrap();

    assert_eq!(berlin.country_code, "+49");
    assert_eq!(berlin.area_code, "30");
    assert_eq!(berlin.number, "12345678");
    assert_eq!(berlin.format, NumberFormatKind::Short);
}

#[test]
fn split_with_empty_area_code_pattern() {
    let phone_util = get_phone_util();
    let ljubljana = phone_util.split_to_parts("+38615125486", None).unwrap();

    assert_eq!(ljubljana.country_code, "+386");
    assert_eq!(ljubljana.area_code, "");
    assert_eq!(ljubljana.number, "15125486");
}

#[test]
fn split_classifies_formats() {
    let phone_util = get_phone_util();

    let bare = phone_util.split_to_parts("451588", Some("385")).unwrap();
    assert_eq!(bare.format, NumberFormatKind::ReallyShort);
    assert_eq!(bare.area_code, "");
    assert_eq!(bare.number, "451588");
    assert_eq!(bare.country_code, "+385");

    // matches both patterns, folded into the shorter reading
    let ambiguous = phone_util.split_to_parts("0915", Some("385")).unwrap();
    assert_eq!(ambiguous.format, NumberFormatKind::ReallyShort);
    assert_eq!(ambiguous.area_code, "91");
    assert_eq!(ambiguous.number, "5");

    // matches neither, still split
    let long = phone_util.split_to_parts("+3859151254861234", None).unwrap();
    assert_eq!(long.format, NumberFormatKind::Short);
    assert_eq!(long.number, "51254861234");

    assert_eq!(
        phone_util.split_to_parts("451588", None),
        Err(ParseError::NoCountryCode)
    );
}

#[test]
fn construct_reports_missing_fields() {
    let phone_util = get_phone_util();

    let empty: [&str; 0] = [];
    let errors = phone_util.construct_from_args(&empty).unwrap_err();
    assert!(errors.contains(ValidationError::MissingNumber));

    let errors = phone_util.construct_from_args(&["   "]).unwrap_err();
    assert!(errors.contains(ValidationError::MissingNumber));

    let errors = phone_util.construct_from_args(&["123"]).unwrap_err();
    assert_eq!(
        errors.as_slice(),
        &[ValidationError::MissingAreaCode, ValidationError::MissingCountryCode]
    );
}

#[test]
fn construct_applies_defaults() {
    let phone_util = get_phone_util();
    phone_util.set_default_country_code("385");
    phone_util.set_default_area_code("47");

    let phone = phone_util.construct_from_args(&["451588"]).unwrap();
    assert_eq!(phone.country_code(), "385");
    assert_eq!(phone.area_code(), "47");
    assert_eq!(phone.first_segment_len(), 3);

    let phone = phone_util
        .construct(NumberParts::new("5125486").with_area_code("91"))
        .unwrap();
    assert_eq!(phone.area_code(), "91");

    let phone = phone_util
        .construct_with_defaults(NumberParts::new("5125486"), &Defaults::new().with_area_code("1").with_country_code("386"))
        .unwrap();
    assert_eq!(phone.to_string(), "+38615125486");
}

#[test]
fn construct_then_render_default_is_plain_concatenation() {
    let phone_util = get_phone_util();

    for (number, area_code, dialing_code) in [
        ("5125486", "91", "385"),
        ("5551234", "212", "1"),
        ("12345678", "30", "49"),
        ("1", "2", "3"),
    ] {
        let phone = phone_util
            .construct_from_args(&[number, area_code, dialing_code])
            .unwrap();
        let rendered = phone.render("default");

        assert_eq!(rendered, format!("+{dialing_code}{area_code}{number}"));
        assert!(!rendered.contains('%'));
    }
}

#[test]
fn country_lookups() {
    let phone_util = get_phone_util();

    assert_eq!(phone_util.find_by_dialing_code("385").unwrap().name(), "Croatia");
    assert!(phone_util.find_by_dialing_code("385222222222").is_none());
    assert_eq!(phone_util.find_by_iso3("deu").unwrap().dialing_code(), "49");
    assert_eq!(phone_util.find_by_iso2("SI").unwrap().dialing_code(), "386");

    let phone = phone_util.parse("+385915125486").unwrap().unwrap();
    assert_eq!(phone_util.country_for(&phone).unwrap().iso3(), "HRV");
}

#[test]
fn defaults_are_never_torn() {
    let phone_util = get_phone_util();
    phone_util.set_default_country_code("385");
    phone_util.set_default_area_code("47");

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..200 {
                phone_util.set_default_country_code(if i % 2 == 0 { "386" } else { "385" });
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let phone = phone_util.parse("451588").unwrap().unwrap();
                    assert!(
                        phone.country_code() == "+385" || phone.country_code() == "+386",
                        "unexpected country code {}",
                        phone.country_code()
                    );
                    assert_eq!(phone.area_code(), "47");
                }
            });
        }
    });
}

#[test]
fn bundled_registry_parses() {
    let phone = PHONE_UTIL.parse("+385 91 512 5486").unwrap().unwrap();
    assert_eq!(phone.area_code(), "91");
    assert_eq!(phone.number(), "5125486");
    assert_eq!(phone.country_code(), "+385");

    let zagreb = PHONE_UTIL.parse("+385 1 234 5678").unwrap().unwrap();
    assert_eq!(zagreb.area_code(), "1");
    assert_eq!(zagreb.number(), "2345678");
}

#[test]
fn bundled_area_codes_match_inside_national_numbers() {
    let defaults = Defaults::new().with_country_code("385").with_area_code("47");

    // "51" is a Croatian area code and is found inside the subscriber digits
    let phone = PHONE_UTIL.parse_with_defaults("451-588", &defaults).unwrap().unwrap();
    assert_eq!(phone.area_code(), "51");
    assert_eq!(phone.number(), "451588");

    // a leading trunk zero with the area code splits cleanly
    let phone = PHONE_UTIL.parse_with_defaults("047 451-588", &defaults).unwrap().unwrap();
    assert_eq!(phone.area_code(), "47");
    assert_eq!(phone.number(), "451588");
}
