//! End-to-end behaviour of the public interface against the process-wide registry

use clu::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    register_unit("ft", "feet", 0.3048).unwrap();
}

fn length(magnitude: f64, symbol: &str) -> Length {
    make_length(magnitude, symbol).unwrap()
}

#[test]
fn test_example_conversions() {
    setup();
    assert_eq!(length(6.0, "m").convert_to("yd").unwrap().to_display_string(), "6.562 yd");
    assert_eq!(length(2.5, "yd").convert_to("in").unwrap().to_display_string(), "90 in");
}

#[test]
fn test_reflexive() {
    setup();
    let l = length(1.1, "in");
    assert_eq!(l.equals(&Value::from(l.clone())), Ok(true));
}

#[test]
fn test_symmetric() {
    setup();
    assert_eq!(length(1.1, "yd").convert_to("m").unwrap(), length(1.00584, "m"));
    assert_eq!(length(1.00584, "m").convert_to("yd").unwrap(), length(1.1, "yd"));
    assert_eq!(
        length(1.1, "yd"),
        length(1.1, "yd").convert_to("m").unwrap().convert_to("yd").unwrap()
    );
}

#[test]
fn test_round_trip_through_every_unit() {
    setup();
    let original = length(7.25, "yd");
    for symbol in ["in", "ft", "m", "yd"] {
        let back = original
            .convert_to(symbol)
            .and_then(|l| l.convert_to(original.symbol()))
            .unwrap();
        assert!(back.same_length(&original), "round trip through {}", symbol);
    }
}

#[test]
fn test_transitive() {
    setup();
    assert_eq!(
        length(1.1, "yd").convert_to("m").unwrap().convert_to("in").unwrap(),
        length(39.6, "in")
    );
    assert_eq!(
        length(39.6, "in").convert_to("m").unwrap().convert_to("yd").unwrap(),
        length(1.1, "yd")
    );
}

#[test]
fn test_concatenable() {
    setup();
    assert_eq!(length(170.0, "in"), parse_length("4 yd 2 ft 2 in").unwrap());
    let err = parse_length("2 in 4 ft").unwrap_err();
    assert!(matches!(err, LengthError::InvalidUnitOrder { .. }));
    assert_eq!(err.code(), clu::codes::INVALID_UNIT_ORDER);
}

#[test]
fn test_convert_between_all_units() {
    setup();
    let cases = [
        (1.1, "yd", "in", "39.6 in"),
        (1.1, "yd", "m", "1.006 m"),
        (1.1, "m", "yd", "1.203 yd"),
        (1.1, "m", "in", "43.307 in"),
        (110.0, "in", "yd", "3.056 yd"),
        (110.0, "in", "m", "2.794 m"),
    ];
    for (magnitude, from, to, expected) in cases {
        assert_eq!(length(magnitude, from).convert_to(to).unwrap().to_display_string(), expected);
    }
}

#[test]
fn test_rounding() {
    setup();
    assert_eq!(length(36.0, "in"), length(1.0, "yd"));
}

#[test]
fn test_add_feet() {
    setup();
    assert_eq!(lookup_unit("ft").unwrap().name, "feet");
    assert_eq!(length(12.0, "in"), length(1.0, "ft"));
}

#[test]
fn test_from_string() {
    setup();
    assert_eq!(length(12.0, "in"), parse_length("1 ft").unwrap());
    assert_eq!(length(14.0, "in"), parse_length("1 ft 2 in").unwrap());
    assert_eq!(length(0.0833333333333, "ft"), parse_length("1 in").unwrap());
    assert_eq!(parse_length("1 in").unwrap().convert_to("ft").unwrap().to_display_string(), "0.083 ft");
}

#[test]
fn test_from_string_errors() {
    setup();
    assert!(matches!(parse_length("1 parsec"), Err(LengthError::UnknownUnit { .. })));
    assert!(matches!(parse_length("1 ft 2"), Err(LengthError::MalformedInput { .. })));
    assert!(matches!(parse_length("one ft"), Err(LengthError::MalformedInput { .. })));
}

#[test]
fn test_compare_with_differing_type() {
    setup();
    let unit = lookup_unit("in").unwrap();
    let err = length(1.0, "in").equals(&Value::from(unit)).unwrap_err();
    assert_eq!(err, LengthError::type_mismatch("unit"));
}

#[test]
fn test_pretty_print() {
    setup();
    assert_eq!(
        parse_length("1 in").unwrap().convert_to("ft").unwrap().to_long_display_string(),
        "0.083 feet"
    );
    assert_eq!(length(3.0, "yd").to_long_display_string(), "3 yards");
}

#[test]
fn test_explicit_registry_is_isolated() {
    setup();
    let registry = UnitRegistry::empty().with_unit(UnitDefinition::new("m", "metres", 1.0));
    assert!(registry.length(1.0, "ft").is_err());
    assert!(make_length(1.0, "ft").is_ok());
}

#[test]
fn test_serialized_length() {
    setup();
    let json = serde_json::to_value(parse_length("1 ft 2 in").unwrap()).unwrap();
    assert_eq!(json["unit"]["symbol"], "in");
    assert_eq!(json["unit"]["name"], "inches");
}
