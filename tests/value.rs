use kvs_double::StorageValue;

fn text(value: impl Into<StorageValue>) -> String {
    value.into().into_string()
}

#[test]
fn strings_are_verbatim() {
    assert_eq!(text("not-json-{"), "not-json-{");
    assert_eq!(text(String::from("  padded ")), "  padded ");
    assert_eq!(text('x'), "x");
    assert_eq!(text(""), "");
}

#[test]
fn integers_and_booleans() {
    assert_eq!(text(42), "42");
    assert_eq!(text(-7i8), "-7");
    assert_eq!(text(u64::max_value()), "18446744073709551615");
    assert_eq!(text(i64::min_value()), "-9223372036854775808");
    assert_eq!(text(true), "true");
    assert_eq!(text(false), "false");
}

#[test]
fn floats_follow_platform_rules() {
    assert_eq!(text(42.0), "42");
    assert_eq!(text(-0.0), "0");
    assert_eq!(text(0.5), "0.5");
    assert_eq!(text(-2.25), "-2.25");
    assert_eq!(text(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(text(f64::NAN), "NaN");
    assert_eq!(text(f64::INFINITY), "Infinity");
    assert_eq!(text(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(text(1e20), "100000000000000000000");
}

#[test]
fn large_floats_use_shortest_digits() {
    assert_eq!(text(1.2345678901234568e20), "123456789012345680000");
    assert_eq!(text(9007199254740993.0), "9007199254740992");
    assert_eq!(text(-1.5e20), "-150000000000000000000");
}

#[test]
fn floats_switch_to_exponent_form() {
    assert_eq!(text(1e21), "1e+21");
    assert_eq!(text(-1e21), "-1e+21");
    assert_eq!(text(1.5e300), "1.5e+300");
    assert_eq!(text(1e-7), "1e-7");
    assert_eq!(text(1.25e-10), "1.25e-10");
    assert_eq!(text(5e-324), "5e-324");
    assert_eq!(text(f64::MAX), "1.7976931348623157e+308");
}

#[test]
fn small_floats_stay_fixed_down_to_one_millionth() {
    assert_eq!(text(1e-6), "0.000001");
    assert_eq!(text(1.5e-6), "0.0000015");
    assert_eq!(text(0.001), "0.001");
    assert_eq!(text(123.456), "123.456");
}

#[test]
fn missing_values_are_null() {
    assert_eq!(text(None::<&str>), "null");
    assert_eq!(text(Some(3)), "3");
    assert_eq!(StorageValue::from(None::<bool>), StorageValue::Null);
}
