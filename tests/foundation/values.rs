//! Integration tests for Value types
//!
//! Tests Value variants, kinds, equality, display, and containers.

use xtofu_foundation::{Array, ArrayBuilder, Kind, Map, Value, limits};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_kind_matches_variant() {
    assert_eq!(Value::Int8(1).kind(), Kind::Int8);
    assert_eq!(Value::Octal64(1).kind(), Kind::Octal64);
    assert_eq!(Value::Bitwise32(1).kind(), Kind::Bitwise32);
    assert_eq!(Value::Qbit(1).kind(), Kind::Qbit);
    assert_eq!(Value::Null.kind(), Kind::Null);
    assert_eq!(Value::from(Map::new()).kind(), Kind::Map);
}

#[test]
fn value_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Char('z').as_char(), Some('z'));
    assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::Double(2.5).as_double(), Some(2.5));
    assert_eq!(Value::Qbit(0b101).as_qbit(), Some(5));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::Int(1).as_str(), None);
    assert!(Value::from(Array::of([1])).as_array().is_some());
}

#[test]
fn value_integer_respects_limits() {
    let max = Value::integer(Kind::UInt16, limits::U16_MAX).unwrap();
    assert_eq!(max, Value::UInt16(u16::MAX));
    assert!(Value::integer(Kind::UInt16, limits::U16_MAX + 1).is_err());

    let min = Value::integer(Kind::Int64, limits::S64_MIN).unwrap();
    assert_eq!(min.as_integer(), Some(limits::S64_MIN));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_numeric_views() {
    assert_eq!(Value::Octal32(64).to_string(), "0o100");
    assert_eq!(Value::Hex64(0xdead_beef).to_string(), "0xdeadbeef");
    assert_eq!(Value::Bitwise16(0x0f).to_string(), "0xf");
    assert_eq!(Value::UInt64(u64::MAX).to_string(), "18446744073709551615");
}

#[test]
fn display_qbit_is_64_digits() {
    let s = Value::Qbit(u64::MAX).to_string();
    assert_eq!(s, format!("0b{}", "1".repeat(64)));
}

#[test]
fn display_nested() {
    let inner = Map::from_pairs([
        (Value::from("a"), Value::Int(1)),
        (Value::from("b"), Value::Bool(false)),
    ])
    .unwrap();
    assert_eq!(Value::from(inner).to_string(), "< a: 1, b: false >");
    assert_eq!(Value::from(Array::of(['x', 'y'])).to_string(), "[ x, y ]");
    assert_eq!(Value::Unknown.to_string(), "[Invalid or Unknown Type]");
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn array_of_maps_rust_types_to_kinds() {
    assert_eq!(Array::of([1i8]).element_kind(), Kind::Int8);
    assert_eq!(Array::of([1i16]).element_kind(), Kind::Int16);
    assert_eq!(Array::of([1i64]).element_kind(), Kind::Int64);
    assert_eq!(Array::of([1u8]).element_kind(), Kind::UInt8);
    assert_eq!(Array::of([1u32]).element_kind(), Kind::UInt);
    assert_eq!(Array::of([1.0f32]).element_kind(), Kind::Float);
    assert_eq!(Array::of([true]).element_kind(), Kind::Bool);
    assert_eq!(Array::of(["s"]).element_kind(), Kind::String);
    assert_eq!(Array::of([String::from("s")]).element_kind(), Kind::String);
}

#[test]
fn array_builder_validates_once() {
    let built = ArrayBuilder::new(Kind::Double)
        .push(1.0)
        .extend([2.0, 3.0])
        .build()
        .unwrap();
    assert_eq!(built.len(), 3);
    assert!(built.check_homogeneous().is_ok());

    assert!(ArrayBuilder::new(Kind::Array).build().is_err());
}

#[test]
fn map_lookups() {
    let mut m = Map::new();
    m.insert(Value::Int(1), Value::from("one")).unwrap();
    m.insert(Value::Char('k'), Value::Null).unwrap();
    assert_eq!(m.get(&Value::Int(1)), Some(&Value::from("one")));
    assert_eq!(m.get(&Value::Int64(1)), None);
    assert_eq!(m.keys().len(), m.values().len());
}
