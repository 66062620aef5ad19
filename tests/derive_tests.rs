#![cfg(feature = "derive")]
//! Tests for `#[derive(CacheKey)]`.
//!
//! - Structs are keyed field by field, so float fields compare by bits
//! - `#[cache_key(skip)]` leaves a field out of the key
//! - Enums and `#[cache_key(by_value)]` structs are their own key

use lambdas::memoize::CacheKey;
use lambdas::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Test Types
// =============================================================================

/// Struct holding floats, which are not `Eq` or `Hash` themselves
#[derive(Debug, Clone, Copy, PartialEq, CacheKey)]
struct Point {
    x: f64,
    y: f64,
}

/// Tuple struct
#[derive(Debug, Clone, CacheKey)]
struct Span(u32, u32);

/// Unit struct
#[derive(Debug, Clone, CacheKey)]
struct Origin;

/// Enum keyed by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CacheKey)]
enum Unit {
    Meters,
    Feet,
}

/// Struct with a field left out of the key
#[derive(Debug, Clone, CacheKey)]
struct Measurement {
    value: f32,
    unit: Unit,
    #[cache_key(skip)]
    label: String,
}

/// Struct keyed by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, CacheKey)]
#[cache_key(by_value)]
struct UserId {
    tenant: String,
    id: u64,
}

/// Struct with a generic field
#[derive(Debug, Clone, CacheKey)]
struct Tagged<T> {
    tag: char,
    value: T,
}

/// Enum with a generic payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, CacheKey)]
enum Choice<T> {
    Left(T),
    Right(T),
}

// =============================================================================
// Field-wise Keys
// =============================================================================

#[rstest]
fn struct_key_is_tuple_of_field_keys() {
    let point = Point { x: 1.0, y: -2.5 };
    assert_eq!(point.to_key(), (1.0_f64.to_bits(), (-2.5_f64).to_bits()));
}

#[rstest]
fn tuple_struct_key_follows_positions() {
    assert_eq!(Span(3, 9).to_key(), (3, 9));
    assert_ne!(Span(3, 9).to_key(), Span(9, 3).to_key());
}

#[rstest]
fn unit_struct_key_is_unit() {
    let () = Origin.to_key();
}

#[rstest]
fn signed_zero_fields_are_distinct() {
    let positive = Point { x: 0.0, y: 0.0 };
    let negative = Point { x: -0.0, y: 0.0 };
    assert_eq!(positive, negative);
    assert_ne!(positive.to_key(), negative.to_key());
}

#[rstest]
fn skipped_field_does_not_affect_key() {
    let first = Measurement {
        value: 2.0,
        unit: Unit::Meters,
        label: "door".to_owned(),
    };
    let second = Measurement {
        label: "window".to_owned(),
        ..first.clone()
    };
    assert_eq!(first.to_key(), second.to_key());
    assert_eq!(first.to_key(), (2.0_f32.to_bits(), Unit::Meters));
}

#[rstest]
fn generic_struct_uses_parameter_key() {
    let tagged = Tagged {
        tag: 'w',
        value: 0.25_f32,
    };
    assert_eq!(tagged.to_key(), ('w', 0.25_f32.to_bits()));

    let nested = Tagged {
        tag: 'p',
        value: Point { x: 1.0, y: 1.0 },
    };
    assert_eq!(nested.to_key().1, (1.0_f64.to_bits(), 1.0_f64.to_bits()));
}

// =============================================================================
// By-value Keys
// =============================================================================

#[rstest]
fn enum_key_is_the_value() {
    assert_eq!(Unit::Feet.to_key(), Unit::Feet);
    assert_eq!(Choice::Left(4_u8).to_key(), Choice::Left(4));
    assert_ne!(Choice::Left(4_u8).to_key(), Choice::Right(4));
}

#[rstest]
fn by_value_struct_key_is_a_clone() {
    let user = UserId {
        tenant: "acme".to_owned(),
        id: 7,
    };
    assert_eq!(user.to_key(), user);
}

// =============================================================================
// Memoizing Derived Keys
// =============================================================================

#[rstest]
fn derived_keys_memoize() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    let distance = (move |from: Point, to: Point| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        (to.x - from.x).hypot(to.y - from.y)
    })
    .memoized();

    let origin = Point { x: 0.0, y: 0.0 };
    let target = Point { x: 3.0, y: 4.0 };

    assert!((distance.apply(origin, target) - 5.0).abs() < f64::EPSILON);
    assert!((distance.apply(origin, target) - 5.0).abs() < f64::EPSILON);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(distance.is_cached(&(origin, target)));
}

#[rstest]
fn skipped_fields_share_cache_entries() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    let in_meters = (move |measurement: Measurement| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        match measurement.unit {
            Unit::Meters => measurement.value,
            Unit::Feet => measurement.value * 0.3048,
        }
    })
    .memoized();

    let door = Measurement {
        value: 10.0,
        unit: Unit::Feet,
        label: "door".to_owned(),
    };
    let window = Measurement {
        label: "window".to_owned(),
        ..door.clone()
    };

    assert_eq!(in_meters.apply(door), in_meters.apply(window));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
