// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Parity of `Half` operators with the same operations carried out on the
//! widened `f32` values and narrowed afterwards.

use half16::Half;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn arithmetic_targets() -> Vec<(Half, Half)> {
    vec![
        (Half::ZERO, Half::NAN),
        (Half::from(5u8), Half::from(7u8)),
        (Half::from(11u8), Half::from(0.5f32)),
        (Half::from(-3i8), Half::from(17u8)),
        (Half::INFINITY, Half::from(2u8)),
        (Half::from(-8i8), Half::NEG_INFINITY),
        (Half::EPSILON, Half::MAX),
        (Half::MAX, Half::EPSILON),
    ]
}

fn compare_targets() -> Vec<(Half, Half)> {
    vec![
        (Half::from(1u8), Half::from(2u8)),
        (Half::from(666u16), Half::from(555u16)),
        (Half::from(7u8), Half::from(7u8)),
        (Half::INFINITY, Half::INFINITY),
        (Half::NEG_INFINITY, Half::NEG_INFINITY),
        (Half::ZERO, Half::ZERO),
        (Half::ZERO, Half::from(-0.0f32)),
        (Half::NAN, Half::NAN),
        (Half::NAN, Half::from(100u8)),
        (Half::from(100u8), Half::NAN),
        (Half::from(-1i8), Half::from(1u8)),
    ]
}

fn narrow(v: f32) -> Half {
    Half::from(v)
}

#[test]
fn test_arithmetic_parity() {
    init_logger();
    for (a, b) in arithmetic_targets() {
        let (x, y) = (a.to_f32(), b.to_f32());
        assert_eq!(a + b, narrow(x + y), "{a:?} + {b:?}");
        assert_eq!(a - b, narrow(x - y), "{a:?} - {b:?}");
        assert_eq!(a * b, narrow(x * y), "{a:?} * {b:?}");
        assert_eq!(a / b, narrow(x / y), "{a:?} / {b:?}");
        assert_eq!(a % b, narrow(x % y), "{a:?} % {b:?}");
        assert_eq!(-a, narrow(-x), "-{a:?}");
        assert_eq!(a.plus(), narrow(x), "+{a:?}");
        assert_eq!(a.increment(), narrow(x + 1.0), "++{a:?}");
        assert_eq!(a.decrement(), narrow(x - 1.0), "--{a:?}");
    }
}

#[test]
fn test_relational_parity() {
    init_logger();
    for (a, b) in compare_targets() {
        let (x, y) = (a.to_f32(), b.to_f32());
        assert_eq!(a < b, x < y, "{a:?} < {b:?}");
        assert_eq!(a > b, x > y, "{a:?} > {b:?}");
        assert_eq!(a <= b, x <= y, "{a:?} <= {b:?}");
        assert_eq!(a >= b, x >= y, "{a:?} >= {b:?}");
    }
}

#[test]
fn test_equality_differs_from_ieee_only_on_nan_and_signed_zero() {
    for (a, b) in compare_targets() {
        let (x, y) = (a.to_f32(), b.to_f32());
        let expected = if a.is_nan() && b.is_nan() {
            true
        } else if a.is_zero() && b.is_zero() {
            a.to_bits() == b.to_bits()
        } else {
            x == y
        };
        assert_eq!(a == b, expected, "{a:?} == {b:?}");
        assert_eq!(a != b, !expected, "{a:?} != {b:?}");
    }
}

#[test]
fn test_compare_to_matches_total_sort_order() {
    let expected = [
        Ordering::Less,
        Ordering::Greater,
        Ordering::Equal,
        Ordering::Equal,
        Ordering::Equal,
        Ordering::Equal,
        Ordering::Equal,
        Ordering::Equal,
        Ordering::Less,
        Ordering::Greater,
        Ordering::Less,
    ];
    for ((a, b), want) in compare_targets().into_iter().zip(expected) {
        assert_eq!(a.compare(b), want, "{a:?} vs {b:?}");
    }

    let mut values: Vec<Half> = [3.0f32, f32::NAN, -1.0, 0.5, f32::NEG_INFINITY, 2.0]
        .into_iter()
        .map(Half::from)
        .collect();
    values.sort_by(|a, b| a.compare(*b));
    assert!(values[0].is_nan());
    let rest: Vec<f32> = values[1..].iter().map(|h| h.to_f32()).collect();
    assert_eq!(rest, vec![f32::NEG_INFINITY, -1.0, 0.5, 2.0, 3.0]);
}

#[test]
fn test_random_arithmetic_parity() {
    init_logger();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let a = Half::from_bits(rng.gen());
        let b = Half::from_bits(rng.gen());
        let (x, y) = (a.to_f32(), b.to_f32());
        assert_eq!((a + b).to_bits(), Half::from(x + y).to_bits());
        assert_eq!((a * b).to_bits(), Half::from(x * y).to_bits());
        if !a.is_nan() && !b.is_nan() {
            assert_eq!(a < b, x < y);
            assert_eq!(a >= b, x >= y);
        }
    }
}

#[test]
fn test_random_round_trip() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let v: f32 = rng.gen_range(-65504.0f32..=65504.0);
        let h = Half::from(v);
        assert!(h.is_finite());
        // Truncation never moves away from zero.
        assert!(h.to_f32().abs() <= v.abs(), "{v} -> {h:?}");
        assert_eq!(Half::from(h.to_f32()), h);
    }
}
