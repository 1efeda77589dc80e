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

//! Reductions, conversions and the math library driven through the facade
//! crate.

use half16::aggregate::{self, HalfIterExt};
use half16::math::{self, MidpointRounding};
use half16::{Converted, Error, Half, NumericTarget};

fn h(v: f32) -> Half {
    Half::from(v)
}

#[derive(Clone)]
struct Reading {
    sensor: &'static str,
    value: Option<Half>,
}

fn readings() -> Vec<Reading> {
    vec![
        Reading { sensor: "a", value: Some(h(1.5)) },
        Reading { sensor: "b", value: None },
        Reading { sensor: "c", value: Some(h(-4.0)) },
        Reading { sensor: "d", value: Some(h(8.5)) },
    ]
}

#[test]
fn test_empty_sequences() {
    let empty: Vec<Half> = vec![];
    assert!(matches!(aggregate::average(empty.clone()), Err(Error::EmptySequence)));
    assert!(matches!(aggregate::max(empty.clone()), Err(Error::EmptySequence)));
    assert!(matches!(empty.into_iter().half_min(), Err(Error::EmptySequence)));
    assert_eq!(aggregate::average_nullable(vec![None, None]), None);
    assert_eq!(aggregate::max_nullable(Vec::<Option<Half>>::new()), None);
}

#[test]
fn test_projections() {
    let rs = readings();
    assert_eq!(aggregate::sum_nullable_by(rs.clone(), |r| r.value), h(6.0));
    assert_eq!(aggregate::average_nullable_by(rs.clone(), |r| r.value), Some(h(2.0)));
    assert_eq!(aggregate::max_nullable_by(rs.clone(), |r| r.value), Some(h(8.5)));
    assert_eq!(aggregate::min_nullable_by(rs.clone(), |r| r.value), Some(h(-4.0)));
    assert_eq!(
        aggregate::sum_by(rs.iter(), |r| Half::from(r.sensor.len() as u8)),
        h(4.0)
    );
}

#[test]
fn test_sum_accumulates_in_half_precision() {
    // 2048 + 1 is not representable; each partial sum truncates.
    let values = vec![h(2048.0), Half::ONE, Half::ONE, Half::ONE, Half::ONE];
    assert_eq!(aggregate::sum(values.clone()).unwrap(), h(2048.0));
    let exact: f32 = values.iter().map(|v| v.to_f32()).sum();
    assert_eq!(exact, 2052.0);
}

#[test]
fn test_conversion_dispatch() {
    let v = h(-2.5);
    assert_eq!(v.convert(NumericTarget::BOOL).unwrap(), Converted::Bool(true));
    assert_eq!(v.convert(NumericTarget::INT8).unwrap(), Converted::I8(-2));
    assert_eq!(v.convert(NumericTarget::INT64).unwrap(), Converted::I64(-2));
    assert_eq!(v.convert(NumericTarget::FLOAT64).unwrap(), Converted::F64(-2.5));
    assert_eq!(
        v.convert(NumericTarget::STRING).unwrap(),
        Converted::String("-2.5".to_string())
    );
    assert!(matches!(
        v.convert(NumericTarget::UINT8),
        Err(Error::Overflow { .. })
    ));
    assert!(matches!(
        v.convert(NumericTarget::DATE_TIME),
        Err(Error::UnsupportedConversion { .. })
    ));
    assert!(matches!(
        Half::NAN.convert(NumericTarget::INT32),
        Err(Error::Overflow { .. })
    ));
    assert_eq!(
        Half::ZERO.convert(NumericTarget::BOOL).unwrap(),
        Converted::Bool(false)
    );
    let stamp: half16::Result<chrono::NaiveDateTime> = v.to_date_time();
    assert!(matches!(stamp, Err(Error::UnsupportedConversion { .. })));
    assert_eq!(Half::MAX.to_u16().unwrap(), 65504);
    assert!(Half::INFINITY.to_i64().is_err());
}

#[test]
fn test_math_library() {
    assert_eq!(math::sqrt(h(2.25)), h(1.5));
    assert_eq!(math::pow(h(3.0), h(3.0)), h(27.0));
    assert_eq!(math::round_with(h(0.5), MidpointRounding::ToEven), Half::ZERO);
    assert_eq!(math::round_with(h(0.5), MidpointRounding::AwayFromZero), Half::ONE);
    assert_eq!(math::sign(h(-0.001)).unwrap(), -1);
    assert!(math::sign(Half::NAN).is_err());
    assert!(math::log(h(-1.0)).is_nan());
    assert_eq!(math::log(Half::ZERO), Half::NEG_INFINITY);
    assert_eq!(math::abs(Half::NEG_INFINITY), Half::INFINITY);
}
