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

//! Table-driven conversion between binary16 bit patterns and `f32`.
//!
//! Widening is exact. Narrowing truncates the discarded mantissa bits
//! (no round-to-nearest), saturates to ±Inf on overflow and underflows to a
//! signed zero.

use crate::tables::ConversionTables;

/// Widens a half bit pattern to `f32`.
///
/// The exponent and mantissa table entries occupy disjoint bit fields, so
/// integer addition assembles the `f32` pattern without carries.
#[inline]
pub fn half_to_float(bits: u16) -> f32 {
    let t = ConversionTables::get();
    let class = (bits >> 10) as usize;
    let index = t.offset[class] as usize + (bits & 0x3FF) as usize;
    f32::from_bits(t.mantissa[index] + t.exponent[class])
}

/// Narrows an `f32` to a half bit pattern.
#[inline]
pub fn float_to_half(value: f32) -> u16 {
    let t = ConversionTables::get();
    let bits = value.to_bits();
    let class = (bits >> 23) as usize;
    t.base[class] + ((bits & 0x007F_FFFF) >> t.shift[class]) as u16
}

/// Widens a half bit pattern to `f64` through `f32`.
#[inline]
pub fn half_to_double(bits: u16) -> f64 {
    half_to_float(bits) as f64
}

/// Narrows an `f64` through `f32`.
#[inline]
pub fn double_to_half(value: f64) -> u16 {
    float_to_half(value as f32)
}
