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

//! IEEE 754 half-precision (binary16) value type.
//!
//! `Half` is a transparent wrapper around the raw `u16` pattern. Every
//! classification works on the bits directly; everything numeric widens to
//! `f32` through [`crate::convert`] and narrows back.

use std::fmt;
use std::io::Write as _;
use std::str::FromStr;

use crate::convert::{double_to_half, float_to_half, half_to_double, half_to_float};
use crate::ensure;
use crate::error::{Error, Result};
use crate::types::{Category, FLOAT16_SIZE};

/// IEEE 754 binary16 (half-precision) floating-point value.
///
/// Layout:
/// - 1 sign bit
/// - 5 exponent bits (bias = 15)
/// - 10 mantissa bits
///
/// Any pattern with an all-ones exponent and a nonzero mantissa is NaN;
/// no canonical NaN is enforced.
#[repr(transparent)]
#[derive(Copy, Clone, Default)]
pub struct Half(u16);

pub(crate) const SIGN_MASK: u16 = 0x8000;
pub(crate) const EXP_MASK: u16 = 0x7C00;
pub(crate) const ABS_MASK: u16 = 0x7FFF;
const EXP_BIAS: i16 = 15;

impl Half {
    // ============ Construction ============

    /// Create a `Half` from raw bits. No validation is performed.
    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Narrow an `f32` (truncating the discarded mantissa bits).
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self(float_to_half(value))
    }

    /// Narrow an `f64` by way of `f32`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self(double_to_half(value))
    }

    /// Widen to `f32`. Exact for every non-NaN pattern.
    #[inline]
    pub fn to_f32(self) -> f32 {
        half_to_float(self.0)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        half_to_double(self.0)
    }

    /// Pack explicit components: `sign << 15 | (exponent + 15) << 10 | mantissa >> 6`.
    ///
    /// Only the low bit of `sign` and the top 10 bits of `mantissa` are meant
    /// to carry information; out-of-range inputs wrap into neighbouring fields.
    pub fn from_components(sign: u16, exponent: i16, mantissa: u16) -> Self {
        let biased = exponent.wrapping_add(EXP_BIAS) as u16;
        Self((sign << 15) | (biased << 10) | (mantissa >> 6))
    }

    // ============ Constants ============

    /// Smallest positive subnormal (2^-24).
    pub const EPSILON: Self = Self(0x0001);

    /// Largest finite value (65504.0).
    pub const MAX: Self = Self(0x7BFF);

    /// Most negative finite value (-65504.0).
    pub const MIN: Self = Self(0xFBFF);

    /// Negative quiet NaN, the pattern every NaN hashes as.
    pub const NAN: Self = Self(0xFE00);

    pub const INFINITY: Self = Self(0x7C00);

    pub const NEG_INFINITY: Self = Self(0xFC00);

    pub const ZERO: Self = Self(0x0000);

    pub const NEG_ZERO: Self = Self(0x8000);

    pub const ONE: Self = Self(0x3C00);

    /// Size of the binary representation in bytes.
    pub const SIZE_OF: usize = FLOAT16_SIZE;

    // ============ Classification ============

    #[inline]
    pub const fn is_nan(self) -> bool {
        (self.0 & ABS_MASK) > EXP_MASK
    }

    /// Returns `true` for positive or negative infinity.
    #[inline]
    pub const fn is_infinity(self) -> bool {
        (self.0 & ABS_MASK) == EXP_MASK
    }

    #[inline]
    pub const fn is_positive_infinity(self) -> bool {
        self.0 == Self::INFINITY.0
    }

    #[inline]
    pub const fn is_negative_infinity(self) -> bool {
        self.0 == Self::NEG_INFINITY.0
    }

    /// Returns `true` if the sign bit is set, including for `-0` and negative NaNs.
    #[inline]
    pub const fn is_negative(self) -> bool {
        (self.0 & SIGN_MASK) != 0
    }

    /// Returns `true` when the exponent field is zero.
    ///
    /// Signed zeros are included; use [`Half::category`] to tell them apart
    /// from true subnormals.
    #[inline]
    pub const fn is_subnormal(self) -> bool {
        (self.0 & EXP_MASK) == 0
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        !self.is_infinity() && !self.is_nan()
    }

    #[inline]
    pub const fn is_normal(self) -> bool {
        !self.is_subnormal() && !self.is_infinity() && !self.is_nan()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        (self.0 & ABS_MASK) == 0
    }

    pub const fn category(self) -> Category {
        if self.is_nan() {
            Category::NaN
        } else if self.is_infinity() {
            Category::Infinity
        } else if self.is_zero() {
            Category::Zero
        } else if self.is_subnormal() {
            Category::Subnormal
        } else {
            Category::Normal
        }
    }

    // ============ Binary layout ============

    /// Native-endian bytes of the bit pattern.
    #[inline]
    pub const fn to_ne_bytes(self) -> [u8; 2] {
        self.0.to_ne_bytes()
    }

    #[inline]
    pub fn get_bytes(self) -> Vec<u8> {
        self.to_ne_bytes().to_vec()
    }

    #[inline]
    pub const fn from_ne_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_ne_bytes(bytes))
    }

    /// Read a native-endian half from `buf` at `offset`.
    pub fn from_bytes(buf: &[u8], offset: usize) -> Result<Self> {
        ensure!(
            offset.checked_add(FLOAT16_SIZE).is_some_and(|end| end <= buf.len()),
            Error::buffer_out_of_bound(offset, FLOAT16_SIZE, buf.len())
        );
        Ok(Self::from_ne_bytes([buf[offset], buf[offset + 1]]))
    }

    // ============ Text ============

    /// Parse through `f32`.
    pub fn parse(s: &str) -> Result<Self> {
        s.trim()
            .parse::<f32>()
            .map(Self::from_f32)
            .map_err(|e| Error::parse_failure(s, e))
    }

    /// Never fails: `(false, ZERO)` when `s` is not a number.
    pub fn try_parse(s: &str) -> (bool, Self) {
        match Self::parse(s) {
            Ok(h) => (true, h),
            Err(_) => (false, Self::ZERO),
        }
    }

    /// Write the `Display` text into `dest`, returning the byte count, or
    /// `None` (leaving `dest` unspecified) when it does not fit.
    pub fn try_format(self, dest: &mut [u8]) -> Option<usize> {
        let mut cursor = std::io::Cursor::new(dest);
        write!(cursor, "{}", self).ok()?;
        Some(cursor.position() as usize)
    }
}

impl FromStr for Half {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Half::parse(s)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({:?} = {:#06x})", self.to_f32(), self.0)
    }
}

impl fmt::LowerExp for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerExp::fmt(&self.to_f32(), f)
    }
}

impl fmt::UpperExp for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperExp::fmt(&self.to_f32(), f)
    }
}
