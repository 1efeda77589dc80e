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

//! Conversions between [`Half`] and other primitive types.
//!
//! Widening `From` impls go through `f32`. The checked `to_*` family mirrors
//! a general-purpose numeric converter: integral targets round half to even
//! and reject values outside the target range; `char` and date-time targets
//! are never supported.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::half::Half;
use crate::types::NumericTarget;

/// Result of [`Half::convert`].
#[derive(Clone, Debug, PartialEq)]
pub enum Converted {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(f64),
    String(String),
}

macro_rules! impl_integral_conversions {
    ($($ty:ident),*) => {
        paste::paste! {
            impl Half {
                $(
                    #[doc = "Round half to even and convert to `" $ty "`, failing when out of range or NaN."]
                    pub fn [<to_ $ty>](self) -> Result<$ty> {
                        let value = self.to_f32();
                        let rounded = (value as f64).round_ties_even();
                        if rounded >= $ty::MIN as f64 && rounded <= $ty::MAX as f64 {
                            Ok(rounded as $ty)
                        } else {
                            Err(Error::overflow(stringify!($ty), value))
                        }
                    }
                )*
            }

            $(
                impl From<$ty> for Half {
                    #[inline]
                    fn from(value: $ty) -> Self {
                        Half::from_f32(value as f32)
                    }
                }
            )*
        }
    };
}

impl_integral_conversions!(i8, u8, i16, u16, i32, u32, i64, u64);

impl Half {
    /// Zero (of either sign) is `false`; everything else, NaN included, is `true`.
    #[inline]
    pub fn to_bool(self) -> Result<bool> {
        Ok(!self.is_zero())
    }

    #[inline]
    pub fn to_f32_checked(self) -> Result<f32> {
        Ok(self.to_f32())
    }

    #[inline]
    pub fn to_f64_checked(self) -> Result<f64> {
        Ok(self.to_f64())
    }

    /// Exact widening for decimal consumers; non-finite values cannot be represented.
    pub fn to_decimal(self) -> Result<f64> {
        if self.is_finite() {
            Ok(self.to_f64())
        } else {
            Err(Error::overflow("decimal", self.to_f32()))
        }
    }

    pub fn to_char(self) -> Result<char> {
        Err(Error::unsupported_conversion(NumericTarget::CHAR.name()))
    }

    pub fn to_date_time(self) -> Result<NaiveDateTime> {
        Err(Error::unsupported_conversion(NumericTarget::DATE_TIME.name()))
    }

    #[inline]
    pub fn to_string_value(self) -> Result<String> {
        Ok(self.to_string())
    }

    /// Dispatch to the named conversion for `target`.
    pub fn convert(self, target: NumericTarget) -> Result<Converted> {
        Ok(match target {
            NumericTarget::BOOL => Converted::Bool(self.to_bool()?),
            NumericTarget::INT8 => Converted::I8(self.to_i8()?),
            NumericTarget::UINT8 => Converted::U8(self.to_u8()?),
            NumericTarget::INT16 => Converted::I16(self.to_i16()?),
            NumericTarget::UINT16 => Converted::U16(self.to_u16()?),
            NumericTarget::INT32 => Converted::I32(self.to_i32()?),
            NumericTarget::UINT32 => Converted::U32(self.to_u32()?),
            NumericTarget::INT64 => Converted::I64(self.to_i64()?),
            NumericTarget::UINT64 => Converted::U64(self.to_u64()?),
            NumericTarget::FLOAT32 => Converted::F32(self.to_f32_checked()?),
            NumericTarget::FLOAT64 => Converted::F64(self.to_f64_checked()?),
            NumericTarget::DECIMAL => Converted::Decimal(self.to_decimal()?),
            NumericTarget::STRING => Converted::String(self.to_string_value()?),
            NumericTarget::CHAR | NumericTarget::DATE_TIME => {
                return Err(Error::unsupported_conversion(target.name()))
            }
        })
    }
}

impl From<f32> for Half {
    #[inline]
    fn from(value: f32) -> Self {
        Half::from_f32(value)
    }
}

impl From<f64> for Half {
    #[inline]
    fn from(value: f64) -> Self {
        Half::from_f64(value)
    }
}

impl From<char> for Half {
    #[inline]
    fn from(value: char) -> Self {
        Half::from_f32(value as u32 as f32)
    }
}

impl From<Half> for f32 {
    #[inline]
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    #[inline]
    fn from(value: Half) -> Self {
        value.to_f64()
    }
}
