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

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The five mutually exclusive classes a half bit pattern falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Category {
    Zero = 0,
    Subnormal = 1,
    Normal = 2,
    Infinity = 3,
    NaN = 4,
}

/// Target of a dispatched conversion (see `Half::convert`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum NumericTarget {
    BOOL = 1,
    CHAR = 2,
    INT8 = 3,
    UINT8 = 4,
    INT16 = 5,
    UINT16 = 6,
    INT32 = 7,
    UINT32 = 8,
    INT64 = 9,
    UINT64 = 10,
    FLOAT32 = 11,
    FLOAT64 = 12,
    DECIMAL = 13,
    DATE_TIME = 14,
    STRING = 15,
}

impl NumericTarget {
    /// Human readable name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            NumericTarget::BOOL => "bool",
            NumericTarget::CHAR => "char",
            NumericTarget::INT8 => "i8",
            NumericTarget::UINT8 => "u8",
            NumericTarget::INT16 => "i16",
            NumericTarget::UINT16 => "u16",
            NumericTarget::INT32 => "i32",
            NumericTarget::UINT32 => "u32",
            NumericTarget::INT64 => "i64",
            NumericTarget::UINT64 => "u64",
            NumericTarget::FLOAT32 => "f32",
            NumericTarget::FLOAT64 => "f64",
            NumericTarget::DECIMAL => "decimal",
            NumericTarget::DATE_TIME => "date-time",
            NumericTarget::STRING => "string",
        }
    }

    /// Whether a conversion to this target can ever succeed.
    #[inline]
    pub const fn is_supported(self) -> bool {
        !matches!(self, NumericTarget::CHAR | NumericTarget::DATE_TIME)
    }
}

pub const FLOAT16_SIZE: usize = 2;
