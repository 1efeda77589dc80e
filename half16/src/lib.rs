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

//! # half16
//!
//! An IEEE 754 binary16 ("half precision") floating-point type.
//!
//! ```
//! use half16::Half;
//!
//! let h = Half::from(72.0f32);
//! assert_eq!(h.to_f32(), 72.0);
//! assert_eq!(Half::INFINITY + Half::from(2u8), Half::INFINITY);
//!
//! // Every NaN equals every other NaN, but NaN is unordered.
//! let other_nan = Half::from_bits(0x7C01);
//! assert_eq!(Half::NAN, other_nan);
//! assert!(!(Half::NAN <= other_nan));
//! ```
//!
//! Widening to `f32` is exact. Narrowing from `f32` truncates the dropped
//! mantissa bits instead of rounding to nearest, and arithmetic (which runs
//! in `f32`) inherits that truncation.

pub use half16_core::{
    aggregate, buffer, cast, config, convert, error, math, stream, tables, types,
};
pub use half16_core::{
    get_default_config, set_default_config, Category, Config, Converted, Endian, Error, Half,
    HalfIterExt, NumericTarget, ReadHalfExt, Reader, Result, WriteHalfExt, Writer,
};
