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

//! Elementary functions on [`Half`], evaluated in `f64` and narrowed back.

use crate::ensure;
use crate::error::{Error, Result};
use crate::half::Half;

/// Tie-breaking rule for the `round*` functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MidpointRounding {
    #[default]
    ToEven,
    AwayFromZero,
}

#[inline]
fn unary(x: Half, f: impl FnOnce(f64) -> f64) -> Half {
    Half::from_f64(f(x.to_f64()))
}

#[inline]
fn binary(x: Half, y: Half, f: impl FnOnce(f64, f64) -> f64) -> Half {
    Half::from_f64(f(x.to_f64(), y.to_f64()))
}

fn round_mode(v: f64, mode: MidpointRounding) -> f64 {
    match mode {
        MidpointRounding::ToEven => v.round_ties_even(),
        MidpointRounding::AwayFromZero => v.round(),
    }
}

pub fn e() -> Half {
    Half::from_f64(std::f64::consts::E)
}

pub fn pi() -> Half {
    Half::from_f64(std::f64::consts::PI)
}

#[inline]
pub fn abs(x: Half) -> Half {
    x.abs()
}

macro_rules! unary_fns {
    ($($name:ident => $f:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: Half) -> Half {
                unary(x, f64::$f)
            }
        )*
    };
}

unary_fns!(
    acos => acos,
    acosh => acosh,
    asin => asin,
    asinh => asinh,
    atan => atan,
    atanh => atanh,
    cbrt => cbrt,
    ceiling => ceil,
    cos => cos,
    cosh => cosh,
    exp => exp,
    floor => floor,
    log => ln,
    log10 => log10,
    sin => sin,
    sinh => sinh,
    sqrt => sqrt,
    tan => tan,
    tanh => tanh,
    truncate => trunc,
);

/// Angle of the point `(x, y)`; note the argument order.
pub fn atan2(x: Half, y: Half) -> Half {
    binary(y, x, f64::atan2)
}

/// IEEE remainder: `x - y * n` where `n` is `x / y` rounded half to even.
pub fn ieee_remainder(x: Half, y: Half) -> Half {
    binary(x, y, |x, y| x - y * (x / y).round_ties_even())
}

/// Logarithm of `x` in base `base`.
pub fn log_base(x: Half, base: Half) -> Half {
    binary(x, base, f64::log)
}

/// Larger of two values; NaN if either is NaN.
pub fn max(x: Half, y: Half) -> Half {
    binary(x, y, |x, y| if x.is_nan() || y.is_nan() { f64::NAN } else { x.max(y) })
}

/// Smaller of two values; NaN if either is NaN.
pub fn min(x: Half, y: Half) -> Half {
    binary(x, y, |x, y| if x.is_nan() || y.is_nan() { f64::NAN } else { x.min(y) })
}

pub fn pow(x: Half, y: Half) -> Half {
    binary(x, y, f64::powf)
}

/// Round to the nearest integer, ties to even.
pub fn round(x: Half) -> Half {
    round_with(x, MidpointRounding::ToEven)
}

pub fn round_with(x: Half, mode: MidpointRounding) -> Half {
    unary(x, |v| round_mode(v, mode))
}

/// Largest `digits` accepted by [`round_digits`].
pub const MAX_ROUNDING_DIGITS: u32 = 15;

/// Round to `digits` fractional decimal digits; `digits` above
/// [`MAX_ROUNDING_DIGITS`] is an error.
pub fn round_digits(x: Half, digits: u32, mode: MidpointRounding) -> Result<Half> {
    ensure!(
        digits <= MAX_ROUNDING_DIGITS,
        Error::argument_out_of_range("digits", digits as u64, MAX_ROUNDING_DIGITS as u64)
    );
    let scale = 10f64.powi(digits as i32);
    Ok(unary(x, |v| round_mode(v * scale, mode) / scale))
}

/// `-1`, `0` or `1` by sign; signed zeros give `0`.
pub fn sign(x: Half) -> Result<i32> {
    if x.is_nan() {
        return Err(Error::undefined_operation("sign of NaN"));
    }
    Ok(if x > Half::ZERO {
        1
    } else if x < Half::ZERO {
        -1
    } else {
        0
    })
}
