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

//! Arithmetic on [`Half`]: widen to `f32`, operate, narrow back.
//!
//! Results therefore inherit the truncating narrowing of
//! [`crate::convert::float_to_half`]. Negation and `abs` touch only the sign
//! bit.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::half::{Half, ABS_MASK, SIGN_MASK};

impl Half {
    #[inline]
    pub const fn abs(self) -> Self {
        Half::from_bits(self.to_bits() & ABS_MASK)
    }

    /// Flips the sign bit, NaNs and zeros included.
    #[inline]
    pub const fn negate(self) -> Self {
        Half::from_bits(self.to_bits() ^ SIGN_MASK)
    }

    /// Unary plus; returns `self` unchanged.
    #[inline]
    pub const fn plus(self) -> Self {
        self
    }

    #[inline]
    pub fn increment(self) -> Self {
        Half::from_f32(self.to_f32() + 1.0)
    }

    #[inline]
    pub fn decrement(self) -> Self {
        Half::from_f32(self.to_f32() - 1.0)
    }

    /// `self` raised to `exp`, computed and returned in double precision.
    #[inline]
    pub fn pow(self, exp: Self) -> f64 {
        self.to_f64().powf(exp.to_f64())
    }
}

impl Neg for Half {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for Half {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Half::from_f32(self.to_f32() $op rhs.to_f32())
            }
        }

        impl $trait<f32> for Half {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f32) -> Self {
                Half::from_f32(self.to_f32() $op rhs)
            }
        }

        impl $assign_trait for Half {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *);
impl_binary_op!(Div, div, DivAssign, div_assign, /);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, %);
