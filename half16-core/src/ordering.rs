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

//! Equality, hashing and ordering for [`Half`].
//!
//! Three relations coexist and deliberately disagree on NaN:
//!
//! - `==` is bit equality, except that every NaN equals every other NaN.
//! - `<`, `<=`, `>`, `>=` follow IEEE 754: any NaN operand yields `false`,
//!   and `+0` compares equal to `-0`.
//! - [`Half::compare`] is a sort order in which NaN sorts below everything
//!   and all NaNs tie.

use std::any::Any;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::half::Half;

impl Half {
    /// Three-way comparison used for sorting.
    pub fn compare(self, other: Self) -> Ordering {
        if self < other || (self.is_nan() && !other.is_nan()) {
            Ordering::Less
        } else if self > other || (!self.is_nan() && other.is_nan()) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// [`Half::compare`] as `-1`, `0` or `1`.
    #[inline]
    pub fn compare_to(self, other: Self) -> i32 {
        self.compare(other) as i32
    }

    /// Compare against a dynamically typed operand.
    ///
    /// `Option::<Half>::None` ranks below every half; any type other than
    /// `Half` or `Option<Half>` is rejected.
    pub fn compare_to_any(self, other: &dyn Any) -> Result<i32> {
        if let Some(h) = other.downcast_ref::<Half>() {
            return Ok(self.compare_to(*h));
        }
        match other.downcast_ref::<Option<Half>>() {
            Some(Some(h)) => Ok(self.compare_to(*h)),
            Some(None) => Ok(1),
            None => Err(Error::argument_type("Half")),
        }
    }
}

impl PartialEq for Half {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits() || (self.is_nan() && other.is_nan())
    }
}

impl Eq for Half {}

impl Hash for Half {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // NaNs are mutually equal, so they must share one hash.
        let bits = if self.is_nan() {
            Half::NAN.to_bits()
        } else {
            self.to_bits()
        };
        bits.hash(state);
    }
}

/// Orders by numeric value, which does not always agree with `==`:
/// `+0` and `-0` are unequal under `==` but `partial_cmp` gives
/// `Some(Equal)`, and two NaNs are equal under `==` but unordered here.
/// Use [`Half::compare`] for sorting and deduplication.
impl PartialOrd for Half {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        self.to_f32().partial_cmp(&other.to_f32())
    }
}
