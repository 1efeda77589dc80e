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

//! Sum, average, min and max over sequences of [`Half`].
//!
//! Each reduction comes in four shapes: plain (`Half` items), nullable
//! (`Option<Half>` items, `None` skipped), and the `_by` forms of both that
//! project arbitrary items through a selector. Accumulation uses `Half`
//! arithmetic, so every partial sum is narrowed.
//!
//! `max`/`min` replace the running result only when `<`/`>` says so; since
//! those are `false` for NaN, a leading NaN sticks and later NaNs are ignored.

use crate::error::{Error, Result};
use crate::half::Half;

// ============ Sum ============

/// Sum of `values`; an empty sequence is an error.
pub fn sum<I: IntoIterator<Item = Half>>(values: I) -> Result<Half> {
    let mut iter = values.into_iter();
    let first = iter.next().ok_or_else(Error::empty_sequence)?;
    Ok(iter.fold(first, |acc, v| acc + v))
}

/// Sum of the present values, `None` when there are none.
pub fn sum_nullable<I: IntoIterator<Item = Option<Half>>>(values: I) -> Option<Half> {
    values.into_iter().fold(None, |acc, v| match (acc, v) {
        (Some(a), Some(b)) => Some(a + b),
        (acc, v) => acc.or(v),
    })
}

/// Sum of projected items, starting from zero.
pub fn sum_by<T, I, F>(items: I, mut selector: F) -> Half
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Half,
{
    items
        .into_iter()
        .fold(Half::ZERO, |acc, item| acc + selector(item))
}

/// Sum of the present projections, starting from zero.
pub fn sum_nullable_by<T, I, F>(items: I, mut selector: F) -> Half
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Option<Half>,
{
    items.into_iter().fold(Half::ZERO, |acc, item| match selector(item) {
        Some(v) => acc + v,
        None => acc,
    })
}

// ============ Average ============

fn mean(total: Half, count: usize) -> Half {
    total / Half::from_f32(count as f32)
}

pub fn average<I: IntoIterator<Item = Half>>(values: I) -> Result<Half> {
    let (total, count) = values
        .into_iter()
        .fold((Half::ZERO, 0usize), |(t, c), v| (t + v, c + 1));
    if count == 0 {
        return Err(Error::empty_sequence());
    }
    Ok(mean(total, count))
}

pub fn average_nullable<I: IntoIterator<Item = Option<Half>>>(values: I) -> Option<Half> {
    let (total, count) = values
        .into_iter()
        .flatten()
        .fold((Half::ZERO, 0usize), |(t, c), v| (t + v, c + 1));
    (count > 0).then(|| mean(total, count))
}

pub fn average_by<T, I, F>(items: I, selector: F) -> Result<Half>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Half,
{
    average(items.into_iter().map(selector))
}

pub fn average_nullable_by<T, I, F>(items: I, selector: F) -> Option<Half>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Option<Half>,
{
    average_nullable(items.into_iter().map(selector))
}

// ============ Max / Min ============

fn pick<I, P>(values: I, replace: P) -> Option<Half>
where
    I: IntoIterator<Item = Half>,
    P: Fn(Half, Half) -> bool,
{
    values.into_iter().fold(None, |acc, v| match acc {
        Some(r) if !replace(r, v) => acc,
        _ => Some(v),
    })
}

fn pick_nullable<I, P>(values: I, replace: P) -> Option<Half>
where
    I: IntoIterator<Item = Option<Half>>,
    P: Fn(Half, Half) -> bool,
{
    values.into_iter().fold(None, |acc, v| match (acc, v) {
        (None, v) => v,
        (Some(r), Some(v)) if replace(r, v) => Some(v),
        (acc, _) => acc,
    })
}

pub fn max<I: IntoIterator<Item = Half>>(values: I) -> Result<Half> {
    pick(values, |r, v| r < v).ok_or_else(Error::empty_sequence)
}

pub fn max_nullable<I: IntoIterator<Item = Option<Half>>>(values: I) -> Option<Half> {
    pick_nullable(values, |r, v| r < v)
}

pub fn max_by<T, I, F>(items: I, selector: F) -> Result<Half>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Half,
{
    max(items.into_iter().map(selector))
}

pub fn max_nullable_by<T, I, F>(items: I, selector: F) -> Option<Half>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Option<Half>,
{
    max_nullable(items.into_iter().map(selector))
}

pub fn min<I: IntoIterator<Item = Half>>(values: I) -> Result<Half> {
    pick(values, |r, v| r > v).ok_or_else(Error::empty_sequence)
}

pub fn min_nullable<I: IntoIterator<Item = Option<Half>>>(values: I) -> Option<Half> {
    pick_nullable(values, |r, v| r > v)
}

pub fn min_by<T, I, F>(items: I, selector: F) -> Result<Half>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Half,
{
    min(items.into_iter().map(selector))
}

pub fn min_nullable_by<T, I, F>(items: I, selector: F) -> Option<Half>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Option<Half>,
{
    min_nullable(items.into_iter().map(selector))
}

/// Method-call form of the plain reductions.
///
/// Names carry a `half_` prefix so they do not collide with
/// `Iterator::{sum, max, min}`.
pub trait HalfIterExt: Iterator<Item = Half> + Sized {
    fn half_sum(self) -> Result<Half> {
        sum(self)
    }

    fn half_average(self) -> Result<Half> {
        average(self)
    }

    fn half_max(self) -> Result<Half> {
        max(self)
    }

    fn half_min(self) -> Result<Half> {
        min(self)
    }
}

impl<I: Iterator<Item = Half>> HalfIterExt for I {}
