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

//! Error type shared by every fallible `half16` operation.
//!
//! Variants are built through the lowercase helper constructors
//! (`Error::empty_sequence()`, `Error::overflow(..)`, ...) so call sites stay
//! on one line.

use std::borrow::Cow;
use std::num::ParseFloatError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A reduction that needs at least one element saw none.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// The operation has no defined result for its input (e.g. the sign of NaN).
    #[error("undefined operation: {0}")]
    UndefinedOperation(Cow<'static, str>),

    #[error("conversion from half to {target} is not supported")]
    UnsupportedConversion { target: &'static str },

    #[error("value {value} is out of range for {target}")]
    Overflow { target: &'static str, value: f32 },

    #[error("failed to parse {input:?} as half: {source}")]
    ParseFailure {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("buffer out of bound: offset {offset} + {need} > length {len}")]
    BufferOutOfBound {
        offset: usize,
        need: usize,
        len: usize,
    },

    #[error("object must be of type {expected}")]
    ArgumentType { expected: &'static str },

    #[error("{name} = {value} is out of range, expected at most {max}")]
    ArgumentOutOfRange {
        name: &'static str,
        value: u64,
        max: u64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    #[inline(always)]
    pub fn empty_sequence() -> Self {
        Error::EmptySequence
    }

    #[inline(always)]
    pub fn undefined_operation<S: Into<Cow<'static, str>>>(msg: S) -> Self {
        Error::UndefinedOperation(msg.into())
    }

    #[inline(always)]
    pub fn unsupported_conversion(target: &'static str) -> Self {
        Error::UnsupportedConversion { target }
    }

    #[inline(always)]
    pub fn overflow(target: &'static str, value: f32) -> Self {
        Error::Overflow { target, value }
    }

    #[inline(always)]
    pub fn parse_failure(input: &str, source: ParseFloatError) -> Self {
        Error::ParseFailure {
            input: input.to_string(),
            source,
        }
    }

    #[inline(always)]
    pub fn buffer_out_of_bound(offset: usize, need: usize, len: usize) -> Self {
        Error::BufferOutOfBound { offset, need, len }
    }

    #[inline(always)]
    pub fn argument_type(expected: &'static str) -> Self {
        Error::ArgumentType { expected }
    }

    #[inline(always)]
    pub fn argument_out_of_range(name: &'static str, value: u64, max: u64) -> Self {
        Error::ArgumentOutOfRange { name, value, max }
    }
}

/// Returns early with the given error when the condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}
