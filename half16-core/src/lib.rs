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

//! Core of `half16`: the binary16 value type and its conversion engine.
//!
//! Layering, leaf first:
//!
//! - [`tables`]: five lookup tables, built once per process.
//! - [`convert`]: `half_to_float` / `float_to_half` over those tables.
//! - [`half`]: the [`Half`] type, constants, classification, text and bytes.
//! - [`ordering`] and [`arith`]: comparison and operator impls.
//! - [`cast`], [`aggregate`], [`math`]: conversions, reductions and
//!   elementary functions built on the layers above.
//! - [`buffer`] and [`stream`]: binary I/O of the 2-byte layout.

pub mod aggregate;
pub mod arith;
pub mod buffer;
pub mod cast;
pub mod config;
pub mod convert;
pub mod error;
pub mod half;
pub mod math;
pub mod ordering;
pub mod stream;
pub mod tables;
pub mod types;

pub use aggregate::HalfIterExt;
pub use buffer::{Reader, Writer};
pub use cast::Converted;
pub use config::{get_default_config, set_default_config, Config, Endian};
pub use error::{Error, Result};
pub use half::Half;
pub use stream::{ReadHalfExt, WriteHalfExt};
pub use types::{Category, NumericTarget};
