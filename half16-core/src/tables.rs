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

//! Lookup tables driving the binary16 <-> binary32 conversions.
//!
//! Widening uses `mantissa`, `exponent` and `offset`, indexed by the 6-bit
//! sign+exponent class of a half. Narrowing uses `base` and `shift`, indexed
//! by the 9-bit sign+exponent of an `f32`. The tables are computed once per
//! process and never written afterwards.

use std::sync::OnceLock;

/// One f32 exponent unit (`1 << 23`).
const F32_EXP_UNIT: u32 = 0x0080_0000;
/// `(127 - 14) << 23`, re-biases a normalized half subnormal into f32 range.
const SUBNORMAL_REBIAS: u32 = 0x3880_0000;
/// `(127 - 15) << 23`, the bias difference for normal halves.
const NORMAL_REBIAS: u32 = 0x3800_0000;
const F32_SIGN: u32 = 0x8000_0000;
/// Exponent contribution that lifts a half Inf/NaN class to the f32 all-ones exponent.
const POS_INF_NAN_EXP: u32 = 0x4780_0000;
const NEG_INF_NAN_EXP: u32 = 0xC780_0000;

const HALF_SIGN: u16 = 0x8000;
const HALF_POS_INF: u16 = 0x7C00;
const HALF_NEG_INF: u16 = 0xFC00;

static TABLES: OnceLock<ConversionTables> = OnceLock::new();

pub struct ConversionTables {
    pub mantissa: [u32; 2048],
    pub exponent: [u32; 64],
    pub offset: [u16; 64],
    pub base: [u16; 512],
    pub shift: [u8; 512],
}

impl ConversionTables {
    /// Returns the process-wide tables, building them on first use.
    #[inline(always)]
    pub fn get() -> &'static ConversionTables {
        TABLES.get_or_init(|| {
            let tables = ConversionTables::build();
            log::debug!(
                "built half conversion tables: {} mantissa, {} exponent, {} base entries",
                tables.mantissa.len(),
                tables.exponent.len(),
                tables.base.len()
            );
            tables
        })
    }

    pub fn build() -> ConversionTables {
        let (base, shift) = base_and_shift_tables();
        ConversionTables {
            mantissa: mantissa_table(),
            exponent: exponent_table(),
            offset: offset_table(),
            base,
            shift,
        }
    }
}

/// Renormalizes a 10-bit subnormal half mantissa into an f32 bit pattern.
pub fn normalize_subnormal_mantissa(i: u32) -> u32 {
    let mut m = i << 13;
    let mut e = 0u32;
    while m & F32_EXP_UNIT == 0 {
        e = e.wrapping_sub(F32_EXP_UNIT);
        m <<= 1;
    }
    m &= !F32_EXP_UNIT;
    e = e.wrapping_add(SUBNORMAL_REBIAS);
    m | e
}

fn mantissa_table() -> [u32; 2048] {
    let mut table = [0u32; 2048];
    for (i, slot) in table.iter_mut().enumerate().take(1024).skip(1) {
        *slot = normalize_subnormal_mantissa(i as u32);
    }
    for (i, slot) in table.iter_mut().enumerate().skip(1024) {
        *slot = NORMAL_REBIAS + (((i - 1024) as u32) << 13);
    }
    table
}

fn exponent_table() -> [u32; 64] {
    let mut table = [0u32; 64];
    for (i, slot) in table.iter_mut().enumerate().take(31).skip(1) {
        *slot = (i as u32) << 23;
    }
    table[31] = POS_INF_NAN_EXP;
    table[32] = F32_SIGN;
    for (i, slot) in table.iter_mut().enumerate().take(63).skip(33) {
        *slot = F32_SIGN + (((i - 32) as u32) << 23);
    }
    table[63] = NEG_INF_NAN_EXP;
    table
}

fn offset_table() -> [u16; 64] {
    let mut table = [1024u16; 64];
    table[0] = 0;
    table[32] = 0;
    table
}

fn base_and_shift_tables() -> ([u16; 512], [u8; 512]) {
    let mut base = [0u16; 512];
    let mut shift = [0u8; 512];
    for i in 0..256usize {
        // Unbiased exponent, negated: large `e` means a small magnitude.
        let e = 127 - i as i32;
        let (b, s) = if e > 24 {
            // Too small even for a half subnormal.
            (0x0000, 24)
        } else if e > 14 {
            (0x0400u16 >> (e - 14), (e - 1) as u8)
        } else if e >= -15 {
            (((15 - e) as u16) << 10, 13)
        } else if e > -128 {
            // Finite f32 beyond half range saturates.
            (HALF_POS_INF, 24)
        } else {
            // f32 Inf/NaN keep the top mantissa bits.
            (HALF_POS_INF, 13)
        };
        base[i] = b;
        base[i | 0x100] = b | HALF_SIGN;
        shift[i] = s;
        shift[i | 0x100] = s;
    }
    debug_assert_eq!(base[0x1ff], HALF_NEG_INF);
    (base, shift)
}
