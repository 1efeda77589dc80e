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

use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

use crate::config::{get_default_config, Config, Endian};
use crate::ensure;
use crate::error::{Error, Result};
use crate::half::Half;
use crate::types::FLOAT16_SIZE;

fn put_u16(endian: Endian, buf: &mut [u8], value: u16) {
    match endian {
        Endian::Little => LittleEndian::write_u16(buf, value),
        Endian::Big => BigEndian::write_u16(buf, value),
        Endian::Native => NativeEndian::write_u16(buf, value),
    }
}

fn get_u16(endian: Endian, buf: &[u8]) -> u16 {
    match endian {
        Endian::Little => LittleEndian::read_u16(buf),
        Endian::Big => BigEndian::read_u16(buf),
        Endian::Native => NativeEndian::read_u16(buf),
    }
}

pub struct Writer {
    bf: Vec<u8>,
    endian: Endian,
}

impl Default for Writer {
    fn default() -> Self {
        Writer::with_config(get_default_config())
    }
}

impl Writer {
    pub fn with_config(config: Config) -> Writer {
        Writer {
            bf: Vec::new(),
            endian: config.endian,
        }
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }

    pub fn write_u16(&mut self, value: u16) {
        let start = self.bf.len();
        self.bf.resize(start + 2, 0);
        put_u16(self.endian, &mut self.bf[start..], value);
    }

    pub fn write_half(&mut self, value: Half) {
        self.write_u16(value.to_bits());
    }

    pub fn write_half_slice(&mut self, values: &[Half]) {
        self.reserve(values.len() * FLOAT16_SIZE);
        for &v in values {
            self.write_half(v);
        }
    }

    pub fn write_bytes(&mut self, v: &[u8]) {
        self.bf.extend_from_slice(v);
    }

    /// Overwrite a previously written half at byte `offset`.
    pub fn set_half(&mut self, offset: usize, value: Half) -> Result<()> {
        let len = self.bf.len();
        let slot = self
            .bf
            .get_mut(offset..offset.saturating_add(FLOAT16_SIZE))
            .ok_or_else(|| Error::buffer_out_of_bound(offset, FLOAT16_SIZE, len))?;
        put_u16(self.endian, slot, value.to_bits());
        Ok(())
    }
}

pub struct Reader<'de> {
    bf: &'de [u8],
    cursor: usize,
    endian: Endian,
}

impl<'bf> Reader<'bf> {
    pub fn new(bf: &'bf [u8]) -> Reader<'bf> {
        Reader::with_config(bf, get_default_config())
    }

    pub fn with_config(bf: &'bf [u8], config: Config) -> Reader<'bf> {
        Reader {
            bf,
            cursor: 0,
            endian: config.endian,
        }
    }

    fn move_next(&mut self, additional: usize) {
        self.cursor += additional;
    }

    #[inline]
    fn check_bound(&self, need: usize) -> Result<()> {
        ensure!(
            self.remaining() >= need,
            Error::buffer_out_of_bound(self.cursor, need, self.bf.len())
        );
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    pub fn get_cursor(&self) -> usize {
        self.cursor
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.check_bound(2)?;
        let result = get_u16(self.endian, &self.bf[self.cursor..]);
        self.move_next(2);
        Ok(result)
    }

    pub fn read_half(&mut self) -> Result<Half> {
        self.read_u16().map(Half::from_bits)
    }

    pub fn read_half_vec(&mut self, count: usize) -> Result<Vec<Half>> {
        let need = count.saturating_mul(FLOAT16_SIZE);
        self.check_bound(need)?;
        (0..count).map(|_| self.read_half()).collect()
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.check_bound(len)?;
        self.move_next(len);
        Ok(())
    }

    pub fn slice(&self) -> &[u8] {
        self.bf
    }
}
