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

//! `std::io` integration: read and write halves on any byte stream.
//!
//! The byte order is a type parameter, as in `byteorder`'s own extension
//! traits; `NativeEndian` reproduces [`Half::to_ne_bytes`].

use std::io::{self, Read, Write};

use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};

use crate::error::Result;
use crate::half::Half;

pub trait ReadHalfExt: Read {
    /// Read exactly two bytes as a half. A short stream yields `Error::Io`
    /// with kind `UnexpectedEof`.
    fn read_half<B: ByteOrder>(&mut self) -> Result<Half> {
        Ok(Half::from_bits(self.read_u16::<B>()?))
    }

    fn read_half_into<B: ByteOrder>(&mut self, dst: &mut [Half]) -> Result<()> {
        for slot in dst.iter_mut() {
            *slot = self.read_half::<B>()?;
        }
        Ok(())
    }
}

impl<R: Read + ?Sized> ReadHalfExt for R {}

pub trait WriteHalfExt: Write {
    fn write_half<B: ByteOrder>(&mut self, value: Half) -> Result<()> {
        self.write_u16::<B>(value.to_bits())?;
        Ok(())
    }

    fn write_halves<B: ByteOrder>(&mut self, values: &[Half]) -> Result<()> {
        for &v in values {
            self.write_half::<B>(v)?;
        }
        Ok(())
    }

    /// Write the decimal text of `value`.
    fn write_half_text(&mut self, value: Half) -> Result<()> {
        write!(self, "{}", value)?;
        Ok(())
    }

    /// Write the decimal text of `value` followed by a newline.
    fn write_half_line(&mut self, value: Half) -> Result<()> {
        writeln!(self, "{}", value)?;
        Ok(())
    }
}

impl<W: Write + ?Sized> WriteHalfExt for W {}

/// Whether an error came from running out of input.
pub fn is_eof(err: &crate::error::Error) -> bool {
    matches!(err, crate::error::Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
