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

//! Stream-backed reads of halves, including a source that delivers data one
//! byte per `read()` call.

use byteorder::{BigEndian, LittleEndian, NativeEndian};
use half16::stream::is_eof;
use half16::{Half, ReadHalfExt, WriteHalfExt};
use std::io::{self, Read};

/// A `Read` implementation that delivers exactly one byte per `read()` call.
struct OneByteReader {
    data: Vec<u8>,
    pos: usize,
}

impl OneByteReader {
    fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl Read for OneByteReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

#[test]
fn test_stream_read_from_one_byte_source() {
    let mut buf = Vec::new();
    buf.write_half::<LittleEndian>(Half::from(72u8)).unwrap();
    buf.write_half::<BigEndian>(Half::MIN).unwrap();
    buf.write_half::<NativeEndian>(Half::EPSILON).unwrap();
    buf.write_halves::<LittleEndian>(&[Half::ONE, Half::NAN]).unwrap();

    let mut reader = OneByteReader::new(buf);
    assert_eq!(reader.read_half::<LittleEndian>().unwrap().to_f32(), 72.0);
    assert_eq!(reader.read_half::<BigEndian>().unwrap(), Half::MIN);
    assert_eq!(reader.read_half::<NativeEndian>().unwrap(), Half::EPSILON);
    let mut rest = [Half::ZERO; 2];
    reader.read_half_into::<LittleEndian>(&mut rest).unwrap();
    assert_eq!(rest[0], Half::ONE);
    assert!(rest[1].is_nan());
}

#[test]
fn test_stream_short_read_error() {
    let mut reader = OneByteReader::new(vec![0x01]);
    let result = reader.read_half::<LittleEndian>();
    assert!(is_eof(&result.unwrap_err()));
}

#[test]
fn test_text_writer() {
    let mut out = Vec::new();
    for v in [Half::from(-42i32), Half::INFINITY, Half::from(0.5f32)] {
        out.write_half_line(v).unwrap();
    }
    assert_eq!(String::from_utf8(out).unwrap(), "-42\ninf\n0.5\n");
}
