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

use half16::{get_default_config, set_default_config, Config, Endian, Half, Reader, Writer};

#[test]
fn test_config() {
    let default_cfg = get_default_config();
    assert_eq!(default_cfg.endian, Endian::Native);
    let mut writer = Writer::default();
    writer.write_half(Half::ONE);
    assert_eq!(writer.dump(), Half::ONE.to_ne_bytes().to_vec());

    let new_cfg = Config {
        endian: Endian::Big,
        ..default_cfg
    };
    set_default_config(new_cfg);
    assert_eq!(get_default_config(), new_cfg);
    let mut writer = Writer::default();
    writer.write_half(Half::ONE);
    let bytes = writer.dump();
    assert_eq!(bytes, vec![0x3C, 0x00]);
    assert_eq!(Reader::new(&bytes).read_half().unwrap(), Half::ONE);

    set_default_config(default_cfg);
    assert_eq!(get_default_config().endian, Endian::Native);
}
