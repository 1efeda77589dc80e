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

//! Process-wide defaults for the binary buffer layer.

use std::sync::{OnceLock, PoisonError, RwLock};

/// Byte order used when a half is written into or read from a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Endian {
    Little,
    Big,
    /// Host byte order, the same layout as [`crate::Half::to_ne_bytes`].
    #[default]
    Native,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Config {
    pub endian: Endian,
}

static DEFAULT_CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();

fn default_config_cell() -> &'static RwLock<Config> {
    DEFAULT_CONFIG.get_or_init(|| RwLock::new(Config::default()))
}

/// Config picked up by newly created buffers.
pub fn get_default_config() -> Config {
    // Config is Copy; a poisoned lock still holds a valid value.
    *default_config_cell()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replace the process default. Existing buffers keep the config they were built with.
pub fn set_default_config(config: Config) {
    log::trace!("half16 default config set to {:?}", config);
    *default_config_cell()
        .write()
        .unwrap_or_else(PoisonError::into_inner) = config;
}
