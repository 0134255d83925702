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

use std::fmt::{Debug, Formatter};

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use urlsign_core::{Context, Error, Result};

use super::constants::*;

/// SecretKey is the application wide key that URLs are signed with.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create a key from raw bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self(key.into())
    }

    /// Parse a key in one of the textual forms used in settings files.
    ///
    /// - `hex2bin:<hex>` is hex decoded
    /// - `base64:<base64>` is base64 decoded
    /// - anything else is taken as raw bytes
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();

        if let Some(v) = value.strip_prefix(KEY_PREFIX_HEX) {
            let key = hex::decode(v).map_err(|e| {
                Error::missing_encryption_key("Encryption key is not valid hex.").with_source(e)
            })?;
            return Ok(Self(key));
        }

        if let Some(v) = value.strip_prefix(KEY_PREFIX_BASE64) {
            let key = BASE64_STANDARD.decode(v).map_err(|e| {
                Error::missing_encryption_key("Encryption key is not valid base64.").with_source(e)
            })?;
            return Ok(Self(key));
        }

        Ok(Self(value.as_bytes().to_vec()))
    }

    /// Load key from env value [`URLSIGN_ENCRYPTION_KEY`].
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let v = ctx.env_var(URLSIGN_ENCRYPTION_KEY).ok_or_else(|| {
            Error::missing_encryption_key(format!(
                "Encryption key is missing, please set env {URLSIGN_ENCRYPTION_KEY}."
            ))
        })?;

        Self::parse(&v)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Check if the key has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for SecretKey {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("SecretKey(EMPTY)")
        } else {
            f.write_str("SecretKey(***)")
        }
    }
}
