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

//! Hash related utils.

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::DecodePaddingMode;
use base64::Engine;
use hmac::digest::KeyInit;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::Error;

/// base64url (RFC 4648 §5) without padding.
///
/// Decoding accepts input with or without trailing `=`.
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64url encode without padding.
pub fn base64url_encode(content: &[u8]) -> String {
    BASE64_URL.encode(content)
}

/// Base64url decode, padding optional.
pub fn base64url_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_URL
        .decode(content)
        .map_err(|e| Error::url_not_valid().with_source(e))
}

/// Keyed-hash algorithms that can be used to sign URLs.
///
/// Names follow the lowercase spelling used on the wire, e.g. `sha256`
/// or `sha3-256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC-SHA1
    Sha1,
    /// HMAC-SHA224
    Sha224,
    /// HMAC-SHA256
    Sha256,
    /// HMAC-SHA384
    Sha384,
    /// HMAC-SHA512/224
    Sha512_224,
    /// HMAC-SHA512/256
    Sha512_256,
    /// HMAC-SHA512
    Sha512,
    /// HMAC-SHA3-224
    Sha3_224,
    /// HMAC-SHA3-256
    Sha3_256,
    /// HMAC-SHA3-384
    Sha3_384,
    /// HMAC-SHA3-512
    Sha3_512,
}

impl Algorithm {
    /// All supported algorithms, in listing order.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
        Algorithm::Sha512,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
    ];

    /// Wire name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512_224 => "sha512/224",
            Algorithm::Sha512_256 => "sha512/256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sha3_224 => "sha3-224",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3_384 => "sha3-384",
            Algorithm::Sha3_512 => "sha3-512",
        }
    }

    /// Names of all supported algorithms.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|a| a.name())
    }

    /// Look up an algorithm by its exact wire name.
    ///
    /// Returns `None` for empty or unknown names. Matching is case
    /// sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Raw HMAC of `content` under `key`.
    pub fn hmac(&self, key: &[u8], content: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Sha1 => compute::<Hmac<Sha1>>(key, content),
            Algorithm::Sha224 => compute::<Hmac<Sha224>>(key, content),
            Algorithm::Sha256 => compute::<Hmac<Sha256>>(key, content),
            Algorithm::Sha384 => compute::<Hmac<Sha384>>(key, content),
            Algorithm::Sha512_224 => compute::<Hmac<Sha512_224>>(key, content),
            Algorithm::Sha512_256 => compute::<Hmac<Sha512_256>>(key, content),
            Algorithm::Sha512 => compute::<Hmac<Sha512>>(key, content),
            Algorithm::Sha3_224 => compute::<Hmac<Sha3_224>>(key, content),
            Algorithm::Sha3_256 => compute::<Hmac<Sha3_256>>(key, content),
            Algorithm::Sha3_384 => compute::<Hmac<Sha3_384>>(key, content),
            Algorithm::Sha3_512 => compute::<Hmac<Sha3_512>>(key, content),
        }
    }

    /// Base64url encoded HMAC of `content` under `key`.
    pub fn base64url_hmac(&self, key: &[u8], content: &[u8]) -> String {
        base64url_encode(&self.hmac(key, content))
    }

    /// Check `tag` against the HMAC of `content` in constant time.
    pub fn verify_hmac(&self, key: &[u8], content: &[u8], tag: &[u8]) -> bool {
        match self {
            Algorithm::Sha1 => verify::<Hmac<Sha1>>(key, content, tag),
            Algorithm::Sha224 => verify::<Hmac<Sha224>>(key, content, tag),
            Algorithm::Sha256 => verify::<Hmac<Sha256>>(key, content, tag),
            Algorithm::Sha384 => verify::<Hmac<Sha384>>(key, content, tag),
            Algorithm::Sha512_224 => verify::<Hmac<Sha512_224>>(key, content, tag),
            Algorithm::Sha512_256 => verify::<Hmac<Sha512_256>>(key, content, tag),
            Algorithm::Sha512 => verify::<Hmac<Sha512>>(key, content, tag),
            Algorithm::Sha3_224 => verify::<Hmac<Sha3_224>>(key, content, tag),
            Algorithm::Sha3_256 => verify::<Hmac<Sha3_256>>(key, content, tag),
            Algorithm::Sha3_384 => verify::<Hmac<Sha3_384>>(key, content, tag),
            Algorithm::Sha3_512 => verify::<Hmac<Sha3_512>>(key, content, tag),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(Error::incorrect_algorithm)
    }
}

fn keyed<M: Mac + KeyInit>(key: &[u8]) -> M {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    <M as Mac>::new_from_slice(key).expect("hmac accepts keys of any length")
}

fn compute<M: Mac + KeyInit>(key: &[u8], content: &[u8]) -> Vec<u8> {
    let mut h = keyed::<M>(key);
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

fn verify<M: Mac + KeyInit>(key: &[u8], content: &[u8], tag: &[u8]) -> bool {
    let mut h = keyed::<M>(key);
    h.update(content);

    // `verify_slice` compares in constant time and rejects wrong lengths.
    h.verify_slice(tag).is_ok()
}
