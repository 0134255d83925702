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

//! Signed, time limited URLs.
//!
//! A signed URL carries an optional expiration timestamp, an optional random
//! token and a base64url encoded HMAC over everything else in the URL. Only
//! holders of the secret key can produce one, and any change to path, query
//! or fragment breaks the signature.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use urlsign::{Config, SecretKey, UrlSigner};
//!
//! # fn main() -> urlsign::Result<()> {
//! let signer = UrlSigner::new(
//!     Config::new().with_expiration(3600),
//!     SecretKey::parse("hex2bin:6ece79d55cd04503600bd97520a0138a")?,
//! )?;
//!
//! let url = signer.sign("https://example.com/download?file=report.pdf", None);
//! signer.verify(&url)?;
//!
//! let short = signer.sign("https://example.com/preview", Some(Duration::from_secs(60)));
//! signer.verify(&short)?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod key;
pub use key::SecretKey;

mod signer;
pub use signer::UrlSigner;

pub mod filter;

pub use urlsign_core::hash::Algorithm;
pub use urlsign_core::{Context, Error, ErrorKind, OsEnv, Result, SignableUrl, StaticEnv};
