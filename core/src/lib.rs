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

//! Core components for signing URLs.
//!
//! This crate provides the foundational types for the urlsign ecosystem. It
//! knows how to take an URL apart, how to turn it into the string that gets
//! signed, and how to compute and check keyed hashes over that string. It
//! carries no policy: which query keys are used and when an URL counts as
//! expired is decided by the `urlsign` crate.
//!
//! ## Example
//!
//! ```
//! use urlsign_core::hash::Algorithm;
//! use urlsign_core::SignableUrl;
//!
//! let mut url = SignableUrl::parse("https://example.com/path?query=string");
//! url.query_push("expires", "1671980361");
//!
//! let signature = Algorithm::Sha256.base64url_hmac(b"secret", url.canonical().as_bytes());
//! url.query_push("signature", signature);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Keyed-hash algorithms and base64url
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: Random tokens

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod url;
pub use url::{canonical_string, SignableUrl};
