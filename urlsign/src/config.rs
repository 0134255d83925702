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

use std::str::FromStr;

use log::warn;
use serde::Deserialize;
use urlsign_core::Context;

use super::constants::*;

/// Config carries all the configuration for signing URLs.
///
/// A config is only checked when it is turned into a
/// [`UrlSigner`](crate::UrlSigner), after that it can no longer change.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds added to the current time to build the expiration of every
    /// signed URL. `None` signs URLs that never expire.
    ///
    /// `expiration` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`URLSIGN_EXPIRATION`]
    pub expiration: Option<u64>,
    /// Length of a random token added to every signed URL, `None` or `0`
    /// disables tokens.
    ///
    /// `token_length` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`URLSIGN_TOKEN`]
    pub token_length: Option<usize>,
    /// Name of the keyed-hash algorithm, `sha256` by default.
    ///
    /// Env value [`URLSIGN_ALGORITHM`] replaces it only if this field still
    /// holds the default.
    pub algorithm: String,
    /// Query key of the expiration timestamp.
    pub expiration_key: String,
    /// Query key of the random token.
    pub token_key: String,
    /// Query key of the signature.
    pub signature_key: String,
    /// Query key of the algorithm name.
    pub algorithm_key: String,
    /// Add the algorithm name to signed URLs.
    pub include_algorithm_key: bool,
    /// Filters should redirect on failure.
    pub redirect: bool,
    /// Where filters redirect to, the previous page if `None`.
    pub redirect_to: Option<String>,
    /// Filters should answer 404 on failure.
    pub show_404: bool,
    /// Application base url like `https://example.com/`.
    ///
    /// When set, verification signs over this base instead of the scheme
    /// and host of the incoming URL, and relative paths can be signed.
    ///
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`URLSIGN_BASE_URL`]
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expiration: None,
            token_length: None,
            algorithm: DEFAULT_ALGORITHM.to_string(),
            expiration_key: DEFAULT_EXPIRATION_KEY.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            signature_key: DEFAULT_SIGNATURE_KEY.to_string(),
            algorithm_key: DEFAULT_ALGORITHM_KEY.to_string(),
            include_algorithm_key: false,
            redirect: false,
            redirect_to: None,
            show_404: false,
            base_url: None,
        }
    }
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expiration in seconds
    pub fn with_expiration(mut self, secs: u64) -> Self {
        self.expiration = Some(secs);
        self
    }

    /// Set token length
    pub fn with_token_length(mut self, len: usize) -> Self {
        self.token_length = Some(len);
        self
    }

    /// Set algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Set expiration_key
    pub fn with_expiration_key(mut self, key: impl Into<String>) -> Self {
        self.expiration_key = key.into();
        self
    }

    /// Set token_key
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Set signature_key
    pub fn with_signature_key(mut self, key: impl Into<String>) -> Self {
        self.signature_key = key.into();
        self
    }

    /// Set algorithm_key
    pub fn with_algorithm_key(mut self, key: impl Into<String>) -> Self {
        self.algorithm_key = key.into();
        self
    }

    /// Set include_algorithm_key
    pub fn with_include_algorithm_key(mut self, include: bool) -> Self {
        self.include_algorithm_key = include;
        self
    }

    /// Set redirect
    pub fn with_redirect(mut self, redirect: bool) -> Self {
        self.redirect = redirect;
        self
    }

    /// Set redirect_to
    pub fn with_redirect_to(mut self, to: impl Into<String>) -> Self {
        self.redirect_to = Some(to.into());
        self
    }

    /// Set show_404
    pub fn with_show_404(mut self, show_404: bool) -> Self {
        self.show_404 = show_404;
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whether signed URLs carry a random token.
    pub fn token_enabled(&self) -> bool {
        matches!(self.token_length, Some(n) if n > 0)
    }

    /// Load config from env.
    ///
    /// Values already set are kept. Values that can't be parsed are
    /// skipped with a warning.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(URLSIGN_ALGORITHM) {
            if self.algorithm == DEFAULT_ALGORITHM {
                self.algorithm = v;
            }
        }
        if let Some(v) = env_parse::<u64>(ctx, URLSIGN_EXPIRATION) {
            self.expiration.get_or_insert(v);
        }
        if let Some(v) = env_parse::<usize>(ctx, URLSIGN_TOKEN) {
            self.token_length.get_or_insert(v);
        }
        if let Some(v) = env_parse::<bool>(ctx, URLSIGN_INCLUDE_ALGORITHM_KEY) {
            self.include_algorithm_key |= v;
        }
        if let Some(v) = ctx.env_var(URLSIGN_BASE_URL) {
            self.base_url.get_or_insert(v);
        }

        self
    }
}

fn env_parse<T: FromStr>(ctx: &Context, key: &str) -> Option<T> {
    let v = ctx.env_var(key)?;
    match v.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("env {key} has invalid value {v:?}, ignored");
            None
        }
    }
}
