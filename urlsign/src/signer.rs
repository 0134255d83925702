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

use std::time::Duration;

use log::debug;
use urlsign_core::hash::base64url_decode;
use urlsign_core::hash::Algorithm;
use urlsign_core::time::{expires_at, now, DateTime};
use urlsign_core::utils::random_alphanumeric;
use urlsign_core::{canonical_string, Context, Error, Result, SignableUrl};

use super::config::Config;
use super::key::SecretKey;

/// UrlSigner signs outgoing URLs and verifies incoming ones.
///
/// Config and key are checked once in [`UrlSigner::new`] and never change
/// afterwards, so a signer can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct UrlSigner {
    config: Config,
    algorithm: Algorithm,
    key: SecretKey,
    time: Option<DateTime>,
}

impl UrlSigner {
    /// Build a signer, failing on the first configuration problem found.
    ///
    /// Checks happen in this order:
    ///
    /// 1. algorithm is a supported keyed-hash algorithm
    /// 2. expiration key is not empty
    /// 3. token key is not empty if tokens are enabled
    /// 4. signature key is not empty
    /// 5. algorithm key is not empty
    /// 6. all used keys have distinct names
    /// 7. secret key is not empty
    pub fn new(config: Config, key: SecretKey) -> Result<Self> {
        let algorithm =
            Algorithm::from_name(&config.algorithm).ok_or_else(Error::incorrect_algorithm)?;

        if config.expiration_key.is_empty() {
            return Err(Error::empty_expiration_key());
        }
        if config.token_enabled() && config.token_key.is_empty() {
            return Err(Error::empty_token_key());
        }
        if config.signature_key.is_empty() {
            return Err(Error::empty_signature_key());
        }
        if config.algorithm_key.is_empty() {
            return Err(Error::empty_algorithm_key());
        }

        let mut keys = vec![
            config.expiration_key.as_str(),
            config.signature_key.as_str(),
            config.algorithm_key.as_str(),
        ];
        if config.token_enabled() {
            keys.push(config.token_key.as_str());
        }
        keys.sort_unstable();
        if keys.windows(2).any(|w| w[0] == w[1]) {
            return Err(Error::duplicate_key_names());
        }

        if key.is_empty() {
            return Err(Error::missing_encryption_key(
                "Encryption key is missing, a non empty key is required.",
            ));
        }

        Ok(Self {
            config,
            algorithm,
            key,
            time: None,
        })
    }

    /// Build a signer from config and key found in env.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let config = Config::default().from_env(ctx);
        let key = SecretKey::from_env(ctx)?;

        Self::new(config, key)
    }

    /// Specify the signing and verifying time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign and verify URLs.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The config this signer was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The algorithm used for signing.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign an absolute or relative URL.
    ///
    /// `expires_in` replaces the configured expiration for this call only.
    /// Sub-second precision is dropped.
    pub fn sign(&self, uri: &str, expires_in: Option<Duration>) -> String {
        self.sign_url(SignableUrl::parse(uri), expires_in)
    }

    /// Sign a path relative to the configured base url.
    pub fn sign_path(&self, path: &str, expires_in: Option<Duration>) -> Result<String> {
        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(Error::missing_base_url)?;

        let url = SignableUrl::parse(&canonical_string("", base, path, "", ""));
        Ok(self.sign_url(url, expires_in))
    }

    /// Sign path segments joined with `/`, relative to the configured base url.
    pub fn sign_segments<S: AsRef<str>>(
        &self,
        segments: &[S],
        expires_in: Option<Duration>,
    ) -> Result<String> {
        let path = segments
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join("/");

        self.sign_path(&path, expires_in)
    }

    /// Sign an already parsed URL.
    ///
    /// Query pairs are appended in a fixed order: expiration, token,
    /// algorithm and finally the signature. Existing pairs with the same
    /// names are left in place.
    pub fn sign_url(&self, mut url: SignableUrl, expires_in: Option<Duration>) -> String {
        let now = self.time.unwrap_or_else(now);

        let expiration = expires_in.map(|v| v.as_secs()).or(self.config.expiration);
        if let Some(secs) = expiration {
            url.query_push(&self.config.expiration_key, expires_at(now, secs).to_string());
        }

        if let Some(len) = self.config.token_length.filter(|v| *v > 0) {
            url.query_push(&self.config.token_key, random_alphanumeric(len));
        }

        if self.config.include_algorithm_key {
            url.query_push(&self.config.algorithm_key, self.algorithm.name());
        }

        let canonical = url.canonical();
        debug!("canonical url to sign: {canonical}");

        let signature = self
            .algorithm
            .base64url_hmac(self.key.as_bytes(), canonical.as_bytes());
        url.query_push(&self.config.signature_key, signature);

        url.canonical()
    }

    /// Verify an incoming URL.
    pub fn verify(&self, url: &str) -> Result<()> {
        self.verify_url(SignableUrl::parse(url))
    }

    /// Verify the URL of an incoming request.
    ///
    /// Servers only see the path and query of a request, not the scheme it
    /// was signed with, so the configured base url stands in for scheme and
    /// host. Returns `MissingBaseUrl` if none is configured.
    pub fn verify_request(&self, parts: &http::request::Parts) -> Result<()> {
        if self.config.base_url.is_none() {
            return Err(Error::missing_base_url());
        }

        self.verify_url(SignableUrl::from_parts(parts))
    }

    /// Verify an already parsed URL.
    ///
    /// Checks happen in this order and the first failure is returned:
    ///
    /// 1. signature is present, else `MissingSignature`
    /// 2. algorithm from the URL is supported, else `InvalidAlgorithm`. The
    ///    URL is only asked when `include_algorithm_key` is on, otherwise the
    ///    configured algorithm is used
    /// 3. signature matches the URL without its signature, else
    ///    `UrlNotValid`
    /// 4. expiration, if any, is not in the past, else `UrlExpired`
    pub fn verify_url(&self, mut url: SignableUrl) -> Result<()> {
        let signature = match url.query_get(&self.config.signature_key) {
            Some(v) if !v.is_empty() => v.into_owned(),
            _ => {
                debug!("url rejected: no signature");
                return Err(Error::missing_signature());
            }
        };

        let algorithm = if self.config.include_algorithm_key {
            url.query_get(&self.config.algorithm_key)
                .map_or(Some(self.algorithm), |v| Algorithm::from_name(&v))
        } else {
            Some(self.algorithm)
        };
        let Some(algorithm) = algorithm else {
            debug!("url rejected: unsupported algorithm");
            return Err(Error::invalid_algorithm());
        };

        // A signature that can't be decoded takes the same path as a wrong one.
        let tag = base64url_decode(&signature).unwrap_or_default();

        url.query_strip(&self.config.signature_key);
        let canonical = match &self.config.base_url {
            Some(base) => url.canonical_with_base(base),
            None => url.canonical(),
        };
        debug!("canonical url to verify: {canonical}");

        if !algorithm.verify_hmac(self.key.as_bytes(), canonical.as_bytes(), &tag) {
            debug!("url rejected: signature mismatch");
            return Err(Error::url_not_valid());
        }

        let expiration = url
            .query_get(&self.config.expiration_key)
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0);
        if let Some(expiration) = expiration {
            let now = self.time.unwrap_or_else(now);
            if now.timestamp() > expiration {
                debug!("url rejected: expired at {expiration}");
                return Err(Error::url_expired());
            }
        }

        Ok(())
    }

    /// Check if filters should redirect on failure.
    pub fn should_redirect(&self) -> bool {
        self.config.redirect
    }

    /// Where filters should redirect to, `None` means the previous page.
    pub fn should_redirect_to(&self) -> Option<&str> {
        self.config.redirect_to.as_deref()
    }

    /// Check if filters should show 404 on failure.
    pub fn should_show_404(&self) -> bool {
        self.config.show_404
    }
}
