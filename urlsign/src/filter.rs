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

//! Glue for HTTP middlewares that guard routes with signed URLs.
//!
//! The signer never writes responses. A middleware calls [`check_request`]
//! and turns the returned [`Rejection`] into whatever its framework uses.

use http::StatusCode;
use log::debug;
use urlsign_core::Error;

use super::signer::UrlSigner;

/// What a middleware should do with a request that failed verification.
#[derive(Debug)]
pub enum Rejection {
    /// Redirect with the error message flashed to the user.
    Redirect {
        /// Redirect target, `None` means the previous page.
        to: Option<String>,
        /// Message to show.
        message: String,
    },
    /// Answer with the not found page.
    NotFound {
        /// Message to show.
        message: String,
    },
    /// Let the error propagate.
    Error(Error),
}

impl Rejection {
    /// Pick the action for `err` following the signer's policy.
    ///
    /// Redirect wins over 404, and without either the error is kept.
    pub fn from_error(signer: &UrlSigner, err: Error) -> Self {
        if signer.should_redirect() {
            return Rejection::Redirect {
                to: signer.should_redirect_to().map(|v| v.to_string()),
                message: err.to_string(),
            };
        }

        if signer.should_show_404() {
            return Rejection::NotFound {
                message: err.to_string(),
            };
        }

        Rejection::Error(err)
    }

    /// Suggested response status.
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::Redirect { .. } => StatusCode::FOUND,
            Rejection::NotFound { .. } => StatusCode::NOT_FOUND,
            Rejection::Error(_) => StatusCode::FORBIDDEN,
        }
    }
}

/// Verify an incoming request and decide how to reject it.
pub fn check_request(
    signer: &UrlSigner,
    parts: &http::request::Parts,
) -> std::result::Result<(), Rejection> {
    signer.verify_request(parts).map_err(|err| {
        debug!("request {} rejected: {}", parts.uri, err.kind());
        Rejection::from_error(signer, err)
    })
}
