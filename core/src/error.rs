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

use std::fmt;
use thiserror::Error;

/// The error type for urlsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
///
/// The first group is raised once while building a signer and means the
/// deployment is misconfigured. The second group is raised per URL by
/// verification and is meant to be handled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Algorithm is empty or not a supported keyed-hash algorithm
    IncorrectAlgorithm,
    /// Expiration query key is empty
    EmptyExpirationKey,
    /// Token query key is empty while tokens are enabled
    EmptyTokenKey,
    /// Signature query key is empty
    EmptySignatureKey,
    /// Algorithm query key is empty
    EmptyAlgorithmKey,
    /// Two configured query keys share the same name
    DuplicateKeyNames,
    /// The secret key is empty or could not be loaded
    MissingEncryptionKey,
    /// A relative path was signed without a configured base url
    MissingBaseUrl,

    /// The URL carries no signature
    MissingSignature,
    /// The URL names an algorithm that is not supported
    InvalidAlgorithm,
    /// The signature does not match the URL
    UrlNotValid,
    /// The URL is past its expiration time
    UrlExpired,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was raised while building a signer.
    pub fn is_config_error(&self) -> bool {
        self.kind.is_config()
    }

    /// Check if this error was raised while verifying a URL.
    pub fn is_verification_error(&self) -> bool {
        !self.kind.is_config()
    }
}

impl ErrorKind {
    /// Returns `true` for kinds raised at construction time.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ErrorKind::IncorrectAlgorithm
                | ErrorKind::EmptyExpirationKey
                | ErrorKind::EmptyTokenKey
                | ErrorKind::EmptySignatureKey
                | ErrorKind::EmptyAlgorithmKey
                | ErrorKind::DuplicateKeyNames
                | ErrorKind::MissingEncryptionKey
                | ErrorKind::MissingBaseUrl
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an incorrect algorithm error
    pub fn incorrect_algorithm() -> Self {
        Self::new(
            ErrorKind::IncorrectAlgorithm,
            "Algorithm is incorrect, see the list of supported algorithms.",
        )
    }

    /// Create an empty expiration key error
    pub fn empty_expiration_key() -> Self {
        Self::new(
            ErrorKind::EmptyExpirationKey,
            "Expiration key cannot be empty.",
        )
    }

    /// Create an empty token key error
    pub fn empty_token_key() -> Self {
        Self::new(ErrorKind::EmptyTokenKey, "Token key cannot be empty.")
    }

    /// Create an empty signature key error
    pub fn empty_signature_key() -> Self {
        Self::new(
            ErrorKind::EmptySignatureKey,
            "Signature key cannot be empty.",
        )
    }

    /// Create an empty algorithm key error
    pub fn empty_algorithm_key() -> Self {
        Self::new(
            ErrorKind::EmptyAlgorithmKey,
            "Algorithm key cannot be empty.",
        )
    }

    /// Create a duplicate key names error
    pub fn duplicate_key_names() -> Self {
        Self::new(
            ErrorKind::DuplicateKeyNames,
            "Expiration, Token, Signature or Algorithm keys cannot share the same name.",
        )
    }

    /// Create a missing encryption key error
    pub fn missing_encryption_key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingEncryptionKey, message)
    }

    /// Create a missing base url error
    pub fn missing_base_url() -> Self {
        Self::new(
            ErrorKind::MissingBaseUrl,
            "Base URL is required to sign a relative path.",
        )
    }

    /// Create a missing signature error
    pub fn missing_signature() -> Self {
        Self::new(ErrorKind::MissingSignature, "This URL have to be signed.")
    }

    /// Create an invalid algorithm error
    pub fn invalid_algorithm() -> Self {
        Self::new(
            ErrorKind::InvalidAlgorithm,
            "Algorithm is invalid or not supported.",
        )
    }

    /// Create an url not valid error
    pub fn url_not_valid() -> Self {
        Self::new(ErrorKind::UrlNotValid, "URL is not valid.")
    }

    /// Create an url expired error
    pub fn url_expired() -> Self {
        Self::new(ErrorKind::UrlExpired, "This URL has expired.")
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::IncorrectAlgorithm => write!(f, "incorrect algorithm"),
            ErrorKind::EmptyExpirationKey => write!(f, "empty expiration key"),
            ErrorKind::EmptyTokenKey => write!(f, "empty token key"),
            ErrorKind::EmptySignatureKey => write!(f, "empty signature key"),
            ErrorKind::EmptyAlgorithmKey => write!(f, "empty algorithm key"),
            ErrorKind::DuplicateKeyNames => write!(f, "duplicate key names"),
            ErrorKind::MissingEncryptionKey => write!(f, "missing encryption key"),
            ErrorKind::MissingBaseUrl => write!(f, "missing base url"),
            ErrorKind::MissingSignature => write!(f, "missing signature"),
            ErrorKind::InvalidAlgorithm => write!(f, "invalid algorithm"),
            ErrorKind::UrlNotValid => write!(f, "url not valid"),
            ErrorKind::UrlExpired => write!(f, "url expired"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
