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

use std::thread;
use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;
use test_case::test_case;
use urlsign::{Algorithm, Config, ErrorKind, SecretKey, UrlSigner};

use super::{init_signer, init_signer_at, TEST_KEY};

#[test]
fn test_round_trip_all_algorithms() -> Result<()> {
    for algorithm in Algorithm::ALL {
        let signer = init_signer(
            Config::new()
                .with_algorithm(algorithm.name())
                .with_expiration(60)
                .with_token_length(16)
                .with_include_algorithm_key(true),
        );

        let url = signer.sign("https://example.com/path?query=string#section", None);
        signer.verify(&url)?;
    }
    Ok(())
}

#[test_case("https://example.com/search?algorithm=sha1" ; "supported algorithm name")]
#[test_case("https://example.com/search?algorithm=md5" ; "unsupported algorithm name")]
#[test_case("https://example.com/search?expires=soon&token=" ; "foreign reserved keys")]
fn test_round_trip_with_reserved_params(uri: &str) -> Result<()> {
    let signer = init_signer(Config::new().with_expiration(60));

    let url = signer.sign(uri, None);
    signer.verify(&url)?;
    Ok(())
}

#[test_case("https://example.com/path?query=string", "/path?", "/other?" ; "path")]
#[test_case("https://example.com/path?query=string", "query=string", "query=strinG" ; "query value")]
#[test_case("https://example.com/path?query=string", "https://", "http://" ; "scheme")]
#[test_case("https://example.com/path?query=string", "example.com", "example.org" ; "host")]
#[test_case("https://example.com/path?query=string#top", "#top", "#bottom" ; "fragment")]
fn test_tampering_is_detected(uri: &str, from: &str, to: &str) {
    let signer = init_signer(Config::new().with_expiration(60));

    let url = signer.sign(uri, None);
    let tampered = url.replacen(from, to, 1);
    assert_ne!(url, tampered);

    let err = signer.verify(&tampered).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UrlNotValid);
}

#[test]
fn test_tampered_expiration_is_detected() {
    let signer = init_signer(Config::new().with_expiration(10));

    let url = signer.sign("https://example.com/path", None);
    let tampered = url.replace("expires=1671980361", "expires=1871980361");

    let err = signer.verify(&tampered).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UrlNotValid);
}

#[test]
fn test_expiration_boundary() -> Result<()> {
    let config = Config::new().with_expiration(10);
    let url = init_signer(config.clone()).sign("https://example.com/path", None);
    assert!(url.contains("expires=1671980361"));

    // Valid up to and including the expiration second.
    init_signer_at(config.clone(), "2022-12-25T14:59:21Z").verify(&url)?;

    let err = init_signer_at(config, "2022-12-25T14:59:22Z")
        .verify(&url)
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UrlExpired);
    Ok(())
}

#[test]
fn test_zero_expiration_never_expires() -> Result<()> {
    let signer = init_signer_at(Config::new(), "2099-01-01T00:00:00Z");

    let url = signer.sign("https://example.com/path?expires=0", None);
    signer.verify(&url)?;
    Ok(())
}

#[test]
fn test_other_key_rejects() {
    let url = init_signer(Config::new()).sign("https://example.com/path", None);

    let other = UrlSigner::new(Config::new(), SecretKey::new(b"another key".to_vec()))
        .expect("config must be valid");
    let err = other.verify(&url).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UrlNotValid);
}

#[test]
fn test_tokens_are_random() {
    let signer = init_signer(Config::new().with_token_length(20));

    let first = signer.sign("https://example.com/path", None);
    let second = signer.sign("https://example.com/path", None);
    assert_ne!(first, second);
}

#[test]
fn test_custom_key_names() -> Result<()> {
    let signer = init_signer(
        Config::new()
            .with_expiration(60)
            .with_token_length(8)
            .with_include_algorithm_key(true)
            .with_expiration_key("e")
            .with_token_key("t")
            .with_signature_key("s")
            .with_algorithm_key("a"),
    );

    let url = signer.sign("https://example.com/path", None);
    assert!(url.contains("?e=1671980411&t="));
    assert!(url.contains("&a=sha256&s="));
    signer.verify(&url)?;
    Ok(())
}

#[test]
fn test_duplicate_key_names_rejected() {
    let key = SecretKey::parse(TEST_KEY).expect("test key must be valid");

    let err = UrlSigner::new(Config::new().with_expiration_key("signature"), key)
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::DuplicateKeyNames);
    assert!(err.is_config_error());
}

#[test]
fn test_concurrent_sign_and_verify() {
    let signer = init_signer(Config::new().with_expiration(60).with_token_length(16));

    thread::scope(|s| {
        for i in 0..8 {
            let signer = &signer;
            s.spawn(move || {
                for j in 0..50 {
                    let url = signer.sign(
                        &format!("https://example.com/items/{i}?page={j}"),
                        Some(Duration::from_secs(30)),
                    );
                    assert!(signer.verify(&url).is_ok(), "{url} must verify");
                }
            });
        }
    });
}
