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

use anyhow::Result;
use pretty_assertions::assert_eq;
use urlsign::Config;

use super::init_signer;

const URL: &str = "https://example.com/path?query=string";

#[test]
fn test_sign_with_no_expiration_in_config() {
    let signer = init_signer(Config::new());

    assert_eq!(
        signer.sign(URL, None),
        format!("{URL}&signature=ongZW4ttfJMqN757mwNXp5kx_3snwQhaDyI6JiV-5FM")
    );
}

#[test]
fn test_sign_with_included_algorithm() {
    let signer = init_signer(Config::new().with_include_algorithm_key(true));

    assert_eq!(
        signer.sign(URL, None),
        format!("{URL}&algorithm=sha256&signature=IldvSUQVJqTc8Gq47i0pEvuUYNjK_oRX1PAw-ZaXyM4")
    );
}

#[test]
fn test_sign_with_expiration_from_config() {
    let signer = init_signer(Config::new().with_expiration(10));

    assert_eq!(
        signer.sign(URL, None),
        format!("{URL}&expires=1671980361&signature=qohLh7fvypmDF9vktdJ6DBXH6fiKyBezNQblosN2sbA")
    );
}

#[test]
fn test_sign_with_overwritten_expiration_from_config() {
    let signer = init_signer(Config::new().with_expiration(10));

    assert_eq!(
        signer.sign(URL, Some(Duration::from_secs(20))),
        format!("{URL}&expires=1671980371&signature=IzHjHhkTOOBPTayZnk8f_ut0H4-3q0YrDb11slKPWWE")
    );
}

#[test]
fn test_sign_with_token() {
    let signer = init_signer(Config::new().with_token_length(12));

    let url = signer.sign(URL, None);
    let token = url
        .split('&')
        .find_map(|v| v.strip_prefix("token="))
        .expect("token must be present");
    assert_eq!(token.len(), 12);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    // Tokens make otherwise identical URLs distinct.
    assert_ne!(url, signer.sign(URL, None));
}

#[test]
fn test_sign_query_order() {
    let signer = init_signer(
        Config::new()
            .with_expiration(10)
            .with_token_length(8)
            .with_include_algorithm_key(true),
    );

    let url = signer.sign(URL, None);
    let keys: Vec<_> = url
        .split_once('?')
        .map(|(_, q)| q.split('&').filter_map(|p| p.split_once('=')).map(|(k, _)| k))
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(keys, ["query", "expires", "token", "algorithm", "signature"]);
}

#[test]
fn test_sign_path() -> Result<()> {
    let signer = init_signer(
        Config::new()
            .with_algorithm("sha1")
            .with_base_url("https://example.com/index.php/"),
    );

    assert_eq!(
        signer.sign_path("controller/method", None)?,
        "https://example.com/index.php/controller/method?signature=ZFCzKztQmn2yGb-ShnNyT5mF4eQ"
    );
    assert_eq!(
        signer.sign_path("controller/method", Some(Duration::from_secs(10)))?,
        "https://example.com/index.php/controller/method?expires=1671980361&signature=byUOHLW6p45GrUpMsVz3AlEBMYs"
    );
    assert_eq!(
        signer.sign_segments(&["path", "13"], None)?,
        "https://example.com/index.php/path/13?signature=iZd5igbJp6uYIjjLKdiiPkmON0E"
    );
    assert_eq!(
        signer.sign_path("/path/13", Some(Duration::from_secs(10)))?,
        "https://example.com/index.php/path/13?expires=1671980361&signature=HTGY25XucRbwm9LffdsTWHzn1Eg"
    );

    Ok(())
}
