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

use anyhow::Result;
use pretty_assertions::assert_eq;
use urlsign::{Config, Context, ErrorKind, StaticEnv, UrlSigner};

#[test]
fn test_config_from_toml() -> Result<()> {
    let cfg: Config = toml::from_str(
        r#"
expiration = 3600
token_length = 20
algorithm = "sha3-256"
include_algorithm_key = true
redirect = true
redirect_to = "/login"
base_url = "https://example.com/"
"#,
    )?;

    assert_eq!(cfg.expiration, Some(3600));
    assert_eq!(cfg.token_length, Some(20));
    assert_eq!(cfg.algorithm, "sha3-256");
    assert!(cfg.include_algorithm_key);
    assert!(cfg.redirect);
    assert_eq!(cfg.redirect_to.as_deref(), Some("/login"));
    assert_eq!(cfg.base_url.as_deref(), Some("https://example.com/"));

    // Missing fields keep their defaults.
    assert_eq!(cfg.signature_key, "signature");
    assert_eq!(cfg.expiration_key, "expires");
    assert!(!cfg.show_404);
    Ok(())
}

#[test]
fn test_config_from_json() -> Result<()> {
    let cfg: Config = serde_json::from_str(r#"{"signature_key": "sig", "show_404": true}"#)?;

    assert_eq!(
        cfg,
        Config::new().with_signature_key("sig").with_show_404(true)
    );
    Ok(())
}

#[test]
fn test_signer_from_env() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        (
            "URLSIGN_ENCRYPTION_KEY",
            "base64:bm90IGEgdmVyeSBnb29kIHNlY3JldA==",
        ),
        ("URLSIGN_ALGORITHM", "sha384"),
        ("URLSIGN_EXPIRATION", "120"),
        ("URLSIGN_INCLUDE_ALGORITHM_KEY", "true"),
    ]));

    let signer = UrlSigner::from_env(&ctx)?;
    assert_eq!(signer.algorithm().name(), "sha384");
    assert_eq!(signer.config().expiration, Some(120));

    let url = signer.sign("https://example.com/path", None);
    assert!(url.contains("&algorithm=sha384&signature="));
    signer.verify(&url)?;
    Ok(())
}

#[test]
fn test_signer_from_env_requires_key() {
    let ctx = Context::new().with_env(StaticEnv::from_pairs([("URLSIGN_ALGORITHM", "sha1")]));

    let err = UrlSigner::from_env(&ctx).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::MissingEncryptionKey);
}

#[test]
fn test_signer_from_env_rejects_unknown_algorithm() {
    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        ("URLSIGN_ENCRYPTION_KEY", "secret"),
        ("URLSIGN_ALGORITHM", "md5"),
    ]));

    let err = UrlSigner::from_env(&ctx).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::IncorrectAlgorithm);
    assert_eq!(
        err.to_string(),
        "Algorithm is incorrect, see the list of supported algorithms."
    );
}
