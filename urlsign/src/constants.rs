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

// Env values used in urlsign.
pub const URLSIGN_ENCRYPTION_KEY: &str = "URLSIGN_ENCRYPTION_KEY";
pub const URLSIGN_ALGORITHM: &str = "URLSIGN_ALGORITHM";
pub const URLSIGN_EXPIRATION: &str = "URLSIGN_EXPIRATION";
pub const URLSIGN_TOKEN: &str = "URLSIGN_TOKEN";
pub const URLSIGN_INCLUDE_ALGORITHM_KEY: &str = "URLSIGN_INCLUDE_ALGORITHM_KEY";
pub const URLSIGN_BASE_URL: &str = "URLSIGN_BASE_URL";

// Prefixes understood in encryption key values.
pub const KEY_PREFIX_HEX: &str = "hex2bin:";
pub const KEY_PREFIX_BASE64: &str = "base64:";

// Default query keys.
pub const DEFAULT_ALGORITHM: &str = "sha256";
pub const DEFAULT_EXPIRATION_KEY: &str = "expires";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_SIGNATURE_KEY: &str = "signature";
pub const DEFAULT_ALGORITHM_KEY: &str = "algorithm";
