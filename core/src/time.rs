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

//! Time related utils.

use chrono::TimeZone;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Build a datetime from a unix timestamp in seconds.
///
/// Returns `None` if the timestamp is out of range.
pub fn from_timestamp(secs: i64) -> Option<DateTime> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Parse a RFC 3339 string like `2022-12-25T14:59:11Z` into datetime.
pub fn parse_rfc3339(s: &str) -> chrono::ParseResult<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s).map(|v| v.with_timezone(&Utc))
}

/// Unix timestamp that lies `secs` seconds after `time`.
pub fn expires_at(time: DateTime, secs: u64) -> i64 {
    time.timestamp()
        .saturating_add(i64::try_from(secs).unwrap_or(i64::MAX))
}
