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

use std::borrow::Cow;
use std::fmt;

use http::header::HOST;
use percent_encoding::percent_decode_str;

/// An URL split into the parts that take part in signing.
///
/// Query pairs are kept raw and in their original order, nothing is decoded
/// or re-encoded, so a URL survives a parse and rebuild byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignableUrl {
    /// URL scheme without `://`, may be empty.
    pub scheme: String,
    /// Host and optional port, may be empty.
    pub authority: String,
    /// URL path, may be empty.
    pub path: String,
    /// Raw query pairs, `None` value means the key had no `=`.
    pub query: Vec<(String, Option<String>)>,
    /// Fragment without `#`, may be empty.
    pub fragment: String,
}

impl SignableUrl {
    /// Split an absolute or relative URL into its parts.
    ///
    /// This never fails: anything that is not recognised as scheme or
    /// authority is treated as path.
    pub fn parse(url: &str) -> Self {
        let (base, fragment) = url.split_once('#').unwrap_or((url, ""));
        let (base, query) = base.split_once('?').unwrap_or((base, ""));

        let (scheme, hier) = match base.split_once("://") {
            Some((scheme, rest)) if is_scheme(scheme) => (scheme, Some(rest)),
            _ => ("", base.strip_prefix("//")),
        };

        let (authority, path) = match hier {
            Some(rest) => match rest.find('/') {
                Some(idx) => rest.split_at(idx),
                None => (rest, ""),
            },
            None => ("", base),
        };

        Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            path: path.to_string(),
            query: parse_query(query),
            fragment: fragment.to_string(),
        }
    }

    /// Build from an incoming request.
    ///
    /// Scheme falls back to `http` and authority to the `Host` header when
    /// the request uri is in origin form.
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        let uri = &parts.uri;

        let authority = match uri.authority() {
            Some(v) => v.as_str().to_string(),
            None => parts
                .headers
                .get(HOST)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string(),
        };

        Self {
            scheme: uri.scheme_str().unwrap_or("http").to_string(),
            authority,
            path: uri.path().to_string(),
            query: parse_query(uri.query().unwrap_or_default()),
            fragment: String::new(),
        }
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), Some(value.into())));
    }

    /// Get the percent decoded value of the first pair named `key`.
    ///
    /// A key present without `=` yields an empty value.
    pub fn query_get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.query
            .iter()
            .find(|(k, _)| decode(k) == key)
            .map(|(_, v)| v.as_deref().map(decode).unwrap_or_default())
    }

    /// Remove every pair named `key`.
    pub fn query_strip(&mut self, key: &str) {
        self.query.retain(|(k, _)| decode(k) != key);
    }

    /// Join the query pairs with `&`, in order.
    pub fn query_string(&self) -> String {
        let mut s = String::with_capacity(self.query_size());

        for (idx, (k, v)) in self.query.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }

            s.push_str(k);
            if let Some(v) = v {
                s.push('=');
                s.push_str(v);
            }
        }

        s
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.as_ref().map_or(0, |v| v.len() + 1) + 1)
            .sum::<usize>()
    }

    /// Canonical string of this URL, also its printable form.
    pub fn canonical(&self) -> String {
        canonical_string(
            &self.scheme,
            &self.authority,
            &self.path,
            &self.query_string(),
            &self.fragment,
        )
    }

    /// Canonical string with `base` standing in for scheme and authority.
    ///
    /// `base` is usually an application's base url such as
    /// `https://example.com/` or `https://example.com/index.php/` and pins
    /// the host that is signed over. If this URL's path already starts with
    /// the path of `base`, that prefix is taken off before joining so it is
    /// not repeated.
    pub fn canonical_with_base(&self, base: &str) -> String {
        let path = route_path(base, &self.path);
        canonical_string("", base, path, &self.query_string(), &self.fragment)
    }
}

impl From<&str> for SignableUrl {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for SignableUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Assemble an URL from its parts in the one format used for signing.
///
/// ```text
/// [scheme "://"] authority ["/"] path ["?" query] ["#" fragment]
/// ```
///
/// Leading slashes of `path` are collapsed so that exactly one `/` separates
/// it from whatever precedes it. Query pairs are taken as given, they are
/// never sorted.
pub fn canonical_string(
    scheme: &str,
    authority: &str,
    path: &str,
    query: &str,
    fragment: &str,
) -> String {
    let mut s = String::with_capacity(
        scheme.len() + authority.len() + path.len() + query.len() + fragment.len() + 6,
    );

    if !scheme.is_empty() {
        s.push_str(scheme);
        s.push_str("://");
    }
    s.push_str(authority);

    if !path.is_empty() {
        if !s.ends_with('/') {
            s.push('/');
        }
        s.push_str(path.trim_start_matches('/'));
    }

    if !query.is_empty() {
        s.push('?');
        s.push_str(query);
    }

    if !fragment.is_empty() {
        s.push('#');
        s.push_str(fragment);
    }

    s
}

/// Path of `path` relative to the path component of `base`.
fn route_path<'a>(base: &str, path: &'a str) -> &'a str {
    let base = SignableUrl::parse(base);
    let prefix = base.path.trim_end_matches('/');
    if prefix.is_empty() {
        return path;
    }

    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

fn parse_query(query: &str) -> Vec<(String, Option<String>)> {
    query
        .split('&')
        .filter(|v| !v.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), Some(v.to_string())),
            None => (pair.to_string(), None),
        })
        .collect()
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn decode(s: &str) -> Cow<'_, str> {
    percent_decode_str(s).decode_utf8_lossy()
}
