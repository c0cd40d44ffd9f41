//! Parsed storage path.
//!
//! A [`StoragePath`] splits `scheme://authority/path` into its parts and
//! normalizes the path component: repeated `/` collapse to one and a
//! trailing `/` is dropped, so `/a//b/` and `/a/b` are the same path.

use std::fmt;
use std::str::FromStr;

use pathcat_types::{PathError, Result, PATH_SEPARATOR, SCHEME_SEPARATOR};

/// A storage path with an explicit scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoragePath {
    scheme: String,
    authority: String,
    /// Normalized absolute path, empty when the URI has no path.
    path: String,
}

impl StoragePath {
    /// Parse a `scheme://authority/path` string.
    ///
    /// Fails with [`PathError::MalformedPath`] when the scheme separator is
    /// missing or the scheme is empty or contains invalid characters.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (scheme, rest) = raw
            .split_once(SCHEME_SEPARATOR)
            .ok_or_else(|| PathError::malformed(raw, "missing scheme separator '://'"))?;

        if scheme.is_empty() {
            return Err(PathError::malformed(raw, "empty scheme"));
        }
        if !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(PathError::malformed(raw, "invalid characters in scheme"));
        }

        let (authority, path) = match rest.find(PATH_SEPARATOR) {
            Some(pos) => (&rest[..pos], &rest[pos..]),
            None => (rest, ""),
        };

        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            path: normalize(path),
        })
    }

    /// Scheme as written, without `://`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Authority (host, `host:port`, `container@account...`).
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Normalized path component; empty when absent.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path component, with `/` standing in for an absent path.
    pub fn path_or_root(&self) -> &str {
        if self.path.is_empty() {
            "/"
        } else {
            &self.path
        }
    }

    /// Non-empty path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(PATH_SEPARATOR).filter(|s| !s.is_empty())
    }

    /// `scheme://` prefix.
    pub fn scheme_prefix(&self) -> String {
        format!("{}{}", self.scheme, SCHEME_SEPARATOR)
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(path.len());
    for segment in path.split(PATH_SEPARATOR).filter(|s| !s.is_empty()) {
        out.push(PATH_SEPARATOR);
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push(PATH_SEPARATOR);
    }
    out
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.scheme, SCHEME_SEPARATOR, self.authority, self.path
        )
    }
}

impl FromStr for StoragePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for StoragePath {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
