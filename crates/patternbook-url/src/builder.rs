//! Fluent URL builder.

use crate::encode::encode_component;
use crate::error::{Result, UrlError};
use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, trace};

const PATH_DELIMITER: char = '/';
const QUERY_DELIMITER: char = '&';
const QUERY_START: char = '?';
const NULL_VALUE: &str = "null";

/// A builder for constructing URLs from a base, path segments, and query
/// parameters.
///
/// Query keys and values are percent-encoded when added. Path segments are
/// only trimmed of surrounding slashes; a segment made only of slashes is
/// kept as an empty segment and renders as a trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    path_segments: Vec<String>,
    query_params: IndexMap<String, Option<String>>,
}

impl UrlBuilder {
    /// Create a builder for `base_url`, dropping any trailing slashes.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        if is_blank(base_url) {
            return Err(UrlError::EmptyBaseUrl);
        }

        let trimmed = base_url.trim_end_matches(PATH_DELIMITER);
        if trimmed.is_empty() {
            return Err(UrlError::EmptyBaseUrl);
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            path_segments: Vec::new(),
            query_params: IndexMap::new(),
        })
    }

    /// Like [`UrlBuilder::new`], treating an absent base URL as empty.
    pub fn from_optional(base_url: Option<&str>) -> Result<Self> {
        match base_url {
            Some(base_url) => Self::new(base_url),
            None => Err(UrlError::EmptyBaseUrl),
        }
    }

    /// Append a path segment, trimming leading and trailing slashes.
    ///
    /// Blank segments are rejected. `"/"` is accepted and adds an empty
    /// segment.
    pub fn append_path(&mut self, segment: &str) -> Result<&mut Self> {
        if is_blank(segment) {
            return Err(UrlError::EmptyPathSegment);
        }

        let trimmed = segment.trim_matches(PATH_DELIMITER);
        debug!(segment = trimmed, "appending path segment");
        self.path_segments.push(trimmed.to_string());
        Ok(self)
    }

    /// Set a query parameter.
    ///
    /// Setting an existing key replaces its value but keeps its original
    /// position. A `None` value renders as `key=null`.
    pub fn append_query_param(&mut self, key: &str, value: Option<&str>) -> Result<&mut Self> {
        if is_blank(key) {
            return Err(UrlError::EmptyQueryKey);
        }

        let encoded_key = encode_component(key);
        let encoded_value = value.map(encode_component);
        debug!(key = %encoded_key, value = ?encoded_value, "setting query parameter");
        self.query_params.insert(encoded_key, encoded_value);
        Ok(self)
    }

    /// Set several query parameters in order, stopping at the first invalid key.
    pub fn append_query_params<'p>(
        &mut self,
        params: impl IntoIterator<Item = (&'p str, Option<&'p str>)>,
    ) -> Result<&mut Self> {
        for (key, value) in params {
            self.append_query_param(key, value)?;
        }
        Ok(self)
    }

    /// Render the URL. Does not change the builder.
    pub fn build(&self) -> String {
        let mut url = self.base_url.clone();

        if !self.path_segments.is_empty() {
            // Leading empty segments collapse into the single separator.
            let path = self.path_segments.join("/");
            url.push(PATH_DELIMITER);
            url.push_str(path.trim_start_matches(PATH_DELIMITER));
        }

        if !self.query_params.is_empty() {
            url.push(QUERY_START);
            for (i, (key, value)) in self.query_params.iter().enumerate() {
                if i > 0 {
                    url.push(QUERY_DELIMITER);
                }
                url.push_str(key);
                url.push('=');
                url.push_str(value.as_deref().unwrap_or(NULL_VALUE));
            }
        }

        trace!(url = %url, "built url");
        url
    }

    /// Normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path segments in the order they were appended.
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Number of distinct query parameters.
    pub fn query_len(&self) -> usize {
        self.query_params.len()
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl TryFrom<&str> for UrlBuilder {
    type Error = UrlError;

    fn try_from(base_url: &str) -> Result<Self> {
        Self::new(base_url)
    }
}

impl TryFrom<String> for UrlBuilder {
    type Error = UrlError;

    fn try_from(base_url: String) -> Result<Self> {
        Self::new(base_url)
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
