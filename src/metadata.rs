//! Request metadata: method, path segments, and query parameters.

use http::Method;

/// Everything a resource service hands the executor to describe one request.
///
/// Paths are held as individual segments so that caller-supplied values (such
/// as message IDs) are percent-encoded into a single opaque segment when the
/// final URL is built, never split into extra path components.
#[derive(Debug, Clone)]
pub(crate) struct RequestMetadata {
    /// The HTTP method.
    pub method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl RequestMetadata {
    /// Creates metadata for `method` on a fixed path like `"/messages/batch"`.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|part| !part.is_empty())
                .map(str::to_owned)
                .collect(),
            query: Vec::new(),
        }
    }

    /// Appends one caller-supplied path segment (escaped at URL build time).
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    /// Adds a query parameter; empty values are omitted entirely.
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.query.push((key, value));
        }
        self
    }

    /// The path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// The query pairs to append, already filtered of empty values.
    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// The logical path, for logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}
