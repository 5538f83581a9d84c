//! Injected collaborators
//!
//! The inferrer talks to the surrounding system only through these traits:
//! a dependency recorder called by generated resolvers, a media-type guesser
//! and a path classifier used by the file-path heuristic.

use regex::Regex;
use serde::Serialize;
use std::sync::{LazyLock, Mutex, PoisonError};

// ============================================================================
// Dependency Recording
// ============================================================================

/// Records that a consuming page depends on a node
///
/// Resolvers may run concurrently for unrelated queries, so implementations
/// must be safe to call from several threads.
pub trait DependencyRecorder: Send + Sync {
    /// Record that `page_path` read the node `node_id`
    fn record(&self, page_path: &str, node_id: &str);
}

impl<F> DependencyRecorder for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn record(&self, page_path: &str, node_id: &str) {
        self(page_path, node_id);
    }
}

/// Recorder that drops every dependency
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecorder;

impl DependencyRecorder for NoopRecorder {
    fn record(&self, _page_path: &str, _node_id: &str) {}
}

/// A single page → node dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDependency {
    /// Consuming page path
    pub path: String,
    /// Node the page read
    pub node_id: String,
}

/// In-memory dependency log
#[derive(Debug, Default)]
pub struct DependencyLog {
    entries: Mutex<Vec<PageDependency>>,
}

impl DependencyLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded dependencies, in recording order
    pub fn entries(&self) -> Vec<PageDependency> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Pages that read the given node
    pub fn pages_for(&self, node_id: &str) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|dep| dep.node_id == node_id)
            .map(|dep| dep.path.clone())
            .collect()
    }

    /// Number of recorded dependencies
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DependencyRecorder for DependencyLog {
    fn record(&self, page_path: &str, node_id: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PageDependency {
                path: page_path.to_string(),
                node_id: node_id.to_string(),
            });
    }
}

// ============================================================================
// Media Types
// ============================================================================

/// Fallback guess for unknown content
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guess for Windows executables (`.exe`, `.com`, `.dll`, ...)
pub const MS_DOWNLOAD: &str = "application/x-msdownload";

/// Guesses a media type from a path-like string
pub trait MediaTypeGuesser: Send + Sync {
    /// Guessed media type, or [`OCTET_STREAM`] when nothing matches
    fn guess(&self, path: &str) -> String;
}

/// Extension-based guesser backed by `mime_guess`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionGuesser;

impl MediaTypeGuesser for ExtensionGuesser {
    fn guess(&self, path: &str) -> String {
        mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(OCTET_STREAM)
            .to_string()
    }
}

// ============================================================================
// Path Classification
// ============================================================================

/// Matches strings starting at a filesystem root: `/x`, `\x`, `C:\x`, `C:/x`
static ROOTED_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]+:)?[\\/]").expect("valid rooted path regex"));

/// Pure predicates deciding whether a string is a relative reference
pub trait PathClassifier: Send + Sync {
    /// True when the string is not rooted on a filesystem
    fn is_relative_path(&self, s: &str) -> bool;

    /// True when the string has no scheme and no host
    fn is_relative_url(&self, s: &str) -> bool;
}

/// Default classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPathClassifier;

impl PathClassifier for DefaultPathClassifier {
    fn is_relative_path(&self, s: &str) -> bool {
        !ROOTED_PATH_REGEX.is_match(s)
    }

    fn is_relative_url(&self, s: &str) -> bool {
        if s.starts_with("//") {
            return false;
        }
        matches!(
            url::Url::parse(s),
            Err(url::ParseError::RelativeUrlWithoutBase)
        )
    }
}
