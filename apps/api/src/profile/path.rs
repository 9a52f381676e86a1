//! Path navigation into the nested profile document.
//!
//! A path mixes mapping keys and sequence indices. Navigation is permissive:
//! any step that cannot be taken yields `None` instead of an error.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// One step of a profile path.
///
/// Deserialized untagged, so a path reads as a plain JSON array such as
/// `["experience", "previous", 1, "location"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{i}"),
            PathSegment::Key(k) => f.write_str(k),
        }
    }
}

/// Builds a `Vec<PathSegment>` from a mix of `&str` keys and `usize` indices.
macro_rules! profile_path {
    ($($seg:expr),* $(,)?) => {
        vec![$($crate::profile::path::PathSegment::from($seg)),*]
    };
}
pub(crate) use profile_path;

/// Takes a single step from `value`.
///
/// On a sequence the segment is an index (a key segment must parse as a
/// non-negative integer). On a mapping the segment is a key; an index
/// segment never matches a mapping. Scalars have no children.
fn step<'a>(value: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match (value, segment) {
        (Value::Array(items), PathSegment::Index(i)) => items.get(*i),
        (Value::Array(items), PathSegment::Key(k)) => {
            let i = k.trim().parse::<usize>().ok()?;
            items.get(i)
        }
        (Value::Object(map), PathSegment::Key(k)) => map.get(k),
        _ => None,
    }
}

/// Resolves `path` against `root`. An empty path returns `root` itself.
pub fn navigate<'a>(root: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    path.iter().try_fold(root, step)
}

/// Renders a path in dotted form for logs, e.g. `experience.previous.1`.
pub fn display_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
