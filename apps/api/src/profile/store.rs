//! Profile Store: the in-memory profile document plus its keyword index.
//!
//! Reads never fail: unresolvable paths and unknown keywords come back as
//! `None`. Writes report success as a plain `bool`.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::profile::path::{display_path, navigate, PathSegment};
use crate::profile::seed::{default_keywords, default_profile, CATEGORIES};

pub const DEFAULT_SKILL_CATEGORY: &str = "primary";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile document must be a JSON object")]
    NotAnObject,

    #[error("profile is missing required category '{0}'")]
    MissingCategory(String),

    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse profile file: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape accepted by [`ProfileStore::from_file`].
#[derive(Debug, Deserialize)]
struct ProfileFile {
    profile: Value,
    #[serde(default)]
    keywords: Option<HashMap<String, Vec<PathSegment>>>,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    data: Value,
    keywords: HashMap<String, Vec<PathSegment>>,
}

impl ProfileStore {
    /// Builds a store from a profile document and keyword map.
    /// Keywords are stored lowercased.
    pub fn new<K, I>(data: Value, keywords: I) -> Result<Self, ProfileError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Vec<PathSegment>)>,
    {
        let map = data.as_object().ok_or(ProfileError::NotAnObject)?;
        if let Some(missing) = CATEGORIES.iter().find(|c| !map.contains_key(**c)) {
            return Err(ProfileError::MissingCategory(missing.to_string()));
        }

        let keywords = keywords
            .into_iter()
            .map(|(k, path)| (k.as_ref().to_lowercase(), path))
            .collect();

        Ok(Self { data, keywords })
    }

    /// The built-in dataset.
    pub fn seeded() -> Self {
        Self {
            data: default_profile(),
            keywords: default_keywords()
                .into_iter()
                .map(|(k, path)| (k.to_string(), path))
                .collect(),
        }
    }

    /// Loads `{"profile": {...}, "keywords": {...}}` from disk. When the file
    /// has no `keywords` table the built-in keyword map is used.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path)?;
        let file: ProfileFile = serde_json::from_str(&raw)?;

        let store = match file.keywords {
            Some(keywords) => Self::new(file.profile, keywords)?,
            None => Self::new(
                file.profile,
                default_keywords()
                    .into_iter()
                    .map(|(k, path)| (k.to_string(), path)),
            )?,
        };

        info!(
            "Loaded profile from {} ({} keywords)",
            path.display(),
            store.keywords.len()
        );
        Ok(store)
    }

    /// The whole profile document.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// A single top-level category.
    pub fn category(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    pub fn get(&self, path: &[PathSegment]) -> Option<&Value> {
        navigate(&self.data, path)
    }

    /// Replaces `<category>.<field>` with a string value.
    ///
    /// Only direct children of a top-level category can be updated; deeper
    /// fields such as `experience.current.role` are rejected.
    pub fn update(&mut self, category: &str, field: &str, value: &str) -> bool {
        let Some(slot) = self
            .data
            .get_mut(category)
            .and_then(Value::as_object_mut)
            .and_then(|fields| fields.get_mut(field))
        else {
            return false;
        };

        *slot = Value::String(value.to_string());
        info!("Updated {category}.{field} to {value}");
        true
    }

    pub fn search_by_keyword(&self, keyword: &str) -> Option<&Value> {
        let path = self.keywords.get(&keyword.to_lowercase())?;
        let found = self.get(path);
        if found.is_none() {
            debug!(
                "Keyword '{keyword}' maps to unresolvable path {}",
                display_path(path)
            );
        }
        found
    }

    /// Appends `skill` to `skills.<category>` unless the category is not a
    /// list or already holds the exact same string.
    pub fn add_skill(&mut self, skill: &str, category: &str) -> bool {
        let Some(list) = self
            .data
            .get_mut("skills")
            .and_then(Value::as_object_mut)
            .and_then(|skills| skills.get_mut(category))
            .and_then(Value::as_array_mut)
        else {
            return false;
        };

        if list.iter().any(|s| s.as_str() == Some(skill)) {
            return false;
        }

        list.push(Value::String(skill.to_string()));
        info!("Added skill: {skill} to {category}");
        true
    }
}
