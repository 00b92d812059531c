use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Opaque, backend-assigned project identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the backend archive is saved under.
    #[must_use]
    pub fn archive_file_name(&self) -> String {
        format!("project_{}_images.zip", self.0)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A validated project snapshot as loaded from the backend.
///
/// `images` is index-addressed: an image's identity is its position. Both
/// index sets are guaranteed to be within `[0, images.len())`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub images: Vec<String>,
    pub deleted: BTreeSet<usize>,
    pub favorites: BTreeSet<usize>,
}

impl ProjectSnapshot {
    /// Build a snapshot, rejecting indexes outside the image range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the offending set and index.
    pub fn new(
        images: Vec<String>,
        deleted: impl IntoIterator<Item = usize>,
        favorites: impl IntoIterator<Item = usize>,
    ) -> Result<Self, CoreError> {
        let len = images.len();
        let deleted = collect_in_range("deleted", deleted, len)?;
        let favorites = collect_in_range("favorites", favorites, len)?;
        Ok(Self {
            images,
            deleted,
            favorites,
        })
    }
}

fn collect_in_range(
    field: &str,
    indexes: impl IntoIterator<Item = usize>,
    len: usize,
) -> Result<BTreeSet<usize>, CoreError> {
    let mut set = BTreeSet::new();
    for index in indexes {
        if index >= len {
            return Err(CoreError::Validation(format!(
                "{field} index {index} out of range for {len} images"
            )));
        }
        set.insert(index);
    }
    Ok(set)
}
