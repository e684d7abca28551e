// SPDX-License-Identifier: MPL-2.0
//! The playable entry type and its enclosing group identifier.

use super::media::MediaKind;
use std::fmt;

/// Identifier of the folder/group enclosing an entry.
///
/// Opaque to the engine; listings built from a filesystem use the directory
/// path, listings built from markup use whatever the page provides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The root-level group (entries not nested in any folder).
    #[must_use]
    pub fn root() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One playable item in the listing.
///
/// Entries are immutable once constructed; the listing owns them and hands
/// out references.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Opaque resource locator, analogous to a URL.
    target: String,
    kind: MediaKind,
    group: GroupId,
}

impl Entry {
    #[must_use]
    pub fn new(target: impl Into<String>, kind: MediaKind, group: GroupId) -> Self {
        Self {
            target: target.into(),
            kind,
            group,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn group(&self) -> &GroupId {
        &self.group
    }
}
