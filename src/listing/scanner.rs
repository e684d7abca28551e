// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for building listings from a filesystem tree.
//!
//! Scans a directory recursively for supported media formats, classifies
//! each file by kind, and arranges the results as the grouped sibling
//! structure the overlay navigates over. Subdirectories become folder
//! nodes, ordered among the files according to the configured sort order.

use crate::config::SortOrder;
use crate::domain::{detect_media_kind, Entry, GroupId};
use crate::error::Result;
use crate::listing::{Listing, Node};
use std::path::{Path, PathBuf};

/// Scans `root` recursively and returns the resulting listing.
///
/// Hidden files and directories (leading dot) are skipped, as are files
/// with unsupported extensions. Subdirectories are kept even when they
/// contain no playable media; traversal passes over them.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn scan_listing(root: &Path, sort_order: SortOrder) -> Result<Listing> {
    Ok(Listing::new(scan_dir(root, sort_order)?))
}

fn scan_dir(dir: &Path, sort_order: SortOrder) -> Result<Vec<Node>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for dir_entry in std::fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();

        if is_hidden(&path) {
            continue;
        }
        if path.is_dir() || (path.is_file() && detect_media_kind(&path).is_some()) {
            paths.push(path);
        }
    }

    sort_paths(&mut paths, sort_order);

    let group = GroupId::new(dir.to_string_lossy());
    let mut nodes = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            let children = scan_dir(&path, sort_order)?;
            nodes.push(Node::folder(GroupId::new(path.to_string_lossy()), children));
        } else if let Some(kind) = detect_media_kind(&path) {
            nodes.push(Node::leaf(Entry::new(
                path.to_string_lossy(),
                kind,
                group.clone(),
            )));
        }
    }
    Ok(nodes)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Sorts sibling paths according to the specified sort order.
fn sort_paths(paths: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            paths.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}
