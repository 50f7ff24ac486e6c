//! Share link handling.
//!
//! A public link may point either at a shared resource directly or at a
//! file nested inside a shared folder (`<folder link>/<file name>`). The
//! nested form is what the folder-search fallback needs; the split into
//! parent key and leaf name is computed once here.

/// A share link split into the parent folder's key and the trailing
/// file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedLink<'a> {
    pub parent: &'a str,
    pub leaf: &'a str,
}

/// Split a share link at its last `/`.
///
/// Returns `None` when the link has no `/` at all or the split would
/// leave an empty parent or leaf, in which case no folder-search
/// fallback is possible.
pub fn split_nested(link: &str) -> Option<NestedLink<'_>> {
    let trimmed = link.trim_end_matches('/');
    let (parent, leaf) = trimmed.rsplit_once('/')?;
    if parent.is_empty() || leaf.is_empty() {
        return None;
    }
    Some(NestedLink { parent, leaf })
}
