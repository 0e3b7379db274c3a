//! File-list chunking.
//!
//! Very long file lists can overflow operating-system argument limits, so a
//! command may be invoked several times over bounded slices of the list.
//! Chunking is purely positional: contiguous groups, original order, last
//! group possibly shorter.

/// Split `files` into bounded groups.
///
/// With no configured size (`None` or `0`) the whole list is one chunk,
/// even when empty. A positive size yields `ceil(n / size)` chunks, which
/// for an empty list means no chunks at all.
pub fn chunk(files: &[String], size: Option<usize>) -> Vec<&[String]> {
    match size {
        None | Some(0) => vec![files],
        Some(size) => files.chunks(size).collect(),
    }
}
