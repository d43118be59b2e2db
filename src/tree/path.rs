//! Path string helpers for snapshot trees
//!
//! Snapshot nodes carry their location as a plain string joined with a
//! fixed separator. The helpers here build those strings and flatten
//! them into filename-safe tokens.

/// Separator used between components of a snapshot node path.
pub const SEP: char = '/';

/// Join a directory path and a child name with the separator.
///
/// A trailing separator on `dir` is not doubled, so joining "/" and
/// "etc" yields "/etc" rather than "//etc".
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with(SEP) {
        format!("{}{}", dir, name)
    } else {
        format!("{}{}{}", dir, SEP, name)
    }
}

/// Flatten a path into a single token usable inside a filename by
/// replacing every separator with an underscore.
pub fn flatten_path(path: &str) -> String {
    path.replace(SEP, "_")
}
