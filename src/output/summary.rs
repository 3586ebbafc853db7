//! Totals line printed under the tree

use crate::tree::TraversalResult;

/// Format totals as `N directories, M files`, singular for a count of one.
/// With `dirs_only` the file part is left out.
pub fn format_summary(result: &TraversalResult, dirs_only: bool) -> String {
    let dirs = format!(
        "{} {}",
        result.directories,
        if result.directories == 1 {
            "directory"
        } else {
            "directories"
        }
    );
    if dirs_only {
        return dirs;
    }
    format!(
        "{}, {} {}",
        dirs,
        result.files,
        if result.files == 1 { "file" } else { "files" }
    )
}
