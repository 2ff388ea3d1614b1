use std::path::{Component, Path, PathBuf};

/// Resolve a relative path taken from a solution or project file against a
/// base directory.
///
/// These paths conventionally use `\` separators and `..` hops. Resolution is
/// purely lexical so the result is usable as a dedup key: no filesystem
/// access, no symlink handling.
pub fn resolve_relative(base: &Path, relative: &str) -> PathBuf {
    let relative = relative.replace('\\', "/");
    let mut resolved = base.to_path_buf();

    for component in Path::new(&relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }

    resolved
}
