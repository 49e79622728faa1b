//! Path helpers for displaying source locations.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Returns `path` as an absolute, lexically normalized path.
///
/// Relative paths are resolved against the current working directory. `.`
/// components are dropped and `..` components pop their parent; symlinks are
/// not resolved.
pub fn absolutize(path: &Path) -> Result<PathBuf, io::Error> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&joined))
}

/// Expresses `path` relative to the directory `base`.
///
/// Both paths are absolutized first, so the result may climb out of `base`
/// with `..` components. Returns `None` when the two paths share no common
/// root (e.g. different drive prefixes) or cannot be absolutized.
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let path = absolutize(path).ok()?;
    let base = absolutize(base).ok()?;

    let mut path_components = path.components().peekable();
    let mut base_components = base.components().peekable();

    // The roots (prefix and root dir) must agree.
    loop {
        match (path_components.peek(), base_components.peek()) {
            (Some(p @ (Component::Prefix(_) | Component::RootDir)), Some(b))
                if p == b =>
            {
                path_components.next();
                base_components.next();
            }
            (Some(Component::Prefix(_) | Component::RootDir), _)
            | (_, Some(Component::Prefix(_) | Component::RootDir)) => return None,
            _ => break,
        }
    }

    while let (Some(p), Some(b)) = (path_components.peek(), base_components.peek()) {
        if p != b {
            break;
        }
        path_components.next();
        base_components.next();
    }

    let mut relative = PathBuf::new();
    for _ in base_components {
        relative.push("..");
    }
    for component in path_components {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn absolutize_keeps_absolute_paths() {
        assert_eq!(
            absolutize(Path::new("/a/b/c.rs")).unwrap(),
            PathBuf::from("/a/b/c.rs")
        );
    }

    #[test]
    fn absolutize_normalizes_dots() {
        assert_eq!(
            absolutize(Path::new("/a/./b/../c.rs")).unwrap(),
            PathBuf::from("/a/c.rs")
        );
    }

    #[test]
    fn absolutize_relative_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolutize(Path::new("x/y.rs")).unwrap(), cwd.join("x/y.rs"));
    }

    #[test]
    fn relative_inside_base() {
        let rel = relative_to(Path::new("/proj/src/main.rs"), Path::new("/proj")).unwrap();
        assert_eq!(rel, PathBuf::from("src/main.rs"));
    }

    #[test]
    fn relative_outside_base_climbs() {
        let rel = relative_to(Path::new("/other/lib.rs"), Path::new("/proj/src")).unwrap();
        assert_eq!(rel, PathBuf::from("../../other/lib.rs"));
    }

    #[test]
    fn relative_to_itself_is_dot() {
        let rel = relative_to(Path::new("/proj"), Path::new("/proj/")).unwrap();
        assert_eq!(rel, PathBuf::from("."));
    }

    #[test]
    fn relative_path_input_resolves_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let rel = relative_to(Path::new("a/b.rs"), &cwd).unwrap();
        assert_eq!(rel, PathBuf::from("a/b.rs"));
    }
}
