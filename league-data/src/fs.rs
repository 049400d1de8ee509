//! Filesystem helpers built on `cap-std` and `camino`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::{Component, PathBuf};

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a file for writing, resolving its parent directory
/// through ambient authority.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Return whether a path exists and is a regular file.
///
/// A missing path surfaces as an [`io::ErrorKind::NotFound`] error so callers
/// can tell "absent" apart from "present but not a file".
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Ensure the parent directory for `path` exists.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    if fs_utf8::Dir::open_ambient_dir(parent, ambient_authority()).is_ok() {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)
}

fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Split a parent path into an ambient base directory and the relative
/// remainder that `cap-std` may traverse.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();

    let (base, relative) = match std_parent.components().next() {
        // Windows drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, relative)
        }
        // Leading `..` components escape any base, so fold them into it.
        _ => {
            let mut base = Utf8PathBuf::from(".");
            let mut components = std_parent.components().peekable();
            while let Some(component) = components.next_if(|component| {
                matches!(component, Component::ParentDir | Component::CurDir)
            }) {
                if component == Component::ParentDir {
                    base.push("..");
                }
            }
            (base, components.collect::<PathBuf>())
        }
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;
    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(unix)]
    use crate::test_support::climb_from_cwd;
    use rstest::{fixture, rstest};
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn creates_nested_parents_and_round_trips(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let target = root.join("out/nested/table.csv");

        ensure_parent_dir(&target).expect("create parents");
        let mut file = create_utf8_file(&target).expect("create file");
        file.write_all(b"team\n").expect("write");
        drop(file);

        let mut contents = String::new();
        open_utf8_file(&target)
            .expect("open file")
            .read_to_string(&mut contents)
            .expect("read");
        assert_eq!(contents, "team\n");
        assert!(file_is_file(&target).expect("inspect file"));
    }

    #[rstest]
    fn existing_parent_needs_no_creation(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        std::fs::create_dir(root.join("sub")).expect("create sub");
        ensure_parent_dir(&root.join("sub/../table.csv")).expect("parent resolves");
        ensure_parent_dir(&root.join("table.csv")).expect("parent exists");
    }

    #[cfg(unix)]
    #[rstest]
    fn creates_parents_below_leading_parent_components(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let target = climb_from_cwd(&root.join("out/nested/table.csv"));
        assert!(target.as_str().starts_with(".."));

        ensure_parent_dir(&target).expect("create parents");

        assert!(root.join("out/nested").is_dir());
    }

    #[rstest]
    fn splits_leading_parent_components_into_base() {
        let (_, relative) = base_dir_and_relative(Utf8Path::new("../out/nested"))
            .expect("parent of the working directory opens");
        assert_eq!(relative, Utf8PathBuf::from("out/nested"));
    }

    #[rstest]
    fn directories_are_not_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let nested = root.join("folder");
        std::fs::create_dir(&nested).expect("create folder");

        assert!(!file_is_file(&nested).expect("inspect folder"));
    }

    #[rstest]
    fn missing_paths_report_not_found(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let err = file_is_file(&root.join("absent.csv")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
