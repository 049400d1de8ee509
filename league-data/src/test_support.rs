//! Path helpers shared by unit tests.

use camino::{Utf8Path, Utf8PathBuf};

/// Rewrite an absolute path as `../../…` relative to the working directory,
/// climbing all the way to the root first.
#[cfg(unix)]
pub(crate) fn climb_from_cwd(absolute: &Utf8Path) -> Utf8PathBuf {
    let cwd = Utf8PathBuf::from_path_buf(std::env::current_dir().expect("working directory"))
        .expect("utf-8 working directory");
    let depth = cwd.components().skip(1).count();
    let mut climbed = Utf8PathBuf::new();
    for _ in 0..depth {
        climbed.push("..");
    }
    climbed.join(absolute.strip_prefix("/").expect("absolute path"))
}
