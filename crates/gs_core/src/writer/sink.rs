use std::fs;
use std::io;
use std::path::Path;

/// Destination the snapshot writer puts files into.
pub trait SnapshotSink {
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// Replace the contents of `path` with `contents`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl SnapshotSink for FsSink {
    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &S {
    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        (**self).create_dir_all(dir)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}
