
use tempfile::TempDir;

/// Fresh, empty directory removed when the returned guard drops.
#[allow(clippy::unwrap_used)]
pub(crate) fn scratch_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}
