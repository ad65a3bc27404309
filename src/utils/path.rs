//! ## path
//!
//! path utilities

use std::path::{Path, PathBuf};

/// Resolve `p` against `wrkdir` when it is relative
pub fn absolutize(wrkdir: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        wrkdir.join(p)
    }
}
