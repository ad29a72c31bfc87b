//! Target directory resolution

use crate::request::{join_segment, Location, TargetDirectory};
use std::path::Path;

/// Compute the folder that receives the artifacts.
///
/// `default_root` is already anchored to the working directory by the caller,
/// so this never reads process state. The name is always appended below the
/// base, even when it looks absolute. Nothing is normalized and nothing is
/// checked on disk.
pub fn resolve(default_root: &Path, artifact_name: &str, location: &Location) -> TargetDirectory {
    let base = match location {
        Location::Default => default_root,
        Location::Custom(base) => base.as_path(),
    };
    TargetDirectory::new(join_segment(base, artifact_name))
}
