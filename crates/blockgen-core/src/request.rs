//! Request and artifact types shared by every flow

use crate::error::GenerateError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Where the artifact folder should be placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Under the flow's default root (resolved against the working directory)
    Default,
    /// Under a user-supplied base path
    Custom(PathBuf),
}

/// Answers collected for a single generation run
///
/// The custom base path lives inside [`Location::Custom`], so it exists
/// exactly when the default location was declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub artifact_name: String,
    pub description: String,
    pub location: Location,
}

impl GenerationRequest {
    /// Build a request, rejecting empty fields
    pub fn new(
        artifact_name: impl Into<String>,
        description: impl Into<String>,
        location: Location,
    ) -> Result<Self, GenerateError> {
        let artifact_name = artifact_name.into();
        let description = description.into();

        if artifact_name.is_empty() {
            return Err(GenerateError::InvalidRequest(
                "artifact name cannot be empty".to_string(),
            ));
        }
        if description.is_empty() {
            return Err(GenerateError::InvalidRequest(
                "description cannot be empty".to_string(),
            ));
        }
        if let Location::Custom(base) = &location {
            if base.as_os_str().is_empty() {
                return Err(GenerateError::InvalidRequest(
                    "custom path cannot be empty".to_string(),
                ));
            }
        }

        Ok(Self {
            artifact_name,
            description,
            location,
        })
    }

    pub fn use_default_location(&self) -> bool {
        matches!(self.location, Location::Default)
    }

    pub fn custom_base_path(&self) -> Option<&Path> {
        match &self.location {
            Location::Default => None,
            Location::Custom(base) => Some(base),
        }
    }
}

/// Resolved folder that receives every artifact of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory(PathBuf);

impl TargetDirectory {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Path of a file placed directly inside this directory
    pub fn file(&self, relative_name: &str) -> PathBuf {
        join_segment(&self.0, relative_name)
    }
}

/// Append `segment` below `base`, even when `segment` is absolute
///
/// Root and drive prefixes are dropped so the result always stays under
/// `base`. Other components are kept as typed.
pub(crate) fn join_segment(base: &Path, segment: &str) -> PathBuf {
    let relative: PathBuf = Path::new(segment)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    base.join(relative)
}

impl AsRef<Path> for TargetDirectory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TargetDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Kinds of generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Component,
    AdminEditor,
    Readme,
}

impl ArtifactKind {
    /// File name for an artifact of this kind, e.g. `Promo.admin.tsx`
    pub fn file_name(&self, artifact_name: &str, extension: &str) -> String {
        match self {
            ArtifactKind::Component => format!("{}.{}", artifact_name, extension),
            ArtifactKind::AdminEditor => format!("{}.admin.{}", artifact_name, extension),
            ArtifactKind::Readme => format!("{}.readme", artifact_name),
        }
    }
}

/// One rendered file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub relative_name: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_empty_fields() {
        assert!(GenerationRequest::new("", "desc", Location::Default).is_err());
        assert!(GenerationRequest::new("Hero", "", Location::Default).is_err());
        assert!(
            GenerationRequest::new("Hero", "desc", Location::Custom(PathBuf::new())).is_err()
        );
    }

    #[test]
    fn test_custom_path_present_only_when_default_declined() {
        let default = GenerationRequest::new("Hero", "desc", Location::Default).unwrap();
        assert!(default.use_default_location());
        assert!(default.custom_base_path().is_none());

        let custom =
            GenerationRequest::new("Hero", "desc", Location::Custom("/tmp/out".into())).unwrap();
        assert!(!custom.use_default_location());
        assert_eq!(custom.custom_base_path(), Some(Path::new("/tmp/out")));
    }

    #[test]
    fn test_file_stays_inside_target_for_absolute_names() {
        let target = TargetDirectory::new(PathBuf::from("/work/reusables/Hero"));
        assert_eq!(target.file("Hero.tsx"), Path::new("/work/reusables/Hero/Hero.tsx"));
        assert_eq!(target.file("/Hero.tsx"), Path::new("/work/reusables/Hero/Hero.tsx"));
        assert_eq!(
            target.file("/nested/Hero.readme"),
            Path::new("/work/reusables/Hero/nested/Hero.readme")
        );
    }

    #[test]
    fn test_artifact_file_names() {
        assert_eq!(ArtifactKind::Component.file_name("Promo", "tsx"), "Promo.tsx");
        assert_eq!(
            ArtifactKind::AdminEditor.file_name("Promo", "tsx"),
            "Promo.admin.tsx"
        );
        assert_eq!(ArtifactKind::Readme.file_name("Promo", "tsx"), "Promo.readme");
    }
}
