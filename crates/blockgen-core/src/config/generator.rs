//! Generator configuration and the optional project file

use crate::error::GenerateError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional per-project configuration file
pub const CONFIG_FILE_NAME: &str = ".blockgen.yaml";

/// Settings shared by every flow
///
/// `working_dir` anchors the default roots; it is passed in explicitly
/// instead of being read from the process at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the default roots are resolved against
    #[serde(skip)]
    pub working_dir: PathBuf,

    /// Configuration file the settings were read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// Extension of generated source files (component and admin editor)
    pub extension: String,

    /// Default root for reusable components, relative to `working_dir`
    pub reusables_dir: PathBuf,

    /// Default root for blocks, relative to `working_dir`
    pub blocks_dir: PathBuf,

    /// Require artifact names to be valid code identifiers
    pub strict_names: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            source: None,
            extension: "tsx".to_string(),
            reusables_dir: PathBuf::from("reusables"),
            blocks_dir: Path::new("reusables").join("blocks"),
            strict_names: false,
        }
    }
}

impl GeneratorConfig {
    /// Default settings anchored at `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            ..Self::default()
        }
    }

    /// Load `.blockgen.yaml` from `working_dir` if present, defaults otherwise
    pub fn load(working_dir: impl Into<PathBuf>) -> Result<Self, GenerateError> {
        let working_dir = working_dir.into();
        let path = working_dir.join(CONFIG_FILE_NAME);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::new(working_dir));
            }
            Err(e) => {
                return Err(GenerateError::Config {
                    path,
                    message: e.to_string(),
                })
            }
        };

        let mut config = Self::from_yaml(&content).map_err(|message| GenerateError::Config {
            path: path.clone(),
            message,
        })?;
        config.working_dir = working_dir;
        config.source = Some(path);
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if config.extension.is_empty() {
            return Err("extension cannot be empty".to_string());
        }
        Ok(config)
    }

    /// Absolute-or-relative default root for a flow-specific directory
    pub fn root(&self, dir: &Path) -> PathBuf {
        self.working_dir.join(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("/work");
        assert_eq!(config.extension, "tsx");
        assert_eq!(config.root(&config.reusables_dir), Path::new("/work/reusables"));
        assert_eq!(
            config.root(&config.blocks_dir),
            Path::new("/work/reusables/blocks")
        );
        assert!(!config.strict_names);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(config, GeneratorConfig::new(dir.path()));
        assert!(config.source.is_none());
    }

    #[test]
    fn test_loaded_file_is_recorded_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "").unwrap();

        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(config.extension, "tsx");
    }

    #[test]
    fn test_partial_file_overrides_some_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "extension: jsx\nstrict_names: true\n",
        )
        .unwrap();

        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(config.extension, "jsx");
        assert!(config.strict_names);
        assert_eq!(config.reusables_dir, PathBuf::from("reusables"));
        assert_eq!(config.working_dir, dir.path());
        assert_eq!(config.source, Some(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "extension: [unclosed").unwrap();

        let err = GeneratorConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Config { .. }));
    }

    #[test]
    fn test_empty_extension_rejected() {
        assert!(GeneratorConfig::from_yaml("extension: ''").is_err());
    }
}
