//! Outcome reporting for generator flows

use crate::error::GenerateError;
use crate::prompt::FlowState;
use crate::request::TargetDirectory;
use std::io;
use std::path::{Path, PathBuf};

/// Something worth telling the user while a flow runs
#[derive(Debug)]
pub enum GenerationEvent<'a> {
    DirectoryCreated {
        label: &'static str,
        path: &'a Path,
    },
    DirectoryFailed {
        label: &'static str,
        error: &'a GenerateError,
    },
    FileWritten {
        label: &'static str,
        path: &'a Path,
    },
    FileFailed {
        label: &'static str,
        error: &'a GenerateError,
    },
}

impl GenerationEvent<'_> {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            GenerationEvent::DirectoryFailed { .. } | GenerationEvent::FileFailed { .. }
        )
    }

    /// One-line message naming the path involved
    pub fn message(&self) -> String {
        self.message_with(|s| s)
    }

    /// Message with the path (or failure cause) passed through `highlight`
    pub fn message_with(&self, highlight: impl Fn(String) -> String) -> String {
        match self {
            GenerationEvent::DirectoryCreated { label, path }
            | GenerationEvent::FileWritten { label, path } => {
                format!("Created {}: {}", label, highlight(path.display().to_string()))
            }
            GenerationEvent::DirectoryFailed { label, error }
            | GenerationEvent::FileFailed { label, error } => {
                format!("Error creating {}: {}", label, highlight(error.to_string()))
            }
        }
    }
}

/// Receives events as they happen
///
/// An `Err` means the output channel failed; the flow stops with
/// [`GenerateError::Prompt`].
pub trait Reporter {
    fn report(&mut self, event: &GenerationEvent) -> io::Result<()>;
}

/// Reporter that keeps plain messages, for tests and non-interactive callers
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: Vec<(bool, String)>,
}

impl RecordingReporter {
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|(failed, _)| *failed)
            .map(|(_, m)| m.as_str())
    }

    pub fn successes(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|(failed, _)| !*failed)
            .map(|(_, m)| m.as_str())
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &GenerationEvent) -> io::Result<()> {
        self.messages.push((event.is_failure(), event.message()));
        Ok(())
    }
}

/// Summary of one flow run
#[derive(Debug)]
pub struct GenerationReport {
    pub target: TargetDirectory,
    /// Either [`FlowState::Done`] or [`FlowState::Aborted`]
    pub state: FlowState,
    /// Files attempted, in order
    pub attempted: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.state == FlowState::Done && self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let path = PathBuf::from("/work/reusables/Hero/Hero.tsx");
        let mut reporter = RecordingReporter::default();
        reporter
            .report(&GenerationEvent::FileWritten {
                label: "component file",
                path: &path,
            })
            .unwrap();

        let error = GenerateError::FileWrite {
            path: PathBuf::from("/work/reusables/Hero/Hero.readme"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        reporter
            .report(&GenerationEvent::FileFailed {
                label: "readme file",
                error: &error,
            })
            .unwrap();

        let successes: Vec<_> = reporter.successes().collect();
        assert_eq!(
            successes,
            vec!["Created component file: /work/reusables/Hero/Hero.tsx"]
        );
        let failures: Vec<_> = reporter.failures().collect();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Error creating readme file:"));
        assert!(failures[0].contains("/work/reusables/Hero/Hero.readme"));
    }
}
