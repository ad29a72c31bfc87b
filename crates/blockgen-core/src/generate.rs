//! End-to-end generator flow
//!
//! Runs one flow from the first question to the last file write:
//! collect the request, resolve the target directory, create it, then
//! render and write each artifact on its own. A failed directory ends the
//! flow before any write; a failed file is reported and the next file is
//! still attempted.

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::flow::FlowConfig;
use crate::prompt::{collect_request, FlowState, Prompter};
use crate::report::{GenerationEvent, GenerationReport, Reporter};
use crate::request::{ArtifactFile, GenerationRequest};
use crate::resolve::resolve;
use crate::templates::{TemplateFields, TemplateRenderer};
use crate::writer::{create_directory, write_artifact, Filesystem};

/// Ask the flow's questions, then generate its artifacts
pub async fn run_flow<F, P, S, R>(
    flow: &F,
    config: &GeneratorConfig,
    renderer: &TemplateRenderer,
    prompter: &mut P,
    fs: &S,
    reporter: &mut R,
) -> Result<GenerationReport, GenerateError>
where
    F: FlowConfig,
    P: Prompter,
    S: Filesystem,
    R: Reporter,
{
    let request = collect_request(flow, config, prompter)?;
    generate(flow, config, renderer, &request, fs, reporter).await
}

/// Generate a flow's artifacts for an already collected request
///
/// Returns `Err` only when reporting itself fails; filesystem failures are
/// recorded in the returned report.
pub async fn generate<F, S, R>(
    flow: &F,
    config: &GeneratorConfig,
    renderer: &TemplateRenderer,
    request: &GenerationRequest,
    fs: &S,
    reporter: &mut R,
) -> Result<GenerationReport, GenerateError>
where
    F: FlowConfig,
    S: Filesystem,
    R: Reporter,
{
    let default_root = config.root(flow.default_dir(config));
    let target = resolve(&default_root, &request.artifact_name, &request.location);

    let mut report = GenerationReport {
        target,
        state: FlowState::CreatingDirectory,
        attempted: Vec::new(),
        written: Vec::new(),
        failed: Vec::new(),
    };

    if let Err(error) = create_directory(fs, &report.target).await {
        reporter.report(&GenerationEvent::DirectoryFailed {
            label: flow.folder_label(),
            error: &error,
        })?;
        report.state = FlowState::Aborted;
        return Ok(report);
    }
    reporter.report(&GenerationEvent::DirectoryCreated {
        label: flow.folder_label(),
        path: report.target.path(),
    })?;

    report.state = FlowState::RenderingAndWriting;
    let fields = TemplateFields::new(&request.artifact_name, &request.description);

    for spec in flow.artifacts() {
        let relative_name = spec
            .kind
            .file_name(&request.artifact_name, &config.extension);
        let path = report.target.file(&relative_name);
        report.attempted.push(path.clone());

        let outcome = match (spec.render)(renderer, &fields) {
            Ok(content) => {
                let file = ArtifactFile {
                    relative_name,
                    content,
                };
                write_artifact(fs, &report.target, &file).await
            }
            Err(error) => Err(error),
        };

        match outcome {
            Ok(path) => {
                reporter.report(&GenerationEvent::FileWritten {
                    label: spec.label,
                    path: &path,
                })?;
                report.written.push(path);
            }
            Err(error) => {
                reporter.report(&GenerationEvent::FileFailed {
                    label: spec.label,
                    error: &error,
                })?;
                report.failed.push(path);
            }
        }
    }

    report.state = FlowState::Done;
    Ok(report)
}
