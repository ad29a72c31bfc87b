//! Top-level menu: pick a flow, run it once

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::flow::{BlockFlow, FlowConfig, FlowKind, ReusableFlow};
use crate::generate::run_flow;
use crate::prompt::{Answer, FlowState, Prompter, Question};
use crate::report::{GenerationReport, Reporter};
use crate::templates::TemplateRenderer;
use crate::writer::Filesystem;

pub const FLOW_QUESTION: &str = "flow";

/// The single menu question
pub fn menu_question() -> Question {
    Question::select(
        FLOW_QUESTION,
        "What would you like to generate?",
        FlowKind::CHOICES,
    )
}

/// Result of one dispatcher run
#[derive(Debug)]
pub struct DispatchOutcome {
    pub kind: FlowKind,
    pub report: GenerationReport,
}

impl DispatchOutcome {
    /// Final line for the user
    pub fn summary(&self) -> &'static str {
        if self.report.state == FlowState::Done {
            match self.kind {
                FlowKind::Reusable => ReusableFlow.completion_message(),
                FlowKind::Block => BlockFlow.completion_message(),
            }
        } else {
            "Nothing was generated"
        }
    }
}

/// Ask for a flow, run it to completion, and return its report
///
/// There is no loop back to the menu.
pub async fn dispatch<P, S, R>(
    config: &GeneratorConfig,
    renderer: &TemplateRenderer,
    prompter: &mut P,
    fs: &S,
    reporter: &mut R,
) -> Result<DispatchOutcome, GenerateError>
where
    P: Prompter,
    S: Filesystem,
    R: Reporter,
{
    let kind = match prompter.ask(&menu_question())? {
        Answer::Choice(choice) => choice
            .parse::<FlowKind>()
            .map_err(|_| GenerateError::UnexpectedAnswer {
                question: FLOW_QUESTION,
            })?,
        _ => {
            return Err(GenerateError::UnexpectedAnswer {
                question: FLOW_QUESTION,
            })
        }
    };

    let report = match kind {
        FlowKind::Reusable => {
            run_flow(&ReusableFlow, config, renderer, prompter, fs, reporter).await?
        }
        FlowKind::Block => run_flow(&BlockFlow, config, renderer, prompter, fs, reporter).await?,
    };

    Ok(DispatchOutcome { kind, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Reply, ScriptedPrompter};
    use crate::report::RecordingReporter;
    use crate::writer::LocalFs;

    #[test]
    fn test_menu_offers_exactly_two_flows() {
        let question = menu_question();
        assert_eq!(
            question.kind,
            crate::prompt::QuestionKind::Select {
                choices: &["reusable", "block"]
            }
        );
    }

    #[tokio::test]
    async fn test_dispatches_to_block_flow() {
        let tmp = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(tmp.path());
        let renderer = TemplateRenderer::new().unwrap();
        let mut prompter = ScriptedPrompter::new([
            Reply::choice("block"),
            Reply::text("Promo"),
            Reply::text("Promo banner"),
            Reply::accept_default(),
        ]);

        let outcome = dispatch(
            &config,
            &renderer,
            &mut prompter,
            &LocalFs,
            &mut RecordingReporter::default(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.kind, FlowKind::Block);
        assert_eq!(outcome.summary(), "Generated new block");
        assert_eq!(outcome.report.written.len(), 3);
        assert_eq!(prompter.asked()[0], FLOW_QUESTION);
        assert_eq!(prompter.remaining(), 0);
    }

    #[tokio::test]
    async fn test_dispatches_to_reusable_flow_once() {
        let tmp = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(tmp.path());
        let renderer = TemplateRenderer::new().unwrap();
        let mut prompter = ScriptedPrompter::new([
            Reply::choice("reusable"),
            Reply::text("Hero"),
            Reply::text("Shows a hero banner"),
            Reply::yes(),
            Reply::choice("block"),
        ]);

        let outcome = dispatch(
            &config,
            &renderer,
            &mut prompter,
            &LocalFs,
            &mut RecordingReporter::default(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.kind, FlowKind::Reusable);
        assert_eq!(outcome.summary(), "Generated reusable component");
        // the menu is not shown again
        assert_eq!(prompter.remaining(), 1);
    }

    #[tokio::test]
    async fn test_aborted_flow_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();
        let config = GeneratorConfig::new(&blocker);
        let renderer = TemplateRenderer::new().unwrap();
        let mut prompter = ScriptedPrompter::new([
            Reply::choice("reusable"),
            Reply::text("Hero"),
            Reply::text("desc"),
            Reply::accept_default(),
        ]);
        let mut reporter = RecordingReporter::default();

        let outcome = dispatch(&config, &renderer, &mut prompter, &LocalFs, &mut reporter)
            .await
            .unwrap();

        assert_eq!(outcome.report.state, FlowState::Aborted);
        assert_eq!(outcome.summary(), "Nothing was generated");
        assert_eq!(reporter.failures().count(), 1);
    }

    #[tokio::test]
    async fn test_closed_input_during_menu_is_fatal() {
        let config = GeneratorConfig::new("/work");
        let renderer = TemplateRenderer::new().unwrap();
        let mut prompter = ScriptedPrompter::new(Vec::<Reply>::new());

        let err = dispatch(
            &config,
            &renderer,
            &mut prompter,
            &LocalFs,
            &mut RecordingReporter::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerateError::Prompt(_)));
    }
}
