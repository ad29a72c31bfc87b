//! Charm-style CLI prompts using cliclack

use crate::config::GeneratorConfig;
use crate::dispatch::dispatch;
use crate::prompt::{Answer, FlowState, Prompter, Question, QuestionKind};
use crate::report::{GenerationEvent, Reporter};
use crate::templates::TemplateRenderer;
use crate::writer::LocalFs;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;

/// Prompter backed by cliclack's inline prompts
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn ask(&mut self, question: &Question) -> io::Result<Answer> {
        match question.kind {
            QuestionKind::Input { validation } => {
                let mut input = cliclack::input(question.message).required(false);
                if let Some(validation) = validation {
                    input = input.validate(move |value: &String| validation.check(value));
                }
                let value: String = input.interact()?;
                Ok(Answer::Text(value))
            }
            QuestionKind::Confirm { initial } => {
                let value: bool = cliclack::confirm(question.message)
                    .initial_value(initial)
                    .interact()?;
                Ok(Answer::Bool(value))
            }
            QuestionKind::Select { choices } => {
                let mut select = cliclack::select(question.message);
                for choice in choices {
                    select = select.item(*choice, choice, "");
                }
                let value: &'static str = select.interact()?;
                Ok(Answer::Choice(value))
            }
        }
    }
}

/// Reporter that logs each event through cliclack
#[derive(Debug, Default)]
pub struct CliclackReporter;

impl Reporter for CliclackReporter {
    fn report(&mut self, event: &GenerationEvent) -> io::Result<()> {
        if event.is_failure() {
            cliclack::log::error(event.message_with(|s| s.red().to_string()))
        } else {
            cliclack::log::success(event.message_with(|s| s.cyan().to_string()))
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run(config: GeneratorConfig) -> Result<()> {
    cliclack::intro("blockgen")?;
    cliclack::log::info("Welcome! Generate a reusable component or a block for your app.")?;

    if let Some(source) = &config.source {
        cliclack::log::remark(format!("Using settings from {}", source.display()))?;
    }

    let renderer = TemplateRenderer::new().context("Failed to load built-in templates")?;

    let outcome = dispatch(
        &config,
        &renderer,
        &mut CliclackPrompter,
        &LocalFs,
        &mut CliclackReporter,
    )
    .await?;

    if outcome.report.state == FlowState::Done {
        cliclack::outro(outcome.summary())?;
    } else {
        cliclack::outro_cancel(outcome.summary())?;
    }

    Ok(())
}
