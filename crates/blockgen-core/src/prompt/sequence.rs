//! Ordered question sequence for a generator flow
//!
//! The flow is an explicit state machine:
//!
//! ```text
//! CollectingName -> CollectingDescription -> CollectingLocationChoice
//!     -> [CollectingCustomPath] -> CreatingDirectory
//!     -> Aborted | RenderingAndWriting -> Done
//! ```
//!
//! [`RequestCollector`] owns the collecting states; the writer side of the
//! flow drives the remaining ones.

use super::{Answer, Prompter, Question, Validation};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::flow::FlowConfig;
use crate::request::{GenerationRequest, Location};
use std::path::PathBuf;

pub const NAME_QUESTION: &str = "artifact_name";
pub const DESCRIPTION_QUESTION: &str = "description";
pub const LOCATION_QUESTION: &str = "use_default_location";
pub const CUSTOM_PATH_QUESTION: &str = "custom_path";

/// States of a single generator flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    CollectingName,
    CollectingDescription,
    CollectingLocationChoice,
    CollectingCustomPath,
    CreatingDirectory,
    RenderingAndWriting,
    Aborted,
    Done,
}

/// Collects a [`GenerationRequest`] one answer at a time
pub struct RequestCollector<'a, F: FlowConfig> {
    flow: &'a F,
    strict_names: bool,
    state: FlowState,
    name: Option<String>,
    description: Option<String>,
    location: Option<Location>,
}

impl<'a, F: FlowConfig> RequestCollector<'a, F> {
    pub fn new(flow: &'a F, config: &GeneratorConfig) -> Self {
        Self {
            flow,
            strict_names: config.strict_names,
            state: FlowState::CollectingName,
            name: None,
            description: None,
            location: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Question for the current state, `None` once collection is complete
    pub fn question(&self) -> Option<Question> {
        match self.state {
            FlowState::CollectingName => {
                let message = self.flow.name_required_message();
                let validation = if self.strict_names {
                    Validation::Identifier { message }
                } else {
                    Validation::Required { message }
                };
                Some(Question::input(
                    NAME_QUESTION,
                    self.flow.name_prompt(),
                    validation,
                ))
            }
            FlowState::CollectingDescription => Some(Question::input(
                DESCRIPTION_QUESTION,
                self.flow.description_prompt(),
                Validation::Required {
                    message: "Description cannot be empty.",
                },
            )),
            FlowState::CollectingLocationChoice => Some(Question::confirm(
                LOCATION_QUESTION,
                self.flow.location_prompt(),
                true,
            )),
            FlowState::CollectingCustomPath => Some(Question::input(
                CUSTOM_PATH_QUESTION,
                self.flow.custom_path_prompt(),
                Validation::Required {
                    message: "Custom path cannot be empty.",
                },
            )),
            _ => None,
        }
    }

    /// Record the answer to the current question and advance
    pub fn accept(&mut self, answer: Answer) -> Result<(), GenerateError> {
        self.state = match (self.state, answer) {
            (FlowState::CollectingName, Answer::Text(name)) => {
                self.name = Some(name);
                FlowState::CollectingDescription
            }
            (FlowState::CollectingDescription, Answer::Text(description)) => {
                self.description = Some(description);
                FlowState::CollectingLocationChoice
            }
            (FlowState::CollectingLocationChoice, Answer::Bool(true)) => {
                self.location = Some(Location::Default);
                FlowState::CreatingDirectory
            }
            (FlowState::CollectingLocationChoice, Answer::Bool(false)) => {
                FlowState::CollectingCustomPath
            }
            (FlowState::CollectingCustomPath, Answer::Text(path)) => {
                self.location = Some(Location::Custom(PathBuf::from(path)));
                FlowState::CreatingDirectory
            }
            (state, _) => {
                return Err(GenerateError::UnexpectedAnswer {
                    question: question_name(state),
                })
            }
        };
        Ok(())
    }

    /// Finish collection
    pub fn into_request(self) -> Result<GenerationRequest, GenerateError> {
        match (self.state, self.name, self.description, self.location) {
            (FlowState::CreatingDirectory, Some(name), Some(description), Some(location)) => {
                GenerationRequest::new(name, description, location)
            }
            (state, ..) => Err(GenerateError::InvalidRequest(format!(
                "collection stopped at {:?}",
                state
            ))),
        }
    }
}

fn question_name(state: FlowState) -> &'static str {
    match state {
        FlowState::CollectingName => NAME_QUESTION,
        FlowState::CollectingDescription => DESCRIPTION_QUESTION,
        FlowState::CollectingLocationChoice => LOCATION_QUESTION,
        FlowState::CollectingCustomPath => CUSTOM_PATH_QUESTION,
        _ => "none",
    }
}

/// Ask the flow's questions in order and build the request
pub fn collect_request<F: FlowConfig, P: Prompter>(
    flow: &F,
    config: &GeneratorConfig,
    prompter: &mut P,
) -> Result<GenerationRequest, GenerateError> {
    let mut collector = RequestCollector::new(flow, config);
    while let Some(question) = collector.question() {
        let answer = prompter.ask(&question)?;
        collector.accept(answer)?;
    }
    collector.into_request()
}
