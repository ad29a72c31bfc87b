//! Question specifications and the interactive input seam
//!
//! A [`Prompter`] is the only thing that talks to the user. Free-text
//! questions carry a [`Validation`]; a prompter must keep asking until the
//! answer passes it, so empty required input never reaches a flow.

pub mod sequence;

pub use sequence::{collect_request, FlowState, RequestCollector};

use std::collections::VecDeque;
use std::io;

/// Validation applied to free-text answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Any non-empty string
    Required { message: &'static str },
    /// Non-empty and usable as a code identifier
    Identifier { message: &'static str },
}

impl Validation {
    /// Check a raw answer, returning the message to show on rejection
    pub fn check(&self, input: &str) -> Result<(), String> {
        match self {
            Validation::Required { message } => {
                if input.is_empty() {
                    Err(message.to_string())
                } else {
                    Ok(())
                }
            }
            Validation::Identifier { message } => {
                if input.is_empty() {
                    Err(message.to_string())
                } else if !is_identifier(input) {
                    Err(format!(
                        "'{}' is not a valid identifier (letters, digits, _ or $, not starting with a digit).",
                        input
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn is_identifier(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Kind of question and its kind-specific settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-text input
    Input { validation: Option<Validation> },
    /// Yes/no confirmation with the answer used when the user just presses enter
    Confirm { initial: bool },
    /// Single choice among fixed literals
    Select { choices: &'static [&'static str] },
}

/// A single question to put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Key the answer is stored under
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    pub fn input(name: &'static str, message: &'static str, validation: Validation) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Input {
                validation: Some(validation),
            },
        }
    }

    pub fn confirm(name: &'static str, message: &'static str, initial: bool) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Confirm { initial },
        }
    }

    pub fn select(
        name: &'static str,
        message: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Select { choices },
        }
    }
}

/// A validated answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Bool(bool),
    Choice(&'static str),
}

/// Interactive input capability
///
/// Implementations re-ask free-text questions until validation passes.
/// An `Err` means the input channel itself failed and ends the run.
pub trait Prompter {
    fn ask(&mut self, question: &Question) -> io::Result<Answer>;
}

/// Raw reply fed to a [`ScriptedPrompter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// `None` accepts the question's default
    Confirm(Option<bool>),
    Choice(String),
}

impl Reply {
    pub fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }

    pub fn yes() -> Self {
        Reply::Confirm(Some(true))
    }

    pub fn no() -> Self {
        Reply::Confirm(Some(false))
    }

    /// Press enter on a confirmation
    pub fn accept_default() -> Self {
        Reply::Confirm(None)
    }

    pub fn choice(s: impl Into<String>) -> Self {
        Reply::Choice(s.into())
    }
}

/// Prompter that answers from a fixed script
///
/// Rejected free-text replies are recorded and the next reply is tried,
/// the way an interactive prompt re-asks. Running out of replies fails
/// with `UnexpectedEof`, like a closed input stream.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    asked: Vec<&'static str>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Names of the questions asked so far, in order
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }

    /// Validation messages produced by rejected replies
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Replies not consumed yet
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> io::Result<Answer> {
        self.asked.push(question.name);

        loop {
            let reply = self.replies.pop_front().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("no scripted reply for question '{}'", question.name),
                )
            })?;

            match (question.kind, reply) {
                (QuestionKind::Input { validation }, Reply::Text(text)) => {
                    if let Some(validation) = validation {
                        if let Err(message) = validation.check(&text) {
                            self.rejections.push(message);
                            continue;
                        }
                    }
                    return Ok(Answer::Text(text));
                }
                (QuestionKind::Confirm { initial }, Reply::Confirm(value)) => {
                    return Ok(Answer::Bool(value.unwrap_or(initial)));
                }
                (QuestionKind::Select { choices }, Reply::Choice(choice)) => {
                    return choices
                        .iter()
                        .copied()
                        .find(|c| *c == choice)
                        .map(Answer::Choice)
                        .ok_or_else(|| {
                            io::Error::new(
                                io::ErrorKind::InvalidInput,
                                format!("'{}' is not one of {:?}", choice, choices),
                            )
                        });
                }
                (_, reply) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!(
                            "scripted reply {:?} does not fit question '{}'",
                            reply, question.name
                        ),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: Validation = Validation::Required {
        message: "Name cannot be empty.",
    };

    #[test]
    fn test_required_rejects_only_empty() {
        assert_eq!(REQUIRED.check(""), Err("Name cannot be empty.".to_string()));
        for input in ["a", " ", "Hero", "9lives", "with space", "ünïcode"] {
            assert!(REQUIRED.check(input).is_ok(), "{input:?} should pass");
        }
    }

    #[test]
    fn test_identifier_validation() {
        let v = Validation::Identifier {
            message: "Name cannot be empty.",
        };
        assert_eq!(v.check(""), Err("Name cannot be empty.".to_string()));
        assert!(v.check("Hero").is_ok());
        assert!(v.check("_private$1").is_ok());
        assert!(v.check("9lives").is_err());
        assert!(v.check("my-block").is_err());
        assert!(v.check("with space").is_err());
    }

    #[test]
    fn test_scripted_input_reasks_until_valid() {
        let mut prompter = ScriptedPrompter::new([Reply::text(""), Reply::text(""), Reply::text("Hero")]);
        let answer = prompter
            .ask(&Question::input("name", "Name?", REQUIRED))
            .unwrap();

        assert_eq!(answer, Answer::Text("Hero".to_string()));
        assert_eq!(prompter.rejections().len(), 2);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_confirm_default_is_used_when_unanswered() {
        let mut prompter = ScriptedPrompter::new([Reply::accept_default(), Reply::accept_default()]);
        assert_eq!(
            prompter.ask(&Question::confirm("q", "Default?", true)).unwrap(),
            Answer::Bool(true)
        );
        assert_eq!(
            prompter.ask(&Question::confirm("q", "Default?", false)).unwrap(),
            Answer::Bool(false)
        );
    }

    #[test]
    fn test_select_only_accepts_listed_choices() {
        let question = Question::select("flow", "Pick", &["reusable", "block"]);

        let mut prompter = ScriptedPrompter::new([Reply::choice("block")]);
        assert_eq!(prompter.ask(&question).unwrap(), Answer::Choice("block"));

        let mut prompter = ScriptedPrompter::new([Reply::choice("page")]);
        let err = prompter.ask(&question).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_exhausted_script_is_a_capability_failure() {
        let mut prompter = ScriptedPrompter::new([Reply::text("")]);
        let err = prompter
            .ask(&Question::input("name", "Name?", REQUIRED))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(prompter.asked(), &["name"]);
    }
}
