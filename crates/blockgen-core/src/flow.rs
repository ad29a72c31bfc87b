//! Flow configuration trait and the two built-in flows
//!
//! A flow bundles everything that differs between generating a plain
//! reusable component and generating a block:
//! - prompt wording and validation messages
//! - the default root folder
//! - the fixed list of artifacts and how each one is rendered
//! - labels used when reporting outcomes

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::request::ArtifactKind;
use crate::templates::{TemplateFields, TemplateRenderer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Renders one artifact from the request fields
pub type RenderFn = fn(&TemplateRenderer, &TemplateFields) -> Result<String, GenerateError>;

/// One entry in a flow's artifact list
#[derive(Clone, Copy)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    /// Human-readable label used in reports, e.g. "admin block file"
    pub label: &'static str,
    pub render: RenderFn,
}

impl fmt::Debug for ArtifactSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactSpec")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .finish()
    }
}

/// Configuration trait for the generator flows
///
/// Each flow (reusable, block) implements this trait to define its
/// prompts, default location and artifacts.
pub trait FlowConfig {
    /// Which menu entry this flow answers to
    fn kind(&self) -> FlowKind;

    /// Prompt for the artifact name
    fn name_prompt(&self) -> &'static str;

    /// Validation message when the name is left empty
    fn name_required_message(&self) -> &'static str;

    /// Prompt for the description
    fn description_prompt(&self) -> &'static str;

    /// Yes/no prompt for using the default location
    fn location_prompt(&self) -> &'static str;

    /// Prompt for the custom base path
    fn custom_path_prompt(&self) -> &'static str;

    /// Label for the artifact folder in reports
    fn folder_label(&self) -> &'static str;

    /// Default root, relative to the configured working directory
    fn default_dir<'a>(&self, config: &'a GeneratorConfig) -> &'a Path;

    /// Artifacts written by this flow, in order
    fn artifacts(&self) -> &'static [ArtifactSpec];

    /// Confirmation shown once the flow completes
    fn completion_message(&self) -> &'static str;
}

/// Top-level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Reusable,
    Block,
}

impl FlowKind {
    /// Menu literals, in display order
    pub const CHOICES: &'static [&'static str] = &["reusable", "block"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Reusable => "reusable",
            FlowKind::Block => "block",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlowKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reusable" => Ok(FlowKind::Reusable),
            "block" => Ok(FlowKind::Block),
            other => Err(format!("unknown flow '{}'", other)),
        }
    }
}

fn reusable_readme(r: &TemplateRenderer, f: &TemplateFields) -> Result<String, GenerateError> {
    r.readme(f, "Component")
}

fn block_readme(r: &TemplateRenderer, f: &TemplateFields) -> Result<String, GenerateError> {
    r.readme(f, "Block")
}

const REUSABLE_ARTIFACTS: &[ArtifactSpec] = &[
    ArtifactSpec {
        kind: ArtifactKind::Component,
        label: "component file",
        render: TemplateRenderer::reusable_component,
    },
    ArtifactSpec {
        kind: ArtifactKind::Readme,
        label: "readme file",
        render: reusable_readme,
    },
];

const BLOCK_ARTIFACTS: &[ArtifactSpec] = &[
    ArtifactSpec {
        kind: ArtifactKind::Component,
        label: "block file",
        render: TemplateRenderer::block_component,
    },
    ArtifactSpec {
        kind: ArtifactKind::AdminEditor,
        label: "admin block file",
        render: TemplateRenderer::block_admin,
    },
    ArtifactSpec {
        kind: ArtifactKind::Readme,
        label: "readme file",
        render: block_readme,
    },
];

/// Plain reusable component: component + readme under `reusables/`
#[derive(Debug, Clone, Copy, Default)]
pub struct ReusableFlow;

impl FlowConfig for ReusableFlow {
    fn kind(&self) -> FlowKind {
        FlowKind::Reusable
    }

    fn name_prompt(&self) -> &'static str {
        "Enter the name of your new reusable component:"
    }

    fn name_required_message(&self) -> &'static str {
        "Reusable component name cannot be empty."
    }

    fn description_prompt(&self) -> &'static str {
        "Describe what the component should do:"
    }

    fn location_prompt(&self) -> &'static str {
        "Do you want to save this component in the default \"reusables\" folder?"
    }

    fn custom_path_prompt(&self) -> &'static str {
        "Enter the custom path where you want to save your component:"
    }

    fn folder_label(&self) -> &'static str {
        "component folder"
    }

    fn default_dir<'a>(&self, config: &'a GeneratorConfig) -> &'a Path {
        &config.reusables_dir
    }

    fn artifacts(&self) -> &'static [ArtifactSpec] {
        REUSABLE_ARTIFACTS
    }

    fn completion_message(&self) -> &'static str {
        "Generated reusable component"
    }
}

/// Block: component + admin editor + readme under `reusables/blocks/`
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFlow;

impl FlowConfig for BlockFlow {
    fn kind(&self) -> FlowKind {
        FlowKind::Block
    }

    fn name_prompt(&self) -> &'static str {
        "Enter the name of your new block:"
    }

    fn name_required_message(&self) -> &'static str {
        "Block component name cannot be empty."
    }

    fn description_prompt(&self) -> &'static str {
        "Describe what the block should do:"
    }

    fn location_prompt(&self) -> &'static str {
        "Do you want to save this block in the default \"reusables/blocks\" folder?"
    }

    fn custom_path_prompt(&self) -> &'static str {
        "Enter the custom path where you want to save your block:"
    }

    fn folder_label(&self) -> &'static str {
        "block folder"
    }

    fn default_dir<'a>(&self, config: &'a GeneratorConfig) -> &'a Path {
        &config.blocks_dir
    }

    fn artifacts(&self) -> &'static [ArtifactSpec] {
        BLOCK_ARTIFACTS
    }

    fn completion_message(&self) -> &'static str {
        "Generated new block"
    }
}
