//! Blockgen Core - Shared library for the component/block generator CLI
//!
//! This library asks a user a handful of questions and emits a folder with
//! templated source files for a new reusable component or a new block.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Path resolution, template rendering, artifact writing
//! - **Layer 2: Flow Orchestration** - `FlowConfig` trait, the prompt sequence state
//!   machine, `run_flow` and the top-level `dispatch` menu
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompter and reporter (feature-gated)
//!
//! Interaction and filesystem access sit behind the [`Prompter`], [`Reporter`]
//! and [`Filesystem`] traits so flows can be driven without a terminal.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use blockgen_core::prompt::{Reply, ScriptedPrompter};
//! use blockgen_core::{dispatch, GeneratorConfig, LocalFs, RecordingReporter, TemplateRenderer};
//!
//! let config = GeneratorConfig::new("/path/to/app");
//! let renderer = TemplateRenderer::new()?;
//! let mut prompter = ScriptedPrompter::new([
//!     Reply::choice("block"),
//!     Reply::text("Promo"),
//!     Reply::text("Promo banner"),
//!     Reply::accept_default(),
//! ]);
//! let outcome = dispatch(&config, &renderer, &mut prompter, &LocalFs, &mut RecordingReporter::default()).await?;
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod flow;
pub mod generate;
pub mod prompt;
pub mod report;
pub mod request;
pub mod resolve;
pub mod templates;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::GeneratorConfig;
pub use dispatch::{dispatch, DispatchOutcome};
pub use error::GenerateError;
pub use flow::{BlockFlow, FlowConfig, FlowKind, ReusableFlow};
pub use generate::{generate, run_flow};
pub use prompt::{Prompter, ScriptedPrompter};
pub use report::{GenerationEvent, GenerationReport, RecordingReporter, Reporter};
pub use request::{ArtifactFile, ArtifactKind, GenerationRequest, Location, TargetDirectory};
pub use resolve::resolve;
pub use templates::{TemplateFields, TemplateRenderer};
pub use writer::{Filesystem, LocalFs};

#[cfg(feature = "tui")]
pub use tui::run;
