//! Template rendering for generated artifacts
//!
//! Every artifact is produced from an embedded Handlebars template:
//! - `reusable_component` - minimal placeholder component for the reusable flow
//! - `block_component` - typed display component for the block flow
//! - `block_admin` - admin editor wired to `adminTools.updateDataBlock`
//! - `readme` - heading, description and usage paragraph for both flows
//!
//! Escaping is disabled because the output is source code, not HTML.
//! Substituted values are inserted verbatim and never re-parsed, so a
//! description containing `{{` stays literal text.

pub mod embedded;

use crate::error::GenerateError;
use handlebars::Handlebars;
use serde::Serialize;

/// Embedded templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    ReusableComponent,
    BlockComponent,
    BlockAdmin,
    Readme,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::ReusableComponent,
        Template::BlockComponent,
        Template::BlockAdmin,
        Template::Readme,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Template::ReusableComponent => "reusable_component",
            Template::BlockComponent => "block_component",
            Template::BlockAdmin => "block_admin",
            Template::Readme => "readme",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Template::ReusableComponent => embedded::REUSABLE_COMPONENT,
            Template::BlockComponent => embedded::BLOCK_COMPONENT,
            Template::BlockAdmin => embedded::BLOCK_ADMIN,
            Template::Readme => embedded::README,
        }
    }
}

/// Values substituted into the templates
#[derive(Debug, Clone, Serialize)]
pub struct TemplateFields<'a> {
    name: &'a str,
    lower_name: String,
    description: &'a str,
}

impl<'a> TemplateFields<'a> {
    pub fn new(name: &'a str, description: &'a str) -> Self {
        Self {
            name,
            lower_name: name.to_lowercase(),
            description,
        }
    }
}

#[derive(Serialize)]
struct ReadmeFields<'a> {
    name: &'a str,
    description: &'a str,
    label: &'a str,
    noun: &'a str,
}

/// Registry of the embedded templates
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Register every embedded template
    pub fn new() -> Result<Self, GenerateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for template in Template::ALL {
            registry
                .register_template_string(template.name(), template.source())
                .map_err(|e| GenerateError::Template {
                    name: template.name(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { registry })
    }

    fn render<T: Serialize>(&self, template: Template, data: &T) -> Result<String, GenerateError> {
        self.registry
            .render(template.name(), data)
            .map(|text| text.trim().to_string())
            .map_err(|e| GenerateError::Template {
                name: template.name(),
                message: e.to_string(),
            })
    }

    /// Placeholder component for the reusable flow
    pub fn reusable_component(&self, fields: &TemplateFields) -> Result<String, GenerateError> {
        self.render(Template::ReusableComponent, fields)
    }

    /// Typed display component for the block flow
    pub fn block_component(&self, fields: &TemplateFields) -> Result<String, GenerateError> {
        self.render(Template::BlockComponent, fields)
    }

    /// Admin editor for the block flow
    pub fn block_admin(&self, fields: &TemplateFields) -> Result<String, GenerateError> {
        self.render(Template::BlockAdmin, fields)
    }

    /// Readme; `label` is the heading suffix ("Component", "Block")
    pub fn readme(&self, fields: &TemplateFields, label: &str) -> Result<String, GenerateError> {
        let noun = label.to_lowercase();
        self.render(
            Template::Readme,
            &ReadmeFields {
                name: fields.name,
                description: fields.description,
                label,
                noun: &noun,
            },
        )
    }
}
