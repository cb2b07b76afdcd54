//! Templates compiled into the binary
//!
//! Each file under `templates/` is embedded with [`include_str!`] and
//! registered in [`TEMPLATES`] under its file name. The two lists must stay
//! in sync; the `include_str!` paths are relative to this file.

use crate::error::{Result, template::not_found};

use super::TemplateStore;

pub const DOCKERFILE: &str = include_str!("../../templates/Dockerfile");
pub const PRETTIERRC: &str = include_str!("../../templates/.prettierrc");
pub const ESLINTRC: &str = include_str!("../../templates/.eslintrc.json");
pub const MODEL: &str = include_str!("../../templates/model.js");
pub const CONTROLLER: &str = include_str!("../../templates/controller.js");
pub const ROUTE: &str = include_str!("../../templates/route.js");

/// Embedded templates by name
pub const TEMPLATES: &[(&str, &str)] = &[
    ("Dockerfile", DOCKERFILE),
    (".prettierrc", PRETTIERRC),
    (".eslintrc.json", ESLINTRC),
    ("model.js", MODEL),
    ("controller.js", CONTROLLER),
    ("route.js", ROUTE),
];

/// The read-only template store shipped with xpress
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        TEMPLATES
            .iter()
            .find(|(template, _)| *template == name)
            .map(|(_, content)| content.as_bytes().to_vec())
            .ok_or_else(|| not_found(name))
    }
}
