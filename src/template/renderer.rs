//! Template rendering onto the file system

use std::path::Path;

use crate::common::fs::write_atomic;
use crate::error::{Result, XpressError};
use crate::i18n::Locale;

use super::{TemplateStore, TemplateSubstitution, substitute};

/// Renders templates from a store into files
pub struct TemplateRenderer<'a> {
    store: &'a dyn TemplateStore,
    locale: &'a Locale,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(store: &'a dyn TemplateStore, locale: &'a Locale) -> Self {
        Self { store, locale }
    }

    /// Render a template with one token substituted and write it to the target
    ///
    /// The target is created or replaced; its parent directory must exist.
    /// Returns the localized success message.
    pub fn render(&self, substitution: &TemplateSubstitution) -> Result<String> {
        let name = &substitution.template_name;
        let raw = self.store.load(name)?;
        let content = String::from_utf8(raw)
            .map_err(|_| XpressError::TemplateDecodeFailed { name: name.clone() })?;

        let rendered = substitute(&content, &substitution.token, &substitution.value);
        tracing::debug!(
            template = %name,
            target = %substitution.target_path.display(),
            occurrences = content.matches(substitution.token.as_str()).count(),
            "rendering template"
        );
        write_atomic(&substitution.target_path, rendered.as_bytes())?;

        Ok(self.success("render.success", &substitution.target_path))
    }

    /// Copy a template byte for byte to the target
    pub fn copy(&self, template_name: &str, target_path: &Path) -> Result<String> {
        let raw = self.store.load(template_name)?;
        tracing::debug!(template = %template_name, target = %target_path.display(), "copying template");
        write_atomic(target_path, &raw)?;

        Ok(self.success("copy.success", target_path))
    }

    fn success(&self, key: &str, target: &Path) -> String {
        let path = target.display().to_string();
        self.locale.t_with(key, &[("path", path.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{DirectoryTemplates, EmbeddedTemplates, VERSION_TOKEN};
    use std::fs;
    use tempfile::TempDir;

    fn locale() -> Locale {
        Locale::embedded().unwrap()
    }

    #[test]
    fn test_render_substitutes_version() {
        let temp = TempDir::new().unwrap();
        let locale = locale();
        let renderer = TemplateRenderer::new(&EmbeddedTemplates, &locale);
        let target = temp.path().join("Dockerfile");

        let message = renderer
            .render(&TemplateSubstitution::new(
                "Dockerfile",
                &target,
                VERSION_TOKEN,
                "18.16.0",
            ))
            .unwrap();

        let content = fs::read_to_string(&target).unwrap();
        assert!(content.contains("FROM node:18.16.0"));
        assert!(!content.contains("{{version}}"));
        assert!(message.contains("Dockerfile"));
    }

    #[test]
    fn test_render_missing_template() {
        let temp = TempDir::new().unwrap();
        let locale = locale();
        let renderer = TemplateRenderer::new(&EmbeddedTemplates, &locale);
        let target = temp.path().join("out");

        let err = renderer
            .render(&TemplateSubstitution::new("nope", &target, "x", "y"))
            .unwrap_err();
        assert!(matches!(err, XpressError::TemplateNotFound { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_render_without_token_keeps_template() {
        let temp = TempDir::new().unwrap();
        let templates = temp.path().join("templates");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("plain.txt"), "no tokens here\n").unwrap();

        let store = DirectoryTemplates::new(&templates);
        let locale = locale();
        let renderer = TemplateRenderer::new(&store, &locale);
        let target = temp.path().join("plain.txt");
        renderer
            .render(&TemplateSubstitution::new("plain.txt", &target, "name", "User"))
            .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "no tokens here\n");
    }

    #[test]
    fn test_render_rejects_binary_template() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blob"), [0xff, 0xfe, 0x00]).unwrap();
        let store = DirectoryTemplates::new(temp.path());
        let locale = locale();
        let renderer = TemplateRenderer::new(&store, &locale);

        let err = renderer
            .render(&TemplateSubstitution::new(
                "blob",
                temp.path().join("out"),
                "name",
                "x",
            ))
            .unwrap_err();
        assert!(matches!(err, XpressError::TemplateDecodeFailed { .. }));
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let locale = locale();
        let renderer = TemplateRenderer::new(&EmbeddedTemplates, &locale);

        let err = renderer
            .render(&TemplateSubstitution::new(
                "model.js",
                temp.path().join("models/User.js"),
                "name",
                "User",
            ))
            .unwrap_err();
        assert!(matches!(err, XpressError::WriteFailed { .. }));
    }

    #[test]
    fn test_copy_is_verbatim() {
        let temp = TempDir::new().unwrap();
        let locale = locale();
        let renderer = TemplateRenderer::new(&EmbeddedTemplates, &locale);
        let target = temp.path().join(".prettierrc");

        renderer.copy(".prettierrc", &target).unwrap();
        assert_eq!(
            fs::read(&target).unwrap(),
            crate::template::embedded::PRETTIERRC.as_bytes()
        );
    }

    #[test]
    fn test_copy_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let locale = locale();
        let renderer = TemplateRenderer::new(&EmbeddedTemplates, &locale);
        let target = temp.path().join(".eslintrc.json");
        fs::write(&target, "{}").unwrap();

        renderer.copy(".eslintrc.json", &target).unwrap();
        assert_ne!(fs::read_to_string(&target).unwrap(), "{}");
    }
}
