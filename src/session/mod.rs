//! Generation flows over one working directory
//!
//! A [`Session`] owns the current [`ResourceSnapshot`] and runs every
//! resource-specific generation through the [`GenerationOrchestrator`]. Any
//! attempt that writes a resource triggers a fresh scan before the next
//! decision, so overwrite prompts never work from a stale snapshot.

use crate::common::fs::ensure_parent_dir;
use crate::config::XpressConfig;
use crate::error::{Result, XpressError};
use crate::i18n::Locale;
use crate::inventory::{self, ResourceSnapshot};
use crate::orchestrator::{Fallback, GenerationOrchestrator, Outcome, run_task};
use crate::resource::{Linter, ModuleKind, ResourceDescriptor, ResourceKind, validate_module_name};
use crate::template::manifest::{PackageManifest, non_empty};
use crate::template::runtime::resolve_version;
use crate::template::{
    CommandProbe, DOCKERFILE_TEMPLATE, DirectoryTemplates, EmbeddedTemplates, FixedVersion,
    NAME_TOKEN, RuntimeProbe, TemplateRenderer, TemplateStore, TemplateSubstitution, VERSION_TOKEN,
};
use crate::ui::{Prompter, TextStyle};

/// Collaborators shared by every generation in a run
pub struct Context {
    pub config: XpressConfig,
    pub locale: Locale,
    pub templates: Box<dyn TemplateStore>,
    pub runtime: Box<dyn RuntimeProbe>,
}

impl Context {
    /// Wire the default collaborators for a configuration
    ///
    /// `runtime_version` replaces the runtime probe with a fixed answer.
    pub fn new(config: XpressConfig, runtime_version: Option<String>) -> Result<Self> {
        let templates: Box<dyn TemplateStore> = match &config.template_dir {
            Some(dir) => Box::new(DirectoryTemplates::new(dir)),
            None => Box::new(EmbeddedTemplates),
        };
        let runtime: Box<dyn RuntimeProbe> = match runtime_version {
            Some(version) => Box::new(FixedVersion(version)),
            None => Box::new(CommandProbe::new(&config.runtime)),
        };

        Ok(Self {
            locale: Locale::embedded()?,
            config,
            templates,
            runtime,
        })
    }

    pub fn renderer(&self) -> TemplateRenderer<'_> {
        TemplateRenderer::new(self.templates.as_ref(), &self.locale)
    }
}

/// Default answers for the init-project questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDefaults {
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub license: String,
}

impl ManifestDefaults {
    /// Defaults for a project: directory name, `1.0.0`, `MIT`
    pub fn for_project(config: &XpressConfig) -> Self {
        Self {
            name: config.project_name(),
            version: "1.0.0".to_string(),
            author: String::new(),
            description: String::new(),
            license: "MIT".to_string(),
        }
    }
}

/// Ask the init-project questions; blank answers are left out
pub fn ask_manifest(
    ui: &mut dyn Prompter,
    locale: &Locale,
    defaults: &ManifestDefaults,
) -> Result<PackageManifest> {
    let name = ui.ask(
        &locale.t_with("init.project.name", &[("name", defaults.name.as_str())]),
        &defaults.name,
    )?;
    let version = ui.ask(
        &locale.t_with("init.project.version", &[("version", defaults.version.as_str())]),
        &defaults.version,
    )?;
    let author = ui.ask(&locale.t("init.project.author"), &defaults.author)?;
    let description = ui.ask(&locale.t("init.project.description"), &defaults.description)?;
    let license = ui.ask(
        &locale.t_with("init.project.license", &[("license", defaults.license.as_str())]),
        &defaults.license,
    )?;

    Ok(PackageManifest {
        name: non_empty(name),
        version: non_empty(version),
        author: non_empty(author),
        description: non_empty(description),
        license: non_empty(license),
    })
}

/// Interactive or one-shot generation over the configured root
pub struct Session<'a> {
    ctx: &'a Context,
    ui: &'a mut dyn Prompter,
    snapshot: ResourceSnapshot,
}

impl<'a> Session<'a> {
    /// Start with the access check and the initial scan shown as tasks
    pub fn start(ctx: &'a Context, ui: &'a mut dyn Prompter) -> Result<Self> {
        let locale = &ctx.locale;

        run_task(ui, &locale.t("intro.check.repo.rights"), |_| {
            inventory::check_access(&ctx.config.root)?;
            Ok(((), locale.t("check.repo.rights.success")))
        })?;

        let snapshot = run_task(ui, &locale.t("intro.check.repo.resources"), |_| {
            let snapshot = inventory::scan(&ctx.config)?;
            let count = snapshot.resource_count().to_string();
            let message = locale.t_with("check.repo.resources.success", &[("count", count.as_str())]);
            Ok((snapshot, message))
        })?;

        Ok(Self { ctx, ui, snapshot })
    }

    /// Start with a silent scan
    pub fn open(ctx: &'a Context, ui: &'a mut dyn Prompter) -> Result<Self> {
        let snapshot = inventory::scan(&ctx.config)?;
        Ok(Self { ctx, ui, snapshot })
    }

    pub fn snapshot(&self) -> &ResourceSnapshot {
        &self.snapshot
    }

    pub fn ui(&mut self) -> &mut dyn Prompter {
        &mut *self.ui
    }

    fn rescan(&mut self) -> Result<()> {
        self.snapshot = inventory::scan(&self.ctx.config)?;
        Ok(())
    }

    /// Descriptor for `kind` against the current snapshot
    pub fn descriptor(&self, kind: ResourceKind) -> ResourceDescriptor {
        ResourceDescriptor::from_snapshot(kind, &self.snapshot, &self.ctx.config, &self.ctx.locale)
    }

    fn attempt<G>(
        &mut self,
        descriptor: &ResourceDescriptor,
        generate: G,
        fallback: Option<Fallback<'_>>,
    ) -> Result<Outcome>
    where
        G: FnOnce(&mut dyn Prompter) -> Result<String>,
    {
        let outcome = GenerationOrchestrator::new(&mut *self.ui, &self.ctx.locale)
            .generate(descriptor, generate, fallback)?;
        if matches!(outcome, Outcome::Generated(_)) {
            self.rescan()?;
        }
        Ok(outcome)
    }

    /// Generate `package.json` from the init-project answers
    pub fn init_project(&mut self, defaults: &ManifestDefaults) -> Result<Outcome> {
        let ctx = self.ctx;
        let descriptor = self.descriptor(ResourceKind::Manifest);
        let target = ctx.config.root.join(&descriptor.name);

        self.attempt(
            &descriptor,
            |ui| {
                let manifest = ask_manifest(ui, &ctx.locale, defaults)?;
                manifest.write_to(&target)?;
                let path = target.display().to_string();
                Ok(ctx.locale.t_with("init.project.success", &[("path", path.as_str())]))
            },
            None,
        )
    }

    /// Render the `Dockerfile` for the detected runtime version
    pub fn add_container_file(&mut self) -> Result<Outcome> {
        let ctx = self.ctx;
        let descriptor = self.descriptor(ResourceKind::ContainerFile);
        let target = ctx.config.root.join(&descriptor.name);

        self.attempt(
            &descriptor,
            |_| {
                let version = resolve_version(ctx.runtime.as_ref())?;
                ctx.renderer().render(&TemplateSubstitution::new(
                    DOCKERFILE_TEMPLATE,
                    &target,
                    VERSION_TOKEN,
                    version,
                ))
            },
            None,
        )
    }

    /// Copy a linter's config file into the root
    pub fn add_lint_config(&mut self, linter: Linter) -> Result<Outcome> {
        let ctx = self.ctx;
        let descriptor = self.descriptor(ResourceKind::LintConfig(linter));
        let target = ctx.config.root.join(&descriptor.name);

        self.attempt(
            &descriptor,
            |_| ctx.renderer().copy(linter.config_file(), &target),
            None,
        )
    }

    /// Render one model, controller or route module
    pub fn add_module(&mut self, kind: ModuleKind, name: &str) -> Result<Outcome> {
        let name = validate_module_name(name)?;
        let descriptor = self.descriptor(ResourceKind::Module(kind, name.clone()));
        self.attempt_module(kind, &name, &descriptor, None)
    }

    /// Render the model, controller and route of one name in turn
    ///
    /// Declining one overwrite keeps that file and moves on to the next.
    pub fn add_all_modules(&mut self, name: &str) -> Result<Vec<Outcome>> {
        let name = validate_module_name(name)?;
        let mut outcomes = Vec::with_capacity(ModuleKind::ALL.len());

        for kind in ModuleKind::ALL {
            let descriptor = self.descriptor(ResourceKind::Module(kind, name.clone()));
            let skipped = self
                .ctx
                .locale
                .t_with("resource.skipped", &[("resourceName", descriptor.name.as_str())]);
            let fallback: Fallback<'_> = Box::new(move |ui: &mut dyn Prompter| {
                ui.print_styled(&format!(" - {skipped}"), TextStyle::Dim);
                Ok(Outcome::Skipped)
            });
            outcomes.push(self.attempt_module(kind, &name, &descriptor, Some(fallback))?);
        }

        Ok(outcomes)
    }

    fn attempt_module(
        &mut self,
        kind: ModuleKind,
        name: &str,
        descriptor: &ResourceDescriptor,
        fallback: Option<Fallback<'_>>,
    ) -> Result<Outcome> {
        let ctx = self.ctx;
        let target = ctx.config.root.join(&descriptor.name);

        self.attempt(
            descriptor,
            |_| {
                ensure_parent_dir(&target)?;
                ctx.renderer().render(&TemplateSubstitution::new(
                    kind.template(),
                    &target,
                    NAME_TOKEN,
                    name,
                ))
            },
            fallback,
        )
    }

    /// Print the current snapshot
    pub fn show_resources(&mut self) {
        let locale = &self.ctx.locale;
        let snapshot = &self.snapshot;
        let presence = |present: bool| {
            if present {
                locale.t("show.resources.present")
            } else {
                locale.t("show.resources.missing")
            }
        };
        let modules = |names: &[String]| {
            if names.is_empty() {
                locale.t("show.resources.none")
            } else {
                names.join(", ")
            }
        };

        let lines = [
            format!("package.json: {}", presence(snapshot.has_package_manifest)),
            format!(".env: {}", presence(snapshot.has_env_file)),
            format!("Dockerfile: {}", presence(snapshot.has_container_file)),
            format!(
                "lint config: {}",
                if snapshot.has_lint_config {
                    snapshot.lint_configs.join(", ")
                } else {
                    presence(false)
                }
            ),
            format!(
                "{}: {}",
                self.ctx.config.entry_point,
                presence(snapshot.has_entry_point)
            ),
            format!("models: {}", modules(&snapshot.models)),
            format!("controllers: {}", modules(&snapshot.controllers)),
            format!("routes: {}", modules(&snapshot.routes)),
        ];

        self.ui
            .print_styled(&locale.t("show.resources.title"), TextStyle::Title);
        for line in &lines {
            self.ui.print_styled(&format!("  {line}"), TextStyle::Plain);
        }
    }
}

/// Report a non-fatal error on the result line and keep the session going
pub fn report_recoverable(ui: &mut dyn Prompter, err: &XpressError) {
    ui.print_result(false, &err.to_string());
}
