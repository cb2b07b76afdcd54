//! Interactive main menu

use crate::config::XpressConfig;
use crate::error::{Result, XpressError};
use crate::i18n::Locale;
use crate::resource::{Linter, ModuleKind};
use crate::session::{Context, ManifestDefaults, Session, report_recoverable};
use crate::ui::{InquirePrompter, Prompter, TextStyle};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    InitProject,
    AddResource,
    AddDockerfile,
    AddLinter,
    ShowResources,
    Exit,
}

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 6] = [
        MainMenuItem::InitProject,
        MainMenuItem::AddResource,
        MainMenuItem::AddDockerfile,
        MainMenuItem::AddLinter,
        MainMenuItem::ShowResources,
        MainMenuItem::Exit,
    ];

    fn label_key(self) -> &'static str {
        match self {
            MainMenuItem::InitProject => "mainMenu.init.project",
            MainMenuItem::AddResource => "mainMenu.add.resource",
            MainMenuItem::AddDockerfile => "mainMenu.add.dockerFile",
            MainMenuItem::AddLinter => "mainMenu.add.linter",
            MainMenuItem::ShowResources => "mainMenu.show.resources",
            MainMenuItem::Exit => "mainMenu.exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceMenuItem {
    Single(ModuleKind),
    All,
}

impl ResourceMenuItem {
    const ALL: [ResourceMenuItem; 4] = [
        ResourceMenuItem::Single(ModuleKind::Model),
        ResourceMenuItem::Single(ModuleKind::Controller),
        ResourceMenuItem::Single(ModuleKind::Route),
        ResourceMenuItem::All,
    ];

    fn label_key(self) -> &'static str {
        match self {
            ResourceMenuItem::Single(kind) => kind.label_key(),
            ResourceMenuItem::All => "resource.add.all",
        }
    }
}

/// Show a localized menu and map the choice back to its item
fn choose<T: Copy>(
    ui: &mut dyn Prompter,
    locale: &Locale,
    prompt_key: &str,
    items: &[T],
    label_key: impl Fn(T) -> &'static str,
) -> Result<Option<T>> {
    let labels: Vec<String> = items.iter().map(|item| locale.t(label_key(*item))).collect();
    let choice = ui.select(&locale.t(prompt_key), &labels)?;
    Ok(choice.and_then(|index| items.get(index).copied()))
}

/// Run the interactive session on the terminal
pub fn run(config: XpressConfig) -> Result<()> {
    let ctx = Context::new(config, None)?;
    let mut ui = InquirePrompter::with_menu_help(ctx.locale.t("menu.help"));
    run_with(&ctx, &mut ui)
}

/// Run the interactive session on any prompter
///
/// Returns once the user picks exit or backs out of the main menu.
pub fn run_with(ctx: &Context, ui: &mut dyn Prompter) -> Result<()> {
    let locale = &ctx.locale;
    ui.print_styled(&locale.t("intro.title"), TextStyle::Banner);
    ui.print_styled(&locale.t("intro.description"), TextStyle::Dim);

    let mut session = Session::start(ctx, ui)?;

    while let Some(item) = choose(
        session.ui(),
        locale,
        "select.option",
        &MainMenuItem::ALL,
        MainMenuItem::label_key,
    )? {
        tracing::debug!(?item, "main menu choice");
        match item {
            MainMenuItem::InitProject => {
                session.init_project(&ManifestDefaults::for_project(&ctx.config))?;
            }
            MainMenuItem::AddResource => add_resource(&mut session, locale)?,
            MainMenuItem::AddDockerfile => {
                session.add_container_file()?;
            }
            MainMenuItem::AddLinter => {
                if let Some(linter) =
                    choose(session.ui(), locale, "linter.select", &Linter::ALL, Linter::label_key)?
                {
                    session.add_lint_config(linter)?;
                }
            }
            MainMenuItem::ShowResources => session.show_resources(),
            MainMenuItem::Exit => break,
        }
    }

    session.ui().print_styled(&locale.t("goodbye"), TextStyle::Dim);
    Ok(())
}

fn add_resource(session: &mut Session<'_>, locale: &Locale) -> Result<()> {
    let Some(choice) = choose(
        session.ui(),
        locale,
        "resource.select",
        &ResourceMenuItem::ALL,
        ResourceMenuItem::label_key,
    )?
    else {
        return Ok(());
    };

    let name = session.ui().ask(&locale.t("resource.name"), "")?;
    let result = match choice {
        ResourceMenuItem::Single(kind) => session.add_module(kind, &name).map(drop),
        ResourceMenuItem::All => session.add_all_modules(&name).map(drop),
    };

    match result {
        Err(err @ XpressError::InvalidResourceName { .. }) => {
            report_recoverable(session.ui(), &err);
            Ok(())
        }
        other => other,
    }
}
