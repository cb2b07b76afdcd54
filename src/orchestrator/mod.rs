//! Overwrite-confirmation gate in front of every generation
//!
//! One attempt moves through these states:
//!
//! ```text
//! Checked --exists--> Confirming --yes--> Generating --ok--> Done
//!    |                    |                   |
//!    +--missing-----------)---------> Generating  +--err--> Failed
//!                         +--no--> Declined (fallback or back to menu)
//! ```
//!
//! Generation only runs when the resource is missing or the user said yes.
//! A failed generation is reported and then returned as an error; the
//! command layer terminates the process with it.

use crate::error::Result;
use crate::i18n::Locale;
use crate::resource::ResourceDescriptor;
use crate::ui::{Prompter, TextStyle};

/// How one generation attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resource was written; carries the success message
    Generated(String),
    /// Overwrite declined and no fallback supplied
    Declined,
    /// Overwrite declined and the fallback ran instead
    Skipped,
}

/// Continuation run when the user declines an overwrite
pub type Fallback<'f> = Box<dyn FnOnce(&mut dyn Prompter) -> Result<Outcome> + 'f>;

/// Decides between confirming, generating and falling back
pub struct GenerationOrchestrator<'a> {
    ui: &'a mut dyn Prompter,
    locale: &'a Locale,
}

impl<'a> GenerationOrchestrator<'a> {
    pub fn new(ui: &'a mut dyn Prompter, locale: &'a Locale) -> Self {
        Self { ui, locale }
    }

    /// Run one generation attempt for `descriptor`
    ///
    /// `generate` receives the prompter so it can ask follow-up questions and
    /// returns the success message of the write.
    pub fn generate<G>(
        &mut self,
        descriptor: &ResourceDescriptor,
        generate: G,
        fallback: Option<Fallback<'_>>,
    ) -> Result<Outcome>
    where
        G: FnOnce(&mut dyn Prompter) -> Result<String>,
    {
        if descriptor.exists && !self.confirm_overwrite(descriptor)? {
            tracing::debug!(resource = %descriptor.name, "overwrite declined");
            return match fallback {
                Some(fallback) => fallback(&mut *self.ui),
                None => Ok(Outcome::Declined),
            };
        }

        run_task(&mut *self.ui, &descriptor.prompt_message, |ui| {
            let message = generate(ui)?;
            Ok((message.clone(), message))
        })
        .map(Outcome::Generated)
    }

    fn confirm_overwrite(&mut self, descriptor: &ResourceDescriptor) -> Result<bool> {
        let question = self
            .locale
            .t_with("resource.overwrite", &[("resourceName", descriptor.name.as_str())]);
        self.ui.confirm(&question)
    }
}

/// Print a title, run a task, and print its result line
///
/// Errors are reported with the failure glyph and then returned.
pub fn run_task<T, F>(ui: &mut dyn Prompter, title: &str, task: F) -> Result<T>
where
    F: FnOnce(&mut dyn Prompter) -> Result<(T, String)>,
{
    ui.print_styled(title, TextStyle::Title);
    match task(ui) {
        Ok((value, message)) => {
            ui.print_result(true, &message);
            Ok(value)
        }
        Err(err) => {
            ui.print_result(false, &err.to_string());
            Err(err)
        }
    }
}
