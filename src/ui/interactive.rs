//! Prompter implementations backed by the real terminal

use console::Style;
use inquire::{Confirm, Select, Text};

use super::{Prompter, TextStyle};
use crate::error::Result;

fn style_for(style: TextStyle) -> Style {
    match style {
        TextStyle::Plain => Style::new(),
        TextStyle::Title => Style::new().cyan().bold(),
        TextStyle::Banner => Style::new().red().bold(),
        TextStyle::Dim => Style::new().dim(),
        TextStyle::Success => Style::new().green(),
        TextStyle::Failure => Style::new().red(),
    }
}

fn print_line(text: &str, style: TextStyle) {
    println!("{}", style_for(style).apply_to(text));
}

/// Interactive prompter using `inquire` widgets
#[derive(Debug, Default)]
pub struct InquirePrompter {
    help: Option<String>,
}

impl InquirePrompter {
    /// Prompter showing `help` under every menu
    pub fn with_menu_help(help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
        }
    }
}

impl Prompter for InquirePrompter {
    fn print_styled(&mut self, text: &str, style: TextStyle) {
        print_line(text, style);
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }

        let mut select = Select::new(prompt, items.to_vec())
            .with_starting_cursor(0)
            .with_page_size(10)
            .without_filtering();
        if let Some(help) = &self.help {
            select = select.with_help_message(help);
        }

        Ok(select.raw_prompt_skippable()?.map(|choice| choice.index))
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = Confirm::new(question)
            .with_default(true)
            .prompt_skippable()?;
        Ok(answer.unwrap_or(false))
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        let mut text = Text::new(question);
        if !default.is_empty() {
            text = text.with_default(default);
        }
        let answer = text.prompt_skippable()?.unwrap_or_default();
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

/// Prompter for one-shot subcommands
///
/// Questions take their default answer and overwrite confirmations answer
/// `assume_yes`. Menus are never shown.
#[derive(Debug, Clone, Copy)]
pub struct NonInteractivePrompter {
    assume_yes: bool,
}

impl NonInteractivePrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for NonInteractivePrompter {
    fn print_styled(&mut self, text: &str, style: TextStyle) {
        print_line(text, style);
    }

    fn select(&mut self, _prompt: &str, _items: &[String]) -> Result<Option<usize>> {
        Ok(None)
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = if self.assume_yes { "yes" } else { "no" };
        print_line(&format!("{question} {answer}"), TextStyle::Dim);
        Ok(self.assume_yes)
    }

    fn ask(&mut self, _question: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_answers() {
        let mut declining = NonInteractivePrompter::new(false);
        assert!(!declining.confirm("Overwrite?").unwrap());
        assert_eq!(declining.ask("Name", "demo").unwrap(), "demo");
        assert_eq!(
            declining.select("Pick", &["a".to_string()]).unwrap(),
            None
        );

        let mut accepting = NonInteractivePrompter::new(true);
        assert!(accepting.confirm("Overwrite?").unwrap());
    }

    #[test]
    fn test_select_without_items() {
        let mut prompter = InquirePrompter::default();
        assert_eq!(prompter.select("Pick", &[]).unwrap(), None);
    }
}
