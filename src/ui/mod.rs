//! Terminal presentation layer
//!
//! All interaction goes through the [`Prompter`] trait, allowing different
//! implementations based on how xpress was started:
//! - [`interactive::InquirePrompter`] for the menu-driven session
//! - [`interactive::NonInteractivePrompter`] for one-shot subcommands, where
//!   questions take their defaults and confirmations answer a fixed value

pub mod interactive;

use crate::error::Result;

pub use interactive::{InquirePrompter, NonInteractivePrompter};

/// Visual style of a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    /// Section or task title
    Title,
    /// Banner shown at startup
    Banner,
    Dim,
    Success,
    Failure,
}

/// Prompt and display operations the generation engine depends on
pub trait Prompter {
    /// Print one line of text in the given style
    fn print_styled(&mut self, text: &str, style: TextStyle);

    /// Single-column menu; `None` when the user backs out
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Yes/no question
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Free-text question; an empty answer yields `default`
    fn ask(&mut self, question: &str, default: &str) -> Result<String>;

    /// One-line status with a success or failure glyph
    fn print_result(&mut self, success: bool, message: &str) {
        if success {
            self.print_styled(&format!(" ✔ {message}"), TextStyle::Success);
        } else {
            self.print_styled(&format!(" ✖ {message}"), TextStyle::Failure);
        }
    }
}
