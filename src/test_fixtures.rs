//! Test fixtures and utilities for reducing test setup duplication.
//!
//! ```ignore
//! use crate::test_fixtures::{ScriptedPrompter, create_project};
//!
//! let temp = create_project(&["package.json", "models/User.js"]);
//! let mut ui = ScriptedPrompter::new().confirms(&[false]).answers(&["demo"]);
//! ```

use std::collections::VecDeque;
use std::path::Path;

use tempfile::TempDir;

use crate::error::Result;
use crate::ui::{Prompter, TextStyle};

/// Create a temp directory containing the given files (empty content)
///
/// # Panics
///
/// Panics if the files cannot be created.
#[must_use]
pub fn create_project(files: &[&str]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    for file in files {
        write_file(temp.path(), file, "");
    }
    temp
}

/// Write a file below `root`, creating parent directories
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// Prompter replaying scripted answers and recording everything shown
///
/// Exhausted scripts answer "no" to confirmations, back out of menus, and
/// take the default for questions.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirms: VecDeque<bool>,
    answers: VecDeque<String>,
    selections: VecDeque<Option<usize>>,
    printed: Vec<String>,
    questions: Vec<String>,
    asked: Vec<String>,
    menus: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers for successive confirmations
    pub fn confirms(mut self, answers: &[bool]) -> Self {
        self.confirms.extend(answers);
        self
    }

    /// Typed answers for successive questions; `""` takes the default
    pub fn answers(mut self, answers: &[&str]) -> Self {
        self.answers.extend(answers.iter().map(|a| (*a).to_string()));
        self
    }

    /// Choices for successive menus
    pub fn selections(mut self, choices: &[Option<usize>]) -> Self {
        self.selections.extend(choices);
        self
    }

    /// Every printed line, in order
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// Confirmation questions asked, in order
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Free-text questions asked, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Menu prompts shown, in order
    pub fn menus(&self) -> &[String] {
        &self.menus
    }

    pub fn confirm_count(&self) -> usize {
        self.questions.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn print_styled(&mut self, text: &str, _style: TextStyle) {
        self.printed.push(text.to_string());
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        self.menus.push(prompt.to_string());
        let choice = self.selections.pop_front().flatten();
        Ok(choice.filter(|index| *index < items.len()))
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        self.asked.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Ok(default.to_string()),
        }
    }
}
