use anyhow::Result;
use dialoguer::Input;

/// Source of answers to yes/no questions
///
/// The terminal implementation reads from stdin; tests script the answers.
pub trait Confirmer {
    /// Ask the question and return the raw answer
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Reads answers typed by the operator
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Only a literal "yes" counts, ignoring case and surrounding whitespace
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
