//! Interactive confirmation as an injectable capability.

/// Yes/no confirmation. Handlers and the mutator take this as a parameter so
/// tests can supply a fixed answer without a terminal.
pub trait Confirm {
    /// Ask the user to confirm `prompt`; `false` means decline.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Terminal-backed confirmation. A closed stdin or prompt error counts as a
/// decline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&self, prompt: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
