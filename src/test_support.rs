//! Shared test doubles.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::net::completion::{CompletionClient, CompletionError};

/// Completion client that replays scripted outcomes and records prompts.
/// Once the script runs out every call answers `"done"`.
pub struct ScriptedClient {
    outcomes: RefCell<VecDeque<Result<String, CompletionError>>>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedClient {
    pub fn with(outcomes: Vec<Result<String, CompletionError>>) -> Self {
        Self { outcomes: RefCell::new(outcomes.into()), prompts: RefCell::default() }
    }
}

#[async_trait::async_trait(?Send)]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.borrow_mut().push(prompt.to_owned());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("done".to_owned()))
    }
}
