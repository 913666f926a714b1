//! Dialogue generation contract for the ROSE Online table editors.
//!
//! Table editing tools fill empty dialogue cells from an external
//! text-producing capability. That capability has real latency and real
//! failure modes, so this crate pins down the seam without binding to any
//! transport: a [`DialogueBackend`] produces text for a prompt, and
//! [`generate`] drives it with bounded retry — transient failures back off
//! exponentially, rejections fail the one request immediately, and either
//! way only that request is lost, never the batch it came from.
//!
//! Choosing between backends (a chat completion service, a bespoke
//! assistant, a canned corpus in tests) is choosing which implementation to
//! pass in.

pub mod error;

use std::time::Duration;

use tracing::{instrument, warn};

use crate::error::{BackendError, Error, Result};

/// A request for one generated dialogue line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueRequest {
    /// The character's role, e.g. "blacksmith"
    pub role: String,

    /// The character's name
    pub name: String,

    /// Optional scene context woven into the prompt
    pub context: Option<String>,
}

impl DialogueRequest {
    pub fn new(role: impl Into<String>, name: impl Into<String>) -> DialogueRequest {
        DialogueRequest {
            role: role.into(),
            name: name.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> DialogueRequest {
        self.context = Some(context.into());
        self
    }

    /// The prompt handed to the backend.
    pub fn prompt(&self) -> String {
        let mut prompt = format!(
            "You are a role-playing game character named {}, who is a {} in the world of Rose Online.",
            self.name, self.role
        );
        if let Some(context) = &self.context {
            prompt.push_str(&format!(" Context: {context}"));
        }
        prompt.push_str(" Generate an engaging dialogue line appropriate for your role.");
        prompt
    }
}

/// An opaque text-producing capability.
pub trait DialogueBackend {
    /// Produce one line of text for the prompt.
    fn generate(&mut self, prompt: &str) -> core::result::Result<String, BackendError>;
}

/// How long to keep retrying a transient backend failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts before giving up
    pub max_attempts: u32,

    /// Delay before the second attempt; doubles on every further attempt
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    fn delay_before(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Request one dialogue line, retrying transient failures.
///
/// Transport and service errors are retried up to the policy's budget with
/// exponential backoff; a rejection fails the request immediately. The
/// request is synchronous — callers batching over many cells simply skip a
/// failed cell and continue.
#[instrument(skip(backend), err)]
pub fn generate(
    backend: &mut dyn DialogueBackend,
    request: &DialogueRequest,
    policy: &RetryPolicy,
) -> Result<String> {
    let prompt = request.prompt();
    let mut last = None;

    for attempt in 0..policy.max_attempts {
        match backend.generate(&prompt) {
            Ok(text) => return Ok(text.trim().to_string()),
            Err(error) if error.is_transient() => {
                let wait = policy.delay_before(attempt);
                warn!(%error, attempt, ?wait, "backend failure, retrying");
                std::thread::sleep(wait);
                last = Some(error);
            }
            Err(error) => return Err(Error::Backend(error)),
        }
    }

    Err(Error::RetriesExhausted {
        attempts: policy.max_attempts,
        last: last.expect("at least one attempt must have failed"),
    })
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::{generate, DialogueBackend, DialogueRequest, RetryPolicy};
    use crate::error::{BackendError, Error};

    struct ScriptedBackend {
        responses: Vec<core::result::Result<String, BackendError>>,
        calls: u32,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<core::result::Result<String, BackendError>>) -> ScriptedBackend {
            ScriptedBackend {
                responses,
                calls: 0,
            }
        }
    }

    impl DialogueBackend for ScriptedBackend {
        fn generate(&mut self, _prompt: &str) -> core::result::Result<String, BackendError> {
            self.calls += 1;
            self.responses.remove(0)
        }
    }

    fn immediate() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::ZERO,
        }
    }

    #[test]
    fn prompt_includes_context_when_present() {
        let request = DialogueRequest::new("blacksmith", "Garn");
        assert!(!request.prompt().contains("Context:"));

        let request = request.with_context("the city gate at night");
        let prompt = request.prompt();
        assert!(prompt.contains("named Garn"));
        assert!(prompt.contains("a blacksmith"));
        assert!(prompt.contains("Context: the city gate at night"));
    }

    #[test]
    fn transient_failures_are_retried() {
        let mut backend = ScriptedBackend::new(vec![
            Err(BackendError::Transport("timeout".into())),
            Err(BackendError::Service("overloaded".into())),
            Ok("  Well met, traveller.  ".into()),
        ]);

        let text = generate(
            &mut backend,
            &DialogueRequest::new("guard", "Brina"),
            &immediate(),
        )
        .unwrap();

        assert_eq!(text, "Well met, traveller.");
        assert_eq!(backend.calls, 3);
    }

    #[test]
    fn rejection_fails_immediately() {
        let mut backend = ScriptedBackend::new(vec![
            Err(BackendError::Rejected("content policy".into())),
            Ok("never reached".into()),
        ]);

        let result = generate(
            &mut backend,
            &DialogueRequest::new("guard", "Brina"),
            &immediate(),
        );

        assert!(matches!(result, Err(Error::Backend(_))));
        assert_eq!(backend.calls, 1);
    }

    #[test]
    fn budget_exhaustion_reports_last_error() {
        let mut backend = ScriptedBackend::new(vec![
            Err(BackendError::Transport("1".into()));
            5
        ]);

        let result = generate(
            &mut backend,
            &DialogueRequest::new("guard", "Brina"),
            &immediate(),
        );

        match result {
            Err(Error::RetriesExhausted { attempts, last }) => {
                assert_eq!(attempts, 5);
                assert!(last.is_transient());
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
        assert_eq!(backend.calls, 5);
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before(0), Duration::from_millis(500));
        assert_eq!(policy.delay_before(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_before(2), Duration::from_millis(2000));
    }
}
