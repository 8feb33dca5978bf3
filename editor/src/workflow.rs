//! Editor workflow.
//!
//! Owns the draft buffer and the word count, and runs every user action
//! through the same pipeline: text utilities on input, quota policy before
//! the network, transformation client while `Submitting`. The buffer
//! mutates at most once per submit, and only on success.
//!
//! ## Flow
//!
//! - type/paste: buffer updated through the word budget, stays `Idle`
//! - submit: policy decides synchronously; a rejection surfaces a notice
//!   and never touches the network
//! - allowed: `Idle` -> `Submitting` -> one request -> `Idle`
//! - success replaces the buffer and recomputes the count together;
//!   failure leaves the buffer exactly as it was

use tracing::warn;
use writing::{count_words, limit_to_max_words, policy, text, Limited, Profile, TransformMode};

use crate::api::{ApiError, TransformApi};
use crate::clipboard::{ClipboardError, ClipboardSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// The in-memory text buffer. `word_count` always equals
/// `count_words(&content)`; both change together or not at all.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    content: String,
    word_count: usize,
}

impl Draft {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    fn set(&mut self, limited: Limited) {
        self.content = limited.text;
        self.word_count = limited.count;
    }

    fn replace(&mut self, content: String) {
        self.word_count = count_words(&content);
        self.content = content;
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Refused by the quota policy; no request was made.
    Rejected(policy::Denial),
    /// Transformation applied, buffer replaced.
    Completed,
    /// Request failed; buffer untouched.
    Failed(ApiError),
    /// A request is already in flight.
    Busy,
}

pub struct Editor<A> {
    api: A,
    draft: Draft,
    phase: Phase,
    notice: Option<String>,
}

impl<A: TransformApi> Editor<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            draft: Draft::default(),
            phase: Phase::Idle,
            notice: None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current user-facing notice, if one is showing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Replace the buffer with typed input, capped at the hard word
    /// ceiling.
    pub fn set_text(&mut self, input: &str) {
        self.draft.set(limit_to_max_words(input, policy::MAX_WORDS));
    }

    /// Merge clipboard content onto the buffer.
    pub fn paste<C: ClipboardSource>(&mut self, clipboard: &mut C) -> Result<(), ClipboardError> {
        let pasted = clipboard.read_text().map_err(|e| {
            self.notice = Some(e.to_string());
            e
        })?;

        match text::merge_clipboard(&self.draft.content, &pasted, policy::MAX_WORDS) {
            Ok(limited) => {
                self.draft.set(limited);
                Ok(())
            }
            Err(empty) => {
                self.notice = Some(empty.to_string());
                Err(empty.into())
            }
        }
    }

    /// Run one transformation under `profile` (signup defaults when no
    /// profile has loaded).
    pub async fn submit(&mut self, mode: TransformMode, profile: Option<&Profile>) -> SubmitOutcome {
        if self.phase == Phase::Submitting {
            return SubmitOutcome::Busy;
        }

        if let Err(denial) = policy::evaluate(profile, &self.draft.content, self.draft.word_count) {
            self.notice = Some(denial.to_string());
            return SubmitOutcome::Rejected(denial);
        }

        self.phase = Phase::Submitting;
        let result = self.api.transform(mode, &self.draft.content).await;
        self.phase = Phase::Idle;

        match result {
            Ok(cleaned) => {
                self.draft.replace(cleaned);
                SubmitOutcome::Completed
            }
            Err(e) => {
                warn!("transformation failed: {e}");
                self.notice = Some(e.to_string());
                SubmitOutcome::Failed(e)
            }
        }
    }
}
