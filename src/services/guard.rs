use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::error::SubmitError;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Pending,
}

/// Blocks re-entry while a submission is in flight.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    pending: AtomicBool,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        if self.pending.load(Ordering::Acquire) {
            SubmissionState::Pending
        } else {
            SubmissionState::Idle
        }
    }

    /// Moves to `Pending`. The state falls back to `Idle` when the returned
    /// ticket is dropped.
    pub fn begin(&self) -> Result<PendingSubmission<'_>, SubmitError> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmitError::AlreadyPending)?;

        Ok(PendingSubmission { guard: self })
    }
}

pub struct PendingSubmission<'a> {
    guard: &'a SubmissionGuard,
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        self.guard.pending.store(false, Ordering::Release);
    }
}
