use crate::error::DetectError;
use crate::model::{DetectionOutcome, MediaSlot, MediaSubmission};
use derive_more::Display;
use uuid::Uuid;

/// Identifies one request attempt so late answers can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct AttemptId(Uuid);

impl AttemptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Pending(AttemptId),
    Resolved(DetectionOutcome),
}

/// UI-local state of the detect page: the selected files and where the
/// current attempt stands.
#[derive(Debug, Clone)]
pub struct DetectSession<F> {
    submission: MediaSubmission<F>,
    phase: Phase,
}

impl<F> Default for DetectSession<F> {
    fn default() -> Self {
        Self {
            submission: MediaSubmission::new(),
            phase: Phase::Idle,
        }
    }
}

impl<F> DetectSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &MediaSubmission<F> {
        &self.submission
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending(_))
    }

    pub fn outcome(&self) -> Option<&DetectionOutcome> {
        match &self.phase {
            Phase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn select(&mut self, slot: MediaSlot, file: F) -> Option<F> {
        self.submission.set(slot, file)
    }

    /// Moves to `Pending` when both files are present and nothing is in
    /// flight.
    pub fn begin(&mut self) -> Result<AttemptId, DetectError> {
        if self.is_pending() {
            return Err(DetectError::Busy);
        }
        self.submission.pair()?;

        let attempt = AttemptId::new();
        self.phase = Phase::Pending(attempt);
        Ok(attempt)
    }

    /// Records the outcome of `attempt`. Returns false and leaves the session
    /// alone if that attempt is no longer the pending one.
    pub fn resolve(&mut self, attempt: AttemptId, outcome: DetectionOutcome) -> bool {
        match self.phase {
            Phase::Pending(current) if current == attempt => {
                self.phase = Phase::Resolved(outcome);
                true
            }
            _ => {
                log::debug!("Discarding outcome of stale attempt {}", attempt);
                false
            }
        }
    }

    /// Clears files and result and returns to `Idle`.
    pub fn dismiss(&mut self) {
        self.submission.clear();
        self.phase = Phase::Idle;
    }
}
