use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use course_core::model::ResumeState;

use crate::resume_service::ResumeService;

/// Delay before the resume redirect fires, unless configured otherwise.
pub const DEFAULT_RESUME_DELAY: Duration = Duration::from_millis(1000);

/// Where the startup resume sequence currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumePhase {
    Init,
    Resuming,
    Ready,
}

/// What the shell should do after [`ResumeController::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResumePlan {
    /// Show the shell right away.
    Idle,
    /// Keep the loading screen up for `delay`, then navigate to `state` under
    /// whatever mode is selected at that moment.
    Redirect { state: ResumeState, delay: Duration },
}

/// Startup resume state machine: `Init -> Resuming -> Ready` or `Init -> Ready`.
///
/// `begin` is one-shot per controller. Re-mounting the shell or toggling the
/// view/edit mode never re-arms the redirect.
pub struct ResumeController {
    resume: Arc<ResumeService>,
    delay: Duration,
    armed: AtomicBool,
    phase: Mutex<ResumePhase>,
}

impl ResumeController {
    #[must_use]
    pub fn new(resume: Arc<ResumeService>, delay: Duration) -> Self {
        Self {
            resume,
            delay,
            armed: AtomicBool::new(true),
            phase: Mutex::new(ResumePhase::Init),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn phase(&self) -> ResumePhase {
        self.phase
            .lock()
            .map_or(ResumePhase::Ready, |guard| *guard)
    }

    fn set_phase(&self, next: ResumePhase) {
        if let Ok(mut guard) = self.phase.lock() {
            tracing::debug!(from = ?*guard, to = ?next, "resume phase");
            *guard = next;
        }
    }

    /// Read the persisted state once and decide whether to redirect.
    ///
    /// Storage failures and malformed records both fall back to `Idle`.
    pub async fn begin(&self) -> ResumePlan {
        if !self.armed.swap(false, Ordering::AcqRel) {
            return ResumePlan::Idle;
        }

        match self.resume.load().await {
            Ok(Some(state)) => {
                tracing::info!(
                    module_id = %state.module_id,
                    resource_id = %state.resource_id,
                    delay_ms = self.delay.as_millis(),
                    "resuming last session"
                );
                self.set_phase(ResumePhase::Resuming);
                ResumePlan::Redirect {
                    state,
                    delay: self.delay,
                }
            }
            Ok(None) => {
                self.set_phase(ResumePhase::Ready);
                ResumePlan::Idle
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot read last-viewed state; starting idle");
                self.set_phase(ResumePhase::Ready);
                ResumePlan::Idle
            }
        }
    }

    /// Mark the deferred redirect as delivered.
    pub fn finish(&self) {
        self.set_phase(ResumePhase::Ready);
    }
}
