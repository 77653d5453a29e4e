//! Asynchronous waitlist submit flow.
//!
//! [`submit_waitlist`] sequences the [`WaitlistForm`] transitions around the
//! (simulated) network call and the success display window. It is generic over
//! four seams so the same flow runs in the browser and in native tests:
//!
//! - [`FormStore`] - where the form lives (a Leptos signal, a `RefCell`, ...)
//! - [`Submitter`] - the transport; only [`SimulatedSubmitter`] ships
//! - [`Delay`] - a timer future (`setTimeout` in the browser)
//! - [`Notifier`] - toast sink
//!
//! There is a single submission at a time: the form refuses `begin_submit`
//! outside `Idle`.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Timings;
use crate::notify::{Notice, Notifier};
use crate::waitlist::{WaitlistError, WaitlistForm, WaitlistSubmission};

/// Transport failure reported by a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The waitlist service could not take the submission
    #[error("waitlist service unavailable: {0}")]
    Unavailable(String),
}

/// Access to the form owned by the page component.
pub trait FormStore {
    /// Run `f` against the form. Returns `None` once the owner is gone (the
    /// component was unmounted), in which case `f` is not called.
    fn with_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<WaitlistForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<S: FormStore + ?Sized> FormStore for &S {
    fn with_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R> {
        (**self).with_form(f)
    }
}

/// Timer future source.
pub trait Delay {
    /// Resolve after `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<D: Delay + ?Sized> Delay for &D {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}

/// Delivers a validated submission somewhere.
pub trait Submitter {
    /// Send `submission`.
    fn submit(
        &self,
        submission: &WaitlistSubmission,
    ) -> impl Future<Output = Result<(), SubmitError>>;
}

impl<S: Submitter + ?Sized> Submitter for &S {
    async fn submit(&self, submission: &WaitlistSubmission) -> Result<(), SubmitError> {
        (**self).submit(submission).await
    }
}

/// Stand-in for a network call: waits a fixed latency, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter<D> {
    delay: D,
    latency: Duration,
}

impl<D: Delay> SimulatedSubmitter<D> {
    /// Submitter that resolves after `latency` using `delay`.
    pub fn new(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

impl<D: Delay> Submitter for SimulatedSubmitter<D> {
    async fn submit(&self, submission: &WaitlistSubmission) -> Result<(), SubmitError> {
        debug!(
            apartment_type = ?submission.apartment_type,
            wants_updates = submission.wants_updates,
            latency_ms = self.latency.as_millis() as u64,
            "simulating waitlist request"
        );
        self.delay.sleep(self.latency).await;
        Ok(())
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReport {
    /// Validation failed; one error notice was emitted
    Rejected,
    /// A submission was already running; nothing happened
    Ignored,
    /// Accepted, success panel shown and the form reset afterwards
    Subscribed,
    /// The submitter failed; one error notice was emitted, fields kept
    Failed,
    /// The form went away mid-flight; completion dropped without a notice
    Discarded,
}

/// Run one submit attempt end to end.
///
/// Emits exactly one notice for `Rejected`, `Subscribed` and `Failed`, none for
/// `Ignored` and `Discarded`.
pub async fn submit_waitlist<St, Su, D, N>(
    store: &St,
    submitter: &Su,
    delay: &D,
    notifier: &N,
    timings: &Timings,
) -> SubmitReport
where
    St: FormStore + ?Sized,
    Su: Submitter,
    D: Delay,
    N: Notifier + ?Sized,
{
    let submission = match store.with_form(WaitlistForm::begin_submit) {
        None => return SubmitReport::Discarded,
        Some(Err(WaitlistError::Busy)) => {
            debug!("submit ignored, form busy");
            return SubmitReport::Ignored;
        }
        Some(Err(err @ WaitlistError::MissingRequiredFields)) => {
            notifier.notify(Notice::error(err.to_string()));
            return SubmitReport::Rejected;
        }
        Some(Ok(submission)) => submission,
    };

    let outcome = submitter.submit(&submission).await;
    let succeeded = outcome.is_ok();

    let Some(notice) = store.with_form(|form| form.finish_submit(outcome)) else {
        debug!("form disposed during submission, dropping completion");
        return SubmitReport::Discarded;
    };
    notifier.notify(notice);

    if !succeeded {
        return SubmitReport::Failed;
    }

    delay.sleep(timings.success_display()).await;
    if store.with_form(WaitlistForm::reset_after_display).is_none() {
        return SubmitReport::Discarded;
    }
    info!("waitlist success panel dismissed");
    SubmitReport::Subscribed
}
