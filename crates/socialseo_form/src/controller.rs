//! The form controller.

use socialseo_core::{Attachment, Mode, Platform, TargetingFilters, TrendIdea};
use socialseo_error::{ErrorCategory, FormError, FormErrorKind, SocialSeoError};
use socialseo_interface::GenerativeDriver;
use socialseo_strategy::StrategyClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::messages::{GENERATE_FAILED, HUNT_FAILED, user_message};
use crate::{FormState, Progress, ProgressConfig, ProgressTicker};

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SubmissionOutcome {
    /// A result was stored
    #[display("succeeded")]
    Succeeded,
    /// The request failed and an error message was stored
    #[display("failed")]
    Failed,
    /// A precondition failed; nothing was sent
    #[display("rejected")]
    Rejected,
    /// The form moved on while the request ran; the reply was discarded
    #[display("abandoned")]
    Abandoned,
}

#[derive(Debug)]
struct ActiveSubmission {
    id: u64,
    token: CancellationToken,
}

#[derive(Debug, Default)]
struct Inner {
    view: FormState,
    epoch: u64,
    active: Option<ActiveSubmission>,
}

/// Clears the in-flight flag and settles the progress ticker when the
/// submission ends, however it ends.
struct InFlightGuard {
    inner: Arc<Mutex<Inner>>,
    id: u64,
    ticker: Option<ProgressTicker>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.finish();
        }
        let mut inner = lock(&self.inner);
        if inner.active.as_ref().is_some_and(|a| a.id == self.id) {
            inner.active = None;
            inner.view.set_in_flight(false);
            debug!(submission = self.id, "Submission released");
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// What a submission sends once preconditions pass.
enum Job {
    Strategy(socialseo_strategy::StrategyRequest),
    Hunt(String),
}

/// State machine behind the SocialSEO form.
///
/// All methods take `&self`; clones share the same state. The state lock is
/// never held across an await point. At most one request is in flight.
///
/// # Examples
///
/// ```no_run
/// use socialseo_core::{Attachment, Platform};
/// use socialseo_form::FormController;
/// use socialseo_models::GeminiClient;
/// use socialseo_strategy::StrategyClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = StrategyClient::new(GeminiClient::new("my-api-key")?);
/// let form = FormController::new(client);
///
/// form.set_platform(Platform::TikTok);
/// form.add_attachment(Attachment::from_path_guessed("clip.mp4"));
/// form.generate().await;
///
/// let state = form.snapshot();
/// println!("{:?}", state.result());
/// # Ok(())
/// # }
/// ```
pub struct FormController<D> {
    client: Arc<StrategyClient<D>>,
    inner: Arc<Mutex<Inner>>,
    progress: Arc<watch::Sender<Progress>>,
    progress_config: ProgressConfig,
    next_submission: Arc<AtomicU64>,
}

impl<D> Clone for FormController<D> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            inner: self.inner.clone(),
            progress: self.progress.clone(),
            progress_config: self.progress_config.clone(),
            next_submission: self.next_submission.clone(),
        }
    }
}

impl<D> std::fmt::Debug for FormController<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("progress_config", &self.progress_config)
            .finish_non_exhaustive()
    }
}

impl<D: GenerativeDriver> FormController<D> {
    /// Controller with default progress timing.
    pub fn new(client: StrategyClient<D>) -> Self {
        Self::with_progress_config(client, ProgressConfig::default())
    }

    /// Controller with custom progress timing.
    pub fn with_progress_config(client: StrategyClient<D>, progress_config: ProgressConfig) -> Self {
        let (tx, _rx) = watch::channel(Progress::default());
        Self {
            client: Arc::new(client),
            inner: Arc::new(Mutex::new(Inner::default())),
            progress: Arc::new(tx),
            progress_config,
            next_submission: Arc::new(AtomicU64::new(1)),
        }
    }

    /// The strategy client.
    pub fn client(&self) -> &StrategyClient<D> {
        &self.client
    }

    //
    // ─── FIELD SETTERS ──────────────────────────────────────────────────────
    //

    /// Switch mode. Clears result and ideas and abandons any request.
    pub fn set_mode(&self, mode: Mode) {
        let mut inner = lock(&self.inner);
        inner.view.set_mode(mode);
        inner.view.clear_result();
        inner.view.clear_trend_ideas();
        self.abandon(&mut inner);
    }

    /// Switch platform.
    pub fn set_platform(&self, platform: Platform) {
        lock(&self.inner).view.set_platform(platform);
    }

    /// Replace the content files.
    pub fn set_attachments(&self, attachments: Vec<Attachment>) {
        *lock(&self.inner).view.attachments_mut() = attachments;
    }

    /// Append a content file.
    pub fn add_attachment(&self, attachment: Attachment) {
        lock(&self.inner).view.attachments_mut().push(attachment);
    }

    /// Remove every content file.
    pub fn clear_attachments(&self) {
        lock(&self.inner).view.attachments_mut().clear();
    }

    /// Set or clear the brand-guideline file.
    pub fn set_brand_guidelines(&self, brand_guidelines: Option<Attachment>) {
        lock(&self.inner).view.set_brand_guidelines(brand_guidelines);
    }

    /// Edit the targeting filters in place.
    pub fn update_filters<F>(&self, edit: F)
    where
        F: FnOnce(&mut TargetingFilters),
    {
        edit(lock(&self.inner).view.filters_mut());
    }

    /// Replace the targeting filters.
    pub fn set_filters(&self, filters: TargetingFilters) {
        *lock(&self.inner).view.filters_mut() = filters;
    }

    /// Turn live-trend augmentation on or off.
    pub fn set_live_trends(&self, on: bool) {
        lock(&self.inner).view.set_live_trends(on);
    }

    /// Flip live-trend augmentation; returns the new value.
    pub fn toggle_live_trends(&self) -> bool {
        let mut inner = lock(&self.inner);
        let on = !*inner.view.live_trends();
        inner.view.set_live_trends(on);
        on
    }

    /// Seed a creator-mode request from a trend idea.
    ///
    /// Replaces the content files with a single `trend_idea.txt` note.
    pub fn use_trend_idea(&self, idea: &TrendIdea) {
        let mut inner = lock(&self.inner);
        inner.view.set_mode(Mode::Creator);
        inner.view.clear_result();
        inner.view.clear_trend_ideas();
        *inner.view.attachments_mut() = vec![Attachment::text("trend_idea.txt", idea.seed_text())];
        self.abandon(&mut inner);
        info!(idea = %idea.idea_title, "Seeded creator mode from trend idea");
    }

    /// Clear result, ideas and error; abandon any request.
    pub fn reset(&self) {
        let mut inner = lock(&self.inner);
        inner.view.clear_result();
        inner.view.clear_trend_ideas();
        inner.view.clear_error();
        self.abandon(&mut inner);
    }

    //
    // ─── VIEWS ──────────────────────────────────────────────────────────────
    //

    /// Cloned view of the current state.
    pub fn snapshot(&self) -> FormState {
        let mut view = lock(&self.inner).view.clone();
        view.set_progress(*self.progress.borrow());
        view
    }

    /// Receiver for the progress indicator.
    pub fn progress(&self) -> watch::Receiver<Progress> {
        self.progress.subscribe()
    }

    //
    // ─── SUBMISSIONS ────────────────────────────────────────────────────────
    //

    /// Generate a strategy from the current fields.
    ///
    /// Preconditions: a credential, at least one content file unless in
    /// trend-hunter mode, and no request in flight. A failed precondition
    /// sets the error and sends nothing.
    #[instrument(skip(self))]
    pub async fn generate(&self) -> SubmissionOutcome {
        let has_credential = self.client.driver().has_credential();
        let start = {
            let mut inner = lock(&self.inner);
            let precondition = if !has_credential {
                Some(FormErrorKind::MissingApiKey)
            } else if inner.view.mode().requires_content() && inner.view.attachments().is_empty()
            {
                Some(FormErrorKind::NoAttachments)
            } else if inner.active.is_some() {
                Some(FormErrorKind::RequestInFlight)
            } else {
                None
            };

            match precondition {
                Some(kind) => Err(kind),
                None => {
                    inner.view.clear_error();
                    inner.view.clear_result();
                    let request = inner.view.to_request();
                    let live = request.live_trends();
                    Ok(self.begin(&mut inner, live, Job::Strategy(request)))
                }
            }
        };

        match start {
            Err(kind) => self.reject(kind),
            Ok((guard, epoch, job)) => self.run(guard, epoch, job).await,
        }
    }

    /// Hunt trends for the current niche.
    ///
    /// Preconditions: a credential, a non-blank niche, and no request in
    /// flight. Turns live trends on, since hunting is always search-backed.
    #[instrument(skip(self))]
    pub async fn hunt_trends(&self) -> SubmissionOutcome {
        let has_credential = self.client.driver().has_credential();
        let start = {
            let mut inner = lock(&self.inner);
            let niche = inner.view.filters().trimmed_niche().map(str::to_string);
            let precondition = match niche {
                _ if !has_credential => Err(FormErrorKind::MissingApiKey),
                None => Err(FormErrorKind::MissingNiche),
                Some(_) if inner.active.is_some() => Err(FormErrorKind::RequestInFlight),
                Some(niche) => Ok(niche),
            };

            match precondition {
                Err(kind) => Err(kind),
                Ok(niche) => {
                    inner.view.set_live_trends(true);
                    inner.view.clear_error();
                    inner.view.clear_trend_ideas();
                    Ok(self.begin(&mut inner, true, Job::Hunt(niche)))
                }
            }
        };

        match start {
            Err(kind) => self.reject(kind),
            Ok((guard, epoch, job)) => self.run(guard, epoch, job).await,
        }
    }

    /// Mark a submission active and start its ticker. Called with the lock held.
    fn begin(&self, inner: &mut Inner, live_trends: bool, job: Job) -> (InFlightGuard, u64, Job) {
        let id = self.next_submission.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        let ticker = ProgressTicker::start(
            self.progress.clone(),
            id,
            &self.progress_config,
            live_trends,
            token.clone(),
        );

        inner.active = Some(ActiveSubmission { id, token });
        inner.view.set_in_flight(true);
        debug!(submission = id, epoch = inner.epoch, "Submission started");

        let guard = InFlightGuard {
            inner: self.inner.clone(),
            id,
            ticker: Some(ticker),
        };
        (guard, inner.epoch, job)
    }

    async fn run(&self, guard: InFlightGuard, epoch: u64, job: Job) -> SubmissionOutcome {
        let outcome = match job {
            Job::Strategy(request) => {
                let reply = self.client.generate_strategy_grounded(&request).await;
                self.settle(epoch, reply, GENERATE_FAILED, |view, grounded| {
                    view.set_result(grounded.value, grounded.sources)
                })
            }
            Job::Hunt(niche) => {
                let reply = self.client.hunt_trends_grounded(&niche).await;
                self.settle(epoch, reply, HUNT_FAILED, |view, grounded| {
                    view.set_trend_ideas(grounded.value, grounded.sources)
                })
            }
        };
        drop(guard);
        info!(%outcome, "Submission settled");
        outcome
    }

    /// Write exactly one of result or error, unless the epoch moved on.
    fn settle<T, F>(
        &self,
        epoch: u64,
        reply: Result<T, SocialSeoError>,
        fallback: &str,
        store: F,
    ) -> SubmissionOutcome
    where
        F: FnOnce(&mut FormState, T),
    {
        let mut inner = lock(&self.inner);
        if inner.epoch != epoch {
            debug!(
                submitted = epoch,
                current = inner.epoch,
                "Discarding stale completion"
            );
            return SubmissionOutcome::Abandoned;
        }

        match reply {
            Ok(value) => {
                inner.view.clear_error();
                store(&mut inner.view, value);
                SubmissionOutcome::Succeeded
            }
            Err(e) => {
                let category = e.category();
                error!(error = %e, category = %category, "Submission failed");
                inner.view.set_error(user_message(&e, fallback), category);
                SubmissionOutcome::Failed
            }
        }
    }

    fn reject(&self, kind: FormErrorKind) -> SubmissionOutcome {
        let err = SocialSeoError::from(FormError::new(kind));
        warn!(reason = %kind, "Submission rejected");
        lock(&self.inner)
            .view
            .set_error(user_message(&err, GENERATE_FAILED), ErrorCategory::Precondition);
        SubmissionOutcome::Rejected
    }

    /// Drop any in-flight submission: advance the epoch, release the flag
    /// and stop its ticker.
    fn abandon(&self, inner: &mut Inner) {
        inner.epoch += 1;
        if let Some(active) = inner.active.take() {
            active.token.cancel();
            inner.view.set_in_flight(false);
            self.progress.send_replace(Progress::default());
            info!(submission = active.id, epoch = inner.epoch, "Abandoned in-flight submission");
        }
    }
}
