//! Simulated progress indicator.
//!
//! The remote call reports no progress, so the indicator creeps forward by a
//! random step on every tick, walks through phase labels and stalls below
//! 100 until the request settles.

use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Stage shown next to the progress bar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Nothing in flight
    #[default]
    #[display("")]
    Idle,
    /// Below 25%
    #[display("Phase 1: Encrypting & Uploading...")]
    Uploading,
    /// 25% to 50%
    #[display("Phase 2: Scanning Content...")]
    Scanning,
    /// 50% to 75% with live trends on
    #[display("Phase 3: Hunting Live Trends...")]
    HuntingTrends,
    /// 50% to 75% without live trends
    #[display("Phase 3: Analyzing Algorithms...")]
    Analyzing,
    /// Above 75%
    #[display("Phase 4: Finalizing Strategy...")]
    Finalizing,
    /// Request settled
    #[display("Complete")]
    Complete,
}

impl Phase {
    /// Whether a request is running in this phase.
    pub fn is_active(&self) -> bool {
        !matches!(self, Phase::Idle | Phase::Complete)
    }
}

/// One reading of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Percentage in `[0, 100]`
    pub value: f64,
    /// Current stage
    pub phase: Phase,
    /// Ticker run that produced this reading; 0 when none
    pub run: u64,
}

impl Progress {
    /// Value rounded to a whole percent.
    pub fn percent(&self) -> u8 {
        self.value.clamp(0.0, 100.0).round() as u8
    }
}

/// `[progress]` configuration section.
///
/// # Examples
///
/// ```
/// use socialseo_form::ProgressConfig;
///
/// let config = ProgressConfig::default();
/// assert_eq!(*config.tick_ms(), 500);
/// assert_eq!(*config.ceiling(), 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ProgressConfig {
    /// Milliseconds between ticks
    tick_ms: u64,
    /// Highest value reached while in flight
    ceiling: f64,
    /// Upper bound (exclusive) of the random step
    max_step: f64,
    /// Milliseconds the indicator stays at 100 after settling
    reset_delay_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_ms: 500,
            ceiling: 90.0,
            max_step: 5.0,
            reset_delay_ms: 500,
        }
    }
}

impl ProgressConfig {
    /// Config with explicit values. The ceiling is clamped below 100.
    pub fn new(tick_ms: u64, ceiling: f64, max_step: f64, reset_delay_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            ceiling: ceiling.clamp(0.0, 99.0),
            max_step,
            reset_delay_ms,
        }
    }
}

/// Random step in `[0, max_step)`; zero when `max_step` is not positive.
pub fn random_step(max_step: f64) -> f64 {
    if max_step.is_nan() || max_step <= 0.0 {
        return 0.0;
    }
    rand::thread_rng().gen_range(0.0..max_step)
}

/// Apply one tick.
///
/// The phase follows the uncapped value; the stored value is capped at
/// `ceiling`. Exact thresholds keep the previous phase.
///
/// # Examples
///
/// ```
/// use socialseo_form::{Phase, Progress, advance};
///
/// let start = Progress { value: 24.0, phase: Phase::Uploading, run: 1 };
/// let next = advance(start, 3.0, 90.0, false);
/// assert_eq!(next.value, 27.0);
/// assert_eq!(next.phase, Phase::Scanning);
///
/// let stalled = advance(Progress { value: 89.0, ..next }, 4.0, 90.0, false);
/// assert_eq!(stalled.value, 90.0);
/// assert_eq!(stalled.phase, Phase::Finalizing);
/// ```
pub fn advance(current: Progress, step: f64, ceiling: f64, live_trends: bool) -> Progress {
    let raw = current.value + step.max(0.0);
    let phase = if raw > 75.0 {
        Phase::Finalizing
    } else if raw > 50.0 && raw < 75.0 {
        if live_trends {
            Phase::HuntingTrends
        } else {
            Phase::Analyzing
        }
    } else if raw > 25.0 && raw < 50.0 {
        Phase::Scanning
    } else {
        current.phase
    };

    Progress {
        value: raw.min(ceiling),
        phase,
        run: current.run,
    }
}

/// Cancelable periodic task driving one request's progress.
///
/// Settling (explicitly or by dropping) stops the task, jumps to 100 and
/// schedules a reset to 0 unless another run has taken over in the meantime.
#[derive(Debug)]
pub struct ProgressTicker {
    tx: Arc<watch::Sender<Progress>>,
    token: CancellationToken,
    run: u64,
    reset_delay: Duration,
    settled: bool,
}

impl ProgressTicker {
    /// Reset the indicator for `run` and start ticking.
    ///
    /// Must be called within a tokio runtime.
    pub fn start(
        tx: Arc<watch::Sender<Progress>>,
        run: u64,
        config: &ProgressConfig,
        live_trends: bool,
        token: CancellationToken,
    ) -> Self {
        tx.send_replace(Progress {
            value: 0.0,
            phase: Phase::Uploading,
            run,
        });

        let period = Duration::from_millis(config.tick_ms.max(1));
        let ceiling = config.ceiling.clamp(0.0, 99.0);
        let max_step = config.max_step;
        let task_tx = tx.clone();
        let task_token = token.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = interval.tick() => {
                        let step = random_step(max_step);
                        task_tx.send_if_modified(|p| {
                            if p.run != run || !p.phase.is_active() {
                                return false;
                            }
                            *p = advance(*p, step, ceiling, live_trends);
                            trace!(run, value = p.value, phase = %p.phase, "Progress tick");
                            true
                        });
                    }
                }
            }
            debug!(run, "Progress ticker stopped");
        });

        Self {
            tx,
            token,
            run,
            reset_delay: Duration::from_millis(config.reset_delay_ms),
            settled: false,
        }
    }

    /// Run identifier.
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Stop ticking and show completion.
    pub fn finish(mut self) {
        self.settle();
    }

    fn settle(&mut self) {
        if self.settled {
            return;
        }
        self.settled = true;
        self.token.cancel();

        let run = self.run;
        let completed = self.tx.send_if_modified(|p| {
            if p.run != run {
                return false;
            }
            *p = Progress {
                value: 100.0,
                phase: Phase::Complete,
                run,
            };
            true
        });
        if !completed {
            return;
        }

        let tx = self.tx.clone();
        let reset = move || {
            tx.send_if_modified(|p| {
                if p.run != run || p.phase != Phase::Complete {
                    return false;
                }
                *p = Progress {
                    value: 0.0,
                    phase: Phase::Idle,
                    run,
                };
                true
            });
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let delay = self.reset_delay;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    reset();
                });
            }
            Err(_) => reset(),
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.settle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_step_stays_in_range() {
        for _ in 0..1000 {
            let step = random_step(5.0);
            assert!((0.0..5.0).contains(&step));
        }
        assert_eq!(random_step(0.0), 0.0);
        assert_eq!(random_step(-1.0), 0.0);
        assert_eq!(random_step(f64::NAN), 0.0);
    }

    #[test]
    fn phases_follow_thresholds() {
        let mut p = Progress {
            value: 0.0,
            phase: Phase::Uploading,
            run: 1,
        };
        p = advance(p, 25.0, 90.0, true);
        assert_eq!(p.phase, Phase::Uploading);
        p = advance(p, 1.0, 90.0, true);
        assert_eq!(p.phase, Phase::Scanning);
        p = advance(p, 25.0, 90.0, true);
        assert_eq!(p.phase, Phase::HuntingTrends);
        p = advance(p, 24.0, 90.0, true);
        assert_eq!(p.phase, Phase::HuntingTrends);
        p = advance(p, 0.5, 90.0, true);
        assert_eq!(p.phase, Phase::Finalizing);
    }

    #[test]
    fn analyzing_label_without_live_trends() {
        let p = advance(
            Progress {
                value: 49.0,
                phase: Phase::Scanning,
                run: 1,
            },
            2.0,
            90.0,
            false,
        );
        assert_eq!(p.phase, Phase::Analyzing);
        assert_eq!(p.phase.to_string(), "Phase 3: Analyzing Algorithms...");
    }

    #[test]
    fn value_never_exceeds_ceiling() {
        let mut p = Progress {
            value: 0.0,
            phase: Phase::Uploading,
            run: 1,
        };
        for _ in 0..200 {
            p = advance(p, random_step(5.0), 90.0, false);
            assert!(p.value <= 90.0);
        }
        assert_eq!(p.percent(), 90);
    }

    #[test]
    fn config_clamps_ceiling_below_100() {
        let config = ProgressConfig::new(0, 150.0, 5.0, 0);
        assert_eq!(*config.ceiling(), 99.0);
        assert_eq!(*config.tick_ms(), 1);
    }
}
