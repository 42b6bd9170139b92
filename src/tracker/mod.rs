use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, SystemTime};

use crate::classifier::Classifier;
use crate::error::TrackerError;
use crate::models::{AppUsage, BeneficialPolicy, Category, CategoryUsage, UsageReport};
use crate::platform::ForegroundDetector;

/// Reserved identifier for intervals where no foreground application could
/// be determined (lock screen, detector failure). Absent from every
/// classification table, so it always lands in `Category::Other`.
pub const IDLE_IDENTIFIER: &str = "system.idle";

const SECS_PER_MINUTE: u64 = 60;

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub poll_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// The foreground application seen at the most recent sample.
#[derive(Debug, Clone)]
struct Observation {
    identifier: String,
    seen_at: SystemTime,
}

/// Attributes elapsed wall-clock time to applications and categories.
///
/// `None` inside `current` means no sample has been taken yet; the first
/// `sample` call moves the accumulator into tracking and attributes nothing,
/// since there is no prior interval. Every later call assigns the interval
/// just ended entirely to the application that was foreground when the
/// interval started.
pub struct UsageAccumulator {
    current: Option<Observation>,
    per_app: HashMap<String, Duration>,
    per_category: HashMap<Category, Duration>,
}

impl UsageAccumulator {
    pub fn new() -> Self {
        Self {
            current: None,
            per_app: HashMap::new(),
            per_category: HashMap::new(),
        }
    }

    /// Record one observation of the foreground application.
    ///
    /// Attribution is retrospective: `now - last` belongs to the previously
    /// observed identifier, not to `identifier`. The observation is advanced
    /// even when the application did not change, which bounds every interval
    /// to one tick. A `now` earlier than the previous observation returns
    /// `ClockSkew` and leaves all state untouched.
    pub fn sample(
        &mut self,
        identifier: Option<&str>,
        now: SystemTime,
        classifier: &Classifier,
    ) -> Result<(), TrackerError> {
        let observed = match identifier {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => IDLE_IDENTIFIER.to_string(),
        };

        if let Some(previous) = &self.current {
            let elapsed =
                now.duration_since(previous.seen_at)
                    .map_err(|_| TrackerError::ClockSkew {
                        last: previous.seen_at,
                        now,
                    })?;

            let category = classifier.classify(Some(&previous.identifier));
            *self
                .per_app
                .entry(previous.identifier.clone())
                .or_insert(Duration::ZERO) += elapsed;
            *self.per_category.entry(category).or_insert(Duration::ZERO) += elapsed;

            log::debug!(
                "attributed {:?} to {} ({})",
                elapsed,
                previous.identifier,
                category.name()
            );
        }

        self.current = Some(Observation {
            identifier: observed,
            seen_at: now,
        });
        Ok(())
    }

    /// Build the minute-granularity report. Read-only; callable at any time,
    /// including before the first sample (empty report). Seconds below a
    /// full minute are truncated, not rounded.
    pub fn snapshot(&self, classifier: &Classifier, policy: &BeneficialPolicy) -> UsageReport {
        let apps = self
            .per_app
            .iter()
            .map(|(identifier, duration)| {
                let category = classifier.classify(Some(identifier));
                (
                    identifier.clone(),
                    AppUsage {
                        minutes: duration.as_secs() / SECS_PER_MINUTE,
                        category,
                        is_beneficial: policy.is_beneficial(category),
                        display_label: category.display_label().to_string(),
                    },
                )
            })
            .collect();

        let categories = Category::ALL
            .iter()
            .filter_map(|category| {
                self.per_category.get(category).map(|duration| CategoryUsage {
                    category: *category,
                    minutes: duration.as_secs() / SECS_PER_MINUTE,
                    is_beneficial: policy.is_beneficial(*category),
                })
            })
            .collect();

        UsageReport { apps, categories }
    }

    /// Total attributed time across apps; equals the per-category total.
    pub fn total_attributed(&self) -> Duration {
        self.per_app.values().sum()
    }

    #[cfg(test)]
    fn per_category_total(&self) -> Duration {
        self.per_category.values().sum()
    }
}

impl Default for UsageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the accumulator from a periodic poll of the platform detector and
/// answers snapshot queries from other threads.
///
/// The polling thread is the only writer; one mutex guards the whole
/// accumulator so a concurrent `screen_time` call never sees the per-app and
/// per-category maps out of step. Sleeping between samples means a slow tick
/// delays the next one rather than queueing stale samples.
pub struct TrackerService {
    config: TrackerConfig,
    running: Arc<AtomicBool>,
    state: Arc<Mutex<UsageAccumulator>>,
    classifier: Arc<Classifier>,
    policy: BeneficialPolicy,
    detector: Arc<dyn ForegroundDetector>,
}

impl TrackerService {
    pub fn new(
        detector: Arc<dyn ForegroundDetector>,
        classifier: Arc<Classifier>,
        policy: BeneficialPolicy,
        config: TrackerConfig,
    ) -> Self {
        Self {
            config,
            running: Arc::new(AtomicBool::new(false)),
            state: Arc::new(Mutex::new(UsageAccumulator::new())),
            classifier,
            policy,
            detector,
        }
    }

    pub fn start(&self) -> thread::JoinHandle<()> {
        self.running.store(true, Ordering::SeqCst);

        let running = Arc::clone(&self.running);
        let state = Arc::clone(&self.state);
        let classifier = Arc::clone(&self.classifier);
        let detector = Arc::clone(&self.detector);
        let config = self.config.clone();

        thread::spawn(move || {
            log::info!(
                "tracker started, polling every {:?}",
                config.poll_interval
            );

            while running.load(Ordering::SeqCst) {
                let foreground = detector.foreground_application();
                let now = SystemTime::now();

                if let Ok(mut accumulator) = state.lock() {
                    if let Err(err) =
                        accumulator.sample(foreground.as_deref(), now, &classifier)
                    {
                        log::warn!("dropping sample: {err}");
                    }
                }

                thread::sleep(config.poll_interval);
            }

            log::info!("tracker stopped");
        })
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Snapshot query. Never fails; a poisoned lock yields an empty report
    /// rather than propagating the panic to the caller.
    pub fn screen_time(&self) -> UsageReport {
        match self.state.lock() {
            Ok(accumulator) => accumulator.snapshot(&self.classifier, &self.policy),
            Err(err) => {
                log::error!("accumulator lock poisoned: {err}");
                UsageReport::default()
            }
        }
    }
}
