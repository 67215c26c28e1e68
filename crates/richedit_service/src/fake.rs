use crate::fixtures::seed_records;
use crate::ContentService;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use richedit_core::constants::{
    DEFAULT_SAVE_FAILURE_RATE, MSG_CONTENT_NOT_FOUND, MSG_SIMULATED_SAVE_FAILURE,
};
use richedit_core::{Config, ContentRecord, ContentSummary, ServiceError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

const OFFLINE_DETAIL: &str = "content service unreachable";

/// Behaviour knobs for [`FakeContentService`].
#[derive(Debug, Clone, PartialEq)]
pub struct FakeServiceOptions {
    pub load_latency: Duration,
    pub save_latency: Duration,
    /// Probability in `[0, 1]` that a save is refused.
    pub save_failure_rate: f64,
    /// When set, every call fails with a transport error.
    pub offline: bool,
    /// Fixed RNG seed for reproducible failures.
    pub seed: Option<u64>,
}

impl Default for FakeServiceOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for FakeServiceOptions {
    fn from(config: &Config) -> Self {
        Self {
            load_latency: config.load_latency(),
            save_latency: config.save_latency(),
            save_failure_rate: config.save_failure_rate,
            offline: config.offline,
            seed: None,
        }
    }
}

impl FakeServiceOptions {
    /// Options with no latency and no random failures.
    pub fn instant() -> Self {
        Self {
            load_latency: Duration::ZERO,
            save_latency: Duration::ZERO,
            save_failure_rate: 0.0,
            offline: false,
            seed: None,
        }
    }

    pub fn with_load_latency(mut self, latency: Duration) -> Self {
        self.load_latency = latency;
        self
    }

    pub fn with_save_latency(mut self, latency: Duration) -> Self {
        self.save_latency = latency;
        self
    }

    /// Set the save failure probability; out-of-range values are clamped and
    /// non-finite values reset to the default rate.
    pub fn with_save_failure_rate(mut self, rate: f64) -> Self {
        self.save_failure_rate = if rate.is_finite() {
            rate.clamp(0.0, 1.0)
        } else {
            DEFAULT_SAVE_FAILURE_RATE
        };
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// In-memory [`ContentService`] with simulated latency and failures.
///
/// Seeded with the `sample-1` and `sample-2` records. Successful saves are
/// stored, so a later load returns them.
pub struct FakeContentService {
    options: FakeServiceOptions,
    store: Mutex<BTreeMap<String, ContentRecord>>,
    rng: Mutex<StdRng>,
    load_calls: AtomicUsize,
    save_calls: AtomicUsize,
}

impl Default for FakeContentService {
    fn default() -> Self {
        Self::new(FakeServiceOptions::default())
    }
}

impl FakeContentService {
    /// Create a service holding the seed records.
    pub fn new(options: FakeServiceOptions) -> Self {
        Self::with_records(options, seed_records())
    }

    /// Create a service holding exactly `records`.
    pub fn with_records(options: FakeServiceOptions, records: Vec<ContentRecord>) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let store = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            options,
            store: Mutex::new(store),
            rng: Mutex::new(rng),
            load_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FakeServiceOptions::from(config))
    }

    pub fn options(&self) -> &FakeServiceOptions {
        &self.options
    }

    /// Number of `load` calls received.
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    /// Number of `save` calls received.
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the record stored under `id`, bypassing latency.
    pub fn stored(&self, id: &str) -> Option<ContentRecord> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn roll_save_failure(&self) -> bool {
        let rate = self.options.save_failure_rate;
        if rate <= 0.0 {
            return false;
        }
        let roll: f64 = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen();
        roll < rate
    }

    fn offline_error(&self, op: &str) -> Option<ServiceError> {
        if !self.options.offline {
            return None;
        }
        warn!("Content service offline; rejecting {}", op);
        Some(ServiceError::Transport(OFFLINE_DETAIL.to_string()))
    }
}

impl ContentService for FakeContentService {
    async fn load(&self, id: &str) -> Result<ContentRecord, ServiceError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.offline_error("load") {
            return Err(err);
        }
        tokio::time::sleep(self.options.load_latency).await;

        let found = self.stored(id);
        match found {
            Some(record) => {
                debug!(id = %record.id, "Loaded content");
                Ok(record)
            }
            None => {
                debug!(id = %id, "Content not found");
                Err(ServiceError::Reported(MSG_CONTENT_NOT_FOUND.to_string()))
            }
        }
    }

    async fn save(&self, record: ContentRecord) -> Result<ContentRecord, ServiceError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.offline_error("save") {
            return Err(err);
        }
        tokio::time::sleep(self.options.save_latency).await;

        if self.roll_save_failure() {
            warn!(id = %record.id, "Simulated save failure");
            return Err(ServiceError::Reported(
                MSG_SIMULATED_SAVE_FAILURE.to_string(),
            ));
        }

        let saved = record.touched(Utc::now());
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(saved.id.clone(), saved.clone());
        debug!(id = %saved.id, title = %saved.title, "Saved content");
        Ok(saved)
    }

    async fn list(&self) -> Result<Vec<ContentSummary>, ServiceError> {
        if let Some(err) = self.offline_error("list") {
            return Err(err);
        }
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(store.values().map(ContentSummary::from).collect())
    }
}
