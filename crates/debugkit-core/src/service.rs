//! The observable owner of one log.

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error, trace};

use crate::error::{LogError, StorageError};
use crate::expiration::ExpirationInterval;
use crate::log::Log;
use crate::recordable::Recordable;
use crate::store::LogStore;

/// The sole mutator and observable owner of a [`Log`].
///
/// A service mediates producer inserts, applies the expiration policy,
/// and persists every committed mutation to its storage backend when one
/// is attached. Observers subscribe to a watch channel carrying the log
/// state; the service is the only writer, so the single-owner model holds
/// and stores are applied strictly in mutation order.
///
/// Enablement and persistence are orthogonal: a disabled service keeps its
/// existing entries and still honors removals, and a service without a
/// backend accepts inserts that simply stay in memory.
pub struct LogService<Item: Recordable>
where
    Item::Record: Clone,
{
    storage: Option<Box<dyn LogStore<Item::Record>>>,
    log: Log<Item::Record>,
    expiration_interval: ExpirationInterval,
    enabled: bool,
    observers: watch::Sender<Log<Item::Record>>,
}

impl<Item: Recordable> LogService<Item>
where
    Item::Record: Clone,
{
    /// Create an ephemeral service: empty log, no persistence.
    pub fn new() -> Self {
        let log = Log::new();
        Self {
            storage: None,
            observers: watch::Sender::new(log.clone()),
            log,
            expiration_interval: ExpirationInterval::default(),
            enabled: true,
        }
    }

    /// Create a durable service backed by `storage`.
    ///
    /// Any previously stored log is adopted and immediately trimmed against
    /// the expiration policy, so no observer ever sees expired state.
    /// Confirmed absence of stored data starts the service empty; a genuine
    /// retrieval failure (unreadable, corrupt, or undecryptable data) fails
    /// construction outward.
    pub async fn with_storage<S>(storage: S) -> Result<Self, StorageError>
    where
        S: LogStore<Item::Record> + 'static,
    {
        let expiration_interval = ExpirationInterval::default();
        let mut log = storage.retrieve().await?.unwrap_or_default();
        expiration_interval.trim(&mut log, Utc::now());
        debug!(entries = log.len(), "adopted stored log");

        Ok(Self {
            storage: Some(Box::new(storage)),
            observers: watch::Sender::new(log.clone()),
            log,
            expiration_interval,
            enabled: true,
        })
    }

    /// The current log state, newest entries first.
    pub fn log(&self) -> &Log<Item::Record> {
        &self.log
    }

    /// Subscribe to log state changes.
    ///
    /// The receiver holds the state as of the latest committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<Log<Item::Record>> {
        self.observers.subscribe()
    }

    /// Whether the service currently accepts new records.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable acceptance of new records.
    ///
    /// Disabling does not clear existing entries.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The active expiration policy.
    pub fn expiration_interval(&self) -> ExpirationInterval {
        self.expiration_interval
    }

    /// Replace the expiration policy. Takes effect on the next insert.
    pub fn set_expiration_interval(&mut self, interval: ExpirationInterval) {
        self.expiration_interval = interval;
    }

    /// Record one item.
    ///
    /// No-op while the service is disabled. Otherwise expired entries are
    /// trimmed first, then the item's record is inserted at the front and
    /// the mutation is committed.
    pub async fn insert(&mut self, item: Item) {
        if !self.enabled {
            trace!("service disabled, dropping record");
            return;
        }

        self.expiration_interval.trim(&mut self.log, Utc::now());
        self.log.insert(item.into_record());
        self.commit().await;
    }

    /// Remove the entries at the given logical offsets.
    ///
    /// Fails without mutating if any offset is out of range.
    pub async fn remove_at_offsets(&mut self, offsets: &[usize]) -> Result<(), LogError> {
        self.log.remove_at_offsets(offsets)?;
        self.commit().await;
        Ok(())
    }

    /// Remove all entries.
    pub async fn clear(&mut self) {
        self.log.clear();
        self.commit().await;
    }

    /// Persist the current log and publish it to observers.
    ///
    /// A store failure is reported and the in-memory log stays
    /// authoritative; it never propagates to the mutating caller and never
    /// rolls back state.
    async fn commit(&mut self) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.store(&self.log).await {
                error!(error = %err, "failed to persist updated log");
            }
        }

        self.observers.send_replace(self.log.clone());
    }
}

impl<Item: Recordable> Default for LogService<Item>
where
    Item::Record: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
