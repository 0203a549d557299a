use crate::core::cart::CartStore;
use crate::core::observer::notify_observers;
use crate::domain::model::{CartEntry, EntryId};
use crate::domain::ports::{CartObserver, CartService};
use crate::utils::error::{EcoCartError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cart shared between screens, serialized behind one mutex.
///
/// Observers run after the lock is released, so they may read the cart
/// through a clone of this handle.
#[derive(Clone, Default)]
pub struct SharedCart {
    store: Arc<Mutex<CartStore>>,
    observers: Arc<Mutex<Vec<Arc<dyn CartObserver>>>>,
}

impl SharedCart {
    pub fn new(store: CartStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn subscribe(&self, observer: Arc<dyn CartObserver>) -> Result<()> {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, CartStore>> {
        self.store.lock().map_err(|_| EcoCartError::CartUnavailable)
    }

    fn observers(&self) -> Vec<Arc<dyn CartObserver>> {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 在鎖內複製通知內容，鎖釋放後才呼叫觀察者
    fn mutate(&self, change: impl FnOnce(&mut CartStore) -> bool) -> Result<bool> {
        let pending = {
            let mut store = self.lock()?;
            if !change(&mut store) {
                return Ok(false);
            }
            let observers = self.observers();
            if observers.is_empty() {
                return Ok(true);
            }
            (observers, store.snapshot(), store.aggregate_score())
        };

        let (observers, snapshot, aggregate) = pending;
        notify_observers(&observers, &snapshot, aggregate);
        Ok(true)
    }

    pub fn add_entry(&self, entry: CartEntry) -> Result<bool> {
        self.mutate(|store| store.add(entry))
    }

    pub fn remove_entry(&self, id: EntryId) -> Result<bool> {
        self.mutate(|store| store.remove(id))
    }

    pub fn current_score(&self) -> Result<f64> {
        Ok(self.lock()?.aggregate_score())
    }

    pub fn entries(&self) -> Result<Vec<CartEntry>> {
        Ok(self.lock()?.snapshot())
    }
}

#[async_trait]
impl CartService for SharedCart {
    async fn add(&self, entry: CartEntry) -> Result<bool> {
        self.add_entry(entry)
    }

    async fn remove(&self, id: EntryId) -> Result<bool> {
        self.remove_entry(id)
    }

    async fn aggregate_score(&self) -> Result<f64> {
        self.current_score()
    }

    async fn snapshot(&self) -> Result<Vec<CartEntry>> {
        self.entries()
    }
}
