use crate::core::cart::CartStore;
use crate::core::observer::notify_observers;
use crate::domain::model::{CartEntry, EntryId};
use crate::domain::ports::{CartObserver, CartService};
use crate::utils::error::{EcoCartError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

enum CartCommand {
    Add {
        entry: CartEntry,
        resp_tx: oneshot::Sender<bool>,
    },
    Remove {
        id: EntryId,
        resp_tx: oneshot::Sender<bool>,
    },
    Aggregate {
        resp_tx: oneshot::Sender<f64>,
    },
    Snapshot {
        resp_tx: oneshot::Sender<Vec<CartEntry>>,
    },
}

/// Owns the cart on a single task; every command is handled in arrival order.
pub struct CartActor {
    store: CartStore,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl CartActor {
    pub fn new(store: CartStore) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn CartObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// 啟動背景任務；所有 handle 被丟棄後任務結束並交回購物車
    pub fn spawn(self, capacity: usize) -> (CartHandle, JoinHandle<CartStore>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let task = tokio::spawn(self.run(rx));
        (CartHandle { tx }, task)
    }

    async fn run(mut self, mut rx: mpsc::Receiver<CartCommand>) -> CartStore {
        tracing::debug!("Cart task started");
        while let Some(command) = rx.recv().await {
            self.handle(command);
        }
        tracing::debug!("Cart task stopped with {} entries", self.store.len());
        self.store
    }

    fn handle(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add { entry, resp_tx } => {
                let added = self.store.add(entry);
                if added {
                    self.notify();
                }
                let _ = resp_tx.send(added);
            }
            CartCommand::Remove { id, resp_tx } => {
                let removed = self.store.remove(id);
                if removed {
                    self.notify();
                }
                let _ = resp_tx.send(removed);
            }
            CartCommand::Aggregate { resp_tx } => {
                let _ = resp_tx.send(self.store.aggregate_score());
            }
            CartCommand::Snapshot { resp_tx } => {
                let _ = resp_tx.send(self.store.snapshot());
            }
        }
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.store.snapshot();
        let aggregate = self.store.aggregate_score();
        notify_observers(&self.observers, &snapshot, aggregate);
    }
}

/// Cloneable sender side of a [`CartActor`].
#[derive(Clone)]
pub struct CartHandle {
    tx: mpsc::Sender<CartCommand>,
}

impl CartHandle {
    async fn send_command<T>(
        &self,
        cmd_generator: impl FnOnce(oneshot::Sender<T>) -> CartCommand,
    ) -> Result<T> {
        let (resp_tx, resp_rx) = oneshot::channel();
        self.tx
            .send(cmd_generator(resp_tx))
            .await
            .map_err(|_| EcoCartError::CartUnavailable)?;
        resp_rx.await.map_err(|_| EcoCartError::CartUnavailable)
    }
}

#[async_trait]
impl CartService for CartHandle {
    async fn add(&self, entry: CartEntry) -> Result<bool> {
        self.send_command(|resp_tx| CartCommand::Add { entry, resp_tx })
            .await
    }

    async fn remove(&self, id: EntryId) -> Result<bool> {
        self.send_command(|resp_tx| CartCommand::Remove { id, resp_tx })
            .await
    }

    async fn aggregate_score(&self) -> Result<f64> {
        self.send_command(|resp_tx| CartCommand::Aggregate { resp_tx })
            .await
    }

    async fn snapshot(&self) -> Result<Vec<CartEntry>> {
        self.send_command(|resp_tx| CartCommand::Snapshot { resp_tx })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductInfo;

    fn entry(name: &str, score: f64) -> CartEntry {
        CartEntry::new(ProductInfo::new(name, "img", "desc"), score).unwrap()
    }

    struct PanickingObserver;

    impl CartObserver for PanickingObserver {
        fn cart_changed(&self, _snapshot: &[CartEntry], _aggregate_score: f64) {
            panic!("render failed");
        }
    }

    #[tokio::test]
    async fn test_panicking_observer_keeps_actor_alive() {
        let (handle, task) = CartActor::new(CartStore::new())
            .with_observer(Arc::new(PanickingObserver))
            .spawn(DEFAULT_CHANNEL_CAPACITY);

        assert!(handle.add(entry("Tofu", 0.81)).await.unwrap());
        assert!(handle.add(entry("Cashews", 0.22)).await.unwrap());
        assert!((handle.aggregate_score().await.unwrap() - 5.15).abs() < 1e-9);
        drop(handle);

        assert_eq!(task.await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_actor_returns_store_when_handles_dropped() {
        let (handle, task) = CartActor::new(CartStore::new()).spawn(DEFAULT_CHANNEL_CAPACITY);

        assert!(handle.add(entry("Tofu", 0.81)).await.unwrap());
        assert!(!handle.add(entry("Tofu", 0.1)).await.unwrap());
        drop(handle);

        let store = task.await.unwrap();
        assert_eq!(store.len(), 1);
    }
}
